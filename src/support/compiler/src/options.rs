use derive_more::IsVariant;

#[derive(Clone, Debug)]
pub struct BuildOptions {
    pub compiler: String,
    pub library_flag: String,
    pub run_mode: RunMode,
    pub show_progress: bool,
}

// Whether the finished command is actually executed
#[derive(Copy, Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum RunMode {
    Execute,
    DryRun,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            compiler: "cc".into(),
            library_flag: "-l".into(),
            run_mode: RunMode::Execute,
            show_progress: true,
        }
    }
}
