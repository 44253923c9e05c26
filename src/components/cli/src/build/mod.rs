use compiler::BuildOptions;
mod invoke;
mod parse;

#[derive(Clone, Debug)]
pub struct BuildCommand {
    pub filenames: Vec<String>,
    pub options: BuildOptions,
}
