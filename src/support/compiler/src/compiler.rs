use crate::BuildOptions;
use diagnostics::Diagnostics;

pub struct Compiler<'a> {
    pub options: BuildOptions,
    pub diagnostics: &'a Diagnostics,
}

impl<'a> Compiler<'a> {
    pub fn new(options: BuildOptions, diagnostics: &'a Diagnostics) -> Self {
        Self {
            options,
            diagnostics,
        }
    }

    pub fn compiler_name(&self) -> &str {
        &self.options.compiler
    }

    pub fn library_flag(&self) -> &str {
        &self.options.library_flag
    }
}
