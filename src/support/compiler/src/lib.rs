mod compiler;
mod options;

pub use compiler::Compiler;
pub use options::{BuildOptions, RunMode};
