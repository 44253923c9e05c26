use super::BuildCommand;
use crate::Invoke;
use build_command::{CompileCommand, build_command, launch};
use compiler::Compiler;
use diagnostics::{DiagnosticFlags, Diagnostics, ErrorDiagnostic};
use resolve_deps::{FileSystem, SourceOpener, resolve};

impl Invoke for BuildCommand {
    fn invoke(self) -> Result<(), ()> {
        let BuildCommand { filenames, options } = self;

        let diagnostics = Diagnostics::new(DiagnosticFlags {
            show_progress: options.show_progress,
            ..Default::default()
        });

        let compiler = Compiler::new(options, &diagnostics);

        // The first root that fails stops the whole run
        for filename in filenames.iter() {
            let command = prepare(&compiler, filename, &FileSystem)?;
            println!("$ {command}");

            if compiler.options.run_mode.is_execute() {
                launch(&command)
                    .map_err(|error| diagnostics.push(ErrorDiagnostic::plain(error)))?;
            }
        }

        Ok(())
    }
}

fn prepare(
    compiler: &Compiler,
    root: &str,
    opener: &impl SourceOpener,
) -> Result<CompileCommand, ()> {
    let resolution = resolve(root, opener, compiler.diagnostics)
        .map_err(|error| compiler.diagnostics.push(ErrorDiagnostic::from(error)))?;

    Ok(build_command(compiler, root, &resolution))
}
