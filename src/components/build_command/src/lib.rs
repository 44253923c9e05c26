mod launch;

use compiler::Compiler;
use derive_more::Deref;
use diagnostics::WarningDiagnostic;
use itertools::Itertools;
use resolve_deps::Resolution;
use std::{fmt::Display, path::Path};

pub use launch::{LaunchError, launch};

/// Argument vector for the compiler, program name first
#[derive(Clone, Debug, PartialEq, Eq, Deref)]
pub struct CompileCommand {
    #[deref]
    argv: Vec<String>,
}

impl CompileCommand {
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }
}

impl Display for CompileCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.argv.iter().join(" "))
    }
}

/// `cc -o <output> <object>... -l<library>...`
pub fn build_command(compiler: &Compiler, root: &str, resolution: &Resolution) -> CompileCommand {
    let mut argv = Vec::with_capacity(3 + resolution.objects.len() + resolution.libraries.len());

    argv.push(compiler.compiler_name().to_string());
    argv.push("-o".into());
    argv.push(output_name(root));
    argv.extend(resolution.objects.iter().cloned());

    for library in resolution.libraries.iter() {
        if is_flag_like(library) {
            compiler.diagnostics.push(WarningDiagnostic::plain(format!(
                "library '{library}' looks like a flag, linking it as '{}{library}'",
                compiler.library_flag()
            )));
        }

        argv.push(format!("{}{}", compiler.library_flag(), library));
    }

    CompileCommand { argv }
}

/// Root path with its final extension removed
pub fn output_name(root: &str) -> String {
    Path::new(root)
        .with_extension("")
        .to_string_lossy()
        .into_owned()
}

fn is_flag_like(string: &str) -> bool {
    string.trim_start().starts_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use compiler::BuildOptions;
    use diagnostics::{DiagnosticFlags, Diagnostics};
    use indexmap::IndexSet;

    fn set(items: &[&str]) -> IndexSet<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    fn resolution(objects: &[&str], libraries: &[&str]) -> Resolution {
        Resolution {
            dependencies: IndexSet::new(),
            objects: set(objects),
            libraries: set(libraries),
        }
    }

    #[test]
    fn orders_objects_then_libraries() {
        let diagnostics = Diagnostics::new(DiagnosticFlags::collecting());
        let compiler = Compiler::new(BuildOptions::default(), &diagnostics);

        let command = build_command(
            &compiler,
            "vmk.c",
            &resolution(&["vmk.o", "preproc.o"], &["libx.so", "m"]),
        );

        assert_eq!(
            *command,
            ["cc", "-o", "vmk", "vmk.o", "preproc.o", "-llibx.so", "-lm"]
        );
        assert_eq!(command.program(), "cc");
        assert_eq!(command.to_string(), "cc -o vmk vmk.o preproc.o -llibx.so -lm");
        assert!(diagnostics.messages().is_empty());
    }

    #[test]
    fn uses_configured_compiler() {
        let diagnostics = Diagnostics::new(DiagnosticFlags::collecting());
        let options = BuildOptions {
            compiler: "clang".into(),
            ..Default::default()
        };
        let compiler = Compiler::new(options, &diagnostics);

        let command = build_command(&compiler, "main.c", &resolution(&["main.o"], &[]));
        assert_eq!(command.args(), ["-o", "main", "main.o"]);
        assert_eq!(command.program(), "clang");
    }

    #[test]
    fn warns_about_flag_like_libraries() {
        let diagnostics = Diagnostics::new(DiagnosticFlags::collecting());
        let compiler = Compiler::new(BuildOptions::default(), &diagnostics);

        let command = build_command(&compiler, "main.c", &resolution(&[], &["-lm"]));
        assert_eq!(command.args(), ["-o", "main", "-l-lm"]);

        let messages = diagnostics.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("looks like a flag"));
    }

    #[test]
    fn strips_only_the_final_extension() {
        assert_eq!(output_name("main.c"), "main");
        assert_eq!(output_name("src/app.test.c"), "src/app.test");
        assert_eq!(output_name("build.d/main"), "build.d/main");
        assert_eq!(output_name("Makefile"), "Makefile");
        assert_eq!(output_name(".profile"), ".profile");
    }

    #[test]
    fn trailing_separators_do_not_confuse_extension() {
        assert_eq!(output_name("a.c/"), "a");
        assert_eq!(output_name("x.é//"), "x");
        assert_eq!(output_name("ünï.cœ"), "ünï");
    }
}
