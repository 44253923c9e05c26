mod build;
mod help;

pub use build::BuildCommand;
use enum_dispatch::enum_dispatch;
pub use help::{HelpCommand, USAGE};

#[enum_dispatch(Invoke)]
#[derive(Clone, Debug)]
pub enum Command {
    Help(HelpCommand),
    Build(BuildCommand),
}

impl Command {
    pub fn parse() -> Result<Self, ()> {
        Self::parse_from(std::env::args().skip(1))
    }

    pub fn parse_from(args: impl IntoIterator<Item = String>) -> Result<Self, ()> {
        let args = Vec::from_iter(args);

        // Help wins wherever it appears among the options
        let mut options = args.iter();
        while let Some(option) = options.next() {
            match option.as_str() {
                "-h" | "--help" => return Ok(HelpCommand.into()),
                "--cc" => {
                    options.next();
                }
                "--" => break,
                _ => (),
            }
        }

        BuildCommand::parse(args.into_iter()).map(Self::from)
    }
}

#[enum_dispatch]
pub trait Invoke {
    fn invoke(self) -> Result<(), ()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use compiler::RunMode;

    fn parse(args: &[&str]) -> Result<Command, ()> {
        Command::parse_from(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn help() {
        assert!(matches!(parse(&["-h"]), Ok(Command::Help(_))));
        assert!(matches!(parse(&["main.c", "--help"]), Ok(Command::Help(_))));
    }

    #[test]
    fn help_after_separator_is_a_file() {
        let Ok(Command::Build(build)) = parse(&["--", "-h"]) else {
            panic!("expected build command");
        };
        assert_eq!(build.filenames, ["-h"]);
    }

    #[test]
    fn compiler_name_is_not_an_option() {
        let Ok(Command::Build(build)) = parse(&["--cc", "-h", "main.c"]) else {
            panic!("expected build command");
        };

        assert_eq!(build.options.compiler, "-h");
        assert_eq!(build.filenames, ["main.c"]);
        assert!(matches!(parse(&["--cc", "--", "-h"]), Ok(Command::Help(_))));
    }

    #[test]
    fn build_with_options() {
        let Ok(Command::Build(build)) = parse(&["-n", "-q", "--cc", "clang", "a.c", "b.c"]) else {
            panic!("expected build command");
        };

        assert_eq!(build.filenames, ["a.c", "b.c"]);
        assert_eq!(build.options.compiler, "clang");
        assert_eq!(build.options.run_mode, RunMode::DryRun);
        assert!(!build.options.show_progress);
    }

    #[test]
    fn defaults() {
        let Ok(Command::Build(build)) = parse(&["main.c"]) else {
            panic!("expected build command");
        };

        assert_eq!(build.options.compiler, "cc");
        assert_eq!(build.options.run_mode, RunMode::Execute);
        assert!(build.options.show_progress);
    }

    #[test]
    fn usage_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["-x", "main.c"]).is_err());
        assert!(parse(&["main.c", "--cc"]).is_err());
        assert!(parse(&["-n"]).is_err());
    }
}
