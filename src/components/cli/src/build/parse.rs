use super::BuildCommand;
use crate::USAGE;
use compiler::{BuildOptions, RunMode};

impl BuildCommand {
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ()> {
        let mut filenames = Vec::new();
        let mut options = BuildOptions::default();

        while let Some(option) = args.next() {
            match option.as_str() {
                "-n" | "--dry-run" => options.run_mode = RunMode::DryRun,
                "-q" | "--quiet" => options.show_progress = false,
                "--cc" => {
                    let Some(compiler) = args.next() else {
                        eprintln!("error: Expected compiler name after '--cc'");
                        return Err(());
                    };

                    options.compiler = compiler;
                }
                "--" => {
                    filenames.extend(args.by_ref());
                    break;
                }
                flag if flag.len() > 1 && flag.starts_with('-') => {
                    eprintln!("error: Unknown option '{flag}'");
                    eprint!("{USAGE}");
                    return Err(());
                }
                _ => filenames.push(option),
            }
        }

        if filenames.is_empty() {
            eprint!("{USAGE}");
            return Err(());
        }

        Ok(Self { filenames, options })
    }
}
