use crate::CompileCommand;
use std::{fmt::Display, process::Command};

#[derive(Clone, Debug)]
pub struct LaunchError {
    pub message: String,
}

impl LaunchError {
    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for LaunchError {}

/// Runs the compiler and waits for it to finish
pub fn launch(command: &CompileCommand) -> Result<(), LaunchError> {
    let mut process = Command::new(command.program())
        .args(command.args())
        .spawn()
        .map_err(|error| {
            LaunchError::plain(format!("Failed to spawn '{}' - {}", command.program(), error))
        })?;

    match process.wait() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(LaunchError::plain(format!(
            "'{}' failed ({})",
            command.program(),
            status
        ))),
        Err(error) => Err(LaunchError::plain(format!(
            "Failed to wait for '{}' - {}",
            command.program(),
            error
        ))),
    }
}
