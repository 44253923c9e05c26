use crate::{Diagnostic, Show};
use colored::Colorize;

#[derive(Debug)]
pub struct ErrorDiagnostic {
    message: String,
    filename: Option<String>,
}

impl ErrorDiagnostic {
    pub fn new(message: impl ToString, filename: impl Into<String>) -> Self {
        Self {
            message: message.to_string(),
            filename: Some(filename.into()),
        }
    }

    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            filename: None,
        }
    }
}

impl Show for ErrorDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        if let Some(filename) = &self.filename {
            write!(w, "{}: {} {}", filename, "error:".red().bold(), self.message)
        } else {
            write!(w, "{} {}", "error:".red().bold(), self.message)
        }
    }
}

impl Diagnostic for ErrorDiagnostic {}
