mod error;
mod note;
mod show;
mod warning;

use core::fmt::Debug;
pub use error::ErrorDiagnostic;
pub use note::NoteDiagnostic;
pub use show::Show;
use std::sync::{Mutex, PoisonError};
pub use warning::WarningDiagnostic;

pub trait Diagnostic: Show + Send + Sync {
    fn is_note(&self) -> bool {
        false
    }
}

#[derive(Clone, Debug)]
pub struct DiagnosticFlags {
    pub print_without_collecting: bool,
    pub show_progress: bool,
}

impl Default for DiagnosticFlags {
    fn default() -> Self {
        Self {
            print_without_collecting: true,
            show_progress: true,
        }
    }
}

impl DiagnosticFlags {
    /// Collects everything instead of printing, for inspection afterwards
    pub fn collecting() -> Self {
        Self {
            print_without_collecting: false,
            show_progress: true,
        }
    }
}

#[derive(Default)]
pub struct Diagnostics {
    diagnostics: Mutex<Vec<Box<dyn Diagnostic>>>,
    flags: DiagnosticFlags,
}

impl Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

impl Diagnostics {
    pub fn new(flags: DiagnosticFlags) -> Self {
        Self {
            diagnostics: Mutex::default(),
            flags,
        }
    }

    pub fn push(&self, diagnostic: impl Diagnostic + 'static) {
        if diagnostic.is_note() && !self.flags.show_progress {
            return;
        }

        if self.flags.print_without_collecting {
            self.print(&diagnostic);
        } else {
            self.diagnostics
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(Box::new(diagnostic));
        }
    }

    /// Collected diagnostics, rendered
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|diagnostic| diagnostic.to_message())
            .collect()
    }

    pub fn print(&self, diagnostic: &dyn Diagnostic) {
        let message = diagnostic.to_message();

        // Progress goes to stdout alongside the echoed command
        if diagnostic.is_note() {
            println!("{message}");
        } else {
            eprintln!("{message}");
        }
    }
}

#[test]
fn collects_in_order() {
    let diagnostics = Diagnostics::new(DiagnosticFlags::collecting());
    diagnostics.push(NoteDiagnostic::plain("Resolving dependencies for main.c"));
    diagnostics.push(WarningDiagnostic::plain("odd library name"));
    diagnostics.push(ErrorDiagnostic::plain("main.c: No such file or directory"));

    let messages = diagnostics.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0], "Resolving dependencies for main.c");
    assert!(messages[1].contains("warning:"));
    assert!(messages[1].ends_with(" odd library name"));
    assert!(messages[2].contains("error:"));
    assert!(messages[2].ends_with(" main.c: No such file or directory"));
}

#[test]
fn progress_can_be_hidden() {
    let diagnostics = Diagnostics::new(DiagnosticFlags {
        show_progress: false,
        ..DiagnosticFlags::collecting()
    });

    diagnostics.push(NoteDiagnostic::plain("Resolving dependencies for main.c"));
    diagnostics.push(WarningDiagnostic::plain("still shown"));
    let messages = diagnostics.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].ends_with(" still shown"));
}
