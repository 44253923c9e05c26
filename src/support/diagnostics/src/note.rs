use crate::{Diagnostic, Show};

// Progress output, hidden when `show_progress` is off
pub struct NoteDiagnostic {
    message: String,
}

impl NoteDiagnostic {
    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Show for NoteDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        w.write_str(&self.message)
    }
}

impl Diagnostic for NoteDiagnostic {
    fn is_note(&self) -> bool {
        true
    }
}
