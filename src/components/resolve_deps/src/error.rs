use derive_more::IsVariant;
use diagnostics::ErrorDiagnostic;
use std::{error::Error, fmt::Display, io};

#[derive(Debug)]
pub struct ResolveError {
    pub path: String,
    pub kind: ResolveErrorKind,
}

#[derive(Debug, IsVariant)]
pub enum ResolveErrorKind {
    Open(io::Error),
    Read(io::Error),
}

impl ResolveErrorKind {
    pub fn at(self, path: impl Into<String>) -> ResolveError {
        ResolveError {
            path: path.into(),
            kind: self,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            ResolveErrorKind::Open(error) | ResolveErrorKind::Read(error) => error,
        }
    }
}

impl Display for ResolveErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveErrorKind::Open(error) => write!(f, "failed to open: {error}"),
            ResolveErrorKind::Read(error) => write!(f, "failed to read: {error}"),
        }
    }
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.kind.io_error())
    }
}

impl From<ResolveError> for ErrorDiagnostic {
    fn from(value: ResolveError) -> Self {
        ErrorDiagnostic::new(value.kind, value.path)
    }
}
