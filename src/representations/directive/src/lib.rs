mod token;

use derive_more::IsVariant;
use std::fmt::Display;
pub use token::{Boundary, Token};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub argument: String,
}

impl Directive {
    pub fn new(kind: DirectiveKind, argument: impl Into<String>) -> Self {
        Self {
            kind,
            argument: argument.into(),
        }
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} \"{}\"", self.kind, self.argument)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum DirectiveKind {
    /// Unrecognized pragma, argument is still consumed
    None,
    /// `#pragma vmk`
    Pragma,
    /// `#pragma link`
    Link,
    /// `#pragma dep`
    Dep,
    /// `#include`
    Include,
}

impl DirectiveKind {
    /// Classifies the name following `#pragma`.
    /// Unknown names are not rejected, they map to [`DirectiveKind::None`].
    pub fn from_pragma_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("vmk") {
            Self::Pragma
        } else if name.eq_ignore_ascii_case("link") {
            Self::Link
        } else if name.eq_ignore_ascii_case("dep") {
            Self::Dep
        } else {
            Self::None
        }
    }

    pub fn at(self, argument: impl Into<String>) -> Directive {
        Directive::new(self, argument)
    }
}

impl Display for DirectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectiveKind::None => write!(f, "#pragma <unknown>"),
            DirectiveKind::Pragma => write!(f, "#pragma vmk"),
            DirectiveKind::Link => write!(f, "#pragma link"),
            DirectiveKind::Dep => write!(f, "#pragma dep"),
            DirectiveKind::Include => write!(f, "#include"),
        }
    }
}

#[test]
fn pragma_names_are_case_insensitive() {
    assert_eq!(DirectiveKind::from_pragma_name("LINK"), DirectiveKind::Link);
    assert_eq!(DirectiveKind::from_pragma_name("Dep"), DirectiveKind::Dep);
    assert_eq!(DirectiveKind::from_pragma_name("vmk"), DirectiveKind::Pragma);
    assert!(DirectiveKind::from_pragma_name("once").is_none());
}

#[test]
fn directive_display() {
    assert_eq!(
        DirectiveKind::Link.at("util.o").to_string(),
        "#pragma link \"util.o\""
    );
}
