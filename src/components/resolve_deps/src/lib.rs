mod error;
mod opener;
mod resolver;
mod unit;

pub use error::{ResolveError, ResolveErrorKind};
pub use opener::{FileSystem, SourceOpener};
pub use resolver::{Resolution, Resolver};
pub use unit::{object_for_source, source_for_object};

use diagnostics::Diagnostics;

/// Follows the directives of `root` and everything it depends on
pub fn resolve(
    root: &str,
    opener: &impl SourceOpener,
    diagnostics: &Diagnostics,
) -> Result<Resolution, ResolveError> {
    Resolver::new(root, opener, diagnostics).run()
}
