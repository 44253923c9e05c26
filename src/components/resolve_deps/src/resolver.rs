use crate::{ResolveError, ResolveErrorKind, SourceOpener, object_for_source, source_for_object};
use build_directive::DirectiveScanner;
use diagnostics::{Diagnostics, NoteDiagnostic};
use directive::{Directive, DirectiveKind};
use indexmap::IndexSet;

/// Everything reachable from a root file, in order of discovery
#[derive(Clone, Debug, Default)]
pub struct Resolution {
    pub dependencies: IndexSet<String>,
    pub objects: IndexSet<String>,
    pub libraries: IndexSet<String>,
}

pub struct Resolver<'a, O: SourceOpener> {
    opener: &'a O,
    diagnostics: &'a Diagnostics,
    resolution: Resolution,
}

impl<'a, O: SourceOpener> Resolver<'a, O> {
    pub fn new(root: &str, opener: &'a O, diagnostics: &'a Diagnostics) -> Self {
        let mut resolution = Resolution::default();
        resolution.dependencies.insert(root.into());

        if let Some(object) = object_for_source(root) {
            resolution.objects.insert(object);
        }

        Self {
            opener,
            diagnostics,
            resolution,
        }
    }

    pub fn run(mut self) -> Result<Resolution, ResolveError> {
        // The dependency set doubles as the worklist, and grows while we walk it
        let mut next = 0;

        while let Some(path) = self.resolution.dependencies.get_index(next).cloned() {
            self.scan(&path)?;
            next += 1;
        }

        Ok(self.resolution)
    }

    fn scan(&mut self, path: &str) -> Result<(), ResolveError> {
        self.diagnostics.push(NoteDiagnostic::plain(format!(
            "Resolving dependencies for {path}"
        )));

        let stream = self
            .opener
            .open(path)
            .map_err(|error| ResolveErrorKind::Open(error).at(path))?;

        // Dropping the scanner closes the file, including on error
        for directive in DirectiveScanner::new(stream) {
            let directive = directive.map_err(|error| ResolveErrorKind::Read(error).at(path))?;
            self.record(directive);
        }

        Ok(())
    }

    fn record(&mut self, directive: Directive) {
        let Directive { kind, argument } = directive;

        match kind {
            DirectiveKind::Link => {
                if let Some(source) = source_for_object(&argument) {
                    self.resolution.objects.insert(argument);
                    self.resolution.dependencies.insert(source);
                } else {
                    self.resolution.libraries.insert(argument);
                }
            }
            DirectiveKind::Dep | DirectiveKind::Include => {
                self.resolution.dependencies.insert(argument);
            }
            // Reserved
            DirectiveKind::Pragma | DirectiveKind::None => (),
        }
    }
}
