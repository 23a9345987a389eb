use crate::areas::source::{RevisionSource, SvnlookSource};
use crate::artifacts::changes::scope::{ScopeFilter, TRUNK};
use crate::artifacts::stream::sink::StreamSink;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Aggregate handle over one export run's resources: the revision source,
/// the fast-import output sink, and the diagnostic writer. The writers are
/// injected so tests can capture both channels.
pub struct Repository {
    source: Box<dyn RevisionSource>,
    sink: RefCell<Box<dyn StreamSink>>,
    progress: RefCell<Box<dyn std::io::Write>>,
    scope: ScopeFilter,
}

impl Repository {
    /// Open a local Subversion repository through the `svnlook` backend.
    pub fn open(
        path: &str,
        sink: Box<dyn StreamSink>,
        progress: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let source = SvnlookSource::open(Path::new(path))?;

        Ok(Self::new(Box::new(source), sink, progress))
    }

    pub fn new(
        source: Box<dyn RevisionSource>,
        sink: Box<dyn StreamSink>,
        progress: Box<dyn std::io::Write>,
    ) -> Self {
        Repository {
            source,
            sink: RefCell::new(sink),
            progress: RefCell::new(progress),
            scope: ScopeFilter::new(TRUNK),
        }
    }

    pub fn source(&self) -> &dyn RevisionSource {
        self.source.as_ref()
    }

    pub fn sink(&'_ self) -> RefMut<'_, Box<dyn StreamSink>> {
        self.sink.borrow_mut()
    }

    pub fn progress(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.progress.borrow_mut()
    }

    pub fn scope(&self) -> &ScopeFilter {
        &self.scope
    }
}
