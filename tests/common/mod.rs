#![allow(dead_code)]

use bytes::Bytes;
use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};
use svn_fast_export::areas::repository::Repository;
use svn_fast_export::areas::source::RevisionSource;
use svn_fast_export::artifacts::changes::{ChangeKind, PathChange, RevisionNumber};
use svn_fast_export::artifacts::stream::sink::FastImportSink;

/// Write end that keeps its bytes readable after the repository handle has
/// consumed the boxed writer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> Vec<u8> {
        self.0.lock().expect("buffer lock poisoned").clone()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.contents()).expect("captured output is not valid UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .expect("buffer lock poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Revision history held in memory, standing in for a real repository.
///
/// Revisions are numbered from 1 in the order they are pushed.
#[derive(Clone, Default)]
pub struct InMemorySource {
    revisions: Vec<RevisionFixture>,
}

#[derive(Clone, Default)]
pub struct RevisionFixture {
    changes: Vec<PathChange>,
    contents: HashMap<String, Bytes>,
}

impl InMemorySource {
    pub fn new() -> Self {
        InMemorySource::default()
    }

    pub fn revision(mut self, build: impl FnOnce(RevisionFixture) -> RevisionFixture) -> Self {
        self.revisions.push(build(RevisionFixture::default()));
        self
    }

    fn fixture(&self, revision: RevisionNumber) -> anyhow::Result<&RevisionFixture> {
        revision
            .checked_sub(1)
            .and_then(|index| self.revisions.get(index as usize))
            .ok_or_else(|| anyhow::anyhow!("no such revision: {revision}"))
    }
}

impl RevisionFixture {
    pub fn add(self, path: &str, content: &str) -> Self {
        self.change(path, ChangeKind::Added, Some(content))
    }

    pub fn modify(self, path: &str, content: &str) -> Self {
        self.change(path, ChangeKind::Modified, Some(content))
    }

    pub fn delete(self, path: &str) -> Self {
        self.change(path, ChangeKind::Deleted, None)
    }

    pub fn add_dir(mut self, path: &str) -> Self {
        self.changes
            .push(PathChange::new(path.to_string(), ChangeKind::Added, true));
        self
    }

    fn change(mut self, path: &str, kind: ChangeKind, content: Option<&str>) -> Self {
        self.changes
            .push(PathChange::new(path.to_string(), kind, false));
        if let Some(content) = content {
            self.contents
                .insert(path.to_string(), Bytes::from(content.to_string()));
        }
        self
    }
}

impl RevisionSource for InMemorySource {
    fn youngest(&self) -> anyhow::Result<RevisionNumber> {
        Ok(self.revisions.len() as RevisionNumber)
    }

    fn changes(&self, revision: RevisionNumber) -> anyhow::Result<Vec<PathChange>> {
        Ok(self.fixture(revision)?.changes.clone())
    }

    fn read_file(&self, revision: RevisionNumber, path: &str) -> anyhow::Result<Bytes> {
        self.fixture(revision)?
            .contents
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no content for {path} at revision {revision}"))
    }
}

/// Run a full export against an in-memory history, returning the captured
/// output stream and diagnostic stream.
pub fn run_export(source: InMemorySource) -> (String, String) {
    let stream = SharedBuffer::default();
    let diagnostics = SharedBuffer::default();

    let repository = Repository::new(
        Box::new(source),
        Box::new(FastImportSink::new(stream.clone())),
        Box::new(diagnostics.clone()),
    );
    repository.export().expect("export failed");

    (stream.text(), diagnostics.text())
}
