use crate::areas::repository::Repository;
use crate::artifacts::changes::{ChangeKind, RevisionNumber};
use crate::artifacts::marks::MarkAllocator;
use crate::artifacts::stream::change_line::ChangeLine;
use std::io::Write;

/// Branch every commit directive targets.
const TARGET_REF: &str = "refs/heads/master";

/// What one revision contributed to the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Emitted { changes: usize },
    Skipped,
}

impl Repository {
    /// Crawl the whole revision range and export each revision once.
    ///
    /// The mark allocator lives here so its counter spans the entire run;
    /// each revision only borrows it.
    pub fn export(&self) -> anyhow::Result<()> {
        let youngest = self.source().youngest()?;
        let mut marks = MarkAllocator::new();

        for revision in 1..=youngest {
            self.export_revision(revision, &mut marks)?;
        }

        Ok(())
    }

    /// Export a single revision: emit one blob directive per in-scope
    /// addition or modification, then one commit directive listing every
    /// in-scope change, or nothing at all when the revision touches nothing
    /// under the exported subtree.
    pub fn export_revision(
        &self,
        revision: RevisionNumber,
        marks: &mut MarkAllocator,
    ) -> anyhow::Result<ExportOutcome> {
        write!(self.progress(), "Exporting revision {revision}... ")?;
        self.progress().flush()?;

        let mut changes = self.source().changes(revision)?;
        // the source reports the change-set in no canonical order; path
        // order makes marks, blobs, and change lines reproducible
        changes.sort_by(|a, b| a.path.cmp(&b.path));

        let mut lines = Vec::with_capacity(changes.len());
        for change in &changes {
            if !self.scope().in_scope(&change.path, change.is_dir) {
                continue;
            }
            let Some(relative) = self.scope().relativize(&change.path) else {
                continue;
            };

            match change.kind {
                ChangeKind::Deleted => lines.push(ChangeLine::delete(relative)),
                ChangeKind::Added | ChangeKind::Modified => {
                    let mark = marks.next_mark()?;
                    let content = self.source().read_file(revision, &change.path)?;
                    self.sink().append_blob(mark, &content)?;
                    lines.push(ChangeLine::modify(mark, relative));
                }
            }
        }

        if lines.is_empty() {
            writeln!(self.progress(), "skipping.")?;
            return Ok(ExportOutcome::Skipped);
        }

        self.sink().append_commit(TARGET_REF, &lines)?;
        writeln!(self.progress(), "done!")?;

        Ok(ExportOutcome::Emitted {
            changes: lines.len(),
        })
    }
}
