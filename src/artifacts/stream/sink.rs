use crate::artifacts::marks::Mark;
use crate::artifacts::stream::change_line::ChangeLine;
use derive_new::new;
use std::io::Write;

/// Append-only output channel for stream directives.
///
/// The exporter never formats protocol bytes itself; it appends whole
/// directives through this seam, which keeps the wire format in one place
/// and lets tests capture the stream without a process stdout.
pub trait StreamSink {
    fn append_blob(&mut self, mark: Mark, content: &[u8]) -> anyhow::Result<()>;

    fn append_commit(&mut self, branch_ref: &str, changes: &[ChangeLine]) -> anyhow::Result<()>;
}

/// Serializes directives in the exact fast-import textual format.
#[derive(Debug, new)]
pub struct FastImportSink<W: Write> {
    out: W,
}

impl<W: Write> FastImportSink<W> {
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StreamSink for FastImportSink<W> {
    fn append_blob(&mut self, mark: Mark, content: &[u8]) -> anyhow::Result<()> {
        writeln!(self.out, "blob")?;
        writeln!(self.out, "mark {mark}")?;
        writeln!(self.out, "data {}", content.len())?;
        self.out.write_all(content)?;
        writeln!(self.out)?;

        Ok(())
    }

    fn append_commit(&mut self, branch_ref: &str, changes: &[ChangeLine]) -> anyhow::Result<()> {
        writeln!(self.out, "commit {branch_ref}")?;
        for change in changes {
            writeln!(self.out, "{change}")?;
        }
        writeln!(self.out)?;
        self.out.flush()?;

        Ok(())
    }
}
