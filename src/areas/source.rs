//! Read access to the source Subversion repository
//!
//! The export pipeline only ever needs three questions answered: what is the
//! youngest revision, which paths changed in a given revision, and what are
//! the bytes of a file at a given revision. `RevisionSource` is that
//! contract; `SvnlookSource` answers it by driving the installed `svnlook`
//! binary against a local repository.

use crate::artifacts::changes::{ChangeKind, PathChange, RevisionNumber};
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use std::process::Command;

pub trait RevisionSource {
    /// The number of the youngest revision in the repository.
    fn youngest(&self) -> anyhow::Result<RevisionNumber>;

    /// The set of paths changed by the given revision, one record per path.
    fn changes(&self, revision: RevisionNumber) -> anyhow::Result<Vec<PathChange>>;

    /// The full content of a file as it exists at the given revision.
    fn read_file(&self, revision: RevisionNumber, path: &str) -> anyhow::Result<Bytes>;
}

/// Revision source backed by the `svnlook` inspection tool.
pub struct SvnlookSource {
    repos_path: PathBuf,
}

impl SvnlookSource {
    /// Open a local repository, validating that `svnlook` can read it.
    pub fn open(repos_path: &Path) -> anyhow::Result<Self> {
        let repos_path = repos_path.canonicalize().with_context(|| {
            format!("cannot resolve repository path: {}", repos_path.display())
        })?;

        let source = SvnlookSource { repos_path };
        source.youngest().with_context(|| {
            format!(
                "not a readable Subversion repository: {}",
                source.repos_path.display()
            )
        })?;

        Ok(source)
    }

    pub fn repos_path(&self) -> &Path {
        &self.repos_path
    }

    fn svnlook(&self, subcommand: &str, revision: Option<RevisionNumber>) -> Command {
        let mut command = Command::new("svnlook");
        command.arg(subcommand);
        if let Some(revision) = revision {
            command.arg("-r").arg(revision.to_string());
        }
        command.arg(&self.repos_path);
        command
    }

    fn run(mut command: Command) -> anyhow::Result<Vec<u8>> {
        let output = command.output().context("failed to spawn svnlook")?;

        if !output.status.success() {
            anyhow::bail!(
                "svnlook exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(output.stdout)
    }
}

impl RevisionSource for SvnlookSource {
    fn youngest(&self) -> anyhow::Result<RevisionNumber> {
        let stdout = Self::run(self.svnlook("youngest", None))?;
        let stdout =
            String::from_utf8(stdout).context("svnlook youngest produced non-UTF-8 output")?;

        stdout
            .trim()
            .parse()
            .with_context(|| format!("invalid youngest revision number: {:?}", stdout.trim()))
    }

    fn changes(&self, revision: RevisionNumber) -> anyhow::Result<Vec<PathChange>> {
        let stdout = Self::run(self.svnlook("changed", Some(revision)))
            .with_context(|| format!("failed to read the change-set of revision {revision}"))?;
        let stdout = String::from_utf8(stdout)
            .with_context(|| format!("change-set of revision {revision} is not valid UTF-8"))?;

        stdout
            .lines()
            .map(parse_changed_line)
            .collect::<anyhow::Result<Vec<_>>>()
            .with_context(|| format!("failed to parse the change-set of revision {revision}"))
    }

    fn read_file(&self, revision: RevisionNumber, path: &str) -> anyhow::Result<Bytes> {
        let mut command = self.svnlook("cat", Some(revision));
        command.arg(path.trim_start_matches('/'));

        let stdout = Self::run(command)
            .with_context(|| format!("failed to read {path} at revision {revision}"))?;

        Ok(Bytes::from(stdout))
    }
}

/// Parse one line of `svnlook changed` output.
///
/// Each line carries two status columns and two separator spaces before the
/// path. Directories are reported with a trailing slash; repository paths
/// are reported without their leading slash.
fn parse_changed_line(line: &str) -> anyhow::Result<PathChange> {
    if line.len() <= 4 {
        anyhow::bail!("malformed changed-path line: {line:?}");
    }

    let (status, path) = line.split_at(4);
    let kind = match status.chars().next() {
        Some('A') => ChangeKind::Added,
        Some('D') => ChangeKind::Deleted,
        // 'R' replaces the node and '_' carries a property-only change; the
        // changed-paths table reports both as modifications, so the file is
        // re-emitted either way
        Some('U') | Some('R') | Some('_') => ChangeKind::Modified,
        _ => anyhow::bail!("unknown change status in line: {line:?}"),
    };

    let is_dir = path.ends_with('/');
    let path = format!("/{}", path.trim_end_matches('/'));

    Ok(PathChange::new(path, kind, is_dir))
}
