//! Blob mark allocation
//!
//! A mark is the run-scoped integer handle the fast-import protocol uses to
//! let a commit's change lines reference blobs defined earlier in the
//! stream. Marks must be unique for the lifetime of the whole export and
//! assigned in emission order, so the allocator is created once by the
//! crawl driver and threaded through every revision.

use derive_new::new;

/// Handle to one emitted blob's content.
///
/// Renders in the protocol's reference form (`:7`), which is the shape both
/// the blob directive and the change line expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Mark(u64);

impl Mark {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ":{}", self.0)
    }
}

/// Hands out marks 1, 2, 3, … strictly increasing by one per allocation.
/// The counter is never reset within a run; running it dry is a fatal
/// condition rather than a rollover.
#[derive(Debug)]
pub struct MarkAllocator {
    next: u64,
}

impl MarkAllocator {
    pub fn new() -> Self {
        MarkAllocator { next: 1 }
    }

    pub fn next_mark(&mut self) -> anyhow::Result<Mark> {
        let mark = Mark::new(self.next);
        self.next = self
            .next
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("mark counter exhausted at {}", self.next))?;

        Ok(mark)
    }
}

impl Default for MarkAllocator {
    fn default() -> Self {
        MarkAllocator::new()
    }
}
