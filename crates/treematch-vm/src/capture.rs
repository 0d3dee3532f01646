//! Capture state: a persistent-by-snapshot mapping from group id to the
//! span it recorded, restored on backtrack.
//!
//! Spec §3 "Capture slot": `(node_ref, start_index, end_index)` keyed by
//! group id. `node_ref` is represented here as a path of indices from the
//! node the pattern was run against, re-resolved lazily rather than held as
//! a live reference — the same re-resolution discipline the facade's
//! `Match` type uses for its own edits (SPEC_FULL.md, Open Question 5).

use std::collections::HashMap;

use treematch_bytecode::GroupId;
use treematch_core::Element;

/// A single finished capture: the path (from the node the VM was run
/// against) to the sequence it was recorded in, plus the `[start, end)`
/// range within that sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Capture {
    pub path: Vec<usize>,
    pub start: usize,
    pub end: usize,
}

/// All captures recorded so far on the current thread of execution.
///
/// Cloned wholesale before trying a `SPLIT`'s first branch and restored on
/// failure — the "straightforward and acceptable discipline" spec §4.3
/// sanctions.
#[derive(Clone, Debug, Default)]
pub struct Captures {
    pending: HashMap<GroupId, (Vec<usize>, usize)>,
    done: HashMap<GroupId, Capture>,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_start(&mut self, gid: GroupId, path: &[usize], idx: usize) {
        self.pending.insert(gid, (path.to_vec(), idx));
    }

    /// Close a capture opened by `save_start`.
    ///
    /// Panics if `gid` has no open start — that would mean the compiler
    /// emitted an unpaired `SAVE`, violating invariant I2, not something a
    /// caller can trigger at runtime.
    pub fn save_end(&mut self, gid: GroupId, idx: usize) {
        let (path, start) = self
            .pending
            .remove(&gid)
            .expect("SAVE end without a matching SAVE start");
        self.done.insert(gid, Capture { path, start, end: idx });
    }

    pub fn get(&self, gid: GroupId) -> Option<&Capture> {
        self.done.get(&gid)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &Capture)> {
        self.done.iter().map(|(gid, capture)| (*gid, capture))
    }
}

/// Walk `path` down from `root`, following each index into a nested
/// sequence, and return the sequence reached.
///
/// Panics if a path index points at something that isn't a sequence or is
/// out of range — that would mean a capture was recorded against a node
/// that has since changed shape, which the VM itself never does (only a
/// user callback mutates the tree, and only after the VM has returned).
pub fn resolve_path<'a>(root: &'a Element, path: &[usize]) -> &'a Element {
    let mut current = root;
    for &idx in path {
        current = &current
            .as_seq()
            .expect("capture path descends through a non-sequence element")[idx];
    }
    current
}
