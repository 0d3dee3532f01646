//! `Span`: a `[start, end)` range inside a sequence somewhere in a tree,
//! addressed by a path of indices from an explicit root rather than held as
//! a live reference (SPEC_FULL.md Open Question 5; spec §9's recommended
//! redesign of the reference implementation's dangling view/editor object).

use treematch_core::Element;

fn resolve<'a>(root: &'a Element, path: &[usize]) -> &'a Element {
    let mut current = root;
    for &idx in path {
        current = &current
            .as_seq()
            .expect("span path descends through a non-sequence element")[idx];
    }
    current
}

fn resolve_mut<'a>(root: &'a mut Element, path: &[usize]) -> &'a mut Element {
    let mut current = root;
    for &idx in path {
        current = &mut current
            .as_seq_mut()
            .expect("span path descends through a non-sequence element")[idx];
    }
    current
}

/// A `[start, end)` range within the sequence found by following `path`
/// down from a root passed explicitly at each access.
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    pub(crate) path: Vec<usize>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Span {
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The elements this span currently covers, resolved against `root`.
    pub fn content<'a>(&self, root: &'a Element) -> &'a [Element] {
        let seq = resolve(root, &self.path)
            .as_seq()
            .expect("span points at a non-sequence element");
        &seq[self.start..self.end]
    }

    /// The first element this span covers, if any (spec §4.3 `first()`).
    pub fn first<'a>(&self, root: &'a Element) -> Option<&'a Element> {
        self.content(root).first()
    }

    /// Replace the covered range in-place with `replacement`, then update
    /// `end` to reflect the new length (spec §4.4 `replace`).
    pub fn replace(&mut self, root: &mut Element, replacement: Vec<Element>) {
        let seq = resolve_mut(root, &self.path)
            .as_seq_mut()
            .expect("span points at a non-sequence element");
        let new_len = replacement.len();
        seq.splice(self.start..self.end, replacement);
        self.end = self.start + new_len;
    }

    /// Exchange the content covered by `self` and `other` (spec §4.4
    /// `swap`). When both spans address the same sequence, the
    /// higher-index interval is spliced first so that editing one side
    /// never shifts the still-unedited other side's indices.
    pub fn swap(&mut self, other: &mut Span, root: &mut Element) {
        let mine = self.content(root).to_vec();
        let theirs = other.content(root).to_vec();
        if self.path == other.path && self.start < other.start {
            other.replace(root, mine);
            self.replace(root, theirs);
        } else {
            self.replace(root, theirs);
            other.replace(root, mine);
        }
    }
}
