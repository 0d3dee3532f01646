//! `Match`: the descriptor handed to a search callback, bundling the
//! overall matched span with its named sub-captures (spec §4.4, §9).

use indexmap::IndexMap;
use treematch_core::Element;

use crate::span::Span;

/// A single successful match of a compiled pattern against a sequence.
#[derive(Clone, Debug)]
pub struct Match {
    span: Span,
    groups: IndexMap<String, Span>,
}

impl Match {
    pub(crate) fn new(span: Span, groups: IndexMap<String, Span>) -> Self {
        Self { span, groups }
    }

    /// The path, from the root passed to [`crate::search`], to the
    /// sequence this match was found in.
    pub fn path(&self) -> &[usize] {
        self.span.path()
    }

    pub fn start(&self) -> usize {
        self.span.start()
    }

    pub fn end(&self) -> usize {
        self.span.end()
    }

    /// The elements this match covers, resolved against `root`.
    pub fn content<'a>(&self, root: &'a Element) -> &'a [Element] {
        self.span.content(root)
    }

    /// The first element this match covers, if any.
    pub fn first<'a>(&self, root: &'a Element) -> Option<&'a Element> {
        self.span.first(root)
    }

    /// The span captured under a `NAMED` group, if the pattern declares
    /// one by this name and it was reached during this match.
    pub fn group(&self, name: &str) -> Option<&Span> {
        self.groups.get(name)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Replace the whole matched span with `replacement`.
    pub fn replace(&mut self, root: &mut Element, replacement: Vec<Element>) {
        self.span.replace(root, replacement);
    }

    /// Exchange this match's content with another match's content.
    pub fn swap(&mut self, other: &mut Match, root: &mut Element) {
        self.span.swap(&mut other.span, root);
    }
}
