//! Combinator constructors: the Rust-native builder layer over
//! [`treematch_compiler::Expr`] (spec §4, "Combinator algebra").
//!
//! Each function here is a thin wrapper around one `Expr` variant. Children
//! are passed as an already-built `Vec<Expr>` — built with plain `vec![]`
//! for homogeneous lists of combinator calls, or with the [`crate::seq!`]
//! macro where a literal nested array needs auto-lifting.

use std::sync::Arc;

use treematch_core::{Element, Scalar};
use treematch_compiler::Expr;

/// A `LITERAL` leaf: matches one scalar value exactly.
pub fn lit(value: impl Into<Scalar>) -> Expr {
    Expr::Literal(Element::Scalar(value.into()))
}

/// A `LITERAL` leaf wrapping a whole nested sequence, compared structurally.
pub fn lit_seq(value: impl Into<Vec<Element>>) -> Expr {
    Expr::Literal(Element::Seq(value.into()))
}

/// `ANYTHING`: matches exactly one element of any shape.
pub fn anything() -> Expr {
    Expr::Anything
}

/// `END`: matches only at the end of the current sequence, consuming
/// nothing.
pub fn end() -> Expr {
    Expr::End
}

/// `OR`: tries each alternative in order, committing to the first that
/// matches.
pub fn or(alternatives: Vec<Expr>) -> Expr {
    Expr::Or(alternatives)
}

/// `GROUP`: an unnamed sequence of sub-patterns run inline, with no
/// bookkeeping of its own.
pub fn group(children: Vec<Expr>) -> Expr {
    Expr::Group(children)
}

/// `NAMED`: captures the span its children matched under `name`.
///
/// Called with no children this is sugar for `named(name, vec![anything()])`
/// (spec §4.1): a bare named capture of one element.
pub fn named(name: impl Into<String>, children: Vec<Expr>) -> Expr {
    let children = if children.is_empty() {
        vec![Expr::Anything]
    } else {
        children
    };
    Expr::Named(name.into(), children)
}

/// `REF`: re-matches the literal content already captured under `name`.
pub fn reference(name: impl Into<String>) -> Expr {
    Expr::Ref(name.into())
}

/// `CHECK`: matches one element if the predicate accepts it.
pub fn check(predicate: impl Fn(&Element) -> bool + Send + Sync + 'static) -> Expr {
    Expr::Check(Arc::new(predicate))
}

/// `MAYBE`, greedy: prefers matching its children, falls back to skipping
/// them.
pub fn maybe(children: Vec<Expr>) -> Expr {
    Expr::Maybe(children, true)
}

/// `MAYBE`, non-greedy: prefers skipping its children, falls back to
/// matching them.
pub fn maybe_ng(children: Vec<Expr>) -> Expr {
    Expr::Maybe(children, false)
}

/// `MANY`, greedy: repeats its children zero or more times, preferring more
/// repetitions.
pub fn many(children: Vec<Expr>) -> Expr {
    Expr::Many(children, true)
}

/// `MANY`, non-greedy: repeats its children zero or more times, preferring
/// fewer repetitions.
pub fn many_ng(children: Vec<Expr>) -> Expr {
    Expr::Many(children, false)
}

/// `MORE`, greedy: repeats its children one or more times, preferring more
/// repetitions.
pub fn more(children: Vec<Expr>) -> Expr {
    Expr::More(children, true)
}

/// `MORE`, non-greedy: repeats its children one or more times, preferring
/// fewer repetitions.
pub fn more_ng(children: Vec<Expr>) -> Expr {
    Expr::More(children, false)
}

/// `WHATEVER`, greedy: skips as many elements as possible.
pub fn whatever() -> Expr {
    Expr::Whatever(true)
}

/// `WHATEVER`, non-greedy: skips as few elements as possible.
pub fn whatever_ng() -> Expr {
    Expr::Whatever(false)
}
