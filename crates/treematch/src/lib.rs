//! Pattern matching for heterogeneous trees, the way regular expressions
//! work for strings (spec OVERVIEW).
//!
//! A [`treematch_core::Element`] tree is either a scalar or an ordered
//! sequence of elements. A pattern is built from the combinator functions in
//! this crate (`lit`, `or`, `many`, `named`, ...), compiled with
//! [`compile`], then run against a tree with [`search`]: a pre-order walk
//! that tries the pattern at every index of every sequence and hands each
//! match to a callback, which may inspect it, replace it, or swap it with
//! another match before the walk continues.
//!
//! ```
//! use treematch::{compile, lit, search};
//! use treematch_core::Element;
//!
//! let pattern = compile(vec![lit(3), lit(4), lit(5)]).unwrap();
//! let mut tree = Element::Seq((1..=9).map(Element::from).collect());
//! let mut hits = Vec::new();
//! search(&mut tree, &pattern, |m, root| {
//!     hits.push(m.content(root).to_vec());
//!     None
//! })
//! .unwrap();
//! assert_eq!(hits.len(), 1);
//! ```

mod combinators;
mod into_expr;
mod match_obj;
mod pattern;
mod search;
mod span;

#[cfg(test)]
mod search_tests;

pub use combinators::{
    anything, check, end, group, lit, lit_seq, many, many_ng, maybe, maybe_ng, more, more_ng,
    named, or, reference, whatever, whatever_ng,
};
pub use into_expr::IntoExpr;
pub use match_obj::Match;
pub use pattern::{compile, Pattern};
pub use search::search;
pub use span::Span;

pub use treematch_compiler::{CompileError, CompileResult, Expr};
pub use treematch_core::{Element, OpaqueScalar, Predicate, Scalar};
pub use treematch_vm::{Limits, RuntimeError};
