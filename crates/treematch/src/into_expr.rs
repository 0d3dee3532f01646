//! Auto-lifting of raw scalars and nested sequences into [`Expr`] nodes
//! (spec §4.1: "Literal scalars and raw nested sequences appearing as
//! arguments are lifted into expression nodes automatically").
//!
//! Rust has no variadic functions and combinator arguments are
//! heterogeneous (a literal here, a nested array there, a sub-pattern
//! built from another combinator elsewhere), so the lifting happens at the
//! macro layer: [`seq!`] and [`pattern!`] call `IntoExpr::into_expr` on
//! each argument independently before assembling a homogeneous `Vec<Expr>`,
//! the same trick `serde_json::json!` uses for heterogeneous JSON literals.

use treematch_core::{Element, Scalar};
use treematch_compiler::Expr;

/// Convert a raw value into an [`Expr`] the way it would be auto-lifted as
/// a combinator argument: a scalar becomes `Literal`, an already-built
/// `Expr` passes through unchanged, a `Vec<Expr>` becomes `Subseq`.
pub trait IntoExpr {
    fn into_expr(self) -> Expr;
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

impl IntoExpr for Vec<Expr> {
    fn into_expr(self) -> Expr {
        Expr::Subseq(self)
    }
}

impl<T> IntoExpr for T
where
    T: Into<Scalar>,
{
    fn into_expr(self) -> Expr {
        Expr::Literal(Element::Scalar(self.into()))
    }
}

/// Build a `SUBSEQ` expression node from a literal-looking argument list,
/// lifting each item with [`IntoExpr`].
///
/// ```
/// use treematch::{seq, or, end};
/// let pattern = seq!["b", or(vec![treematch::lit("c"), treematch::lit("d")]), end()];
/// ```
#[macro_export]
macro_rules! seq {
    ($($item:expr),* $(,)?) => {
        treematch_compiler::Expr::Subseq(vec![$($crate::IntoExpr::into_expr($item)),*])
    };
}

/// Compile a top-level pattern from a literal-looking argument list, the
/// Rust realization of the reference implementation's variadic
/// `compile(...)`.
///
/// ```
/// use treematch::pattern;
/// let pattern = pattern![3, 4, 5].unwrap();
/// ```
#[macro_export]
macro_rules! pattern {
    ($($item:expr),* $(,)?) => {
        $crate::compile(vec![$($crate::IntoExpr::into_expr($item)),*])
    };
}
