//! The combinator tree: the in-memory form a pattern takes before
//! compilation to bytecode.
//!
//! Expression nodes are built by the facade crate's combinators and are
//! immutable once constructed (spec data model "Lifecycle"). This crate
//! never constructs them from user-facing syntax directly — that is the
//! combinator builder's job — it only walks and compiles them.

use std::fmt;

use treematch_core::{Element, Predicate};

/// A node in the combinator tree. One variant per spec §3 expression kind.
pub enum Expr {
    Literal(Element),
    /// Match a nested sequence at the current position.
    Subseq(Vec<Expr>),
    Anything,
    End,
    Or(Vec<Expr>),
    Group(Vec<Expr>),
    Named(String, Vec<Expr>),
    Ref(String),
    Check(Predicate),
    Maybe(Vec<Expr>, bool),
    Many(Vec<Expr>, bool),
    More(Vec<Expr>, bool),
    /// Sugar for `Many(vec![Anything], greedy)`.
    Whatever(bool),
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Expr::Subseq(children) => f.debug_tuple("Subseq").field(children).finish(),
            Expr::Anything => write!(f, "Anything"),
            Expr::End => write!(f, "End"),
            Expr::Or(alts) => f.debug_tuple("Or").field(alts).finish(),
            Expr::Group(children) => f.debug_tuple("Group").field(children).finish(),
            Expr::Named(name, children) => {
                f.debug_tuple("Named").field(name).field(children).finish()
            }
            Expr::Ref(name) => f.debug_tuple("Ref").field(name).finish(),
            Expr::Check(_) => write!(f, "Check(..)"),
            Expr::Maybe(children, greedy) => {
                f.debug_tuple("Maybe").field(children).field(greedy).finish()
            }
            Expr::Many(children, greedy) => {
                f.debug_tuple("Many").field(children).field(greedy).finish()
            }
            Expr::More(children, greedy) => {
                f.debug_tuple("More").field(children).field(greedy).finish()
            }
            Expr::Whatever(greedy) => f.debug_tuple("Whatever").field(greedy).finish(),
        }
    }
}
