//! Tree and value data model shared by the treematch crates.
//!
//! A tree is built from two things: [`Scalar`] leaves and [`Element::Seq`]
//! sequences of elements. Everything above this crate — bytecode, compiler,
//! VM, facade — is generic over this model and never reaches past it into a
//! concrete host representation (JSON, an AST, etc).

mod element;
mod predicate;

pub use element::{Element, OpaqueScalar, Scalar};
pub use predicate::{Predicate, PredicateId, PredicateTable};
