//! Side table of user predicates referenced from bytecode by id.
//!
//! Keeping predicates out of the instruction stream itself means `Program`
//! stays plain data; only the table is a bag of closures.

use std::fmt;
use std::sync::Arc;

use crate::element::Element;

/// A user predicate: `CHECK(f)` compiles to `PRED <id>`, and the VM calls
/// back into this closure with the candidate element.
///
/// `Arc` rather than `Box` so the combinator tree can hand the compiler a
/// cheap clone instead of having to consume itself to move the closure out.
pub type Predicate = Arc<dyn Fn(&Element) -> bool + Send + Sync>;

/// Index of a predicate within a [`PredicateTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PredicateId(pub u32);

impl fmt::Display for PredicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pred#{}", self.0)
    }
}

/// Registry of predicates interned during compilation, indexed by
/// [`PredicateId`].
#[derive(Default)]
pub struct PredicateTable {
    predicates: Vec<Predicate>,
}

impl PredicateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a predicate, returning the id bytecode will reference it by.
    pub fn register(&mut self, predicate: Predicate) -> PredicateId {
        let id = PredicateId(self.predicates.len() as u32);
        self.predicates.push(predicate);
        id
    }

    /// Evaluate the predicate at `id` against `element`.
    ///
    /// Panics if `id` was not produced by this table's `register` — that
    /// would indicate a compiler bug, not a user error.
    pub fn eval(&self, id: PredicateId, element: &Element) -> bool {
        (self.predicates[id.0 as usize])(element)
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Debug for PredicateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateTable")
            .field("len", &self.predicates.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_eval() {
        let mut table = PredicateTable::new();
        let id = table.register(Arc::new(|el: &Element| {
            matches!(el, Element::Scalar(crate::element::Scalar::Int(n)) if *n > 0)
        }));
        assert!(table.eval(id, &Element::from(5i64)));
        assert!(!table.eval(id, &Element::from(-5i64)));
    }
}
