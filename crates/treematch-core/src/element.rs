//! The tree data model: scalars and sequences.

use std::fmt;
use std::sync::Arc;

/// A user-supplied scalar type that can be embedded in a tree and compared
/// for structural equality, without the engine knowing anything else about
/// it.
///
/// Two `Opaque` scalars are equal iff `eq_opaque` says so; the engine never
/// inspects the payload beyond that.
pub trait OpaqueScalar: fmt::Debug + Send + Sync {
    /// Compare against another opaque scalar. Implementations that cannot
    /// meaningfully compare against a different concrete type should return
    /// `false` rather than panic.
    fn eq_opaque(&self, other: &dyn OpaqueScalar) -> bool;
}

impl PartialEq for dyn OpaqueScalar {
    fn eq(&self, other: &Self) -> bool {
        self.eq_opaque(other)
    }
}

/// A leaf value in a tree: one of a small closed set of primitives, or an
/// opaque user-supplied scalar wrapped in [`OpaqueScalar`].
#[derive(Clone, Debug)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Opaque(Arc<dyn OpaqueScalar>),
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            (Scalar::String(a), Scalar::String(b)) => a == b,
            (Scalar::Opaque(a), Scalar::Opaque(b)) => a.as_ref().eq_opaque(b.as_ref()),
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::String(s) => write!(f, "{s:?}"),
            Scalar::Opaque(o) => write!(f, "{o:?}"),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::String(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_owned())
    }
}

/// A tree element: a scalar leaf, or an ordered, mutable sequence of
/// elements.
///
/// Sequences are mutable in place (that is what `Match::replace`/`swap`
/// edit); scalars are opaque and replaced wholesale.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Scalar(Scalar),
    Seq(Vec<Element>),
}

impl Element {
    /// `Some(children)` if this is a sequence.
    pub fn as_seq(&self) -> Option<&[Element]> {
        match self {
            Element::Seq(children) => Some(children),
            Element::Scalar(_) => None,
        }
    }

    /// Mutable view of the sequence's children, if this is a sequence.
    pub fn as_seq_mut(&mut self) -> Option<&mut Vec<Element>> {
        match self {
            Element::Seq(children) => Some(children),
            Element::Scalar(_) => None,
        }
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Element::Seq(_))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Scalar(s) => write!(f, "{s}"),
            Element::Seq(children) => {
                write!(f, "[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<Scalar> for Element {
    fn from(v: Scalar) -> Self {
        Element::Scalar(v)
    }
}

impl From<Vec<Element>> for Element {
    fn from(v: Vec<Element>) -> Self {
        Element::Seq(v)
    }
}

impl From<bool> for Element {
    fn from(v: bool) -> Self {
        Element::Scalar(v.into())
    }
}

impl From<i64> for Element {
    fn from(v: i64) -> Self {
        Element::Scalar(v.into())
    }
}

impl From<i32> for Element {
    fn from(v: i32) -> Self {
        Element::Scalar(v.into())
    }
}

impl From<f64> for Element {
    fn from(v: f64) -> Self {
        Element::Scalar(v.into())
    }
}

impl From<String> for Element {
    fn from(v: String) -> Self {
        Element::Scalar(v.into())
    }
}

impl From<&str> for Element {
    fn from(v: &str) -> Self {
        Element::Scalar(v.into())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Scalar::Null => serializer.serialize_none(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Int(i) => serializer.serialize_i64(*i),
            Scalar::Float(x) => serializer.serialize_f64(*x),
            Scalar::String(s) => serializer.serialize_str(s),
            Scalar::Opaque(o) => serializer.serialize_str(&format!("{o:?}")),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        match self {
            Element::Scalar(s) => s.serialize(serializer),
            Element::Seq(children) => {
                let mut seq = serializer.serialize_seq(Some(children.len()))?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct CaseInsensitive(String);

    impl OpaqueScalar for CaseInsensitive {
        fn eq_opaque(&self, other: &dyn OpaqueScalar) -> bool {
            format!("{other:?}").eq_ignore_ascii_case(&format!("CaseInsensitive({:?})", self.0))
        }
    }

    #[test]
    fn scalar_equality_is_structural() {
        assert_eq!(Scalar::Int(3), Scalar::Int(3));
        assert_ne!(Scalar::Int(3), Scalar::Int(4));
        assert_ne!(Scalar::Int(3), Scalar::String("3".into()));
    }

    #[test]
    fn nested_seq_equality_is_structural() {
        let a = Element::Seq(vec![Element::from(1i64), Element::from("x")]);
        let b = Element::Seq(vec![Element::from(1i64), Element::from("x")]);
        assert_eq!(a, b);
    }
}
