use thiserror::Error;

use crate::order::PartialOrder;

/// A relation that fails one of the partial-order laws on sample elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderLawViolation {
    #[error("relation is not reflexive: {element} compared with itself gave {found}")]
    NotReflexive { element: String, found: PartialOrder },

    #[error("relation is not dual: rel({a}, {b}) = {forward} but rel({b}, {a}) = {backward}")]
    NotDual {
        a: String,
        b: String,
        forward: PartialOrder,
        backward: PartialOrder,
    },

    #[error("relation is not antisymmetric: {a} equals {b} but they compare differently with {c}")]
    NotAntisymmetric { a: String, b: String, c: String },

    #[error("relation is not transitive: {a} <= {b} <= {c} but not {a} <= {c}")]
    NotTransitive { a: String, b: String, c: String },
}
