//! Partial orders and their Hasse diagrams.
//!
//! [`PartiallyOrderedSet`] keeps the inserted elements of a caller-supplied
//! order as a transitively reduced DAG, rewiring edges on each insert.
//!
//! ```
//! use lvd_poset::{divides, PartiallyOrderedSet};
//!
//! let mut p = PartiallyOrderedSet::new(divides);
//! p.extend([2, 3, 4, 6, 12]);
//! assert_eq!(p.size(), 5);
//! assert!(p.descendants_of(&3, false).contains(&&12));
//! ```

mod dag;
pub mod dot;
pub mod error;
pub mod laws;
pub mod order;
mod poset;

pub use dot::{DotStyle, RankDir};
pub use error::OrderLawViolation;
pub use laws::verify_partial_order;
pub use order::{
    compare_partial, compare_total, divides, product, subset, PartialOrder,
    RelationshipEvaluator,
};
pub use poset::PartiallyOrderedSet;
