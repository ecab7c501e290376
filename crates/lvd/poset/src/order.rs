//! The four-valued comparison result and common order relations.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of comparing two elements under a partial order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialOrder {
    LessThan,
    GreaterThan,
    Equal,
    Incomparable,
}

impl PartialOrder {
    /// The result of the comparison with its operands swapped.
    pub const fn reversed(self) -> PartialOrder {
        match self {
            PartialOrder::LessThan => PartialOrder::GreaterThan,
            PartialOrder::GreaterThan => PartialOrder::LessThan,
            other => other,
        }
    }

    pub const fn is_le(self) -> bool {
        matches!(self, PartialOrder::LessThan | PartialOrder::Equal)
    }

    pub const fn is_ge(self) -> bool {
        matches!(self, PartialOrder::GreaterThan | PartialOrder::Equal)
    }

    pub const fn is_comparable(self) -> bool {
        !matches!(self, PartialOrder::Incomparable)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PartialOrder::LessThan => "less_than",
            PartialOrder::GreaterThan => "greater_than",
            PartialOrder::Equal => "equal",
            PartialOrder::Incomparable => "incomparable",
        }
    }
}

impl fmt::Display for PartialOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Ordering> for PartialOrder {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Less => PartialOrder::LessThan,
            Ordering::Greater => PartialOrder::GreaterThan,
            Ordering::Equal => PartialOrder::Equal,
        }
    }
}

impl From<Option<Ordering>> for PartialOrder {
    fn from(o: Option<Ordering>) -> Self {
        o.map_or(PartialOrder::Incomparable, PartialOrder::from)
    }
}

/// Anything usable as the relation of a
/// [`PartiallyOrderedSet`](crate::PartiallyOrderedSet).
pub trait RelationshipEvaluator<T>: Fn(&T, &T) -> PartialOrder {}

impl<T, F> RelationshipEvaluator<T> for F where F: Fn(&T, &T) -> PartialOrder {}

pub fn compare_total<T: Ord>(a: &T, b: &T) -> PartialOrder {
    a.cmp(b).into()
}

pub fn compare_partial<T: PartialOrd>(a: &T, b: &T) -> PartialOrder {
    a.partial_cmp(b).into()
}

/// Divisibility: `a < b` when `a` divides `b`. Zero is divided by
/// everything and divides only itself.
pub fn divides(a: &u64, b: &u64) -> PartialOrder {
    let a_divides_b = |a: u64, b: u64| if a == 0 { b == 0 } else { b % a == 0 };
    if a == b {
        PartialOrder::Equal
    } else if a_divides_b(*a, *b) {
        PartialOrder::LessThan
    } else if a_divides_b(*b, *a) {
        PartialOrder::GreaterThan
    } else {
        PartialOrder::Incomparable
    }
}

/// Set inclusion.
pub fn subset<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> PartialOrder {
    match (a.is_subset(b), b.is_subset(a)) {
        (true, true) => PartialOrder::Equal,
        (true, false) => PartialOrder::LessThan,
        (false, true) => PartialOrder::GreaterThan,
        (false, false) => PartialOrder::Incomparable,
    }
}

/// Componentwise order on pairs.
pub fn product<A, B, RA, RB>(rel_a: RA, rel_b: RB) -> impl Fn(&(A, B), &(A, B)) -> PartialOrder
where
    RA: RelationshipEvaluator<A>,
    RB: RelationshipEvaluator<B>,
{
    move |x, y| {
        let first = rel_a(&x.0, &y.0);
        let second = rel_b(&x.1, &y.1);
        match (first, second) {
            (PartialOrder::Equal, PartialOrder::Equal) => PartialOrder::Equal,
            (f, s) if f.is_le() && s.is_le() => PartialOrder::LessThan,
            (f, s) if f.is_ge() && s.is_ge() => PartialOrder::GreaterThan,
            _ => PartialOrder::Incomparable,
        }
    }
}
