//! Checks that a relation behaves as a partial order over sample elements.

use std::fmt::Debug;

use crate::error::OrderLawViolation;
use crate::order::{PartialOrder, RelationshipEvaluator};

/// Verifies reflexivity, duality, antisymmetry and transitivity of `rel`
/// over every pair and triple drawn from `elements`.
///
/// Antisymmetry is checked as substitutability: elements that compare
/// equal must compare the same way against everything else.
pub fn verify_partial_order<T, F>(elements: &[T], rel: F) -> Result<(), OrderLawViolation>
where
    T: Debug,
    F: RelationshipEvaluator<T>,
{
    for a in elements {
        let r = rel(a, a);
        if r != PartialOrder::Equal {
            return Err(OrderLawViolation::NotReflexive {
                element: format!("{a:?}"),
                found: r,
            });
        }
    }
    for a in elements {
        for b in elements {
            let forward = rel(a, b);
            let backward = rel(b, a);
            if backward != forward.reversed() {
                return Err(OrderLawViolation::NotDual {
                    a: format!("{a:?}"),
                    b: format!("{b:?}"),
                    forward,
                    backward,
                });
            }
        }
    }
    for a in elements {
        for b in elements {
            let ab = rel(a, b);
            for c in elements {
                let bc = rel(b, c);
                if ab == PartialOrder::Equal && rel(a, c) != bc {
                    return Err(OrderLawViolation::NotAntisymmetric {
                        a: format!("{a:?}"),
                        b: format!("{b:?}"),
                        c: format!("{c:?}"),
                    });
                }
                if ab.is_le() && bc.is_le() && !rel(a, c).is_le() {
                    return Err(OrderLawViolation::NotTransitive {
                        a: format!("{a:?}"),
                        b: format!("{b:?}"),
                        c: format!("{c:?}"),
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{compare_partial, compare_total, divides, product};

    #[test]
    fn standard_relations_are_partial_orders() {
        let nums: Vec<u64> = (0..=24).collect();
        verify_partial_order(&nums, divides).unwrap();
        let pairs: Vec<(i32, i32)> = (0..3).flat_map(|a| (0..3).map(move |b| (a, b))).collect();
        verify_partial_order(&pairs, product(compare_total::<i32>, compare_total::<i32>)).unwrap();
        verify_partial_order(&[0.5, 1.0, -3.0], compare_partial::<f64>).unwrap();
    }

    #[test]
    fn nan_is_not_reflexive() {
        let err = verify_partial_order(&[1.0, f64::NAN], compare_partial::<f64>).unwrap_err();
        assert!(matches!(err, OrderLawViolation::NotReflexive { .. }));
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn one_sided_relation_is_not_dual() {
        let rel = |a: &i32, b: &i32| {
            if a == b {
                PartialOrder::Equal
            } else {
                PartialOrder::LessThan
            }
        };
        assert!(matches!(
            verify_partial_order(&[1, 2], rel),
            Err(OrderLawViolation::NotDual { .. })
        ));
    }

    #[test]
    fn cycle_is_not_transitive() {
        // rock < paper < scissors < rock
        let rel = |a: &u8, b: &u8| match (b + 3 - a) % 3 {
            0 => PartialOrder::Equal,
            1 => PartialOrder::LessThan,
            _ => PartialOrder::GreaterThan,
        };
        assert!(matches!(
            verify_partial_order(&[0, 1, 2], rel),
            Err(OrderLawViolation::NotTransitive { .. })
        ));
    }
}
