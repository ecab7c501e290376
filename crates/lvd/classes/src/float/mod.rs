//! Semantic classes over IEEE-754 doubles.
//!
//! Each class is a union of sign/finiteness regions (see [`Atom`]); `One`
//! is the exception and holds exactly `1.0`. The lattice runs from
//! `NaNExtReal` (any value) down to the single-region classes.
//!
//! ```text
//!                         NaNExtReal
//!                     ┌───────┴────────┐
//!                    NaN            ExtReal
//!              ┌──────────┬──────────┼──────────┐
//!            Real    ExtNonZero  ExtNonNeg  ExtNonPos
//!         ┌───┴───┐      │    ...
//!      NonNeg  NonPos  NonZero  ExtPos  ExtNeg  Inf
//!         │       │     ...
//!        Pos     Neg   Zero    PosInf  NegInf
//!         │
//!        One
//! ```
//!
//! Operators between `SV<_, f64>` values return the class given by the
//! result table in [`rules`]; [`table::RuleTable`] exposes the same table at
//! runtime.

mod atom;
mod class;
pub mod model;
pub mod rules;
pub mod table;
mod tags;

pub use atom::{Atom, AtomSet};
pub use class::FloatClass;
pub use model::{infer, infer_neg, OpKind};
pub use rules::{Rule, NEG_RULES, RULES};
pub use table::{eval, DynValue, RuleTable};
pub use tags::{
    ExtNeg, ExtNonNeg, ExtNonPos, ExtNonZero, ExtPos, ExtReal, FloatTag, Inf, NaN, NaNExtReal,
    Neg, NegInf, NonNeg, NonPos, NonZero, One, Pos, PosInf, Real, Zero,
};

#[cfg(test)]
mod tests {
    use super::*;
    use lvd_semantic::{op, BinaryOperator, BinaryRule, UnaryRule, SV};
    use proptest::prelude::*;

    fn output<Op, L, R>() -> FloatClass
    where
        Op: BinaryOperator,
        L: BinaryRule<Op, R>,
        L::Output: FloatTag,
    {
        <L::Output as FloatTag>::CLASS
    }

    #[test]
    fn table_rows_match_the_abstract_interpretation() {
        for rule in RULES {
            assert_eq!(
                infer(rule.op, rule.lhs, rule.rhs),
                Some(rule.output),
                "{} {} {}",
                rule.lhs,
                rule.op,
                rule.rhs
            );
        }
        for &(class, out) in NEG_RULES {
            assert_eq!(infer_neg(class), Some(out), "-{class}");
        }
    }

    #[test]
    fn type_level_rules_match_the_runtime_table() {
        let table = RuleTable::standard();
        let checks = [
            (OpKind::Add, Pos::CLASS, Pos::CLASS, output::<op::Add, Pos, Pos>()),
            (OpKind::Div, Zero::CLASS, Zero::CLASS, output::<op::Div, Zero, Zero>()),
            (OpKind::Mul, Zero::CLASS, Pos::CLASS, output::<op::Mul, Zero, Pos>()),
            (OpKind::Add, ExtNeg::CLASS, ExtPos::CLASS, output::<op::Add, ExtNeg, ExtPos>()),
            (OpKind::Mul, One::CLASS, Pos::CLASS, output::<op::Mul, One, Pos>()),
            (OpKind::Sub, NonNeg::CLASS, Neg::CLASS, output::<op::Sub, NonNeg, Neg>()),
            (OpKind::Div, Real::CLASS, One::CLASS, output::<op::Div, Real, One>()),
            (OpKind::Mul, NaN::CLASS, ExtReal::CLASS, output::<op::Mul, NaN, ExtReal>()),
        ];
        for (op, lhs, rhs, out) in checks {
            assert_eq!(table.result(op, lhs, rhs), Some(out), "{lhs} {op} {rhs}");
        }
        assert_eq!(
            <<One as UnaryRule<op::Neg>>::Output as FloatTag>::CLASS,
            FloatClass::Neg
        );
    }

    #[test]
    fn operators_on_semantic_values() {
        let a = SV::<Pos, f64>::new(1.5).unwrap();
        let b = SV::<Pos, f64>::new(2.5).unwrap();
        let sum: SV<ExtPos, f64> = (a + b).unwrap();
        assert_eq!(*sum.cv(), 4.0);

        let z = SV::<Zero, f64>::new(0.0).unwrap();
        let nan: SV<NaN, f64> = (z / z).unwrap();
        assert!(nan.cv().is_nan());

        let zero: SV<Zero, f64> = (z * b).unwrap();
        assert_eq!(*zero.cv(), 0.0);

        let one = SV::<One, f64>::new(1.0).unwrap();
        let same: SV<Pos, f64> = (one * b).unwrap();
        assert_eq!(same, b);

        let neg: SV<Neg, f64> = (-a).unwrap();
        assert_eq!(*neg.cv(), -1.5);

        let raw: f64 = (a * 4.0).unwrap();
        assert_eq!(raw, 6.0);
        let raw: f64 = (1.0 - a).unwrap();
        assert_eq!(raw, -0.5);
    }

    #[test]
    fn positive_products_may_underflow() {
        let tiny = SV::<Pos, f64>::new(1e-200).unwrap();
        let product: SV<ExtNonNeg, f64> = (tiny * tiny).unwrap();
        assert_eq!(*product.cv(), 0.0);
    }

    fn value_in(class: FloatClass) -> BoxedStrategy<f64> {
        let values: Vec<f64> = [
            f64::NAN,
            f64::NEG_INFINITY,
            f64::MIN,
            -1e300,
            -2.5,
            -1.0,
            -f64::MIN_POSITIVE,
            -1e-310,
            -0.0,
            0.0,
            1e-310,
            f64::MIN_POSITIVE,
            1e-200,
            1.0,
            3.0,
            1e300,
            f64::MAX,
            f64::INFINITY,
        ]
        .into_iter()
        .filter(|v| class.is_valid(*v))
        .collect();
        match class {
            // Too sparse for a filtered generator.
            FloatClass::Zero | FloatClass::One | FloatClass::NaN => {
                proptest::sample::select(values).boxed()
            }
            _ => {
                let member = any::<f64>().prop_filter("class member", move |v| class.is_valid(*v));
                prop_oneof![proptest::sample::select(values), member].boxed()
            }
        }
    }

    fn operands() -> impl Strategy<Value = (OpKind, FloatClass, f64, FloatClass, f64)> {
        (
            proptest::sample::select(OpKind::ALL.to_vec()),
            proptest::sample::select(FloatClass::OPERANDS.to_vec()),
            proptest::sample::select(FloatClass::OPERANDS.to_vec()),
        )
            .prop_flat_map(|(op, l, r)| {
                (Just(op), Just(l), value_in(l), Just(r), value_in(r))
            })
    }

    proptest! {
        #[test]
        fn rule_table_is_sound((op, l, x, r, y) in operands()) {
            let out = RuleTable::standard().result(op, l, r).unwrap();
            let v = op.apply(x, y);
            prop_assert!(out.is_valid(v), "{} {} {} = {} not in {}", x, op, y, v, out);
        }

        #[test]
        fn negation_is_sound(x in any::<f64>()) {
            let class = FloatClass::OPERANDS.into_iter().find(|c| c.is_valid(x)).unwrap();
            let out = RuleTable::standard().neg_result(class).unwrap();
            prop_assert!(out.is_valid(-x));
        }
    }
}
