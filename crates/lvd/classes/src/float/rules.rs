//! Result classes of `+ - * /` and unary `-` over the float lattice.
//!
//! Every entry is registered twice: as a `BinaryRule` impl (type level)
//! and as a row of [`RULES`] (runtime). Results are cast and asserted, so
//! a wrong entry fails loudly in debug builds.
//!
//! Raw `f64` operands are allowed on either side of every operand class
//! and produce a raw `f64`.

use lvd_semantic::{op, BinaryRule, Concrete, ResultPolicy, UnaryRule};
use serde::Serialize;

use super::class::FloatClass;
use super::model::OpKind;
use super::tags::*;

/// One row of the binary result table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub op: OpKind,
    pub lhs: FloatClass,
    pub rhs: FloatClass,
    pub output: FloatClass,
}

macro_rules! float_rules {
    ($($op:ident {
        symmetric { $(($sl:ident, $sr:ident) => $so:ident,)* }
        ordered { $(($ol:ident, $or:ident) => $oo:ident,)* }
    })*) => {
        lvd_semantic::binary_rules! {
            $(
                symmetric op::$op as CastAndAssert { $($sl, $sr => $so;)* }
                ordered op::$op as CastAndAssert { $($ol, $or => $oo;)* }
            )*
        }

        /// The binary result table, both orders of every symmetric pair
        /// included.
        pub const RULES: &[Rule] = &[
            $(
                $(
                    Rule { op: OpKind::$op, lhs: FloatClass::$sl, rhs: FloatClass::$sr, output: FloatClass::$so },
                    Rule { op: OpKind::$op, lhs: FloatClass::$sr, rhs: FloatClass::$sl, output: FloatClass::$so },
                )*
                $(
                    Rule { op: OpKind::$op, lhs: FloatClass::$ol, rhs: FloatClass::$or, output: FloatClass::$oo },
                )*
            )*
        ];
    };
}

macro_rules! neg_rules {
    ($($class:ident => $out:ident,)*) => {
        $(
            impl UnaryRule<op::Neg> for $class {
                type Output = $out;
                const RESULT_POLICY: ResultPolicy = ResultPolicy::CastAndAssert;
            }
        )*

        /// Result class of unary `-` for every class.
        pub const NEG_RULES: &[(FloatClass, FloatClass)] = &[
            $((FloatClass::$class, FloatClass::$out),)*
        ];
    };
}

macro_rules! raw_operand_rules {
    ($($class:ident),*) => {
        $(
            raw_operand_rules!(@class $class: Add, Sub, Mul, Div);
        )*
    };
    (@class $class:ident: $($op:ident),*) => {
        $(
            impl BinaryRule<op::$op, Concrete<f64>> for $class {
                type Output = lvd_semantic::Base;
            }

            impl BinaryRule<op::$op, $class> for Concrete<f64> {
                type Output = lvd_semantic::Base;
            }
        )*
    };
}

float_rules! {
    Add {
        symmetric {
            (Zero, One) => Pos,
            (Zero, Pos) => Pos,
            (Zero, Neg) => Neg,
            (Zero, NonNeg) => NonNeg,
            (Zero, NonPos) => NonPos,
            (Zero, Real) => Real,
            (Zero, ExtPos) => ExtPos,
            (Zero, ExtNeg) => ExtNeg,
            (Zero, ExtReal) => ExtReal,
            (Zero, NaN) => NaN,
            (Zero, NaNExtReal) => NaNExtReal,
            (One, Pos) => ExtPos,
            (One, Neg) => Real,
            (One, NonNeg) => ExtPos,
            (One, NonPos) => Real,
            (One, Real) => ExtReal,
            (One, ExtPos) => ExtPos,
            (One, ExtNeg) => ExtReal,
            (One, ExtReal) => ExtReal,
            (One, NaN) => NaN,
            (One, NaNExtReal) => NaNExtReal,
            (Pos, Neg) => Real,
            (Pos, NonNeg) => ExtPos,
            (Pos, NonPos) => Real,
            (Pos, Real) => ExtReal,
            (Pos, ExtPos) => ExtPos,
            (Pos, ExtNeg) => ExtReal,
            (Pos, ExtReal) => ExtReal,
            (Pos, NaN) => NaN,
            (Pos, NaNExtReal) => NaNExtReal,
            (Neg, NonNeg) => Real,
            (Neg, NonPos) => ExtNeg,
            (Neg, Real) => ExtReal,
            (Neg, ExtPos) => ExtReal,
            (Neg, ExtNeg) => ExtNeg,
            (Neg, ExtReal) => ExtReal,
            (Neg, NaN) => NaN,
            (Neg, NaNExtReal) => NaNExtReal,
            (NonNeg, NonPos) => Real,
            (NonNeg, Real) => ExtReal,
            (NonNeg, ExtPos) => ExtPos,
            (NonNeg, ExtNeg) => ExtReal,
            (NonNeg, ExtReal) => ExtReal,
            (NonNeg, NaN) => NaN,
            (NonNeg, NaNExtReal) => NaNExtReal,
            (NonPos, Real) => ExtReal,
            (NonPos, ExtPos) => ExtReal,
            (NonPos, ExtNeg) => ExtNeg,
            (NonPos, ExtReal) => ExtReal,
            (NonPos, NaN) => NaN,
            (NonPos, NaNExtReal) => NaNExtReal,
            (Real, ExtPos) => ExtReal,
            (Real, ExtNeg) => ExtReal,
            (Real, ExtReal) => ExtReal,
            (Real, NaN) => NaN,
            (Real, NaNExtReal) => NaNExtReal,
            (ExtPos, ExtNeg) => NaNExtReal,
            (ExtPos, ExtReal) => NaNExtReal,
            (ExtPos, NaN) => NaN,
            (ExtPos, NaNExtReal) => NaNExtReal,
            (ExtNeg, ExtReal) => NaNExtReal,
            (ExtNeg, NaN) => NaN,
            (ExtNeg, NaNExtReal) => NaNExtReal,
            (ExtReal, NaN) => NaN,
            (ExtReal, NaNExtReal) => NaNExtReal,
            (NaN, NaNExtReal) => NaN,
        }
        ordered {
            (Zero, Zero) => Zero,
            (One, One) => ExtPos,
            (Pos, Pos) => ExtPos,
            (Neg, Neg) => ExtNeg,
            (NonNeg, NonNeg) => ExtNonNeg,
            (NonPos, NonPos) => ExtNonPos,
            (Real, Real) => ExtReal,
            (ExtPos, ExtPos) => ExtPos,
            (ExtNeg, ExtNeg) => ExtNeg,
            (ExtReal, ExtReal) => NaNExtReal,
            (NaN, NaN) => NaN,
            (NaNExtReal, NaNExtReal) => NaNExtReal,
        }
    }
    Sub {
        symmetric {}
        ordered {
            (Zero, Zero) => Zero,
            (Zero, One) => Neg,
            (Zero, Pos) => Neg,
            (Zero, Neg) => Pos,
            (Zero, NonNeg) => NonPos,
            (Zero, NonPos) => NonNeg,
            (Zero, Real) => Real,
            (Zero, ExtPos) => ExtNeg,
            (Zero, ExtNeg) => ExtPos,
            (Zero, ExtReal) => ExtReal,
            (Zero, NaN) => NaN,
            (Zero, NaNExtReal) => NaNExtReal,
            (One, Zero) => Pos,
            (One, One) => Real,
            (One, Pos) => Real,
            (One, Neg) => ExtPos,
            (One, NonNeg) => Real,
            (One, NonPos) => ExtPos,
            (One, Real) => ExtReal,
            (One, ExtPos) => ExtReal,
            (One, ExtNeg) => ExtPos,
            (One, ExtReal) => ExtReal,
            (One, NaN) => NaN,
            (One, NaNExtReal) => NaNExtReal,
            (Pos, Zero) => Pos,
            (Pos, One) => Real,
            (Pos, Pos) => Real,
            (Pos, Neg) => ExtPos,
            (Pos, NonNeg) => Real,
            (Pos, NonPos) => ExtPos,
            (Pos, Real) => ExtReal,
            (Pos, ExtPos) => ExtReal,
            (Pos, ExtNeg) => ExtPos,
            (Pos, ExtReal) => ExtReal,
            (Pos, NaN) => NaN,
            (Pos, NaNExtReal) => NaNExtReal,
            (Neg, Zero) => Neg,
            (Neg, One) => ExtNeg,
            (Neg, Pos) => ExtNeg,
            (Neg, Neg) => Real,
            (Neg, NonNeg) => ExtNeg,
            (Neg, NonPos) => Real,
            (Neg, Real) => ExtReal,
            (Neg, ExtPos) => ExtNeg,
            (Neg, ExtNeg) => ExtReal,
            (Neg, ExtReal) => ExtReal,
            (Neg, NaN) => NaN,
            (Neg, NaNExtReal) => NaNExtReal,
            (NonNeg, Zero) => NonNeg,
            (NonNeg, One) => Real,
            (NonNeg, Pos) => Real,
            (NonNeg, Neg) => ExtPos,
            (NonNeg, NonNeg) => Real,
            (NonNeg, NonPos) => ExtNonNeg,
            (NonNeg, Real) => ExtReal,
            (NonNeg, ExtPos) => ExtReal,
            (NonNeg, ExtNeg) => ExtPos,
            (NonNeg, ExtReal) => ExtReal,
            (NonNeg, NaN) => NaN,
            (NonNeg, NaNExtReal) => NaNExtReal,
            (NonPos, Zero) => NonPos,
            (NonPos, One) => ExtNeg,
            (NonPos, Pos) => ExtNeg,
            (NonPos, Neg) => Real,
            (NonPos, NonNeg) => ExtNonPos,
            (NonPos, NonPos) => Real,
            (NonPos, Real) => ExtReal,
            (NonPos, ExtPos) => ExtNeg,
            (NonPos, ExtNeg) => ExtReal,
            (NonPos, ExtReal) => ExtReal,
            (NonPos, NaN) => NaN,
            (NonPos, NaNExtReal) => NaNExtReal,
            (Real, Zero) => Real,
            (Real, One) => ExtReal,
            (Real, Pos) => ExtReal,
            (Real, Neg) => ExtReal,
            (Real, NonNeg) => ExtReal,
            (Real, NonPos) => ExtReal,
            (Real, Real) => ExtReal,
            (Real, ExtPos) => ExtReal,
            (Real, ExtNeg) => ExtReal,
            (Real, ExtReal) => ExtReal,
            (Real, NaN) => NaN,
            (Real, NaNExtReal) => NaNExtReal,
            (ExtPos, Zero) => ExtPos,
            (ExtPos, One) => ExtReal,
            (ExtPos, Pos) => ExtReal,
            (ExtPos, Neg) => ExtPos,
            (ExtPos, NonNeg) => ExtReal,
            (ExtPos, NonPos) => ExtPos,
            (ExtPos, Real) => ExtReal,
            (ExtPos, ExtPos) => NaNExtReal,
            (ExtPos, ExtNeg) => ExtPos,
            (ExtPos, ExtReal) => NaNExtReal,
            (ExtPos, NaN) => NaN,
            (ExtPos, NaNExtReal) => NaNExtReal,
            (ExtNeg, Zero) => ExtNeg,
            (ExtNeg, One) => ExtNeg,
            (ExtNeg, Pos) => ExtNeg,
            (ExtNeg, Neg) => ExtReal,
            (ExtNeg, NonNeg) => ExtNeg,
            (ExtNeg, NonPos) => ExtReal,
            (ExtNeg, Real) => ExtReal,
            (ExtNeg, ExtPos) => ExtNeg,
            (ExtNeg, ExtNeg) => NaNExtReal,
            (ExtNeg, ExtReal) => NaNExtReal,
            (ExtNeg, NaN) => NaN,
            (ExtNeg, NaNExtReal) => NaNExtReal,
            (ExtReal, Zero) => ExtReal,
            (ExtReal, One) => ExtReal,
            (ExtReal, Pos) => ExtReal,
            (ExtReal, Neg) => ExtReal,
            (ExtReal, NonNeg) => ExtReal,
            (ExtReal, NonPos) => ExtReal,
            (ExtReal, Real) => ExtReal,
            (ExtReal, ExtPos) => NaNExtReal,
            (ExtReal, ExtNeg) => NaNExtReal,
            (ExtReal, ExtReal) => NaNExtReal,
            (ExtReal, NaN) => NaN,
            (ExtReal, NaNExtReal) => NaNExtReal,
            (NaN, Zero) => NaN,
            (NaN, One) => NaN,
            (NaN, Pos) => NaN,
            (NaN, Neg) => NaN,
            (NaN, NonNeg) => NaN,
            (NaN, NonPos) => NaN,
            (NaN, Real) => NaN,
            (NaN, ExtPos) => NaN,
            (NaN, ExtNeg) => NaN,
            (NaN, ExtReal) => NaN,
            (NaN, NaN) => NaN,
            (NaN, NaNExtReal) => NaN,
            (NaNExtReal, Zero) => NaNExtReal,
            (NaNExtReal, One) => NaNExtReal,
            (NaNExtReal, Pos) => NaNExtReal,
            (NaNExtReal, Neg) => NaNExtReal,
            (NaNExtReal, NonNeg) => NaNExtReal,
            (NaNExtReal, NonPos) => NaNExtReal,
            (NaNExtReal, Real) => NaNExtReal,
            (NaNExtReal, ExtPos) => NaNExtReal,
            (NaNExtReal, ExtNeg) => NaNExtReal,
            (NaNExtReal, ExtReal) => NaNExtReal,
            (NaNExtReal, NaN) => NaN,
            (NaNExtReal, NaNExtReal) => NaNExtReal,
        }
    }
    Mul {
        symmetric {
            (Zero, One) => Zero,
            (Zero, Pos) => Zero,
            (Zero, Neg) => Zero,
            (Zero, NonNeg) => Zero,
            (Zero, NonPos) => Zero,
            (Zero, Real) => Zero,
            (Zero, ExtPos) => NaNExtReal,
            (Zero, ExtNeg) => NaNExtReal,
            (Zero, ExtReal) => NaNExtReal,
            (Zero, NaN) => NaN,
            (Zero, NaNExtReal) => NaNExtReal,
            (One, Pos) => Pos,
            (One, Neg) => Neg,
            (One, NonNeg) => NonNeg,
            (One, NonPos) => NonPos,
            (One, Real) => Real,
            (One, ExtPos) => ExtPos,
            (One, ExtNeg) => ExtNeg,
            (One, ExtReal) => ExtReal,
            (One, NaN) => NaN,
            (One, NaNExtReal) => NaNExtReal,
            (Pos, Neg) => ExtNonPos,
            (Pos, NonNeg) => ExtNonNeg,
            (Pos, NonPos) => ExtNonPos,
            (Pos, Real) => ExtReal,
            (Pos, ExtPos) => ExtNonNeg,
            (Pos, ExtNeg) => ExtNonPos,
            (Pos, ExtReal) => ExtReal,
            (Pos, NaN) => NaN,
            (Pos, NaNExtReal) => NaNExtReal,
            (Neg, NonNeg) => ExtNonPos,
            (Neg, NonPos) => ExtNonNeg,
            (Neg, Real) => ExtReal,
            (Neg, ExtPos) => ExtNonPos,
            (Neg, ExtNeg) => ExtNonNeg,
            (Neg, ExtReal) => ExtReal,
            (Neg, NaN) => NaN,
            (Neg, NaNExtReal) => NaNExtReal,
            (NonNeg, NonPos) => ExtNonPos,
            (NonNeg, Real) => ExtReal,
            (NonNeg, ExtPos) => NaNExtReal,
            (NonNeg, ExtNeg) => NaNExtReal,
            (NonNeg, ExtReal) => NaNExtReal,
            (NonNeg, NaN) => NaN,
            (NonNeg, NaNExtReal) => NaNExtReal,
            (NonPos, Real) => ExtReal,
            (NonPos, ExtPos) => NaNExtReal,
            (NonPos, ExtNeg) => NaNExtReal,
            (NonPos, ExtReal) => NaNExtReal,
            (NonPos, NaN) => NaN,
            (NonPos, NaNExtReal) => NaNExtReal,
            (Real, ExtPos) => NaNExtReal,
            (Real, ExtNeg) => NaNExtReal,
            (Real, ExtReal) => NaNExtReal,
            (Real, NaN) => NaN,
            (Real, NaNExtReal) => NaNExtReal,
            (ExtPos, ExtNeg) => ExtNonPos,
            (ExtPos, ExtReal) => NaNExtReal,
            (ExtPos, NaN) => NaN,
            (ExtPos, NaNExtReal) => NaNExtReal,
            (ExtNeg, ExtReal) => NaNExtReal,
            (ExtNeg, NaN) => NaN,
            (ExtNeg, NaNExtReal) => NaNExtReal,
            (ExtReal, NaN) => NaN,
            (ExtReal, NaNExtReal) => NaNExtReal,
            (NaN, NaNExtReal) => NaN,
        }
        ordered {
            (Zero, Zero) => Zero,
            (One, One) => One,
            (Pos, Pos) => ExtNonNeg,
            (Neg, Neg) => ExtNonNeg,
            (NonNeg, NonNeg) => ExtNonNeg,
            (NonPos, NonPos) => ExtNonNeg,
            (Real, Real) => ExtReal,
            (ExtPos, ExtPos) => ExtNonNeg,
            (ExtNeg, ExtNeg) => ExtNonNeg,
            (ExtReal, ExtReal) => NaNExtReal,
            (NaN, NaN) => NaN,
            (NaNExtReal, NaNExtReal) => NaNExtReal,
        }
    }
    Div {
        symmetric {}
        ordered {
            (Zero, Zero) => NaN,
            (Zero, One) => Zero,
            (Zero, Pos) => Zero,
            (Zero, Neg) => Zero,
            (Zero, NonNeg) => NaNExtReal,
            (Zero, NonPos) => NaNExtReal,
            (Zero, Real) => NaNExtReal,
            (Zero, ExtPos) => Zero,
            (Zero, ExtNeg) => Zero,
            (Zero, ExtReal) => NaNExtReal,
            (Zero, NaN) => NaN,
            (Zero, NaNExtReal) => NaNExtReal,
            (One, Zero) => Inf,
            (One, One) => One,
            (One, Pos) => ExtNonNeg,
            (One, Neg) => ExtNonPos,
            (One, NonNeg) => ExtReal,
            (One, NonPos) => ExtReal,
            (One, Real) => ExtReal,
            (One, ExtPos) => ExtNonNeg,
            (One, ExtNeg) => ExtNonPos,
            (One, ExtReal) => ExtReal,
            (One, NaN) => NaN,
            (One, NaNExtReal) => NaNExtReal,
            (Pos, Zero) => Inf,
            (Pos, One) => Pos,
            (Pos, Pos) => ExtNonNeg,
            (Pos, Neg) => ExtNonPos,
            (Pos, NonNeg) => ExtReal,
            (Pos, NonPos) => ExtReal,
            (Pos, Real) => ExtReal,
            (Pos, ExtPos) => ExtNonNeg,
            (Pos, ExtNeg) => ExtNonPos,
            (Pos, ExtReal) => ExtReal,
            (Pos, NaN) => NaN,
            (Pos, NaNExtReal) => NaNExtReal,
            (Neg, Zero) => Inf,
            (Neg, One) => Neg,
            (Neg, Pos) => ExtNonPos,
            (Neg, Neg) => ExtNonNeg,
            (Neg, NonNeg) => ExtReal,
            (Neg, NonPos) => ExtReal,
            (Neg, Real) => ExtReal,
            (Neg, ExtPos) => ExtNonPos,
            (Neg, ExtNeg) => ExtNonNeg,
            (Neg, ExtReal) => ExtReal,
            (Neg, NaN) => NaN,
            (Neg, NaNExtReal) => NaNExtReal,
            (NonNeg, Zero) => NaNExtReal,
            (NonNeg, One) => NonNeg,
            (NonNeg, Pos) => ExtNonNeg,
            (NonNeg, Neg) => ExtNonPos,
            (NonNeg, NonNeg) => NaNExtReal,
            (NonNeg, NonPos) => NaNExtReal,
            (NonNeg, Real) => NaNExtReal,
            (NonNeg, ExtPos) => ExtNonNeg,
            (NonNeg, ExtNeg) => ExtNonPos,
            (NonNeg, ExtReal) => NaNExtReal,
            (NonNeg, NaN) => NaN,
            (NonNeg, NaNExtReal) => NaNExtReal,
            (NonPos, Zero) => NaNExtReal,
            (NonPos, One) => NonPos,
            (NonPos, Pos) => ExtNonPos,
            (NonPos, Neg) => ExtNonNeg,
            (NonPos, NonNeg) => NaNExtReal,
            (NonPos, NonPos) => NaNExtReal,
            (NonPos, Real) => NaNExtReal,
            (NonPos, ExtPos) => ExtNonPos,
            (NonPos, ExtNeg) => ExtNonNeg,
            (NonPos, ExtReal) => NaNExtReal,
            (NonPos, NaN) => NaN,
            (NonPos, NaNExtReal) => NaNExtReal,
            (Real, Zero) => NaNExtReal,
            (Real, One) => Real,
            (Real, Pos) => ExtReal,
            (Real, Neg) => ExtReal,
            (Real, NonNeg) => NaNExtReal,
            (Real, NonPos) => NaNExtReal,
            (Real, Real) => NaNExtReal,
            (Real, ExtPos) => ExtReal,
            (Real, ExtNeg) => ExtReal,
            (Real, ExtReal) => NaNExtReal,
            (Real, NaN) => NaN,
            (Real, NaNExtReal) => NaNExtReal,
            (ExtPos, Zero) => Inf,
            (ExtPos, One) => ExtPos,
            (ExtPos, Pos) => ExtNonNeg,
            (ExtPos, Neg) => ExtNonPos,
            (ExtPos, NonNeg) => ExtReal,
            (ExtPos, NonPos) => ExtReal,
            (ExtPos, Real) => ExtReal,
            (ExtPos, ExtPos) => NaNExtReal,
            (ExtPos, ExtNeg) => NaNExtReal,
            (ExtPos, ExtReal) => NaNExtReal,
            (ExtPos, NaN) => NaN,
            (ExtPos, NaNExtReal) => NaNExtReal,
            (ExtNeg, Zero) => Inf,
            (ExtNeg, One) => ExtNeg,
            (ExtNeg, Pos) => ExtNonPos,
            (ExtNeg, Neg) => ExtNonNeg,
            (ExtNeg, NonNeg) => ExtReal,
            (ExtNeg, NonPos) => ExtReal,
            (ExtNeg, Real) => ExtReal,
            (ExtNeg, ExtPos) => NaNExtReal,
            (ExtNeg, ExtNeg) => NaNExtReal,
            (ExtNeg, ExtReal) => NaNExtReal,
            (ExtNeg, NaN) => NaN,
            (ExtNeg, NaNExtReal) => NaNExtReal,
            (ExtReal, Zero) => NaNExtReal,
            (ExtReal, One) => ExtReal,
            (ExtReal, Pos) => ExtReal,
            (ExtReal, Neg) => ExtReal,
            (ExtReal, NonNeg) => NaNExtReal,
            (ExtReal, NonPos) => NaNExtReal,
            (ExtReal, Real) => NaNExtReal,
            (ExtReal, ExtPos) => NaNExtReal,
            (ExtReal, ExtNeg) => NaNExtReal,
            (ExtReal, ExtReal) => NaNExtReal,
            (ExtReal, NaN) => NaN,
            (ExtReal, NaNExtReal) => NaNExtReal,
            (NaN, Zero) => NaN,
            (NaN, One) => NaN,
            (NaN, Pos) => NaN,
            (NaN, Neg) => NaN,
            (NaN, NonNeg) => NaN,
            (NaN, NonPos) => NaN,
            (NaN, Real) => NaN,
            (NaN, ExtPos) => NaN,
            (NaN, ExtNeg) => NaN,
            (NaN, ExtReal) => NaN,
            (NaN, NaN) => NaN,
            (NaN, NaNExtReal) => NaN,
            (NaNExtReal, Zero) => NaNExtReal,
            (NaNExtReal, One) => NaNExtReal,
            (NaNExtReal, Pos) => NaNExtReal,
            (NaNExtReal, Neg) => NaNExtReal,
            (NaNExtReal, NonNeg) => NaNExtReal,
            (NaNExtReal, NonPos) => NaNExtReal,
            (NaNExtReal, Real) => NaNExtReal,
            (NaNExtReal, ExtPos) => NaNExtReal,
            (NaNExtReal, ExtNeg) => NaNExtReal,
            (NaNExtReal, ExtReal) => NaNExtReal,
            (NaNExtReal, NaN) => NaN,
            (NaNExtReal, NaNExtReal) => NaNExtReal,
        }
    }
}

neg_rules! {
    NaNExtReal => NaNExtReal,
    NaN => NaN,
    ExtReal => ExtReal,
    Real => Real,
    ExtNonZero => ExtNonZero,
    NonZero => NonZero,
    ExtNonNeg => ExtNonPos,
    ExtNonPos => ExtNonNeg,
    NonNeg => NonPos,
    NonPos => NonNeg,
    ExtPos => ExtNeg,
    ExtNeg => ExtPos,
    Pos => Neg,
    Neg => Pos,
    Zero => Zero,
    One => Neg,
    Inf => Inf,
    PosInf => NegInf,
    NegInf => PosInf,
}

raw_operand_rules!(
    Zero, One, Pos, Neg, NonNeg, NonPos, Real, ExtPos, ExtNeg, ExtReal, NaN, NaNExtReal
);
