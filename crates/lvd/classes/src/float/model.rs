//! Abstract interpretation of the four arithmetic operators over float
//! classes. This is the reference the rule table is checked against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::atom::{Atom, AtomSet};
use super::class::FloatClass;
use crate::error::EvalError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl OpKind {
    pub const ALL: [OpKind; 4] = [OpKind::Add, OpKind::Sub, OpKind::Mul, OpKind::Div];

    pub const fn symbol(self) -> &'static str {
        match self {
            OpKind::Add => "+",
            OpKind::Sub => "-",
            OpKind::Mul => "*",
            OpKind::Div => "/",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Sub => "sub",
            OpKind::Mul => "mul",
            OpKind::Div => "div",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            OpKind::Add => lhs + rhs,
            OpKind::Sub => lhs - rhs,
            OpKind::Mul => lhs * rhs,
            OpKind::Div => lhs / rhs,
        }
    }

    fn apply_atoms(self, lhs: Atom, rhs: Atom) -> AtomSet {
        match self {
            OpKind::Add => lhs.add(rhs),
            OpKind::Sub => lhs.sub(rhs),
            OpKind::Mul => lhs.mul(rhs),
            OpKind::Div => lhs.div(rhs),
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for OpKind {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpKind::ALL
            .into_iter()
            .find(|op| op.symbol() == s || op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EvalError::UnknownOp(s.to_owned()))
    }
}

/// Every atom `lhs op rhs` can produce.
pub fn reachable(op: OpKind, lhs: FloatClass, rhs: FloatClass) -> AtomSet {
    lhs.atoms()
        .iter()
        .flat_map(|a| rhs.atoms().iter().map(move |b| (a, b)))
        .fold(AtomSet::EMPTY, |acc, (a, b)| acc.union(op.apply_atoms(a, b)))
}

/// The tightest class `lhs op rhs` is guaranteed to land in.
///
/// `One` is an identity for multiplication (either side) and division (right
/// side), and `One * One` and `One / One` stay `One`. Elsewhere `One` is
/// treated as `Pos`.
pub fn infer(op: OpKind, lhs: FloatClass, rhs: FloatClass) -> Option<FloatClass> {
    use FloatClass::One;
    if matches!(op, OpKind::Mul | OpKind::Div) {
        if lhs == One && rhs == One {
            return Some(One);
        }
        if op == OpKind::Mul && lhs == One {
            return FloatClass::tightest(rhs.atoms());
        }
        if rhs == One {
            return FloatClass::tightest(lhs.atoms());
        }
    }
    FloatClass::tightest(reachable(op, lhs, rhs))
}

/// The tightest class of `-x` for `x` in `class`.
pub fn infer_neg(class: FloatClass) -> Option<FloatClass> {
    FloatClass::tightest(class.atoms().negate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use FloatClass::*;

    #[test]
    fn known_results() {
        assert_eq!(infer(OpKind::Add, Pos, Pos), Some(ExtPos));
        assert_eq!(infer(OpKind::Div, Zero, Zero), Some(NaN));
        assert_eq!(infer(OpKind::Mul, Zero, Pos), Some(Zero));
        assert_eq!(infer(OpKind::Add, ExtNeg, ExtPos), Some(NaNExtReal));
        assert_eq!(infer(OpKind::Mul, One, Pos), Some(Pos));
        assert_eq!(infer(OpKind::Add, Neg, Pos), Some(Real));
        assert_eq!(infer(OpKind::Mul, Pos, Pos), Some(ExtNonNeg));
    }

    #[test]
    fn one_is_an_identity_only_where_exact() {
        assert_eq!(infer(OpKind::Div, Neg, One), Some(Neg));
        assert_eq!(infer(OpKind::Div, One, One), Some(One));
        assert_eq!(infer(OpKind::Div, One, Pos), Some(ExtNonNeg));
        assert_eq!(infer(OpKind::Add, One, Zero), Some(Pos));
    }

    #[test]
    fn negation() {
        assert_eq!(infer_neg(One), Some(Neg));
        assert_eq!(infer_neg(PosInf), Some(NegInf));
        assert_eq!(infer_neg(Inf), Some(Inf));
        assert_eq!(infer_neg(NonNeg), Some(NonPos));
    }

    #[test]
    fn operator_names() {
        assert_eq!("*".parse::<OpKind>().unwrap(), OpKind::Mul);
        assert_eq!("div".parse::<OpKind>().unwrap(), OpKind::Div);
        assert!("%".parse::<OpKind>().is_err());
        assert_eq!(OpKind::Sub.to_string(), "-");
    }
}
