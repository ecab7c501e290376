use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::atom::{Atom, AtomSet};
use crate::error::EvalError;

/// Runtime name of a float class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FloatClass {
    NaNExtReal,
    NaN,
    ExtReal,
    Real,
    ExtNonZero,
    NonZero,
    ExtNonNeg,
    ExtNonPos,
    NonNeg,
    NonPos,
    ExtPos,
    ExtNeg,
    Pos,
    Neg,
    Zero,
    One,
    Inf,
    PosInf,
    NegInf,
}

impl FloatClass {
    pub const ALL: [FloatClass; 19] = [
        FloatClass::NaNExtReal,
        FloatClass::NaN,
        FloatClass::ExtReal,
        FloatClass::Real,
        FloatClass::ExtNonZero,
        FloatClass::NonZero,
        FloatClass::ExtNonNeg,
        FloatClass::ExtNonPos,
        FloatClass::NonNeg,
        FloatClass::NonPos,
        FloatClass::ExtPos,
        FloatClass::ExtNeg,
        FloatClass::Pos,
        FloatClass::Neg,
        FloatClass::Zero,
        FloatClass::One,
        FloatClass::Inf,
        FloatClass::PosInf,
        FloatClass::NegInf,
    ];

    /// Classes with a full `+ - * /` result table.
    pub const OPERANDS: [FloatClass; 12] = [
        FloatClass::Zero,
        FloatClass::One,
        FloatClass::Pos,
        FloatClass::Neg,
        FloatClass::NonNeg,
        FloatClass::NonPos,
        FloatClass::Real,
        FloatClass::ExtPos,
        FloatClass::ExtNeg,
        FloatClass::ExtReal,
        FloatClass::NaN,
        FloatClass::NaNExtReal,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FloatClass::NaNExtReal => "NaNExtReal",
            FloatClass::NaN => "NaN",
            FloatClass::ExtReal => "ExtReal",
            FloatClass::Real => "Real",
            FloatClass::ExtNonZero => "ExtNonZero",
            FloatClass::NonZero => "NonZero",
            FloatClass::ExtNonNeg => "ExtNonNeg",
            FloatClass::ExtNonPos => "ExtNonPos",
            FloatClass::NonNeg => "NonNeg",
            FloatClass::NonPos => "NonPos",
            FloatClass::ExtPos => "ExtPos",
            FloatClass::ExtNeg => "ExtNeg",
            FloatClass::Pos => "Pos",
            FloatClass::Neg => "Neg",
            FloatClass::Zero => "Zero",
            FloatClass::One => "One",
            FloatClass::Inf => "Inf",
            FloatClass::PosInf => "PosInf",
            FloatClass::NegInf => "NegInf",
        }
    }

    /// The atoms a value of this class may fall into. `One` is not an
    /// atom union; it reports the atom of `1.0`.
    pub const fn atoms(self) -> AtomSet {
        use Atom::*;
        match self {
            FloatClass::NaNExtReal => AtomSet::ALL,
            FloatClass::NaN => AtomSet::of(&[NaN]),
            FloatClass::ExtReal => AtomSet::of(&[NegInf, NegFinite, Zero, PosFinite, PosInf]),
            FloatClass::Real => AtomSet::of(&[NegFinite, Zero, PosFinite]),
            FloatClass::ExtNonZero => AtomSet::of(&[NegInf, NegFinite, PosFinite, PosInf]),
            FloatClass::NonZero => AtomSet::of(&[NegFinite, PosFinite]),
            FloatClass::ExtNonNeg => AtomSet::of(&[Zero, PosFinite, PosInf]),
            FloatClass::ExtNonPos => AtomSet::of(&[NegInf, NegFinite, Zero]),
            FloatClass::NonNeg => AtomSet::of(&[Zero, PosFinite]),
            FloatClass::NonPos => AtomSet::of(&[NegFinite, Zero]),
            FloatClass::ExtPos => AtomSet::of(&[PosFinite, PosInf]),
            FloatClass::ExtNeg => AtomSet::of(&[NegInf, NegFinite]),
            FloatClass::Pos | FloatClass::One => AtomSet::of(&[PosFinite]),
            FloatClass::Neg => AtomSet::of(&[NegFinite]),
            FloatClass::Zero => AtomSet::of(&[Zero]),
            FloatClass::Inf => AtomSet::of(&[NegInf, PosInf]),
            FloatClass::PosInf => AtomSet::of(&[PosInf]),
            FloatClass::NegInf => AtomSet::of(&[NegInf]),
        }
    }

    pub fn is_valid(self, v: f64) -> bool {
        match self {
            FloatClass::One => v == 1.0,
            _ => self.atoms().contains(Atom::of(v)),
        }
    }

    /// Whether every value of `self` is a value of `other`.
    pub fn is_subclass_of(self, other: FloatClass) -> bool {
        if other == FloatClass::One {
            return self == FloatClass::One;
        }
        self.atoms().is_subset(other.atoms())
    }

    /// Proper supertypes, most general first.
    pub fn supertypes(self) -> Vec<FloatClass> {
        FloatClass::ALL
            .into_iter()
            .filter(|&c| c != self && self.is_subclass_of(c))
            .collect()
    }

    /// The smallest class (other than `One`) containing every atom in
    /// `atoms`. `None` for the empty set, which has no unique smallest class.
    pub fn tightest(atoms: AtomSet) -> Option<FloatClass> {
        let candidates: Vec<FloatClass> = FloatClass::ALL
            .into_iter()
            .filter(|&c| c != FloatClass::One && atoms.is_subset(c.atoms()))
            .collect();
        let smallest = candidates.iter().copied().min_by_key(|c| c.atoms().len())?;
        candidates
            .iter()
            .all(|c| smallest.atoms().is_subset(c.atoms()))
            .then_some(smallest)
    }
}

impl fmt::Display for FloatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FloatClass {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FloatClass::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EvalError::UnknownClass(s.to_owned()))
    }
}
