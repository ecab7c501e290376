//! The six disjoint regions ("atoms") every `f64` falls into, and the
//! abstract arithmetic over them.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Atom {
    NaN,
    NegInf,
    NegFinite,
    Zero,
    PosFinite,
    PosInf,
}

impl Atom {
    pub const ALL: [Atom; 6] = [
        Atom::NaN,
        Atom::NegInf,
        Atom::NegFinite,
        Atom::Zero,
        Atom::PosFinite,
        Atom::PosInf,
    ];

    /// The atom containing `v`. Both signed zeros map to `Zero`.
    pub fn of(v: f64) -> Atom {
        if v.is_nan() {
            Atom::NaN
        } else if v == f64::NEG_INFINITY {
            Atom::NegInf
        } else if v == f64::INFINITY {
            Atom::PosInf
        } else if v == 0.0 {
            Atom::Zero
        } else if v < 0.0 {
            Atom::NegFinite
        } else {
            Atom::PosFinite
        }
    }

    pub const fn negate(self) -> Atom {
        match self {
            Atom::NaN => Atom::NaN,
            Atom::NegInf => Atom::PosInf,
            Atom::NegFinite => Atom::PosFinite,
            Atom::Zero => Atom::Zero,
            Atom::PosFinite => Atom::NegFinite,
            Atom::PosInf => Atom::NegInf,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }

    const fn is_infinite(self) -> bool {
        matches!(self, Atom::NegInf | Atom::PosInf)
    }

    const fn is_negative(self) -> bool {
        matches!(self, Atom::NegInf | Atom::NegFinite)
    }

    /// Signed atom pair `(finite, infinite)` for a product or quotient sign.
    const fn signed(negative: bool) -> (Atom, Atom) {
        if negative {
            (Atom::NegFinite, Atom::NegInf)
        } else {
            (Atom::PosFinite, Atom::PosInf)
        }
    }

    /// Every atom `a + b` can land in for `a` in `self`, `b` in `rhs`.
    pub fn add(self, rhs: Atom) -> AtomSet {
        use Atom::*;
        match (self, rhs) {
            (NaN, _) | (_, NaN) => AtomSet::of(&[NaN]),
            (NegInf, PosInf) | (PosInf, NegInf) => AtomSet::of(&[NaN]),
            (PosInf, _) | (_, PosInf) => AtomSet::of(&[PosInf]),
            (NegInf, _) | (_, NegInf) => AtomSet::of(&[NegInf]),
            (Zero, b) => AtomSet::of(&[b]),
            (a, Zero) => AtomSet::of(&[a]),
            (PosFinite, PosFinite) => AtomSet::of(&[PosFinite, PosInf]),
            (NegFinite, NegFinite) => AtomSet::of(&[NegFinite, NegInf]),
            _ => AtomSet::of(&[NegFinite, Zero, PosFinite]),
        }
    }

    pub fn sub(self, rhs: Atom) -> AtomSet {
        self.add(rhs.negate())
    }

    pub fn mul(self, rhs: Atom) -> AtomSet {
        use Atom::*;
        match (self, rhs) {
            (NaN, _) | (_, NaN) => AtomSet::of(&[NaN]),
            (Zero, b) | (b, Zero) => {
                if b.is_infinite() {
                    AtomSet::of(&[NaN])
                } else {
                    AtomSet::of(&[Zero])
                }
            }
            (a, b) => {
                let (finite, infinite) = Atom::signed(a.is_negative() != b.is_negative());
                if a.is_infinite() || b.is_infinite() {
                    AtomSet::of(&[infinite])
                } else {
                    // Finite products may underflow or overflow.
                    AtomSet::of(&[Zero, finite, infinite])
                }
            }
        }
    }

    pub fn div(self, rhs: Atom) -> AtomSet {
        use Atom::*;
        match (self, rhs) {
            (NaN, _) | (_, NaN) => AtomSet::of(&[NaN]),
            (Zero, Zero) => AtomSet::of(&[NaN]),
            (Zero, _) => AtomSet::of(&[Zero]),
            // The sign of the zero divisor is not tracked.
            (_, Zero) => AtomSet::of(&[NegInf, PosInf]),
            (a, b) => {
                let (finite, infinite) = Atom::signed(a.is_negative() != b.is_negative());
                match (a.is_infinite(), b.is_infinite()) {
                    (true, true) => AtomSet::of(&[NaN]),
                    (true, false) => AtomSet::of(&[infinite]),
                    (false, true) => AtomSet::of(&[Zero]),
                    (false, false) => AtomSet::of(&[Zero, finite, infinite]),
                }
            }
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Atom::NaN => "nan",
            Atom::NegInf => "-inf",
            Atom::NegFinite => "-finite",
            Atom::Zero => "0",
            Atom::PosFinite => "+finite",
            Atom::PosInf => "+inf",
        })
    }
}

/// A set of atoms, stored as a bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtomSet(u8);

impl AtomSet {
    pub const EMPTY: AtomSet = AtomSet(0);
    pub const ALL: AtomSet = AtomSet::of(&Atom::ALL);

    pub const fn of(atoms: &[Atom]) -> AtomSet {
        let mut bits = 0;
        let mut i = 0;
        while i < atoms.len() {
            bits |= atoms[i].bit();
            i += 1;
        }
        AtomSet(bits)
    }

    pub const fn contains(self, atom: Atom) -> bool {
        self.0 & atom.bit() != 0
    }

    pub const fn union(self, other: AtomSet) -> AtomSet {
        AtomSet(self.0 | other.0)
    }

    pub const fn is_subset(self, other: AtomSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn insert(&mut self, atom: Atom) {
        self.0 |= atom.bit();
    }

    pub fn iter(self) -> impl Iterator<Item = Atom> {
        Atom::ALL.into_iter().filter(move |a| self.contains(*a))
    }

    pub fn negate(self) -> AtomSet {
        self.iter().map(Atom::negate).collect()
    }
}

impl FromIterator<Atom> for AtomSet {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        let mut set = AtomSet::EMPTY;
        for atom in iter {
            set.insert(atom);
        }
        set
    }
}

impl fmt::Debug for AtomSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(Atom::of(f64::NAN), Atom::NaN);
        assert_eq!(Atom::of(-0.0), Atom::Zero);
        assert_eq!(Atom::of(f64::MIN_POSITIVE / 2.0), Atom::PosFinite);
        assert_eq!(Atom::of(f64::MIN), Atom::NegFinite);
        assert_eq!(Atom::of(f64::NEG_INFINITY), Atom::NegInf);
    }

    #[test]
    fn infinities_cancel_to_nan() {
        assert_eq!(Atom::PosInf.add(Atom::NegInf), AtomSet::of(&[Atom::NaN]));
        assert_eq!(Atom::PosInf.sub(Atom::PosInf), AtomSet::of(&[Atom::NaN]));
        assert_eq!(Atom::Zero.mul(Atom::NegInf), AtomSet::of(&[Atom::NaN]));
    }

    #[test]
    fn finite_products_may_leave_the_finite_range() {
        let out = Atom::PosFinite.mul(Atom::NegFinite);
        assert!(out.contains(Atom::Zero));
        assert!(out.contains(Atom::NegFinite));
        assert!(out.contains(Atom::NegInf));
        assert!(!out.contains(Atom::PosFinite));
    }

    #[test]
    fn set_operations() {
        let s = AtomSet::of(&[Atom::Zero, Atom::PosFinite]);
        assert!(s.is_subset(AtomSet::ALL));
        assert!(!AtomSet::ALL.is_subset(s));
        assert_eq!(s.len(), 2);
        assert_eq!(s.negate(), AtomSet::of(&[Atom::Zero, Atom::NegFinite]));
        assert!(AtomSet::EMPTY.is_empty());
        assert_eq!(format!("{s:?}"), "{Zero, PosFinite}");
    }
}
