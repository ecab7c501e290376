//! Type-level float classes and their subtype lattice.

use lvd_semantic::{subtype_edges, SemanticClass, Validates, Wrapped};

use super::class::FloatClass;

/// Links a type-level float class to its runtime name.
pub trait FloatTag: SemanticClass {
    const CLASS: FloatClass;
}

macro_rules! float_tags {
    ($($(#[$meta:meta])* $name:ident,)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $name {}

            impl SemanticClass for $name {
                const NAME: &'static str = stringify!($name);
                type Kind = Wrapped;
            }

            impl FloatTag for $name {
                const CLASS: FloatClass = FloatClass::$name;
            }

            impl Validates<f64> for $name {
                fn is_valid(cv: &f64) -> bool {
                    FloatClass::$name.is_valid(*cv)
                }
            }

            impl Validates<f32> for $name {
                fn is_valid(cv: &f32) -> bool {
                    FloatClass::$name.is_valid(f64::from(*cv))
                }
            }
        )*
    };
}

float_tags! {
    /// Any value, NaN included.
    NaNExtReal,
    NaN,
    /// Any non-NaN value, infinities included.
    ExtReal,
    /// Finite values.
    Real,
    ExtNonZero,
    NonZero,
    ExtNonNeg,
    ExtNonPos,
    NonNeg,
    NonPos,
    ExtPos,
    ExtNeg,
    /// Finite and strictly positive.
    Pos,
    Neg,
    /// `0.0` or `-0.0`.
    Zero,
    /// Exactly `1.0`.
    One,
    Inf,
    PosInf,
    NegInf,
}

subtype_edges! {
    NaN => [NaNExtReal];
    ExtReal => [NaNExtReal];
    Real => [NaNExtReal, ExtReal];
    ExtNonZero => [NaNExtReal, ExtReal];
    NonZero => [NaNExtReal, ExtReal, Real, ExtNonZero];
    ExtNonNeg => [NaNExtReal, ExtReal];
    ExtNonPos => [NaNExtReal, ExtReal];
    NonNeg => [NaNExtReal, ExtReal, Real, ExtNonNeg];
    NonPos => [NaNExtReal, ExtReal, Real, ExtNonPos];
    ExtPos => [NaNExtReal, ExtReal, ExtNonZero, ExtNonNeg];
    ExtNeg => [NaNExtReal, ExtReal, ExtNonZero, ExtNonPos];
    Pos => [NaNExtReal, ExtReal, Real, ExtNonZero, NonZero, ExtNonNeg, NonNeg, ExtPos];
    Neg => [NaNExtReal, ExtReal, Real, ExtNonZero, NonZero, ExtNonPos, NonPos, ExtNeg];
    Zero => [NaNExtReal, ExtReal, Real, ExtNonNeg, ExtNonPos, NonNeg, NonPos];
    One => [NaNExtReal, ExtReal, Real, ExtNonZero, NonZero, ExtNonNeg, NonNeg, ExtPos, Pos];
    Inf => [NaNExtReal, ExtReal, ExtNonZero];
    PosInf => [NaNExtReal, ExtReal, ExtNonZero, ExtNonNeg, ExtPos, Inf];
    NegInf => [NaNExtReal, ExtReal, ExtNonZero, ExtNonPos, ExtNeg, Inf];
}

#[cfg(test)]
mod tests {
    use super::*;
    use lvd_semantic::{SubtypeOf, SV};

    fn supertype_of<Sub: SubtypeOf<Sup> + FloatTag, Sup: FloatTag>() -> (FloatClass, FloatClass) {
        (Sub::CLASS, Sup::CLASS)
    }

    #[test]
    fn declared_edges_agree_with_the_runtime_lattice() {
        let edges = [
            supertype_of::<Pos, ExtPos>(),
            supertype_of::<One, Pos>(),
            supertype_of::<Zero, NonPos>(),
            supertype_of::<PosInf, Inf>(),
            supertype_of::<NegInf, ExtNeg>(),
            supertype_of::<NonZero, ExtNonZero>(),
            supertype_of::<NaN, NaNExtReal>(),
        ];
        for (sub, sup) in edges {
            assert!(sub.is_subclass_of(sup), "{sub} <: {sup}");
            assert!(sub.supertypes().contains(&sup));
        }
    }

    #[test]
    fn tags_validate_through_the_runtime_class() {
        assert!(SV::<Pos, f64>::new(2.5).is_ok());
        assert!(SV::<Pos, f64>::new(-2.5).is_err());
        assert!(SV::<One, f32>::new(1.0).is_ok());
        assert!(SV::<NegInf, f64>::new(f64::NEG_INFINITY).is_ok());
        assert_eq!(<ExtNonNeg as SemanticClass>::NAME, "ExtNonNeg");
    }

    #[test]
    fn one_upcasts_to_pos_without_copying() {
        let one = SV::<One, f64>::new(1.0).unwrap();
        let pos: &SV<Pos, f64> = one.as_super();
        assert_eq!(*pos.cv(), 1.0);
        let real: SV<Real, f64> = one.upcast().unwrap();
        assert_eq!(*real.cv(), 1.0);
    }
}
