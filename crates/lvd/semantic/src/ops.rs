//! Operator tags and the `std::ops` implementations for [`SV`].
//!
//! Every binary operator is available for `SV op SV` (owned or borrowed on
//! both sides), `SV op T` and `T op SV` for the primitive numeric types.
//! Bitwise and shift operators are limited to the integer types. The output
//! is always `Result<Produced<Out, O>, ValidationError>`: `Out` is the class
//! named by the [`BinaryRule`] for the operand pair and `O` is the concrete
//! result type.
//!
//! The concrete operator runs before the result is checked, so integer
//! overflow behaves exactly as it does on the bare type: a panic when
//! overflow checks are on, wrapping otherwise. Classes that need
//! saturating or checked arithmetic wrap a type that provides it.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

use crate::class::{BinaryRule, Concrete, UnaryRule, Validates};
use crate::dispatch::{self, BinaryOutput, Produced, UnaryOutput};
use crate::error::ValidationError;
use crate::policy::Boundary;
use crate::value::SV;

pub trait BinaryOperator: 'static {
    const SYMBOL: &'static str;
    const BOUNDARY: Boundary;
}

pub trait UnaryOperator: 'static {
    const SYMBOL: &'static str;
    const BOUNDARY: Boundary;
}

/// Uninhabited operator tags used as the `Op` parameter of the rule traits.
pub mod op {
    use super::{BinaryOperator, UnaryOperator};
    use crate::policy::Boundary;

    macro_rules! tags {
        ($kind:ident: $($tag:ident => $symbol:literal,)*) => {
            $(
                #[derive(Debug)]
                pub enum $tag {}

                impl $kind for $tag {
                    const SYMBOL: &'static str = $symbol;
                    const BOUNDARY: Boundary = Boundary::$tag;
                }
            )*
        };
    }

    tags! { BinaryOperator:
        Add => "+",
        Sub => "-",
        Mul => "*",
        Div => "/",
        Rem => "%",
        BitXor => "^",
        BitAnd => "&",
        BitOr => "|",
        Shl => "<<",
        Shr => ">>",
    }

    tags! { UnaryOperator:
        Neg => "-",
        Not => "!",
    }
}

macro_rules! sv_binary {
    ($Trait:ident, $method:ident) => {
        impl<L, R, A, B> $Trait<SV<R, B>> for SV<L, A>
        where
            L: BinaryRule<op::$Trait, R>,
            A: $Trait<B>,
            BinaryOutput<op::$Trait, L, R>: Validates<<A as $Trait<B>>::Output>,
        {
            type Output = Result<
                Produced<BinaryOutput<op::$Trait, L, R>, <A as $Trait<B>>::Output>,
                ValidationError,
            >;

            fn $method(self, rhs: SV<R, B>) -> Self::Output {
                dispatch::binary::<op::$Trait, L, R, _>(self.into_cv().$method(rhs.into_cv()))
            }
        }

        impl<'a, 'b, L, R, A, B> $Trait<&'b SV<R, B>> for &'a SV<L, A>
        where
            L: BinaryRule<op::$Trait, R>,
            &'a A: $Trait<&'b B>,
            BinaryOutput<op::$Trait, L, R>: Validates<<&'a A as $Trait<&'b B>>::Output>,
        {
            type Output = Result<
                Produced<BinaryOutput<op::$Trait, L, R>, <&'a A as $Trait<&'b B>>::Output>,
                ValidationError,
            >;

            fn $method(self, rhs: &'b SV<R, B>) -> Self::Output {
                dispatch::binary::<op::$Trait, L, R, _>(self.cv().$method(rhs.cv()))
            }
        }
    };
}

sv_binary!(Add, add);
sv_binary!(Sub, sub);
sv_binary!(Mul, mul);
sv_binary!(Div, div);
sv_binary!(Rem, rem);
sv_binary!(BitXor, bitxor);
sv_binary!(BitAnd, bitand);
sv_binary!(BitOr, bitor);
sv_binary!(Shl, shl);
sv_binary!(Shr, shr);

// Overflow is the concrete operator's; no rule sees an overflowed operand.
macro_rules! sv_scalar {
    ($Trait:ident, $method:ident: $($t:ty),*) => {
        $(
            impl<L> $Trait<$t> for SV<L, $t>
            where
                L: BinaryRule<op::$Trait, Concrete<$t>>,
                BinaryOutput<op::$Trait, L, Concrete<$t>>: Validates<$t>,
            {
                type Output = Result<Produced<BinaryOutput<op::$Trait, L, Concrete<$t>>, $t>, ValidationError>;

                fn $method(self, rhs: $t) -> Self::Output {
                    dispatch::binary::<op::$Trait, L, Concrete<$t>, $t>(self.into_cv().$method(rhs))
                }
            }

            impl<R> $Trait<SV<R, $t>> for $t
            where
                Concrete<$t>: BinaryRule<op::$Trait, R>,
                BinaryOutput<op::$Trait, Concrete<$t>, R>: Validates<$t>,
            {
                type Output = Result<Produced<BinaryOutput<op::$Trait, Concrete<$t>, R>, $t>, ValidationError>;

                fn $method(self, rhs: SV<R, $t>) -> Self::Output {
                    dispatch::binary::<op::$Trait, Concrete<$t>, R, $t>(self.$method(rhs.into_cv()))
                }
            }
        )*
    };
}

macro_rules! arithmetic {
    ($($t:ty),*) => {
        sv_scalar!(Add, add: $($t),*);
        sv_scalar!(Sub, sub: $($t),*);
        sv_scalar!(Mul, mul: $($t),*);
        sv_scalar!(Div, div: $($t),*);
        sv_scalar!(Rem, rem: $($t),*);
    };
}

macro_rules! bitwise {
    ($($t:ty),*) => {
        sv_scalar!(BitXor, bitxor: $($t),*);
        sv_scalar!(BitAnd, bitand: $($t),*);
        sv_scalar!(BitOr, bitor: $($t),*);
        sv_scalar!(Shl, shl: $($t),*);
        sv_scalar!(Shr, shr: $($t),*);
    };
}

arithmetic!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
bitwise!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! sv_unary {
    ($Trait:ident, $method:ident) => {
        impl<S, C> $Trait for SV<S, C>
        where
            S: UnaryRule<op::$Trait>,
            C: $Trait,
            UnaryOutput<op::$Trait, S>: Validates<<C as $Trait>::Output>,
        {
            type Output =
                Result<Produced<UnaryOutput<op::$Trait, S>, <C as $Trait>::Output>, ValidationError>;

            fn $method(self) -> Self::Output {
                dispatch::unary::<op::$Trait, S, _>(self.into_cv().$method())
            }
        }

        impl<'a, S, C> $Trait for &'a SV<S, C>
        where
            S: UnaryRule<op::$Trait>,
            &'a C: $Trait,
            UnaryOutput<op::$Trait, S>: Validates<<&'a C as $Trait>::Output>,
        {
            type Output = Result<
                Produced<UnaryOutput<op::$Trait, S>, <&'a C as $Trait>::Output>,
                ValidationError,
            >;

            fn $method(self) -> Self::Output {
                dispatch::unary::<op::$Trait, S, _>(self.cv().$method())
            }
        }
    };
}

sv_unary!(Neg, neg);
sv_unary!(Not, not);
