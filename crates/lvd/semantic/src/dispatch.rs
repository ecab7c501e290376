//! Result-class dispatch for operations that produce a new value.
//!
//! The concrete result is computed first; the rule trait for the operand
//! classes names the result class; the result is wrapped unchecked and then
//! checked according to the rule's [`ResultPolicy`](crate::ResultPolicy).
//! A `Base` result class returns the concrete result unwrapped.

use crate::class::{BinaryRule, CallRule, ClassKind, ElementRule, SemanticClass, UnaryRule, Validates};
use crate::error::ValidationError;
use crate::ops::{BinaryOperator, UnaryOperator};
use crate::policy::Boundary;

/// What an operation yielding class `S` over concrete `C` returns:
/// `SV<S, C>` for wrapping classes, `C` for `Base`.
pub type Produced<S, C> = <<S as SemanticClass>::Kind as ClassKind>::Out<S, C>;

/// Result class of `L op R`.
pub type BinaryOutput<Op, L, R> = <L as BinaryRule<Op, R>>::Output;

/// Result class of `op S`.
pub type UnaryOutput<Op, S> = <S as UnaryRule<Op>>::Output;

pub fn binary<Op, L, R, O>(cv: O) -> Result<Produced<BinaryOutput<Op, L, R>, O>, ValidationError>
where
    Op: BinaryOperator,
    L: BinaryRule<Op, R>,
    BinaryOutput<Op, L, R>: Validates<O>,
{
    const {
        assert!(
            <<BinaryOutput<Op, L, R> as SemanticClass>::Kind as ClassKind>::WRAPS
                == <L as BinaryRule<Op, R>>::RESULT_POLICY.casts(),
            "binary rule: DontCast must be paired with Base and vice versa"
        )
    };
    <<BinaryOutput<Op, L, R> as SemanticClass>::Kind as ClassKind>::produce::<
        BinaryOutput<Op, L, R>,
        O,
    >(cv, <L as BinaryRule<Op, R>>::RESULT_POLICY, Op::BOUNDARY)
}

pub fn unary<Op, S, O>(cv: O) -> Result<Produced<UnaryOutput<Op, S>, O>, ValidationError>
where
    Op: UnaryOperator,
    S: UnaryRule<Op>,
    UnaryOutput<Op, S>: Validates<O>,
{
    const {
        assert!(
            <<UnaryOutput<Op, S> as SemanticClass>::Kind as ClassKind>::WRAPS
                == <S as UnaryRule<Op>>::RESULT_POLICY.casts(),
            "unary rule: DontCast must be paired with Base and vice versa"
        )
    };
    <<UnaryOutput<Op, S> as SemanticClass>::Kind as ClassKind>::produce::<UnaryOutput<Op, S>, O>(
        cv,
        <S as UnaryRule<Op>>::RESULT_POLICY,
        Op::BOUNDARY,
    )
}

pub fn element<S, I, O>(
    cv: O,
) -> Result<Produced<<S as ElementRule<I>>::Output, O>, ValidationError>
where
    S: ElementRule<I>,
    <S as ElementRule<I>>::Output: Validates<O>,
{
    const {
        assert!(
            <<<S as ElementRule<I>>::Output as SemanticClass>::Kind as ClassKind>::WRAPS
                == <S as ElementRule<I>>::RESULT_POLICY.casts(),
            "element rule: DontCast must be paired with Base and vice versa"
        )
    };
    <<<S as ElementRule<I>>::Output as SemanticClass>::Kind as ClassKind>::produce::<
        <S as ElementRule<I>>::Output,
        O,
    >(cv, <S as ElementRule<I>>::RESULT_POLICY, Boundary::Elem)
}

pub fn call<S, A, O>(cv: O) -> Result<Produced<<S as CallRule<A>>::Output, O>, ValidationError>
where
    S: CallRule<A>,
    <S as CallRule<A>>::Output: Validates<O>,
{
    const {
        assert!(
            <<<S as CallRule<A>>::Output as SemanticClass>::Kind as ClassKind>::WRAPS
                == <S as CallRule<A>>::RESULT_POLICY.casts(),
            "call rule: DontCast must be paired with Base and vice versa"
        )
    };
    <<<S as CallRule<A>>::Output as SemanticClass>::Kind as ClassKind>::produce::<
        <S as CallRule<A>>::Output,
        O,
    >(cv, <S as CallRule<A>>::RESULT_POLICY, Boundary::Call)
}
