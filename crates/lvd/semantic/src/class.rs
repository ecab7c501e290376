//! The semantic class protocol.
//!
//! A semantic class is a zero-instance tag type. It names a constraint
//! ([`Validates::is_valid`]) and configures, per boundary, how strongly
//! [`SV`](crate::SV) enforces it. Operators, element access, calls and
//! dereference are opt-in through the `*Rule` traits: a class that does not
//! implement the rule for an operation does not have that operation.

use std::fmt;
use std::marker::PhantomData;

use crate::check::enforce;
use crate::error::ValidationError;
use crate::ops::{BinaryOperator, UnaryOperator};
use crate::policy::{Boundary, CheckPolicy, ResultPolicy};
use crate::value::SV;

/// Whether values of a class are wrapped in an [`SV`] when produced by an
/// operation, or returned as the raw concrete value.
pub trait ClassKind: 'static {
    const WRAPS: bool;
    const DEFAULT_RESULT_POLICY: ResultPolicy;

    type Out<S, C>;

    fn produce<S, C>(
        cv: C,
        policy: ResultPolicy,
        boundary: Boundary,
    ) -> Result<Self::Out<S, C>, ValidationError>
    where
        S: Validates<C>;
}

/// Kind of every real semantic class.
pub enum Wrapped {}

/// Kind of the degenerate [`Base`] class.
pub enum Unwrapped {}

impl ClassKind for Wrapped {
    const WRAPS: bool = true;
    const DEFAULT_RESULT_POLICY: ResultPolicy = ResultPolicy::CastAndVerifyOrThrow;

    type Out<S, C> = SV<S, C>;

    fn produce<S, C>(
        cv: C,
        policy: ResultPolicy,
        boundary: Boundary,
    ) -> Result<SV<S, C>, ValidationError>
    where
        S: Validates<C>,
    {
        enforce::<S, C>(&cv, policy.check_policy(), boundary)?;
        Ok(SV::new_unchecked(cv))
    }
}

impl ClassKind for Unwrapped {
    const WRAPS: bool = false;
    const DEFAULT_RESULT_POLICY: ResultPolicy = ResultPolicy::DontCast;

    type Out<S, C> = C;

    fn produce<S, C>(cv: C, _policy: ResultPolicy, _boundary: Boundary) -> Result<C, ValidationError>
    where
        S: Validates<C>,
    {
        Ok(cv)
    }
}

/// A semantic class: a name plus a check policy for every boundary.
///
/// Defaults:
///
/// | boundary                          | default         |
/// |-----------------------------------|-----------------|
/// | default construction              | `VerifyOrThrow` |
/// | copy/move from the same class     | `NoCheck`       |
/// | copy/move from a subtype          | `Assert`        |
/// | copy/move from the concrete value | `VerifyOrThrow` |
/// | forwarding construction           | `VerifyOrThrow` |
/// | in-place operators                | `VerifyOrThrow` |
///
/// Override a constant with `CheckPolicy::Prohibit` to remove the boundary.
pub trait SemanticClass: Sized + 'static {
    const NAME: &'static str;

    type Kind: ClassKind;

    const CTOR_DEFAULT: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const CTOR_COPY_SV: CheckPolicy = CheckPolicy::NoCheck;
    const CTOR_MOVE_SV: CheckPolicy = CheckPolicy::NoCheck;
    const CTOR_COPY_SUB: CheckPolicy = CheckPolicy::Assert;
    const CTOR_MOVE_SUB: CheckPolicy = CheckPolicy::Assert;
    const CTOR_COPY_CV: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const CTOR_MOVE_CV: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const CTOR_VARIADIC: CheckPolicy = CheckPolicy::VerifyOrThrow;

    const ASSIGN_COPY_SV: CheckPolicy = CheckPolicy::NoCheck;
    const ASSIGN_MOVE_SV: CheckPolicy = CheckPolicy::NoCheck;
    const ASSIGN_COPY_SUB: CheckPolicy = CheckPolicy::Assert;
    const ASSIGN_MOVE_SUB: CheckPolicy = CheckPolicy::Assert;
    const ASSIGN_COPY_CV: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const ASSIGN_MOVE_CV: CheckPolicy = CheckPolicy::VerifyOrThrow;

    const ADD_EQ: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const SUB_EQ: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const MUL_EQ: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const DIV_EQ: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const REM_EQ: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const BITXOR_EQ: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const BITAND_EQ: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const BITOR_EQ: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const SHL_EQ: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const SHR_EQ: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const INCREMENT: CheckPolicy = CheckPolicy::VerifyOrThrow;
    const DECREMENT: CheckPolicy = CheckPolicy::VerifyOrThrow;

    fn type_string() -> String {
        Self::NAME.to_owned()
    }

    /// The configured policy for a construction, assignment or in-place
    /// boundary. Operator, access and call boundaries are governed by the
    /// rule traits and report `None`.
    fn policy(boundary: Boundary) -> Option<CheckPolicy> {
        let policy = match boundary {
            Boundary::CtorDefault => Self::CTOR_DEFAULT,
            Boundary::CtorCopySv => Self::CTOR_COPY_SV,
            Boundary::CtorMoveSv => Self::CTOR_MOVE_SV,
            Boundary::CtorCopySub => Self::CTOR_COPY_SUB,
            Boundary::CtorMoveSub => Self::CTOR_MOVE_SUB,
            Boundary::CtorCopyCv => Self::CTOR_COPY_CV,
            Boundary::CtorMoveCv => Self::CTOR_MOVE_CV,
            Boundary::CtorVariadic => Self::CTOR_VARIADIC,
            Boundary::AssignCopySv => Self::ASSIGN_COPY_SV,
            Boundary::AssignMoveSv => Self::ASSIGN_MOVE_SV,
            Boundary::AssignCopySub => Self::ASSIGN_COPY_SUB,
            Boundary::AssignMoveSub => Self::ASSIGN_MOVE_SUB,
            Boundary::AssignCopyCv => Self::ASSIGN_COPY_CV,
            Boundary::AssignMoveCv => Self::ASSIGN_MOVE_CV,
            Boundary::AddEq => Self::ADD_EQ,
            Boundary::SubEq => Self::SUB_EQ,
            Boundary::MulEq => Self::MUL_EQ,
            Boundary::DivEq => Self::DIV_EQ,
            Boundary::RemEq => Self::REM_EQ,
            Boundary::BitXorEq => Self::BITXOR_EQ,
            Boundary::BitAndEq => Self::BITAND_EQ,
            Boundary::BitOrEq => Self::BITOR_EQ,
            Boundary::ShlEq => Self::SHL_EQ,
            Boundary::ShrEq => Self::SHR_EQ,
            Boundary::Increment => Self::INCREMENT,
            Boundary::Decrement => Self::DECREMENT,
            _ => return None,
        };
        Some(policy)
    }
}

/// The validity predicate of a class over concrete type `C`.
pub trait Validates<C: ?Sized>: SemanticClass {
    fn is_valid(cv: &C) -> bool;

    fn print(cv: &C, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        C: fmt::Display,
    {
        fmt::Display::fmt(cv, f)
    }
}

/// `Self` is a semantic subtype of `Super`: every value valid for `Self` is
/// valid for `Super`.
///
/// Reflexive by blanket impl. The relation is not closed automatically;
/// declare every transitive edge.
pub trait SubtypeOf<Super: SemanticClass>: SemanticClass {}

impl<S: SemanticClass> SubtypeOf<S> for S {}

/// The degenerate class carrying no additional semantics. A rule whose
/// output is `Base` yields the raw concrete result.
pub enum Base {}

impl SemanticClass for Base {
    const NAME: &'static str = "Base";
    type Kind = Unwrapped;
}

impl<C: ?Sized> Validates<C> for Base {
    fn is_valid(_cv: &C) -> bool {
        true
    }
}

/// Stands for a raw (unwrapped) operand of type `T` in rule tables.
pub struct Concrete<T>(PhantomData<fn() -> T>);

/// Result class of `Self op Rhs`, where `Rhs` is a semantic class or a
/// [`Concrete`] operand.
pub trait BinaryRule<Op: BinaryOperator, Rhs> {
    type Output: SemanticClass;

    const RESULT_POLICY: ResultPolicy =
        <<Self::Output as SemanticClass>::Kind as ClassKind>::DEFAULT_RESULT_POLICY;
}

/// Result class of `op self`.
pub trait UnaryRule<Op: UnaryOperator>: SemanticClass {
    type Output: SemanticClass;

    const RESULT_POLICY: ResultPolicy =
        <<Self::Output as SemanticClass>::Kind as ClassKind>::DEFAULT_RESULT_POLICY;
}

/// Result class of indexing the wrapped value with `I`.
pub trait ElementRule<I>: SemanticClass {
    type Output: SemanticClass;

    const RESULT_POLICY: ResultPolicy =
        <<Self::Output as SemanticClass>::Kind as ClassKind>::DEFAULT_RESULT_POLICY;
}

/// Result class of calling the wrapped value with arguments `A`.
pub trait CallRule<A>: SemanticClass {
    type Output: SemanticClass;

    const RESULT_POLICY: ResultPolicy =
        <<Self::Output as SemanticClass>::Kind as ClassKind>::DEFAULT_RESULT_POLICY;
}

/// Opt-in to `Deref` forwarding for pointer-like concrete types.
pub trait ForwardDeref: SemanticClass {}
