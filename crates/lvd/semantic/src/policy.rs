use serde::{Deserialize, Serialize};
use std::fmt;

/// How strongly a boundary validates the value crossing it.
///
/// Variants are ordered by engagement: `Prohibit` forbids the boundary
/// outright, `NoCheck` does nothing at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckPolicy {
    /// The operation must not exist; rejected at compile time.
    Prohibit,
    /// Validate and return [`ValidationError`](crate::ValidationError) on failure.
    VerifyOrThrow,
    /// Validate and abort the process on failure.
    VerifyOrAbort,
    /// Validate in debug builds only; panics on failure.
    Assert,
    /// Skip validation.
    NoCheck,
}

impl CheckPolicy {
    pub const ALL: [CheckPolicy; 5] = [
        CheckPolicy::Prohibit,
        CheckPolicy::VerifyOrThrow,
        CheckPolicy::VerifyOrAbort,
        CheckPolicy::Assert,
        CheckPolicy::NoCheck,
    ];

    /// Whether a boundary carrying this policy may be used at all.
    pub const fn is_permitted(self) -> bool {
        !matches!(self, CheckPolicy::Prohibit)
    }

    /// Whether a failed check under this policy is reported as an `Err`.
    pub const fn is_recoverable(self) -> bool {
        matches!(self, CheckPolicy::VerifyOrThrow)
    }

    /// Whether `is_valid` is evaluated under this policy in the current build.
    pub const fn engages(self) -> bool {
        match self {
            CheckPolicy::VerifyOrThrow | CheckPolicy::VerifyOrAbort => true,
            CheckPolicy::Assert => cfg!(debug_assertions),
            CheckPolicy::Prohibit | CheckPolicy::NoCheck => false,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CheckPolicy::Prohibit => "prohibit",
            CheckPolicy::VerifyOrThrow => "verify_or_throw",
            CheckPolicy::VerifyOrAbort => "verify_or_abort",
            CheckPolicy::Assert => "assert",
            CheckPolicy::NoCheck => "no_check",
        }
    }
}

impl fmt::Display for CheckPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy for operations that produce a *new* value.
///
/// `DontCast` leaves the concrete result unwrapped; the other variants wrap
/// the result in the declared result class and then check it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultPolicy {
    DontCast,
    CastAndVerifyOrThrow,
    CastAndVerifyOrAbort,
    CastAndAssert,
    CastAndNoCheck,
}

impl ResultPolicy {
    /// Collapse to the check applied to the produced value.
    ///
    /// `DontCast` produces nothing to check and collapses to `NoCheck`.
    pub const fn check_policy(self) -> CheckPolicy {
        match self {
            ResultPolicy::DontCast | ResultPolicy::CastAndNoCheck => CheckPolicy::NoCheck,
            ResultPolicy::CastAndVerifyOrThrow => CheckPolicy::VerifyOrThrow,
            ResultPolicy::CastAndVerifyOrAbort => CheckPolicy::VerifyOrAbort,
            ResultPolicy::CastAndAssert => CheckPolicy::Assert,
        }
    }

    /// Whether the result is wrapped in a semantic value.
    pub const fn casts(self) -> bool {
        !matches!(self, ResultPolicy::DontCast)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ResultPolicy::DontCast => "dont_cast",
            ResultPolicy::CastAndVerifyOrThrow => "cast_and_verify_or_throw",
            ResultPolicy::CastAndVerifyOrAbort => "cast_and_verify_or_abort",
            ResultPolicy::CastAndAssert => "cast_and_assert",
            ResultPolicy::CastAndNoCheck => "cast_and_no_check",
        }
    }
}

impl fmt::Display for ResultPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every place where a value enters, leaves, or is produced by an `SV`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    CtorDefault,
    CtorCopySv,
    CtorMoveSv,
    CtorCopySub,
    CtorMoveSub,
    CtorCopyCv,
    CtorMoveCv,
    CtorVariadic,
    AssignCopySv,
    AssignMoveSv,
    AssignCopySub,
    AssignMoveSub,
    AssignCopyCv,
    AssignMoveCv,
    AddEq,
    SubEq,
    MulEq,
    DivEq,
    RemEq,
    BitXorEq,
    BitAndEq,
    BitOrEq,
    ShlEq,
    ShrEq,
    Increment,
    Decrement,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitXor,
    BitAnd,
    BitOr,
    Shl,
    Shr,
    Neg,
    Not,
    Elem,
    Call,
    Deref,
    Mutation,
    Deserialize,
    Check,
}

impl Boundary {
    pub const fn as_str(self) -> &'static str {
        match self {
            Boundary::CtorDefault => "ctor_default",
            Boundary::CtorCopySv => "ctor_copy_sv",
            Boundary::CtorMoveSv => "ctor_move_sv",
            Boundary::CtorCopySub => "ctor_copy_sub",
            Boundary::CtorMoveSub => "ctor_move_sub",
            Boundary::CtorCopyCv => "ctor_copy_cv",
            Boundary::CtorMoveCv => "ctor_move_cv",
            Boundary::CtorVariadic => "ctor_variadic",
            Boundary::AssignCopySv => "assign_copy_sv",
            Boundary::AssignMoveSv => "assign_move_sv",
            Boundary::AssignCopySub => "assign_copy_sub",
            Boundary::AssignMoveSub => "assign_move_sub",
            Boundary::AssignCopyCv => "assign_copy_cv",
            Boundary::AssignMoveCv => "assign_move_cv",
            Boundary::AddEq => "add_eq",
            Boundary::SubEq => "sub_eq",
            Boundary::MulEq => "mul_eq",
            Boundary::DivEq => "div_eq",
            Boundary::RemEq => "rem_eq",
            Boundary::BitXorEq => "xor_eq",
            Boundary::BitAndEq => "and_eq",
            Boundary::BitOrEq => "or_eq",
            Boundary::ShlEq => "shl_eq",
            Boundary::ShrEq => "shr_eq",
            Boundary::Increment => "increment",
            Boundary::Decrement => "decrement",
            Boundary::Add => "add",
            Boundary::Sub => "sub",
            Boundary::Mul => "mul",
            Boundary::Div => "div",
            Boundary::Rem => "rem",
            Boundary::BitXor => "xor",
            Boundary::BitAnd => "and",
            Boundary::BitOr => "or",
            Boundary::Shl => "shl",
            Boundary::Shr => "shr",
            Boundary::Neg => "neg",
            Boundary::Not => "not",
            Boundary::Elem => "elem",
            Boundary::Call => "call",
            Boundary::Deref => "deref",
            Boundary::Mutation => "mutation",
            Boundary::Deserialize => "deserialize",
            Boundary::Check => "check",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_policies_are_ordered_by_engagement() {
        let mut sorted = CheckPolicy::ALL;
        sorted.sort();
        assert_eq!(sorted, CheckPolicy::ALL);
        assert!(CheckPolicy::Prohibit < CheckPolicy::NoCheck);
    }

    #[test]
    fn only_prohibit_is_not_permitted() {
        for policy in CheckPolicy::ALL {
            assert_eq!(policy.is_permitted(), policy != CheckPolicy::Prohibit);
        }
    }

    #[test]
    fn only_throw_is_recoverable() {
        assert!(CheckPolicy::VerifyOrThrow.is_recoverable());
        assert!(!CheckPolicy::VerifyOrAbort.is_recoverable());
        assert!(!CheckPolicy::Assert.is_recoverable());
    }

    #[test]
    fn assert_engages_only_in_debug_builds() {
        assert_eq!(CheckPolicy::Assert.engages(), cfg!(debug_assertions));
        assert!(CheckPolicy::VerifyOrAbort.engages());
        assert!(!CheckPolicy::NoCheck.engages());
    }

    #[test]
    fn result_policy_collapse() {
        assert_eq!(ResultPolicy::DontCast.check_policy(), CheckPolicy::NoCheck);
        assert_eq!(
            ResultPolicy::CastAndVerifyOrThrow.check_policy(),
            CheckPolicy::VerifyOrThrow
        );
        assert_eq!(
            ResultPolicy::CastAndVerifyOrAbort.check_policy(),
            CheckPolicy::VerifyOrAbort
        );
        assert_eq!(ResultPolicy::CastAndAssert.check_policy(), CheckPolicy::Assert);
        assert_eq!(ResultPolicy::CastAndNoCheck.check_policy(), CheckPolicy::NoCheck);
        assert!(!ResultPolicy::DontCast.casts());
        assert!(ResultPolicy::CastAndNoCheck.casts());
    }

    #[test]
    fn policies_serialize_snake_case() {
        let json = serde_json::to_string(&CheckPolicy::VerifyOrThrow).unwrap();
        assert_eq!(json, "\"verify_or_throw\"");
        let back: ResultPolicy = serde_json::from_str("\"cast_and_assert\"").unwrap();
        assert_eq!(back, ResultPolicy::CastAndAssert);
        assert_eq!(Boundary::CtorMoveCv.to_string(), "ctor_move_cv");
    }
}
