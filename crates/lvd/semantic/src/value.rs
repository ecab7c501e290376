//! The semantic value wrapper.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{
    AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, Deref, DivAssign, Index, MulAssign,
    RemAssign, ShlAssign, ShrAssign, SubAssign,
};

use tracing::debug;

use crate::check::{enforce, enforce_fatal};
use crate::class::{CallRule, ElementRule, ForwardDeref, SemanticClass, SubtypeOf, Validates};
use crate::dispatch::{self, Produced};
use crate::error::ValidationError;
use crate::macros::require_permitted;
use crate::mutation::{Mutation, Mutator};
use crate::policy::{Boundary, CheckPolicy};

/// A concrete value `C` tagged with the semantic class `S`.
///
/// Every checked boundary runs `S::is_valid` according to the policy the
/// class configures for it. Values obtained through `new_unchecked` or a
/// `NoCheck` boundary are trusted as-is.
#[repr(transparent)]
pub struct SV<S, C> {
    cv: C,
    class: PhantomData<fn() -> S>,
}

impl<S, C> SV<S, C> {
    /// Wrap without any check.
    pub const fn new_unchecked(cv: C) -> Self {
        SV {
            cv,
            class: PhantomData,
        }
    }

    pub fn cv(&self) -> &C {
        &self.cv
    }

    pub fn into_cv(self) -> C {
        self.cv
    }

    pub(crate) fn cv_mut(&mut self) -> &mut C {
        &mut self.cv
    }
}

impl<S, C> SV<S, C>
where
    S: Validates<C>,
{
    fn admit(cv: C, policy: CheckPolicy, boundary: Boundary) -> Result<Self, ValidationError> {
        enforce::<S, C>(&cv, policy, boundary)?;
        if policy.engages() {
            debug!(semantic_type = S::NAME, %boundary, "accepted");
        }
        Ok(Self::new_unchecked(cv))
    }

    fn store(
        &mut self,
        cv: C,
        policy: CheckPolicy,
        boundary: Boundary,
    ) -> Result<(), ValidationError> {
        enforce::<S, C>(&cv, policy, boundary)?;
        self.cv = cv;
        Ok(())
    }

    /// Construct from an owned concrete value.
    pub fn new(cv: C) -> Result<Self, ValidationError> {
        require_permitted!(S::CTOR_MOVE_CV, "ctor_move_cv");
        Self::admit(cv, S::CTOR_MOVE_CV, Boundary::CtorMoveCv)
    }

    /// Construct from a borrowed concrete value. The value is only cloned
    /// once it has been accepted.
    pub fn from_ref(cv: &C) -> Result<Self, ValidationError>
    where
        C: Clone,
    {
        require_permitted!(S::CTOR_COPY_CV, "ctor_copy_cv");
        enforce::<S, C>(cv, S::CTOR_COPY_CV, Boundary::CtorCopyCv)?;
        Ok(Self::new_unchecked(cv.clone()))
    }

    pub fn try_default() -> Result<Self, ValidationError>
    where
        C: Default,
    {
        require_permitted!(S::CTOR_DEFAULT, "ctor_default");
        Self::admit(C::default(), S::CTOR_DEFAULT, Boundary::CtorDefault)
    }

    /// Forwarding construction: build the concrete value from `args`.
    pub fn emplace<A>(args: A) -> Result<Self, ValidationError>
    where
        C: From<A>,
    {
        require_permitted!(S::CTOR_VARIADIC, "ctor_variadic");
        Self::admit(C::from(args), S::CTOR_VARIADIC, Boundary::CtorVariadic)
    }

    pub fn emplace_with<F>(f: F) -> Result<Self, ValidationError>
    where
        F: FnOnce() -> C,
    {
        require_permitted!(S::CTOR_VARIADIC, "ctor_variadic");
        Self::admit(f(), S::CTOR_VARIADIC, Boundary::CtorVariadic)
    }

    /// Re-admit a value of the same class under `CTOR_MOVE_SV`.
    pub fn from_sv(other: Self) -> Result<Self, ValidationError> {
        require_permitted!(S::CTOR_MOVE_SV, "ctor_move_sv");
        Self::admit(other.cv, S::CTOR_MOVE_SV, Boundary::CtorMoveSv)
    }

    /// Copy under `CTOR_COPY_SV`, reporting a failed check.
    pub fn try_clone(&self) -> Result<Self, ValidationError>
    where
        C: Clone,
    {
        require_permitted!(S::CTOR_COPY_SV, "ctor_copy_sv");
        enforce::<S, C>(&self.cv, S::CTOR_COPY_SV, Boundary::CtorCopySv)?;
        Ok(Self::new_unchecked(self.cv.clone()))
    }

    pub fn from_sub<Sub>(sub: &SV<Sub, C>) -> Result<Self, ValidationError>
    where
        Sub: SubtypeOf<S>,
        C: Clone,
    {
        require_permitted!(S::CTOR_COPY_SUB, "ctor_copy_sub");
        enforce::<S, C>(&sub.cv, S::CTOR_COPY_SUB, Boundary::CtorCopySub)?;
        Ok(Self::new_unchecked(sub.cv.clone()))
    }

    pub fn from_sub_owned<Sub>(sub: SV<Sub, C>) -> Result<Self, ValidationError>
    where
        Sub: SubtypeOf<S>,
    {
        require_permitted!(S::CTOR_MOVE_SUB, "ctor_move_sub");
        Self::admit(sub.cv, S::CTOR_MOVE_SUB, Boundary::CtorMoveSub)
    }

    pub fn from_sub_unchecked<Sub>(sub: SV<Sub, C>) -> Self
    where
        Sub: SubtypeOf<S>,
    {
        Self::new_unchecked(sub.cv)
    }

    /// Convert to a supertype under the supertype's `CTOR_MOVE_SUB` policy.
    pub fn upcast<Sup>(self) -> Result<SV<Sup, C>, ValidationError>
    where
        S: SubtypeOf<Sup>,
        Sup: Validates<C>,
    {
        SV::<Sup, C>::from_sub_owned(self)
    }

    /// Borrow as a supertype value without copying.
    #[allow(unsafe_code)]
    pub fn as_super<Sup>(&self) -> &SV<Sup, C>
    where
        S: SubtypeOf<Sup>,
        Sup: SemanticClass,
    {
        // SAFETY: SV is repr(transparent) over C for every class, so
        // SV<S, C> and SV<Sup, C> have identical layout.
        unsafe { &*(self as *const SV<S, C> as *const SV<Sup, C>) }
    }

    /// Run the validity check with an explicit policy.
    pub fn check(&self, policy: CheckPolicy) -> Result<(), ValidationError> {
        enforce::<S, C>(&self.cv, policy, Boundary::Check)
    }

    pub fn is_valid(&self) -> bool {
        S::is_valid(&self.cv)
    }

    pub fn assign_sv(&mut self, other: Self) -> Result<(), ValidationError> {
        require_permitted!(S::ASSIGN_MOVE_SV, "assign_move_sv");
        self.store(other.cv, S::ASSIGN_MOVE_SV, Boundary::AssignMoveSv)
    }

    pub fn assign_sv_ref(&mut self, other: &Self) -> Result<(), ValidationError>
    where
        C: Clone,
    {
        require_permitted!(S::ASSIGN_COPY_SV, "assign_copy_sv");
        enforce::<S, C>(&other.cv, S::ASSIGN_COPY_SV, Boundary::AssignCopySv)?;
        self.cv.clone_from(&other.cv);
        Ok(())
    }

    pub fn assign_sub<Sub>(&mut self, sub: SV<Sub, C>) -> Result<(), ValidationError>
    where
        Sub: SubtypeOf<S>,
    {
        require_permitted!(S::ASSIGN_MOVE_SUB, "assign_move_sub");
        self.store(sub.cv, S::ASSIGN_MOVE_SUB, Boundary::AssignMoveSub)
    }

    pub fn assign_sub_ref<Sub>(&mut self, sub: &SV<Sub, C>) -> Result<(), ValidationError>
    where
        Sub: SubtypeOf<S>,
        C: Clone,
    {
        require_permitted!(S::ASSIGN_COPY_SUB, "assign_copy_sub");
        enforce::<S, C>(&sub.cv, S::ASSIGN_COPY_SUB, Boundary::AssignCopySub)?;
        self.cv.clone_from(&sub.cv);
        Ok(())
    }

    /// Replace the concrete value. On failure the stored value is unchanged.
    pub fn assign_cv(&mut self, cv: C) -> Result<(), ValidationError> {
        require_permitted!(S::ASSIGN_MOVE_CV, "assign_move_cv");
        self.store(cv, S::ASSIGN_MOVE_CV, Boundary::AssignMoveCv)
    }

    pub fn assign_cv_ref(&mut self, cv: &C) -> Result<(), ValidationError>
    where
        C: Clone,
    {
        require_permitted!(S::ASSIGN_COPY_CV, "assign_copy_cv");
        enforce::<S, C>(cv, S::ASSIGN_COPY_CV, Boundary::AssignCopyCv)?;
        self.cv.clone_from(cv);
        Ok(())
    }

    pub fn try_increment(&mut self) -> Result<(), ValidationError>
    where
        C: AddAssign + From<u8> + Clone,
    {
        require_permitted!(S::INCREMENT, "increment");
        let mut next = self.cv.clone();
        next += C::from(1);
        self.store(next, S::INCREMENT, Boundary::Increment)
    }

    pub fn try_decrement(&mut self) -> Result<(), ValidationError>
    where
        C: SubAssign + From<u8> + Clone,
    {
        require_permitted!(S::DECREMENT, "decrement");
        let mut next = self.cv.clone();
        next -= C::from(1);
        self.store(next, S::DECREMENT, Boundary::Decrement)
    }

    /// Element access re-wrapped in the class named by `ElementRule`.
    pub fn elem<I>(&self, index: I) -> Result<Produced<S::Output, C::Output>, ValidationError>
    where
        S: ElementRule<I>,
        C: Index<I>,
        C::Output: Clone + Sized,
        S::Output: Validates<C::Output>,
    {
        dispatch::element::<S, I, _>(self.cv[index].clone())
    }

    /// Call the wrapped callable.
    pub fn call<A, O>(&self, args: A) -> Result<Produced<S::Output, O>, ValidationError>
    where
        S: CallRule<A>,
        C: Fn(A) -> O,
        S::Output: Validates<O>,
    {
        dispatch::call::<S, A, O>((self.cv)(args))
    }

    /// In-place mutation checked with `VerifyOrAbort` when the guard ends.
    pub fn mutation(&mut self) -> Mutation<'_, S, C> {
        Mutation::new(self)
    }

    /// Staged mutation of a copy, committed only if the result is valid.
    pub fn mutator(&mut self) -> Mutator<'_, S, C>
    where
        C: Clone,
    {
        Mutator::new(self)
    }
}

macro_rules! in_place {
    ($($method:ident, $method_sv:ident, $Trait:ident :: $apply:ident, $policy:ident, $boundary:ident, $name:literal;)*) => {
        impl<S, C> SV<S, C>
        where
            S: Validates<C>,
        {
            $(
                /// Apply the operator to a copy, check it, then store it.
                /// Overflow behaves as on `C`; a panicking operator leaves
                /// `self` untouched.
                pub fn $method<T>(&mut self, rhs: T) -> Result<(), ValidationError>
                where
                    C: $Trait<T> + Clone,
                {
                    require_permitted!(S::$policy, $name);
                    let mut next = self.cv.clone();
                    $Trait::$apply(&mut next, rhs);
                    self.store(next, S::$policy, Boundary::$boundary)
                }

                pub fn $method_sv<R, T>(&mut self, rhs: SV<R, T>) -> Result<(), ValidationError>
                where
                    C: $Trait<T> + Clone,
                {
                    self.$method(rhs.into_cv())
                }
            )*
        }
    };
}

in_place! {
    try_add_assign, try_add_assign_sv, AddAssign::add_assign, ADD_EQ, AddEq, "add_eq";
    try_sub_assign, try_sub_assign_sv, SubAssign::sub_assign, SUB_EQ, SubEq, "sub_eq";
    try_mul_assign, try_mul_assign_sv, MulAssign::mul_assign, MUL_EQ, MulEq, "mul_eq";
    try_div_assign, try_div_assign_sv, DivAssign::div_assign, DIV_EQ, DivEq, "div_eq";
    try_rem_assign, try_rem_assign_sv, RemAssign::rem_assign, REM_EQ, RemEq, "rem_eq";
    try_bitxor_assign, try_bitxor_assign_sv, BitXorAssign::bitxor_assign, BITXOR_EQ, BitXorEq, "xor_eq";
    try_bitand_assign, try_bitand_assign_sv, BitAndAssign::bitand_assign, BITAND_EQ, BitAndEq, "and_eq";
    try_bitor_assign, try_bitor_assign_sv, BitOrAssign::bitor_assign, BITOR_EQ, BitOrEq, "or_eq";
    try_shl_assign, try_shl_assign_sv, ShlAssign::shl_assign, SHL_EQ, ShlEq, "shl_eq";
    try_shr_assign, try_shr_assign_sv, ShrAssign::shr_assign, SHR_EQ, ShrEq, "shr_eq";
}

impl<S, C> SV<S, C>
where
    S: SemanticClass,
{
    /// `SV<Class, concrete type>`.
    pub fn type_string() -> String {
        format!("SV<{}, {}>", S::type_string(), std::any::type_name::<C>())
    }
}

impl<S, C> Clone for SV<S, C>
where
    S: Validates<C>,
    C: Clone,
{
    /// Copies under `CTOR_COPY_SV`; a failed check aborts. Classes that
    /// report copy failures as errors must use [`SV::try_clone`].
    fn clone(&self) -> Self {
        const {
            assert!(
                !matches!(S::CTOR_COPY_SV, CheckPolicy::VerifyOrThrow | CheckPolicy::Prohibit),
                "Clone needs a non-throwing ctor_copy_sv policy; use try_clone"
            )
        };
        enforce_fatal::<S, C>(&self.cv, S::CTOR_COPY_SV, Boundary::CtorCopySv);
        Self::new_unchecked(self.cv.clone())
    }
}

impl<S, C> Copy for SV<S, C>
where
    S: Validates<C>,
    C: Copy,
{
}

impl<S, C: PartialEq> PartialEq for SV<S, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cv == other.cv
    }
}

impl<S, C: Eq> Eq for SV<S, C> {}

impl<S, C: PartialOrd> PartialOrd for SV<S, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.cv.partial_cmp(&other.cv)
    }
}

impl<S, C: Ord> Ord for SV<S, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cv.cmp(&other.cv)
    }
}

impl<S, C: Hash> Hash for SV<S, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cv.hash(state);
    }
}

impl<S, C> fmt::Debug for SV<S, C>
where
    S: SemanticClass,
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(S::NAME).field(&self.cv).finish()
    }
}

impl<S, C> fmt::Display for SV<S, C>
where
    S: Validates<C>,
    C: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        S::print(&self.cv, f)
    }
}

impl<S, C> Deref for SV<S, C>
where
    S: ForwardDeref,
    C: Deref,
{
    type Target = C::Target;

    fn deref(&self) -> &C::Target {
        &self.cv
    }
}

/// Raw element access. Use [`SV::elem`] for a re-wrapped element.
impl<S, C, I> Index<I> for SV<S, C>
where
    S: ElementRule<I>,
    C: Index<I>,
{
    type Output = C::Output;

    fn index(&self, index: I) -> &C::Output {
        &self.cv[index]
    }
}

impl<S, C> AsRef<C> for SV<S, C> {
    fn as_ref(&self) -> &C {
        &self.cv
    }
}
