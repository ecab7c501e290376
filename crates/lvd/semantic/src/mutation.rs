//! Scoped mutable access to the concrete value of an [`SV`].
//!
//! Both guards re-validate once when they end. Neither can hand an error
//! back from `Drop`, so an unfinished guard that leaves an invalid value
//! behind aborts the process.

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::check::{enforce, enforce_fatal};
use crate::class::Validates;
use crate::error::ValidationError;
use crate::policy::{Boundary, CheckPolicy};
use crate::value::SV;

/// Direct mutable access to the stored value.
///
/// Changes land in place as they are made; the value is checked with
/// `VerifyOrAbort` semantics when the guard is finished or dropped.
pub struct Mutation<'a, S, C>
where
    S: Validates<C>,
{
    sv: &'a mut SV<S, C>,
}

impl<'a, S, C> Mutation<'a, S, C>
where
    S: Validates<C>,
{
    pub(crate) fn new(sv: &'a mut SV<S, C>) -> Self {
        Mutation { sv }
    }

    /// End the mutation now. Equivalent to dropping the guard.
    pub fn finish(self) {}
}

impl<S, C> Deref for Mutation<'_, S, C>
where
    S: Validates<C>,
{
    type Target = C;

    fn deref(&self) -> &C {
        self.sv.cv()
    }
}

impl<S, C> DerefMut for Mutation<'_, S, C>
where
    S: Validates<C>,
{
    fn deref_mut(&mut self) -> &mut C {
        self.sv.cv_mut()
    }
}

impl<S, C> Drop for Mutation<'_, S, C>
where
    S: Validates<C>,
{
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        enforce_fatal::<S, C>(self.sv.cv(), CheckPolicy::VerifyOrAbort, Boundary::Mutation);
    }
}

impl<S, C> fmt::Debug for Mutation<'_, S, C>
where
    S: Validates<C>,
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutation").field("value", self.sv.cv()).finish()
    }
}

/// Mutable access to a staged copy of the stored value.
///
/// [`Mutator::finish`] writes the copy back only if it is valid and reports
/// the failure otherwise, leaving the original untouched.
pub struct Mutator<'a, S, C>
where
    S: Validates<C>,
    C: Clone,
{
    sv: &'a mut SV<S, C>,
    staged: C,
    done: bool,
}

impl<'a, S, C> Mutator<'a, S, C>
where
    S: Validates<C>,
    C: Clone,
{
    pub(crate) fn new(sv: &'a mut SV<S, C>) -> Self {
        let staged = sv.cv().clone();
        Mutator {
            sv,
            staged,
            done: false,
        }
    }

    /// Check the staged value and commit it if valid.
    pub fn finish(mut self) -> Result<(), ValidationError> {
        self.done = true;
        enforce::<S, C>(&self.staged, CheckPolicy::VerifyOrThrow, Boundary::Mutation)?;
        mem::swap(self.sv.cv_mut(), &mut self.staged);
        debug!(semantic_type = S::NAME, "mutation committed");
        Ok(())
    }

    /// Drop the staged changes.
    pub fn discard(mut self) {
        self.done = true;
    }
}

impl<S, C> Deref for Mutator<'_, S, C>
where
    S: Validates<C>,
    C: Clone,
{
    type Target = C;

    fn deref(&self) -> &C {
        &self.staged
    }
}

impl<S, C> DerefMut for Mutator<'_, S, C>
where
    S: Validates<C>,
    C: Clone,
{
    fn deref_mut(&mut self) -> &mut C {
        &mut self.staged
    }
}

impl<S, C> Drop for Mutator<'_, S, C>
where
    S: Validates<C>,
    C: Clone,
{
    fn drop(&mut self) {
        if self.done || std::thread::panicking() {
            return;
        }
        enforce_fatal::<S, C>(&self.staged, CheckPolicy::VerifyOrAbort, Boundary::Mutation);
        mem::swap(self.sv.cv_mut(), &mut self.staged);
    }
}

impl<S, C> fmt::Debug for Mutator<'_, S, C>
where
    S: Validates<C>,
    C: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutator")
            .field("current", self.sv.cv())
            .field("staged", &self.staged)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{SemanticClass, Wrapped};

    enum Ascending {}

    impl SemanticClass for Ascending {
        const NAME: &'static str = "Ascending";
        type Kind = Wrapped;
    }

    impl Validates<Vec<i32>> for Ascending {
        fn is_valid(cv: &Vec<i32>) -> bool {
            cv.windows(2).all(|w| w[0] <= w[1])
        }
    }

    fn sorted(v: Vec<i32>) -> SV<Ascending, Vec<i32>> {
        SV::new(v).unwrap()
    }

    #[test]
    fn mutation_writes_in_place() {
        let mut v = sorted(vec![1, 2, 3]);
        {
            let mut m = v.mutation();
            m.push(4);
            assert_eq!(m.len(), 4);
        }
        assert_eq!(v.cv(), &vec![1, 2, 3, 4]);
        let mut m = v.mutation();
        m.insert(0, 0);
        m.finish();
        assert_eq!(v.cv()[0], 0);
    }

    #[test]
    fn mutator_commits_valid_changes() {
        let mut v = sorted(vec![1, 5]);
        let mut m = v.mutator();
        m.insert(1, 3);
        m.finish().unwrap();
        assert_eq!(v.cv(), &vec![1, 3, 5]);
    }

    #[test]
    fn mutator_rejects_invalid_changes_and_keeps_the_original() {
        let mut v = sorted(vec![1, 5]);
        let mut m = v.mutator();
        m.push(0);
        let err = m.finish().unwrap_err();
        assert_eq!(err.boundary(), Boundary::Mutation);
        assert_eq!(v.cv(), &vec![1, 5]);
    }

    #[test]
    fn mutator_drop_commits_and_discard_does_not() {
        let mut v = sorted(vec![2]);
        {
            let mut m = v.mutator();
            m.push(7);
        }
        assert_eq!(v.cv(), &vec![2, 7]);
        let mut m = v.mutator();
        m.clear();
        m.discard();
        assert_eq!(v.cv(), &vec![2, 7]);
    }
}
