//! Policy enforcement shared by every boundary of [`SV`](crate::SV).

use tracing::{error, warn};

use crate::class::Validates;
use crate::error::ValidationError;
use crate::policy::{Boundary, CheckPolicy};

/// Run `S::is_valid` on `cv` with the semantics of `policy`.
///
/// Only `VerifyOrThrow` (on an invalid value) and `Prohibit` return `Err`.
pub fn enforce<S, C>(cv: &C, policy: CheckPolicy, boundary: Boundary) -> Result<(), ValidationError>
where
    S: Validates<C>,
    C: ?Sized,
{
    match policy {
        CheckPolicy::NoCheck => Ok(()),
        CheckPolicy::Prohibit => Err(ValidationError::Prohibited {
            type_name: S::NAME,
            boundary,
        }),
        CheckPolicy::VerifyOrThrow => {
            if S::is_valid(cv) {
                Ok(())
            } else {
                warn!(semantic_type = S::NAME, %boundary, "validation failed");
                Err(ValidationError::Invalid {
                    type_name: S::NAME,
                    boundary,
                })
            }
        }
        CheckPolicy::VerifyOrAbort => {
            if !S::is_valid(cv) {
                abort_invalid(S::NAME, boundary);
            }
            Ok(())
        }
        CheckPolicy::Assert => {
            if cfg!(debug_assertions) && !S::is_valid(cv) {
                panic!(
                    "assertion failed: is_valid returned false for semantic type {} at {}",
                    S::NAME,
                    boundary
                );
            }
            Ok(())
        }
    }
}

/// Like [`enforce`], for contexts that cannot hand an error back to a caller
/// (`Clone`, `Drop`). `VerifyOrThrow` escalates to `VerifyOrAbort`.
pub fn enforce_fatal<S, C>(cv: &C, policy: CheckPolicy, boundary: Boundary)
where
    S: Validates<C>,
    C: ?Sized,
{
    let policy = match policy {
        CheckPolicy::Prohibit => {
            error!(semantic_type = S::NAME, %boundary, "prohibited boundary reached");
            std::process::abort();
        }
        CheckPolicy::VerifyOrThrow => CheckPolicy::VerifyOrAbort,
        other => other,
    };
    if let Err(e) = enforce::<S, C>(cv, policy, boundary) {
        error!(error = %e, "unrecoverable validation failure");
        std::process::abort();
    }
}

fn abort_invalid(type_name: &'static str, boundary: Boundary) -> ! {
    error!(
        semantic_type = type_name,
        %boundary,
        "is_valid returned false; aborting"
    );
    eprintln!("is_valid returned false for semantic type {type_name} at {boundary}; aborting");
    std::process::abort()
}
