//! # lvd-semantic
//!
//! Semantic subtypes: a concrete value (`f64`, `String`, `Vec<T>`, ...) paired
//! with a zero-sized *semantic class* whose validity predicate the value is
//! known to satisfy.
//!
//! ## Architecture
//!
//! ```text
//! SemanticClass ── policy constants per boundary (ctor, assign, in-place op)
//!      │
//!      ├── Validates<C>      is_valid(&C), print
//!      ├── SubtypeOf<Super>  explicit subtype lattice
//!      └── *Rule traits      BinaryRule / UnaryRule / ElementRule / CallRule
//!                            (absent impl = prohibited operation)
//!
//! SV<S, C> ── owns exactly one C; every checked boundary enforces S::is_valid
//! ```
//!
//! Every boundary consults a [`CheckPolicy`]:
//!
//! - `Prohibit` rejects the boundary at compile time
//! - `VerifyOrThrow` returns [`ValidationError`]
//! - `VerifyOrAbort` logs and aborts the process
//! - `Assert` checks in debug builds only
//! - `NoCheck` skips validation
//!
//! ## Key Types
//!
//! - [`SV`]: the semantic value wrapper
//! - [`SemanticClass`] / [`Validates`]: the semantic class protocol
//! - [`BinaryRule`]: result-class table entry for `Lhs op Rhs`
//! - [`Mutation`] / [`Mutator`]: scoped mutable access with re-validation

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![warn(rust_2018_idioms)]

pub mod check;
pub mod class;
pub mod codec;
pub mod dispatch;
pub mod error;
mod macros;
pub mod mutation;
pub mod ops;
pub mod policy;
pub mod value;

pub use check::{enforce, enforce_fatal};
pub use class::{
    Base, BinaryRule, CallRule, ClassKind, Concrete, ElementRule, ForwardDeref, SemanticClass,
    SubtypeOf, UnaryRule, Unwrapped, Validates, Wrapped,
};
pub use dispatch::{BinaryOutput, Produced, UnaryOutput};
pub use error::ValidationError;
pub use mutation::{Mutation, Mutator};
pub use ops::{op, BinaryOperator, UnaryOperator};
pub use policy::{Boundary, CheckPolicy, ResultPolicy};
pub use value::SV;
