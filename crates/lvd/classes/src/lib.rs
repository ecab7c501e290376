//! # lvd-classes
//!
//! Ready-made semantic classes for [`lvd_semantic::SV`].
//!
//! - [`float`]: the sign/finiteness lattice over `f64` with the result
//!   table for `+ - * /` and unary `-`, plus a runtime mirror of it
//! - [`collection`]: `NonEmpty`, `NonNull` and `Sorted`
//!
//! ```
//! use lvd_classes::float::{ExtPos, Pos};
//! use lvd_semantic::SV;
//!
//! let a = SV::<Pos, f64>::new(2.0).unwrap();
//! let b = SV::<Pos, f64>::new(3.0).unwrap();
//! // Adding two positive finite values can overflow to +inf.
//! let sum: SV<ExtPos, f64> = (a + b).unwrap();
//! assert_eq!(*sum.cv(), 5.0);
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod collection;
pub mod error;
pub mod float;

pub use collection::{NonEmpty, NonNull, Sorted};
pub use error::EvalError;
