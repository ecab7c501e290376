//! Positions, ranges and locations in source files.
//!
//! Lines and columns are 1-based. Ranges are half-open. All three types
//! order lexicographically.

mod error;
mod loc;
mod pos;
mod range;

pub use error::FiError;
pub use loc::FiLoc;
pub use pos::FiPos;
pub use range::FiRange;
