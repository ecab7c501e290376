use thiserror::Error;

use crate::pos::FiPos;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FiError {
    #[error("positions are 1-based, got {line}:{column}")]
    ZeroCoordinate { line: u32, column: u32 },

    #[error("range ends at {end} before it starts at {start}")]
    InvertedRange { start: FiPos, end: FiPos },
}
