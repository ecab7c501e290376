use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FiError;

/// A line/column position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPos")]
pub struct FiPos {
    line: u32,
    column: u32,
}

#[derive(Deserialize)]
struct RawPos {
    line: u32,
    column: u32,
}

impl TryFrom<RawPos> for FiPos {
    type Error = FiError;

    fn try_from(raw: RawPos) -> Result<Self, FiError> {
        FiPos::new(raw.line, raw.column)
    }
}

impl FiPos {
    /// Line 1, column 1.
    pub const START: FiPos = FiPos { line: 1, column: 1 };

    pub fn new(line: u32, column: u32) -> Result<Self, FiError> {
        if line == 0 || column == 0 {
            return Err(FiError::ZeroCoordinate { line, column });
        }
        Ok(FiPos { line, column })
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Moves past `ch`. A newline starts the next line.
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// The position after `text`, starting here.
    pub fn after(mut self, text: &str) -> FiPos {
        text.chars().for_each(|ch| self.advance(ch));
        self
    }
}

impl Default for FiPos {
    fn default() -> Self {
        FiPos::START
    }
}

impl fmt::Display for FiPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
