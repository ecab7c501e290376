use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pos::FiPos;
use crate::range::FiRange;

/// A range within a named file. Orders by filename, then range.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FiLoc {
    pub filename: String,
    pub range: FiRange,
}

impl FiLoc {
    pub fn new(filename: impl Into<String>, range: FiRange) -> Self {
        FiLoc {
            filename: filename.into(),
            range,
        }
    }

    /// An empty range at `pos`.
    pub fn at(filename: impl Into<String>, pos: FiPos) -> Self {
        FiLoc::new(filename, FiRange::at(pos))
    }
}

impl fmt::Display for FiLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_file_first() {
        let late_a = FiLoc::at("a.lvd", FiPos::new(90, 1).unwrap());
        let early_b = FiLoc::at("b.lvd", FiPos::START);
        assert!(late_a < early_b);
        let mut locs = vec![early_b.clone(), late_a.clone()];
        locs.sort();
        assert_eq!(locs, vec![late_a, early_b]);
    }

    #[test]
    fn display_and_serde() {
        let loc = FiLoc::new("main.lvd", FiRange::spanning(FiPos::START, "x = 1"));
        assert_eq!(loc.to_string(), "main.lvd:1:1-6");
        let json = serde_json::to_string(&loc).unwrap();
        let back: FiLoc = serde_json::from_str(&json).unwrap();
        assert_eq!(back, loc);
    }
}
