use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FiError;
use crate::pos::FiPos;

/// The half-open span `[start, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct FiRange {
    start: FiPos,
    end: FiPos,
}

#[derive(Deserialize)]
struct RawRange {
    start: FiPos,
    end: FiPos,
}

impl TryFrom<RawRange> for FiRange {
    type Error = FiError;

    fn try_from(raw: RawRange) -> Result<Self, FiError> {
        FiRange::new(raw.start, raw.end)
    }
}

impl FiRange {
    pub fn new(start: FiPos, end: FiPos) -> Result<Self, FiError> {
        if end < start {
            return Err(FiError::InvertedRange { start, end });
        }
        Ok(FiRange { start, end })
    }

    /// The empty range at `pos`.
    pub fn at(pos: FiPos) -> Self {
        FiRange {
            start: pos,
            end: pos,
        }
    }

    /// The range covered by `text` when it begins at `start`.
    pub fn spanning(start: FiPos, text: &str) -> Self {
        FiRange {
            start,
            end: start.after(text),
        }
    }

    pub fn start(&self) -> FiPos {
        self.start
    }

    pub fn end(&self) -> FiPos {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, pos: FiPos) -> bool {
        self.start <= pos && pos < self.end
    }

    /// The smallest range covering both.
    pub fn union(&self, other: &FiRange) -> FiRange {
        FiRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for FiRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line() == self.end.line() {
            write!(f, "{}-{}", self.start, self.end.column())
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pos(line: u32, column: u32) -> FiPos {
        FiPos::new(line, column).unwrap()
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let err = FiRange::new(pos(2, 1), pos(1, 9)).unwrap_err();
        assert_eq!(err.to_string(), "range ends at 1:9 before it starts at 2:1");
        assert!(serde_json::from_str::<FiRange>(
            r#"{"start":{"line":2,"column":1},"end":{"line":1,"column":1}}"#
        )
        .is_err());
    }

    #[test]
    fn half_open_containment() {
        let r = FiRange::spanning(pos(1, 1), "let");
        assert!(r.contains(pos(1, 1)));
        assert!(r.contains(pos(1, 3)));
        assert!(!r.contains(pos(1, 4)));
        assert!(!FiRange::at(pos(1, 1)).contains(pos(1, 1)));
        assert!(FiRange::at(pos(4, 2)).is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(FiRange::new(pos(3, 5), pos(3, 9)).unwrap().to_string(), "3:5-9");
        assert_eq!(FiRange::new(pos(3, 5), pos(4, 1)).unwrap().to_string(), "3:5-4:1");
    }

    fn arb_pos() -> impl Strategy<Value = FiPos> {
        (1u32..50, 1u32..80).prop_map(|(l, c)| pos(l, c))
    }

    fn arb_range() -> impl Strategy<Value = FiRange> {
        (arb_pos(), arb_pos()).prop_map(|(a, b)| FiRange::new(a.min(b), a.max(b)).unwrap())
    }

    proptest! {
        #[test]
        fn union_covers_both(a in arb_range(), b in arb_range(), p in arb_pos()) {
            let u = a.union(&b);
            prop_assert!(u.start() <= a.start() && u.start() <= b.start());
            prop_assert!(u.end() >= a.end() && u.end() >= b.end());
            if a.contains(p) || b.contains(p) {
                prop_assert!(u.contains(p));
            }
        }
    }
}
