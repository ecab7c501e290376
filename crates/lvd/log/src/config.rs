use serde::{Deserialize, Serialize};

/// Settings for a [`Log`](crate::Log).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Emit ANSI colour codes.
    pub color: bool,
    /// Units of `indent_unit` per indent level.
    pub indent_width: usize,
    pub indent_unit: char,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            color: true,
            indent_width: 2,
            indent_unit: ' ',
        }
    }
}

impl LogConfig {
    pub fn plain() -> Self {
        LogConfig {
            color: false,
            ..LogConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: LogConfig = serde_json::from_str(r#"{"indent_width":4}"#).unwrap();
        assert_eq!(cfg.indent_width, 4);
        assert!(cfg.color);
        assert_eq!(cfg.indent_unit, ' ');
    }
}
