//! Graphviz rendering options.

use serde::{Deserialize, Serialize};

/// Direction in which Graphviz lays out the ranks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankDir {
    #[default]
    TB,
    BT,
    LR,
    RL,
}

impl RankDir {
    pub const fn as_str(self) -> &'static str {
        match self {
            RankDir::TB => "TB",
            RankDir::BT => "BT",
            RankDir::LR => "LR",
            RankDir::RL => "RL",
        }
    }
}

/// Layout attributes written into the graph header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotStyle {
    pub rankdir: RankDir,
    pub node_shape: String,
}

impl Default for DotStyle {
    fn default() -> Self {
        DotStyle {
            rankdir: RankDir::TB,
            node_shape: "box".to_owned(),
        }
    }
}

/// Quotes `s` as a DOT string literal.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting() {
        assert_eq!(quote("a"), "\"a\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("a\nb"), "\"a\\nb\"");
    }

    #[test]
    fn style_defaults_fill_missing_fields() {
        let style: DotStyle = serde_json::from_str(r#"{"rankdir":"BT"}"#).unwrap();
        assert_eq!(style.rankdir, RankDir::BT);
        assert_eq!(style.node_shape, "box");
    }
}
