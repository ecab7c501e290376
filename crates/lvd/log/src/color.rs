use colored::{Color, ColoredString, Colorize};
use serde::{Deserialize, Serialize};

/// The sixteen ANSI foreground colours and a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Reset,
}

impl AnsiColor {
    fn color(self) -> Option<Color> {
        Some(match self {
            AnsiColor::Black => Color::Black,
            AnsiColor::Red => Color::Red,
            AnsiColor::Green => Color::Green,
            AnsiColor::Yellow => Color::Yellow,
            AnsiColor::Blue => Color::Blue,
            AnsiColor::Magenta => Color::Magenta,
            AnsiColor::Cyan => Color::Cyan,
            AnsiColor::White => Color::White,
            AnsiColor::BrightBlack => Color::BrightBlack,
            AnsiColor::BrightRed => Color::BrightRed,
            AnsiColor::BrightGreen => Color::BrightGreen,
            AnsiColor::BrightYellow => Color::BrightYellow,
            AnsiColor::BrightBlue => Color::BrightBlue,
            AnsiColor::BrightMagenta => Color::BrightMagenta,
            AnsiColor::BrightCyan => Color::BrightCyan,
            AnsiColor::BrightWhite => Color::BrightWhite,
            AnsiColor::Reset => return None,
        })
    }

    pub fn paint(self, text: &str) -> ColoredString {
        match self.color() {
            Some(c) => text.color(c),
            None => text.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_keeps_the_text() {
        assert_eq!(AnsiColor::Red.paint("x").fgcolor(), Some(Color::Red));
        assert_eq!(AnsiColor::Reset.paint("x").fgcolor(), None);
        assert_eq!(&*AnsiColor::BrightCyan.paint("abc"), "abc");
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&AnsiColor::BrightGreen).unwrap();
        assert_eq!(json, "\"bright_green\"");
    }
}
