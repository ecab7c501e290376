use std::fmt::Display;
use std::io;
use std::ops::{Deref, DerefMut};

use crate::color::AnsiColor;
use crate::config::LogConfig;

/// Writes lines to `W`, each prefixed by the current indentation.
#[derive(Debug)]
pub struct Log<W: io::Write> {
    out: W,
    config: LogConfig,
    level: usize,
}

impl<W: io::Write> Log<W> {
    pub fn new(out: W, config: LogConfig) -> Self {
        Log {
            out,
            config,
            level: 0,
        }
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        self.write_indent()?;
        writeln!(self.out, "{text}")
    }

    /// Like [`line`](Self::line), coloured when the config allows it.
    pub fn colored_line(&mut self, color: AnsiColor, text: impl Display) -> io::Result<()> {
        if !self.config.color {
            return self.line(text);
        }
        let text = text.to_string();
        self.write_indent()?;
        writeln!(self.out, "{}", color.paint(&text))
    }

    /// Raises the indent one level until the guard drops.
    pub fn indent(&mut self) -> IndentGuard<'_, W> {
        self.level += 1;
        IndentGuard { log: self }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_indent(&mut self) -> io::Result<()> {
        let n = self.level * self.config.indent_width;
        for _ in 0..n {
            write!(self.out, "{}", self.config.indent_unit)?;
        }
        Ok(())
    }
}

/// Holds one extra indent level on a [`Log`].
pub struct IndentGuard<'a, W: io::Write> {
    log: &'a mut Log<W>,
}

impl<W: io::Write> Deref for IndentGuard<'_, W> {
    type Target = Log<W>;

    fn deref(&self) -> &Log<W> {
        self.log
    }
}

impl<W: io::Write> DerefMut for IndentGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Log<W> {
        self.log
    }
}

impl<W: io::Write> Drop for IndentGuard<'_, W> {
    fn drop(&mut self) {
        self.log.level -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Log<Vec<u8>>) -> io::Result<()>, config: LogConfig) -> String {
        let mut log = Log::new(Vec::new(), config);
        f(&mut log).unwrap();
        String::from_utf8(log.into_inner()).unwrap()
    }

    #[test]
    fn nested_guards_indent() {
        let out = render(
            |log| {
                log.line("top")?;
                {
                    let mut inner = log.indent();
                    inner.line("one")?;
                    let mut deeper = inner.indent();
                    deeper.line(2)?;
                    assert_eq!(deeper.level(), 2);
                }
                assert_eq!(log.level(), 0);
                log.line("back")
            },
            LogConfig::plain(),
        );
        assert_eq!(out, "top\n  one\n    2\nback\n");
    }

    #[test]
    fn indent_unit_and_width() {
        let config = LogConfig {
            indent_width: 1,
            indent_unit: '\t',
            ..LogConfig::plain()
        };
        let out = render(|log| log.indent().line("x"), config);
        assert_eq!(out, "\tx\n");
    }

    #[test]
    fn plain_config_drops_colour() {
        let out = render(|log| log.colored_line(AnsiColor::Red, "err"), LogConfig::plain());
        assert_eq!(out, "err\n");
    }

    #[test]
    fn colour_goes_through_paint_when_enabled() {
        let out = render(|log| log.colored_line(AnsiColor::Red, "err"), LogConfig::default());
        assert_eq!(out, format!("{}\n", AnsiColor::Red.paint("err")));
    }

    #[test]
    fn coloured_lines_are_indented() {
        let out = render(
            |log| log.indent().colored_line(AnsiColor::Green, "ok"),
            LogConfig::default(),
        );
        assert_eq!(out, format!("  {}\n", AnsiColor::Green.paint("ok")));
    }
}
