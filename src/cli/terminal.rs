//! Coloured terminal output

use owo_colors::{OwoColorize, Style};

/// Detects whether colored output should be enabled
fn supports_color() -> bool {
    supports_color::on_cached(supports_color::Stream::Stdout).is_some()
}

fn paint(text: &str, style: Style) -> String {
    if supports_color() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Bold, for section headings
    fn heading(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn success(&self) -> String {
        paint(self.as_ref(), Style::new().green())
    }

    fn warning(&self) -> String {
        paint(self.as_ref(), Style::new().yellow())
    }

    fn heading(&self) -> String {
        paint(self.as_ref(), Style::new().bold())
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), Style::new().dimmed())
    }
}
