//! Coloured labels for pretty output.

use owo_colors::{OwoColorize, Style, colors::css};

/// Returns `true` when stdout can render ANSI colours.
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

fn paint(text: &str, style: Style) -> String {
    if supports_color() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Styles for the few kinds of text the CLI highlights.
pub trait Colorize {
    /// Messages about missing results (orange).
    fn warning(&self) -> String;
    /// Identifiers (light blue).
    fn info(&self) -> String;
    /// Section labels.
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn warning(&self) -> String {
        paint(self.as_ref(), Style::new().fg::<css::Orange>())
    }

    fn info(&self) -> String {
        paint(self.as_ref(), Style::new().fg::<css::LightBlue>())
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), Style::new().dimmed())
    }
}
