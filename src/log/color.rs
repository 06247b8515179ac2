//! Plain SGR foreground colors. Terminals that gitdoc-cli targets all understand
//! the 8-color palette, and the numeric codes are part of the output contract.

use std::fmt;

/// Start of a colored span, followed by the SGR code and `m`.
pub const FORMAT_PRE: &str = "\x1b[0;";
/// Resets the terminal back to its default attributes.
pub const RESET: &str = "\x1b[0m";

/// Foreground colors the printer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Green,
    Blue,
    Red,
    Yellow,
    /// Never wrapped in escape codes.
    #[default]
    None,
}

impl Color {
    /// SGR code for the color, `None` for [`Color::None`].
    #[must_use]
    pub const fn code(self) -> Option<u8> {
        match self {
            Self::Green => Some(32),
            Self::Blue => Some(34),
            Self::Red => Some(31),
            Self::Yellow => Some(33),
            Self::None => None,
        }
    }

    /// The escape sequence that switches the terminal to this color.
    /// Empty for [`Color::None`].
    #[must_use]
    pub fn fg_ansi(self) -> String {
        self.code()
            .map_or_else(String::new, |code| format!("{FORMAT_PRE}{code}m"))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps `text` in the color's escape sequence and a reset.
/// [`Color::None`] returns the text untouched.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    match color.code() {
        Some(code) => format!("{FORMAT_PRE}{code}m{text}{RESET}"),
        None => text.to_string(),
    }
}
