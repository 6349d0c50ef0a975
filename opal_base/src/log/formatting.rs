//! Contains the ANSI escape codes used to style console output.

use std::fmt::Display;

/// Represents a text attribute or a foreground color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Style {
    /// Applies the style to the given displayable object.
    pub fn with<T>(self, display: T) -> Styled<T> {
        Styled {
            style: self,
            display,
        }
    }

    /// Gets the ANSI escape sequence that turns the style on.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Bold => "\x1B[1m",
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Cyan => "\x1B[36m",
        }
    }
}

/// Is a struct implementing [`Display`] that represents a displayable object with a style applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Styled<T> {
    /// The style applied to the displayable object.
    pub style: Style,

    /// The displayable object.
    pub display: T,
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\x1B[0m", self.style.code(), self.display)
    }
}

/// Removes the ANSI escape sequences written by [`Styled`] from the given text.
#[must_use]
pub fn strip_styles(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(char) = chars.next() {
        if char == '\x1B' {
            // skips `[`, the parameters and the final `m`
            for escaped in chars.by_ref() {
                if escaped == 'm' {
                    break;
                }
            }
        } else {
            result.push(char);
        }
    }

    result
}
