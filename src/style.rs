//! Text styling with attributes and colors.
//!
//! - [`TextAttributes`]: bitflags for bold, underline, inverse, ...
//! - [`Style`]: colors plus attributes
//! - [`StyleBuilder`]: fluent builder
//!
//! ```
//! use lexedit::{Color, Style, TextAttributes};
//!
//! let status = Style::builder().fg(Color::Black).bg(Color::Cyan).build();
//! assert_eq!(status.sgr(), "\x1b[0;30;46m");
//!
//! let cursor = Style::inverse();
//! assert!(cursor.attributes.contains(TextAttributes::INVERSE));
//! ```

use crate::color::Color;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD      = 0x01;
        /// Dim/decreased intensity.
        const DIM       = 0x02;
        /// Italic (not widely supported).
        const ITALIC    = 0x04;
        /// Underlined text.
        const UNDERLINE = 0x08;
        /// Swapped foreground/background.
        const INVERSE   = 0x20;
    }
}

impl TextAttributes {
    /// SGR parameter for each attribute, in emission order.
    const SGR_CODES: [(Self, &'static str); 5] = [
        (Self::BOLD, "1"),
        (Self::DIM, "2"),
        (Self::ITALIC, "3"),
        (Self::UNDERLINE, "4"),
        (Self::INVERSE, "7"),
    ];
}

/// Complete text style.
///
/// `None` for a color means "terminal default".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no colors or attributes.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// Create a style with only a foreground color.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a foreground-on-background style.
    #[must_use]
    pub const fn pair(fg: Color, bg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: Some(bg),
            attributes: TextAttributes::empty(),
        }
    }

    /// Create an inverse (swapped fg/bg) style.
    #[must_use]
    pub const fn inverse() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: TextAttributes::INVERSE,
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::BOLD),
            ..self
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Full SGR sequence for this style, starting from a reset.
    #[must_use]
    pub fn sgr(&self) -> String {
        let mut params = vec!["0".to_string()];
        for (flag, code) in TextAttributes::SGR_CODES {
            if self.attributes.contains(flag) {
                params.push(code.to_string());
            }
        }
        if let Some(fg) = self.fg {
            params.push(fg.fg_code());
        }
        if let Some(bg) = self.bg {
            params.push(bg.bg_code());
        }
        format!("\x1b[{}m", params.join(";"))
    }
}

/// Builder for creating styles fluently.
#[derive(Clone, Debug, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    #[must_use]
    pub fn fg(mut self, color: Color) -> Self {
        self.style.fg = Some(color);
        self
    }

    #[must_use]
    pub fn bg(mut self, color: Color) -> Self {
        self.style.bg = Some(color);
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style.attributes |= TextAttributes::BOLD;
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.style.attributes |= TextAttributes::UNDERLINE;
        self
    }

    #[must_use]
    pub fn inverse(mut self) -> Self {
        self.style.attributes |= TextAttributes::INVERSE;
        self
    }

    #[must_use]
    pub fn build(self) -> Style {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builder() {
        let style = Style::builder()
            .fg(Color::Red)
            .bg(Color::Black)
            .bold()
            .underline()
            .build();

        assert_eq!(style.fg, Some(Color::Red));
        assert_eq!(style.bg, Some(Color::Black));
        assert!(style.attributes.contains(TextAttributes::BOLD));
        assert!(style.attributes.contains(TextAttributes::UNDERLINE));
    }

    #[test]
    fn test_sgr_plain() {
        assert_eq!(Style::NONE.sgr(), "\x1b[0m");
        assert!(Style::NONE.is_empty());
    }

    #[test]
    fn test_sgr_attribute_and_colors() {
        let style = Style::pair(Color::Blue, Color::Black).with_bold();
        assert_eq!(style.sgr(), "\x1b[0;1;34;40m");
        assert_eq!(Style::inverse().sgr(), "\x1b[0;7m");
    }
}
