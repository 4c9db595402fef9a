//! Terminal colors.
//!
//! The named variants map to the eight base ANSI palette entries, which every
//! color terminal honors and which the user's terminal theme can restyle.
//! [`Color::Rgb`] emits a 24-bit true color sequence.
//!
//! ```
//! use lexedit::Color;
//!
//! assert_eq!(Color::Blue.fg_code(), "34");
//! assert_eq!(Color::from_hex("#1a1a2e"), Some(Color::Rgb(0x1a, 0x1a, 0x2e)));
//! ```

/// A foreground or background color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a hex color string (`#RRGGBB`, `RRGGBB`, or `#RGB`).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::Rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::Rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Palette index of a named color. [`Color::Rgb`] is never looked up.
    const fn palette_index(self) -> u8 {
        match self {
            Self::Black | Self::Rgb(..) => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::Cyan => 6,
            Self::White => 7,
        }
    }

    /// SGR parameters selecting this color as foreground.
    #[must_use]
    pub fn fg_code(self) -> String {
        match self {
            Self::Rgb(r, g, b) => format!("38;2;{r};{g};{b}"),
            named => (30 + named.palette_index()).to_string(),
        }
    }

    /// SGR parameters selecting this color as background.
    #[must_use]
    pub fn bg_code(self) -> String {
        match self {
            Self::Rgb(r, g, b) => format!("48;2;{r};{g};{b}"),
            named => (40 + named.palette_index()).to_string(),
        }
    }
}
