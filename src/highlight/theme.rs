use crate::color::Color;
use crate::highlight::token::{HighlightClass, Paint};
use crate::style::Style;

/// Maps every [`Paint`] slot to a concrete [`Style`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    name: String,
    classes: [Style; HighlightClass::COUNT],
    plain: Style,
    cursor: Style,
    status_bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Theme with every slot unstyled.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: [Style::NONE; HighlightClass::COUNT],
            plain: Style::NONE,
            cursor: Style::inverse(),
            status_bar: Style::inverse(),
        }
    }

    /// Base-palette colors on black: blue keywords, green comments, yellow
    /// strings, cyan numbers, magenta identifiers, red operators, black on
    /// white cursor, black on cyan status bar.
    #[must_use]
    pub fn classic() -> Self {
        Self::new("classic")
            .with_class(HighlightClass::Keyword, Style::pair(Color::Blue, Color::Black))
            .with_class(HighlightClass::Comment, Style::pair(Color::Green, Color::Black))
            .with_class(HighlightClass::String, Style::pair(Color::Yellow, Color::Black))
            .with_class(HighlightClass::Number, Style::pair(Color::Cyan, Color::Black))
            .with_class(
                HighlightClass::Identifier,
                Style::pair(Color::Magenta, Color::Black),
            )
            .with_class(HighlightClass::Operator, Style::pair(Color::Red, Color::Black))
            .with_cursor(Style::pair(Color::Black, Color::White))
            .with_status_bar(Style::pair(Color::Black, Color::Cyan))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Style for a paint slot.
    #[must_use]
    pub fn style_for(&self, paint: Paint) -> Style {
        match paint {
            Paint::Plain => self.plain,
            Paint::Class(class) => self.classes[class.as_usize()],
            Paint::Cursor => self.cursor,
            Paint::StatusBar => self.status_bar,
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: HighlightClass, style: Style) -> Self {
        self.classes[class.as_usize()] = style;
        self
    }

    #[must_use]
    pub fn with_plain(mut self, style: Style) -> Self {
        self.plain = style;
        self
    }

    #[must_use]
    pub fn with_cursor(mut self, style: Style) -> Self {
        self.cursor = style;
        self
    }

    #[must_use]
    pub fn with_status_bar(mut self, style: Style) -> Self {
        self.status_bar = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_slots_are_distinct() {
        let theme = Theme::classic();
        let mut styles: Vec<Style> = HighlightClass::ALL
            .iter()
            .map(|&class| theme.style_for(Paint::Class(class)))
            .collect();
        styles.push(theme.style_for(Paint::Cursor));
        styles.push(theme.style_for(Paint::StatusBar));
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_new_theme_defaults() {
        let theme = Theme::new("bare");
        assert_eq!(theme.name(), "bare");
        assert_eq!(theme.style_for(Paint::Plain), Style::NONE);
        assert_eq!(theme.style_for(Paint::Cursor), Style::inverse());
    }
}
