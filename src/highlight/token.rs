//! Highlight classes and spans.

use std::ops::Range;

/// Lexical class assigned to a character range.
///
/// Declaration order is the classifier priority order: later classes
/// overwrite earlier ones where their matches overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HighlightClass {
    Keyword,
    Comment,
    String,
    Number,
    Identifier,
    Operator,
}

impl HighlightClass {
    /// Number of classes.
    pub const COUNT: usize = 6;

    /// All classes in priority order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Keyword,
        Self::Comment,
        Self::String,
        Self::Number,
        Self::Identifier,
        Self::Operator,
    ];

    #[must_use]
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Comment => "comment",
            Self::String => "string",
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::Operator => "operator",
        }
    }
}

/// A classified run of characters on one line.
///
/// `start` and `end` are char columns, half-open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub class: HighlightClass,
}

impl HighlightSpan {
    #[must_use]
    pub fn new(start: usize, end: usize, class: HighlightClass) -> Self {
        debug_assert!(start <= end, "span range must be start <= end");
        Self { start, end, class }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Visual style slot a render surface paints with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Unclassified text.
    #[default]
    Plain,
    /// One of the lexical classes.
    Class(HighlightClass),
    /// The character under the cursor.
    Cursor,
    /// The status line.
    StatusBar,
}

impl From<HighlightClass> for Paint {
    fn from(class: HighlightClass) -> Self {
        Self::Class(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_construction_and_accessors() {
        let span = HighlightSpan::new(2, 8, HighlightClass::Keyword);
        assert_eq!(span.len(), 6);
        assert!(!span.is_empty());
        assert_eq!(span.range(), 2..8);
    }

    #[test]
    fn classes_are_in_priority_order() {
        for (idx, class) in HighlightClass::ALL.iter().enumerate() {
            assert_eq!(class.as_usize(), idx);
        }
        assert_eq!(HighlightClass::ALL[HighlightClass::COUNT - 1].name(), "operator");
    }

    #[test]
    fn paint_from_class() {
        assert_eq!(
            Paint::from(HighlightClass::Number),
            Paint::Class(HighlightClass::Number)
        );
        assert_eq!(Paint::default(), Paint::Plain);
    }
}
