//! Ordered regex classifiers composed with last-match-wins.
//!
//! Each classifier scans the whole line on its own and paints the character
//! positions it matches into a shared per-line buffer. Classifiers run in a
//! fixed order, so a later match overwrites an earlier one. Keyword text also
//! matches the identifier pattern, which runs later: keywords are therefore
//! reported as [`HighlightClass::Identifier`]. That outcome is kept as is.

use regex::Regex;

use crate::highlight::token::{HighlightClass, HighlightSpan, Paint};

const KEYWORD_PATTERN: &str = r"\b(def|class|if|else|elif|for|while|return|import|from|as|try|except|finally|with|yield|break|continue|pass|global|nonlocal|assert|lambda|del|True|False|None|and|or|not|is|in|raise|print|input|self|super)\b";
const COMMENT_PATTERN: &str = r"#[^\n]*";
const STRING_PATTERN: &str = r#"""".*?"""|'''.*?'''|".*?"|'.*?'"#;
const NUMBER_PATTERN: &str = r"\b\d+\b";
const IDENTIFIER_PATTERN: &str = r"\b[A-Za-z_][A-Za-z0-9_]*\b";
const OPERATOR_PATTERN: &str = r"[+\-*/=<>!&|%^~]+";

/// A single lexical matcher.
#[derive(Clone, Debug)]
pub struct Classifier {
    class: HighlightClass,
    regex: Regex,
}

impl Classifier {
    /// Compile a classifier for `class`.
    pub fn new(class: HighlightClass, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            class,
            regex: Regex::new(pattern)?,
        })
    }

    #[must_use]
    pub fn class(&self) -> HighlightClass {
        self.class
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Applies classifiers in order and composes their matches.
#[derive(Clone, Debug)]
pub struct Compositor {
    classifiers: Vec<Classifier>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    /// The six built-in classifiers in priority order.
    #[must_use]
    pub fn new() -> Self {
        let table = [
            (HighlightClass::Keyword, KEYWORD_PATTERN),
            (HighlightClass::Comment, COMMENT_PATTERN),
            (HighlightClass::String, STRING_PATTERN),
            (HighlightClass::Number, NUMBER_PATTERN),
            (HighlightClass::Identifier, IDENTIFIER_PATTERN),
            (HighlightClass::Operator, OPERATOR_PATTERN),
        ];
        let classifiers = table
            .into_iter()
            .map(|(class, pattern)| {
                Classifier::new(class, pattern).expect("built-in highlight pattern compiles")
            })
            .collect();
        Self { classifiers }
    }

    /// Use a custom classifier list; order is priority order.
    #[must_use]
    pub fn with_classifiers(classifiers: Vec<Classifier>) -> Self {
        Self { classifiers }
    }

    #[must_use]
    pub fn classifiers(&self) -> &[Classifier] {
        &self.classifiers
    }

    /// Raw matches of every classifier, in classifier order, before
    /// composition. Spans from different classifiers may overlap.
    #[must_use]
    pub fn matches(&self, line: &str) -> Vec<HighlightSpan> {
        let columns = ColumnMap::new(line);
        let mut spans = Vec::new();
        for classifier in &self.classifiers {
            for found in classifier.regex.find_iter(line) {
                let start = columns.col(found.start());
                let end = columns.col(found.end());
                spans.push(HighlightSpan::new(start, end, classifier.class));
            }
        }
        spans
    }

    /// Composed classification of `line`.
    ///
    /// Returns maximal runs of equal class ordered by column; positions no
    /// classifier matched are left out.
    #[must_use]
    pub fn classify(&self, line: &str) -> Vec<HighlightSpan> {
        let paints = self.paint(line, None);
        let mut spans: Vec<HighlightSpan> = Vec::new();
        for (col, paint) in paints.into_iter().enumerate() {
            let Paint::Class(class) = paint else {
                continue;
            };
            match spans.last_mut() {
                Some(last) if last.end == col && last.class == class => last.end += 1,
                _ => spans.push(HighlightSpan::new(col, col + 1, class)),
            }
        }
        spans
    }

    /// One [`Paint`] per char of `line`.
    ///
    /// The cursor overlay runs after every classifier: if `cursor_col` falls
    /// inside the line, that single position becomes [`Paint::Cursor`].
    #[must_use]
    pub fn paint(&self, line: &str, cursor_col: Option<usize>) -> Vec<Paint> {
        let mut paints = vec![Paint::Plain; line.chars().count()];
        for span in self.matches(line) {
            paints[span.range()].fill(Paint::Class(span.class));
        }
        if let Some(slot) = cursor_col.and_then(|col| paints.get_mut(col)) {
            *slot = Paint::Cursor;
        }
        paints
    }
}

/// Byte offset to char column lookup for one line.
struct ColumnMap {
    starts: Vec<usize>,
}

impl ColumnMap {
    fn new(line: &str) -> Self {
        Self {
            starts: line.char_indices().map(|(idx, _)| idx).collect(),
        }
    }

    /// Char column of byte offset `byte` (a char boundary or the line end).
    fn col(&self, byte: usize) -> usize {
        self.starts.partition_point(|&start| start < byte)
    }
}
