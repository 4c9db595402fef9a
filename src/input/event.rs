//! Editor input events.

/// An input event delivered to the dispatcher.
///
/// Produced by a surface after keymap resolution, so every variant is a
/// command the editor understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Printable character to insert.
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Backspace,
    /// Leave the edit loop.
    Escape,
    SaveRequested,
    OpenRequested,
    Undo,
    Redo,
}

impl InputEvent {
    /// Short name used in log lines.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Char(_) => "char",
            Self::ArrowUp => "arrow_up",
            Self::ArrowDown => "arrow_down",
            Self::ArrowLeft => "arrow_left",
            Self::ArrowRight => "arrow_right",
            Self::Enter => "enter",
            Self::Backspace => "backspace",
            Self::Escape => "escape",
            Self::SaveRequested => "save",
            Self::OpenRequested => "open",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}

impl From<char> for InputEvent {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}
