//! Key bindings from raw keys to editor commands.

use std::collections::HashMap;

use crate::input::event::InputEvent;
use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Maps key presses to [`InputEvent`]s.
///
/// Explicit bindings are checked first; any remaining printable key becomes
/// [`InputEvent::Char`]. Everything else is unbound and ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keymap {
    bindings: HashMap<KeyEvent, InputEvent>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind(KeyEvent::key(KeyCode::Esc), InputEvent::Escape);
        map.bind(KeyEvent::key(KeyCode::F(2)), InputEvent::SaveRequested);
        map.bind(KeyEvent::key(KeyCode::F(3)), InputEvent::OpenRequested);
        map.bind(KeyEvent::with_ctrl(KeyCode::Char('z')), InputEvent::Undo);
        map.bind(KeyEvent::with_ctrl(KeyCode::Char('y')), InputEvent::Redo);
        map.bind(KeyEvent::key(KeyCode::Up), InputEvent::ArrowUp);
        map.bind(KeyEvent::key(KeyCode::Down), InputEvent::ArrowDown);
        map.bind(KeyEvent::key(KeyCode::Left), InputEvent::ArrowLeft);
        map.bind(KeyEvent::key(KeyCode::Right), InputEvent::ArrowRight);
        map.bind(KeyEvent::key(KeyCode::Enter), InputEvent::Enter);
        map.bind(KeyEvent::key(KeyCode::Backspace), InputEvent::Backspace);
        map
    }
}

impl Keymap {
    /// Keymap with no explicit bindings; only printable keys resolve.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind a key, replacing any previous binding for it.
    pub fn bind(&mut self, key: KeyEvent, event: InputEvent) -> Option<InputEvent> {
        self.bindings.insert(key, event)
    }

    pub fn unbind(&mut self, key: &KeyEvent) -> Option<InputEvent> {
        self.bindings.remove(key)
    }

    /// Resolve a key press.
    ///
    /// Shift is ignored when matching explicit bindings since terminals
    /// report it inconsistently for function keys.
    #[must_use]
    pub fn resolve(&self, key: &KeyEvent) -> Option<InputEvent> {
        let unshifted = KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT);
        if let Some(event) = self
            .bindings
            .get(key)
            .or_else(|| self.bindings.get(&unshifted))
        {
            return Some(*event);
        }
        key.printable().map(InputEvent::Char)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.resolve(&KeyEvent::key(KeyCode::Esc)),
            Some(InputEvent::Escape)
        );
        assert_eq!(
            keymap.resolve(&KeyEvent::key(KeyCode::F(2))),
            Some(InputEvent::SaveRequested)
        );
        assert_eq!(
            keymap.resolve(&KeyEvent::key(KeyCode::F(3))),
            Some(InputEvent::OpenRequested)
        );
        assert_eq!(
            keymap.resolve(&KeyEvent::with_ctrl(KeyCode::Char('z'))),
            Some(InputEvent::Undo)
        );
        assert_eq!(
            keymap.resolve(&KeyEvent::with_ctrl(KeyCode::Char('y'))),
            Some(InputEvent::Redo)
        );
    }

    #[test]
    fn test_printable_falls_through() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.resolve(&KeyEvent::char('x')),
            Some(InputEvent::Char('x'))
        );
        assert_eq!(
            keymap.resolve(&KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            Some(InputEvent::Char('X'))
        );
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let keymap = Keymap::default();
        assert_eq!(keymap.resolve(&KeyEvent::key(KeyCode::Tab)), None);
        assert_eq!(keymap.resolve(&KeyEvent::key(KeyCode::F(5))), None);
        assert_eq!(
            keymap.resolve(&KeyEvent::with_ctrl(KeyCode::Char('q'))),
            None
        );
    }

    #[test]
    fn test_shifted_arrow_still_moves() {
        let keymap = Keymap::default();
        let key = KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT);
        assert_eq!(keymap.resolve(&key), Some(InputEvent::ArrowUp));
    }

    #[test]
    fn test_rebinding() {
        let mut keymap = Keymap::default();
        let ctrl_s = KeyEvent::with_ctrl(KeyCode::Char('s'));
        assert_eq!(keymap.bind(ctrl_s, InputEvent::SaveRequested), None);
        assert_eq!(keymap.resolve(&ctrl_s), Some(InputEvent::SaveRequested));
        assert_eq!(
            keymap.unbind(&KeyEvent::key(KeyCode::Esc)),
            Some(InputEvent::Escape)
        );
        assert_eq!(keymap.resolve(&KeyEvent::key(KeyCode::Esc)), None);
        assert!(Keymap::empty().is_empty());
    }
}
