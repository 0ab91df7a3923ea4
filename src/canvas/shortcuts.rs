use super::event::{Key, KeyEvent, KeyFocus};

/// Keyboard bindings of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    DeleteSelection,
    DuplicateSelection,
    SelectAll,
    Cancel,
    ToggleGrid,
    ToggleSnap,
}

impl Shortcut {
    /// Maps a key press to its shortcut. Keys typed into a text input never
    /// trigger canvas shortcuts.
    pub fn from_key(event: &KeyEvent) -> Option<Shortcut> {
        if event.focus == KeyFocus::TextInput {
            return None;
        }
        match event.key {
            Key::Delete => Some(Shortcut::DeleteSelection),
            Key::Escape => Some(Shortcut::Cancel),
            Key::Char(c) if event.modifiers.ctrl => match c.to_ascii_lowercase() {
                'd' => Some(Shortcut::DuplicateSelection),
                'a' => Some(Shortcut::SelectAll),
                'g' => Some(Shortcut::ToggleGrid),
                's' => Some(Shortcut::ToggleSnap),
                _ => None,
            },
            Key::Char(_) => None,
        }
    }
}
