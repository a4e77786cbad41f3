//! Keyboard handling for mirage.
//!
//! Decodes crossterm key events into [`InputEvent`], the logical inputs the
//! editor understands, so the editor never sees terminal key encodings.
//! Hotkeys typed with a Cyrillic layout active are translated to the Latin
//! key on the same physical position first.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Logical input event consumed by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    // Commands
    Save,
    Quit,
    ToggleWrap,
    ToggleLineNumbers,
    Help,

    // Navigation
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    LineStart,
    LineEnd,

    // Editing
    Newline,
    Backspace,
    Delete,
    Char(char),

    /// Unrecognized or partial key sequence
    Ignored,
}

impl InputEvent {
    /// Decode a key press.
    pub fn from_key_event(key: KeyEvent) -> Self {
        let key = translate_hotkey(key);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            // Ctrl hotkeys
            KeyCode::Char(ch) if ctrl && !alt => match ch.to_ascii_lowercase() {
                's' => Self::Save,
                'q' => Self::Quit,
                'w' => Self::ToggleWrap,
                'l' => Self::ToggleLineNumbers,
                'h' => Self::Help,
                'a' => Self::LineStart,
                'e' => Self::LineEnd,
                'd' => Self::Delete,
                _ => Self::Ignored,
            },
            KeyCode::F(1) => Self::Help,

            KeyCode::Up => Self::MoveUp,
            KeyCode::Down => Self::MoveDown,
            KeyCode::Left => Self::MoveLeft,
            KeyCode::Right => Self::MoveRight,
            KeyCode::Home => Self::LineStart,
            KeyCode::End => Self::LineEnd,

            KeyCode::Enter => Self::Newline,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Delete => Self::Delete,

            KeyCode::Char(ch) if !ctrl && !alt && !ch.is_control() => Self::Char(ch),

            _ => Self::Ignored,
        }
    }
}

/// Cyrillic ЙЦУКЕН keys paired with the QWERTY keys they share.
const CYRILLIC_LOWER: &str = "йцукенгшщзхъфывапролджэячсмитьбю";
const LATIN_LOWER: &str = "qwertyuiop[]asdfghjkl;'zxcvbnm,.";
const CYRILLIC_UPPER: &str = "ЙЦУКЕНГШЩЗХЪФЫВАПРОЛДЖЭЯЧСМИТЬБЮ";
const LATIN_UPPER: &str = "QWERTYUIOP{}ASDFGHJKL:\"ZXCVBNM<>";

/// Convert a Cyrillic character to the Latin character on the same physical key.
///
/// Characters outside the layout are returned unchanged.
pub fn cyrillic_to_latin(ch: char) -> char {
    let lookup = |from: &str, to: &str| {
        from.chars()
            .position(|c| c == ch)
            .and_then(|idx| to.chars().nth(idx))
    };

    lookup(CYRILLIC_LOWER, LATIN_LOWER)
        .or_else(|| lookup(CYRILLIC_UPPER, LATIN_UPPER))
        .unwrap_or(ch)
}

/// Translate KeyEvent for hotkeys
///
/// Applies Cyrillic → Latin translation only when a modifier (Ctrl or Alt)
/// is held, so regular text input is unaffected.
pub fn translate_hotkey(key: KeyEvent) -> KeyEvent {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        if let KeyCode::Char(ch) = key.code {
            let translated = cyrillic_to_latin(ch);
            if translated != ch {
                return KeyEvent::new(KeyCode::Char(translated), key.modifiers);
            }
        }
    }
    key
}
