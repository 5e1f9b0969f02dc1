//! Keyboard events.
//!
//! The components only care whether an event is the confirm key or the
//! space key. Hosts build [`KeyboardEvent`]s directly or convert them from
//! crossterm's key events.
//!
//! # Example
//!
//! ```
//! use spark_widgets::input::{KeyboardEvent, Modifiers};
//!
//! assert!(KeyboardEvent::new("Enter").is_confirm());
//! assert!(KeyboardEvent::new(" ").is_space());
//! assert!(!KeyboardEvent::with_modifiers("Enter", Modifiers::ctrl()).is_activation());
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Name of the confirm key.
pub const CONFIRM_KEY: &str = "Enter";

/// Name of the space key.
pub const SPACE_KEY: &str = " ";

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with alt
    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    /// True if any of ctrl/alt/meta is held. Shift alone is not a chord.
    pub fn is_chord(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowUp", " ")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// The confirm key, pressed.
    pub fn confirm() -> Self {
        Self::new(CONFIRM_KEY)
    }

    /// The space key, pressed.
    pub fn space() -> Self {
        Self::new(SPACE_KEY)
    }

    /// Same key, different press state.
    pub fn with_state(mut self, state: KeyState) -> Self {
        self.state = state;
        self
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// Unmodified confirm key
    pub fn is_confirm(&self) -> bool {
        self.key == CONFIRM_KEY && !self.modifiers.is_chord()
    }

    /// Unmodified space key
    pub fn is_space(&self) -> bool {
        self.key == SPACE_KEY && !self.modifiers.is_chord()
    }

    /// Check if this is a release event
    pub fn is_release(&self) -> bool {
        self.state == KeyState::Release
    }

    /// A press or auto-repeat of either activation key. Holding the key
    /// keeps activating.
    pub fn is_activation(&self) -> bool {
        !self.is_release() && (self.is_confirm() || self.is_space())
    }
}

// =============================================================================
// CROSSTERM CONVERSION
// =============================================================================

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: mods.contains(KeyModifiers::META) || mods.contains(KeyModifiers::SUPER),
    }
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => CONFIRM_KEY.to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Insert => "Insert".to_string(),
        _ => String::new(),
    }
}

impl From<KeyEvent> for KeyboardEvent {
    fn from(event: KeyEvent) -> Self {
        let state = match event.kind {
            KeyEventKind::Press => KeyState::Press,
            KeyEventKind::Repeat => KeyState::Repeat,
            KeyEventKind::Release => KeyState::Release,
        };

        KeyboardEvent {
            key: key_name(event.code),
            modifiers: convert_modifiers(event.modifiers),
            state,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(KeyboardEvent::confirm().is_activation());
        assert!(KeyboardEvent::space().is_activation());
        assert!(!KeyboardEvent::new("a").is_activation());
        assert!(!KeyboardEvent::new("Tab").is_activation());
    }

    #[test]
    fn test_release_does_not_activate() {
        assert!(!KeyboardEvent::confirm().with_state(KeyState::Release).is_activation());
        assert!(!KeyboardEvent::space().with_state(KeyState::Release).is_activation());
    }

    #[test]
    fn test_repeat_activates() {
        assert!(KeyboardEvent::confirm().with_state(KeyState::Repeat).is_activation());
        assert!(KeyboardEvent::space().with_state(KeyState::Repeat).is_activation());
    }

    #[test]
    fn test_chords_do_not_activate() {
        assert!(!KeyboardEvent::with_modifiers("Enter", Modifiers::ctrl()).is_confirm());
        assert!(!KeyboardEvent::with_modifiers(" ", Modifiers::alt()).is_space());
        // Shift alone still counts
        assert!(KeyboardEvent::with_modifiers("Enter", Modifiers::shift()).is_confirm());
    }

    #[test]
    fn test_from_crossterm_enter() {
        let event: KeyboardEvent = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE).into();
        assert_eq!(event.key, "Enter");
        assert!(event.is_press());
        assert!(event.is_confirm());
    }

    #[test]
    fn test_from_crossterm_space() {
        let event: KeyboardEvent = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE).into();
        assert!(event.is_space());
    }

    #[test]
    fn test_from_crossterm_modifiers_and_kind() {
        let mut raw = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        raw.kind = KeyEventKind::Release;
        let event = KeyboardEvent::from(raw);

        assert_eq!(event.key, "c");
        assert!(event.modifiers.ctrl);
        assert!(event.modifiers.shift);
        assert!(!event.modifiers.alt);
        assert_eq!(event.state, KeyState::Release);
    }

    #[test]
    fn test_from_crossterm_named_keys() {
        let event = KeyboardEvent::from(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(event.key, "Escape");
        let event = KeyboardEvent::from(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));
        assert_eq!(event.key, "F5");
    }
}
