// Buffered action kinds and host control mappings

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Discrete actions that go through the input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Jump,
    Punch,
    Kick,
    Special,
    Dash,
}

impl ActionKind {
    /// Every bufferable action, in polling order
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Jump,
        ActionKind::Punch,
        ActionKind::Kick,
        ActionKind::Special,
        ActionKind::Dash,
    ];
}

/// Everything a host can bind a key or button to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    // Continuous axis
    MoveLeft,
    MoveRight,

    // Edge-triggered, forwarded to the character's buffer
    Jump,
    Punch,
    Kick,
    Special,
    Dash,

    // Host meta controls
    Pause,
    Menu,
}

impl Control {
    /// The buffered action this control produces on press, if any
    pub fn action_kind(self) -> Option<ActionKind> {
        match self {
            Control::Jump => Some(ActionKind::Jump),
            Control::Punch => Some(ActionKind::Punch),
            Control::Kick => Some(ActionKind::Kick),
            Control::Special => Some(ActionKind::Special),
            Control::Dash => Some(ActionKind::Dash),
            Control::MoveLeft | Control::MoveRight | Control::Pause | Control::Menu => None,
        }
    }
}

impl From<ActionKind> for Control {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Jump => Control::Jump,
            ActionKind::Punch => Control::Punch,
            ActionKind::Kick => Control::Kick,
            ActionKind::Special => Control::Special,
            ActionKind::Dash => Control::Dash,
        }
    }
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default bindings for player one
pub fn default_p1_bindings() -> Vec<(InputSource, Control)> {
    vec![
        (InputSource::key(KeyCode::KeyA), Control::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Control::MoveRight),
        (InputSource::key(KeyCode::ArrowLeft), Control::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Control::MoveRight),
        (InputSource::key(KeyCode::Space), Control::Jump),
        (InputSource::key(KeyCode::KeyW), Control::Jump),
        (InputSource::key(KeyCode::KeyJ), Control::Punch),
        (InputSource::key(KeyCode::KeyK), Control::Kick),
        (InputSource::key(KeyCode::KeyL), Control::Special),
        (InputSource::key(KeyCode::ShiftLeft), Control::Dash),
        (InputSource::mouse(MouseButton::Left), Control::Punch),
        (InputSource::mouse(MouseButton::Right), Control::Kick),
    ]
}

/// Bindings that apply regardless of player
pub fn global_bindings() -> Vec<(InputSource, Control)> {
    vec![
        (InputSource::key(KeyCode::Escape), Control::Menu),
        (InputSource::key(KeyCode::KeyP), Control::Pause),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_controls_round_trip() {
        for kind in ActionKind::ALL {
            assert_eq!(Control::from(kind).action_kind(), Some(kind));
        }
    }

    #[test]
    fn test_axis_and_meta_controls_are_not_buffered() {
        assert_eq!(Control::MoveLeft.action_kind(), None);
        assert_eq!(Control::MoveRight.action_kind(), None);
        assert_eq!(Control::Pause.action_kind(), None);
        assert_eq!(Control::Menu.action_kind(), None);
    }

    #[test]
    fn test_default_p1_bindings_cover_every_action() {
        let bindings = default_p1_bindings();
        for kind in ActionKind::ALL {
            assert!(
                bindings.iter().any(|(_, c)| c.action_kind() == Some(kind)),
                "{:?} has no default binding",
                kind
            );
        }
    }

    #[test]
    fn test_no_duplicate_inputs_in_p1() {
        let bindings = default_p1_bindings();
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in bindings {
            assert!(
                seen_sources.insert(source),
                "Duplicate input source found in P1 bindings"
            );
        }
    }

    #[test]
    fn test_global_bindings_exist() {
        let bindings = global_bindings();
        assert!(bindings.iter().any(|(_, c)| *c == Control::Menu));
    }
}
