// Per-player input state management

use super::action::{ActionKind, Control};
use std::collections::HashSet;

/// Held and edge state of one player's controls
#[derive(Debug)]
pub struct PlayerInput {
    /// Player ID (0-3 for up to 4 players)
    player_id: usize,

    /// Controls currently held
    pressed: HashSet<Control>,

    /// Controls pressed since the last `update`
    just_pressed: HashSet<Control>,

    /// Controls released since the last `update`
    just_released: HashSet<Control>,

    /// Controls held during the previous frame
    previous_pressed: HashSet<Control>,
}

impl PlayerInput {
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
            previous_pressed: HashSet::new(),
        }
    }

    pub fn player_id(&self) -> usize {
        self.player_id
    }

    pub fn is_pressed(&self, control: Control) -> bool {
        self.pressed.contains(&control)
    }

    pub fn just_pressed(&self, control: Control) -> bool {
        self.just_pressed.contains(&control)
    }

    pub fn just_released(&self, control: Control) -> bool {
        self.just_released.contains(&control)
    }

    /// Held for more than one frame
    pub fn is_held(&self, control: Control) -> bool {
        self.pressed.contains(&control) && self.previous_pressed.contains(&control)
    }

    /// Register a press. Key repeats of an already held control are ignored.
    pub(crate) fn press(&mut self, control: Control) {
        if self.pressed.insert(control) {
            self.just_pressed.insert(control);
        }
    }

    pub(crate) fn release(&mut self, control: Control) {
        if self.pressed.remove(&control) {
            self.just_released.insert(control);
        }
    }

    /// Roll edges over into a new frame
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed = self.pressed.clone();
    }

    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed.clear();
    }

    /// Bufferable actions pressed this frame, in a stable order
    pub fn pressed_actions(&self) -> Vec<ActionKind> {
        ActionKind::ALL
            .into_iter()
            .filter(|kind| self.just_pressed(Control::from(*kind)))
            .collect()
    }

    /// Horizontal axis in [-1, 1]; opposite directions cancel
    pub fn movement_axis(&self) -> f32 {
        let mut horizontal = 0.0;
        if self.is_pressed(Control::MoveLeft) {
            horizontal -= 1.0;
        }
        if self.is_pressed(Control::MoveRight) {
            horizontal += 1.0;
        }
        horizontal
    }

    pub fn jump_held(&self) -> bool {
        self.is_pressed(Control::Jump)
    }
}
