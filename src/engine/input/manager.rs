// Input manager - routes window events to player input state

use super::action::{Control, InputSource};
use super::config::InputConfigManager;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Owns binding configuration and per-player input state
pub struct InputManager {
    config: InputConfigManager,
    players: Vec<PlayerInput>,
}

impl InputManager {
    pub fn new(max_players: usize) -> Self {
        Self {
            config: InputConfigManager::new(max_players),
            players: (0..max_players).map(PlayerInput::new).collect(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        // OS key repeat must not produce new press edges
        if event.repeat {
            return;
        }
        self.route(InputSource::key(key_code), event.state);
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.route(InputSource::mouse(button), state);
    }

    fn route(&mut self, source: InputSource, state: ElementState) {
        for player in &mut self.players {
            let Some(control) = self.config.resolve(player.player_id(), source) else {
                continue;
            };
            match state {
                ElementState::Pressed => player.press(control),
                ElementState::Released => player.release(control),
            }
        }
    }

    /// Roll every player over into a new frame
    pub fn update(&mut self) {
        for player in &mut self.players {
            player.update();
        }
    }

    pub fn player(&self, player_id: usize) -> Option<&PlayerInput> {
        self.players.get(player_id)
    }

    pub fn player_mut(&mut self, player_id: usize) -> Option<&mut PlayerInput> {
        self.players.get_mut(player_id)
    }

    pub fn config(&self) -> &InputConfigManager {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfigManager {
        &mut self.config
    }

    /// Check if any player pressed a control this frame
    pub fn any_player_just_pressed(&self, control: Control) -> bool {
        self.players.iter().any(|p| p.just_pressed(control))
    }

    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::ActionKind;

    #[test]
    fn test_manager_creation() {
        let manager = InputManager::new(2);
        assert_eq!(manager.num_players(), 2);
        assert!(manager.player(1).is_some());
        assert!(manager.player(2).is_none());
    }

    #[test]
    fn test_mouse_routes_to_player_one() {
        let mut manager = InputManager::new(2);
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);

        let p1 = manager.player(0).unwrap();
        assert!(p1.just_pressed(Control::Punch));
        assert_eq!(p1.pressed_actions(), vec![ActionKind::Punch]);
        assert!(!manager.player(1).unwrap().is_pressed(Control::Punch));
    }

    #[test]
    fn test_mouse_release() {
        let mut manager = InputManager::new(1);
        manager.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        manager.update();
        manager.process_mouse_button(MouseButton::Right, ElementState::Released);

        let p1 = manager.player(0).unwrap();
        assert!(!p1.is_pressed(Control::Kick));
        assert!(p1.just_released(Control::Kick));
    }

    #[test]
    fn test_update_clears_edges() {
        let mut manager = InputManager::new(1);
        if let Some(player) = manager.player_mut(0) {
            player.press(Control::Dash);
        }
        assert!(manager.any_player_just_pressed(Control::Dash));

        manager.update();
        assert!(!manager.any_player_just_pressed(Control::Dash));
        assert!(manager.player(0).unwrap().is_pressed(Control::Dash));
    }

    #[test]
    fn test_reset_all() {
        let mut manager = InputManager::new(1);
        if let Some(player) = manager.player_mut(0) {
            player.press(Control::Special);
        }
        manager.reset_all();
        assert!(!manager.player(0).unwrap().is_pressed(Control::Special));
    }
}
