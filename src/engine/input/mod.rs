// Input handling system
//
// Turns keyboard/mouse events into the two things the character core reads:
// timestamped press edges (fed into an `InputBuffer`) and a validated
// per-step `TickInput`.
//
// ## Architecture
//
// - `action`: Bufferable action kinds, host controls and default bindings
// - `buffer`: Time-windowed FIFO of presses
// - `frame`: Validated continuous input for one simulation step
// - `player`: Per-player pressed/edge tracking
// - `config`: Binding configuration and remapping
// - `manager`: Routes winit events to players
//
// ## Usage Example
//
// ```rust
// let mut input_manager = InputManager::new(1);
//
// // In your event loop
// input_manager.process_keyboard_event(&key_event);
//
// // Once per rendered frame, forward edges into the character
// if let Some(player) = input_manager.player(0) {
//     for kind in player.pressed_actions() {
//         controller.sample(kind);
//     }
// }
// input_manager.update();
// ```

pub mod action;
pub mod buffer;
pub mod config;
pub mod frame;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{ActionKind, Control, InputSource};
pub use buffer::{InputBuffer, InputSample, ACTION_VALIDITY_WINDOW};
pub use config::{InputConfig, InputConfigManager};
pub use frame::TickInput;
pub use manager::InputManager;
pub use player::PlayerInput;

/// Rejected host input
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Delta time must be positive, got {0}")]
    NonPositiveDelta(f32),

    #[error("Delta time must be finite, got {0}")]
    NonFiniteDelta(f32),

    #[error("Movement axis must be within [-1, 1], got {0}")]
    AxisOutOfRange(f32),
}
