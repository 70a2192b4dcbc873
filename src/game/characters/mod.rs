// Character system
//
// This module contains the decision core of a platformer character:
// - Jump and action state machines with their capability flags
// - Velocity synthesis from a snapshot of both machines
// - The movement controller that runs them per fixed step, and the roster

pub mod action;
pub mod capabilities;
pub mod config;
pub mod controller;
pub mod events;
pub mod state;
pub mod velocity;
pub mod vital;

// Re-export commonly used types
pub use action::{ActionState, ActionStateMachine, DashDirection};
pub use capabilities::Capabilities;
pub use config::{ConfigError, ControllerConfig, BASE_CONFIG};
pub use controller::{CharacterManager, MovementController, TickOutput};
pub use events::{CharacterEvent, CharacterEventKind, CharacterId, EventQueue};
pub use state::{JumpState, JumpStateMachine};
pub use velocity::{synthesize, DirectionState};
pub use vital::VitalCounter;
