// Velocity synthesis: reconciles jump, dash and movement into one velocity

use glam::Vec2;

use super::action::DashDirection;
use super::config::ControllerConfig;
use super::state::{JumpLaunch, JumpState};

/// The dash timer runs this many times faster than real time
pub const DASH_TIMER_RATE: f32 = 8.0;

/// Whether the character moves the way it faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DirectionState {
    #[default]
    Forward,
    Backward,
}

impl DirectionState {
    /// Backward when horizontal velocity opposes the sprite facing
    pub fn derive(facing_flip: bool, velocity_x: f32) -> Self {
        if (facing_flip && velocity_x > 0.0) || (!facing_flip && velocity_x < 0.0) {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

/// A running dash
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPhase {
    pub direction: DashDirection,
    /// Facing sign when the dash committed (+1 right, -1 left)
    /// World-space sign of the dash (+1 right, -1 left)
    pub heading: f32,
    /// Dash timer, counted down at `DASH_TIMER_RATE`
    pub remaining: f32,
}

/// Everything the synthesizer reads for one step
#[derive(Debug, Clone, Copy)]
pub struct MotionSnapshot {
    pub jump_state: JumpState,
    pub launch: Option<JumpLaunch>,
    pub jump_cut: bool,
    pub dash: Option<DashPhase>,
    pub move_intent: f32,
    pub can_move: bool,
    pub velocity: Vec2,
    pub facing_flip: bool,
    pub dt: f32,
}

/// Result of one synthesis step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub velocity: Vec2,
    pub facing_flip: bool,
    pub max_speed: f32,
    pub can_move: bool,
    /// The dash after this step, `None` once its timer ran out
    pub dash: Option<DashPhase>,
    /// Set on the step a dash ended
    pub dash_finished: bool,
}

/// Compute the next velocity from a snapshot of every contributing state
pub fn synthesize(snapshot: &MotionSnapshot, config: &ControllerConfig) -> Motion {
    let mut velocity = snapshot.velocity;

    // Vertical: a launch overrides everything else this step
    match snapshot.launch {
        Some(JumpLaunch::Ground) => velocity.y = config.ground_launch(),
        Some(JumpLaunch::Air) => velocity.y = config.air_launch(),
        None if snapshot.jump_cut && velocity.y > 0.0 => {
            velocity.y *= config.jump_deceleration;
        }
        None => {}
    }

    // Horizontal: a dash locks out move intent until its timer runs out
    let mut max_speed = config.max_speed;
    let mut can_move = snapshot.can_move;
    let mut dash = snapshot.dash;
    let mut dash_finished = false;

    if let Some(phase) = dash.as_mut() {
        velocity.x = phase.heading * config.dash_speed;
        max_speed = config.dash_speed;
        can_move = false;

        phase.remaining -= snapshot.dt * DASH_TIMER_RATE;
        if phase.remaining <= 0.0 {
            dash = None;
            dash_finished = true;
            max_speed = config.max_speed;
            can_move = true;
        }
    } else {
        let intent = if can_move { snapshot.move_intent } else { 0.0 };
        velocity.x = intent * max_speed;
    }

    // Facing only turns on the ground or on a launch step, never mid-drift
    let mut facing_flip = snapshot.facing_flip;
    let turning_allowed = !snapshot.jump_state.is_drifting() || snapshot.launch.is_some();
    if turning_allowed && snapshot.dash.is_none() && snapshot.can_move {
        if snapshot.move_intent > config.move_deadzone {
            facing_flip = false;
        } else if snapshot.move_intent < -config.move_deadzone {
            facing_flip = true;
        }
    }

    Motion {
        velocity,
        facing_flip,
        max_speed,
        can_move,
        dash,
        dash_finished,
    }
}
