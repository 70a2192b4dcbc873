// Movement controller: owns one character's state tree and advances it per fixed step

use glam::Vec2;

use crate::core::math::{facing_sign, speed_ratio};
use crate::engine::input::{ActionKind, InputBuffer, TickInput};

use super::action::{ActionContext, ActionState, ActionStateMachine, DashDirection};
use super::capabilities::Capabilities;
use super::config::{ConfigError, ControllerConfig};
use super::events::{CharacterEvent, CharacterEventKind, CharacterId, EventQueue};
use super::state::{JumpContext, JumpState, JumpStateMachine};
use super::velocity::{synthesize, DashPhase, DirectionState, MotionSnapshot};
use super::vital::VitalCounter;

/// What the host reads back after a step
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    pub velocity: Vec2,
    pub facing_flip: bool,
    /// `|velocity.x| / max_speed`, for locomotion blending
    pub speed_ratio: f32,
    pub grounded: bool,
    pub jump_state: JumpState,
    pub action: ActionState,
    pub direction: DirectionState,
    /// Clip to play: a running dash, then the resolved action, then the jump state
    pub animation: &'static str,
    /// Events announced this step, in no particular order
    pub events: Vec<CharacterEvent>,
}

/// The decision core of one character
///
/// Presses are buffered with [`MovementController::sample`] at any rate and
/// committed by [`MovementController::step`] once per fixed simulation step.
#[derive(Debug)]
pub struct MovementController {
    id: CharacterId,
    config: ControllerConfig,

    buffer: InputBuffer,
    jump: JumpStateMachine,
    actions: ActionStateMachine,
    capabilities: Capabilities,
    vital: VitalCounter,
    events: EventQueue,

    velocity: Vec2,
    max_speed: f32,
    facing_flip: bool,
    direction: DirectionState,
    dash: Option<DashPhase>,
    move_intent: f32,
    grounded: bool,

    /// Simulation time, advanced by each step
    clock: f64,
    control_enabled: bool,
}

impl MovementController {
    /// Create a controller, rejecting unusable tuning
    pub fn new(id: CharacterId, config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            id,
            buffer: InputBuffer::with_window(config.action_validity_window),
            jump: JumpStateMachine::new(),
            actions: ActionStateMachine::new(),
            capabilities: Capabilities::default(),
            vital: VitalCounter::new(config.max_vital),
            events: EventQueue::new(id),
            velocity: Vec2::ZERO,
            max_speed: config.max_speed,
            facing_flip: false,
            direction: DirectionState::Forward,
            dash: None,
            move_intent: 0.0,
            grounded: true,
            clock: 0.0,
            control_enabled: true,
            config,
        })
    }

    /// Buffer a press edge at the current simulation time
    pub fn sample(&mut self, kind: ActionKind) {
        if !self.control_enabled {
            log::trace!("Character {} ignored {:?}, control disabled", self.id, kind);
            return;
        }
        self.buffer.record(kind, self.clock);
    }

    /// Advance one fixed step: actions, then jump, then velocity, then direction
    pub fn step(&mut self, input: &TickInput) -> TickOutput {
        let dt = input.delta_time();
        self.clock += f64::from(dt);
        self.grounded = input.grounded();
        self.move_intent = if self.control_enabled {
            input.movement_axis()
        } else {
            0.0
        };

        // Action resolution
        let consumed = if self.control_enabled {
            self.buffer.consume_one(self.clock)
        } else {
            None
        };
        let resolution = self.actions.resolve(
            consumed,
            &ActionContext {
                jump_state: self.jump.state(),
                direction: self.direction,
                grounded: self.grounded,
                dt,
                dash_cooldown: self.config.dash_cooldown,
            },
            &mut self.capabilities,
            &mut self.events,
        );
        if let Some(entry) = resolution.jump_entry {
            self.jump.enter(entry);
        }
        if let Some(direction) = resolution.dash {
            self.start_dash(direction);
        }

        // Jump resolution
        let jump_step = self.jump.step(
            &JumpContext {
                grounded: self.grounded,
                jump_held: input.jump_held(),
                dt,
                full_jump_threshold: self.config.full_jump_threshold,
            },
            &mut self.capabilities,
            &mut self.events,
        );
        self.actions
            .acknowledge_jump(jump_step.launch.is_some(), &mut self.capabilities);

        // Velocity synthesis
        let motion = synthesize(
            &MotionSnapshot {
                jump_state: self.jump.state(),
                launch: jump_step.launch,
                jump_cut: jump_step.jump_cut,
                dash: self.dash,
                move_intent: self.move_intent,
                can_move: self.capabilities.can_move,
                velocity: self.velocity,
                facing_flip: self.facing_flip,
                dt,
            },
            &self.config,
        );
        self.velocity = motion.velocity;
        self.facing_flip = motion.facing_flip;
        self.max_speed = motion.max_speed;
        self.capabilities.can_move = motion.can_move;
        self.dash = motion.dash;
        if motion.dash_finished {
            self.finish_dash();
        }

        // Direction recompute
        self.direction = DirectionState::derive(self.facing_flip, self.velocity.x);

        TickOutput {
            velocity: self.velocity,
            facing_flip: self.facing_flip,
            speed_ratio: speed_ratio(self.velocity.x, self.max_speed),
            grounded: self.grounded,
            jump_state: self.jump.state(),
            action: resolution.state,
            direction: self.direction,
            animation: self.animation(resolution.state),
            events: self.events.drain(),
        }
    }

    fn animation(&self, action: ActionState) -> &'static str {
        match self.dash {
            Some(phase) => phase.direction.action_state().animation_name(),
            None if action != ActionState::None => action.animation_name(),
            None => self.jump.state().animation_name(),
        }
    }

    fn start_dash(&mut self, direction: DashDirection) {
        // Both labels travel along the facing
        let heading = facing_sign(self.facing_flip);
        log::debug!(
            "Character {} dash {:?} heading {}",
            self.id,
            direction,
            heading
        );
        self.dash = Some(DashPhase {
            direction,
            heading,
            remaining: self.config.dash_cooldown,
        });
        self.capabilities.can_move = false;
        self.capabilities.set_attacks(false);
    }

    fn finish_dash(&mut self) {
        log::debug!("Character {} dash finished", self.id);
        self.capabilities.set_attacks(true);
        if self.grounded {
            self.capabilities.can_dash = true;
        }
        self.events.announce(CharacterEventKind::DashEnded);
    }

    /// Overwrite vertical velocity with what physics integrated since the last step
    pub fn sync_vertical_velocity(&mut self, velocity_y: f32) {
        self.velocity.y = velocity_y;
    }

    /// Disabling control zeroes move intent, drops a pending dash and stops
    /// presses from being buffered or consumed
    pub fn set_control_enabled(&mut self, enabled: bool) {
        if self.control_enabled != enabled {
            log::debug!("Character {} control enabled: {}", self.id, enabled);
        }
        self.control_enabled = enabled;
        if !enabled {
            self.move_intent = 0.0;
            self.actions.cancel_pending_dash();
        }
    }

    /// Back to a fresh grounded start; the simulation clock keeps running
    pub fn respawn(&mut self) {
        log::info!("Character {} respawned", self.id);
        self.buffer.clear();
        self.jump.reset();
        self.actions.reset();
        self.capabilities = Capabilities::default();
        self.vital.reset();
        self.events.clear();
        self.velocity = Vec2::ZERO;
        self.max_speed = self.config.max_speed;
        self.facing_flip = false;
        self.direction = DirectionState::Forward;
        self.dash = None;
        self.move_intent = 0.0;
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn facing_flip(&self) -> bool {
        self.facing_flip
    }

    pub fn direction(&self) -> DirectionState {
        self.direction
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump.state()
    }

    pub fn action_state(&self) -> ActionState {
        self.actions.state()
    }

    pub fn dash_cooldown_remaining(&self) -> f32 {
        self.actions.dash_cooldown_remaining()
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_some()
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn control_enabled(&self) -> bool {
        self.control_enabled
    }

    pub fn buffered_presses(&self) -> usize {
        self.buffer.len()
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn vital(&self) -> &VitalCounter {
        &self.vital
    }

    pub fn vital_mut(&mut self) -> &mut VitalCounter {
        &mut self.vital
    }
}

/// Manages all characters in the game
#[derive(Debug, Default)]
pub struct CharacterManager {
    characters: Vec<MovementController>,
    next_id: CharacterId,
}

impl CharacterManager {
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
            next_id: 0,
        }
    }

    /// Spawn a new character with the given tuning
    pub fn spawn(&mut self, config: ControllerConfig) -> Result<CharacterId, ConfigError> {
        let id = self.next_id;
        let controller = MovementController::new(id, config)?;
        self.next_id += 1;
        self.characters.push(controller);

        log::info!("Spawned character {}", id);
        Ok(id)
    }

    pub fn get(&self, id: CharacterId) -> Option<&MovementController> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut MovementController> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    /// Buffer a press for one character; false if the id is unknown
    pub fn sample(&mut self, id: CharacterId, kind: ActionKind) -> bool {
        match self.get_mut(id) {
            Some(character) => {
                character.sample(kind);
                true
            }
            None => false,
        }
    }

    /// Step one character
    pub fn step(&mut self, id: CharacterId, input: &TickInput) -> Option<TickOutput> {
        self.get_mut(id).map(|character| character.step(input))
    }

    pub fn all(&self) -> &[MovementController] {
        &self.characters
    }

    pub fn all_mut(&mut self) -> &mut [MovementController] {
        &mut self.characters
    }

    /// Remove a character by ID
    pub fn remove(&mut self, id: CharacterId) -> Option<MovementController> {
        let pos = self.characters.iter().position(|c| c.id == id)?;
        log::info!("Removed character {}", id);
        Some(self.characters.remove(pos))
    }

    pub fn count(&self) -> usize {
        self.characters.len()
    }
}
