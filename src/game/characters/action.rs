// Action/combat state machine: punch, kick, special, dash and jump requests

use super::capabilities::Capabilities;
use super::events::{CharacterEventKind, EventQueue};
use super::state::JumpState;
use super::velocity::DirectionState;
use crate::engine::input::ActionKind;

/// The action a character is committing to this step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionState {
    #[default]
    None,
    Punch,
    Kick,
    Special,
    /// Dash requested, waiting for the cooldown to clear
    Dash,
    ForwardDash,
    BackDash,
    /// Jump requested, waiting for the jump machine to launch
    Jump,
}

impl ActionState {
    pub fn is_dash(&self) -> bool {
        matches!(self, Self::ForwardDash | Self::BackDash)
    }

    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Punch => "punch",
            Self::Kick => "kick",
            Self::Special => "special",
            Self::Dash => "dash_windup",
            Self::ForwardDash => "dash_forward",
            Self::BackDash => "dash_back",
            Self::Jump => "jump",
        }
    }
}

/// Dash label relative to the way the character moves
///
/// Only picks the animation and the announced event; the dash itself always
/// runs along the facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashDirection {
    Forward,
    Back,
}

impl DashDirection {
    pub fn from_direction(direction: DirectionState) -> Self {
        match direction {
            DirectionState::Forward => Self::Forward,
            DirectionState::Backward => Self::Back,
        }
    }

    pub fn action_state(self) -> ActionState {
        match self {
            Self::Forward => ActionState::ForwardDash,
            Self::Back => ActionState::BackDash,
        }
    }
}

/// What the rest of the step needs to know about action resolution
#[derive(Debug, Clone, Copy)]
pub struct ActionContext {
    pub jump_state: JumpState,
    pub direction: DirectionState,
    pub grounded: bool,
    pub dt: f32,
    pub dash_cooldown: f32,
}

/// Outcome of one action step
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionResolution {
    /// The state resolved this step (`ForwardDash`/`BackDash` on a dash step)
    pub state: ActionState,
    /// Launch state for the jump machine to enter
    pub jump_entry: Option<JumpState>,
    /// Set on the step a dash commits
    pub dash: Option<DashDirection>,
}

#[derive(Debug, Default)]
pub struct ActionStateMachine {
    state: ActionState,
    dash_cooldown_remaining: f32,
}

impl ActionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standing state between steps (`None`, or a pending `Dash`/`Jump`)
    pub fn state(&self) -> ActionState {
        self.state
    }

    pub fn dash_cooldown_remaining(&self) -> f32 {
        self.dash_cooldown_remaining
    }

    /// Map a consumed press to the state it requests, or `None` if gated off
    fn request(kind: ActionKind, caps: &Capabilities) -> ActionState {
        if !caps.allows(kind) {
            log::trace!("{:?} request gated off", kind);
            return ActionState::None;
        }
        match kind {
            ActionKind::Jump => ActionState::Jump,
            ActionKind::Punch => ActionState::Punch,
            ActionKind::Kick => ActionState::Kick,
            ActionKind::Special => ActionState::Special,
            ActionKind::Dash => ActionState::Dash,
        }
    }

    /// Resolve at most one consumed press against the current state
    pub fn resolve(
        &mut self,
        consumed: Option<ActionKind>,
        ctx: &ActionContext,
        caps: &mut Capabilities,
        events: &mut EventQueue,
    ) -> ActionResolution {
        self.dash_cooldown_remaining = (self.dash_cooldown_remaining - ctx.dt).max(0.0);

        match consumed {
            Some(kind) => {
                if self.state == ActionState::Dash {
                    log::trace!("Pending dash replaced by {:?}", kind);
                }
                self.state = Self::request(kind, caps);
            }
            // One-step actions fall back to idle; a pending dash keeps waiting
            None if self.state != ActionState::Dash => self.state = ActionState::None,
            None => {}
        }

        let mut resolution = ActionResolution {
            state: self.state,
            ..ActionResolution::default()
        };

        match self.state {
            ActionState::Dash => {
                if self.dash_cooldown_remaining > 0.0 {
                    log::trace!(
                        "Dash held, {:.3}s of cooldown left",
                        self.dash_cooldown_remaining
                    );
                } else {
                    let direction = DashDirection::from_direction(ctx.direction);
                    self.dash_cooldown_remaining = ctx.dash_cooldown;
                    // Air dashes only refresh on landing
                    caps.can_dash = ctx.grounded;
                    events.announce(CharacterEventKind::Dashed(direction));

                    resolution.state = direction.action_state();
                    resolution.dash = Some(direction);
                    self.state = ActionState::None;
                }
            }
            ActionState::Jump => match ctx.jump_state.jump_entry(caps.can_jump) {
                Some(entry) => resolution.jump_entry = Some(entry),
                None => {
                    log::trace!("Jump discarded in {:?}", ctx.jump_state);
                    self.state = ActionState::None;
                    resolution.state = ActionState::None;
                }
            },
            ActionState::Punch => events.announce(CharacterEventKind::Punched),
            ActionState::Kick => events.announce(CharacterEventKind::Kicked),
            ActionState::Special => events.announce(CharacterEventKind::SpecialUsed),
            ActionState::None | ActionState::ForwardDash | ActionState::BackDash => {}
        }

        resolution
    }

    /// Clear a pending jump once the jump machine launched it
    pub fn acknowledge_jump(&mut self, is_jumping: bool, caps: &mut Capabilities) {
        if is_jumping && self.state == ActionState::Jump {
            self.state = ActionState::None;
            caps.can_dash = true;
        }
    }

    /// Drop a dash still waiting on the cooldown
    pub fn cancel_pending_dash(&mut self) {
        if self.state == ActionState::Dash {
            log::trace!("Pending dash cancelled");
            self.state = ActionState::None;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
