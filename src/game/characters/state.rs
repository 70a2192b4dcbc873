// Jump state machine

use super::capabilities::Capabilities;
use super::events::{CharacterEventKind, EventQueue};

/// Vertical phase of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JumpState {
    /// Resting on a supporting surface
    #[default]
    Grounded,
    /// Ground jump requested, launches on the next jump step
    GroundJump,
    /// Airborne with the air jump still available
    Air,
    /// Air jump requested, launches on the next jump step
    AirJump,
    /// Airborne after the air jump was spent
    Freefall,
    /// Touched down this step, back to `Grounded` on the next
    Landed,
}

impl JumpState {
    /// State a jump request enters from here, or `None` if it is discarded
    pub fn jump_entry(self, can_jump: bool) -> Option<JumpState> {
        if !can_jump {
            return None;
        }
        match self {
            Self::Grounded => Some(Self::GroundJump),
            Self::Air => Some(Self::AirJump),
            _ => None,
        }
    }

    /// Airborne without a launch pending
    pub fn is_drifting(&self) -> bool {
        matches!(self, Self::Air | Self::Freefall)
    }

    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Grounded => "idle",
            Self::GroundJump => "jump",
            Self::Air => "air",
            Self::AirJump => "air_jump",
            Self::Freefall => "fall",
            Self::Landed => "land",
        }
    }
}

/// Which launch speed a jump step asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpLaunch {
    Ground,
    Air,
}

/// Per-step inputs of the jump machine
#[derive(Debug, Clone, Copy)]
pub struct JumpContext {
    pub grounded: bool,
    pub jump_held: Option<bool>,
    pub dt: f32,
    pub full_jump_threshold: f32,
}

/// What the jump machine did this step
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JumpStep {
    /// Set on the step a jump launches (the `is_jumping` step)
    pub launch: Option<JumpLaunch>,
    /// Set on the step a ground jump was classified as a short hop
    pub jump_cut: bool,
}

/// Tracks how long jump stays held after a ground launch
#[derive(Debug, Clone, Copy)]
struct HopTracker {
    held_for: f32,
    threshold: f32,
}

/// State machine that handles jump transitions and emits jump/land events
#[derive(Debug)]
pub struct JumpStateMachine {
    current_state: JumpState,
    hop: Option<HopTracker>,
}

impl Default for JumpStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl JumpStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: JumpState::Grounded,
            hop: None,
        }
    }

    pub fn state(&self) -> JumpState {
        self.current_state
    }

    fn transition(&mut self, new_state: JumpState) {
        if self.current_state != new_state {
            log::debug!("Jump state {:?} -> {:?}", self.current_state, new_state);
            self.current_state = new_state;
        }
    }

    /// Enter a launch state produced by `JumpState::jump_entry`
    pub fn enter(&mut self, entry: JumpState) {
        if matches!(entry, JumpState::GroundJump | JumpState::AirJump) {
            self.transition(entry);
        }
    }

    /// Advance one fixed step
    pub fn step(
        &mut self,
        ctx: &JumpContext,
        caps: &mut Capabilities,
        events: &mut EventQueue,
    ) -> JumpStep {
        let mut out = JumpStep::default();

        match self.current_state {
            JumpState::Grounded => {
                if !ctx.grounded {
                    self.transition(JumpState::Air);
                }
            }
            JumpState::GroundJump => {
                events.announce(CharacterEventKind::GroundJumped);
                out.launch = Some(JumpLaunch::Ground);
                self.hop = ctx.jump_held.map(|_| HopTracker {
                    held_for: 0.0,
                    threshold: ctx.full_jump_threshold,
                });
                self.transition(JumpState::Air);
            }
            JumpState::Air => {
                if ctx.grounded {
                    self.settle_hop(events);
                    events.announce(CharacterEventKind::Landed);
                    self.transition(JumpState::Landed);
                } else {
                    out.jump_cut = self.track_hop(ctx, events);
                }
            }
            JumpState::AirJump => {
                self.settle_hop(events);
                events.announce(CharacterEventKind::AirJumped);
                out.launch = Some(JumpLaunch::Air);
                self.transition(JumpState::Freefall);
            }
            JumpState::Freefall => {
                caps.can_jump = false;
                if ctx.grounded {
                    events.announce(CharacterEventKind::Landed);
                    self.transition(JumpState::Landed);
                }
            }
            JumpState::Landed => {
                caps.can_jump = true;
                caps.can_dash = true;
                self.transition(JumpState::Grounded);
            }
        }

        out
    }

    /// Classify an in-flight ground jump; returns true on a short hop
    fn track_hop(&mut self, ctx: &JumpContext, events: &mut EventQueue) -> bool {
        let Some(hop) = self.hop.as_mut() else {
            return false;
        };

        match ctx.jump_held {
            Some(false) => {
                self.hop = None;
                events.announce(CharacterEventKind::ShortJumped);
                true
            }
            Some(true) => {
                hop.held_for += ctx.dt;
                if hop.held_for >= hop.threshold {
                    self.hop = None;
                    events.announce(CharacterEventKind::FullJumped);
                }
                false
            }
            // Host stopped reporting hold state
            None => {
                self.hop = None;
                false
            }
        }
    }

    /// Leaving `Air` with the jump still unclassified counts as a full jump
    fn settle_hop(&mut self, events: &mut EventQueue) {
        if self.hop.take().is_some() {
            events.announce(CharacterEventKind::FullJumped);
        }
    }

    /// Back to a grounded start, dropping any in-flight classification
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn ctx(grounded: bool) -> JumpContext {
        JumpContext {
            grounded,
            jump_held: None,
            dt: DT,
            full_jump_threshold: 0.1,
        }
    }

    fn held(grounded: bool, held: bool) -> JumpContext {
        JumpContext {
            jump_held: Some(held),
            ..ctx(grounded)
        }
    }

    fn setup() -> (JumpStateMachine, Capabilities, EventQueue) {
        (JumpStateMachine::new(), Capabilities::default(), EventQueue::new(0))
    }

    fn kinds(events: &mut EventQueue) -> Vec<CharacterEventKind> {
        events.drain().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_initial_state() {
        let sm = JumpStateMachine::new();
        assert_eq!(sm.state(), JumpState::Grounded);
    }

    #[test]
    fn test_jump_entry_table() {
        assert_eq!(JumpState::Grounded.jump_entry(true), Some(JumpState::GroundJump));
        assert_eq!(JumpState::Air.jump_entry(true), Some(JumpState::AirJump));
        assert_eq!(JumpState::Freefall.jump_entry(true), None);
        assert_eq!(JumpState::Landed.jump_entry(true), None);
        assert_eq!(JumpState::GroundJump.jump_entry(true), None);
        assert_eq!(JumpState::Air.jump_entry(false), None);
    }

    #[test]
    fn test_walk_off_ledge() {
        let (mut sm, mut caps, mut events) = setup();
        sm.step(&ctx(false), &mut caps, &mut events);
        assert_eq!(sm.state(), JumpState::Air);
        assert!(events.is_empty());
    }

    #[test]
    fn test_ground_jump_launches_once() {
        let (mut sm, mut caps, mut events) = setup();
        sm.enter(JumpState::GroundJump);

        let step = sm.step(&ctx(true), &mut caps, &mut events);
        assert_eq!(step.launch, Some(JumpLaunch::Ground));
        assert_eq!(sm.state(), JumpState::Air);
        assert_eq!(kinds(&mut events), vec![CharacterEventKind::GroundJumped]);

        let step = sm.step(&ctx(false), &mut caps, &mut events);
        assert_eq!(step.launch, None);
        assert!(events.is_empty());
    }

    #[test]
    fn test_air_jump_then_freefall_blocks_jump() {
        let (mut sm, mut caps, mut events) = setup();
        sm.step(&ctx(false), &mut caps, &mut events);
        sm.enter(JumpState::AirJump);

        let step = sm.step(&ctx(false), &mut caps, &mut events);
        assert_eq!(step.launch, Some(JumpLaunch::Air));
        assert_eq!(sm.state(), JumpState::Freefall);
        assert_eq!(kinds(&mut events), vec![CharacterEventKind::AirJumped]);

        sm.step(&ctx(false), &mut caps, &mut events);
        assert!(!caps.can_jump);
        assert_eq!(sm.state().jump_entry(caps.can_jump), None);
    }

    #[test]
    fn test_landing_sequence_restores_capabilities() {
        let (mut sm, mut caps, mut events) = setup();
        sm.step(&ctx(false), &mut caps, &mut events);
        sm.enter(JumpState::AirJump);
        sm.step(&ctx(false), &mut caps, &mut events);
        sm.step(&ctx(false), &mut caps, &mut events);
        caps.can_dash = false;
        events.clear();

        sm.step(&ctx(true), &mut caps, &mut events);
        assert_eq!(sm.state(), JumpState::Landed);
        assert_eq!(kinds(&mut events), vec![CharacterEventKind::Landed]);
        assert!(!caps.can_jump);

        sm.step(&ctx(true), &mut caps, &mut events);
        assert_eq!(sm.state(), JumpState::Grounded);
        assert!(caps.can_jump);
        assert!(caps.can_dash);
        assert!(events.is_empty());
    }

    #[test]
    fn test_one_landing_per_touchdown() {
        let (mut sm, mut caps, mut events) = setup();
        let grounded_pattern = [
            false, false, true, true, true, false, true, true, false, false, false, true,
        ];
        let mut landings = 0;
        let mut touchdowns = 0;

        for grounded in grounded_pattern {
            sm.step(&ctx(grounded), &mut caps, &mut events);
            landings += kinds(&mut events)
                .into_iter()
                .filter(|k| *k == CharacterEventKind::Landed)
                .count();
            if sm.state() == JumpState::Landed {
                touchdowns += 1;
            }
        }

        assert_eq!(landings, touchdowns);
        assert_eq!(landings, 3);
    }

    #[test]
    fn test_short_hop_on_early_release() {
        let (mut sm, mut caps, mut events) = setup();
        sm.enter(JumpState::GroundJump);
        sm.step(&held(true, true), &mut caps, &mut events);
        events.clear();

        let step = sm.step(&held(false, false), &mut caps, &mut events);
        assert!(step.jump_cut);
        assert_eq!(kinds(&mut events), vec![CharacterEventKind::ShortJumped]);

        let step = sm.step(&held(false, false), &mut caps, &mut events);
        assert!(!step.jump_cut);
        assert!(events.is_empty());
    }

    #[test]
    fn test_full_jump_when_held_past_threshold() {
        let (mut sm, mut caps, mut events) = setup();
        sm.enter(JumpState::GroundJump);
        sm.step(&held(true, true), &mut caps, &mut events);
        events.clear();

        let mut full = 0;
        for _ in 0..12 {
            let step = sm.step(&held(false, true), &mut caps, &mut events);
            assert!(!step.jump_cut);
            full += kinds(&mut events)
                .into_iter()
                .filter(|k| *k == CharacterEventKind::FullJumped)
                .count();
        }
        assert_eq!(full, 1);
    }

    #[test]
    fn test_landing_settles_unclassified_jump() {
        let (mut sm, mut caps, mut events) = setup();
        sm.enter(JumpState::GroundJump);
        sm.step(&held(true, true), &mut caps, &mut events);
        events.clear();

        sm.step(&held(true, true), &mut caps, &mut events);
        let landed = kinds(&mut events);
        assert!(landed.contains(&CharacterEventKind::FullJumped));
        assert!(landed.contains(&CharacterEventKind::Landed));
    }

    #[test]
    fn test_no_classification_without_hold_reports() {
        let (mut sm, mut caps, mut events) = setup();
        sm.enter(JumpState::GroundJump);
        sm.step(&ctx(true), &mut caps, &mut events);
        events.clear();

        for _ in 0..20 {
            let step = sm.step(&ctx(false), &mut caps, &mut events);
            assert!(!step.jump_cut);
        }
        assert!(events.is_empty());
    }

    #[test]
    fn test_enter_ignores_non_launch_states() {
        let mut sm = JumpStateMachine::new();
        sm.enter(JumpState::Freefall);
        assert_eq!(sm.state(), JumpState::Grounded);
    }

    #[test]
    fn test_reset() {
        let (mut sm, mut caps, mut events) = setup();
        sm.step(&ctx(false), &mut caps, &mut events);
        sm.reset();
        assert_eq!(sm.state(), JumpState::Grounded);
        assert_eq!(sm.state().jump_entry(true), Some(JumpState::GroundJump));
    }
}
