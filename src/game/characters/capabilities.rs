// Capability flags gating what a character may start this step

use crate::engine::input::ActionKind;

/// Flags written by the state machines and read when resolving requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub can_move: bool,
    pub can_jump: bool,
    pub can_dash: bool,
    pub can_punch: bool,
    pub can_kick: bool,
    pub can_special: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            can_move: true,
            can_jump: true,
            can_dash: true,
            can_punch: true,
            can_kick: true,
            can_special: true,
        }
    }
}

impl Capabilities {
    /// Whether a request of this kind may resolve right now
    pub fn allows(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Jump => self.can_jump,
            ActionKind::Punch => self.can_punch,
            ActionKind::Kick => self.can_kick,
            ActionKind::Special => self.can_special,
            ActionKind::Dash => self.can_dash,
        }
    }

    /// Toggle punch, kick and special together
    pub fn set_attacks(&mut self, enabled: bool) {
        self.can_punch = enabled;
        self.can_kick = enabled;
        self.can_special = enabled;
    }
}
