// Fire-once character events for audio, animation and gameplay listeners

use super::action::DashDirection;

/// Unique identifier for a character
pub type CharacterId = u32;

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterEventKind {
    GroundJumped,
    AirJumped,
    /// Ground jump released before the full-jump threshold
    ShortJumped,
    /// Ground jump held past the full-jump threshold
    FullJumped,
    Landed,
    Punched,
    Kicked,
    SpecialUsed,
    Dashed(DashDirection),
    DashEnded,
}

impl CharacterEventKind {
    /// Sound clip an audio player should fire, if any
    pub fn audio_cue(&self) -> Option<&'static str> {
        match self {
            Self::GroundJumped | Self::ShortJumped | Self::FullJumped => Some("jump_ground"),
            Self::AirJumped => Some("jump_air"),
            Self::Punched => Some("punch"),
            Self::Kicked => Some("kick"),
            Self::SpecialUsed => Some("special"),
            Self::Dashed(_) => Some("dash"),
            Self::Landed | Self::DashEnded => None,
        }
    }

    /// One-shot animation trigger name, if any
    pub fn animation_trigger(&self) -> Option<&'static str> {
        match self {
            Self::GroundJumped => Some("jump"),
            Self::AirJumped => Some("air_jump"),
            Self::Landed => Some("land"),
            Self::Punched => Some("punch"),
            Self::Kicked => Some("kick"),
            Self::SpecialUsed => Some("special"),
            Self::Dashed(DashDirection::Forward) => Some("dash_forward"),
            Self::Dashed(DashDirection::Back) => Some("dash_back"),
            Self::ShortJumped | Self::FullJumped | Self::DashEnded => None,
        }
    }
}

/// An event tagged with the character that emitted it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterEvent {
    pub character: CharacterId,
    pub kind: CharacterEventKind,
}

/// Events announced during the current step, drained by the host
///
/// Consumers must not rely on the order of events within one step.
#[derive(Debug)]
pub struct EventQueue {
    character: CharacterId,
    pending: Vec<CharacterEvent>,
}

impl EventQueue {
    pub fn new(character: CharacterId) -> Self {
        Self {
            character,
            pending: Vec::new(),
        }
    }

    pub fn announce(&mut self, kind: CharacterEventKind) {
        log::debug!("Character {} announced {:?}", self.character, kind);
        self.pending.push(CharacterEvent {
            character: self.character,
            kind,
        });
    }

    pub fn drain(&mut self) -> Vec<CharacterEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn contains(&self, kind: CharacterEventKind) -> bool {
        self.pending.iter().any(|e| e.kind == kind)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announce_tags_character() {
        let mut queue = EventQueue::new(7);
        queue.announce(CharacterEventKind::Landed);
        assert!(queue.contains(CharacterEventKind::Landed));

        let events = queue.drain();
        assert_eq!(
            events,
            vec![CharacterEvent {
                character: 7,
                kind: CharacterEventKind::Landed
            }]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_jump_variants_share_ground_clip() {
        assert_eq!(CharacterEventKind::GroundJumped.audio_cue(), Some("jump_ground"));
        assert_eq!(CharacterEventKind::ShortJumped.audio_cue(), Some("jump_ground"));
        assert_eq!(CharacterEventKind::FullJumped.audio_cue(), Some("jump_ground"));
        assert_eq!(CharacterEventKind::AirJumped.audio_cue(), Some("jump_air"));
    }

    #[test]
    fn test_animation_triggers() {
        assert_eq!(CharacterEventKind::Landed.animation_trigger(), Some("land"));
        assert_eq!(
            CharacterEventKind::Dashed(DashDirection::Back).animation_trigger(),
            Some("dash_back")
        );
        assert_eq!(CharacterEventKind::DashEnded.animation_trigger(), None);
    }
}
