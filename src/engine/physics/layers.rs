use rapier2d::prelude::*;

/// Collision layers of the demo arena
///
/// Characters stand on platforms but pass through each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionLayer {
    /// Controlled characters
    Character = 0b0000_0001,

    /// Static platforms and walls
    Platform = 0b0000_0010,
}

impl CollisionLayer {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);
        let filter = match self {
            CollisionLayer::Character => {
                Group::from_bits_truncate(CollisionLayer::Platform as u32)
            }
            CollisionLayer::Platform => Group::from_bits_truncate(
                CollisionLayer::Character as u32 | CollisionLayer::Platform as u32,
            ),
        };

        InteractionGroups::new(memberships, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_characters_skip_each_other() {
        let groups = CollisionLayer::Character.to_interaction_groups();
        assert!(!groups.filter.contains(groups.memberships));
    }

    #[test]
    fn test_characters_meet_platforms() {
        let character = CollisionLayer::Character.to_interaction_groups();
        let platform = CollisionLayer::Platform.to_interaction_groups();
        assert!(character.test(platform));
    }
}
