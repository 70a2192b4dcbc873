use super::layers::CollisionLayer;
use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Bodies and colliders the demo arena is built from
pub mod presets {
    use super::*;

    /// Character body: dynamic, upright and always awake. The controller
    /// owns horizontal velocity, so no damping either.
    pub fn character_body(x: Real, y: Real) -> RigidBody {
        RigidBodyBuilder::dynamic()
            .translation(vector![x, y])
            .locked_axes(LockedAxes::ROTATION_LOCKED)
            .linear_damping(0.0)
            .can_sleep(false)
            .build()
    }

    /// Frictionless capsule filling a `width` x `height` box
    pub fn character_collider(width: Real, height: Real) -> Collider {
        let radius = width / 2.0;
        let half_segment = (height / 2.0 - radius).max(0.0);

        ColliderBuilder::capsule_y(half_segment, radius)
            .collision_groups(CollisionLayer::Character.to_interaction_groups())
            .friction(0.0)
            .restitution(0.0)
            .density(1.0)
            .build()
    }

    pub fn platform_body(x: Real, y: Real) -> RigidBody {
        RigidBodyBuilder::fixed().translation(vector![x, y]).build()
    }

    /// Box platform centred on its body
    pub fn platform_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            .collision_groups(CollisionLayer::Platform.to_interaction_groups())
            .friction(0.3)
            .restitution(0.0)
            .build()
    }
}
