// Physics system using rapier2d
//
// The character core never touches physics. The arena integrates the
// controller's velocity and answers "is this body standing on something".

pub mod body;
mod layers;
mod world;

pub use body::{ColliderHandle, RigidBodyHandle};
pub use layers::CollisionLayer;
pub use world::PhysicsWorld;
