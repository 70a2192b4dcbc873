use glam::Vec2;
use rapier2d::prelude::*;

/// How far below the feet a surface still counts as support
const GROUND_RAY_DISTANCE: Real = 0.1;

/// Rapier state for the demo arena
///
/// Gravity and contacts are integrated here; the controller only hands in a
/// velocity each step and reads back whether the body is supported.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    /// Refreshed by every step; raycasts only see bodies stepped at least once
    queries: QueryPipeline,
    bodies: RigidBodySet,
    colliders: ColliderSet,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::with_gravity(vector![0.0, -9.81])
    }

    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let params = IntegrationParameters {
            dt: 1.0 / 60.0,
            ..IntegrationParameters::default()
        };

        Self {
            gravity,
            params,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            queries: QueryPipeline::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
        }
    }

    /// Integrate one fixed step
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            Some(&mut self.queries),
            &(),
            &(),
        );
    }

    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.bodies.insert(body)
    }

    pub fn add_collider(&mut self, collider: Collider, parent: RigidBodyHandle) -> ColliderHandle {
        self.colliders
            .insert_with_parent(collider, parent, &mut self.bodies)
    }

    /// Remove a body together with its colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    pub fn translation(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.get_rigid_body(handle).map(|body| {
            let pos = body.translation();
            Vec2::new(pos.x, pos.y)
        })
    }

    pub fn velocity(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.get_rigid_body(handle).map(|body| {
            let vel = body.linvel();
            Vec2::new(vel.x, vel.y)
        })
    }

    /// Hand a controller velocity to the body for the next step
    pub fn set_velocity(&mut self, handle: RigidBodyHandle, velocity: Vec2) {
        if let Some(body) = self.get_rigid_body_mut(handle) {
            body.set_linvel(vector![velocity.x, velocity.y], true);
        }
    }

    /// Teleport a body and stop it (for respawning)
    pub fn set_position(&mut self, handle: RigidBodyHandle, position: Vec2) {
        if let Some(body) = self.get_rigid_body_mut(handle) {
            body.set_translation(vector![position.x, position.y], true);
            body.set_linvel(vector![0.0, 0.0], true);
        }
    }

    /// First collider hit by a ray, with its time of impact
    pub fn raycast(
        &self,
        origin: Vector<Real>,
        direction: Vector<Real>,
        max_toi: Real,
        filter: QueryFilter,
    ) -> Option<(ColliderHandle, Real)> {
        let ray = Ray::new(point![origin.x, origin.y], direction);
        self.queries
            .cast_ray(&self.bodies, &self.colliders, &ray, max_toi, true, filter)
    }

    /// Whether something supports the body, casting straight down from its feet
    pub fn is_grounded(&self, handle: RigidBodyHandle, half_height: Real) -> bool {
        let Some(body) = self.get_rigid_body(handle) else {
            return false;
        };

        let position = body.translation();
        let ray_origin = vector![position.x, position.y - half_height + GROUND_RAY_DISTANCE];

        self.raycast(
            ray_origin,
            vector![0.0, -1.0],
            GROUND_RAY_DISTANCE * 2.0,
            QueryFilter::default().exclude_rigid_body(handle),
        )
        .is_some()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
