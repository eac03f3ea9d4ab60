//! A small dynamic Rapier world for driving characters.
//!
//! Holds static level geometry plus the dynamic character bodies the motor
//! pushes around. Hosts call [`MotorWorld::drive`] to run a motor phase
//! against a body and [`MotorWorld::step`] once per fixed tick afterwards.

// Re-export Rapier so hosts can build shapes without depending on `rapier3d` directly.
pub use rapier3d;

use log::{debug, warn};
use rapier3d::{na::Translation3, prelude::*};

use crate::{
    body::BodyCommands,
    layers::{Layer, LayerMask},
    rapier::{RapierQuery, WorldStaticDef, collider_from_def},
};

/// Standard gravity (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Dynamic capsule the motor drives.
#[derive(Clone, Debug)]
pub struct PlayerBodyDef {
    pub translation: Vector<f32>,
    pub radius: f32,
    /// Half-height of the capsule's cylindrical part.
    pub half_height: f32,
    pub mass: f32,
}

impl Default for PlayerBodyDef {
    fn default() -> Self {
        // A two meter tall capsule: 0.5 radius caps around a 1.0 cylinder.
        Self {
            translation: Vector::new(0.0, 1.0, 0.0),
            radius: 0.5,
            half_height: 0.5,
            mass: 1.0,
        }
    }
}

pub struct MotorWorld {
    pub gravity: Vector<f32>,
    pub integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    /// Bodies whose user forces are cleared after every step.
    driven: Vec<RigidBodyHandle>,
    /// A dynamic body was inserted and has not been through a physics step yet.
    unstepped_bodies: bool,
}

impl Default for MotorWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl MotorWorld {
    pub fn new() -> Self {
        Self {
            gravity: Vector::new(0.0, -GRAVITY, 0.0),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            driven: Vec::new(),
            unstepped_bodies: false,
        }
    }

    /// Build a world from level statics, inserted in `id` order.
    pub fn build(mut defs: Vec<WorldStaticDef>) -> Self {
        defs.sort_by_key(|d| d.id);
        let mut world = Self::new();
        for def in &defs {
            world.insert_static(def);
        }
        world.refresh_queries();
        world
    }

    /// Insert one fixed collider. Call [`refresh_queries`](Self::refresh_queries)
    /// before querying if no step follows.
    pub fn insert_static(&mut self, def: &WorldStaticDef) -> RigidBodyHandle {
        let iso = Isometry::from_parts(Translation3::from(def.translation), def.rotation);
        let handle = self.bodies.insert(RigidBodyBuilder::fixed().pose(iso).build());
        self.colliders
            .insert_with_parent(collider_from_def(def), handle, &mut self.bodies);
        handle
    }

    /// Spawn a rotation-locked, frictionless dynamic capsule on the player layer.
    pub fn spawn_player(&mut self, def: &PlayerBodyDef) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .pose(Isometry::translation(
                def.translation.x,
                def.translation.y,
                def.translation.z,
            ))
            .lock_rotations()
            .can_sleep(false)
            .ccd_enabled(true)
            .build();
        let handle = self.bodies.insert(body);

        let collider = ColliderBuilder::capsule_y(def.half_height, def.radius)
            .mass(def.mass)
            .friction(0.0)
            .friction_combine_rule(CoefficientCombineRule::Min)
            .user_data(LayerMask::empty().with(Layer::Player).to_user_data())
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        self.driven.push(handle);
        self.unstepped_bodies = true;
        handle
    }

    /// Update the broad and narrow phases without integrating dynamics.
    ///
    /// Skipped while a freshly spawned body is waiting for its first
    /// [`step`](Self::step): the collision pipeline would consume its change
    /// flags and the island manager would never pick it up. That step refreshes
    /// the queries instead.
    pub fn refresh_queries(&mut self) {
        if self.unstepped_bodies {
            debug!("query refresh deferred to the next step");
            return;
        }
        let mut collision_pipeline = CollisionPipeline::new();
        collision_pipeline.step(
            0.0,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &(),
            &(),
        );
    }

    /// Integrate one fixed tick, then clear the driven bodies' one-tick forces.
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
        self.unstepped_bodies = false;
        for handle in &self.driven {
            if let Some(body) = self.bodies.get_mut(*handle) {
                body.reset_forces(false);
            }
        }
    }

    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    /// Scene queries that ignore `exclude`'s colliders.
    pub fn query(&self, exclude: Option<RigidBodyHandle>) -> RapierQuery<'_> {
        RapierQuery::new(
            &self.bodies,
            &self.colliders,
            &self.broad_phase,
            &self.narrow_phase,
            exclude,
        )
    }

    /// Run `f` against a snapshot of `handle`'s body, then replay its writes.
    ///
    /// Queries inside `f` see the world as of the last step and skip the driven body.
    /// Returns `None` when the handle is unknown.
    pub fn drive<R>(
        &mut self,
        handle: RigidBodyHandle,
        f: impl FnOnce(&mut BodyCommands, &RapierQuery<'_>) -> R,
    ) -> Option<R> {
        let Some(body) = self.bodies.get(handle) else {
            warn!("drive: no rigid body for {handle:?}");
            return None;
        };
        let mut commands = BodyCommands::snapshot(body);
        let out = f(&mut commands, &self.query(Some(handle)));

        let body = self.bodies.get_mut(handle)?;
        commands.replay(body);
        Some(out)
    }
}
