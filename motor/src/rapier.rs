//! Rapier bindings for the motor collaborators.
//!
//! - `RigidBody` implements [`MotorBody`] directly.
//! - [`RapierQuery`] answers [`SpatialQuery`] against a borrowed scene, skipping
//!   the driven body so probes never hit the character's own collider.
//! - [`WorldStaticDef`] describes level geometry with its [`Layer`].

use rapier3d::{na::UnitQuaternion, prelude::*};

use crate::{
    body::MotorBody,
    layers::{Layer, LayerMask},
    query::SpatialQuery,
    types::{ForceMode, RayHit, Vec3},
};

impl MotorBody for RigidBody {
    fn position(&self) -> Vec3 {
        *self.translation()
    }

    fn linear_velocity(&self) -> Vec3 {
        *self.linvel()
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.set_linvel(velocity, true);
    }

    fn set_drag(&mut self, drag: f32) {
        self.set_linear_damping(drag);
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.set_gravity_scale(if enabled { 1.0 } else { 0.0 }, true);
    }

    fn add_force(&mut self, force: Vec3, mode: ForceMode) {
        // Rapier only knows mass-dependent forces and impulses.
        match mode {
            ForceMode::Force => RigidBody::add_force(self, force, true),
            ForceMode::Acceleration => {
                let mass = self.mass();
                RigidBody::add_force(self, force * mass, true);
            }
            ForceMode::Impulse => self.apply_impulse(force, true),
            ForceMode::VelocityChange => {
                let mass = self.mass();
                self.apply_impulse(force * mass, true);
            }
        }
    }
}

/// Scene queries over borrowed Rapier sets.
///
/// Colliders carry their [`LayerMask`] in `user_data`. Rays hit every layer;
/// sphere checks only count colliders whose layers intersect the requested mask.
pub struct RapierQuery<'a> {
    bodies: &'a RigidBodySet,
    colliders: &'a ColliderSet,
    broad_phase: &'a BroadPhaseBvh,
    narrow_phase: &'a NarrowPhase,
    exclude: Option<RigidBodyHandle>,
}

impl<'a> RapierQuery<'a> {
    pub fn new(
        bodies: &'a RigidBodySet,
        colliders: &'a ColliderSet,
        broad_phase: &'a BroadPhaseBvh,
        narrow_phase: &'a NarrowPhase,
        exclude: Option<RigidBodyHandle>,
    ) -> Self {
        Self {
            bodies,
            colliders,
            broad_phase,
            narrow_phase,
            exclude,
        }
    }

    fn filter<'b>(&self) -> QueryFilter<'b> {
        let filter = QueryFilter::default().exclude_sensors();
        match self.exclude {
            Some(handle) => filter.exclude_rigid_body(handle),
            None => filter,
        }
    }

    fn pipeline<'b>(&'b self, filter: QueryFilter<'b>) -> QueryPipeline<'b> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            self.bodies,
            self.colliders,
            filter,
        )
    }
}

impl SpatialQuery for RapierQuery<'_> {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let ray = Ray::new(Point::from(origin), direction);
        let (_handle, hit) = self.pipeline(self.filter()).cast_ray_and_get_normal(
            &ray,
            max_distance.max(0.0),
            true,
        )?;
        Some(RayHit {
            distance: hit.time_of_impact,
            normal: hit.normal,
        })
    }

    fn check_sphere(&self, center: Vec3, radius: f32, layers: LayerMask) -> bool {
        let on_layers = |_handle: ColliderHandle, collider: &Collider| {
            LayerMask::from_user_data(collider.user_data).intersects(layers)
        };
        let filter = self.filter().predicate(&on_layers);
        let ball = Ball::new(radius);
        self.pipeline(filter)
            .intersect_shape(Isometry::translation(center.x, center.y, center.z), &ball)
            .next()
            .is_some()
    }
}

/// Immutable level collider.
#[derive(Clone, Debug)]
pub struct WorldStaticDef {
    /// Stable identifier; statics are inserted in `id` order.
    pub id: u32,
    pub translation: Vector<f32>,
    pub rotation: UnitQuaternion<f32>,
    pub shape: ColliderShapeDef,
    pub layer: Layer,
}

impl WorldStaticDef {
    /// Axis-aligned box on `layer`.
    pub fn cuboid(
        id: u32,
        translation: Vector<f32>,
        half_extents: Vector<f32>,
        layer: Layer,
    ) -> Self {
        Self {
            id,
            translation,
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Cuboid { half_extents },
            layer,
        }
    }

    /// Infinite ground plane through `translation`, facing +Y until rotated.
    pub fn plane(id: u32, translation: Vector<f32>, layer: Layer) -> Self {
        Self {
            id,
            translation,
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Plane {
                offset_along_normal: 0.0,
            },
            layer,
        }
    }

    pub fn with_rotation(mut self, rotation: UnitQuaternion<f32>) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Supported static shapes.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Infinite half-space whose normal is `rotation * +Y`.
    Plane { offset_along_normal: f32 },
    Cuboid { half_extents: Vector<f32> },
}

/// Build the collider for `def`, relative to a parent body posed at the def's pose.
pub fn collider_from_def(def: &WorldStaticDef) -> Collider {
    let builder = match &def.shape {
        ColliderShapeDef::Plane {
            offset_along_normal,
        } => {
            // The parent pose already translates the half-space; only the offset remains.
            ColliderBuilder::new(SharedShape::new(HalfSpace::new(Vector::y_axis())))
                .translation(Vector::y() * *offset_along_normal)
        }
        ColliderShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
        }
    };
    builder
        .user_data(LayerMask::empty().with(def.layer).to_user_data())
        .build()
}
