//! Fake collaborators for unit tests.

use crate::{
    body::MotorBody,
    layers::LayerMask,
    query::SpatialQuery,
    types::{ForceMode, RayHit, Vec3},
};

/// Body that records every write.
#[derive(Clone, Debug)]
pub struct FakeBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub drag: f32,
    pub gravity_enabled: bool,
    pub forces: Vec<(Vec3, ForceMode)>,
}

impl Default for FakeBody {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            velocity: Vec3::zeros(),
            drag: 0.0,
            gravity_enabled: true,
            forces: Vec::new(),
        }
    }
}

impl FakeBody {
    /// Sum of the forces recorded with `mode`.
    pub fn total(&self, mode: ForceMode) -> Vec3 {
        self.forces
            .iter()
            .filter(|(_, m)| *m == mode)
            .fold(Vec3::zeros(), |acc, (f, _)| acc + f)
    }
}

impl MotorBody for FakeBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn linear_velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn set_drag(&mut self, drag: f32) {
        self.drag = drag;
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    fn add_force(&mut self, force: Vec3, mode: ForceMode) {
        self.forces.push((force, mode));
    }
}

/// World answering queries by direction.
///
/// Rays pointing mostly down consult `floor`, rays pointing mostly along
/// `+right`/`-right` consult `right_wall`/`left_wall`. Distances beyond the
/// requested maximum are reported as misses.
#[derive(Clone, Debug, Default)]
pub struct FakeWorld {
    /// Distance and normal of the surface below.
    pub floor: Option<RayHit>,
    pub left_wall: Option<RayHit>,
    pub right_wall: Option<RayHit>,
    /// World-space right used to tell left from right rays.
    pub right: Option<Vec3>,
    pub grounded: bool,
}

impl FakeWorld {
    pub fn flat_ground() -> Self {
        Self {
            floor: Some(RayHit {
                distance: 1.0,
                normal: Vec3::new(0.0, 1.0, 0.0),
            }),
            grounded: true,
            ..Self::default()
        }
    }

    /// High above anything, nothing nearby.
    pub fn open_air() -> Self {
        Self::default()
    }
}

impl SpatialQuery for FakeWorld {
    fn cast_ray(&self, _origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let right = self.right.unwrap_or_else(|| Vec3::new(1.0, 0.0, 0.0));
        let hit = if direction.y < -0.5 {
            self.floor
        } else if direction.dot(&right) > 0.5 {
            self.right_wall
        } else if direction.dot(&right) < -0.5 {
            self.left_wall
        } else {
            None
        };
        hit.filter(|h| h.distance <= max_distance)
    }

    fn check_sphere(&self, _center: Vec3, _radius: f32, _layers: LayerMask) -> bool {
        self.grounded
    }
}
