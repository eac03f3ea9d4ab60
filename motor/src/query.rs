use crate::{
    layers::LayerMask,
    types::{RayHit, Vec3},
};

/// Synchronous scene queries the motor issues against the world.
///
/// "No hit" is a valid answer, not an error.
pub trait SpatialQuery {
    /// Nearest hit along `direction` (unit length) within `max_distance`.
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;

    /// Does a sphere at `center` overlap any collider on `layers`?
    fn check_sphere(&self, center: Vec3, radius: f32, layers: LayerMask) -> bool;
}
