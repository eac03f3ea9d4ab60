/*!
Core motor types and math aliases shared by the motor submodules.

This module intentionally contains no algorithms. It defines the data types
exchanged between the classifiers, the mover, the wall-run state machine and
the collaborator traits.

Frame conventions (right-handed, Y-up):
- forward is -Z, right is +X when yaw is zero.
- angles stored on the motor are degrees; conversions to radians happen at the
  edges (`look`).
*/

use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Vec2 = na::Vector2<f32>;
pub type Quat = na::UnitQuaternion<f32>;

/// World up.
#[inline]
pub fn up() -> Vec3 {
    Vec3::new(0.0, 1.0, 0.0)
}

/// World down.
#[inline]
pub fn down() -> Vec3 {
    Vec3::new(0.0, -1.0, 0.0)
}

/// Nearest hit returned by a ray probe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the impact point (meters).
    pub distance: f32,
    /// World-space surface normal at the impact point.
    pub normal: Vec3,
}

/// How a force command is integrated by the body.
///
/// Mirrors the usual engine vocabulary:
/// - `Force`: continuous, mass-dependent.
/// - `Acceleration`: continuous, mass-independent.
/// - `Impulse`: instantaneous, mass-dependent.
/// - `VelocityChange`: instantaneous, mass-independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForceMode {
    Force,
    Acceleration,
    Impulse,
    VelocityChange,
}

/// Which side of the character a wall was detected on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the camera roll toward this wall.
    #[inline]
    pub fn tilt_sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Returns `v` normalized, or zero if `v` has (near) zero length.
#[inline]
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    v.try_normalize(crate::constants::DIRECTION_EPS_SQ.sqrt())
        .unwrap_or_else(Vec3::zeros)
}

/// Removes the component of `v` along `normal`.
///
/// `normal` does not need to be unit length. A (near) zero normal leaves `v`
/// unchanged.
#[inline]
pub fn project_on_plane(v: Vec3, normal: Vec3) -> Vec3 {
    let n_sq = normal.norm_squared();
    if n_sq <= crate::constants::DIRECTION_EPS_SQ {
        return v;
    }
    v - normal * (v.dot(&normal) / n_sq)
}

/// Clamped linear interpolation (`t` is clamped to `[0, 1]`).
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}
