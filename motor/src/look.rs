use nalgebra as na;

use crate::{
    config::MotorConfig,
    constants::{LOOK_INPUT_SCALE, PITCH_LIMIT_DEG},
    types::{Quat, Vec2, Vec3},
};

/// Accumulated camera look angles in degrees.
///
/// - `yaw`: positive turns right, unbounded.
/// - `pitch`: positive looks down, clamped to `[-90, 90]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Look {
    pub yaw: f32,
    pub pitch: f32,
}

impl Look {
    /// Accumulate one tick of look delta (`y` up positive).
    pub fn apply_delta(&mut self, config: &MotorConfig, delta: Vec2) {
        self.yaw += delta.x * config.sensitivity_x * LOOK_INPUT_SCALE;
        self.pitch -= delta.y * config.sensitivity_y * LOOK_INPUT_SCALE;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Yaw-only body orientation.
    #[inline]
    pub fn body_rotation(&self) -> Quat {
        yaw_rotation(self.yaw)
    }

    /// Camera orientation: yaw, then pitch, then roll (`tilt`, degrees).
    #[inline]
    pub fn camera_rotation(&self, tilt: f32) -> Quat {
        yaw_rotation(self.yaw) * pitch_rotation(self.pitch) * roll_rotation(tilt)
    }

    /// Un-tilted horizontal forward (-Z at zero yaw).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.body_rotation() * Vec3::new(0.0, 0.0, -1.0)
    }

    /// Un-tilted horizontal right (+X at zero yaw).
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.body_rotation() * Vec3::new(1.0, 0.0, 0.0)
    }
}

// Right-handed Y-up: a positive angle about +Y turns left, about +X looks up,
// so yaw and pitch are negated to keep "positive = right / down".
#[inline]
fn yaw_rotation(yaw_deg: f32) -> Quat {
    na::UnitQuaternion::from_axis_angle(&na::Vector3::y_axis(), -yaw_deg.to_radians())
}

#[inline]
fn pitch_rotation(pitch_deg: f32) -> Quat {
    na::UnitQuaternion::from_axis_angle(&na::Vector3::x_axis(), -pitch_deg.to_radians())
}

#[inline]
fn roll_rotation(tilt_deg: f32) -> Quat {
    na::UnitQuaternion::from_axis_angle(&na::Vector3::z_axis(), tilt_deg.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).norm() < 1.0e-5
    }

    #[test]
    fn pitch_is_clamped_for_any_input_magnitude() {
        let config = MotorConfig::default();
        let mut look = Look::default();
        look.apply_delta(&config, Vec2::new(0.0, 1.0e6));
        assert_eq!(look.pitch, -90.0);
        look.apply_delta(&config, Vec2::new(0.0, -1.0e9));
        assert_eq!(look.pitch, 90.0);
        for step in [3.0, -7.0, 250.0, -1000.0] {
            look.apply_delta(&config, Vec2::new(0.0, step));
            assert!((-90.0..=90.0).contains(&look.pitch));
        }
    }

    #[test]
    fn look_scales_by_sensitivity() {
        let config = MotorConfig::default();
        let mut look = Look::default();
        // 100 sensitivity * 0.01 scale = one degree per unit.
        look.apply_delta(&config, Vec2::new(2.0, 1.0));
        assert!((look.yaw - 2.0).abs() < 1.0e-6);
        assert!((look.pitch + 1.0).abs() < 1.0e-6);
    }

    #[test]
    fn positive_yaw_turns_right() {
        let look = Look {
            yaw: 90.0,
            pitch: 0.0,
        };
        assert!(close(look.forward(), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(look.right(), Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn basis_ignores_pitch_and_tilt() {
        let look = Look {
            yaw: 30.0,
            pitch: 60.0,
        };
        let flat = Look {
            yaw: 30.0,
            pitch: 0.0,
        };
        assert!(close(look.forward(), flat.forward()));
        assert!(look.forward().y.abs() < 1.0e-6);
    }

    #[test]
    fn camera_pitch_looks_down_and_tilt_rolls() {
        let look = Look {
            yaw: 0.0,
            pitch: 90.0,
        };
        let view = look.camera_rotation(0.0) * Vec3::new(0.0, 0.0, -1.0);
        assert!(close(view, Vec3::new(0.0, -1.0, 0.0)));

        // Negative tilt (left wall) rolls the view's up toward +X.
        let level = Look::default();
        let up = level.camera_rotation(-10.0) * Vec3::new(0.0, 1.0, 0.0);
        assert!(up.x > 0.0);
        let forward = level.camera_rotation(-10.0) * Vec3::new(0.0, 0.0, -1.0);
        assert!(close(forward, Vec3::new(0.0, 0.0, -1.0)));
    }
}
