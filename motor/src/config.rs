use std::fmt;

use crate::{
    constants::*,
    layers::{Layer, LayerMask},
};

/// How per-tick smoothing factors are derived from a rate and a delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SmoothingMode {
    /// `t = rate * dt`, clamped to `[0, 1]`. Feel depends on frame rate.
    #[default]
    FrameDependent,
    /// `t = 1 - e^(-rate * dt)`. Same convergence per second at any frame rate.
    TimeCorrected,
}

impl SmoothingMode {
    /// Interpolation factor for one tick.
    #[inline]
    pub fn factor(self, rate: f32, dt: f32) -> f32 {
        match self {
            SmoothingMode::FrameDependent => rate * dt,
            SmoothingMode::TimeCorrected => 1.0 - (-rate * dt).exp(),
        }
    }
}

/// Immutable motor tunables.
///
/// Built once when the motor is created. Values are meters, seconds and degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct MotorConfig {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub crouch_speed: f32,
    pub acceleration: f32,
    pub movement_multiplier: f32,
    pub air_multiplier: f32,

    pub jump_force: f32,

    pub ground_drag: f32,
    pub air_drag: f32,

    /// Half of the standing height. The slope probe reaches `capsule_half_height + 0.5`.
    pub capsule_half_height: f32,
    pub ground_check_radius: f32,
    /// Foot point = body position - `ground_check_offset` along world up.
    pub ground_check_offset: f32,
    pub ground_mask: LayerMask,

    pub wall_distance: f32,
    pub minimum_jump_height: f32,
    pub wall_running_gravity: f32,
    pub wall_running_jump_force: f32,

    pub cam_tilt: f32,
    pub cam_tilt_time: f32,

    pub sensitivity_x: f32,
    pub sensitivity_y: f32,

    pub base_fov: f32,
    pub sprint_fov: f32,
    pub dynamic_fov_time: f32,

    pub crouch_scale_y: f32,

    pub smoothing: SmoothingMode,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            crouch_speed: CROUCH_SPEED,
            acceleration: ACCELERATION,
            movement_multiplier: MOVEMENT_MULTIPLIER,
            air_multiplier: AIR_MULTIPLIER,
            jump_force: JUMP_FORCE,
            ground_drag: GROUND_DRAG,
            air_drag: AIR_DRAG,
            capsule_half_height: CAPSULE_HALF_HEIGHT,
            ground_check_radius: GROUND_CHECK_RADIUS,
            ground_check_offset: GROUND_CHECK_OFFSET,
            ground_mask: LayerMask::empty().with(Layer::Ground),
            wall_distance: WALL_DISTANCE,
            minimum_jump_height: MINIMUM_JUMP_HEIGHT,
            wall_running_gravity: WALL_RUNNING_GRAVITY,
            wall_running_jump_force: WALL_RUNNING_JUMP_FORCE,
            cam_tilt: CAM_TILT,
            cam_tilt_time: CAM_TILT_TIME,
            sensitivity_x: SENSITIVITY_X,
            sensitivity_y: SENSITIVITY_Y,
            base_fov: BASE_FOV,
            sprint_fov: SPRINT_FOV,
            dynamic_fov_time: DYNAMIC_FOV_TIME,
            crouch_scale_y: CROUCH_SCALE_Y,
            smoothing: SmoothingMode::FrameDependent,
        }
    }
}

/// Reasons a [`MotorConfig`] is rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A field is NaN or infinite.
    NonFinite(&'static str),
    /// A field that must be `>= 0` is negative.
    Negative(&'static str),
    /// Speeds must satisfy `crouch <= walk <= sprint`.
    SpeedOrder {
        crouch: f32,
        walk: f32,
        sprint: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite(field) => write!(f, "`{field}` must be finite"),
            ConfigError::Negative(field) => write!(f, "`{field}` must not be negative"),
            ConfigError::SpeedOrder {
                crouch,
                walk,
                sprint,
            } => write!(
                f,
                "speeds must satisfy crouch <= walk <= sprint (got {crouch}, {walk}, {sprint})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl MotorConfig {
    /// Check the tunables before they are frozen into a motor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Fields that must be finite and non-negative.
        let non_negative = [
            ("walk_speed", self.walk_speed),
            ("sprint_speed", self.sprint_speed),
            ("crouch_speed", self.crouch_speed),
            ("acceleration", self.acceleration),
            ("movement_multiplier", self.movement_multiplier),
            ("air_multiplier", self.air_multiplier),
            ("jump_force", self.jump_force),
            ("ground_drag", self.ground_drag),
            ("air_drag", self.air_drag),
            ("capsule_half_height", self.capsule_half_height),
            ("ground_check_radius", self.ground_check_radius),
            ("wall_distance", self.wall_distance),
            ("minimum_jump_height", self.minimum_jump_height),
            ("wall_running_gravity", self.wall_running_gravity),
            ("wall_running_jump_force", self.wall_running_jump_force),
            ("cam_tilt_time", self.cam_tilt_time),
            ("dynamic_fov_time", self.dynamic_fov_time),
            ("base_fov", self.base_fov),
            ("sprint_fov", self.sprint_fov),
            ("crouch_scale_y", self.crouch_scale_y),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(field));
            }
            if value < 0.0 {
                return Err(ConfigError::Negative(field));
            }
        }

        // Signed fields only need to be finite.
        let finite = [
            ("ground_check_offset", self.ground_check_offset),
            ("cam_tilt", self.cam_tilt),
            ("sensitivity_x", self.sensitivity_x),
            ("sensitivity_y", self.sensitivity_y),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(field));
        }

        if !(self.crouch_speed <= self.walk_speed && self.walk_speed <= self.sprint_speed) {
            return Err(ConfigError::SpeedOrder {
                crouch: self.crouch_speed,
                walk: self.walk_speed,
                sprint: self.sprint_speed,
            });
        }

        Ok(())
    }

    /// Length of the downward slope probe.
    #[inline]
    pub fn slope_probe_distance(&self) -> f32 {
        self.capsule_half_height + SLOPE_PROBE_EXTRA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(MotorConfig::default().validate(), Ok(()));
        assert!((MotorConfig::default().slope_probe_distance() - 1.5).abs() < 1.0e-6);
    }

    #[test]
    fn rejects_inverted_speeds() {
        let config = MotorConfig {
            crouch_speed: 5.0,
            ..MotorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpeedOrder { .. })
        ));
    }

    #[test]
    fn rejects_nan_and_negative_rates() {
        let nan = MotorConfig {
            acceleration: f32::NAN,
            ..MotorConfig::default()
        };
        assert_eq!(nan.validate(), Err(ConfigError::NonFinite("acceleration")));

        let negative = MotorConfig {
            cam_tilt_time: -1.0,
            ..MotorConfig::default()
        };
        assert_eq!(
            negative.validate(),
            Err(ConfigError::Negative("cam_tilt_time"))
        );

        let bad_offset = MotorConfig {
            ground_check_offset: f32::INFINITY,
            ..MotorConfig::default()
        };
        assert_eq!(
            bad_offset.validate(),
            Err(ConfigError::NonFinite("ground_check_offset"))
        );
    }

    #[test]
    fn time_corrected_factor_is_frame_rate_independent() {
        // Two half-ticks converge as far as one full tick.
        let mode = SmoothingMode::TimeCorrected;
        let one = mode.factor(10.0, 0.02);
        let half = mode.factor(10.0, 0.01);
        let two_halves = 1.0 - (1.0 - half) * (1.0 - half);
        assert!((one - two_halves).abs() < 1.0e-6);

        // The literal mode is just the product.
        assert!((SmoothingMode::FrameDependent.factor(10.0, 0.02) - 0.2).abs() < 1.0e-6);
    }
}
