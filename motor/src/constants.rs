//! Default motor tunables.
//!
//! Units are meters, seconds and degrees. Rates (`*_RATE`, `*_TIME`) are
//! per-second smoothing rates multiplied by the tick delta.

/// Walking speed target (m/s).
pub const WALK_SPEED: f32 = 4.0;

/// Sprinting speed target (m/s). Only reachable while grounded.
pub const SPRINT_SPEED: f32 = 6.0;

/// Crouching speed target (m/s). Wins over sprinting.
pub const CROUCH_SPEED: f32 = 2.0;

/// Rate used when smoothing the effective speed toward its target.
pub const ACCELERATION: f32 = 10.0;

/// Scales `effective speed` into an acceleration-mode force.
pub const MOVEMENT_MULTIPLIER: f32 = 10.0;

/// Air-control multiplier for planar movement while airborne.
///
/// Convention:
/// - 1.0 = full ground control in air
/// - 0.0 = no air control
pub const AIR_MULTIPLIER: f32 = 0.4;

/// Upward impulse applied by a grounded jump.
pub const JUMP_FORCE: f32 = 5.0;

/// Linear drag while grounded.
pub const GROUND_DRAG: f32 = 6.0;

/// Linear drag while airborne.
pub const AIR_DRAG: f32 = 2.0;

/// Half of the character's full standing height (meters).
///
/// Note: this is half of the *total* height, not Rapier's capsule half-segment.
pub const CAPSULE_HALF_HEIGHT: f32 = 1.0;

/// Extra reach of the slope probe past the capsule bottom (meters).
pub const SLOPE_PROBE_EXTRA: f32 = 0.5;

/// Radius of the ground-check sphere around the foot point (meters).
pub const GROUND_CHECK_RADIUS: f32 = 0.2;

/// Distance from the body origin down to the foot point (meters).
pub const GROUND_CHECK_OFFSET: f32 = 1.0;

/// Horizontal reach of the left/right wall probes (meters).
pub const WALL_DISTANCE: f32 = 0.6;

/// Clearance below the body required before wall-running is allowed (meters).
pub const MINIMUM_JUMP_HEIGHT: f32 = 2.0;

/// Constant downward force replacing gravity while wall-running.
pub const WALL_RUNNING_GRAVITY: f32 = 12.0;

/// Wall-jump strength. Scaled by [`WALL_JUMP_FORCE_SCALE`] when applied.
pub const WALL_RUNNING_JUMP_FORCE: f32 = 4.0;

/// Multiplier applied to [`WALL_RUNNING_JUMP_FORCE`] (force mode, one tick).
pub const WALL_JUMP_FORCE_SCALE: f32 = 100.0;

/// Camera roll while wall-running (degrees).
pub const CAM_TILT: f32 = 10.0;

/// Rate used when easing the camera roll.
pub const CAM_TILT_TIME: f32 = 7.66;

/// Look sensitivity, horizontal axis.
pub const SENSITIVITY_X: f32 = 100.0;

/// Look sensitivity, vertical axis.
pub const SENSITIVITY_Y: f32 = 100.0;

/// Fixed scale applied to raw look deltas before sensitivity.
pub const LOOK_INPUT_SCALE: f32 = 0.01;

/// Pitch limit in degrees (symmetric).
pub const PITCH_LIMIT_DEG: f32 = 90.0;

/// Field of view while not boosting (degrees).
pub const BASE_FOV: f32 = 80.0;

/// Field of view while the run-view key is held (degrees).
pub const SPRINT_FOV: f32 = 100.0;

/// Rate used when smoothing the field of view.
pub const DYNAMIC_FOV_TIME: f32 = 8.0;

/// Vertical visual scale while crouched.
pub const CROUCH_SCALE_Y: f32 = 0.7;

/// Squared length below which a direction is treated as zero.
pub const DIRECTION_EPS_SQ: f32 = 1.0e-12;
