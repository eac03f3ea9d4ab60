//! Wall-run state machine.
//!
//! States
//! - `Free`: gravity on, camera roll eased back to zero.
//! - `WallRunning(side)`: gravity off, a constant downward force instead, camera
//!   roll eased toward the wall side.
//!
//! Every fixed tick the left/right probes are re-sampled and the state is
//! decided from scratch:
//! 1) Not enough clearance below (`can_wall_run` is false) → `Free`.
//! 2) A wall on the left → `WallRunning(Left)`; else on the right → `WallRunning(Right)`.
//! 3) Otherwise → `Free`.

use crate::{
    body::MotorBody,
    config::MotorConfig,
    constants::WALL_JUMP_FORCE_SCALE,
    query::SpatialQuery,
    types::{ForceMode, RayHit, Side, Vec3, down, lerp, up},
};

/// Roll magnitude (degrees) below which an easing-out tilt is snapped to zero.
const TILT_SETTLE_EPS: f32 = 1.0e-4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WallRunState {
    #[default]
    Free,
    WallRunning(Side),
}

impl WallRunState {
    #[inline]
    pub fn is_wall_running(&self) -> bool {
        matches!(self, WallRunState::WallRunning(_))
    }
}

/// How the state changed during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallRunTransition {
    Unchanged,
    Entered(Side),
    /// Jumped straight from one side to the other without a `Free` tick.
    Switched(Side),
    Left,
}

/// Left/right wall probe results for one fixed tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WallProbe {
    pub left: Option<RayHit>,
    pub right: Option<RayHit>,
}

impl WallProbe {
    /// Cast both horizontal probes from `position`. `right` is the un-tilted body right.
    pub fn sample(
        query: &impl SpatialQuery,
        config: &MotorConfig,
        position: Vec3,
        right: Vec3,
    ) -> Self {
        Self {
            left: query.cast_ray(position, -right, config.wall_distance),
            right: query.cast_ray(position, right, config.wall_distance),
        }
    }

    /// The wall to run on, left first.
    #[inline]
    pub fn wall(&self) -> Option<(Side, RayHit)> {
        self.left
            .map(|hit| (Side::Left, hit))
            .or_else(|| self.right.map(|hit| (Side::Right, hit)))
    }
}

/// True when nothing is within `minimum_jump_height` straight below.
pub fn can_wall_run(query: &impl SpatialQuery, config: &MotorConfig, position: Vec3) -> bool {
    query
        .cast_ray(position, down(), config.minimum_jump_height)
        .is_none()
}

/// Output of one [`WallRun::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallRunStep {
    pub transition: WallRunTransition,
    /// Launch force applied this tick, if a wall jump fired.
    pub wall_jump: Option<Vec3>,
}

/// Wall-run state plus the camera roll it drives.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WallRun {
    pub state: WallRunState,
    /// Camera roll in degrees. Negative leans for a left wall.
    pub tilt: f32,
}

impl WallRun {
    /// Decide the state for this tick and apply its effects to `body`.
    ///
    /// `jump_pressed` must already be edge-triggered.
    pub fn step(
        &mut self,
        config: &MotorConfig,
        body: &mut impl MotorBody,
        probe: &WallProbe,
        can_run: bool,
        jump_pressed: bool,
        dt: f32,
    ) -> WallRunStep {
        let previous = self.state;
        let wall = if can_run { probe.wall() } else { None };
        let t = config.smoothing.factor(config.cam_tilt_time, dt);

        let mut wall_jump = None;
        match wall {
            Some((side, hit)) => {
                self.state = WallRunState::WallRunning(side);
                body.set_gravity_enabled(false);
                body.add_force(down() * config.wall_running_gravity, ForceMode::Force);
                self.tilt = lerp(self.tilt, config.cam_tilt * side.tilt_sign(), t);

                if jump_pressed {
                    let direction = up() + hit.normal;
                    let v = body.linear_velocity();
                    body.set_linear_velocity(Vec3::new(v.x, 0.0, v.z));
                    let force = direction * config.wall_running_jump_force * WALL_JUMP_FORCE_SCALE;
                    body.add_force(force, ForceMode::Force);
                    wall_jump = Some(force);
                }
            }
            None => {
                self.state = WallRunState::Free;
                body.set_gravity_enabled(true);
                self.tilt = lerp(self.tilt, 0.0, t);
                if self.tilt.abs() < TILT_SETTLE_EPS {
                    self.tilt = 0.0;
                }
            }
        }

        let transition = match (previous, self.state) {
            (WallRunState::Free, WallRunState::WallRunning(side)) => WallRunTransition::Entered(side),
            (WallRunState::WallRunning(a), WallRunState::WallRunning(b)) if a != b => {
                WallRunTransition::Switched(b)
            }
            (WallRunState::WallRunning(_), WallRunState::Free) => WallRunTransition::Left,
            _ => WallRunTransition::Unchanged,
        };

        WallRunStep {
            transition,
            wall_jump,
        }
    }
}
