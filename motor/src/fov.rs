use crate::{config::MotorConfig, types::lerp};

/// Field of view (degrees) eased toward the sprint FOV while `boost` is held,
/// otherwise toward the base FOV.
#[inline]
pub fn smooth_fov(config: &MotorConfig, current: f32, boost: bool, dt: f32) -> f32 {
    let target = if boost {
        config.sprint_fov
    } else {
        config.base_fov
    };
    lerp(
        current,
        target,
        config.smoothing.factor(config.dynamic_fov_time, dt),
    )
}
