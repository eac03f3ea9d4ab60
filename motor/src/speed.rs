use crate::{config::MotorConfig, types::lerp};

/// Which configured speed the effective speed is being pulled toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedTarget {
    Walk,
    Sprint,
    Crouch,
}

impl SpeedTarget {
    /// Pick the target for this tick.
    ///
    /// Crouch is checked first and wins even while sprint is held. Holding
    /// both keys therefore crouches; there is no separate crouch-sprint speed.
    pub fn select(crouch: bool, sprint: bool, grounded: bool) -> Self {
        if crouch {
            SpeedTarget::Crouch
        } else if sprint && grounded {
            SpeedTarget::Sprint
        } else {
            SpeedTarget::Walk
        }
    }

    pub fn speed(self, config: &MotorConfig) -> f32 {
        match self {
            SpeedTarget::Walk => config.walk_speed,
            SpeedTarget::Sprint => config.sprint_speed,
            SpeedTarget::Crouch => config.crouch_speed,
        }
    }
}

/// Smooth `current` toward `target`'s speed for one tick.
#[inline]
pub fn smooth_speed(config: &MotorConfig, current: f32, target: SpeedTarget, dt: f32) -> f32 {
    let t = config.smoothing.factor(config.acceleration, dt);
    lerp(current, target.speed(config), t)
}

/// Drag for the current contact state. Not smoothed.
#[inline]
pub fn drag_for(config: &MotorConfig, grounded: bool) -> f32 {
    if grounded {
        config.ground_drag
    } else {
        config.air_drag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SmoothingMode;

    #[test]
    fn crouch_beats_sprint() {
        assert_eq!(SpeedTarget::select(true, true, true), SpeedTarget::Crouch);
        assert_eq!(SpeedTarget::select(true, false, false), SpeedTarget::Crouch);
    }

    #[test]
    fn sprint_requires_ground() {
        assert_eq!(SpeedTarget::select(false, true, true), SpeedTarget::Sprint);
        assert_eq!(SpeedTarget::select(false, true, false), SpeedTarget::Walk);
        assert_eq!(SpeedTarget::select(false, false, true), SpeedTarget::Walk);
    }

    #[test]
    fn speed_converges_monotonically_without_overshoot() {
        for smoothing in [SmoothingMode::FrameDependent, SmoothingMode::TimeCorrected] {
            let config = MotorConfig {
                smoothing,
                ..MotorConfig::default()
            };
            let mut speed = config.walk_speed;
            let mut last_gap = f32::MAX;
            for _ in 0..200 {
                speed = smooth_speed(&config, speed, SpeedTarget::Sprint, 1.0 / 60.0);
                let gap = config.sprint_speed - speed;
                assert!(gap >= 0.0, "overshot sprint speed: {speed}");
                assert!(gap <= last_gap);
                last_gap = gap;
            }
            assert!(last_gap < 1.0e-3);
        }
    }

    #[test]
    fn huge_delta_snaps_instead_of_overshooting() {
        let config = MotorConfig::default();
        let speed = smooth_speed(&config, config.sprint_speed, SpeedTarget::Crouch, 5.0);
        assert_eq!(speed, config.crouch_speed);
    }

    #[test]
    fn drag_follows_contact() {
        let config = MotorConfig::default();
        assert_eq!(drag_for(&config, true), config.ground_drag);
        assert_eq!(drag_for(&config, false), config.air_drag);
    }
}
