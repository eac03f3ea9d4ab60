use crate::{
    body::MotorBody,
    config::MotorConfig,
    ground::{GroundState, slope_move_direction},
    types::{ForceMode, Vec3, normalize_or_zero, up},
};

/// Acceleration-mode movement force for one physics tick.
///
/// - Grounded: along the normalized intent.
/// - On a slope: along the normalized intent projected onto `slope_normal`.
/// - Airborne: along the normalized intent with reduced authority.
///
/// `slope_normal` is the last recorded slope normal and is only consulted on slopes.
/// Zero intent always yields zero force.
pub fn movement_force(
    config: &MotorConfig,
    ground: GroundState,
    intent: Vec3,
    slope_normal: Vec3,
    speed: f32,
) -> Vec3 {
    let scale = speed * config.movement_multiplier;
    match ground {
        GroundState::Grounded => normalize_or_zero(intent) * scale,
        GroundState::OnSlope { .. } => {
            normalize_or_zero(slope_move_direction(intent, slope_normal)) * scale
        }
        GroundState::Airborne => normalize_or_zero(intent) * scale * config.air_multiplier,
    }
}

/// Apply [`movement_force`] to `body`. Returns the applied force.
pub fn apply_movement(
    body: &mut impl MotorBody,
    config: &MotorConfig,
    ground: GroundState,
    intent: Vec3,
    slope_normal: Vec3,
    speed: f32,
) -> Vec3 {
    let force = movement_force(config, ground, intent, slope_normal, speed);
    if force != Vec3::zeros() {
        body.add_force(force, ForceMode::Acceleration);
    }
    force
}

/// Grounded jump: drop vertical velocity, then an upward impulse.
///
/// Returns `false` (and leaves the body untouched) when not grounded.
pub fn try_jump(body: &mut impl MotorBody, config: &MotorConfig, grounded: bool) -> bool {
    if !grounded {
        return false;
    }
    let v = body.linear_velocity();
    body.set_linear_velocity(Vec3::new(v.x, 0.0, v.z));
    body.add_force(up() * config.jump_force, ForceMode::Impulse);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeBody;

    fn forward() -> Vec3 {
        Vec3::new(0.0, 0.0, -1.0)
    }

    fn states() -> [GroundState; 3] {
        [
            GroundState::Airborne,
            GroundState::Grounded,
            GroundState::OnSlope {
                normal: Vec3::new(0.2, 0.95, 0.0),
            },
        ]
    }

    #[test]
    fn zero_intent_never_pushes() {
        let config = MotorConfig::default();
        for ground in states() {
            let normal = match ground {
                GroundState::OnSlope { normal } => normal,
                _ => up(),
            };
            let mut body = FakeBody::default();
            let force = apply_movement(&mut body, &config, ground, Vec3::zeros(), normal, 6.0);
            assert_eq!(force, Vec3::zeros());
            assert!(body.forces.is_empty());
        }
    }

    #[test]
    fn grounded_force_ignores_intent_magnitude() {
        let config = MotorConfig::default();
        let diagonal = Vec3::new(1.0, 0.0, -1.0);
        let force = movement_force(&config, GroundState::Grounded, diagonal, up(), 4.0);
        assert!((force.norm() - 4.0 * config.movement_multiplier).abs() < 1.0e-4);
        assert!(force.y.abs() < 1.0e-6);
    }

    #[test]
    fn airborne_force_is_reduced() {
        let config = MotorConfig::default();
        let ground = movement_force(&config, GroundState::Grounded, forward(), up(), 4.0);
        let air = movement_force(&config, GroundState::Airborne, forward(), up(), 4.0);
        assert!((air.norm() - ground.norm() * config.air_multiplier).abs() < 1.0e-4);
    }

    #[test]
    fn slope_force_has_no_component_along_normal() {
        let config = MotorConfig::default();
        let n = Vec3::new(0.2, 0.95, 0.0);
        for intent in [forward(), Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, -1.0)] {
            let force = movement_force(&config, GroundState::OnSlope { normal: n }, intent, n, 4.0);
            assert!(force.dot(&n).abs() < 1.0e-3, "force {force:?} leaks into {n:?}");
            assert!(force.norm() > 0.0);
        }
    }

    #[test]
    fn jump_only_when_grounded() {
        let config = MotorConfig::default();

        let mut airborne = FakeBody {
            velocity: Vec3::new(1.0, -4.0, 0.0),
            ..FakeBody::default()
        };
        assert!(!try_jump(&mut airborne, &config, false));
        assert_eq!(airborne.velocity.y, -4.0);
        assert!(airborne.forces.is_empty());

        let mut grounded = FakeBody {
            velocity: Vec3::new(1.0, -4.0, 0.0),
            ..FakeBody::default()
        };
        assert!(try_jump(&mut grounded, &config, true));
        assert_eq!(grounded.velocity, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(
            grounded.total(ForceMode::Impulse),
            Vec3::new(0.0, config.jump_force, 0.0)
        );
    }
}
