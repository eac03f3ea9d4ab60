use crate::{
    config::MotorConfig,
    query::SpatialQuery,
    types::{RayHit, Vec3, down, project_on_plane, up},
};

/// Ground contact classification for one variable-rate tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GroundState {
    Airborne,
    /// Grounded on a surface whose probe normal is exactly world up (or not probed).
    Grounded,
    /// Grounded while the slope probe reports a tilted surface.
    OnSlope { normal: Vec3 },
}

impl GroundState {
    #[inline]
    pub fn is_grounded(&self) -> bool {
        !matches!(self, GroundState::Airborne)
    }
}

/// Raw results of the two independent ground queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundProbe {
    /// Foot sphere overlapped the ground layers.
    pub grounded: bool,
    /// Downward slope ray hit, if any.
    pub slope_hit: Option<RayHit>,
}

impl GroundProbe {
    /// Run both queries from `position`.
    pub fn sample(query: &impl SpatialQuery, config: &MotorConfig, position: Vec3) -> Self {
        let slope_hit = query.cast_ray(position, down(), config.slope_probe_distance());
        let foot = position - up() * config.ground_check_offset;
        let grounded = query.check_sphere(foot, config.ground_check_radius, config.ground_mask);
        Self {
            grounded,
            slope_hit,
        }
    }

    /// Normal of the slope hit if the probe found a surface that is not exactly up.
    #[inline]
    pub fn slope_normal(&self) -> Option<Vec3> {
        self.slope_hit.map(|h| h.normal).filter(|n| *n != up())
    }

    /// Combine both sources. Slope only refines a grounded contact.
    pub fn classify(&self) -> GroundState {
        match (self.grounded, self.slope_normal()) {
            (false, _) => GroundState::Airborne,
            (true, Some(normal)) => GroundState::OnSlope { normal },
            (true, None) => GroundState::Grounded,
        }
    }
}

/// Intent projected onto the plane of the last recorded slope normal.
#[inline]
pub fn slope_move_direction(intent: Vec3, slope_normal: Vec3) -> Vec3 {
    project_on_plane(intent, slope_normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeWorld;

    fn hit(normal: Vec3) -> Option<RayHit> {
        Some(RayHit {
            distance: 1.0,
            normal,
        })
    }

    #[test]
    fn flat_ground_is_grounded_not_slope() {
        let probe = GroundProbe::sample(
            &FakeWorld::flat_ground(),
            &MotorConfig::default(),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(probe.classify(), GroundState::Grounded);
        assert!(probe.slope_normal().is_none());
    }

    #[test]
    fn tilted_hit_while_grounded_is_slope() {
        let n = Vec3::new(0.2, 0.95, 0.0);
        let probe = GroundProbe {
            grounded: true,
            slope_hit: hit(n),
        };
        assert_eq!(probe.classify(), GroundState::OnSlope { normal: n });
    }

    #[test]
    fn slope_hit_without_foot_contact_is_airborne() {
        // The two sources disagree; the foot sphere decides grounded.
        let probe = GroundProbe {
            grounded: false,
            slope_hit: hit(Vec3::new(0.2, 0.95, 0.0)),
        };
        assert_eq!(probe.classify(), GroundState::Airborne);
        assert!(probe.slope_normal().is_some());
    }

    #[test]
    fn foot_contact_without_slope_hit_is_grounded() {
        let probe = GroundProbe {
            grounded: true,
            slope_hit: None,
        };
        assert_eq!(probe.classify(), GroundState::Grounded);
    }

    #[test]
    fn slope_probe_respects_its_reach() {
        // A floor 1.6m below is out of reach of the 1.5m probe.
        let world = FakeWorld {
            floor: Some(RayHit {
                distance: 1.6,
                normal: Vec3::new(0.0, 0.8, 0.6),
            }),
            grounded: true,
            ..FakeWorld::default()
        };
        let probe = GroundProbe::sample(&world, &MotorConfig::default(), Vec3::zeros());
        assert!(probe.slope_hit.is_none());
        assert_eq!(probe.classify(), GroundState::Grounded);
    }

    #[test]
    fn slope_direction_is_perpendicular_to_normal() {
        let n = Vec3::new(0.2, 0.95, 0.0);
        let dir = slope_move_direction(Vec3::new(1.0, 0.0, -1.0), n);
        assert!(dir.dot(&n).abs() < 1.0e-6);
    }
}
