//! The simulated body the motor drives.
//!
//! The motor never owns a body. It reads position/velocity and issues writes
//! each tick; the physics step that integrates them runs afterwards.

use crate::types::{ForceMode, Vec3};

/// Capabilities the motor needs from an externally owned rigid body.
pub trait MotorBody {
    /// World-space position of the body origin.
    fn position(&self) -> Vec3;

    fn linear_velocity(&self) -> Vec3;

    fn set_linear_velocity(&mut self, velocity: Vec3);

    /// Linear drag (damping) coefficient.
    fn set_drag(&mut self, drag: f32);

    fn set_gravity_enabled(&mut self, enabled: bool);

    /// Apply a force according to `mode`.
    fn add_force(&mut self, force: Vec3, mode: ForceMode);
}

/// A single recorded body write.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyCommand {
    SetLinearVelocity(Vec3),
    SetDrag(f32),
    SetGravityEnabled(bool),
    AddForce { force: Vec3, mode: ForceMode },
}

/// A recording [`MotorBody`].
///
/// Starts from a snapshot of the real body, records writes in order, and keeps
/// its own velocity up to date so reads after writes stay consistent within a
/// tick. Call [`BodyCommands::replay`] to push the writes onto the real body.
///
/// This lets hosts run the motor while the physics world is borrowed for
/// queries, and apply the writes once the borrow ends.
#[derive(Clone, Debug)]
pub struct BodyCommands {
    position: Vec3,
    linear_velocity: Vec3,
    commands: Vec<BodyCommand>,
}

impl BodyCommands {
    pub fn new(position: Vec3, linear_velocity: Vec3) -> Self {
        Self {
            position,
            linear_velocity,
            commands: Vec::new(),
        }
    }

    /// Snapshot any body.
    pub fn snapshot(body: &impl MotorBody) -> Self {
        Self::new(body.position(), body.linear_velocity())
    }

    pub fn commands(&self) -> &[BodyCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Apply recorded writes, in order, to `target`.
    pub fn replay(self, target: &mut impl MotorBody) {
        for command in self.commands {
            match command {
                BodyCommand::SetLinearVelocity(v) => target.set_linear_velocity(v),
                BodyCommand::SetDrag(d) => target.set_drag(d),
                BodyCommand::SetGravityEnabled(g) => target.set_gravity_enabled(g),
                BodyCommand::AddForce { force, mode } => target.add_force(force, mode),
            }
        }
    }
}

impl MotorBody for BodyCommands {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn linear_velocity(&self) -> Vec3 {
        self.linear_velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.linear_velocity = velocity;
        self.commands.push(BodyCommand::SetLinearVelocity(velocity));
    }

    fn set_drag(&mut self, drag: f32) {
        self.commands.push(BodyCommand::SetDrag(drag));
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.commands.push(BodyCommand::SetGravityEnabled(enabled));
    }

    fn add_force(&mut self, force: Vec3, mode: ForceMode) {
        // Forces are integrated by the physics step; the snapshot velocity is left as-is.
        self.commands.push(BodyCommand::AddForce { force, mode });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeBody;

    #[test]
    fn replay_preserves_write_order() {
        let mut recorder = BodyCommands::new(Vec3::zeros(), Vec3::new(1.0, -3.0, 2.0));
        let v = recorder.linear_velocity();
        recorder.set_linear_velocity(Vec3::new(v.x, 0.0, v.z));
        recorder.add_force(Vec3::new(0.0, 5.0, 0.0), ForceMode::Impulse);
        recorder.set_drag(6.0);
        recorder.set_gravity_enabled(false);

        // Reads after a write see the written value.
        assert_eq!(recorder.linear_velocity(), Vec3::new(1.0, 0.0, 2.0));

        let mut body = FakeBody::default();
        recorder.replay(&mut body);

        assert_eq!(body.velocity, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(body.drag, 6.0);
        assert!(!body.gravity_enabled);
        assert_eq!(
            body.forces,
            vec![(Vec3::new(0.0, 5.0, 0.0), ForceMode::Impulse)]
        );
    }

    #[test]
    fn snapshot_copies_position_and_velocity() {
        let body = FakeBody {
            position: Vec3::new(0.0, 3.0, 0.0),
            velocity: Vec3::new(0.0, -1.0, 0.0),
            ..FakeBody::default()
        };
        let recorder = BodyCommands::snapshot(&body);
        assert_eq!(recorder.position(), body.position);
        assert_eq!(recorder.linear_velocity(), body.velocity);
        assert!(recorder.is_empty());
    }
}
