use bevy::prelude::*;
use motor::MotorWorld;

/// Physics tick rate (Hz).
pub const FIXED_HZ: f64 = 50.0;

/// The Rapier world the motor drives. Stepped once per fixed tick after the
/// motor's fixed phase.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct Physics(pub MotorWorld);

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhysicsStepSystems;

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ));
    app.init_resource::<Physics>();
    app.add_systems(FixedUpdate, step_physics.in_set(PhysicsStepSystems));
}

fn step_physics(mut physics: ResMut<Physics>, time: Res<Time<Fixed>>) {
    physics.step(time.delta_secs());
}
