use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use motor::{
    CharacterMotor, FrameOutput, MotorConfig, PlayerBodyDef, rapier3d::prelude::RigidBodyHandle,
};

use crate::{
    convert::{from_motor_quat, from_motor_vec3, to_motor_vec3},
    input::{PlayerAction, motor_input},
    level,
    physics::{Physics, PhysicsStepSystems},
};

const SPAWN_POINT: Vec3 = Vec3::new(0.0, 2.0, 6.0);

/// Tunables for the local player's motor. Read once when the player spawns.
#[derive(Resource, Default)]
pub struct MotorSettings(pub MotorConfig);

#[derive(Component)]
pub struct Player {
    pub body: RigidBodyHandle,
}

#[derive(Component, Deref, DerefMut)]
pub struct Motor(pub CharacterMotor);

/// Last variable-tick output, consumed by the camera.
#[derive(Component, Clone, Copy, Debug)]
pub struct MotorFrame(pub FrameOutput);

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotorSystems {
    Update,
    Sync,
}

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<MotorSettings>();
    // Statics first so the player's first frame can already query them.
    app.add_systems(Startup, spawn_player.after(level::spawn_level));
    app.configure_sets(Update, (MotorSystems::Update, MotorSystems::Sync).chain());
    app.add_systems(Update, update_motor.in_set(MotorSystems::Update));
    app.add_systems(Update, sync_player_transform.in_set(MotorSystems::Sync));
    app.add_systems(
        FixedUpdate,
        fixed_update_motor.before(PhysicsStepSystems),
    );
}

fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut physics: ResMut<Physics>,
    settings: Res<MotorSettings>,
) {
    let motor = match CharacterMotor::try_new(settings.0.clone()) {
        Ok(motor) => motor,
        Err(err) => {
            error!("invalid motor settings ({err}), using defaults");
            CharacterMotor::new(MotorConfig::default())
        }
    };

    let def = PlayerBodyDef {
        translation: to_motor_vec3(SPAWN_POINT),
        ..PlayerBodyDef::default()
    };
    let body = physics.spawn_player(&def);
    info!("player body {body:?} spawned at {SPAWN_POINT}");

    commands.spawn((
        Name::new("Player"),
        Player { body },
        Motor(motor),
        Mesh3d(meshes.add(Capsule3d {
            radius: def.radius,
            half_length: def.half_height,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::linear_rgb(0.2, 0.9, 0.8),
            ..default()
        })),
        Transform::from_translation(SPAWN_POINT),
    ));
}

fn update_motor(
    mut commands: Commands,
    mut physics: ResMut<Physics>,
    actions: Res<ActionState<PlayerAction>>,
    time: Res<Time>,
    mut players: Query<(Entity, &Player, &mut Motor)>,
) {
    let input = motor_input(&actions);
    let dt = time.delta_secs();
    for (entity, player, mut motor) in &mut players {
        let Some(frame) =
            physics.drive(player.body, |body, query| motor.update(&input, dt, body, query))
        else {
            continue;
        };
        commands.entity(entity).insert(MotorFrame(frame));
    }
}

fn fixed_update_motor(
    mut physics: ResMut<Physics>,
    time: Res<Time<Fixed>>,
    mut players: Query<(&Player, &mut Motor)>,
) {
    let dt = time.delta_secs();
    for (player, mut motor) in &mut players {
        physics.drive(player.body, |body, query| motor.fixed_update(dt, body, query));
    }
}

/// Body pose onto the visual capsule: translation, yaw and crouch squash.
fn sync_player_transform(
    physics: Res<Physics>,
    mut players: Query<(&Player, &MotorFrame, &mut Transform)>,
) {
    for (player, frame, mut transform) in &mut players {
        let Some(body) = physics.body(player.body) else {
            continue;
        };
        transform.translation = from_motor_vec3(body.translation());
        transform.rotation = from_motor_quat(&frame.0.body_rotation);
        transform.scale = from_motor_vec3(&frame.0.visual_scale);
    }
}
