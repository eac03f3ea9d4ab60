use bevy::prelude::*;

use crate::{
    convert::from_motor_quat,
    player::{MotorFrame, MotorSystems, Player},
};

/// Eye height above the body origin.
const EYE_OFFSET: Vec3 = Vec3::new(0.0, 0.6, 0.0);

#[derive(Component)]
pub struct PlayerCamera;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
    app.add_systems(Update, follow_player.after(MotorSystems::Sync));
}

fn add_camera(mut commands: Commands) {
    commands.spawn((
        PlayerCamera,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: motor::constants::BASE_FOV.to_radians(),
            ..default()
        }),
        bevy::core_pipeline::tonemapping::Tonemapping::AcesFitted,
        Transform::from_translation(EYE_OFFSET),
        DistanceFog {
            color: Color::srgba(0.35, 0.48, 0.66, 1.0),
            directional_light_color: Color::srgba(1.0, 0.95, 0.85, 0.5),
            directional_light_exponent: 30.0,
            falloff: FogFalloff::from_visibility_colors(
                1000.0, // Fog distance
                Color::srgb(0.35, 0.5, 0.66),
                Color::srgb(0.8, 0.8, 0.7),
            ),
        },
    ));
}

/// Eye position, look rotation (with wall-run roll) and dynamic FOV.
fn follow_player(
    mut camera: Single<(&mut Transform, &mut Projection), With<PlayerCamera>>,
    player: Single<(&Transform, &MotorFrame), (With<Player>, Without<PlayerCamera>)>,
) {
    let (body_tf, frame) = *player;
    let (cam_tf, projection) = &mut *camera;

    cam_tf.translation = body_tf.translation + EYE_OFFSET;
    cam_tf.rotation = from_motor_quat(&frame.0.look_rotation);

    if let Projection::Perspective(perspective) = &mut **projection {
        perspective.fov = frame.0.field_of_view_deg.to_radians();
    }
}
