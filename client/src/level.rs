//! Static test course: a floor plane, a ramp, a launch block and two parallel
//! wall-run slabs.

use bevy::prelude::*;
use motor::{Layer, WorldStaticDef};

use crate::{
    convert::{to_motor_quat, to_motor_vec3},
    physics::Physics,
};

struct Piece {
    center: Vec3,
    half_extents: Vec3,
    rotation: Quat,
    layer: Layer,
}

impl Piece {
    fn new(center: Vec3, half_extents: Vec3, layer: Layer) -> Self {
        Self {
            center,
            half_extents,
            rotation: Quat::IDENTITY,
            layer,
        }
    }

    fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}

fn course() -> Vec<Piece> {
    vec![
        // 20 degree ramp rising toward -Z.
        Piece::new(Vec3::new(8.0, 1.0, -10.0), Vec3::new(3.0, 0.25, 6.0), Layer::Ground)
            .rotated(Quat::from_rotation_x(20f32.to_radians())),
        // Wall-run corridor along -Z, 3.5m clear between the slabs.
        Piece::new(Vec3::new(-6.0, 4.0, -15.0), Vec3::new(0.25, 4.0, 12.0), Layer::Wall),
        Piece::new(Vec3::new(-2.0, 4.0, -15.0), Vec3::new(0.25, 4.0, 12.0), Layer::Wall),
        // Launch block at the corridor mouth.
        Piece::new(Vec3::new(-4.0, 1.0, -1.0), Vec3::new(1.0, 1.0, 1.0), Layer::Ground),
    ]
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_level);
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut physics: ResMut<Physics>,
) {
    let ground = materials.add(StandardMaterial {
        base_color: Color::linear_rgb(0.2, 0.3, 0.25),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    });
    let wall = materials.add(Color::srgb_u8(124, 144, 255));

    // Collision is an infinite plane; the mesh only needs to cover the course.
    physics.insert_static(&WorldStaticDef::plane(0, to_motor_vec3(Vec3::ZERO), Layer::Ground));
    commands.spawn((
        Name::new("Floor"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(80., 80.).build())),
        MeshMaterial3d(ground.clone()),
        Transform::default(),
    ));

    for (id, piece) in (1u32..).zip(course()) {
        let def = WorldStaticDef::cuboid(
            id,
            to_motor_vec3(piece.center),
            to_motor_vec3(piece.half_extents),
            piece.layer,
        )
        .with_rotation(to_motor_quat(piece.rotation));
        physics.insert_static(&def);

        let size = piece.half_extents * 2.0;
        let material = match piece.layer {
            Layer::Wall => wall.clone(),
            _ => ground.clone(),
        };
        commands.spawn((
            Name::new(format!("Static{id}")),
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(material),
            Transform::from_translation(piece.center).with_rotation(piece.rotation),
        ));
    }
    physics.refresh_queries();
    info!("level ready");

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 12.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
