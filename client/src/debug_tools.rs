//! Debug/performance tooling for native dev builds.
//!
//! Gated behind `dev_native` in `main.rs`. Adds the perf overlay and draws the
//! motor's probes.

use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, SystemInformationDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy::render::diagnostic::RenderDiagnosticsPlugin;
use iyes_perf_ui::prelude::*;
use motor::GroundState;

use crate::{
    convert::from_motor_vec3,
    player::{Motor, Player},
};

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        SystemInformationDiagnosticsPlugin::default(),
        RenderDiagnosticsPlugin,
        PerfUiPlugin,
    ));

    app.add_systems(Startup, spawn_perf_ui);
    app.add_systems(Update, draw_probes);
}

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn(PerfUiAllEntries::default());
}

/// Foot sphere, slope normal and wall rays. Hits are green, misses red.
fn draw_probes(mut gizmos: Gizmos, players: Query<(&Transform, &Motor), With<Player>>) {
    let hit = Color::srgb(0.2, 0.9, 0.3);
    let miss = Color::srgb(0.9, 0.2, 0.2);

    for (transform, motor) in &players {
        let config = motor.config();
        let state = motor.state();
        let origin = transform.translation;

        let foot = origin - Vec3::Y * config.ground_check_offset;
        let foot_color = if state.ground.is_grounded() { hit } else { miss };
        gizmos.sphere(
            Isometry3d::from_translation(foot),
            config.ground_check_radius,
            foot_color,
        );

        if let GroundState::OnSlope { normal } = state.ground {
            gizmos.arrow(foot, foot + from_motor_vec3(&normal), Color::srgb(1.0, 1.0, 0.2));
        }

        let right = from_motor_vec3(&state.look.right());
        for (dir, probe) in [(-right, state.walls.left), (right, state.walls.right)] {
            let color = if probe.is_some() { hit } else { miss };
            gizmos.ray(origin, dir * config.wall_distance, color);
        }
    }
}
