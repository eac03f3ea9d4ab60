use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use motor::MotorInput;

use crate::convert::to_motor_vec2;

/// Mouse pixels per unit of look axis.
const MOUSE_PIXELS_PER_AXIS: f32 = 10.0;

#[derive(Actionlike, Reflect, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    #[actionlike(DualAxis)]
    Move,
    #[actionlike(DualAxis)]
    Look,
    Jump,
    Sprint,
    Crouch,
    RunView,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<PlayerAction>::default());

    app.register_type::<PlayerAction>();

    let input_map = InputMap::<PlayerAction>::default()
        .with_dual_axis(PlayerAction::Move, VirtualDPad::wasd())
        .with_dual_axis(PlayerAction::Look, MouseMove::default())
        .with(PlayerAction::Jump, KeyCode::Space)
        .with(PlayerAction::Sprint, KeyCode::ShiftLeft)
        .with(PlayerAction::Crouch, KeyCode::ControlLeft)
        .with(PlayerAction::RunView, KeyCode::ShiftLeft);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<PlayerAction>::default());
}

/// Held state for one frame. Jump doubles as the wall-jump key.
pub fn motor_input(actions: &ActionState<PlayerAction>) -> MotorInput {
    let movement = actions.clamped_axis_pair(&PlayerAction::Move);
    // Mouse y grows downward; the motor wants up positive.
    let look = actions.axis_pair(&PlayerAction::Look) / MOUSE_PIXELS_PER_AXIS;
    let jump = actions.pressed(&PlayerAction::Jump);

    MotorInput {
        movement: to_motor_vec2(movement),
        look: to_motor_vec2(Vec2::new(look.x, -look.y)),
        jump,
        sprint: actions.pressed(&PlayerAction::Sprint),
        crouch: actions.pressed(&PlayerAction::Crouch),
        run_view: actions.pressed(&PlayerAction::RunView),
        wall_jump: jump,
    }
}
