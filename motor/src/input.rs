use crate::types::{Vec2, Vec3};

/// Raw device state for one variable-rate tick.
///
/// Everything is *held* state; edges are derived by the motor. A missing
/// device is simply `MotorInput::default()`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotorInput {
    /// `x` = strafe (right positive), `y` = forward (forward positive). Roughly `[-1, 1]`.
    pub movement: Vec2,
    /// Look delta for this tick. `x` = right positive, `y` = up positive.
    pub look: Vec2,
    pub jump: bool,
    pub sprint: bool,
    pub crouch: bool,
    /// Field-of-view boost key.
    pub run_view: bool,
    /// Wall-jump key. Hosts usually bind this to the same key as `jump`.
    pub wall_jump: bool,
}

/// Rising-edge detector for a held button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonLatch {
    was_held: bool,
}

impl ButtonLatch {
    /// Feed the current held state; returns `true` only on a not-held → held transition.
    #[inline]
    pub fn update(&mut self, held: bool) -> bool {
        let pressed = held && !self.was_held;
        self.was_held = held;
        pressed
    }
}

/// Compose the world-space move intent from a yaw-only basis.
///
/// Not normalized: diagonal input is longer than straight input.
#[inline]
pub fn move_intent(movement: Vec2, forward: Vec3, right: Vec3) -> Vec3 {
    forward * movement.y + right * movement.x
}
