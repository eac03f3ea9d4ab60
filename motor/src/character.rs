use crate::{
    body::MotorBody,
    config::{ConfigError, MotorConfig},
    fov::smooth_fov,
    ground::{GroundProbe, GroundState},
    input::{ButtonLatch, MotorInput, move_intent},
    look::Look,
    mover::{apply_movement, try_jump},
    query::SpatialQuery,
    speed::{SpeedTarget, drag_for, smooth_speed},
    types::{Quat, Vec2, Vec3, up},
    wallrun::{WallProbe, WallRun, WallRunStep, WallRunTransition, can_wall_run},
};

/// Mutable per-tick motor state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    /// Raw movement axes from the last variable tick.
    pub movement: Vec2,
    /// World-space move intent (unnormalized).
    pub intent: Vec3,
    /// Effective (smoothed) move speed.
    pub speed: f32,
    pub speed_target: SpeedTarget,
    pub ground: GroundState,
    /// Last slope normal the slope probe reported. Kept across ticks without a hit.
    pub slope_normal: Vec3,
    pub walls: WallProbe,
    pub wall_run: WallRun,
    pub look: Look,
    /// Current field of view (degrees).
    pub fov: f32,
    pub crouched: bool,
}

impl MotionState {
    /// Neutral state: airborne, free, level look, base FOV, walking speed.
    pub fn neutral(config: &MotorConfig) -> Self {
        Self {
            movement: Vec2::zeros(),
            intent: Vec3::zeros(),
            speed: config.walk_speed,
            speed_target: SpeedTarget::Walk,
            ground: GroundState::Airborne,
            slope_normal: up(),
            walls: WallProbe::default(),
            wall_run: WallRun::default(),
            look: Look::default(),
            fov: config.base_fov,
            crouched: false,
        }
    }
}

/// Values the host writes to its camera / transforms after a variable tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    /// Camera rotation (pitch, yaw, wall-run roll).
    pub look_rotation: Quat,
    /// Yaw-only rotation for the body's orientation transform.
    pub body_rotation: Quat,
    pub field_of_view_deg: f32,
    /// Non-uniform scale for the visual capsule (crouch posture).
    pub visual_scale: Vec3,
    pub ground: GroundState,
    pub jumped: bool,
}

/// Result of one fixed tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedOutput {
    /// Acceleration-mode movement force applied this tick.
    pub movement_force: Vec3,
    pub wall_run: WallRunStep,
}

/// First-person character motor.
///
/// Call [`update`](Self::update) once per rendered frame and
/// [`fixed_update`](Self::fixed_update) once per physics tick, before the
/// physics step integrates the body.
#[derive(Clone, Debug)]
pub struct CharacterMotor {
    config: MotorConfig,
    state: MotionState,
    jump_latch: ButtonLatch,
    wall_jump_latch: ButtonLatch,
    /// Wall-jump press seen by the variable tick, waiting for the next fixed tick.
    wall_jump_pending: bool,
}

impl CharacterMotor {
    /// Build a motor. The config is expected to be valid (checked in debug builds).
    pub fn new(config: MotorConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid motor config");
        let state = MotionState::neutral(&config);
        Self {
            config,
            state,
            jump_latch: ButtonLatch::default(),
            wall_jump_latch: ButtonLatch::default(),
            wall_jump_pending: false,
        }
    }

    pub fn try_new(config: MotorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &MotorConfig {
        &self.config
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Camera roll in degrees.
    pub fn tilt(&self) -> f32 {
        self.state.wall_run.tilt
    }

    /// Variable-rate phase: input, classification, drag/speed, jump, cosmetics.
    pub fn update(
        &mut self,
        input: &MotorInput,
        dt: f32,
        body: &mut impl MotorBody,
        query: &impl SpatialQuery,
    ) -> FrameOutput {
        let config = &self.config;
        let state = &mut self.state;

        // 1) Input → look and move intent (un-tilted yaw basis).
        state.look.apply_delta(config, input.look);
        state.movement = input.movement;
        state.intent = move_intent(input.movement, state.look.forward(), state.look.right());

        // 2) Fresh ground/slope classification.
        let probe = GroundProbe::sample(query, config, body.position());
        if let Some(normal) = probe.slope_normal() {
            state.slope_normal = normal;
        }
        state.ground = probe.classify();
        let grounded = state.ground.is_grounded();

        // 3) Drag and speed.
        body.set_drag(drag_for(config, grounded));
        state.speed_target = SpeedTarget::select(input.crouch, input.sprint, grounded);
        state.speed = smooth_speed(config, state.speed, state.speed_target, dt);
        state.crouched = input.crouch;

        // 4) Jump (edge-triggered).
        let jumped = self.jump_latch.update(input.jump) && try_jump(body, config, grounded);
        if jumped {
            log::debug!("jump at {:?}", body.position());
        }

        if self.wall_jump_latch.update(input.wall_jump) {
            self.wall_jump_pending = true;
        }

        // 5) Cosmetics.
        state.fov = smooth_fov(config, state.fov, input.run_view, dt);
        let visual_scale = if state.crouched {
            Vec3::new(1.0, config.crouch_scale_y, 1.0)
        } else {
            Vec3::new(1.0, 1.0, 1.0)
        };

        FrameOutput {
            look_rotation: state.look.camera_rotation(state.wall_run.tilt),
            body_rotation: state.look.body_rotation(),
            field_of_view_deg: state.fov,
            visual_scale,
            ground: state.ground,
            jumped,
        }
    }

    /// Fixed-rate phase: movement force, wall probes, wall-run state machine.
    pub fn fixed_update(
        &mut self,
        dt: f32,
        body: &mut impl MotorBody,
        query: &impl SpatialQuery,
    ) -> FixedOutput {
        let config = &self.config;
        let state = &mut self.state;

        let movement_force = apply_movement(
            body,
            config,
            state.ground,
            state.intent,
            state.slope_normal,
            state.speed,
        );

        let position = body.position();
        state.walls = WallProbe::sample(query, config, position, state.look.right());
        let can_run = can_wall_run(query, config, position);
        let jump_pressed = std::mem::take(&mut self.wall_jump_pending);

        let step = state
            .wall_run
            .step(config, body, &state.walls, can_run, jump_pressed, dt);

        match step.transition {
            WallRunTransition::Entered(side) => log::debug!("wall-run started ({side:?})"),
            WallRunTransition::Switched(side) => log::debug!("wall-run switched to {side:?}"),
            WallRunTransition::Left => log::debug!("wall-run ended"),
            WallRunTransition::Unchanged => {}
        }
        if let Some(force) = step.wall_jump {
            log::debug!("wall jump {force:?}");
        }

        FixedOutput {
            movement_force,
            wall_run: step,
        }
    }
}
