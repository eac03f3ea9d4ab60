pub mod body;
pub mod character;
pub mod config;
pub mod constants;
pub mod fov;
pub mod ground;
pub mod input;
pub mod layers;
pub mod look;
pub mod mover;
pub mod query;
pub mod rapier;
pub mod rapier_world;
pub mod speed;
pub mod types;
pub mod wallrun;

#[cfg(test)]
mod test_support;

pub use body::{BodyCommand, BodyCommands, MotorBody};
pub use character::{CharacterMotor, FixedOutput, FrameOutput, MotionState};
pub use config::{ConfigError, MotorConfig, SmoothingMode};
pub use ground::{GroundProbe, GroundState};
pub use input::{ButtonLatch, MotorInput};
pub use layers::{Layer, LayerMask};
pub use look::Look;
pub use query::SpatialQuery;
pub use rapier::{ColliderShapeDef, RapierQuery, WorldStaticDef, collider_from_def};
pub use rapier_world::{MotorWorld, PlayerBodyDef, rapier3d};
pub use speed::SpeedTarget;
pub use types::{ForceMode, Quat, RayHit, Side, Vec2, Vec3};
pub use wallrun::{WallProbe, WallRun, WallRunState, WallRunStep, WallRunTransition};
