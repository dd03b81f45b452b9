//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::types::RenderId;

/// The player's ship. Exactly one exists during a voyage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerShip {
    /// Unit forward direction.
    pub heading: DVec3,
    /// Current speed (units/tick), clamped to [0, PLAYER_MAX_SPEED].
    pub speed: f64,
    /// Latched throttle lever state from the host.
    pub accel_input: crate::enums::ThrottleInput,
    /// Latched rudder state from the host.
    pub turn_input: crate::enums::RudderInput,
}

/// An enemy ship that homes on the player and fires on a cooldown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pirate {
    /// Elapsed-clock timestamp of the last shot (seconds).
    pub last_fired_secs: f64,
}

/// A collectible treasure chest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Treasure {
    pub points: i64,
}

/// A cannonball in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CannonBall {
    /// Flight direction: normalized at launch, then biased downward by
    /// CANNONBALL_DROOP. Constant for the projectile's lifetime.
    pub direction: DVec3,
    /// Speed (units/tick), fixed at launch.
    pub speed: f64,
    pub damage: i32,
    /// Who fired it. Lets the collision system apply the friendly-fire policy.
    pub shot_by: EntityKind,
}

/// Collision hull dimensions. The bounding box is recomputed from these
/// plus the current position whenever the entity moves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    pub half_extents: DVec3,
}

/// Link to the renderable object the external scene holds for this entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RenderHandle {
    pub id: RenderId,
    pub kind: EntityKind,
}

// Position, Yaw, and Aabb (defined in types.rs) are used as components too.
