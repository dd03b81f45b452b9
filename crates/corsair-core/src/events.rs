//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;

/// Per-tick events for the host's sound and HUD layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A cannonball was launched.
    CannonFired { by: EntityKind, speed: f64 },
    /// The player sailed over a treasure.
    TreasureCollected { points: i64, score: i64 },
    /// A cannonball struck the player.
    CannonImpact { damage: i32, health: i32 },
    /// A cannonball sank a pirate ship.
    PirateSunk,
    /// A pirate rammed the player (instant kill).
    PirateRammed,
    /// Hull integrity reached zero; the voyage is over.
    GameOver { score: i64, elapsed_secs: f64 },
}
