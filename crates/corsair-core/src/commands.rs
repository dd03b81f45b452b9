//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new voyage (spawns the player and the initial population).
    /// Also restarts after game over.
    StartVoyage,
    /// Latch the throttle lever. Stays in effect until the next SetThrottle.
    SetThrottle { input: ThrottleInput },
    /// Latch the rudder. Stays in effect until the next SetRudder.
    SetRudder { input: RudderInput },
    /// Fire the player's cannon along the current heading.
    FireCannon,
    /// Switch the camera rig mode.
    SetCameraMode { mode: CameraMode },
}
