//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Overall game lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No voyage in progress; the world is empty and ticks mutate nothing.
    #[default]
    Harbor,
    /// Active voyage: the player exists and all systems run each tick.
    Voyage,
    /// Terminal state. One-way: reached when hull integrity hits zero.
    GameOver,
}

/// Kind of simulated entity, used for render-scene registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    PlayerShip,
    Pirate,
    Treasure,
    CannonBall,
}

/// Camera framing mode. The core positions the rig; the host renders it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMode {
    /// Behind-the-ship chase view.
    #[default]
    Chase,
    /// Straight-down overview.
    TopDown,
}

/// Discrete throttle lever state (-1, 0, +1 acceleration input).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrottleInput {
    /// Decelerate.
    Astern,
    #[default]
    Neutral,
    /// Accelerate.
    Ahead,
}

impl ThrottleInput {
    /// Signed acceleration multiplier.
    pub fn value(self) -> f64 {
        match self {
            ThrottleInput::Astern => -1.0,
            ThrottleInput::Neutral => 0.0,
            ThrottleInput::Ahead => 1.0,
        }
    }
}

/// Discrete rudder state (-1, 0, +1 turn input).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RudderInput {
    /// Turn to port (positive rotation about the up-axis).
    Port,
    #[default]
    Neutral,
    /// Turn to starboard.
    Starboard,
}

impl RudderInput {
    /// Signed turn multiplier.
    pub fn value(self) -> f64 {
        match self {
            RudderInput::Port => 1.0,
            RudderInput::Neutral => 0.0,
            RudderInput::Starboard => -1.0,
        }
    }
}
