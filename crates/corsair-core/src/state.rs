//! Game state snapshot — the complete visible state sent to the host each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{RenderId, SimTime};

/// Complete game state handed to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Accumulated treasure points.
    pub score: i64,
    /// Hull integrity for display, clamped to [0, 100].
    pub health: i32,
    /// Terminal flag. Once true it never reverts.
    pub game_over: bool,
    /// Absent before StartVoyage.
    pub player: Option<PlayerView>,
    pub treasures: Vec<TreasureView>,
    pub pirates: Vec<PirateView>,
    pub cannonballs: Vec<CannonBallView>,
    pub camera: CameraView,
    pub events: Vec<GameEvent>,
}

/// Player transform for the renderer. Position and roll carry the cosmetic
/// wave bob; the simulation itself keeps the ship at the waterline.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub render_id: RenderId,
    pub position: DVec3,
    pub yaw: f64,
    /// Cosmetic roll about the forward axis.
    pub roll: f64,
    pub heading: DVec3,
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TreasureView {
    pub render_id: RenderId,
    pub position: DVec3,
    /// Cosmetic tilt angles.
    pub pitch: f64,
    pub roll: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PirateView {
    pub render_id: RenderId,
    pub position: DVec3,
    pub yaw: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CannonBallView {
    pub render_id: RenderId,
    pub position: DVec3,
}

/// Camera rig state the host should frame with.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub mode: CameraMode,
    pub position: DVec3,
    pub look_at: DVec3,
}
