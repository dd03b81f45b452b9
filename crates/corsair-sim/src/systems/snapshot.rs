//! Snapshot system: queries the ECS world and builds a complete GameSnapshot.
//!
//! This system is read-only — it never modifies the world. The cosmetic
//! wave bob is applied here, to the view transforms only; simulation
//! positions and bounding boxes are untouched.

use hecs::World;

use corsair_core::components::*;
use corsair_core::constants::*;
use corsair_core::enums::GamePhase;
use corsair_core::events::GameEvent;
use corsair_core::state::*;
use corsair_core::types::{Position, SimTime, Yaw};

use crate::engine::{CameraRig, HullState};

/// Build a complete GameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    hull_state: &HullState,
    camera: &CameraRig,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        score: hull_state.score,
        health: hull_state.health.clamp(0, 100),
        game_over: hull_state.game_over,
        player: build_player(world, time.elapsed_secs),
        treasures: build_treasures(world, time.elapsed_secs),
        pirates: build_pirates(world, time.elapsed_secs),
        cannonballs: build_cannonballs(world),
        camera: camera.view(),
        events,
    }
}

fn build_player(world: &World, t: f64) -> Option<PlayerView> {
    world
        .query::<(&PlayerShip, &Position, &Yaw, &RenderHandle)>()
        .iter()
        .next()
        .map(|(_, (ship, pos, yaw, handle))| {
            let mut position = pos.0;
            position.y = (t * PLAYER_BOB_FREQ).sin() * PLAYER_BOB_AMP + PLAYER_BOB_LIFT;
            PlayerView {
                render_id: handle.id,
                position,
                yaw: yaw.radians,
                roll: (t * PLAYER_ROLL_FREQ).cos() * PLAYER_ROLL_AMP,
                heading: ship.heading,
                speed: ship.speed,
            }
        })
}

fn build_treasures(world: &World, t: f64) -> Vec<TreasureView> {
    let mut views: Vec<TreasureView> = world
        .query::<(&Treasure, &Position, &RenderHandle)>()
        .iter()
        .map(|(_, (_, pos, handle))| {
            let mut position = pos.0;
            position.y = t.sin() * TREASURE_BOB_AMP + TREASURE_BOB_LIFT;
            TreasureView {
                render_id: handle.id,
                position,
                pitch: t.cos() * TREASURE_TILT_AMP,
                roll: t.sin() * TREASURE_TILT_AMP,
            }
        })
        .collect();

    views.sort_by_key(|v| v.render_id);
    views
}

fn build_pirates(world: &World, t: f64) -> Vec<PirateView> {
    let mut views: Vec<PirateView> = world
        .query::<(&Pirate, &Position, &Yaw, &RenderHandle)>()
        .iter()
        .map(|(_, (_, pos, yaw, handle))| {
            let mut position = pos.0;
            position.y = t.cos() * PIRATE_BOB_AMP - PIRATE_BOB_SINK;
            PirateView {
                render_id: handle.id,
                position,
                yaw: yaw.radians,
            }
        })
        .collect();

    views.sort_by_key(|v| v.render_id);
    views
}

fn build_cannonballs(world: &World) -> Vec<CannonBallView> {
    let mut views: Vec<CannonBallView> = world
        .query::<(&CannonBall, &Position, &RenderHandle)>()
        .iter()
        .map(|(_, (_, pos, handle))| CannonBallView {
            render_id: handle.id,
            position: pos.0,
        })
        .collect();

    views.sort_by_key(|v| v.render_id);
    views
}
