//! Cleanup system: culls cannonballs that can never hit anything again.
//!
//! Shots have no fuse; the gravity droop sinks every ball eventually,
//! and anything that drifts past the world radius is out of play. Uses
//! a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use corsair_core::components::{CannonBall, PlayerShip, RenderHandle};
use corsair_core::constants::{CANNONBALL_SINK_DEPTH, WORLD_RADIUS};
use corsair_core::types::Position;

use crate::scene::RenderScene;

/// Remove sunk and out-of-range cannonballs.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, scene: &mut dyn RenderScene) {
    despawn_buffer.clear();

    let player_pos = {
        let mut query = world.query::<(&PlayerShip, &Position)>();
        match query.iter().next() {
            Some((_, (_, pos))) => pos.0,
            None => return,
        }
    };

    let radius_sq = WORLD_RADIUS * WORLD_RADIUS;
    for (entity, (_ball, pos, handle)) in
        world.query_mut::<(&CannonBall, &Position, &RenderHandle)>()
    {
        let dx = pos.0.x - player_pos.x;
        let dz = pos.0.z - player_pos.z;
        let range_sq = dx * dx + dz * dz;
        if pos.0.y < CANNONBALL_SINK_DEPTH || range_sq > radius_sq {
            scene.remove(handle.id);
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
