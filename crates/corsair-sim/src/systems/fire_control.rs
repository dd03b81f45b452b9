//! Fire control: pirate cooldown gating and cannonball launches.
//!
//! The pirate pass runs every tick for every pirate. A pirate may fire
//! only once its cooldown has elapsed; firing updates the cooldown
//! timestamp atomically with the projectile spawn.

use glam::DVec3;
use hecs::World;

use corsair_core::components::{Pirate, PlayerShip};
use corsair_core::constants::*;
use corsair_core::enums::EntityKind;
use corsair_core::events::GameEvent;
use corsair_core::types::Position;

use crate::scene::RenderScene;
use crate::world_setup;

/// Run the pirate fire-control pass for one tick.
pub fn run(
    world: &mut World,
    elapsed_secs: f64,
    scene: &mut dyn RenderScene,
    events: &mut Vec<GameEvent>,
) {
    let (player_pos, player_speed) = {
        let mut query = world.query::<(&PlayerShip, &Position)>();
        match query.iter().next() {
            Some((_, (ship, pos))) => (pos.0, ship.speed),
            None => return,
        }
    };

    // Pirate shots lead harder the faster the player sails.
    let shot_speed = if player_speed < STANDSTILL_THRESHOLD {
        PIRATE_STANDSTILL_SHOT_SPEED
    } else {
        PIRATE_SHOT_SPEED_FACTOR * player_speed
    };

    // Two phases: resolve eligible shots against a point-in-time view of
    // the pirates, then spawn. Spawning mid-query would alias the world.
    let mut shots: Vec<(DVec3, DVec3)> = Vec::new();
    for (_entity, (pirate, pos)) in world.query_mut::<(&mut Pirate, &Position)>() {
        if elapsed_secs < pirate.last_fired_secs + PIRATE_FIRE_COOLDOWN_SECS {
            continue;
        }
        let to_player = player_pos - pos.0;
        if to_player.length_squared() < f64::EPSILON {
            continue;
        }
        let dir = to_player.normalize();
        shots.push((pos.0 + dir * PIRATE_LAUNCH_OFFSET, dir));
        pirate.last_fired_secs = elapsed_secs;
    }

    for (origin, dir) in shots {
        let muzzle = DVec3::new(origin.x, CANNONBALL_ALTITUDE, origin.z);
        world_setup::spawn_cannonball(world, muzzle, dir, shot_speed, EntityKind::Pirate, scene);
        events.push(GameEvent::CannonFired {
            by: EntityKind::Pirate,
            speed: shot_speed,
        });
        log::debug!("pirate fired, shot speed {shot_speed}");
    }
}

/// Player fire action, triggered by the FireCannon command.
/// Launches along the current heading from just ahead of the bow.
pub fn player_fire(world: &mut World, scene: &mut dyn RenderScene, events: &mut Vec<GameEvent>) {
    let (player_pos, heading, player_speed) = {
        let mut query = world.query::<(&PlayerShip, &Position)>();
        match query.iter().next() {
            Some((_, (ship, pos))) => (pos.0, ship.heading, ship.speed),
            None => return,
        }
    };

    let shot_speed = if player_speed < STANDSTILL_THRESHOLD {
        PLAYER_STANDSTILL_SHOT_SPEED
    } else {
        PLAYER_SHOT_SPEED_FACTOR * player_speed
    };

    let start = player_pos + heading * PLAYER_LAUNCH_OFFSET;
    let muzzle = DVec3::new(start.x, CANNONBALL_ALTITUDE, start.z);
    world_setup::spawn_cannonball(
        world,
        muzzle,
        heading,
        shot_speed,
        EntityKind::PlayerShip,
        scene,
    );
    events.push(GameEvent::CannonFired {
        by: EntityKind::PlayerShip,
        speed: shot_speed,
    });
    log::info!("cannon away, shot speed {shot_speed}");
}
