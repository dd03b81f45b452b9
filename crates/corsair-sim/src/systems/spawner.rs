//! Population replenishment: keeps the treasure and pirate populations
//! at their floors.
//!
//! The floor is the invariant, not a batch size: the full deficit is
//! spawned the same tick a population falls short, scattered around the
//! player's current position.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use corsair_core::components::{Pirate, PlayerShip, Treasure};
use corsair_core::constants::{PIRATE_FLOOR, TREASURE_FLOOR};
use corsair_core::types::Position;

use crate::scene::RenderScene;
use crate::world_setup;

/// Check populations and spawn any deficit.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    now_secs: f64,
    scene: &mut dyn RenderScene,
) {
    let player_pos = {
        let mut query = world.query::<(&PlayerShip, &Position)>();
        match query.iter().next() {
            Some((_, (_, pos))) => pos.0,
            None => return,
        }
    };

    let treasure_count = {
        let mut query = world.query::<&Treasure>();
        query.iter().count()
    };
    if treasure_count < TREASURE_FLOOR {
        let deficit = TREASURE_FLOOR - treasure_count;
        for _ in 0..deficit {
            world_setup::spawn_treasure(world, rng, player_pos, scene);
        }
        log::debug!("replenished {deficit} treasures");
    }

    let pirate_count = {
        let mut query = world.query::<&Pirate>();
        query.iter().count()
    };
    if pirate_count < PIRATE_FLOOR {
        let deficit = PIRATE_FLOOR - pirate_count;
        for _ in 0..deficit {
            world_setup::spawn_pirate(world, rng, player_pos, now_secs, scene);
        }
        log::debug!("replenished {deficit} pirates");
    }
}
