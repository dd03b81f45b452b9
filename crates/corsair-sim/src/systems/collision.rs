//! Collision resolution: ordered AABB passes and the resulting state
//! transitions.
//!
//! Pass order per tick is fixed and load-bearing for determinism:
//!   1. player x treasures (collect, score)
//!   2. player x cannonballs (hull damage)
//!   3. surviving cannonballs x pirates (mutual destruction, one pirate
//!      per cannonball at most)
//!   4. surviving pirates x player (instant-kill ramming)
//!   5. terminal check (health <= 0 ends the voyage)
//!
//! All passes compare point-in-time snapshots of the boxes the movement
//! systems refreshed earlier this tick; removals are collected into the
//! despawn buffer and committed at the end, so no entity is processed
//! after its removal within the same tick.

use hecs::{Entity, World};

use corsair_core::components::{CannonBall, Pirate, PlayerShip, RenderHandle, Treasure};
use corsair_core::enums::EntityKind;
use corsair_core::events::GameEvent;
use corsair_core::types::{Aabb, RenderId};

use crate::engine::HullState;
use crate::scene::RenderScene;

/// Run collision resolution for one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    hull_state: &mut HullState,
    friendly_fire: bool,
    elapsed_secs: f64,
    despawn_buffer: &mut Vec<Entity>,
    scene: &mut dyn RenderScene,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    let (player_box, player_render) = {
        let mut query = world.query::<(&PlayerShip, &Aabb, &RenderHandle)>();
        match query.iter().next() {
            Some((_, (_, aabb, handle))) => (*aabb, handle.id),
            None => return,
        }
    };

    // Pass 1: player x treasures.
    let collected: Vec<(Entity, i64, RenderId)> = {
        let mut query = world.query::<(&Treasure, &Aabb, &RenderHandle)>();
        query
            .iter()
            .filter(|(_, (_, aabb, _))| aabb.intersects(&player_box))
            .map(|(entity, (treasure, _, handle))| (entity, treasure.points, handle.id))
            .collect()
    };
    for (entity, points, render_id) in collected {
        hull_state.score += points;
        events.push(GameEvent::TreasureCollected {
            points,
            score: hull_state.score,
        });
        scene.remove(render_id);
        despawn_buffer.push(entity);
        log::info!("treasure collected, score {}", hull_state.score);
    }

    // Pass 2: player x cannonballs. No friendly-fire exclusion unless the
    // policy flag says otherwise; the player's own just-fired shot can
    // still be overlapping the hull.
    let hits: Vec<(Entity, i32, RenderId)> = {
        let mut query = world.query::<(&CannonBall, &Aabb, &RenderHandle)>();
        query
            .iter()
            .filter(|(_, (ball, aabb, _))| {
                (friendly_fire || ball.shot_by != EntityKind::PlayerShip)
                    && aabb.intersects(&player_box)
            })
            .map(|(entity, (ball, _, handle))| (entity, ball.damage, handle.id))
            .collect()
    };
    for (entity, damage, render_id) in hits {
        hull_state.health -= damage;
        events.push(GameEvent::CannonImpact {
            damage,
            health: hull_state.health,
        });
        scene.remove(render_id);
        despawn_buffer.push(entity);
        log::info!("cannonball hit, health {}", hull_state.health);
    }

    // Pass 3: surviving cannonballs x pirates. A cannonball destroys at
    // most one pirate and is itself consumed.
    let surviving_balls: Vec<(Entity, Aabb, RenderId)> = {
        let mut query = world.query::<(&CannonBall, &Aabb, &RenderHandle)>();
        query
            .iter()
            .filter(|(entity, _)| !despawn_buffer.contains(entity))
            .map(|(entity, (_, aabb, handle))| (entity, *aabb, handle.id))
            .collect()
    };
    let mut pirates: Vec<(Entity, Aabb, RenderId)> = {
        let mut query = world.query::<(&Pirate, &Aabb, &RenderHandle)>();
        query
            .iter()
            .map(|(entity, (_, aabb, handle))| (entity, *aabb, handle.id))
            .collect()
    };
    let mut sunk_pirates: Vec<Entity> = Vec::new();
    for (ball_entity, ball_box, ball_render) in surviving_balls {
        let hit = pirates
            .iter()
            .position(|(entity, pirate_box, _)| {
                !sunk_pirates.contains(entity) && pirate_box.intersects(&ball_box)
            });
        if let Some(index) = hit {
            let (pirate_entity, _, pirate_render) = pirates[index];
            sunk_pirates.push(pirate_entity);
            scene.remove(pirate_render);
            scene.remove(ball_render);
            despawn_buffer.push(pirate_entity);
            despawn_buffer.push(ball_entity);
            events.push(GameEvent::PirateSunk);
            log::info!("pirate sunk");
        }
    }
    pirates.retain(|(entity, _, _)| !sunk_pirates.contains(entity));

    // Pass 4: surviving pirates x player. Ramming is an instant kill.
    for (pirate_entity, pirate_box, pirate_render) in pirates {
        if pirate_box.intersects(&player_box) {
            hull_state.health = 0;
            scene.remove(pirate_render);
            despawn_buffer.push(pirate_entity);
            events.push(GameEvent::PirateRammed);
            log::info!("rammed by pirate");
        }
    }

    // Pass 5: terminal check, once per tick, after all other effects.
    // Irreversible; the player's renderable leaves the scene, the player
    // entity itself persists.
    if hull_state.health <= 0 && !hull_state.game_over {
        hull_state.game_over = true;
        scene.remove(player_render);
        events.push(GameEvent::GameOver {
            score: hull_state.score,
            elapsed_secs,
        });
        log::info!("game over, final score {}", hull_state.score);
    }

    // Commit: removal is immediate and exclusive from here on.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
