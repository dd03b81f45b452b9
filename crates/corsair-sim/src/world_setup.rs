//! Entity spawn factories for populating the simulation world.
//!
//! Creates the player ship, treasures, pirates, and cannonballs with
//! appropriate component bundles, and registers each new entity's
//! renderable with the scene.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use corsair_core::components::*;
use corsair_core::constants::*;
use corsair_core::enums::EntityKind;
use corsair_core::types::{Aabb, Position, RenderId, Yaw};

use crate::scene::RenderScene;

/// Set up the initial voyage world: player ship plus the starting
/// treasure and pirate populations scattered around the origin.
pub fn setup_voyage(world: &mut World, rng: &mut ChaCha8Rng, scene: &mut dyn RenderScene) {
    spawn_player(world, scene);

    let origin = DVec3::ZERO;
    for _ in 0..INITIAL_TREASURES {
        spawn_treasure(world, rng, origin, scene);
    }
    for _ in 0..INITIAL_PIRATES {
        spawn_pirate(world, rng, origin, 0.0, scene);
    }
}

/// Spawn the player's ship. Exactly one exists per voyage.
pub fn spawn_player(world: &mut World, scene: &mut dyn RenderScene) -> hecs::Entity {
    let ship = PlayerShip {
        heading: PLAYER_START_HEADING,
        speed: PLAYER_INITIAL_SPEED,
        accel_input: Default::default(),
        turn_input: Default::default(),
    };
    let hull = Hull {
        half_extents: PLAYER_HULL_HALF_EXTENTS,
    };

    let entity = world.spawn((
        ship,
        Position(PLAYER_START),
        Yaw::default(),
        hull,
        Aabb::from_center_half_extents(PLAYER_START, PLAYER_HULL_HALF_EXTENTS),
    ));
    register(world, scene, entity, EntityKind::PlayerShip)
}

/// Spawn a treasure scattered around `reference` at a random bearing.
pub fn spawn_treasure(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    reference: DVec3,
    scene: &mut dyn RenderScene,
) -> hecs::Entity {
    let position = scatter(rng, reference, TREASURE_SCATTER_RANGE, TREASURE_SPAWN_ALTITUDE);
    spawn_treasure_at(world, position, scene)
}

/// Spawn a treasure at an exact position.
pub fn spawn_treasure_at(
    world: &mut World,
    position: DVec3,
    scene: &mut dyn RenderScene,
) -> hecs::Entity {
    let entity = world.spawn((
        Treasure {
            points: TREASURE_POINTS,
        },
        Position(position),
        Yaw::default(),
        Hull {
            half_extents: TREASURE_HULL_HALF_EXTENTS,
        },
        Aabb::from_center_half_extents(position, TREASURE_HULL_HALF_EXTENTS),
    ));
    register(world, scene, entity, EntityKind::Treasure)
}

/// Spawn a pirate scattered around `reference`. A fresh pirate starts
/// its fire cooldown at the current elapsed time.
pub fn spawn_pirate(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    reference: DVec3,
    now_secs: f64,
    scene: &mut dyn RenderScene,
) -> hecs::Entity {
    let position = scatter(rng, reference, PIRATE_SCATTER_RANGE, PIRATE_SPAWN_ALTITUDE);
    spawn_pirate_at(world, position, now_secs, scene)
}

/// Spawn a pirate at an exact position with an explicit cooldown origin.
pub fn spawn_pirate_at(
    world: &mut World,
    position: DVec3,
    last_fired_secs: f64,
    scene: &mut dyn RenderScene,
) -> hecs::Entity {
    let entity = world.spawn((
        Pirate { last_fired_secs },
        Position(position),
        Yaw::default(),
        Hull {
            half_extents: PIRATE_HULL_HALF_EXTENTS,
        },
        Aabb::from_center_half_extents(position, PIRATE_HULL_HALF_EXTENTS),
    ));
    register(world, scene, entity, EntityKind::Pirate)
}

/// Spawn a cannonball at `origin` flying along `direction` (unit vector).
/// The launch applies the constant gravity droop to the direction.
pub fn spawn_cannonball(
    world: &mut World,
    origin: DVec3,
    direction: DVec3,
    speed: f64,
    shot_by: EntityKind,
    scene: &mut dyn RenderScene,
) -> hecs::Entity {
    let mut direction = direction;
    direction.y -= CANNONBALL_DROOP;

    let entity = world.spawn((
        CannonBall {
            direction,
            speed,
            damage: CANNONBALL_DAMAGE,
            shot_by,
        },
        Position(origin),
        Hull {
            half_extents: CANNONBALL_HULL_HALF_EXTENTS,
        },
        Aabb::from_center_half_extents(origin, CANNONBALL_HULL_HALF_EXTENTS),
    ));
    register(world, scene, entity, EntityKind::CannonBall)
}

/// Polar-coordinate scatter: uniform distance within `range`, uniform
/// angle in [0, 2π), at the kind's waterline altitude.
fn scatter(rng: &mut ChaCha8Rng, reference: DVec3, range: (f64, f64), altitude: f64) -> DVec3 {
    let dist: f64 = rng.gen_range(range.0..range.1);
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    DVec3::new(
        reference.x + angle.sin() * dist,
        altitude,
        reference.z + angle.cos() * dist,
    )
}

/// Attach a render handle derived from the entity id and notify the scene.
fn register(
    world: &mut World,
    scene: &mut dyn RenderScene,
    entity: hecs::Entity,
    kind: EntityKind,
) -> hecs::Entity {
    let id = RenderId(entity.to_bits().get());
    let _ = world.insert_one(entity, RenderHandle { id, kind });
    scene.add(id, kind);
    entity
}
