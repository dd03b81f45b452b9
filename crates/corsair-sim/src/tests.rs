//! Tests for the simulation engine: helm integration, fire control,
//! collision resolution, spawner floors, and terminal-state handling.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec3;

use corsair_core::commands::PlayerCommand;
use corsair_core::components::{CannonBall, Pirate, PlayerShip, Treasure};
use corsair_core::constants::*;
use corsair_core::enums::*;
use corsair_core::events::GameEvent;
use corsair_core::types::{Aabb, Position, RenderId};

use crate::engine::{GameConfig, GameEngine};
use crate::scene::RenderScene;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Engine with a voyage already started and one tick run.
fn started_engine(seed: u64) -> GameEngine {
    init_logger();
    let mut engine = GameEngine::new(GameConfig {
        seed,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::StartVoyage);
    engine.tick();
    engine
}

fn count<C: hecs::Component>(engine: &GameEngine) -> usize {
    let mut query = engine.world().query::<&C>();
    query.iter().count()
}

fn player_position(engine: &GameEngine) -> DVec3 {
    let mut query = engine.world().query::<(&PlayerShip, &Position)>();
    let (_, (_, pos)) = query.iter().next().expect("player should exist");
    pos.0
}

/// Scene that records every add/remove call, for membership tests.
#[derive(Clone, Default)]
struct RecordingScene {
    adds: Rc<RefCell<Vec<(RenderId, EntityKind)>>>,
    removes: Rc<RefCell<Vec<RenderId>>>,
}

impl RenderScene for RecordingScene {
    fn add(&mut self, id: RenderId, kind: EntityKind) {
        self.adds.borrow_mut().push((id, kind));
    }

    fn remove(&mut self, id: RenderId) {
        self.removes.borrow_mut().push(id);
    }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = started_engine(12345);
    let mut engine_b = started_engine(12345);

    for _ in 0..300 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

// ---- Lifecycle and phases ----

#[test]
fn test_harbor_tick_is_noop() {
    init_logger();
    let mut engine = GameEngine::new(GameConfig::default());

    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Harbor);
    assert_eq!(snap.time.tick, 0);
    assert!(snap.player.is_none());
    assert!(snap.treasures.is_empty());
    assert!(snap.pirates.is_empty());

    // Firing before the player exists is an ignored tick, not a crash.
    engine.queue_command(PlayerCommand::FireCannon);
    let snap = engine.tick();
    assert_eq!(snap.time.tick, 0);
    assert!(snap.cannonballs.is_empty());
}

#[test]
fn test_voyage_setup_population() {
    let engine = started_engine(7);

    assert_eq!(count::<Treasure>(&engine), INITIAL_TREASURES);
    assert_eq!(count::<Pirate>(&engine), INITIAL_PIRATES);
    assert_eq!(count::<PlayerShip>(&engine), 1);
}

/// Round-trip property: every spawned entity has a bounding box already
/// computed, centered on its position, before the next collision pass.
#[test]
fn test_spawned_entities_have_fresh_boxes() {
    let engine = started_engine(7);

    let mut query = engine.world().query::<(&Treasure, &Position, &Aabb)>();
    let mut seen = 0;
    for (_, (_, pos, aabb)) in query.iter() {
        assert!((aabb.center() - pos.0).length() < 1e-9);
        assert!(aabb.min.x < aabb.max.x && aabb.min.y < aabb.max.y && aabb.min.z < aabb.max.z);
        seen += 1;
    }
    assert_eq!(seen, INITIAL_TREASURES);

    let mut query = engine.world().query::<(&Pirate, &Position, &Aabb)>();
    for (_, (_, pos, aabb)) in query.iter() {
        assert!((aabb.center() - pos.0).length() < 1e-9);
    }
}

// ---- Helm ----

#[test]
fn test_helm_throttle_integration() {
    let mut engine = started_engine(1);
    // One neutral tick has already run: speed 0.5, z = 10 - 0.5.
    let pos = player_position(&engine);
    assert!((pos.z - 9.5).abs() < 1e-10);

    engine.queue_command(PlayerCommand::SetThrottle {
        input: ThrottleInput::Ahead,
    });
    let snap = engine.tick();
    let player = snap.player.unwrap();
    assert!((player.speed - 0.55).abs() < 1e-10);
    let pos = player_position(&engine);
    assert!((pos.z - (9.5 - 0.55)).abs() < 1e-10);
}

#[test]
fn test_speed_clamped_to_range() {
    let mut engine = started_engine(2);

    engine.queue_command(PlayerCommand::SetThrottle {
        input: ThrottleInput::Ahead,
    });
    for _ in 0..200 {
        let snap = engine.tick();
        let speed = snap.player.unwrap().speed;
        assert!((0.0..=PLAYER_MAX_SPEED).contains(&speed));
    }
    let snap = engine.tick();
    assert_eq!(snap.player.unwrap().speed, PLAYER_MAX_SPEED);

    engine.queue_command(PlayerCommand::SetThrottle {
        input: ThrottleInput::Astern,
    });
    for _ in 0..200 {
        let snap = engine.tick();
        let speed = snap.player.unwrap().speed;
        assert!((0.0..=PLAYER_MAX_SPEED).contains(&speed));
    }
    let snap = engine.tick();
    assert_eq!(snap.player.unwrap().speed, 0.0);
}

#[test]
fn test_stationary_ship_cannot_turn() {
    let mut engine = started_engine(3);

    // Brake from the initial 0.5 to a full stop.
    engine.queue_command(PlayerCommand::SetThrottle {
        input: ThrottleInput::Astern,
    });
    for _ in 0..10 {
        engine.tick();
    }
    let snap = engine.tick();
    assert_eq!(snap.player.unwrap().speed, 0.0);

    engine.queue_command(PlayerCommand::SetThrottle {
        input: ThrottleInput::Neutral,
    });
    engine.queue_command(PlayerCommand::SetRudder {
        input: RudderInput::Port,
    });
    for _ in 0..20 {
        let snap = engine.tick();
        let player = snap.player.unwrap();
        assert_eq!(player.yaw, 0.0, "Stationary ship must not turn");
        assert!((player.heading - PLAYER_START_HEADING).length() < 1e-12);
    }
}

#[test]
fn test_turn_scales_with_speed() {
    let mut engine = started_engine(4);

    engine.queue_command(PlayerCommand::SetRudder {
        input: RudderInput::Port,
    });
    let snap = engine.tick();
    let player = snap.player.unwrap();

    // turn = input * rate * speed = 1 * 0.05 * 0.5
    let expected = PLAYER_TURN_RATE * 0.5;
    assert!((player.yaw - expected).abs() < 1e-10);
    assert!((player.heading.x - (-expected.sin())).abs() < 1e-10);
    assert!((player.heading.z - (-expected.cos())).abs() < 1e-10);
}

// ---- Fire control ----

#[test]
fn test_player_fire_from_standstill() {
    let mut engine = started_engine(5);

    engine.queue_command(PlayerCommand::SetThrottle {
        input: ThrottleInput::Astern,
    });
    for _ in 0..11 {
        engine.tick();
    }
    engine.queue_command(PlayerCommand::SetThrottle {
        input: ThrottleInput::Neutral,
    });
    engine.queue_command(PlayerCommand::FireCannon);
    engine.tick();

    let mut query = engine.world().query::<&CannonBall>();
    let (_, ball) = query.iter().next().expect("shot should exist");
    assert_eq!(ball.speed, PLAYER_STANDSTILL_SHOT_SPEED);
    assert_eq!(ball.shot_by, EntityKind::PlayerShip);
    assert!(
        (ball.direction.y - (-CANNONBALL_DROOP)).abs() < 1e-12,
        "Launch applies the gravity droop"
    );
}

#[test]
fn test_player_fire_speed_scales_with_ship_speed() {
    let mut engine = started_engine(6);

    engine.queue_command(PlayerCommand::SetThrottle {
        input: ThrottleInput::Ahead,
    });
    for _ in 0..10 {
        engine.tick();
    }
    let snap = engine.tick();
    let ship_speed = snap.player.unwrap().speed;
    assert!(ship_speed >= STANDSTILL_THRESHOLD);

    engine.queue_command(PlayerCommand::SetThrottle {
        input: ThrottleInput::Neutral,
    });
    engine.queue_command(PlayerCommand::FireCannon);
    engine.tick();

    let mut query = engine.world().query::<&CannonBall>();
    let (_, ball) = query.iter().next().expect("shot should exist");
    assert!((ball.speed - PLAYER_SHOT_SPEED_FACTOR * ship_speed).abs() < 1e-10);
}

/// Scenario: pirate with lastFired = 0, cooldown = 5, elapsed clock = 6
/// fires exactly once that tick and lastFired updates to 6.
#[test]
fn test_pirate_fire_cooldown() {
    let mut engine = started_engine(8);

    engine.set_elapsed(6.0);
    let pirate = engine.place_pirate(DVec3::new(1000.0, PIRATE_SPAWN_ALTITUDE, 1000.0), 0.0);
    let eligible = count::<Pirate>(&engine);
    assert_eq!(count::<CannonBall>(&engine), 0);

    engine.tick();

    // Every pirate was eligible (the initial ones spawned with lastFired 0);
    // each fired exactly one shot.
    assert_eq!(count::<CannonBall>(&engine), eligible);
    let held = engine.world().get::<&Pirate>(pirate).unwrap();
    assert_eq!(held.last_fired_secs, 6.0);
    drop(held);

    // Cooldown now blocks everyone.
    engine.tick();
    assert_eq!(count::<CannonBall>(&engine), eligible);
}

#[test]
fn test_pirate_shot_speed_scales_with_player_speed() {
    let mut engine = started_engine(9);

    engine.queue_command(PlayerCommand::SetThrottle {
        input: ThrottleInput::Ahead,
    });
    for _ in 0..59 {
        engine.tick();
    }
    let snap = engine.tick();
    let ship_speed = snap.player.unwrap().speed;

    engine.queue_command(PlayerCommand::SetThrottle {
        input: ThrottleInput::Neutral,
    });
    engine.set_elapsed(6.0);
    engine.tick();

    let mut query = engine.world().query::<&CannonBall>();
    for (_, ball) in query.iter() {
        assert!((ball.speed - PIRATE_SHOT_SPEED_FACTOR * ship_speed).abs() < 1e-10);
        assert_eq!(ball.shot_by, EntityKind::Pirate);
    }
}

// ---- Collision: treasures ----

/// Scenario: a treasure overlapping the player is collected in one tick.
#[test]
fn test_treasure_collection() {
    let mut engine = started_engine(10);

    let treasure = engine.place_treasure(player_position(&engine));
    let before = count::<Treasure>(&engine);

    let snap = engine.tick();

    assert_eq!(snap.score, TREASURE_POINTS);
    assert!(!engine.world().contains(treasure));
    assert_eq!(count::<Treasure>(&engine), before - 1);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::TreasureCollected { points: 10, score: 10 })));
}

// ---- Collision: projectiles ----

/// Scenario: health 5, a 10-damage cannonball hits. The post-subtraction
/// value (negative) is what the terminal check sees; the readout clamps.
#[test]
fn test_projectile_damage_and_terminal_check() {
    let mut engine = started_engine(11);

    engine.set_health(5);
    let ball = engine.place_cannonball(
        player_position(&engine),
        DVec3::ZERO,
        0.0,
        EntityKind::Pirate,
    );

    let snap = engine.tick();

    assert_eq!(engine.hull_state().health, -5);
    assert_eq!(snap.health, 0, "Displayed health clamps at zero");
    assert!(snap.game_over);
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert!(!engine.world().contains(ball));
}

#[test]
fn test_friendly_fire_policy() {
    // Default policy matches the source: the player's own shot can hit.
    let mut engine = started_engine(12);
    engine.place_cannonball(
        player_position(&engine),
        DVec3::ZERO,
        0.0,
        EntityKind::PlayerShip,
    );
    let snap = engine.tick();
    assert_eq!(snap.health, STARTING_HEALTH - CANNONBALL_DAMAGE);

    // With the flag off, own shots pass through.
    init_logger();
    let mut engine = GameEngine::new(GameConfig {
        seed: 12,
        friendly_fire: false,
    });
    engine.queue_command(PlayerCommand::StartVoyage);
    engine.tick();
    let ball = engine.place_cannonball(
        player_position(&engine),
        DVec3::ZERO,
        0.0,
        EntityKind::PlayerShip,
    );
    let snap = engine.tick();
    assert_eq!(snap.health, STARTING_HEALTH);
    assert!(engine.world().contains(ball));
}

/// A single cannonball removes at most one pirate, and is consumed.
#[test]
fn test_projectile_pirate_exclusivity() {
    let mut engine = started_engine(13);

    let spot = DVec3::new(1000.0, PIRATE_SPAWN_ALTITUDE, 1000.0);
    // Park the cooldowns far in the future so neither pirate fires.
    engine.place_pirate(spot, f64::MAX);
    engine.place_pirate(spot, f64::MAX);
    let ball = engine.place_cannonball(
        DVec3::new(spot.x, CANNONBALL_ALTITUDE, spot.z),
        DVec3::ZERO,
        0.0,
        EntityKind::Pirate,
    );
    let before = count::<Pirate>(&engine);

    let snap = engine.tick();

    assert_eq!(count::<Pirate>(&engine), before - 1);
    assert!(!engine.world().contains(ball));
    assert_eq!(
        snap.events
            .iter()
            .filter(|e| matches!(e, GameEvent::PirateSunk))
            .count(),
        1
    );
}

// ---- Collision: ramming ----

/// Scenario: a pirate overlapping the player zeroes health outright.
#[test]
fn test_pirate_ram_is_instant_kill() {
    let mut engine = started_engine(14);

    let pirate = engine.place_pirate(player_position(&engine), f64::MAX);
    let snap = engine.tick();

    assert_eq!(engine.hull_state().health, 0, "Ramming sets health to exactly 0");
    assert_eq!(snap.health, 0);
    assert!(snap.game_over);
    assert!(!engine.world().contains(pirate));
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::PirateRammed)));
}

// ---- Terminal state ----

#[test]
fn test_game_over_is_idempotent() {
    let mut engine = started_engine(15);
    engine.place_pirate(player_position(&engine), f64::MAX);
    let terminal = engine.tick();
    assert!(terminal.game_over);

    let frozen_tick = terminal.time.tick;
    let frozen_treasures = count::<Treasure>(&engine);
    let frozen_pirates = count::<Pirate>(&engine);

    engine.queue_command(PlayerCommand::FireCannon);
    for _ in 0..10 {
        let snap = engine.tick();
        assert!(snap.game_over);
        assert_eq!(snap.phase, GamePhase::GameOver);
        assert_eq!(snap.time.tick, frozen_tick, "Clock must freeze at game over");
        assert_eq!(snap.score, terminal.score);
        assert_eq!(snap.health, terminal.health);
    }
    assert_eq!(count::<Treasure>(&engine), frozen_treasures);
    assert_eq!(count::<Pirate>(&engine), frozen_pirates);
    assert_eq!(count::<CannonBall>(&engine), 0);
}

#[test]
fn test_restart_after_game_over() {
    let mut engine = started_engine(16);
    engine.place_pirate(player_position(&engine), f64::MAX);
    let snap = engine.tick();
    assert!(snap.game_over);

    engine.queue_command(PlayerCommand::StartVoyage);
    let snap = engine.tick();

    assert_eq!(snap.phase, GamePhase::Voyage);
    assert!(!snap.game_over);
    assert_eq!(snap.health, STARTING_HEALTH);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.time.tick, 1);
    assert_eq!(count::<Treasure>(&engine), INITIAL_TREASURES);
    assert_eq!(count::<Pirate>(&engine), INITIAL_PIRATES);
}

// ---- Spawner ----

#[test]
fn test_treasure_population_floor() {
    let mut engine = started_engine(17);

    let victims: Vec<hecs::Entity> = {
        let mut query = engine.world().query::<&Treasure>();
        query.iter().map(|(e, _)| e).take(18).collect()
    };
    for entity in victims {
        engine.despawn(entity);
    }
    assert_eq!(count::<Treasure>(&engine), 2);

    engine.tick();
    assert_eq!(
        count::<Treasure>(&engine),
        TREASURE_FLOOR,
        "Full deficit is spawned the same tick"
    );
}

#[test]
fn test_pirate_population_floor() {
    let mut engine = started_engine(18);

    let victims: Vec<hecs::Entity> = {
        let mut query = engine.world().query::<&Pirate>();
        query.iter().map(|(e, _)| e).take(4).collect()
    };
    for entity in victims {
        engine.despawn(entity);
    }
    assert_eq!(count::<Pirate>(&engine), 1);

    engine.tick();
    // The floor, not a batch size, is the invariant: a deficit of four
    // is refilled in one tick.
    assert_eq!(count::<Pirate>(&engine), PIRATE_FLOOR);
}

// ---- Pirate steering ----

#[test]
fn test_pirates_home_on_player() {
    let mut engine = started_engine(19);

    let spot = DVec3::new(1010.0, PIRATE_SPAWN_ALTITUDE, 10.0);
    let pirate = engine.place_pirate(spot, f64::MAX);

    engine.tick();

    let target = player_position(&engine);
    let pos = engine.world().get::<&Position>(pirate).unwrap().0;
    let moved = pos - spot;
    assert!((moved.length() - PIRATE_CRUISE_SPEED).abs() < 1e-10);
    // Travel direction points at the player.
    let expected_dir = (target - pos).normalize();
    assert!((moved.normalize() - expected_dir).length() < 1e-3);
}

// ---- Cleanup ----

#[test]
fn test_sunk_cannonballs_are_culled() {
    let mut engine = started_engine(20);

    let player = player_position(&engine);
    let sunk = engine.place_cannonball(
        DVec3::new(player.x + 300.0, CANNONBALL_SINK_DEPTH - 1.0, player.z),
        DVec3::ZERO,
        0.0,
        EntityKind::Pirate,
    );
    let adrift = engine.place_cannonball(
        DVec3::new(player.x + WORLD_RADIUS + 100.0, CANNONBALL_ALTITUDE, player.z),
        DVec3::ZERO,
        0.0,
        EntityKind::Pirate,
    );
    let live = engine.place_cannonball(
        DVec3::new(player.x + 300.0, CANNONBALL_ALTITUDE, player.z),
        DVec3::ZERO,
        0.0,
        EntityKind::Pirate,
    );

    engine.tick();

    assert!(!engine.world().contains(sunk));
    assert!(!engine.world().contains(adrift));
    assert!(engine.world().contains(live));
}

// ---- Invariants over a long run ----

#[test]
fn test_health_and_speed_bounds_hold() {
    let mut engine = started_engine(21);

    engine.queue_command(PlayerCommand::SetThrottle {
        input: ThrottleInput::Ahead,
    });
    engine.queue_command(PlayerCommand::SetRudder {
        input: RudderInput::Starboard,
    });
    for _ in 0..2000 {
        let snap = engine.tick();
        assert!((0..=100).contains(&snap.health));
        if let Some(player) = snap.player {
            assert!((0.0..=PLAYER_MAX_SPEED).contains(&player.speed));
        }
        if snap.game_over {
            break;
        }
    }
}

#[test]
fn test_population_floor_holds_over_time() {
    let mut engine = started_engine(22);

    for _ in 0..600 {
        let snap = engine.tick();
        if snap.game_over {
            break;
        }
        assert!(count::<Treasure>(&engine) >= TREASURE_FLOOR);
        assert!(count::<Pirate>(&engine) >= PIRATE_FLOOR);
    }
}

// ---- Scene membership ----

#[test]
fn test_scene_add_remove_calls() {
    init_logger();
    let scene = RecordingScene::default();
    let adds = scene.adds.clone();
    let removes = scene.removes.clone();

    let mut engine = GameEngine::with_scene(GameConfig::default(), Box::new(scene));
    engine.queue_command(PlayerCommand::StartVoyage);
    let snap = engine.tick();

    assert_eq!(
        adds.borrow().len(),
        1 + INITIAL_TREASURES + INITIAL_PIRATES,
        "Player plus initial population registered with the scene"
    );
    let player_render = snap.player.unwrap().render_id;

    // Game over removes the player's renderable.
    engine.place_pirate(player_position(&engine), f64::MAX);
    engine.tick();
    assert!(removes.borrow().contains(&player_render));
}

// ---- Camera rig ----

#[test]
fn test_camera_tracks_player() {
    let mut engine = started_engine(23);

    let snap = engine.tick();
    let player = player_position(&engine);
    let camera = snap.camera;
    let offset = camera.position - DVec3::new(player.x, 0.0, player.z);
    assert!((offset - CAMERA_CHASE_OFFSET).length() < 1e-9);

    // A helm turn rotates the rig with the ship.
    engine.queue_command(PlayerCommand::SetRudder {
        input: RudderInput::Port,
    });
    for _ in 0..30 {
        engine.tick();
    }
    let snap = engine.tick();
    let yaw = snap.player.unwrap().yaw;
    let player = player_position(&engine);
    let offset = snap.camera.position - DVec3::new(player.x, 0.0, player.z);
    let expected = glam::DQuat::from_rotation_y(yaw) * CAMERA_CHASE_OFFSET;
    assert!((offset - expected).length() < 1e-6);
}
