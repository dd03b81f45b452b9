//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands, runs
//! all systems in a fixed per-tick order, and produces `GameSnapshot`s.
//! Completely headless (rendering reached only through `RenderScene`),
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::{DQuat, DVec3};
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use corsair_core::commands::PlayerCommand;
use corsair_core::components::{PlayerShip, RenderHandle};
use corsair_core::constants::*;
use corsair_core::enums::{CameraMode, GamePhase};
use corsair_core::events::GameEvent;
use corsair_core::state::{CameraView, GameSnapshot};
use corsair_core::types::{SimTime, Yaw};

use crate::scene::{NullScene, RenderScene};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct GameConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Whether the player's own cannonballs can strike the player.
    /// On by default: the collision pass has no friendly-fire
    /// exclusion unless a host opts out.
    pub friendly_fire: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            friendly_fire: true,
        }
    }
}

/// Hull integrity, score, and the terminal flag.
///
/// `health` is the raw value: projectile damage subtracts directly and
/// may leave it negative; the snapshot clamps the readout to [0, 100].
/// `game_over` is one-way true.
#[derive(Debug, Clone, Copy)]
pub struct HullState {
    pub score: i64,
    pub health: i32,
    pub game_over: bool,
}

impl Default for HullState {
    fn default() -> Self {
        Self {
            score: 0,
            health: STARTING_HEALTH,
            game_over: false,
        }
    }
}

/// Camera-tracking collaborator. The core rotates and positions the rig
/// in lockstep with the player's helm; the host does the actual framing.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    mode: CameraMode,
    offset: DVec3,
    look_dir: DVec3,
    position: DVec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            mode: CameraMode::Chase,
            offset: CAMERA_CHASE_OFFSET,
            look_dir: CAMERA_CHASE_LOOK,
            position: CAMERA_CHASE_OFFSET,
        }
    }
}

impl CameraRig {
    /// Switch modes, re-deriving the rig vectors from the player's yaw.
    pub fn set_mode(&mut self, mode: CameraMode, player_yaw: f64) {
        let (offset, look_dir) = match mode {
            CameraMode::Chase => (CAMERA_CHASE_OFFSET, CAMERA_CHASE_LOOK),
            CameraMode::TopDown => (CAMERA_TOPDOWN_OFFSET, CAMERA_TOPDOWN_LOOK),
        };
        let rotation = DQuat::from_rotation_y(player_yaw);
        self.mode = mode;
        self.offset = rotation * offset;
        self.look_dir = rotation * look_dir;
    }

    /// Rotate the rig about the up-axis, tracking a helm turn.
    pub fn rotate(&mut self, angle: f64) {
        let rotation = DQuat::from_rotation_y(angle);
        self.offset = rotation * self.offset;
        self.look_dir = rotation * self.look_dir;
    }

    /// Keep station relative to the player.
    pub fn follow(&mut self, player_pos: DVec3) {
        self.position = player_pos + self.offset;
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            mode: self.mode,
            position: self.position,
            look_at: self.position + self.look_dir,
        }
    }
}

/// The simulation engine. Owns the ECS world and all game state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: GameConfig,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    hull_state: HullState,
    camera: CameraRig,
    scene: Box<dyn RenderScene>,
}

impl GameEngine {
    /// Create a headless engine (null scene) with the given config.
    pub fn new(config: GameConfig) -> Self {
        Self::with_scene(config, Box::new(NullScene))
    }

    /// Create an engine wired to an external render scene.
    pub fn with_scene(config: GameConfig, scene: Box<dyn RenderScene>) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            config,
            rng,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            hull_state: HullState::default(),
            camera: CameraRig::default(),
            scene,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Before a voyage starts and after game over the tick mutates
    /// nothing beyond command handling; the clock only advances while
    /// the voyage is active.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Voyage {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.hull_state,
            &self.camera,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get score, health, and the terminal flag.
    pub fn hull_state(&self) -> &HullState {
        &self.hull_state
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartVoyage => {
                if matches!(self.phase, GamePhase::Harbor | GamePhase::GameOver) {
                    self.reset_world();
                    world_setup::setup_voyage(&mut self.world, &mut self.rng, &mut *self.scene);
                    self.hull_state = HullState::default();
                    self.time = SimTime::default();
                    self.camera = CameraRig::default();
                    self.camera.follow(PLAYER_START);
                    self.phase = GamePhase::Voyage;
                    log::info!("voyage started");
                }
            }
            PlayerCommand::SetThrottle { input } => {
                for (_entity, ship) in self.world.query_mut::<&mut PlayerShip>() {
                    ship.accel_input = input;
                }
            }
            PlayerCommand::SetRudder { input } => {
                for (_entity, ship) in self.world.query_mut::<&mut PlayerShip>() {
                    ship.turn_input = input;
                }
            }
            PlayerCommand::FireCannon => {
                // No-op until the player exists; firing before the voyage
                // starts is an ignored tick, not an error.
                if self.phase == GamePhase::Voyage {
                    systems::fire_control::player_fire(
                        &mut self.world,
                        &mut *self.scene,
                        &mut self.events,
                    );
                }
            }
            PlayerCommand::SetCameraMode { mode } => {
                let player_yaw = self
                    .world
                    .query_mut::<(&PlayerShip, &Yaw)>()
                    .into_iter()
                    .next()
                    .map(|(_, (_, yaw))| yaw.radians)
                    .unwrap_or(0.0);
                self.camera.set_mode(mode, player_yaw);
            }
        }
    }

    /// Run all systems in order. The order is fixed by design; collision
    /// always sees the boxes the movement systems refreshed this tick.
    fn run_systems(&mut self) {
        // 1. Pirate fire control (cooldown-gated, every pirate every tick)
        systems::fire_control::run(
            &mut self.world,
            self.time.elapsed_secs,
            &mut *self.scene,
            &mut self.events,
        );
        // 2. Player helm integration + camera rig
        systems::helm::run(&mut self.world, &mut self.camera);
        // 3. Pirate homing
        systems::pirate_ai::run(&mut self.world);
        // 4. Cannonball ballistics
        systems::ballistics::run(&mut self.world);
        // 5. Collision resolution (scoring, damage, terminal check)
        systems::collision::run(
            &mut self.world,
            &mut self.hull_state,
            self.config.friendly_fire,
            self.time.elapsed_secs,
            &mut self.despawn_buffer,
            &mut *self.scene,
            &mut self.events,
        );
        if self.hull_state.game_over {
            self.phase = GamePhase::GameOver;
            return;
        }
        // 6. Cull sunk / out-of-range cannonballs
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut *self.scene);
        // 7. Population replenishment
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            self.time.elapsed_secs,
            &mut *self.scene,
        );
    }

    /// Drop every live renderable and clear the world (voyage restart).
    fn reset_world(&mut self) {
        let handles: Vec<RenderHandle> = self
            .world
            .query_mut::<&RenderHandle>()
            .into_iter()
            .map(|(_, handle)| *handle)
            .collect();
        for handle in handles {
            self.scene.remove(handle.id);
        }
        self.world.clear();
    }

    // --- Test hooks ---

    /// Place a treasure at an exact position (for collision tests).
    #[cfg(test)]
    pub fn place_treasure(&mut self, position: DVec3) -> hecs::Entity {
        world_setup::spawn_treasure_at(&mut self.world, position, &mut *self.scene)
    }

    /// Place a pirate at an exact position with an explicit cooldown origin.
    #[cfg(test)]
    pub fn place_pirate(&mut self, position: DVec3, last_fired_secs: f64) -> hecs::Entity {
        world_setup::spawn_pirate_at(&mut self.world, position, last_fired_secs, &mut *self.scene)
    }

    /// Place a cannonball with an exact position, direction, and shooter.
    #[cfg(test)]
    pub fn place_cannonball(
        &mut self,
        position: DVec3,
        direction: DVec3,
        speed: f64,
        shot_by: corsair_core::enums::EntityKind,
    ) -> hecs::Entity {
        world_setup::spawn_cannonball(
            &mut self.world,
            position,
            direction,
            speed,
            shot_by,
            &mut *self.scene,
        )
    }

    /// Override hull integrity.
    #[cfg(test)]
    pub fn set_health(&mut self, health: i32) {
        self.hull_state.health = health;
    }

    /// Jump the elapsed clock (cooldown tests).
    #[cfg(test)]
    pub fn set_elapsed(&mut self, secs: f64) {
        self.time.elapsed_secs = secs;
        self.time.tick = (secs * TICK_RATE as f64) as u64;
    }

    /// Despawn an entity directly (population-floor tests).
    #[cfg(test)]
    pub fn despawn(&mut self, entity: hecs::Entity) {
        if let Ok(handle) = self.world.get::<&RenderHandle>(entity).map(|h| *h) {
            self.scene.remove(handle.id);
        }
        let _ = self.world.despawn(entity);
    }
}
