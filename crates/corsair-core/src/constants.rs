//! Simulation constants and tuning parameters.
//!
//! Linear speeds are world units per tick (one tick = one rendered frame);
//! the elapsed-time clock converts ticks to seconds at TICK_RATE.

use glam::DVec3;

/// Simulation tick rate (Hz). One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Horizontal radius around the player beyond which cannonballs are culled.
pub const WORLD_RADIUS: f64 = 5_000.0;

/// Cannonballs below this altitude have sunk and are culled.
pub const CANNONBALL_SINK_DEPTH: f64 = -5.0;

// --- Player ship ---

/// Player spawn position.
pub const PLAYER_START: DVec3 = DVec3::new(10.0, 0.0, 10.0);

/// Player spawn heading (unit vector).
pub const PLAYER_START_HEADING: DVec3 = DVec3::new(0.0, 0.0, -1.0);

/// Player speed at spawn (units/tick).
pub const PLAYER_INITIAL_SPEED: f64 = 0.5;

/// Maximum player speed (units/tick).
pub const PLAYER_MAX_SPEED: f64 = 4.0;

/// Speed change per tick at full throttle.
pub const PLAYER_ACCEL_RATE: f64 = 0.05;

/// Turn rate factor (radians per tick per unit of speed). A stationary
/// ship cannot turn.
pub const PLAYER_TURN_RATE: f64 = 0.05;

/// Player hull half-extents for the bounding box.
pub const PLAYER_HULL_HALF_EXTENTS: DVec3 = DVec3::new(6.0, 4.0, 12.0);

// --- Pirates ---

/// Pirate cruise speed while homing on the player (units/tick).
pub const PIRATE_CRUISE_SPEED: f64 = 0.34;

/// Minimum seconds between two shots from the same pirate.
pub const PIRATE_FIRE_COOLDOWN_SECS: f64 = 5.0;

/// Pirate hull sits low in the water.
pub const PIRATE_SPAWN_ALTITUDE: f64 = -1.0;

/// Pirate hull half-extents for the bounding box.
pub const PIRATE_HULL_HALF_EXTENTS: DVec3 = DVec3::new(8.0, 6.0, 16.0);

// --- Treasures ---

/// Points awarded per collected treasure.
pub const TREASURE_POINTS: i64 = 10;

/// Treasures float at the waterline.
pub const TREASURE_SPAWN_ALTITUDE: f64 = 0.0;

/// Treasure chest half-extents for the bounding box.
pub const TREASURE_HULL_HALF_EXTENTS: DVec3 = DVec3::new(2.5, 2.0, 2.5);

// --- Cannonballs ---

/// Hull damage per cannonball hit.
pub const CANNONBALL_DAMAGE: i32 = 10;

/// Constant downward bias applied to a cannonball's direction at launch,
/// simulating gravity droop.
pub const CANNONBALL_DROOP: f64 = 0.005;

/// Launch altitude (muzzle height above the waterline).
pub const CANNONBALL_ALTITUDE: f64 = 4.0;

/// Cannonball half-extents for the bounding box (unit sphere).
pub const CANNONBALL_HULL_HALF_EXTENTS: DVec3 = DVec3::new(1.0, 1.0, 1.0);

/// Distance ahead of the player's bow at which its shots materialize.
pub const PLAYER_LAUNCH_OFFSET: f64 = 30.0;

/// Distance ahead of a pirate at which its shots materialize.
pub const PIRATE_LAUNCH_OFFSET: f64 = 50.0;

/// Below this player speed, shots use the standstill muzzle speed.
pub const STANDSTILL_THRESHOLD: f64 = 0.5;

/// Player shot speed from standstill (units/tick).
pub const PLAYER_STANDSTILL_SHOT_SPEED: f64 = 1.5;

/// Player shot speed factor applied to the player's current speed.
pub const PLAYER_SHOT_SPEED_FACTOR: f64 = 3.0;

/// Pirate shot speed when the player is at a standstill (units/tick).
pub const PIRATE_STANDSTILL_SHOT_SPEED: f64 = 1.0;

/// Pirate shot speed factor applied to the player's current speed.
pub const PIRATE_SHOT_SPEED_FACTOR: f64 = 2.0;

// --- Spawner ---

/// Treasures placed around the origin when a voyage starts.
pub const INITIAL_TREASURES: usize = 20;

/// Pirates placed around the origin when a voyage starts.
pub const INITIAL_PIRATES: usize = 5;

/// Minimum live treasure population the spawner maintains.
pub const TREASURE_FLOOR: usize = 5;

/// Minimum live pirate population the spawner maintains.
pub const PIRATE_FLOOR: usize = 5;

/// Treasure scatter distance range from the reference point.
pub const TREASURE_SCATTER_RANGE: (f64, f64) = (100.0, 1000.0);

/// Pirate scatter distance range from the reference point.
pub const PIRATE_SCATTER_RANGE: (f64, f64) = (500.0, 1000.0);

// --- Game state ---

/// Hull integrity at the start of a voyage.
pub const STARTING_HEALTH: i32 = 100;

// --- Camera rigs ---

/// Chase camera offset from the player.
pub const CAMERA_CHASE_OFFSET: DVec3 = DVec3::new(-20.0, 100.0, 50.0);

/// Chase camera look direction.
pub const CAMERA_CHASE_LOOK: DVec3 = DVec3::new(40.0, -50.0, -80.0);

/// Top-down camera offset from the player.
pub const CAMERA_TOPDOWN_OFFSET: DVec3 = DVec3::new(0.0, 100.0, 0.0);

/// Top-down camera look direction.
pub const CAMERA_TOPDOWN_LOOK: DVec3 = DVec3::new(0.0, -1.0, 0.0);

// --- Cosmetic bobbing (applied to view transforms only) ---

pub const PLAYER_BOB_FREQ: f64 = 1.5;
pub const PLAYER_BOB_AMP: f64 = 0.7;
pub const PLAYER_BOB_LIFT: f64 = 0.5;
pub const PLAYER_ROLL_FREQ: f64 = 2.0;
pub const PLAYER_ROLL_AMP: f64 = 0.05;

pub const TREASURE_BOB_AMP: f64 = 0.4;
pub const TREASURE_BOB_LIFT: f64 = 0.2;
pub const TREASURE_TILT_AMP: f64 = 0.1;

pub const PIRATE_BOB_AMP: f64 = 0.7;
pub const PIRATE_BOB_SINK: f64 = 2.0;
