//! Per-tick simulation systems, run in a fixed order by the engine.

pub mod ballistics;
pub mod cleanup;
pub mod collision;
pub mod fire_control;
pub mod helm;
pub mod pirate_ai;
pub mod snapshot;
pub mod spawner;
