//! Headless simulation engine for the CORSAIR arcade game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands, runs
//! all systems in a fixed per-tick order, and produces `GameSnapshot`s.
//! Rendering is an external collaborator reached through the `RenderScene`
//! trait; the engine runs fully headless, enabling deterministic testing.

pub mod engine;
pub mod scene;
pub mod systems;
pub mod world_setup;

#[cfg(test)]
mod tests;
