//! Player helm integration: throttle, rudder, and forward motion.
//!
//! Speed and heading respond to the latched control inputs; the turn
//! rate scales with speed, so a stationary ship cannot turn. The camera
//! rig is rotated and repositioned in lockstep with the ship.

use glam::DQuat;
use hecs::World;

use corsair_core::components::{Hull, PlayerShip};
use corsair_core::constants::{PLAYER_ACCEL_RATE, PLAYER_MAX_SPEED, PLAYER_TURN_RATE};
use corsair_core::types::{Aabb, Position, Yaw};

use crate::engine::CameraRig;

/// Advance the player ship by one tick and keep the camera rig on station.
pub fn run(world: &mut World, camera: &mut CameraRig) {
    for (_entity, (ship, pos, yaw, hull, aabb)) in
        world.query_mut::<(&mut PlayerShip, &mut Position, &mut Yaw, &Hull, &mut Aabb)>()
    {
        ship.speed = (ship.speed + ship.accel_input.value() * PLAYER_ACCEL_RATE)
            .clamp(0.0, PLAYER_MAX_SPEED);

        let turn = ship.turn_input.value() * PLAYER_TURN_RATE * ship.speed;
        if turn != 0.0 {
            let rotation = DQuat::from_rotation_y(turn);
            ship.heading = (rotation * ship.heading).normalize();
            yaw.radians += turn;
            camera.rotate(turn);
        }

        pos.0 += ship.heading * ship.speed;
        *aabb = Aabb::from_center_half_extents(pos.0, hull.half_extents);
        camera.follow(pos.0);
    }
}
