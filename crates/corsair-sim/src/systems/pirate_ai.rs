//! Pirate steering: constant-speed homing on the player.
//!
//! Each pirate sails directly toward the player at cruise speed. The
//! model faces the reverse of its travel direction (the stern-first
//! look-at convention of the ship models).

use hecs::World;

use corsair_core::components::{Hull, Pirate, PlayerShip};
use corsair_core::constants::PIRATE_CRUISE_SPEED;
use corsair_core::types::{Aabb, Position, Yaw};

/// Advance all pirates one tick toward the player.
pub fn run(world: &mut World) {
    let player_pos = {
        let mut query = world.query::<(&PlayerShip, &Position)>();
        match query.iter().next() {
            Some((_, (_, pos))) => pos.0,
            None => return,
        }
    };

    for (_entity, (_pirate, pos, yaw, hull, aabb)) in
        world.query_mut::<(&Pirate, &mut Position, &mut Yaw, &Hull, &mut Aabb)>()
    {
        let to_player = player_pos - pos.0;
        if to_player.length_squared() < f64::EPSILON {
            continue;
        }
        let dir = to_player.normalize();
        pos.0 += dir * PIRATE_CRUISE_SPEED;

        let facing = -dir;
        yaw.radians = facing.x.atan2(facing.z);

        *aabb = Aabb::from_center_half_extents(pos.0, hull.half_extents);
    }
}
