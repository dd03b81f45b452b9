//! Cannonball flight integration.
//!
//! Position advances along the launch direction each tick; the constant
//! downward bias in the direction makes every shot sink eventually.

use hecs::World;

use corsair_core::components::{CannonBall, Hull};
use corsair_core::types::{Aabb, Position};

/// Advance all cannonballs one tick and refresh their bounding boxes.
pub fn run(world: &mut World) {
    for (_entity, (ball, pos, hull, aabb)) in
        world.query_mut::<(&CannonBall, &mut Position, &Hull, &mut Aabb)>()
    {
        pos.0 += ball.direction * ball.speed;
        *aabb = Aabb::from_center_half_extents(pos.0, hull.half_extents);
    }
}
