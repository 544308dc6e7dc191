use crate::{Ball, Config, Events, Time};
use hecs::World;

/// Integrate ball motion on the horizontal plane and reflect off the side
/// walls. The depth axis is left unbounded here; the scoring thresholds
/// bound it instead.
pub fn move_ball(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos.x += ball.vel.x * time.dt;
        ball.pos.z += ball.vel.z * time.dt;

        // Clamp-then-reflect: the ball is never allowed past a wall
        let wall = config.wall_x();
        if ball.pos.x <= -wall {
            ball.pos.x = -wall;
            ball.vel.x = ball.vel.x.abs();
            events.wall_bounce = true;
        } else if ball.pos.x >= wall {
            ball.pos.x = wall;
            ball.vel.x = -ball.vel.x.abs();
            events.wall_bounce = true;
        }
    }
}
