use crate::{Ball, Config, DifficultyProfile, Paddle, Pointer, Side};
use hecs::World;

/// Map the latest pointer position onto the human paddle.
///
/// The normalized coordinate is scaled past 1:1 so the full paddle range is
/// reachable without dragging the pointer to the literal surface edges.
pub fn drive_human_paddle(world: &mut World, pointer: &Pointer, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Human {
            let target = pointer.x * config.pointer_gain * config.max_offset();
            paddle.offset = config.clamp_offset(target);
        }
    }
}

/// Exponential-smoothing pursuit of the ball's horizontal position.
///
/// Each frame the AI paddle closes a fixed fraction of the gap to the ball.
/// Low gain gives human-like lag, high gain near-perfect tracking; there is
/// no lookahead or prediction.
pub fn pursue_ball(world: &mut World, profile: &DifficultyProfile, config: &Config) {
    let ball_x = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.pos.x)
    };

    let Some(ball_x) = ball_x else {
        return; // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Ai {
            paddle.offset += (ball_x - paddle.offset) * profile.pursuit_gain;
            paddle.offset = config.clamp_offset(paddle.offset);
        }
    }
}
