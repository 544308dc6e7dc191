use crate::{Ball, Config, Events, Score, Side};
use hecs::World;

/// Detect the ball crossing a far boundary and credit the point.
///
/// Runs after contact resolution, so a boundary crossing means the defending
/// paddle was not in range. The orchestrator reacts to the event; the ball
/// itself is left frozen in place until the next serve.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.z < -config.score_depth {
            // Past the AI side
            score.increment(Side::Human);
            events.human_scored = true;
        } else if ball.pos.z > config.score_depth {
            // Past the human side
            score.increment(Side::Ai);
            events.ai_scored = true;
        }
    }
}
