//! Deterministic core of a 3D table-tennis game: ball kinematics, paddle
//! control (pointer-driven human, pursuit-driven AI), collision and scoring
//! resolution, and the match phase machine. Rendering, audio, and input
//! capture live in shells that consume [`MatchSim`] snapshots.

pub mod components;
pub mod config;
pub mod difficulty;
pub mod fsm;
pub mod match_sim;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use difficulty::*;
pub use fsm::*;
pub use match_sim::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one simulation step of the rally.
///
/// Drives the paddles once (the pursuit gain is a per-frame coefficient),
/// then integrates the ball in fixed micro-steps: `time.dt` is clamped
/// first, and each micro-step is small enough that the fastest legal ball
/// cannot cross the paddle contact band between checks.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    profile: &DifficultyProfile,
    pointer: &Pointer,
    rally: &mut Rally,
    score: &mut Score,
    events: &mut Events,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(config.max_dt);

    // Clear events at start of frame
    events.clear();

    // 1. Drive paddles
    drive_human_paddle(world, pointer, config);
    pursue_ball(world, profile, config);

    // 2. Fixed micro-steps for stable ball physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(config.fixed_dt);
        remaining_dt -= step_dt;

        let step_time = Time::new(step_dt, time.now + (clamped_dt - remaining_dt));

        // Move ball (integration + side-wall reflection)
        move_ball(world, &step_time, config, events);

        // Resolve paddle contact
        resolve_paddle_contact(world, config, profile, rally, events);

        // Check scoring (ball crossed a far boundary)
        check_scoring(world, config, score, events);

        // The point is over; the ball stays frozen for the rest of the frame
        if events.scorer().is_some() {
            break;
        }
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side) -> hecs::Entity {
    world.spawn((Paddle::new(side),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec3, vel: glam::Vec3) -> hecs::Entity {
    world.spawn((Ball { pos, vel },))
}
