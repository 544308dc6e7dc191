use crate::{Ball, Config, DifficultyProfile, Events, Paddle, Rally, Side};
use hecs::World;

/// Resolve ball-paddle contact for this step.
///
/// The human row is tested first, then the AI row; each test applies only
/// while the ball's depth velocity points at that row, so at most one can
/// fire per step.
pub fn resolve_paddle_contact(
    world: &mut World,
    config: &Config,
    profile: &DifficultyProfile,
    rally: &mut Rally,
    events: &mut Events,
) {
    // Collect paddle offsets without holding borrows
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.offset))
        .collect();

    let offset_of = |side: Side| {
        paddles
            .iter()
            .find(|(s, _)| *s == side)
            .map(|(_, offset)| *offset)
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let defender = if ball.vel.z > 0.0 {
            Side::Human
        } else if ball.vel.z < 0.0 {
            Side::Ai
        } else {
            continue; // Ball not moving on the depth axis
        };

        let Some(offset) = offset_of(defender) else {
            continue;
        };

        let paddle_z = config.paddle_depth * defender.depth_sign();
        let half_width = config.paddle_width / 2.0;

        let in_depth_band = (ball.pos.z - paddle_z).abs() <= config.ball_radius;
        let dx = ball.pos.x - offset;
        let in_reach = dx.abs() < half_width + config.ball_radius;

        if !(in_depth_band && in_reach) {
            continue;
        }

        let (deflect, growth) = match defender {
            Side::Human => (config.deflect_human, config.speed_growth_human),
            Side::Ai => (config.deflect_ai, config.speed_growth_ai),
        };

        // Speed is tracked before the deflection is mixed in, so the growth
        // factor compounds on rally speed rather than on deflection noise.
        let speed_before = ball.speed();

        // Send the ball back and angle it by where it met the paddle
        ball.vel.z = -ball.vel.z;
        ball.vel.x += dx / half_width * deflect;

        let target_speed = if rally.first_hit {
            (speed_before * growth).min(profile.max_speed)
        } else {
            // First touch of the point establishes rally speed
            rally.first_hit = true;
            profile.initial_speed
        };

        // vel.z is non-zero here, so the length can never be zero
        ball.vel = ball.vel / ball.vel.length() * target_speed;

        // Park the ball just outside the paddle row to prevent tunneling
        ball.pos.z = (config.paddle_depth - config.ball_radius) * defender.depth_sign();

        events.paddle_hit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Difficulty};
    use glam::Vec3;

    fn setup_world() -> (hecs::World, Config, DifficultyProfile, Rally, Events) {
        (
            hecs::World::new(),
            Config::new(),
            Difficulty::Easy.profile(),
            Rally::new(),
            Events::new(),
        )
    }

    fn ball_state(world: &hecs::World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap()
    }

    fn set_paddle_offset(world: &mut hecs::World, side: Side, offset: f32) {
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.offset = offset;
            }
        }
    }

    #[test]
    fn test_human_contact_reverses_depth_velocity() {
        let (mut world, config, profile, mut rally, mut events) = setup_world();
        create_paddle(&mut world, Side::Human);
        create_ball(
            &mut world,
            Vec3::new(0.0, config.ball_height(), config.paddle_depth),
            Vec3::new(0.0, 0.0, 5.0),
        );

        resolve_paddle_contact(&mut world, &config, &profile, &mut rally, &mut events);

        let ball = ball_state(&world);
        assert!(ball.vel.z < 0.0, "Ball sent back toward the AI side");
        assert!(events.paddle_hit, "Contact cue emitted");
        assert!(rally.first_hit, "First hit of the point recorded");
    }

    #[test]
    fn test_first_contact_snaps_to_initial_speed() {
        let (mut world, config, profile, mut rally, mut events) = setup_world();
        create_paddle(&mut world, Side::Human);
        // Serve arrives slow; the first touch must establish rally speed
        create_ball(
            &mut world,
            Vec3::new(0.0, config.ball_height(), config.paddle_depth),
            Vec3::new(0.0, 0.0, 3.5),
        );

        resolve_paddle_contact(&mut world, &config, &profile, &mut rally, &mut events);

        let ball = ball_state(&world);
        assert!(
            (ball.speed() - profile.initial_speed).abs() < 1e-4,
            "Speed should snap to exactly initial_speed, got {}",
            ball.speed()
        );
    }

    #[test]
    fn test_rally_contact_grows_speed() {
        let (mut world, config, profile, mut rally, mut events) = setup_world();
        rally.first_hit = true;
        create_paddle(&mut world, Side::Human);
        create_ball(
            &mut world,
            Vec3::new(0.0, config.ball_height(), config.paddle_depth),
            Vec3::new(0.0, 0.0, 10.0),
        );

        resolve_paddle_contact(&mut world, &config, &profile, &mut rally, &mut events);

        let ball = ball_state(&world);
        let expected = 10.0 * config.speed_growth_human;
        assert!(
            (ball.speed() - expected).abs() < 1e-4,
            "Human hit should grow speed by {}, got {}",
            config.speed_growth_human,
            ball.speed()
        );
    }

    #[test]
    fn test_speed_growth_caps_at_max() {
        let (mut world, config, profile, mut rally, mut events) = setup_world();
        rally.first_hit = true;
        create_paddle(&mut world, Side::Human);
        create_ball(
            &mut world,
            Vec3::new(0.0, config.ball_height(), config.paddle_depth),
            Vec3::new(0.0, 0.0, profile.max_speed),
        );

        resolve_paddle_contact(&mut world, &config, &profile, &mut rally, &mut events);

        let ball = ball_state(&world);
        assert!(
            ball.speed() <= profile.max_speed + 1e-4,
            "Speed must never exceed max_speed, got {}",
            ball.speed()
        );
    }

    #[test]
    fn test_contact_offset_deflects_horizontally() {
        let (mut world, config, profile, mut rally, mut events) = setup_world();
        rally.first_hit = true;
        create_paddle(&mut world, Side::Human);
        set_paddle_offset(&mut world, Side::Human, 0.0);

        // Contact half way between paddle center and edge
        let half_width = config.paddle_width / 2.0;
        let contact_x = 0.5 * half_width;
        let vz = 5.0;
        create_ball(
            &mut world,
            Vec3::new(contact_x, config.ball_height(), config.paddle_depth),
            Vec3::new(0.0, 0.0, vz),
        );

        resolve_paddle_contact(&mut world, &config, &profile, &mut rally, &mut events);

        // Before the magnitude rescale the deflection adds exactly
        // 0.5 * deflect_human to vx; the rescale preserves direction
        let ball = ball_state(&world);
        let expected_vx = 0.5 * config.deflect_human;
        let expected_ratio = expected_vx / -vz;
        assert!(
            (ball.vel.x / ball.vel.z - expected_ratio).abs() < 1e-5,
            "Post-contact direction should carry a +{expected_vx} deflection"
        );
        assert!(ball.vel.x > 0.0, "Off-center contact angles the return");
    }

    #[test]
    fn test_ai_contact_uses_its_own_constants() {
        let (mut world, config, profile, mut rally, mut events) = setup_world();
        rally.first_hit = true;
        create_paddle(&mut world, Side::Ai);
        create_ball(
            &mut world,
            Vec3::new(0.0, config.ball_height(), -config.paddle_depth),
            Vec3::new(0.0, 0.0, -10.0),
        );

        resolve_paddle_contact(&mut world, &config, &profile, &mut rally, &mut events);

        let ball = ball_state(&world);
        assert!(ball.vel.z > 0.0, "Ball sent back toward the human side");
        let expected = 10.0 * config.speed_growth_ai;
        assert!(
            (ball.speed() - expected).abs() < 1e-4,
            "AI hit should grow speed by {}, got {}",
            config.speed_growth_ai,
            ball.speed()
        );
    }

    #[test]
    fn test_ball_parked_outside_paddle_row() {
        let (mut world, config, profile, mut rally, mut events) = setup_world();
        create_paddle(&mut world, Side::Human);
        create_ball(
            &mut world,
            Vec3::new(0.0, config.ball_height(), config.paddle_depth + 0.2),
            Vec3::new(0.0, 0.0, 8.0),
        );

        resolve_paddle_contact(&mut world, &config, &profile, &mut rally, &mut events);

        let ball = ball_state(&world);
        assert_eq!(
            ball.pos.z,
            config.paddle_depth - config.ball_radius,
            "Ball clamped just inside the human paddle row"
        );
    }

    #[test]
    fn test_no_contact_when_moving_away() {
        let (mut world, config, profile, mut rally, mut events) = setup_world();
        create_paddle(&mut world, Side::Human);
        // In the human depth band but heading toward the AI side
        create_ball(
            &mut world,
            Vec3::new(0.0, config.ball_height(), config.paddle_depth),
            Vec3::new(0.0, 0.0, -5.0),
        );

        resolve_paddle_contact(&mut world, &config, &profile, &mut rally, &mut events);
        assert!(!events.paddle_hit, "No contact while moving away");
        assert!(!rally.first_hit);
    }

    #[test]
    fn test_no_contact_outside_horizontal_reach() {
        let (mut world, config, profile, mut rally, mut events) = setup_world();
        create_paddle(&mut world, Side::Human);
        set_paddle_offset(&mut world, Side::Human, -5.0);
        create_ball(
            &mut world,
            Vec3::new(5.0, config.ball_height(), config.paddle_depth),
            Vec3::new(0.0, 0.0, 5.0),
        );

        resolve_paddle_contact(&mut world, &config, &profile, &mut rally, &mut events);
        assert!(!events.paddle_hit, "Paddle out of reach, ball passes");
    }
}
