//! Owning orchestrator for a match.
//!
//! `MatchSim` is the single simulation context: it owns the world, every
//! per-frame resource, the phase machine, and the bound difficulty profile.
//! Shells write pointer positions and user intents into it, call `frame`
//! once per rendered frame, and read a snapshot back out. Nothing outside
//! this struct mutates simulation state.

use glam::Vec3;
use hecs::World;
use log::debug;

use crate::fsm::{MatchAction, MatchFsm, Phase, TransitionResult};
use crate::{
    create_ball, create_paddle, step, Ball, Config, Difficulty, DifficultyProfile, Events,
    GameRng, Paddle, Pointer, Rally, Score, ServeTimer, Side, Time,
};

/// Read-only frame state for rendering and audio
#[derive(Debug, Clone, Copy)]
pub struct MatchSnapshot {
    pub ball_pos: Vec3,
    pub human_offset: f32,
    pub ai_offset: f32,
    pub phase: Phase,
    pub human_score: u8,
    pub ai_score: u8,
    /// Set only while the phase is `Won`
    pub winner: Option<Side>,
    /// Fire-and-forget audio cues for the frame just simulated
    pub paddle_hit: bool,
    pub wall_bounce: bool,
}

pub struct MatchSim {
    world: World,
    time: Time,
    config: Config,
    fsm: MatchFsm,
    difficulty: Difficulty,
    profile: DifficultyProfile,
    score: Score,
    events: Events,
    pointer: Pointer,
    rally: Rally,
    serve_timer: ServeTimer,
    rng: GameRng,
    winner: Option<Side>,
}

impl MatchSim {
    pub fn new(seed: u64) -> Self {
        let config = Config::new();
        let mut world = World::new();

        create_paddle(&mut world, Side::Human);
        create_paddle(&mut world, Side::Ai);
        create_ball(
            &mut world,
            Vec3::new(0.0, config.ball_height(), 0.0),
            Vec3::ZERO,
        );

        Self {
            world,
            time: Time::new(0.016, 0.0),
            config,
            fsm: MatchFsm::new(),
            difficulty: Difficulty::Easy,
            profile: Difficulty::Easy.profile(),
            score: Score::new(),
            events: Events::new(),
            pointer: Pointer::default(),
            rally: Rally::new(),
            serve_timer: ServeTimer::new(),
            rng: GameRng::new(seed),
            winner: None,
        }
    }

    /// Latest pointer position from the input shell; last write wins
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Pointer { x, y };
    }

    /// Pick a tier and start the match; the profile is bound only when the
    /// transition is accepted
    pub fn start_match(&mut self, difficulty: Difficulty) -> TransitionResult {
        let result = self.fsm.transition(MatchAction::StartMatch);
        if result.success {
            self.difficulty = difficulty;
            self.profile = difficulty.profile();
            self.begin_match();
        }
        result
    }

    /// Apply a user intent; side effects run only on accepted transitions
    pub fn apply(&mut self, action: MatchAction) -> TransitionResult {
        let result = self.fsm.transition(action);
        if result.success {
            match action {
                MatchAction::StartMatch => self.begin_match(),
                MatchAction::ReturnToMenu => self.abandon(),
                MatchAction::Rematch => self.winner = None,
                _ => {}
            }
        }
        result
    }

    /// Advance the match by one rendered frame
    pub fn frame(&mut self, dt: f32) {
        match self.fsm.phase() {
            Phase::Playing => {
                self.time.dt = dt;
                step(
                    &mut self.world,
                    &mut self.time,
                    &self.config,
                    &self.profile,
                    &self.pointer,
                    &mut self.rally,
                    &mut self.score,
                    &mut self.events,
                );
                if let Some(scorer) = self.events.scorer() {
                    self.resolve_point(scorer);
                }
            }
            Phase::BetweenPoints => {
                // Frozen ball; only the serve delay counts down
                self.events.clear();
                if let Some(toward) = self.serve_timer.tick(dt) {
                    self.serve(toward);
                    self.fsm.transition(MatchAction::ServeReady);
                }
            }
            _ => self.events.clear(),
        }
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let mut ball_pos = Vec3::ZERO;
        for (_entity, ball) in self.world.query::<&Ball>().iter() {
            ball_pos = ball.pos;
        }

        let mut human_offset = 0.0;
        let mut ai_offset = 0.0;
        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Human => human_offset = paddle.offset,
                Side::Ai => ai_offset = paddle.offset,
            }
        }

        MatchSnapshot {
            ball_pos,
            human_offset,
            ai_offset,
            phase: self.fsm.phase(),
            human_score: self.score.human,
            ai_score: self.score.ai,
            winner: self.winner,
            paddle_hit: self.events.paddle_hit,
            wall_bounce: self.events.wall_bounce,
        }
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn begin_match(&mut self) {
        self.score = Score::new();
        self.winner = None;
        self.serve_timer.cancel();
        // Opening serve goes toward the human side
        self.serve(Side::Human);
    }

    fn abandon(&mut self) {
        // Invalidate the pending serve so nothing fires against stale state
        self.serve_timer.cancel();
        self.winner = None;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.vel = Vec3::ZERO;
        }
    }

    fn serve(&mut self, toward: Side) {
        self.rally.reset();
        let config = &self.config;
        let rng = &mut self.rng;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(
                toward,
                config.serve_speed,
                config.serve_angle,
                config.ball_height(),
                rng,
            );
        }
    }

    fn resolve_point(&mut self, scorer: Side) {
        debug!(
            "point to {scorer:?}: {} - {}",
            self.score.human, self.score.ai
        );
        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.winner = Some(winner);
            self.fsm.transition(MatchAction::MatchWon);
        } else {
            // The side that conceded receives the next serve
            self.serve_timer
                .schedule(self.config.serve_delay, scorer.opponent());
            self.fsm.transition(MatchAction::PointScored);
        }
    }
}
