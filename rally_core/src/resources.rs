use crate::components::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Match score tally
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub human: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Human => self.human += 1,
            Side::Ai => self.ai += 1,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.human >= win_score {
            Some(Side::Human)
        } else if self.ai >= win_score {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

/// Latest normalized pointer coordinate, roughly [-1, 1] on each axis.
/// Last write wins; the vertical component is kept for shells but unused
/// by the physics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

/// Per-point rally state. `first_hit` flips on the first paddle contact of
/// the point and governs the serve-to-rally speed snap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rally {
    pub first_hit: bool,
}

impl Rally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.first_hit = false;
    }
}

/// Pending deferred serve between points.
///
/// A frame-driven countdown rather than a detached callback: `cancel` clears
/// the target side, after which the timer can never fire.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeTimer {
    t_left: f32,
    toward: Option<Side>,
}

impl ServeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: f32, toward: Side) {
        self.t_left = delay;
        self.toward = Some(toward);
    }

    pub fn cancel(&mut self) {
        self.t_left = 0.0;
        self.toward = None;
    }

    pub fn is_pending(&self) -> bool {
        self.toward.is_some()
    }

    /// Count down; returns the receiving side once the delay has elapsed,
    /// clearing the pending serve.
    pub fn tick(&mut self, dt: f32) -> Option<Side> {
        self.toward?;
        self.t_left -= dt;
        if self.t_left <= 0.0 {
            self.toward.take()
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame. The paddle-hit and wall-bounce
/// flags double as fire-and-forget audio cues for the shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub human_scored: bool,
    pub ai_scored: bool,
    pub paddle_hit: bool,
    pub wall_bounce: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scorer(&self) -> Option<Side> {
        if self.human_scored {
            Some(Side::Human)
        } else if self.ai_scored {
            Some(Side::Ai)
        } else {
            None
        }
    }
}
