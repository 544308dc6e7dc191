use crate::params::Params;

/// Simulation configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub table_width: f32,
    pub table_surface_y: f32,
    pub paddle_width: f32,
    pub paddle_depth: f32,
    pub pointer_gain: f32,
    pub ball_radius: f32,
    pub deflect_human: f32,
    pub deflect_ai: f32,
    pub speed_growth_human: f32,
    pub speed_growth_ai: f32,
    pub serve_speed: f32,
    pub serve_angle: f32,
    pub serve_delay: f32,
    pub score_depth: f32,
    pub win_score: u8,
    pub max_dt: f32,
    pub fixed_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_width: Params::TABLE_WIDTH,
            table_surface_y: Params::TABLE_SURFACE_Y,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_depth: Params::PADDLE_DEPTH,
            pointer_gain: Params::POINTER_GAIN,
            ball_radius: Params::BALL_RADIUS,
            deflect_human: Params::DEFLECT_HUMAN,
            deflect_ai: Params::DEFLECT_AI,
            speed_growth_human: Params::SPEED_GROWTH_HUMAN,
            speed_growth_ai: Params::SPEED_GROWTH_AI,
            serve_speed: Params::SERVE_SPEED,
            serve_angle: Params::SERVE_ANGLE,
            serve_delay: Params::SERVE_DELAY,
            score_depth: Params::SCORE_DEPTH,
            win_score: Params::WIN_SCORE,
            max_dt: Params::MAX_DT,
            fixed_dt: Params::FIXED_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Height the ball travels at (fixed for the whole match)
    pub fn ball_height(&self) -> f32 {
        self.table_surface_y + self.ball_radius
    }

    /// Maximum horizontal paddle offset from center
    pub fn max_offset(&self) -> f32 {
        self.table_width / 2.0 - self.paddle_width / 2.0
    }

    /// Clamp a paddle offset to the playable range
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        let max = self.max_offset();
        offset.clamp(-max, max)
    }

    /// Horizontal position at which the ball reflects off a side wall
    pub fn wall_x(&self) -> f32 {
        self.table_width / 2.0 - self.ball_radius
    }
}
