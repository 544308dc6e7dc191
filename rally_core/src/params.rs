/// Tuning parameters for the table-tennis simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table
    pub const TABLE_WIDTH: f32 = 16.0;
    pub const TABLE_SURFACE_Y: f32 = 1.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 3.0;
    pub const PADDLE_DEPTH: f32 = 13.0; // distance of each paddle row from center
    pub const POINTER_GAIN: f32 = 1.1; // full paddle range without edge-to-edge pointer travel

    // Ball
    pub const BALL_RADIUS: f32 = 0.4;

    // Contact response (asymmetric: the human side gets sharper angle control)
    pub const DEFLECT_HUMAN: f32 = 3.0;
    pub const DEFLECT_AI: f32 = 2.0;
    pub const SPEED_GROWTH_HUMAN: f32 = 1.05;
    pub const SPEED_GROWTH_AI: f32 = 1.03;

    // Serve
    pub const SERVE_SPEED: f32 = 3.5;
    pub const SERVE_ANGLE: f32 = 0.25; // radians, drawn uniformly from +/- this
    pub const SERVE_DELAY: f32 = 1.2; // pause between points

    // Scoring
    pub const SCORE_DEPTH: f32 = 16.0; // past the paddle rows
    pub const WIN_SCORE: u8 = 7;

    // Physics
    pub const MAX_DT: f32 = 0.05; // clamp on frame time after render stalls
    // Micro-step size; keeps the fastest legal ball displacement inside the
    // paddle contact band (fastest tier: 30.0 * 0.0166 < 2 * BALL_RADIUS)
    pub const FIXED_DT: f32 = 0.0166;
}
