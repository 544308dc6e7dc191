use glam::Vec3;

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Ai,
            Side::Ai => Side::Human,
        }
    }

    /// Sign of the depth axis on this side (human end is +z, AI end is -z)
    pub fn depth_sign(self) -> f32 {
        match self {
            Side::Human => 1.0,
            Side::Ai => -1.0,
        }
    }
}

/// Paddle component - horizontal offset from the table center line
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub offset: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self { side, offset: 0.0 }
    }
}

/// Ball component
///
/// The height component (y) is fixed at table height plus ball radius for the
/// whole match; only motion in the horizontal plane (x, z) evolves.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
}

impl Ball {
    pub fn at_rest(height: f32) -> Self {
        Self {
            pos: Vec3::new(0.0, height, 0.0),
            vel: Vec3::ZERO,
        }
    }

    /// Reset to center and launch toward the receiving side at a narrow
    /// random angle. Always produces a non-zero velocity.
    pub fn serve(
        &mut self,
        toward: Side,
        speed: f32,
        angle_range: f32,
        height: f32,
        rng: &mut crate::GameRng,
    ) {
        use rand::Rng;
        self.pos = Vec3::new(0.0, height, 0.0);

        let angle: f32 = rng.0.gen_range(-angle_range..angle_range);
        self.vel = Vec3::new(
            angle.sin() * speed,
            0.0,
            angle.cos() * speed * toward.depth_sign(),
        );
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
