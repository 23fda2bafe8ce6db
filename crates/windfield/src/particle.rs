use crate::config::ParticleConfig;
use glam::Vec2;
use rand::Rng;

/// A single trail particle, recycled in place for the engine's lifetime
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Position in surface pixels; may exceed bounds by the wrap margin
    pub position: Vec2,
    /// Frames survived since the last (re)spawn
    pub age: u32,
    /// Lifetime bound in frames, fixed at creation
    pub max_age: f32,
    /// Stroke alpha, fixed at creation
    pub opacity: f32,
}

impl Particle {
    /// Sample a fresh particle uniformly within [0, width) x [0, height).
    ///
    /// Uses U[0,1) * dimension rather than a ranged sample so that zero-sized
    /// surfaces degenerate to a single-point field instead of panicking.
    pub fn spawn(width: f32, height: f32, config: &ParticleConfig, rng: &mut impl Rng) -> Self {
        Self {
            position: Vec2::new(
                rng.random::<f32>() * width,
                rng.random::<f32>() * height,
            ),
            age: rng.random_range(0..config.initial_age_spread),
            max_age: config.min_max_age + rng.random::<f32>() * config.max_age_spread,
            opacity: config.min_opacity + rng.random::<f32>() * config.opacity_spread,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.age as f32 > self.max_age
    }
}
