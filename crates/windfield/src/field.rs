use crate::canvas::Canvas;
use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::wind::WindSample;
use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Whether the per-frame driver should keep advancing the engine.
///
/// The driver checks this before every scheduled step, so `stop()` gives a
/// clean shutdown path instead of an unbounded self-perpetuating loop.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EngineState {
    #[default]
    Stopped,
    Running,
}

/// The wind particle field engine.
///
/// Owns a fixed-size pool of particles, the shared velocity derived from the
/// last wind sample, and the canvas the trails are drawn onto. External
/// callers influence it only through `set_wind` and `resize`; the hosting
/// application drives `advance_frame` once per display frame while the
/// engine is running.
pub struct WindParticleField<R: Rng> {
    config: FieldConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    wind: WindSample,
    velocity: Vec2,
    canvas: Canvas,
    state: EngineState,
    rng: R,
}

impl WindParticleField<StdRng> {
    pub fn new(width: u32, height: u32, config: FieldConfig) -> Self {
        Self::with_rng(width, height, config, StdRng::from_os_rng())
    }
}

impl<R: Rng> WindParticleField<R> {
    /// Construct a stopped engine with an injected random source.
    ///
    /// A seeded rng makes every spawn and jitter decision reproducible,
    /// which the tests rely on.
    pub fn with_rng(width: u32, height: u32, config: FieldConfig, rng: R) -> Self {
        let mut field = Self {
            width: width as f32,
            height: height as f32,
            particles: Vec::with_capacity(config.particles.count),
            wind: WindSample::default(),
            velocity: WindSample::default().to_surface_velocity(config.motion.speed_multiplier),
            canvas: Canvas::new(width, height),
            state: EngineState::Stopped,
            config,
            rng,
        };
        field.initialize();
        field
    }

    /// (Re)populate the whole pool with freshly sampled particles
    pub fn initialize(&mut self) {
        self.particles.clear();
        for _ in 0..self.config.particles.count {
            self.particles.push(Particle::spawn(
                self.width,
                self.height,
                &self.config.particles,
                &mut self.rng,
            ));
        }
    }

    /// Update surface dimensions and re-seed the pool.
    ///
    /// Previous particle state is discarded: coordinates sampled for the old
    /// bounds would be visually invalid in the new ones, and resize is rare
    /// enough that the discontinuity does not matter.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
        self.canvas.resize(width, height);
        self.initialize();
    }

    /// Recompute the shared velocity from a new wind sample
    pub fn set_wind(&mut self, speed_kmh: f32, bearing_deg: f32) {
        self.wind = WindSample::new(speed_kmh, bearing_deg);
        self.velocity = self
            .wind
            .to_surface_velocity(self.config.motion.speed_multiplier);
    }

    pub fn start(&mut self) {
        self.state = EngineState::Running;
    }

    pub fn stop(&mut self) {
        self.state = EngineState::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    /// Advance the simulation by one frame and render it.
    ///
    /// Per frame: fade the existing trails, then for every particle move it
    /// by the shared velocity plus local jitter, stroke the segment it
    /// traveled, and apply the lifecycle rules. Respawn takes precedence
    /// over edge wrapping.
    pub fn advance_frame(&mut self) {
        self.canvas.fade(self.config.render.fade_alpha);

        let jitter = self.config.motion.jitter;
        let speed_factor = self.config.motion.speed_factor;
        let margin = self.config.motion.wrap_margin;
        let line_width = self.config.render.line_width;
        let color = self.config.render.color;

        for particle in &mut self.particles {
            let old_position = particle.position;

            let noise = if jitter > 0.0 {
                Vec2::new(
                    self.rng.random_range(-jitter..jitter),
                    self.rng.random_range(-jitter..jitter),
                )
            } else {
                Vec2::ZERO
            };
            particle.position += (self.velocity + noise) * speed_factor;
            particle.age += 1;

            self.canvas.stroke_segment(
                old_position,
                particle.position,
                line_width,
                color,
                particle.opacity,
            );

            if particle.is_expired() {
                *particle = Particle::spawn(
                    self.width,
                    self.height,
                    &self.config.particles,
                    &mut self.rng,
                );
                particle.age = 0;
            } else {
                wrap_position(&mut particle.position, self.width, self.height, margin);
            }
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn wind(&self) -> WindSample {
        self.wind
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// Teleport a coordinate that drifted past the wrap margin to the opposite
/// edge, keeping flowing particles visually continuous at the borders
fn wrap_position(position: &mut Vec2, width: f32, height: f32, margin: f32) {
    if position.x < -margin {
        position.x = width + margin;
    } else if position.x > width + margin {
        position.x = -margin;
    }

    if position.y < -margin {
        position.y = height + margin;
    } else if position.y > height + margin {
        position.y = -margin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_field(width: u32, height: u32, seed: u64) -> WindParticleField<StdRng> {
        WindParticleField::with_rng(
            width,
            height,
            FieldConfig::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn test_pool_size_is_invariant() {
        let mut field = test_field(800, 600, 7);
        assert_eq!(field.particles().len(), 1500);

        field.set_wind(50.0, 225.0);
        for _ in 0..200 {
            field.advance_frame();
        }
        assert_eq!(field.particles().len(), 1500);

        field.resize(400, 300);
        assert_eq!(field.particles().len(), 1500);
    }

    #[test]
    fn test_age_never_exceeds_max_age_plus_one() {
        let mut field = test_field(800, 600, 11);
        field.set_wind(10.0, 45.0);

        // Initial ages are deliberately spread past max_age to stagger
        // respawns; after the first frame the lifetime bound holds.
        field.advance_frame();
        for _ in 0..150 {
            field.advance_frame();
            for p in field.particles() {
                assert!(p.age as f32 <= p.max_age + 1.0);
            }
        }
    }

    #[test]
    fn test_expired_particles_respawn_with_age_zero() {
        let mut field = test_field(800, 600, 13);
        field.set_wind(10.0, 0.0);

        let expired: Vec<usize> = field
            .particles()
            .iter()
            .enumerate()
            .filter(|(_, p)| (p.age + 1) as f32 > p.max_age)
            .map(|(i, _)| i)
            .collect();
        assert!(!expired.is_empty());

        field.advance_frame();
        for i in expired {
            assert_eq!(field.particles()[i].age, 0);
        }
    }

    #[test]
    fn test_positions_stay_within_wrap_margin() {
        let mut field = test_field(200, 150, 17);
        field.set_wind(120.0, 315.0);

        for _ in 0..500 {
            field.advance_frame();
            for p in field.particles() {
                assert!(p.position.x >= -20.0 && p.position.x <= 220.0);
                assert!(p.position.y >= -20.0 && p.position.y <= 170.0);
            }
        }
    }

    #[test]
    fn test_resize_reseeds_into_new_bounds() {
        let mut field = test_field(800, 600, 19);
        field.resize(320, 240);

        assert_eq!(field.dimensions(), (320.0, 240.0));
        assert_eq!(field.canvas().width(), 320);
        assert_eq!(field.canvas().height(), 240);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 320.0);
            assert!(p.position.y >= 0.0 && p.position.y < 240.0);
        }
    }

    #[test]
    fn test_start_stop_state_machine() {
        let mut field = test_field(100, 100, 23);
        assert!(!field.is_running());

        field.start();
        assert!(field.is_running());

        field.stop();
        assert!(!field.is_running());
    }

    #[test]
    fn test_zero_sized_surface_does_not_panic() {
        let mut field = test_field(0, 0, 29);
        field.set_wind(40.0, 90.0);
        for _ in 0..10 {
            field.advance_frame();
        }
        assert_eq!(field.particles().len(), 1500);
    }

    // 36 km/h from due north: magnitude max(1, 36) * 0.5 = 18 pointing
    // straight down, so each particle moves by about 18 * 0.2 = 3.6 in y
    // plus bounded jitter, and only jitter in x.
    #[test]
    fn test_north_wind_moves_particles_down() {
        let mut field = test_field(800, 600, 31);
        field.set_wind(36.0, 0.0);

        let v = field.velocity();
        assert!(v.x.abs() < 1e-3);
        assert!((v.y - 18.0).abs() < 1e-3);

        let before: Vec<_> = field.particles().to_vec();
        field.advance_frame();

        for (old, new) in before.iter().zip(field.particles()) {
            // Skip particles the lifecycle replaced this frame
            if (old.age + 1) as f32 > old.max_age {
                continue;
            }
            let delta = new.position - old.position;
            assert!(
                (delta.y - 3.6).abs() <= 0.1,
                "dy = {}, expected about 3.6",
                delta.y
            );
            assert!(delta.x.abs() <= 0.1, "dx = {}, expected only jitter", delta.x);
        }
    }

    #[test]
    fn test_advance_frame_leaves_strokes_on_the_canvas() {
        let mut field = test_field(256, 256, 37);
        field.set_wind(30.0, 0.0);
        field.advance_frame();

        assert!(field.canvas().pixels().iter().any(|&b| b != 0));
    }
}
