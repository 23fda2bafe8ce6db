use serde::{Deserialize, Serialize};

/// Configuration for the wind particle field engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    pub particles: ParticleConfig,
    pub motion: MotionConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Fixed pool size, constant for the engine's lifetime
    pub count: usize,
    /// Initial ages are drawn from 0..initial_age_spread to stagger respawns
    pub initial_age_spread: u32,
    /// Lifetime is min_max_age + U[0,1) * max_age_spread frames
    pub min_max_age: f32,
    pub max_age_spread: f32,
    /// Stroke alpha is min_opacity + U[0,1) * opacity_spread
    pub min_opacity: f32,
    pub opacity_spread: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Scales wind speed (km/h) into the shared velocity magnitude
    pub speed_multiplier: f32,
    /// Scales (velocity + jitter) into a per-frame position delta.
    /// Tuned jointly with RenderConfig::fade_alpha: together they control
    /// how long the trails appear.
    pub speed_factor: f32,
    /// Per-axis uniform jitter bound, sampled each frame per particle
    pub jitter: f32,
    /// Pixels past the surface edge before a particle wraps to the far side
    pub wrap_margin: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Fraction of existing trail alpha erased per frame (destination-out)
    pub fade_alpha: f32,
    pub line_width: f32,
    /// Stroke color, RGB
    pub color: [u8; 3],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particles: ParticleConfig {
                count: 1500,
                initial_age_spread: 100,
                min_max_age: 30.0,
                max_age_spread: 40.0,
                min_opacity: 0.3,
                opacity_spread: 0.5,
            },
            motion: MotionConfig {
                speed_multiplier: 0.5,
                speed_factor: 0.2,
                jitter: 0.25,
                wrap_margin: 20.0,
            },
            render: RenderConfig {
                fade_alpha: 0.12,
                line_width: 1.2,
                // Brand orange (#fa6533)
                color: [250, 101, 51],
            },
        }
    }
}

impl FieldConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: FieldConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = FieldConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: FieldConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed.particles.count, config.particles.count);
        assert_eq!(parsed.render.color, config.render.color);
        assert_eq!(parsed.motion.wrap_margin, config.motion.wrap_margin);
    }

    #[test]
    fn test_default_pool_size() {
        assert_eq!(FieldConfig::default().particles.count, 1500);
    }
}
