use bevy::prelude::Resource;
use rand::rngs::StdRng;
use windfield::WindParticleField;

/// The owned particle field engine instance
#[derive(Resource)]
pub struct OverlayEngine(pub WindParticleField<StdRng>);

/// Current weather panel values
#[derive(Resource, Clone)]
pub struct OverlaySettings {
    pub speed_kmh: f32,
    pub bearing_deg: f32,
    pub running: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            speed_kmh: 18.0,
            bearing_deg: 0.0,
            running: true,
        }
    }
}
