// Wind sample to surface velocity conversion
//
// Wind samples arrive in meteorological convention: bearing 0 means wind
// blowing FROM the north (so particles move south), 90 means from the east
// (particles move west). The drawing surface uses the usual right-handed
// screen convention where angle 0 points right and 90 points down.

use glam::Vec2;

/// The last received wind sample, updated wholesale by the weather collaborator
#[derive(Clone, Copy, Debug, Default)]
pub struct WindSample {
    /// Wind speed in km/h, >= 0 expected but not enforced
    pub speed_kmh: f32,
    /// Compass bearing in degrees, 0 = from north
    pub bearing_deg: f32,
}

impl WindSample {
    pub const fn new(speed_kmh: f32, bearing_deg: f32) -> Self {
        Self {
            speed_kmh,
            bearing_deg,
        }
    }

    /// Convert to the shared 2D velocity applied to every particle.
    ///
    /// Adding 90° maps the meteorological bearing onto the surface angle:
    /// bearing 0 (from north) becomes surface angle 90° = straight down,
    /// bearing 90 (from east) becomes 180° = leftward.
    ///
    /// The max(1, speed) floor keeps the field drifting in calm conditions
    /// instead of freezing into a visually dead frame.
    pub fn to_surface_velocity(&self, speed_multiplier: f32) -> Vec2 {
        let rad = (self.bearing_deg + 90.0).to_radians();
        let magnitude = self.speed_kmh.max(1.0) * speed_multiplier;
        Vec2::new(rad.cos(), rad.sin()) * magnitude
    }
}
