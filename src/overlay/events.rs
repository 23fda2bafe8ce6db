use bevy::prelude::*;

/// A fresh wind sample from the weather collaborator
#[derive(Message)]
pub struct WindSampleMessage {
    pub speed_kmh: f32,
    pub bearing_deg: f32,
}

/// Pause or resume the overlay engine
#[derive(Message)]
pub struct ToggleOverlayMessage {
    pub running: bool,
}
