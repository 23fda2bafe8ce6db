use bevy::prelude::*;

/// Marker component for the fullscreen sprite showing the particle canvas
#[derive(Component)]
pub struct OverlayCanvas;
