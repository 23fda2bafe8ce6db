pub mod components;
pub mod events;
pub mod resources;
pub mod systems;

use crate::overlay::events::*;
use crate::overlay::resources::OverlaySettings;
use crate::overlay::systems::*;
use bevy::prelude::*;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<WindSampleMessage>()
            .add_message::<ToggleOverlayMessage>()
            .init_resource::<OverlaySettings>()
            .add_systems(Startup, setup_overlay)
            .add_systems(
                Update,
                (
                    apply_wind_samples,
                    handle_toggle_messages,
                    handle_resize,
                    advance_overlay,
                )
                    .chain(),
            );
    }
}
