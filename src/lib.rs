mod overlay;
mod ui;

use crate::overlay::OverlayPlugin;
use crate::ui::WeatherUiPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub struct WindveilPlugin;

impl Plugin for WindveilPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((EguiPlugin::default(), OverlayPlugin, WeatherUiPlugin));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
