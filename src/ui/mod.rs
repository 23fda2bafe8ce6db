pub mod systems;

use crate::ui::systems::render_weather_panel;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct WeatherUiPlugin;

impl Plugin for WeatherUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, render_weather_panel);
    }
}
