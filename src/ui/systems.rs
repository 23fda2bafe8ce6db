use crate::overlay::events::{ToggleOverlayMessage, WindSampleMessage};
use crate::overlay::resources::OverlaySettings;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Weather panel standing in for the live weather feed: in the full product
/// the sliders are replaced by samples from the forecast API refresh.
pub fn render_weather_panel(
    mut contexts: EguiContexts,
    mut settings: ResMut<OverlaySettings>,
    mut wind_messages: MessageWriter<WindSampleMessage>,
    mut toggle_messages: MessageWriter<ToggleOverlayMessage>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Wind").default_width(260.0).show(ctx, |ui| {
        let mut changed = false;

        ui.label("Speed (km/h)");
        changed |= ui
            .add(egui::Slider::new(&mut settings.speed_kmh, 0.0..=150.0).step_by(1.0))
            .changed();

        ui.label("Bearing (degrees from north)");
        changed |= ui
            .add(egui::Slider::new(&mut settings.bearing_deg, 0.0..=360.0).step_by(1.0))
            .changed();

        if changed {
            wind_messages.write(WindSampleMessage {
                speed_kmh: settings.speed_kmh,
                bearing_deg: settings.bearing_deg,
            });
        }

        ui.add_space(10.0);
        let label = if settings.running { "Pause" } else { "Resume" };
        if ui.button(label).clicked() {
            settings.running = !settings.running;
            toggle_messages.write(ToggleOverlayMessage {
                running: settings.running,
            });
        }
    });
}
