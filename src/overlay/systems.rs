// Wind overlay systems: engine lifecycle, frame advance and canvas upload

use crate::overlay::components::OverlayCanvas;
use crate::overlay::events::{ToggleOverlayMessage, WindSampleMessage};
use crate::overlay::resources::{OverlayEngine, OverlaySettings};
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::window::{PrimaryWindow, WindowResized};
use windfield::{Canvas, FieldConfig, WindParticleField};

const CONFIG_PATH: &str = "windveil_config.toml";

fn load_config() -> FieldConfig {
    match FieldConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => config,
        Err(err) => {
            warn!("Falling back to default field config: {}", err);
            FieldConfig::default()
        }
    }
}

/// Build an Image matching the engine canvas. Zero-sized canvases get a
/// transparent 1x1 placeholder since GPU textures cannot be empty.
fn field_image(canvas: &Canvas) -> Image {
    let mut image = Image::new_fill(
        Extent3d {
            width: canvas.width().max(1),
            height: canvas.height().max(1),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[0, 0, 0, 0],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    if !canvas.pixels().is_empty() {
        image.data = Some(canvas.pixels().to_vec());
    }
    image
}

/// Create the engine sized to the primary window and spawn the fullscreen
/// sprite its canvas is uploaded to
pub fn setup_overlay(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    window: Query<&Window, With<PrimaryWindow>>,
    settings: Res<OverlaySettings>,
) {
    let Ok(window) = window.single() else {
        return;
    };
    let width = window.width() as u32;
    let height = window.height() as u32;

    let mut engine = WindParticleField::new(width, height, load_config());
    engine.set_wind(settings.speed_kmh, settings.bearing_deg);
    engine.start();
    info!(
        "Wind overlay initialized at {}x{} with {} particles",
        width,
        height,
        engine.particles().len()
    );

    let handle = images.add(field_image(engine.canvas()));

    commands.spawn(Camera2d);
    commands.spawn((
        Sprite {
            image: handle,
            custom_size: Some(Vec2::new(width as f32, height as f32)),
            ..default()
        },
        Transform::default(),
        OverlayCanvas,
    ));
    commands.insert_resource(OverlayEngine(engine));
}

/// Push new wind samples into the engine as they arrive
pub fn apply_wind_samples(
    mut messages: MessageReader<WindSampleMessage>,
    mut engine: ResMut<OverlayEngine>,
) {
    for sample in messages.read() {
        debug!(
            "Wind sample: {} km/h from {} degrees",
            sample.speed_kmh, sample.bearing_deg
        );
        engine.0.set_wind(sample.speed_kmh, sample.bearing_deg);
    }
}

pub fn handle_toggle_messages(
    mut messages: MessageReader<ToggleOverlayMessage>,
    mut engine: ResMut<OverlayEngine>,
) {
    for msg in messages.read() {
        if msg.running {
            engine.0.start();
        } else {
            engine.0.stop();
        }
    }
}

/// Resize the engine surface and swap in a matching canvas texture.
/// Only the last resize of the frame matters.
pub fn handle_resize(
    mut messages: MessageReader<WindowResized>,
    mut engine: ResMut<OverlayEngine>,
    mut images: ResMut<Assets<Image>>,
    mut canvas_query: Query<&mut Sprite, With<OverlayCanvas>>,
) {
    let Some(resized) = messages.read().last() else {
        return;
    };
    let width = resized.width.max(0.0) as u32;
    let height = resized.height.max(0.0) as u32;
    engine.0.resize(width, height);

    let Ok(mut sprite) = canvas_query.single_mut() else {
        return;
    };
    sprite.image = images.add(field_image(engine.0.canvas()));
    sprite.custom_size = Some(Vec2::new(width as f32, height as f32));
    info!("Wind overlay resized to {}x{}", width, height);
}

/// Advance the engine one frame and upload the canvas pixels, skipping the
/// work entirely while the engine is stopped
pub fn advance_overlay(
    mut engine: ResMut<OverlayEngine>,
    mut images: ResMut<Assets<Image>>,
    canvas_query: Query<&Sprite, With<OverlayCanvas>>,
) {
    if !engine.0.is_running() {
        return;
    }
    engine.0.advance_frame();

    let Ok(sprite) = canvas_query.single() else {
        return;
    };
    let pixels = engine.0.canvas().pixels();
    if pixels.is_empty() {
        return;
    }
    if let Some(image) = images.get_mut(&sprite.image) {
        image.data = Some(pixels.to_vec());
    }
}
