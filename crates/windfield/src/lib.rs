pub mod canvas;
pub mod config;
pub mod field;
pub mod particle;
pub mod wind;

pub use canvas::Canvas;
pub use config::FieldConfig;
pub use field::{EngineState, WindParticleField};
pub use wind::WindSample;
