//! Integration test modules for Orbit
//!
//! - engine: Builder, control surface, processors
//! - presets: Preset store and preset application
//! - render: Offline rendering through the export crate
//! - properties: Controls stay in range for any preset or slider input

pub mod engine;
pub mod presets;
pub mod properties;
pub mod render;
