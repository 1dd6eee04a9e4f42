//! Preset resolution.

mod resolver;

pub use resolver::PresetResolver;
