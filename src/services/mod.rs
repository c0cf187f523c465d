// Subtitle shell services
// Services are stateless or load-once helpers: geometry math, press classification, the tool registry, config.

pub mod config_loader;
pub mod geometry_engine;
pub mod gesture_classifier;
pub mod tool_registry;
