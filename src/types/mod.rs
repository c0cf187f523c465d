// Subtitle shell shared type definitions
// Each submodule defines types used across the application.

pub mod content;
pub mod errors;
pub mod event;
pub mod geometry;
pub mod history;
pub mod notification;
pub mod settings;
pub mod tab;
