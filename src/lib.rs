//! Subtitle shell - a tabbed, frameless desktop shell for subtitle tools.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod cli;
pub mod ipc_handler;
pub mod managers;
pub mod platform;
pub mod services;
pub mod tools;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
