use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Size};

/// Top-level shell configuration, read from `config.json`.
///
/// Every section falls back to its defaults when absent, so a partial file
/// only overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ShellConfig {
    pub window: WindowSettings,
    pub chrome: ChromeSettings,
    pub startup: StartupSettings,
}

/// Initial main-window placement and size limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub min_width: i32,
    pub min_height: i32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Subtitle Manipulator".to_string(),
            x: 100,
            y: 100,
            width: 800,
            height: 600,
            min_width: 480,
            min_height: 320,
        }
    }
}

impl WindowSettings {
    pub fn initial_geometry(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn minimum_size(&self) -> Size {
        Size::new(self.min_width.max(0), self.min_height.max(0))
    }
}

/// Kinds of frameless window the chrome controller can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    Main,
    Dialog,
    Settings,
}

/// Custom chrome behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChromeSettings {
    /// Width of the invisible resize band along each window edge.
    pub resize_margin: i32,
    /// Height of the chrome strip holding the tabs and window buttons.
    pub chrome_height: i32,
    /// Horizontal space reserved for the navigation, menu and window buttons.
    pub reserved_width: i32,
    pub resize_main_window: bool,
    pub resize_dialogs: bool,
    pub resize_settings: bool,
}

impl Default for ChromeSettings {
    fn default() -> Self {
        Self {
            resize_margin: 5,
            chrome_height: 38,
            reserved_width: 315,
            resize_main_window: true,
            resize_dialogs: false,
            resize_settings: true,
        }
    }
}

impl ChromeSettings {
    pub fn resizable(&self, kind: WindowKind) -> bool {
        match kind {
            WindowKind::Main => self.resize_main_window,
            WindowKind::Dialog => self.resize_dialogs,
            WindowKind::Settings => self.resize_settings,
        }
    }
}

/// Startup behaviour when a file is passed on the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StartupSettings {
    /// Tool used for a file argument when `--tool` is not given.
    pub default_file_tool: String,
}

impl Default for StartupSettings {
    fn default() -> Self {
        Self {
            default_file_tool: "srt_editor".to_string(),
        }
    }
}
