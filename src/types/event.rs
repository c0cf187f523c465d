use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// Mouse button reported with press and release events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// What part of the chrome the pointer was over when the event was produced.
///
/// The front end knows which widget sits under the pointer; the controller
/// only needs this coarse classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerRegion {
    /// Chrome strip background: drags the window.
    Draggable,
    /// Empty area of the tab strip, forwarded to the window as a drag.
    TabStripEmpty,
    /// Buttons, tabs and other interactive chrome widgets.
    Control,
    /// Tool content below the chrome.
    Content,
}

impl PointerRegion {
    pub fn is_draggable(&self) -> bool {
        matches!(self, PointerRegion::Draggable | PointerRegion::TabStripEmpty)
    }
}

/// Low-level events dispatched into the frameless window controller.
///
/// Positions are global (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChromeEvent {
    PointerPressed {
        button: MouseButton,
        global: Point,
        region: PointerRegion,
    },
    PointerMoved {
        global: Point,
    },
    PointerReleased {
        button: MouseButton,
        global: Point,
    },
    /// The window was maximized or restored by someone other than the controller.
    WindowStateChanged {
        maximized: bool,
    },
}

/// Whether the controller used an event or left it to the widget under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventDisposition {
    Consumed,
    PassThrough,
}

/// Pointer shape shown over the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorShape {
    #[default]
    Default,
    /// Left or right edge.
    ResizeHorizontal,
    /// Top or bottom edge.
    ResizeVertical,
    /// Top-left or bottom-right corner.
    ResizeNwSe,
    /// Top-right or bottom-left corner.
    ResizeNeSw,
}

/// Icon state of the maximize/restore button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaximizeAffordance {
    /// Window is normal; the button offers to maximize.
    Maximize,
    /// Window is maximized; the button offers to restore.
    Restore,
}

impl MaximizeAffordance {
    pub fn for_maximized(maximized: bool) -> Self {
        if maximized {
            MaximizeAffordance::Restore
        } else {
            MaximizeAffordance::Maximize
        }
    }
}
