// Subtitle shell platform abstraction
// The chrome controller drives the native window only through `WindowPrimitive`.
// The GUI front end implements it over a tao window; `HeadlessWindow` backs the
// RPC server, the console demo and the tests.

mod headless;

pub use headless::HeadlessWindow;

use crate::types::errors::WindowError;
use crate::types::event::CursorShape;
use crate::types::geometry::{Point, Rect, Size};

/// Operations the chrome controller needs from a native window.
///
/// Implementors are handles: the controller calls them but never owns the
/// window's lifetime. Every call reports `WindowError::Destroyed` once the
/// native window is gone.
pub trait WindowPrimitive {
    fn geometry(&self) -> Result<Rect, WindowError>;
    fn set_geometry(&mut self, rect: Rect) -> Result<(), WindowError>;
    fn is_maximized(&self) -> Result<bool, WindowError>;
    fn set_maximized(&mut self, maximized: bool) -> Result<(), WindowError>;
    fn minimum_size(&self) -> Result<Size, WindowError>;
    /// Current pointer position in global (screen) coordinates.
    fn cursor_position(&self) -> Result<Point, WindowError>;
    fn set_cursor(&mut self, shape: CursorShape) -> Result<(), WindowError>;
}
