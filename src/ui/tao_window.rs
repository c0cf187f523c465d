//! `WindowPrimitive` over a tao window.
//!
//! Works in logical pixels so geometry lines up with the `screenX`/`screenY`
//! values the chrome page reports.

use std::rc::Weak;

use tao::dpi::{LogicalPosition, LogicalSize};
use tao::window::{CursorIcon, Window};

use crate::platform::WindowPrimitive;
use crate::types::errors::WindowError;
use crate::types::event::CursorShape;
use crate::types::geometry::{Point, Rect, Size};

/// Non-owning handle to the main window. The event loop owns the window;
/// once it is dropped every call reports `WindowError::Destroyed`.
pub struct TaoWindow {
    window: Weak<Window>,
    minimum: Size,
}

impl TaoWindow {
    pub fn new(window: Weak<Window>, minimum: Size) -> Self {
        Self { window, minimum }
    }

    fn with_window<T>(&self, f: impl FnOnce(&Window) -> Result<T, WindowError>) -> Result<T, WindowError> {
        let window = self.window.upgrade().ok_or(WindowError::Destroyed)?;
        f(&window)
    }
}

fn cursor_icon(shape: CursorShape) -> CursorIcon {
    match shape {
        CursorShape::Default => CursorIcon::Default,
        CursorShape::ResizeHorizontal => CursorIcon::EwResize,
        CursorShape::ResizeVertical => CursorIcon::NsResize,
        CursorShape::ResizeNwSe => CursorIcon::NwseResize,
        CursorShape::ResizeNeSw => CursorIcon::NeswResize,
    }
}

impl WindowPrimitive for TaoWindow {
    fn geometry(&self) -> Result<Rect, WindowError> {
        self.with_window(|w| {
            let scale = w.scale_factor();
            let position: LogicalPosition<i32> = w
                .outer_position()
                .map_err(|e| WindowError::Unsupported(e.to_string()))?
                .to_logical(scale);
            let size: LogicalSize<i32> = w.outer_size().to_logical(scale);
            Ok(Rect::new(position.x, position.y, size.width, size.height))
        })
    }

    fn set_geometry(&mut self, rect: Rect) -> Result<(), WindowError> {
        self.with_window(|w| {
            w.set_outer_position(LogicalPosition::new(rect.x, rect.y));
            w.set_inner_size(LogicalSize::new(rect.width.max(0) as f64, rect.height.max(0) as f64));
            Ok(())
        })
    }

    fn is_maximized(&self) -> Result<bool, WindowError> {
        self.with_window(|w| Ok(w.is_maximized()))
    }

    fn set_maximized(&mut self, maximized: bool) -> Result<(), WindowError> {
        self.with_window(|w| {
            w.set_maximized(maximized);
            Ok(())
        })
    }

    fn minimum_size(&self) -> Result<Size, WindowError> {
        self.with_window(|_| Ok(self.minimum))
    }

    fn cursor_position(&self) -> Result<Point, WindowError> {
        self.with_window(|w| {
            let position: LogicalPosition<i32> = w
                .cursor_position()
                .map_err(|e| WindowError::Unsupported(e.to_string()))?
                .to_logical(w.scale_factor());
            Ok(Point::new(position.x, position.y))
        })
    }

    fn set_cursor(&mut self, shape: CursorShape) -> Result<(), WindowError> {
        self.with_window(|w| {
            w.set_cursor_icon(cursor_icon(shape));
            Ok(())
        })
    }
}
