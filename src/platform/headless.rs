use std::cell::RefCell;
use std::rc::Rc;

use crate::types::errors::WindowError;
use crate::types::event::CursorShape;
use crate::types::geometry::{Point, Rect, Size};

use super::WindowPrimitive;

#[derive(Debug)]
struct HeadlessState {
    geometry: Rect,
    normal_geometry: Rect,
    maximized: bool,
    minimum: Size,
    screen: Rect,
    cursor: Point,
    cursor_shape: CursorShape,
    destroyed: bool,
}

/// In-memory window that behaves like a simple window manager would.
///
/// Cloning yields another handle to the same window. Maximizing fills the
/// screen and restoring brings back the last normal geometry; geometry
/// requests below the minimum size are enlarged to it.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessWindow {
    pub fn new(geometry: Rect, minimum: Size, screen: Rect) -> Self {
        Self {
            state: Rc::new(RefCell::new(HeadlessState {
                geometry,
                normal_geometry: geometry,
                maximized: false,
                minimum,
                screen,
                cursor: geometry.origin(),
                cursor_shape: CursorShape::Default,
                destroyed: false,
            })),
        }
    }

    /// Moves the simulated pointer.
    pub fn move_cursor(&self, global: Point) {
        self.state.borrow_mut().cursor = global;
    }

    pub fn cursor_shape(&self) -> CursorShape {
        self.state.borrow().cursor_shape
    }

    /// Current geometry, readable even after the window is destroyed.
    pub fn snapshot(&self) -> Rect {
        self.state.borrow().geometry
    }

    pub fn maximized(&self) -> bool {
        self.state.borrow().maximized
    }

    /// Simulates the window manager maximizing or restoring the window.
    pub fn set_maximized_externally(&self, maximized: bool) {
        apply_maximized(&mut self.state.borrow_mut(), maximized);
    }

    /// Destroys the window; every later primitive call fails.
    pub fn destroy(&self) {
        self.state.borrow_mut().destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.borrow().destroyed
    }

    fn live(&self) -> Result<std::cell::RefMut<'_, HeadlessState>, WindowError> {
        let state = self.state.borrow_mut();
        if state.destroyed {
            return Err(WindowError::Destroyed);
        }
        Ok(state)
    }
}

fn apply_maximized(state: &mut HeadlessState, maximized: bool) {
    if maximized == state.maximized {
        return;
    }
    if maximized {
        state.normal_geometry = state.geometry;
        state.geometry = state.screen;
    } else {
        state.geometry = state.normal_geometry;
    }
    state.maximized = maximized;
}

impl WindowPrimitive for HeadlessWindow {
    fn geometry(&self) -> Result<Rect, WindowError> {
        Ok(self.live()?.geometry)
    }

    fn set_geometry(&mut self, rect: Rect) -> Result<(), WindowError> {
        let mut state = self.live()?;
        let rect = Rect::new(
            rect.x,
            rect.y,
            rect.width.max(state.minimum.width),
            rect.height.max(state.minimum.height),
        );
        state.geometry = rect;
        if !state.maximized {
            state.normal_geometry = rect;
        }
        Ok(())
    }

    fn is_maximized(&self) -> Result<bool, WindowError> {
        Ok(self.live()?.maximized)
    }

    fn set_maximized(&mut self, maximized: bool) -> Result<(), WindowError> {
        let mut state = self.live()?;
        apply_maximized(&mut state, maximized);
        Ok(())
    }

    fn minimum_size(&self) -> Result<Size, WindowError> {
        Ok(self.live()?.minimum)
    }

    fn cursor_position(&self) -> Result<Point, WindowError> {
        Ok(self.live()?.cursor)
    }

    fn set_cursor(&mut self, shape: CursorShape) -> Result<(), WindowError> {
        self.live()?.cursor_shape = shape;
        Ok(())
    }
}
