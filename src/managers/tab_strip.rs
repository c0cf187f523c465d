//! Tab strip layout and drag forwarding.
//!
//! The strip sits inside the chrome. Presses on a tab select it; presses on
//! the empty part of the strip are handed to the window as a drag through
//! [`WindowDragCapability`], which is passed in per call so the strip never
//! holds a reference back to the window controller.

use crate::types::event::MouseButton;
use crate::types::geometry::{Point, Rect};

pub const TAB_MIN_WIDTH: i32 = 72;
pub const TAB_MAX_WIDTH: i32 = 220;
pub const STRIP_MIN_WIDTH: i32 = 200;

/// Capability to move the window from a gesture that started elsewhere.
pub trait WindowDragCapability {
    /// Starts a window gesture at `global`. Returns true if one started.
    fn begin_window_drag(&mut self, global: Point) -> bool;
    fn drag_window_to(&mut self, global: Point);
    fn end_window_drag(&mut self, global: Point);
    fn is_window_dragging(&self) -> bool;
}

/// Result of a press on the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripPress {
    /// The press landed on the tab at this index.
    Tab(usize),
    /// The press landed on empty strip area and started a window gesture.
    WindowDrag,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct TabStrip {
    height: i32,
    width: i32,
    tabs: Vec<Rect>,
    forwarding: bool,
}

impl TabStrip {
    pub fn new(height: i32) -> Self {
        Self {
            height,
            width: STRIP_MIN_WIDTH,
            tabs: Vec::new(),
            forwarding: false,
        }
    }

    /// Lays out `tab_count` equal-width tabs from the strip's left edge.
    pub fn layout(&mut self, tab_count: usize, available_width: i32) {
        self.width = available_width.max(STRIP_MIN_WIDTH);
        let tab_width = if tab_count == 0 {
            0
        } else {
            (self.width / tab_count as i32).clamp(TAB_MIN_WIDTH, TAB_MAX_WIDTH)
        };
        self.tabs = (0..tab_count)
            .map(|i| Rect::new(i as i32 * tab_width, 0, tab_width, self.height))
            .collect();
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn tab_rects(&self) -> &[Rect] {
        &self.tabs
    }

    /// Index of the tab under a strip-local point.
    pub fn tab_at(&self, local: Point) -> Option<usize> {
        self.tabs.iter().position(|rect| rect.contains(local))
    }

    pub fn is_forwarding(&self) -> bool {
        self.forwarding
    }

    pub fn press(&mut self, local: Point, global: Point, button: MouseButton, drag: &mut dyn WindowDragCapability) -> StripPress {
        if let Some(index) = self.tab_at(local) {
            return StripPress::Tab(index);
        }
        if button != MouseButton::Primary {
            return StripPress::Ignored;
        }
        if drag.begin_window_drag(global) {
            self.forwarding = true;
            StripPress::WindowDrag
        } else {
            StripPress::Ignored
        }
    }

    /// Forwards a move while a strip-initiated drag is active.
    pub fn pointer_moved(&mut self, global: Point, drag: &mut dyn WindowDragCapability) -> bool {
        if !self.forwarding {
            return false;
        }
        drag.drag_window_to(global);
        true
    }

    pub fn release(&mut self, global: Point, drag: &mut dyn WindowDragCapability) {
        if self.forwarding {
            drag.end_window_drag(global);
            self.forwarding = false;
        }
    }
}
