// Subtitle shell pointer gesture classifier
// Decides, from a window-local pointer position, which resize edges are hot
// and whether a press starts a resize, a move, or belongs to a widget.

use crate::types::event::{CursorShape, PointerRegion};
use crate::types::geometry::{Edges, Point, Size};

/// What a primary-button press should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressAction {
    Resize(Edges),
    Drag,
    PassThrough,
}

/// Edge hit-testing for a frameless window.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    margin: i32,
    resize_enabled: bool,
}

impl GestureClassifier {
    pub fn new(margin: i32, resize_enabled: bool) -> Self {
        Self {
            margin: margin.max(0),
            resize_enabled,
        }
    }

    pub fn margin(&self) -> i32 {
        self.margin
    }

    pub fn resize_enabled(&self) -> bool {
        self.resize_enabled
    }

    pub fn set_resize_enabled(&mut self, enabled: bool) {
        self.resize_enabled = enabled;
    }

    /// Edges whose resize band contains `local`.
    ///
    /// The last pixel row/column of the window is `size - 1`; a point is on
    /// the far edge when it is within `margin` of that pixel.
    pub fn hot_edges(&self, local: Point, size: Size) -> Edges {
        let mut edges = Edges::empty();
        if local.y < self.margin {
            edges |= Edges::TOP;
        }
        if local.y > size.height.saturating_sub(1).saturating_sub(self.margin) {
            edges |= Edges::BOTTOM;
        }
        if local.x < self.margin {
            edges |= Edges::LEFT;
        }
        if local.x > size.width.saturating_sub(1).saturating_sub(self.margin) {
            edges |= Edges::RIGHT;
        }
        edges
    }

    /// Cursor for hovering at `local`. Plain arrow while maximized or when
    /// resizing is disabled.
    pub fn hover_cursor(&self, local: Point, size: Size, maximized: bool) -> CursorShape {
        if maximized || !self.resize_enabled {
            return CursorShape::Default;
        }
        cursor_for(self.hot_edges(local, size))
    }

    /// Classifies a primary-button press.
    ///
    /// Controls win over everything so buttons near the border stay usable,
    /// then resize bands, then draggable chrome.
    pub fn classify_press(&self, local: Point, size: Size, region: PointerRegion, maximized: bool) -> PressAction {
        if region == PointerRegion::Control {
            return PressAction::PassThrough;
        }

        if self.resize_enabled && !maximized {
            let edges = self.hot_edges(local, size);
            if !edges.is_empty() {
                return PressAction::Resize(edges);
            }
        }

        if region.is_draggable() {
            PressAction::Drag
        } else {
            PressAction::PassThrough
        }
    }
}

/// Cursor shape for a set of hot edges.
pub fn cursor_for(edges: Edges) -> CursorShape {
    let top = edges.contains(Edges::TOP);
    let bottom = edges.contains(Edges::BOTTOM);
    let left = edges.contains(Edges::LEFT);
    let right = edges.contains(Edges::RIGHT);

    if (top && left) || (bottom && right) {
        CursorShape::ResizeNwSe
    } else if (top && right) || (bottom && left) {
        CursorShape::ResizeNeSw
    } else if top || bottom {
        CursorShape::ResizeVertical
    } else if left || right {
        CursorShape::ResizeHorizontal
    } else {
        CursorShape::Default
    }
}
