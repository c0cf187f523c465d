// Subtitle shell geometry engine
// Pure functions turning pointer deltas into window bounds.
// Every result is computed from the gesture's anchor snapshot, never from the
// previous frame, so repeated or out-of-order moves cannot drift.

use crate::types::errors::ShellError;
use crate::types::geometry::{Edges, Point, Rect, Size};

/// Computes the bounds for a resize gesture, clamping to `minimum`.
///
/// Left/right edges only touch `x`/`width`, top/bottom only `y`/`height`.
/// A candidate below the minimum is recovered here by pinning the moving
/// edge so the dimension is exactly the minimum.
pub fn resize_rect(anchor: Rect, edges: Edges, delta: Point, minimum: Size) -> Rect {
    let minimum = sanitize_minimum(minimum);
    match try_resize(anchor, edges, delta, minimum) {
        Ok(rect) => rect,
        Err(err) => {
            log::trace!("clamping resize: {}", err);
            clamp_resize(anchor, edges, delta, minimum)
        }
    }
}

/// Applies the delta without clamping, rejecting results below `minimum`.
pub fn try_resize(anchor: Rect, edges: Edges, delta: Point, minimum: Size) -> Result<Rect, ShellError> {
    let mut rect = anchor;

    if edges.contains(Edges::LEFT) {
        rect.x = anchor.x.saturating_add(delta.x);
        rect.width = anchor.width.saturating_sub(delta.x);
    }
    if edges.contains(Edges::RIGHT) {
        rect.width = anchor.width.saturating_add(delta.x);
    }
    if edges.contains(Edges::TOP) {
        rect.y = anchor.y.saturating_add(delta.y);
        rect.height = anchor.height.saturating_sub(delta.y);
    }
    if edges.contains(Edges::BOTTOM) {
        rect.height = anchor.height.saturating_add(delta.y);
    }

    let horizontal = edges.intersects(Edges::LEFT | Edges::RIGHT);
    let vertical = edges.intersects(Edges::TOP | Edges::BOTTOM);
    if (horizontal && rect.width < minimum.width) || (vertical && rect.height < minimum.height) {
        return Err(ShellError::InvalidGeometryRequest {
            requested: rect.size(),
            minimum,
        });
    }

    Ok(rect)
}

fn clamp_resize(anchor: Rect, edges: Edges, delta: Point, minimum: Size) -> Rect {
    let mut rect = anchor;

    if edges.contains(Edges::LEFT) {
        let mut left = anchor.x.saturating_add(delta.x);
        if anchor.width.saturating_sub(delta.x) < minimum.width {
            left = anchor.right().saturating_sub(minimum.width);
        }
        rect.x = left;
        rect.width = anchor.right().saturating_sub(left);
    }
    if edges.contains(Edges::RIGHT) {
        let mut right = anchor.right().saturating_add(delta.x);
        if anchor.width.saturating_add(delta.x) < minimum.width {
            right = anchor.x.saturating_add(minimum.width);
        }
        rect.width = right.saturating_sub(rect.x);
    }
    if edges.contains(Edges::TOP) {
        let mut top = anchor.y.saturating_add(delta.y);
        if anchor.height.saturating_sub(delta.y) < minimum.height {
            top = anchor.bottom().saturating_sub(minimum.height);
        }
        rect.y = top;
        rect.height = anchor.bottom().saturating_sub(top);
    }
    if edges.contains(Edges::BOTTOM) {
        let mut bottom = anchor.bottom().saturating_add(delta.y);
        if anchor.height.saturating_add(delta.y) < minimum.height {
            bottom = anchor.y.saturating_add(minimum.height);
        }
        rect.height = bottom.saturating_sub(rect.y);
    }

    rect
}

fn sanitize_minimum(minimum: Size) -> Size {
    Size::new(minimum.width.max(0), minimum.height.max(0))
}

/// New window origin for a move gesture: the anchored origin shifted by how
/// far the pointer travelled since the anchor.
pub fn translate(anchor_origin: Point, anchor_pointer: Point, pointer: Point) -> Point {
    anchor_origin + (pointer - anchor_pointer)
}

/// Origin that puts a restored window's chrome strip centred under the pointer.
pub fn recenter_under_pointer(pointer: Point, size: Size, chrome_height: i32) -> Point {
    Point::new(
        pointer.x.saturating_sub(size.width / 2),
        pointer.y.saturating_sub(chrome_height / 2),
    )
}
