use rstest::rstest;

use subtitle_shell::services::gesture_classifier::{cursor_for, GestureClassifier, PressAction};
use subtitle_shell::types::event::{CursorShape, PointerRegion};
use subtitle_shell::types::geometry::{Edges, Point, Size};

const SIZE: Size = Size::new(800, 600);

fn classifier() -> GestureClassifier {
    GestureClassifier::new(5, true)
}

// ─── Hot edges ───

#[rstest]
#[case::top_left(Point::new(0, 0), Edges::TOP | Edges::LEFT)]
#[case::top(Point::new(400, 4), Edges::TOP)]
#[case::below_top_band(Point::new(400, 5), Edges::empty())]
#[case::bottom(Point::new(400, 595), Edges::BOTTOM)]
#[case::above_bottom_band(Point::new(400, 594), Edges::empty())]
#[case::right(Point::new(795, 300), Edges::RIGHT)]
#[case::left_of_right_band(Point::new(794, 300), Edges::empty())]
#[case::bottom_right(Point::new(799, 599), Edges::BOTTOM | Edges::RIGHT)]
#[case::centre(Point::new(400, 300), Edges::empty())]
fn test_hot_edges(#[case] local: Point, #[case] expected: Edges) {
    assert_eq!(classifier().hot_edges(local, SIZE), expected);
}

// ─── Press classification ───

#[test]
fn test_control_press_wins_over_edge() {
    let action = classifier().classify_press(Point::new(799, 2), SIZE, PointerRegion::Control, false);
    assert_eq!(action, PressAction::PassThrough);
}

#[test]
fn test_edge_press_starts_resize_even_over_content() {
    let action = classifier().classify_press(Point::new(2, 300), SIZE, PointerRegion::Content, false);
    assert_eq!(action, PressAction::Resize(Edges::LEFT));
}

#[test]
fn test_edge_press_over_chrome_resizes_instead_of_dragging() {
    let action = classifier().classify_press(Point::new(400, 1), SIZE, PointerRegion::Draggable, false);
    assert_eq!(action, PressAction::Resize(Edges::TOP));
}

#[rstest]
#[case(PointerRegion::Draggable, PressAction::Drag)]
#[case(PointerRegion::TabStripEmpty, PressAction::Drag)]
#[case(PointerRegion::Content, PressAction::PassThrough)]
#[case(PointerRegion::Control, PressAction::PassThrough)]
fn test_interior_press_by_region(#[case] region: PointerRegion, #[case] expected: PressAction) {
    assert_eq!(classifier().classify_press(Point::new(300, 20), SIZE, region, false), expected);
}

#[test]
fn test_maximized_window_never_resizes() {
    let action = classifier().classify_press(Point::new(400, 1), SIZE, PointerRegion::Draggable, true);
    assert_eq!(action, PressAction::Drag);
    assert_eq!(classifier().hover_cursor(Point::new(0, 0), SIZE, true), CursorShape::Default);
}

#[test]
fn test_disabled_resize_falls_back_to_region() {
    let mut c = classifier();
    c.set_resize_enabled(false);
    assert!(!c.resize_enabled());
    assert_eq!(c.classify_press(Point::new(2, 300), SIZE, PointerRegion::Content, false), PressAction::PassThrough);
    assert_eq!(c.classify_press(Point::new(2, 20), SIZE, PointerRegion::Draggable, false), PressAction::Drag);
    assert_eq!(c.hover_cursor(Point::new(2, 300), SIZE, false), CursorShape::Default);
}

// ─── Cursor shapes ───

#[rstest]
#[case(Edges::LEFT, CursorShape::ResizeHorizontal)]
#[case(Edges::RIGHT, CursorShape::ResizeHorizontal)]
#[case(Edges::TOP, CursorShape::ResizeVertical)]
#[case(Edges::BOTTOM, CursorShape::ResizeVertical)]
#[case(Edges::TOP | Edges::LEFT, CursorShape::ResizeNwSe)]
#[case(Edges::BOTTOM | Edges::RIGHT, CursorShape::ResizeNwSe)]
#[case(Edges::TOP | Edges::RIGHT, CursorShape::ResizeNeSw)]
#[case(Edges::BOTTOM | Edges::LEFT, CursorShape::ResizeNeSw)]
#[case(Edges::empty(), CursorShape::Default)]
fn test_cursor_for_edges(#[case] edges: Edges, #[case] expected: CursorShape) {
    assert_eq!(cursor_for(edges), expected);
}

#[test]
fn test_hover_cursor_over_corner() {
    assert_eq!(classifier().hover_cursor(Point::new(799, 0), SIZE, false), CursorShape::ResizeNeSw);
}
