//! Unit tests for the frameless window controller, driven through a
//! `HeadlessWindow`.

use subtitle_shell::managers::tab_strip::WindowDragCapability;
use subtitle_shell::managers::window_controller::{FramelessWindowController, GestureState};
use subtitle_shell::platform::{HeadlessWindow, WindowPrimitive};
use subtitle_shell::types::event::{ChromeEvent, CursorShape, EventDisposition, MaximizeAffordance, MouseButton, PointerRegion};
use subtitle_shell::types::geometry::{Edges, Point, Rect, Size};
use subtitle_shell::types::settings::{ChromeSettings, WindowKind};

const START: Rect = Rect::new(100, 100, 800, 600);
const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

fn setup(kind: WindowKind) -> (FramelessWindowController<HeadlessWindow>, HeadlessWindow) {
    let window = HeadlessWindow::new(START, Size::new(480, 320), SCREEN);
    let controller = FramelessWindowController::new(window.clone(), kind, &ChromeSettings::default());
    (controller, window)
}

fn press(c: &mut FramelessWindowController<HeadlessWindow>, x: i32, y: i32, region: PointerRegion) -> EventDisposition {
    c.handle_event(ChromeEvent::PointerPressed {
        button: MouseButton::Primary,
        global: Point::new(x, y),
        region,
    })
}

fn move_to(c: &mut FramelessWindowController<HeadlessWindow>, x: i32, y: i32) -> EventDisposition {
    c.handle_event(ChromeEvent::PointerMoved { global: Point::new(x, y) })
}

fn release(c: &mut FramelessWindowController<HeadlessWindow>, x: i32, y: i32) -> EventDisposition {
    c.handle_event(ChromeEvent::PointerReleased {
        button: MouseButton::Primary,
        global: Point::new(x, y),
    })
}

// ─── Drag ───

#[test]
fn test_drag_moves_window_by_pointer_delta() {
    let (mut c, window) = setup(WindowKind::Main);

    assert_eq!(press(&mut c, 300, 120, PointerRegion::Draggable), EventDisposition::Consumed);
    assert!(matches!(c.state(), GestureState::Dragging(_)));

    assert_eq!(move_to(&mut c, 350, 150), EventDisposition::Consumed);
    assert_eq!(window.snapshot(), Rect::new(150, 130, 800, 600));

    assert_eq!(move_to(&mut c, 280, 100), EventDisposition::Consumed);
    assert_eq!(window.snapshot(), Rect::new(80, 80, 800, 600));

    assert_eq!(release(&mut c, 280, 100), EventDisposition::Consumed);
    assert_eq!(*c.state(), GestureState::Idle);
}

#[test]
fn test_press_on_content_passes_through() {
    let (mut c, window) = setup(WindowKind::Main);
    assert_eq!(press(&mut c, 400, 400, PointerRegion::Content), EventDisposition::PassThrough);
    assert_eq!(move_to(&mut c, 500, 500), EventDisposition::PassThrough);
    assert_eq!(window.snapshot(), START);
}

#[test]
fn test_press_on_control_passes_through_even_at_edge() {
    let (mut c, _window) = setup(WindowKind::Main);
    assert_eq!(press(&mut c, 899, 102, PointerRegion::Control), EventDisposition::PassThrough);
    assert_eq!(*c.state(), GestureState::Idle);
}

#[test]
fn test_secondary_button_is_ignored() {
    let (mut c, _window) = setup(WindowKind::Main);
    let d = c.handle_event(ChromeEvent::PointerPressed {
        button: MouseButton::Secondary,
        global: Point::new(300, 120),
        region: PointerRegion::Draggable,
    });
    assert_eq!(d, EventDisposition::PassThrough);
    assert_eq!(*c.state(), GestureState::Idle);
}

#[test]
fn test_release_without_session_is_noop() {
    let (mut c, window) = setup(WindowKind::Main);
    assert_eq!(release(&mut c, 10, 10), EventDisposition::PassThrough);
    assert_eq!(window.snapshot(), START);
}

#[test]
fn test_second_press_during_session_is_ignored() {
    let (mut c, _window) = setup(WindowKind::Main);
    press(&mut c, 300, 120, PointerRegion::Draggable);
    assert_eq!(press(&mut c, 899, 400, PointerRegion::Content), EventDisposition::PassThrough);
    assert!(matches!(c.state(), GestureState::Dragging(_)));
}

// ─── Resize ───

#[test]
fn test_right_edge_resize() {
    let (mut c, window) = setup(WindowKind::Main);

    assert_eq!(press(&mut c, 899, 400, PointerRegion::Content), EventDisposition::Consumed);
    match c.state() {
        GestureState::Resizing(session) => {
            assert_eq!(session.edges, Edges::RIGHT);
            assert_eq!(session.anchor_geometry, START);
        }
        other => panic!("expected resize, got {:?}", other),
    }

    move_to(&mut c, 949, 420);
    assert_eq!(window.snapshot(), Rect::new(100, 100, 850, 600));

    move_to(&mut c, 849, 420);
    assert_eq!(window.snapshot(), Rect::new(100, 100, 750, 600));

    release(&mut c, 849, 420);
    assert_eq!(*c.state(), GestureState::Idle);
}

#[test]
fn test_top_left_resize_clamps_at_minimum() {
    let (mut c, window) = setup(WindowKind::Main);
    press(&mut c, 101, 101, PointerRegion::Draggable);
    move_to(&mut c, 2000, 2000);
    assert_eq!(window.snapshot(), Rect::new(420, 380, 480, 320));
}

#[test]
fn test_dialog_does_not_resize() {
    let (mut c, window) = setup(WindowKind::Dialog);
    assert!(!c.resize_enabled());
    assert_eq!(press(&mut c, 899, 400, PointerRegion::Content), EventDisposition::PassThrough);
    move_to(&mut c, 999, 400);
    assert_eq!(window.snapshot(), START);
}

#[test]
fn test_disabling_resize_ends_active_resize() {
    let (mut c, window) = setup(WindowKind::Settings);
    press(&mut c, 899, 400, PointerRegion::Content);
    c.set_resize_enabled(false);
    assert_eq!(*c.state(), GestureState::Idle);
    move_to(&mut c, 999, 400);
    assert_eq!(window.snapshot(), START);
}

// ─── Maximize ───

#[test]
fn test_toggle_maximize_flips_affordance() {
    let (mut c, window) = setup(WindowKind::Main);
    assert_eq!(c.affordance(), MaximizeAffordance::Maximize);

    assert!(c.toggle_maximize());
    assert!(window.maximized());
    assert_eq!(c.affordance(), MaximizeAffordance::Restore);
    assert_eq!(window.snapshot(), SCREEN);

    assert!(c.toggle_maximize());
    assert!(!window.maximized());
    assert_eq!(c.affordance(), MaximizeAffordance::Maximize);
    assert_eq!(window.snapshot(), START);
}

#[test]
fn test_external_state_change_updates_affordance() {
    let (mut c, window) = setup(WindowKind::Main);
    window.set_maximized_externally(true);
    let d = c.handle_event(ChromeEvent::WindowStateChanged { maximized: true });
    assert_eq!(d, EventDisposition::PassThrough);
    assert_eq!(c.affordance(), MaximizeAffordance::Restore);
}

#[test]
fn test_maximized_window_edges_do_not_resize() {
    let (mut c, window) = setup(WindowKind::Main);
    window.set_maximized_externally(true);
    c.handle_event(ChromeEvent::WindowStateChanged { maximized: true });
    assert_eq!(press(&mut c, 1919, 500, PointerRegion::Content), EventDisposition::PassThrough);
}

#[test]
fn test_dragging_maximized_window_restores_under_pointer() {
    let (mut c, window) = setup(WindowKind::Main);
    window.set_maximized_externally(true);
    c.handle_event(ChromeEvent::WindowStateChanged { maximized: true });

    assert_eq!(press(&mut c, 960, 10, PointerRegion::Draggable), EventDisposition::Consumed);
    move_to(&mut c, 1000, 20);

    assert!(!window.maximized());
    assert_eq!(c.affordance(), MaximizeAffordance::Maximize);
    // Restored size, chrome strip centred under the pointer.
    assert_eq!(window.snapshot(), Rect::new(600, 1, 800, 600));

    move_to(&mut c, 1010, 30);
    assert_eq!(window.snapshot(), Rect::new(610, 11, 800, 600));

    release(&mut c, 1010, 30);
    assert_eq!(*c.state(), GestureState::Idle);
}

// ─── Cursor ───

#[test]
fn test_hover_updates_cursor() {
    let (mut c, window) = setup(WindowKind::Main);

    move_to(&mut c, 899, 400);
    assert_eq!(c.cursor(), CursorShape::ResizeHorizontal);
    assert_eq!(window.cursor_shape(), CursorShape::ResizeHorizontal);

    move_to(&mut c, 899, 699);
    assert_eq!(c.cursor(), CursorShape::ResizeNwSe);

    move_to(&mut c, 500, 400);
    assert_eq!(c.cursor(), CursorShape::Default);
    assert_eq!(window.cursor_shape(), CursorShape::Default);
}

#[test]
fn test_state_change_refreshes_hover_cursor() {
    let (mut c, window) = setup(WindowKind::Main);
    window.move_cursor(Point::new(100, 400));
    c.handle_event(ChromeEvent::WindowStateChanged { maximized: false });
    assert_eq!(c.cursor(), CursorShape::ResizeHorizontal);
}

// ─── Window lifetime ───

#[test]
fn test_destroyed_window_discards_session() {
    let (mut c, window) = setup(WindowKind::Main);
    press(&mut c, 300, 120, PointerRegion::Draggable);
    window.destroy();

    assert_eq!(move_to(&mut c, 400, 200), EventDisposition::PassThrough);
    assert_eq!(*c.state(), GestureState::Idle);
    assert_eq!(window.snapshot(), START);
    assert_eq!(release(&mut c, 400, 200), EventDisposition::PassThrough);
    assert!(c.window_geometry().is_none());
    assert!(!c.toggle_maximize());
}

#[test]
fn test_press_on_destroyed_window_passes_through() {
    let (mut c, window) = setup(WindowKind::Main);
    window.destroy();
    assert_eq!(press(&mut c, 300, 120, PointerRegion::Draggable), EventDisposition::PassThrough);
    assert_eq!(*c.state(), GestureState::Idle);
}

#[test]
fn test_teardown_resets_cursor_and_returns_window() {
    let (mut c, window) = setup(WindowKind::Main);
    move_to(&mut c, 899, 400);
    assert_eq!(window.cursor_shape(), CursorShape::ResizeHorizontal);

    let returned = c.teardown();
    assert_eq!(window.cursor_shape(), CursorShape::Default);
    assert_eq!(returned.geometry().unwrap(), START);
}

// ─── Drag capability ───

#[test]
fn test_window_drag_capability_moves_window() {
    let (mut c, window) = setup(WindowKind::Main);
    assert!(c.begin_window_drag(Point::new(300, 120)));
    assert!(c.is_window_dragging());

    c.drag_window_to(Point::new(320, 140));
    assert_eq!(window.snapshot(), Rect::new(120, 120, 800, 600));

    c.end_window_drag(Point::new(320, 140));
    assert!(!c.is_window_dragging());
    c.drag_window_to(Point::new(500, 500));
    assert_eq!(window.snapshot(), Rect::new(120, 120, 800, 600));
}

#[test]
fn test_forwarded_drag_inside_resize_margin_still_drags() {
    let (mut c, window) = setup(WindowKind::Main);
    assert!(c.begin_window_drag(Point::new(102, 102)));
    assert!(c.is_window_dragging());

    c.drag_window_to(Point::new(122, 112));
    assert_eq!(window.snapshot(), Rect::new(120, 110, 800, 600));
    c.end_window_drag(Point::new(122, 112));
}

#[test]
fn test_forwarded_drag_is_refused_during_a_session() {
    let (mut c, _window) = setup(WindowKind::Main);
    press(&mut c, 899, 400, PointerRegion::Content);
    assert!(matches!(c.state(), GestureState::Resizing(_)));
    assert!(!c.begin_window_drag(Point::new(300, 120)));
    assert!(matches!(c.state(), GestureState::Resizing(_)));
}
