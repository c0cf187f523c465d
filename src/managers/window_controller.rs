//! Frameless window controller.
//!
//! Replaces native window decorations with custom drag-to-move,
//! edge-drag-to-resize and maximize/restore. Low-level pointer and window
//! events are dispatched explicitly into [`FramelessWindowController::handle_event`];
//! the controller classifies them with the [`GestureClassifier`], computes
//! bounds with the geometry engine and applies them through a
//! [`WindowPrimitive`] handle given at construction.
//!
//! A gesture is a press-to-release session. If the window disappears while
//! a session is active the session is dropped and nothing is applied.

use crate::managers::tab_strip::WindowDragCapability;
use crate::platform::WindowPrimitive;
use crate::services::geometry_engine;
use crate::services::gesture_classifier::{GestureClassifier, PressAction};
use crate::types::errors::WindowError;
use crate::types::event::{ChromeEvent, CursorShape, EventDisposition, MaximizeAffordance, MouseButton, PointerRegion};
use crate::types::geometry::{Edges, Point, Rect};
use crate::types::settings::{ChromeSettings, WindowKind};

/// State of an in-progress move gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub anchor_pointer: Point,
    pub anchor_origin: Point,
}

/// State of an in-progress resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub edges: Edges,
    pub anchor_pointer: Point,
    pub anchor_geometry: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            GestureState::Idle => "idle",
            GestureState::Dragging(_) => "dragging",
            GestureState::Resizing(_) => "resizing",
        }
    }
}

pub struct FramelessWindowController<W: WindowPrimitive> {
    window: W,
    kind: WindowKind,
    classifier: GestureClassifier,
    chrome_height: i32,
    state: GestureState,
    affordance: MaximizeAffordance,
    cursor: CursorShape,
}

impl<W: WindowPrimitive> FramelessWindowController<W> {
    pub fn new(window: W, kind: WindowKind, settings: &ChromeSettings) -> Self {
        let maximized = window.is_maximized().unwrap_or(false);
        Self {
            window,
            kind,
            classifier: GestureClassifier::new(settings.resize_margin, settings.resizable(kind)),
            chrome_height: settings.chrome_height,
            state: GestureState::Idle,
            affordance: MaximizeAffordance::for_maximized(maximized),
            cursor: CursorShape::Default,
        }
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn affordance(&self) -> MaximizeAffordance {
        self.affordance
    }

    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    /// Current window bounds, or `None` once the window is gone.
    pub fn window_geometry(&self) -> Option<Rect> {
        self.window.geometry().ok()
    }

    pub fn resize_enabled(&self) -> bool {
        self.classifier.resize_enabled()
    }

    /// Turns edge resizing on or off. Disabling ends an active resize.
    pub fn set_resize_enabled(&mut self, enabled: bool) {
        self.classifier.set_resize_enabled(enabled);
        if !enabled {
            if let GestureState::Resizing(_) = self.state {
                self.state = GestureState::Idle;
            }
            self.apply_cursor(CursorShape::Default);
        }
    }

    /// Dispatches one event into the state machine.
    pub fn handle_event(&mut self, event: ChromeEvent) -> EventDisposition {
        let result = match event {
            ChromeEvent::PointerPressed { button, global, region } => self.on_press(button, global, region),
            ChromeEvent::PointerMoved { global } => self.on_move(global),
            ChromeEvent::PointerReleased { button, .. } => Ok(self.on_release(button)),
            ChromeEvent::WindowStateChanged { maximized } => self.on_window_state_changed(maximized),
        };

        result.unwrap_or_else(|err| {
            self.discard_session(&err);
            EventDisposition::PassThrough
        })
    }

    /// Maximize/restore button action. Returns false if the window is gone.
    pub fn toggle_maximize(&mut self) -> bool {
        let result = self
            .window
            .is_maximized()
            .and_then(|maximized| self.window.set_maximized(!maximized).map(|_| !maximized));

        match result {
            Ok(maximized) => {
                self.affordance = MaximizeAffordance::for_maximized(maximized);
                log::debug!("window {}", if maximized { "maximized" } else { "restored" });
                true
            }
            Err(err) => {
                self.discard_session(&err);
                false
            }
        }
    }

    /// Detaches from the window: drops any session, resets the cursor and
    /// hands the window handle back.
    pub fn teardown(mut self) -> W {
        self.state = GestureState::Idle;
        if self.cursor != CursorShape::Default {
            let _ = self.window.set_cursor(CursorShape::Default);
        }
        self.window
    }

    fn on_press(&mut self, button: MouseButton, global: Point, region: PointerRegion) -> Result<EventDisposition, WindowError> {
        if button != MouseButton::Primary || self.state != GestureState::Idle {
            return Ok(EventDisposition::PassThrough);
        }

        let geometry = self.window.geometry()?;
        let maximized = self.window.is_maximized()?;
        let local = geometry.to_local(global);

        match self.classifier.classify_press(local, geometry.size(), region, maximized) {
            PressAction::Resize(edges) => {
                log::debug!("resize started on {:?} at {:?}", edges.names(), global);
                self.state = GestureState::Resizing(ResizeSession {
                    edges,
                    anchor_pointer: global,
                    anchor_geometry: geometry,
                });
                Ok(EventDisposition::Consumed)
            }
            PressAction::Drag => {
                self.start_drag(global, geometry);
                Ok(EventDisposition::Consumed)
            }
            PressAction::PassThrough => Ok(EventDisposition::PassThrough),
        }
    }

    fn start_drag(&mut self, global: Point, geometry: Rect) {
        log::debug!("drag started at {:?}", global);
        self.state = GestureState::Dragging(DragSession {
            anchor_pointer: global,
            anchor_origin: geometry.origin(),
        });
    }

    fn on_move(&mut self, global: Point) -> Result<EventDisposition, WindowError> {
        match self.state {
            GestureState::Idle => {
                self.update_hover_cursor(global)?;
                Ok(EventDisposition::PassThrough)
            }
            GestureState::Dragging(session) => {
                self.drag_to(session, global)?;
                Ok(EventDisposition::Consumed)
            }
            GestureState::Resizing(session) => {
                let minimum = self.window.minimum_size()?;
                let delta = global - session.anchor_pointer;
                let rect = geometry_engine::resize_rect(session.anchor_geometry, session.edges, delta, minimum);
                self.window.set_geometry(rect)?;
                Ok(EventDisposition::Consumed)
            }
        }
    }

    fn drag_to(&mut self, session: DragSession, global: Point) -> Result<(), WindowError> {
        if self.window.is_maximized()? {
            // Restore first, then put the chrome strip under the pointer and
            // re-anchor so later moves translate from here.
            self.window.set_maximized(false)?;
            self.affordance = MaximizeAffordance::Maximize;
            let restored = self.window.geometry()?;
            let origin = geometry_engine::recenter_under_pointer(global, restored.size(), self.chrome_height);
            self.window.set_geometry(Rect::from_origin_size(origin, restored.size()))?;
            self.state = GestureState::Dragging(DragSession {
                anchor_pointer: global,
                anchor_origin: origin,
            });
            log::debug!("restored maximized window under pointer at {:?}", global);
            return Ok(());
        }

        let size = self.window.geometry()?.size();
        let origin = geometry_engine::translate(session.anchor_origin, session.anchor_pointer, global);
        self.window.set_geometry(Rect::from_origin_size(origin, size))
    }

    fn on_release(&mut self, button: MouseButton) -> EventDisposition {
        if button != MouseButton::Primary {
            return EventDisposition::PassThrough;
        }
        match self.state {
            GestureState::Idle => EventDisposition::PassThrough,
            active => {
                log::debug!("{} finished", active.name());
                self.state = GestureState::Idle;
                EventDisposition::Consumed
            }
        }
    }

    fn on_window_state_changed(&mut self, maximized: bool) -> Result<EventDisposition, WindowError> {
        self.affordance = MaximizeAffordance::for_maximized(maximized);
        if self.state == GestureState::Idle {
            let pointer = self.window.cursor_position()?;
            self.update_hover_cursor(pointer)?;
        }
        Ok(EventDisposition::PassThrough)
    }

    fn update_hover_cursor(&mut self, global: Point) -> Result<(), WindowError> {
        let geometry = self.window.geometry()?;
        let maximized = self.window.is_maximized()?;
        let shape = self
            .classifier
            .hover_cursor(geometry.to_local(global), geometry.size(), maximized);
        if shape != self.cursor {
            self.window.set_cursor(shape)?;
            self.cursor = shape;
        }
        Ok(())
    }

    fn apply_cursor(&mut self, shape: CursorShape) {
        if shape != self.cursor && self.window.set_cursor(shape).is_ok() {
            self.cursor = shape;
        }
    }

    fn discard_session(&mut self, err: &WindowError) {
        if self.state != GestureState::Idle {
            log::warn!("discarding {} session: {}", self.state.name(), err);
        } else {
            log::debug!("window call failed while idle: {}", err);
        }
        self.state = GestureState::Idle;
    }
}

impl<W: WindowPrimitive> WindowDragCapability for FramelessWindowController<W> {
    /// Strip-forwarded presses always drag, even inside the resize margin.
    fn begin_window_drag(&mut self, global: Point) -> bool {
        if self.state != GestureState::Idle {
            return false;
        }
        match self.window.geometry() {
            Ok(geometry) => {
                self.start_drag(global, geometry);
                true
            }
            Err(err) => {
                self.discard_session(&err);
                false
            }
        }
    }

    fn drag_window_to(&mut self, global: Point) {
        if self.state != GestureState::Idle {
            self.handle_event(ChromeEvent::PointerMoved { global });
        }
    }

    fn end_window_drag(&mut self, global: Point) {
        self.handle_event(ChromeEvent::PointerReleased {
            button: MouseButton::Primary,
            global,
        });
    }

    fn is_window_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }
}
