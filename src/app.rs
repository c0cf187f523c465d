//! App Core for the subtitle shell.
//!
//! Composition root: owns the tab manager, the chrome controller for the main
//! window, the tab strip layout and the queue of pending user notifications.
//! Front ends (the GUI, the RPC server, the console demo) hold one `App` and
//! drive it through `ipc_handler::handle_method` or the methods below.

use std::path::Path;

use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::managers::tab_strip::{StripPress, TabStrip};
use crate::managers::window_controller::FramelessWindowController;
use crate::platform::WindowPrimitive;
use crate::services::tool_registry::ToolRegistry;
use crate::types::errors::ShellError;
use crate::types::event::MouseButton;
use crate::types::geometry::Point;
use crate::types::notification::Notification;
use crate::types::settings::{ShellConfig, WindowKind};

pub struct App<W: WindowPrimitive> {
    pub config: ShellConfig,
    pub tab_manager: TabManager,
    pub chrome: FramelessWindowController<W>,
    pub tab_strip: TabStrip,
    notifications: Vec<Notification>,
}

impl<W: WindowPrimitive> App<W> {
    /// Creates an App with the built-in tools, attached to `window`.
    ///
    /// No tab is open until [`App::startup`] runs.
    pub fn new(config: ShellConfig, window: W, kind: WindowKind) -> Self {
        Self::with_registry(config, window, kind, ToolRegistry::with_builtin_tools())
    }

    pub fn with_registry(config: ShellConfig, window: W, kind: WindowKind, registry: ToolRegistry) -> Self {
        let chrome = FramelessWindowController::new(window, kind, &config.chrome);
        let tab_strip = TabStrip::new(config.chrome.chrome_height);
        Self {
            config,
            tab_manager: TabManager::new(registry),
            chrome,
            tab_strip,
            notifications: Vec::new(),
        }
    }

    /// Startup sequence: open the initial tab.
    ///
    /// With a file, the file is opened directly in `tool` (or the configured
    /// default file tool). Failures fall back to a dashboard tab and leave a
    /// notification for the front end.
    pub fn startup(&mut self, file: Option<&Path>, tool: Option<&str>) {
        match file {
            Some(path) => {
                let tool_id = tool
                    .map(str::to_string)
                    .unwrap_or_else(|| self.config.startup.default_file_tool.clone());
                log::info!("opening {} in {}", path.display(), tool_id);
                if let Err(err) = self.tab_manager.open_tool_directly(&tool_id, path) {
                    self.notify(&err);
                }
            }
            None => {
                self.tab_manager.open_new_tab();
            }
        }
        self.relayout_strip();
    }

    /// Queues an error for the user.
    pub fn notify(&mut self, err: &ShellError) {
        self.notifications.push(Notification::from(err));
    }

    /// Drains queued notifications in the order they were raised.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn pending_notifications(&self) -> usize {
        self.notifications.len()
    }

    /// Recomputes tab rectangles from the current tab count and window width.
    pub fn relayout_strip(&mut self) {
        let window_width = self
            .chrome
            .window_geometry()
            .map(|rect| rect.width)
            .unwrap_or(self.config.window.width);
        let available = window_width - self.config.chrome.reserved_width;
        self.tab_strip.layout(self.tab_manager.tab_count(), available);
    }

    /// Press on the tab strip. Tab hits select the tab; empty-area presses
    /// start a window drag through the chrome controller.
    pub fn strip_pressed(&mut self, local: Point, global: Point, button: MouseButton) -> StripPress {
        let press = self.tab_strip.press(local, global, button, &mut self.chrome);
        if let StripPress::Tab(index) = press {
            if let Err(err) = self.tab_manager.select_tab(index) {
                log::warn!("strip press on stale tab: {}", err);
            }
        }
        press
    }

    pub fn strip_moved(&mut self, global: Point) -> bool {
        self.tab_strip.pointer_moved(global, &mut self.chrome)
    }

    pub fn strip_released(&mut self, global: Point) {
        self.tab_strip.release(global, &mut self.chrome);
    }

    /// Markup of the active tab's visible page.
    pub fn active_page_html(&self) -> Option<String> {
        let index = self.tab_manager.active_index()?;
        self.tab_manager.visible_page(index).map(|page| page.render_html())
    }

    /// Shutdown sequence: detach the chrome controller and return the window.
    pub fn shutdown(self) -> W {
        log::info!("shutting down with {} tab(s) open", self.tab_manager.tab_count());
        self.chrome.teardown()
    }
}
