use std::path::Path;

use slotmap::new_key_type;

use super::errors::LoadError;

new_key_type! {
    /// Handle to a content page stored in the shared page arena.
    pub struct PageKey;
}

/// A page that can be shown in a tab.
///
/// The shell treats pages as opaque: it stores them, asks for their markup
/// when they become visible and, for the open-with-file flow, asks whether
/// they can load a file.
pub trait ContentPage {
    /// Identifier of the tool that produced this page (`"dashboard"` for the dashboard).
    fn tool_id(&self) -> &str;

    /// Human-readable title used for the tab while this page is current.
    fn title(&self) -> &str;

    /// HTML fragment rendered into the content area.
    fn render_html(&self) -> String;

    /// Load-on-open capability. Pages that cannot open files return `None`.
    fn file_loader(&mut self) -> Option<&mut dyn FileLoader> {
        None
    }
}

/// Capability of a page to load a file right after it is created.
pub trait FileLoader {
    fn load(&mut self, path: &Path) -> Result<(), LoadError>;
}
