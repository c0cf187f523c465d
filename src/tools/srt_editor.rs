use std::fs;
use std::path::{Path, PathBuf};

use crate::types::content::{ContentPage, FileLoader};
use crate::types::errors::LoadError;

use super::escape_html;

/// Text editor page for subtitle files. The only built-in tool that can open
/// a file passed on the command line.
pub struct SrtEditorPage {
    title: String,
    path: Option<PathBuf>,
    text: String,
}

impl SrtEditorPage {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            path: None,
            text: String::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ContentPage for SrtEditorPage {
    fn tool_id(&self) -> &str {
        "srt_editor"
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn render_html(&self) -> String {
        let name = self
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string());
        format!(
            "<div class=\"srt-editor\"><div class=\"srt-file\">{}</div><textarea class=\"srt-text\" spellcheck=\"false\">{}</textarea></div>",
            escape_html(&name),
            escape_html(&self.text),
        )
    }

    fn file_loader(&mut self) -> Option<&mut dyn FileLoader> {
        Some(self)
    }
}

impl FileLoader for SrtEditorPage {
    fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        let text = fs::read_to_string(path)?;
        if text.trim().is_empty() {
            return Err(LoadError::Empty(path.display().to_string()));
        }
        self.text = text;
        self.path = Some(path.to_path_buf());
        Ok(())
    }
}
