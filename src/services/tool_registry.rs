// Subtitle shell tool registry
// Maps tool ids to factories producing content pages. This is the single
// source of truth for which tools exist and in which order the dashboard
// lists them.

use serde::{Deserialize, Serialize};

use crate::tools::dashboard::DashboardPage;
use crate::tools::placeholder::PlaceholderPage;
use crate::tools::srt_editor::SrtEditorPage;
use crate::types::content::ContentPage;
use crate::types::errors::{RegistryError, ShellError};

type PageFactory = Box<dyn Fn() -> Box<dyn ContentPage>>;

/// A registered tool.
pub struct ToolDescriptor {
    pub id: String,
    pub display_name: String,
    pub description: String,
    /// Whether the tool's pages accept a file on open.
    pub can_open_file: bool,
    factory: PageFactory,
}

impl ToolDescriptor {
    pub fn new<F>(id: &str, display_name: &str, description: &str, can_open_file: bool, factory: F) -> Self
    where
        F: Fn() -> Box<dyn ContentPage> + 'static,
    {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            description: description.to_string(),
            can_open_file,
            factory: Box::new(factory),
        }
    }

    /// Builds a fresh page for this tool.
    pub fn create_page(&self) -> Box<dyn ContentPage> {
        (self.factory)()
    }

    pub fn summary(&self) -> ToolSummary {
        ToolSummary {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            can_open_file: self.can_open_file,
        }
    }
}

/// Serializable description of a tool for the dashboard and IPC clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSummary {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub can_open_file: bool,
}

/// Ordered collection of tools.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// The registry with every tool shipped with the shell.
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.tools.push(ToolDescriptor::new(
            "srt_editor",
            "📝 SRT Editor",
            "A color-coded editor for SRT subtitle files.",
            true,
            || Box::new(SrtEditorPage::new("📝 SRT Editor")),
        ));

        let placeholders = [
            ("min_length", "📏 Minimum Length", "Adjust the minimum display time of subtitles."),
            ("max_length", "📏 Maximum Length", "Adjust the maximum display time of subtitles."),
            ("merge", "🔗 Merge Lines", "Combine multiple subtitle lines into one."),
            ("split", "✂️ Split Lines", "Split long subtitle lines into two."),
            ("subtitle_shifter", "⏰ Subtitle Shifter", "Shift subtitle timings forwards or backwards."),
            ("subtitle_converter", "🔄 Subtitle Converter", "Convert subtitles to various formats."),
            ("multilingual_merge", "🌍 Multilingual Merge", "Merge subtitles from different languages."),
        ];
        for (id, name, description) in placeholders {
            let page_id = id.to_string();
            let page_name = name.to_string();
            registry.tools.push(ToolDescriptor::new(id, name, description, false, move || {
                Box::new(PlaceholderPage::new(&page_id, &page_name))
            }));
        }
        registry
    }

    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), RegistryError> {
        if self.get(&descriptor.id).is_some() {
            return Err(RegistryError::DuplicateTool(descriptor.id));
        }
        self.tools.push(descriptor);
        Ok(())
    }

    pub fn get(&self, tool_id: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.id == tool_id)
    }

    /// Creates a page for `tool_id` together with its display name.
    pub fn create(&self, tool_id: &str) -> Result<(Box<dyn ContentPage>, String), ShellError> {
        let descriptor = self
            .get(tool_id)
            .ok_or_else(|| ShellError::ToolNotFound(tool_id.to_string()))?;
        Ok((descriptor.create_page(), descriptor.display_name.clone()))
    }

    /// Builds the dashboard page listing every registered tool.
    pub fn dashboard(&self) -> Box<dyn ContentPage> {
        Box::new(DashboardPage::new(self.summaries()))
    }

    pub fn summaries(&self) -> Vec<ToolSummary> {
        self.tools.iter().map(ToolDescriptor::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
