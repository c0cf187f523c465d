use crate::types::content::ContentPage;

use super::escape_html;

/// Stand-in page for tools that are not implemented yet.
pub struct PlaceholderPage {
    tool_id: String,
    title: String,
}

impl PlaceholderPage {
    pub fn new(tool_id: &str, title: &str) -> Self {
        Self {
            tool_id: tool_id.to_string(),
            title: title.to_string(),
        }
    }
}

impl ContentPage for PlaceholderPage {
    fn tool_id(&self) -> &str {
        &self.tool_id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn render_html(&self) -> String {
        format!(
            "<div class=\"placeholder-label\">{} Tool - Placeholder</div>",
            escape_html(&self.title)
        )
    }
}
