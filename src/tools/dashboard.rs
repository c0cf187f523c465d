use crate::services::tool_registry::ToolSummary;
use crate::types::content::ContentPage;

use super::escape_html;

pub const DASHBOARD_ID: &str = "dashboard";
pub const DASHBOARD_TITLE: &str = "Dashboard";

/// Grid of tool buttons shown in every new tab.
///
/// Buttons carry `data-tool` attributes; the front end turns a click into a
/// `tab.open_tool` request.
pub struct DashboardPage {
    tools: Vec<ToolSummary>,
}

impl DashboardPage {
    pub fn new(tools: Vec<ToolSummary>) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &[ToolSummary] {
        &self.tools
    }
}

impl ContentPage for DashboardPage {
    fn tool_id(&self) -> &str {
        DASHBOARD_ID
    }

    fn title(&self) -> &str {
        DASHBOARD_TITLE
    }

    fn render_html(&self) -> String {
        let mut html = String::from("<div class=\"dashboard-grid\">");
        for tool in &self.tools {
            html.push_str(&format!(
                "<button class=\"tool-button\" data-region=\"content\" data-tool=\"{}\" title=\"{}\">{}</button>",
                escape_html(&tool.id),
                escape_html(&tool.description),
                escape_html(&tool.display_name),
            ));
        }
        html.push_str("</div>");
        html
    }
}
