use std::path::Path;

use slotmap::SlotMap;
use uuid::Uuid;

use crate::services::tool_registry::ToolRegistry;
use crate::tools::dashboard::DASHBOARD_TITLE;
use crate::types::content::{ContentPage, PageKey};
use crate::types::errors::{ShellError, TabError};
use crate::types::history::{HistoryEntry, NavigationHistory};
use crate::types::tab::{ContentHost, Tab, TabSummary};

/// Trait defining the tab navigation interface.
pub trait TabManagerTrait {
    fn open_new_tab(&mut self) -> usize;
    fn open_tab_with(&mut self, page: Box<dyn ContentPage>, title: &str) -> usize;
    fn open_content(&mut self, page: Box<dyn ContentPage>, title: &str) -> bool;
    fn open_tool(&mut self, tool_id: &str) -> Result<bool, ShellError>;
    fn open_tool_directly(&mut self, tool_id: &str, file_path: &Path) -> Result<usize, ShellError>;
    fn go_back(&mut self) -> bool;
    fn go_forward(&mut self) -> bool;
    fn close_tab(&mut self, index: usize) -> bool;
    fn select_tab(&mut self, index: usize) -> Result<(), TabError>;
    fn tab_count(&self) -> usize;
    fn active_index(&self) -> Option<usize>;
    fn active_tab(&self) -> Option<&Tab>;
    fn tabs(&self) -> &[Tab];
    fn tab(&self, index: usize) -> Option<&Tab>;
    fn find_tab(&self, tab_id: &str) -> Result<usize, TabError>;
    fn visible_page(&self, index: usize) -> Option<&dyn ContentPage>;
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn summaries(&self) -> Vec<TabSummary>;
}

/// Tab strip state with a separate back/forward history per tab.
///
/// Pages of every tab live in one arena; tabs hold page keys in their
/// content host and history entries hold host indices. Once the first tab
/// is open there is always at least one tab.
pub struct TabManager {
    registry: ToolRegistry,
    pages: SlotMap<PageKey, Box<dyn ContentPage>>,
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl TabManager {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            pages: SlotMap::with_key(),
            tabs: Vec::new(),
            active: None,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Number of pages alive across all tabs.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn push_tab(&mut self, page: Box<dyn ContentPage>, title: &str) -> usize {
        let key = self.pages.insert(page);
        let mut host = ContentHost::new();
        let page_index = host.add_page(key);
        host.set_visible(page_index);

        self.tabs.push(Tab {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            host,
            history: NavigationHistory::new(HistoryEntry::new(page_index, title)),
        });
        let index = self.tabs.len() - 1;
        self.active = Some(index);
        log::debug!("opened tab {} ({})", index, title);
        index
    }

    /// Shows the history entry under the cursor of the active tab.
    fn show_current(&mut self, index: usize) {
        let tab = &mut self.tabs[index];
        let entry = tab.history.current().clone();
        tab.host.set_visible(entry.page_index);
        tab.title = entry.title;
    }

    /// Creates a page for `tool_id` and loads `file_path` into it.
    fn load_tool_page(&self, tool_id: &str, file_path: &Path) -> Result<(Box<dyn ContentPage>, String), ShellError> {
        let descriptor = self
            .registry
            .get(tool_id)
            .ok_or_else(|| ShellError::ToolNotFound(tool_id.to_string()))?;
        let title = descriptor.display_name.clone();
        let mut page = descriptor.create_page();

        let loader = page
            .file_loader()
            .ok_or_else(|| ShellError::ToolIncompatible(title.clone()))?;
        loader.load(file_path).map_err(|err| ShellError::FileLoadError {
            tool: title.clone(),
            file: file_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| file_path.display().to_string()),
            message: err.to_string(),
        })?;
        Ok((page, title))
    }
}

impl TabManagerTrait for TabManager {
    /// Opens a tab showing the dashboard and makes it active.
    fn open_new_tab(&mut self) -> usize {
        let dashboard = self.registry.dashboard();
        self.push_tab(dashboard, DASHBOARD_TITLE)
    }

    /// Opens a tab whose first history entry is `page`.
    fn open_tab_with(&mut self, page: Box<dyn ContentPage>, title: &str) -> usize {
        self.push_tab(page, title)
    }

    /// Navigates the active tab to a new page, discarding its forward history.
    /// Returns false when there is no active tab.
    fn open_content(&mut self, page: Box<dyn ContentPage>, title: &str) -> bool {
        let Some(index) = self.active else {
            return false;
        };

        let key = self.pages.insert(page);
        let tab = &mut self.tabs[index];
        let page_index = tab.host.add_page(key);
        tab.history.push(HistoryEntry::new(page_index, title));
        tab.host.set_visible(page_index);
        tab.title = title.to_string();
        log::debug!("tab {} navigated to {} ({} entries)", index, title, tab.history.len());
        true
    }

    /// Opens a registered tool in the active tab, as chosen on the dashboard.
    fn open_tool(&mut self, tool_id: &str) -> Result<bool, ShellError> {
        let (page, title) = self.registry.create(tool_id)?;
        Ok(self.open_content(page, &title))
    }

    /// Opens `file_path` in a new tab for `tool_id`, bypassing the dashboard.
    ///
    /// On any failure a dashboard tab is opened instead and the error is
    /// returned so the caller can tell the user. A page that fails to load is
    /// dropped before any tab is created for it.
    fn open_tool_directly(&mut self, tool_id: &str, file_path: &Path) -> Result<usize, ShellError> {
        match self.load_tool_page(tool_id, file_path) {
            Ok((page, title)) => Ok(self.push_tab(page, &title)),
            Err(err) => {
                log::warn!("{}: {}", err.notification_title(), err);
                self.open_new_tab();
                Err(err)
            }
        }
    }

    fn go_back(&mut self) -> bool {
        let Some(index) = self.active else {
            return false;
        };
        if self.tabs[index].history.back().is_none() {
            return false;
        }
        self.show_current(index);
        true
    }

    fn go_forward(&mut self) -> bool {
        let Some(index) = self.active else {
            return false;
        };
        if self.tabs[index].history.forward().is_none() {
            return false;
        }
        self.show_current(index);
        true
    }

    /// Closes the tab at `index`, keeping at least one tab open.
    ///
    /// When the active tab closes, the tab that slides into its index becomes
    /// active, or the new last tab if it was the rightmost.
    fn close_tab(&mut self, index: usize) -> bool {
        if self.tabs.len() <= 1 || index >= self.tabs.len() {
            return false;
        }

        let tab = self.tabs.remove(index);
        for key in tab.host.pages() {
            self.pages.remove(*key);
        }

        self.active = match self.active {
            Some(active) if active == index => Some(index.min(self.tabs.len() - 1)),
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        log::debug!("closed tab {} ({}), {} left", index, tab.title, self.tabs.len());
        true
    }

    fn select_tab(&mut self, index: usize) -> Result<(), TabError> {
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex(index));
        }
        self.active = Some(index);
        Ok(())
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn active_index(&self) -> Option<usize> {
        self.active
    }

    fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|i| self.tabs.get(i))
    }

    fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    fn find_tab(&self, tab_id: &str) -> Result<usize, TabError> {
        self.tabs
            .iter()
            .position(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    fn visible_page(&self, index: usize) -> Option<&dyn ContentPage> {
        let key = self.tabs.get(index)?.host.visible_page()?;
        self.pages.get(key).map(|page| page.as_ref())
    }

    fn can_go_back(&self) -> bool {
        self.active_tab().is_some_and(|t| t.history.can_go_back())
    }

    fn can_go_forward(&self) -> bool {
        self.active_tab().is_some_and(|t| t.history.can_go_forward())
    }

    fn summaries(&self) -> Vec<TabSummary> {
        self.tabs
            .iter()
            .enumerate()
            .map(|(i, t)| TabSummary {
                id: t.id.clone(),
                title: t.title.clone(),
                active: self.active == Some(i),
                can_go_back: t.history.can_go_back(),
                can_go_forward: t.history.can_go_forward(),
                history_len: t.history.len(),
                cursor: t.history.cursor(),
            })
            .collect()
    }
}
