use serde::{Deserialize, Serialize};

use super::content::PageKey;
use super::history::NavigationHistory;

/// Per-tab container of every page opened in that tab.
///
/// Append-only: pages are added at the end and one of them is visible.
/// Pages are never removed from the middle, so history entries can refer to
/// them by index.
#[derive(Debug, Clone, Default)]
pub struct ContentHost {
    pages: Vec<PageKey>,
    visible: usize,
}

impl ContentHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page and returns its index in this host.
    pub fn add_page(&mut self, key: PageKey) -> usize {
        self.pages.push(key);
        self.pages.len() - 1
    }

    /// Makes the page at `index` visible. Out-of-range indices are ignored.
    pub fn set_visible(&mut self, index: usize) {
        if index < self.pages.len() {
            self.visible = index;
        }
    }

    pub fn visible_index(&self) -> usize {
        self.visible
    }

    pub fn page_at(&self, index: usize) -> Option<PageKey> {
        self.pages.get(index).copied()
    }

    pub fn visible_page(&self) -> Option<PageKey> {
        self.page_at(self.visible)
    }

    pub fn pages(&self) -> &[PageKey] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// A shell tab: a content host plus its own navigation history.
#[derive(Debug, Clone)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub host: ContentHost,
    pub history: NavigationHistory,
}

/// Serializable view of a tab for the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSummary {
    pub id: String,
    pub title: String,
    pub active: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub history_len: usize,
    pub cursor: usize,
}
