//! Property-based tests for Tab Manager operations.
//!
//! These tests verify the tab invariants: once a tab is open the count never
//! drops below one, the active index always points at an existing tab, and
//! every tab's history cursor stays inside its history.

use proptest::prelude::*;

use subtitle_shell::managers::tab_manager::{TabManager, TabManagerTrait};
use subtitle_shell::services::tool_registry::ToolRegistry;

/// Operations that can be performed on the TabManager.
#[derive(Debug, Clone)]
enum TabOp {
    NewTab,
    OpenTool(usize), // index into the registry's tool list
    Back,
    Forward,
    Close(usize), // taken modulo the current tab count
    Select(usize),
}

fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(TabOp::NewTab),
            3 => (0..8usize).prop_map(TabOp::OpenTool),
            2 => Just(TabOp::Back),
            1 => Just(TabOp::Forward),
            2 => (0..12usize).prop_map(TabOp::Close),
            1 => (0..12usize).prop_map(TabOp::Select),
        ],
        1..80,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tab_count_and_cursor_invariants(ops in arb_tab_ops()) {
        let registry = ToolRegistry::with_builtin_tools();
        let tool_ids: Vec<String> = registry.summaries().into_iter().map(|t| t.id).collect();
        let mut manager = TabManager::new(registry);
        manager.open_new_tab();
        let mut expected_count: usize = 1;

        for op in &ops {
            match op {
                TabOp::NewTab => {
                    manager.open_new_tab();
                    expected_count += 1;
                }
                TabOp::OpenTool(i) => {
                    prop_assert!(manager.open_tool(&tool_ids[*i]).unwrap());
                }
                TabOp::Back => {
                    manager.go_back();
                }
                TabOp::Forward => {
                    manager.go_forward();
                }
                TabOp::Close(i) => {
                    let index = i % manager.tab_count();
                    let closed = manager.close_tab(index);
                    prop_assert_eq!(closed, expected_count > 1);
                    if closed {
                        expected_count -= 1;
                    }
                }
                TabOp::Select(i) => {
                    let result = manager.select_tab(*i);
                    prop_assert_eq!(result.is_ok(), *i < manager.tab_count());
                }
            }

            prop_assert_eq!(manager.tab_count(), expected_count);
            prop_assert!(manager.tab_count() >= 1);
            let active = manager.active_index().unwrap();
            prop_assert!(active < manager.tab_count());

            for index in 0..manager.tab_count() {
                let tab = manager.tab(index).unwrap();
                prop_assert!(!tab.history.is_empty());
                prop_assert!(tab.history.cursor() < tab.history.len());
                prop_assert_eq!(tab.host.visible_index(), tab.history.current().page_index);
                prop_assert_eq!(&tab.title, &tab.history.current().title);
                prop_assert!(manager.visible_page(index).is_some());
            }
        }
    }

    #[test]
    fn closed_tabs_release_their_pages(ops in arb_tab_ops()) {
        let mut manager = TabManager::new(ToolRegistry::with_builtin_tools());
        manager.open_new_tab();
        let tool_ids: Vec<String> = manager.registry().summaries().into_iter().map(|t| t.id).collect();

        for op in &ops {
            match op {
                TabOp::NewTab => { manager.open_new_tab(); }
                TabOp::OpenTool(i) => { let _ = manager.open_tool(&tool_ids[*i]); }
                TabOp::Back => { manager.go_back(); }
                TabOp::Forward => { manager.go_forward(); }
                TabOp::Close(i) => { let n = manager.tab_count(); manager.close_tab(i % n); }
                TabOp::Select(i) => { let _ = manager.select_tab(*i); }
            }
        }

        let hosted: usize = (0..manager.tab_count())
            .map(|i| manager.tab(i).unwrap().host.len())
            .sum();
        prop_assert_eq!(manager.page_count(), hosted);
    }
}
