// Subtitle shell state managers
// Managers own interactive state: the window chrome gesture machine, the tab strip and per-tab navigation.

pub mod tab_manager;
pub mod tab_strip;
pub mod window_controller;
