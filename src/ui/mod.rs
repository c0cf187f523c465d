//! Subtitle shell UI layer.
//!
//! Uses `wry` for the webview and `tao` for the native window:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The window is created without decorations. The chrome strip, tab strip and
//! tool pages are HTML inside the webview; pointer events on the chrome are
//! posted over wry IPC and dispatched through `ipc_handler::handle_method`.

pub mod shell_app;
pub mod tao_window;
