//! IPC method handler for the subtitle shell JSON protocol.
//!
//! Shared by the GUI bridge (messages posted from the chrome page) and the
//! `subtitle-shell-rpc` binary. `handle_method` dispatches one call into the
//! `App` and returns a JSON result or an error message.

use std::path::Path;
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::tab_manager::TabManagerTrait;
use crate::managers::tab_strip::StripPress;
use crate::platform::WindowPrimitive;
use crate::types::event::{ChromeEvent, MouseButton, PointerRegion};
use crate::types::geometry::Point;

fn coord_param(params: &Value, key: &str) -> Result<i32, String> {
    let v = params.get(key).and_then(|v| v.as_i64()).ok_or(format!("missing {}", key))?;
    i32::try_from(v).map_err(|_| format!("{} out of range: {}", key, v))
}

fn point_param(params: &Value, x_key: &str, y_key: &str) -> Result<Point, String> {
    Ok(Point::new(coord_param(params, x_key)?, coord_param(params, y_key)?))
}

fn button_param(params: &Value) -> Result<MouseButton, String> {
    match params.get("button") {
        None | Some(Value::Null) => Ok(MouseButton::Primary),
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| format!("invalid button: {}", e)),
    }
}

fn region_param(params: &Value) -> Result<PointerRegion, String> {
    let v = params.get("region").ok_or("missing region")?;
    serde_json::from_value(v.clone()).map_err(|e| format!("invalid region: {}", e))
}

fn index_param(params: &Value) -> Result<usize, String> {
    params
        .get("index")
        .and_then(|v| v.as_u64())
        .map(|i| i as usize)
        .ok_or_else(|| "missing index".to_string())
}

fn str_param<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params.get(key).and_then(|v| v.as_str()).ok_or(format!("missing {}", key))
}

/// Tab strip snapshot returned by every tab-changing method.
fn tabs_json<W: WindowPrimitive>(app: &App<W>) -> Value {
    json!({
        "active": app.tab_manager.active_index(),
        "tabs": app.tab_manager.summaries(),
        "strip": app.tab_strip.tab_rects(),
        "can_go_back": app.tab_manager.can_go_back(),
        "can_go_forward": app.tab_manager.can_go_forward(),
        "html": app.active_page_html(),
    })
}

fn chrome_json<W: WindowPrimitive>(app: &App<W>) -> Value {
    json!({
        "state": app.chrome.state().name(),
        "affordance": app.chrome.affordance(),
        "cursor": app.chrome.cursor(),
        "geometry": app.chrome.window_geometry(),
        "resize_enabled": app.chrome.resize_enabled(),
        "kind": app.chrome.kind(),
    })
}

/// Dispatch an IPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// User-facing failures such as a file that would not load are not errors
/// here: they are queued as notifications and reported in the result.
pub fn handle_method<W: WindowPrimitive>(app: &Mutex<App<W>>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Window chrome ───
        "chrome.pointer_pressed" => {
            let global = point_param(params, "x", "y")?;
            let button = button_param(params)?;
            let region = region_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let disposition = a.chrome.handle_event(ChromeEvent::PointerPressed { button, global, region });
            Ok(json!({"disposition": disposition, "state": a.chrome.state().name()}))
        }
        "chrome.pointer_moved" => {
            let global = point_param(params, "x", "y")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let disposition = a.chrome.handle_event(ChromeEvent::PointerMoved { global });
            Ok(json!({"disposition": disposition, "cursor": a.chrome.cursor(), "geometry": a.chrome.window_geometry()}))
        }
        "chrome.pointer_released" => {
            let global = point_param(params, "x", "y")?;
            let button = button_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let disposition = a.chrome.handle_event(ChromeEvent::PointerReleased { button, global });
            Ok(json!({"disposition": disposition, "state": a.chrome.state().name()}))
        }
        "chrome.window_state_changed" => {
            let maximized = params.get("maximized").and_then(|v| v.as_bool()).ok_or("missing maximized")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.chrome.handle_event(ChromeEvent::WindowStateChanged { maximized });
            a.relayout_strip();
            Ok(chrome_json(&a))
        }
        "chrome.toggle_maximize" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if !a.chrome.toggle_maximize() {
                return Err("window is not available".to_string());
            }
            a.relayout_strip();
            Ok(chrome_json(&a))
        }
        "chrome.set_resize_enabled" => {
            let enabled = params.get("enabled").and_then(|v| v.as_bool()).ok_or("missing enabled")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.chrome.set_resize_enabled(enabled);
            Ok(chrome_json(&a))
        }
        "chrome.state" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(chrome_json(&a))
        }

        // ─── Tab strip ───
        "strip.pressed" => {
            let local = point_param(params, "local_x", "local_y")?;
            let global = point_param(params, "x", "y")?;
            let button = button_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            match a.strip_pressed(local, global, button) {
                StripPress::Tab(index) => {
                    let mut result = tabs_json(&a);
                    result["press"] = json!({"tab": index});
                    Ok(result)
                }
                StripPress::WindowDrag => Ok(json!({"press": "window_drag"})),
                StripPress::Ignored => Ok(json!({"press": "ignored"})),
            }
        }
        "strip.moved" => {
            let global = point_param(params, "x", "y")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let forwarded = a.strip_moved(global);
            Ok(json!({"forwarded": forwarded, "geometry": a.chrome.window_geometry()}))
        }
        "strip.released" => {
            let global = point_param(params, "x", "y")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.strip_released(global);
            Ok(json!({"state": a.chrome.state().name()}))
        }

        // ─── Tabs ───
        "tab.new" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.tab_manager.open_new_tab();
            a.relayout_strip();
            Ok(tabs_json(&a))
        }
        "tab.open_tool" => {
            let tool_id = str_param(params, "tool_id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            match a.tab_manager.open_tool(tool_id) {
                Ok(_) => Ok(tabs_json(&a)),
                Err(err) => {
                    a.notify(&err);
                    Err(err.to_string())
                }
            }
        }
        "tab.open_file" => {
            let path = str_param(params, "path")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let tool_id = match params.get("tool_id").and_then(|v| v.as_str()) {
                Some(id) => id.to_string(),
                None => a.config.startup.default_file_tool.clone(),
            };
            let outcome = a.tab_manager.open_tool_directly(&tool_id, Path::new(path));
            if let Err(err) = &outcome {
                a.notify(err);
            }
            a.relayout_strip();
            let mut result = tabs_json(&a);
            result["opened"] = json!(outcome.is_ok());
            if let Err(err) = outcome {
                result["error"] = json!(err.to_string());
            }
            Ok(result)
        }
        "tab.back" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let moved = a.tab_manager.go_back();
            let mut result = tabs_json(&a);
            result["moved"] = json!(moved);
            Ok(result)
        }
        "tab.forward" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let moved = a.tab_manager.go_forward();
            let mut result = tabs_json(&a);
            result["moved"] = json!(moved);
            Ok(result)
        }
        "tab.close" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let index = match params.get("id").and_then(|v| v.as_str()) {
                Some(id) => a.tab_manager.find_tab(id).map_err(|e| e.to_string())?,
                None => index_param(params)?,
            };
            let closed = a.tab_manager.close_tab(index);
            a.relayout_strip();
            let mut result = tabs_json(&a);
            result["closed"] = json!(closed);
            Ok(result)
        }
        "tab.select" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let index = match params.get("id").and_then(|v| v.as_str()) {
                Some(id) => a.tab_manager.find_tab(id).map_err(|e| e.to_string())?,
                None => index_param(params)?,
            };
            a.tab_manager.select_tab(index).map_err(|e| e.to_string())?;
            Ok(tabs_json(&a))
        }
        "tab.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(tabs_json(&a))
        }

        // ─── Tools & notifications ───
        "tools.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.tab_manager.registry().summaries()))
        }
        "notifications.take" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.take_notifications()))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
