//! Subtitle shell RPC server - JSON over stdin/stdout for driving the shell headless.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"chrome.pointer_pressed", "params":{"x":10,"y":10,"region":"draggable"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! The window is a `HeadlessWindow` sized from the config; `chrome.*` calls
//! move and resize it in memory.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use clap::Parser;
use serde_json::{json, Value};

use subtitle_shell::app::App;
use subtitle_shell::cli::Cli;
use subtitle_shell::ipc_handler::handle_method;
use subtitle_shell::platform::HeadlessWindow;
use subtitle_shell::types::geometry::Rect;
use subtitle_shell::types::settings::{ShellConfig, WindowKind};

const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

fn respond(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config().unwrap_or_else(|err| {
        log::warn!("{}; using defaults", err);
        ShellConfig::default()
    });

    let window = HeadlessWindow::new(config.window.initial_geometry(), config.window.minimum_size(), SCREEN);
    let mut app = App::new(config, window, WindowKind::Main);
    app.startup(cli.file.as_deref(), cli.tool.as_deref());
    let app = Mutex::new(app);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Signal ready
    respond(&mut out, &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}))?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                respond(&mut out, &json!({"id": null, "error": format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        respond(&mut out, &response)?;
    }

    Ok(())
}
