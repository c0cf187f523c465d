//! Frameless shell window using `wry` + `tao`.
//!
//! Architecture:
//! - The tao window is built without decorations; a `TaoWindow` handle backs
//!   the chrome controller inside the shared `App`.
//! - The chrome page is served from the `shell://` custom protocol. It draws
//!   the chrome strip, the tab strip and the active tool page.
//! - JS posts `{id, method, params}` over `window.ipc.postMessage()`; the IPC
//!   handler runs `handle_method` and answers through `evaluate_script`.
//! - Window resizes and maximize changes made by the window manager are fed
//!   back to the controller as `WindowStateChanged`.

use std::borrow::Cow;
use std::error::Error;
use std::rc::Rc;
use std::sync::Mutex;

use serde_json::{json, Value};
use tao::dpi::{LogicalPosition, LogicalSize};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::cli::Cli;
use crate::ipc_handler::handle_method;
use crate::types::event::ChromeEvent;
use crate::types::settings::{ShellConfig, WindowKind};

use super::tao_window::TaoWindow;

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
    Quit,
}

type SharedApp = Rc<Mutex<App<TaoWindow>>>;

const CHROME_JS: &str = r##"
(function(){
  const S = { seq: 0, pending: new Map(), strip: false, gesture: false };
  const CURSORS = { default: '', resize_horizontal: 'ew-resize', resize_vertical: 'ns-resize', resize_nw_se: 'nwse-resize', resize_ne_sw: 'nesw-resize' };
  const BUTTONS = ['primary', 'middle', 'secondary'];

  function call(method, params) {
    return new Promise(function(resolve, reject) {
      const id = ++S.seq;
      S.pending.set(id, { resolve: resolve, reject: reject });
      window.ipc.postMessage(JSON.stringify({ id: id, method: method, params: params || {} }));
    });
  }

  function renderTabs(state) {
    const strip = document.getElementById('tabstrip');
    strip.innerHTML = '';
    (state.tabs || []).forEach(function(tab, i) {
      const rect = (state.strip || [])[i] || { x: i * 120, width: 120 };
      const el = document.createElement('div');
      el.className = 'tab' + (tab.active ? ' active' : '');
      el.style.left = rect.x + 'px';
      el.style.width = rect.width + 'px';
      el.dataset.region = 'control';
      el.title = tab.title;
      const label = document.createElement('span');
      label.textContent = tab.title;
      const close = document.createElement('button');
      close.className = 'tab-close';
      close.textContent = '×';
      close.dataset.action = 'close-tab';
      close.dataset.id = tab.id;
      close.dataset.region = 'control';
      el.appendChild(label);
      el.appendChild(close);
      strip.appendChild(el);
    });
    document.getElementById('back').disabled = !state.can_go_back;
    document.getElementById('forward').disabled = !state.can_go_forward;
    if (typeof state.html === 'string') document.getElementById('content').innerHTML = state.html;
  }

  function renderChrome(state) {
    document.getElementById('maximize').textContent = state.affordance === 'restore' ? '❐' : '□';
    applyCursor(state.cursor);
  }

  function applyCursor(shape) {
    document.documentElement.style.cursor = CURSORS[shape] || '';
  }

  function regionOf(target) {
    const el = target.closest('[data-region]');
    return el ? el.dataset.region : 'content';
  }

  function refresh() {
    call('tab.list').then(renderTabs);
    call('chrome.state').then(renderChrome);
  }

  window.__shell = {
    resolve: function(id, reply) {
      const p = S.pending.get(id);
      if (!p) return;
      S.pending.delete(id);
      if ('error' in reply) p.reject(reply.error); else p.resolve(reply.result);
    },
    notify: function(list) {
      list.forEach(function(n) { alert(n.title + '\n\n' + n.message); });
    },
    refresh: refresh
  };

  document.addEventListener('pointerdown', function(e) {
    if (e.target.closest('[data-action],[data-tool]')) return;
    const button = BUTTONS[e.button] || 'primary';
    const strip = document.getElementById('tabstrip');
    if (strip.contains(e.target)) {
      const box = strip.getBoundingClientRect();
      call('strip.pressed', { local_x: Math.round(e.clientX - box.left), local_y: Math.round(e.clientY - box.top), x: e.screenX, y: e.screenY, button: button })
        .then(function(r) {
          if (r.press === 'window_drag') S.strip = true;
          else if (r.tabs) renderTabs(r);
        });
    } else {
      call('chrome.pointer_pressed', { x: e.screenX, y: e.screenY, button: button, region: regionOf(e.target) })
        .then(function(r) { S.gesture = r.disposition === 'consumed'; });
    }
    if (e.button === 0) document.documentElement.setPointerCapture(e.pointerId);
  });

  document.addEventListener('pointermove', function(e) {
    if (S.strip) {
      call('strip.moved', { x: e.screenX, y: e.screenY });
    } else {
      call('chrome.pointer_moved', { x: e.screenX, y: e.screenY }).then(function(r) {
        if (!S.gesture) applyCursor(r.cursor);
      });
    }
  });

  document.addEventListener('pointerup', function(e) {
    const button = BUTTONS[e.button] || 'primary';
    if (S.strip) {
      S.strip = false;
      call('strip.released', { x: e.screenX, y: e.screenY });
    } else {
      S.gesture = false;
      call('chrome.pointer_released', { x: e.screenX, y: e.screenY, button: button });
    }
    if (document.documentElement.hasPointerCapture(e.pointerId)) document.documentElement.releasePointerCapture(e.pointerId);
  });

  document.addEventListener('dblclick', function(e) {
    if (regionOf(e.target) === 'draggable') call('chrome.toggle_maximize').then(renderChrome);
  });

  document.addEventListener('click', function(e) {
    const tool = e.target.closest('[data-tool]');
    if (tool) {
      call('tab.open_tool', { tool_id: tool.dataset.tool }).then(renderTabs, function() {});
      return;
    }
    const action = e.target.closest('[data-action]');
    if (!action) return;
    switch (action.dataset.action) {
      case 'new-tab': call('tab.new').then(renderTabs); break;
      case 'back': call('tab.back').then(renderTabs); break;
      case 'forward': call('tab.forward').then(renderTabs); break;
      case 'close-tab': call('tab.close', { id: action.dataset.id }).then(renderTabs); break;
      case 'maximize': call('chrome.toggle_maximize').then(renderChrome); break;
      case 'quit': call('shell.quit'); break;
    }
  });

  refresh();
  call('notifications.take').then(window.__shell.notify);
})();
"##;

const CHROME_CSS: &str = r##"
*{margin:0;padding:0;box-sizing:border-box}
html,body{height:100%;overflow:hidden}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI","Noto Sans",Helvetica,Arial,sans-serif;background:#0d1117;color:#e6edf3;user-select:none;display:flex;flex-direction:column}
#chrome{display:flex;align-items:stretch;background:#161b22;border-bottom:1px solid #30363d;flex:none}
#tabstrip{position:relative;flex:1;min-width:200px;overflow:hidden}
.tab{position:absolute;top:4px;bottom:0;display:flex;align-items:center;gap:6px;padding:0 8px;border-radius:8px 8px 0 0;color:#7d8590;font-size:12px}
.tab.active{background:#0d1117;color:#e6edf3}
.tab span{flex:1;overflow:hidden;white-space:nowrap;text-overflow:ellipsis}
.tab-close,.chrome-button{background:none;border:none;color:inherit;font-size:14px;cursor:pointer}
.chrome-button{width:44px;color:#e6edf3}
.chrome-button:hover{background:#1c2128}
.chrome-button:disabled{color:#484f58}
#drag{flex:none;width:60px}
#content{flex:1;overflow:auto;padding:16px}
.dashboard-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(180px,1fr));gap:12px}
.tool-button{padding:24px 12px;background:#161b22;border:1px solid #30363d;border-radius:8px;color:#e6edf3;font-size:14px;cursor:pointer}
.tool-button:hover{border-color:#58a6ff}
.placeholder-label{display:flex;align-items:center;justify-content:center;height:100%;font-size:20px;color:#7d8590}
.srt-editor{display:flex;flex-direction:column;height:100%;gap:8px}
.srt-text{flex:1;background:#161b22;color:#e6edf3;border:1px solid #30363d;border-radius:6px;padding:8px;font-family:monospace;user-select:text}
"##;

/// Builds the chrome page. The strip height comes from the config so the
/// DOM matches the controller's chrome height.
fn chrome_page(config: &ShellConfig) -> String {
    let mut html = String::with_capacity(CHROME_CSS.len() + CHROME_JS.len() + 2000);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(CHROME_CSS);
    html.push_str(&format!("#chrome{{height:{}px}}", config.chrome.chrome_height));
    html.push_str("</style></head><body>");
    html.push_str("<div id=\"chrome\" data-region=\"draggable\">");
    html.push_str("<div id=\"tabstrip\" data-region=\"tab_strip_empty\"></div>");
    html.push_str("<button class=\"chrome-button\" data-action=\"new-tab\" data-region=\"control\" title=\"New tab\">+</button>");
    html.push_str("<button class=\"chrome-button\" id=\"back\" data-action=\"back\" data-region=\"control\" title=\"Back\">\u{2190}</button>");
    html.push_str("<button class=\"chrome-button\" id=\"forward\" data-action=\"forward\" data-region=\"control\" title=\"Forward\">\u{2192}</button>");
    html.push_str("<div id=\"drag\"></div>");
    html.push_str("<button class=\"chrome-button\" id=\"maximize\" data-action=\"maximize\" data-region=\"control\" title=\"Maximize\">\u{25a1}</button>");
    html.push_str("<button class=\"chrome-button\" data-action=\"quit\" data-region=\"control\" title=\"Close\">\u{2715}</button>");
    html.push_str("</div><div id=\"content\" data-region=\"content\"></div><script>");
    html.push_str(CHROME_JS);
    html.push_str("</script></body></html>");
    html
}

/// Runs one IPC message and returns the event that answers it.
fn dispatch_ipc(app: &SharedApp, body: &str) -> Option<UserEvent> {
    let request: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("malformed IPC message: {}", e);
            return None;
        }
    };
    let id = request.get("id").cloned().unwrap_or(Value::Null);
    let method = request.get("method").and_then(|v| v.as_str()).unwrap_or("");
    let params = request.get("params").cloned().unwrap_or(json!({}));
    if method == "shell.quit" {
        return Some(UserEvent::Quit);
    }

    let reply = match handle_method(app, method, &params) {
        Ok(val) => json!({"result": val}),
        Err(err) => {
            log::debug!("IPC {} failed: {}", method, err);
            json!({"error": err})
        }
    };

    let mut script = format!("window.__shell.resolve({},{});", id, reply);
    let notifications = app.lock().map(|mut a| a.take_notifications()).unwrap_or_default();
    if !notifications.is_empty() {
        script.push_str(&format!("window.__shell.notify({});", json!(notifications)));
    }
    Some(UserEvent::EvalScript(script))
}

// ─── Main entry point ───

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.load_config().unwrap_or_else(|err| {
        log::warn!("{}; using defaults", err);
        ShellConfig::default()
    });

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let minimum = config.window.minimum_size();
    let window = Rc::new(
        WindowBuilder::new()
            .with_title(config.window.title.as_str())
            .with_decorations(false)
            .with_position(LogicalPosition::new(config.window.x, config.window.y))
            .with_inner_size(LogicalSize::new(config.window.width as f64, config.window.height as f64))
            .with_min_inner_size(LogicalSize::new(minimum.width as f64, minimum.height as f64))
            .build(&event_loop)?,
    );

    let page = chrome_page(&config);
    let handle = TaoWindow::new(Rc::downgrade(&window), minimum);
    let mut app = App::new(config, handle, WindowKind::Main);
    app.startup(cli.file.as_deref(), cli.tool.as_deref());
    let app: SharedApp = Rc::new(Mutex::new(app));

    let ipc_app = app.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("shell".into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(Cow::Owned(page.clone().into_bytes()))
                .unwrap_or_else(|_| wry::http::Response::new(Cow::Borrowed(&[][..])))
        })
        .with_url("shell://localhost/")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            if let Some(event) = dispatch_ipc(&ipc_app, msg.body()) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("window has no GTK container")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(window.as_ref())?;

    let mut window = Some(window);
    let mut last_maximized = window.as_ref().is_some_and(|w| w.is_maximized());

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            }
            | Event::UserEvent(UserEvent::Quit) => {
                // Dropping the last strong reference destroys the window;
                // the controller's handle reports it as gone from here on.
                window = None;
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                let maximized = window.as_ref().is_some_and(|w| w.is_maximized());
                if let Ok(mut a) = app.lock() {
                    if maximized != last_maximized {
                        a.chrome.handle_event(ChromeEvent::WindowStateChanged { maximized });
                        last_maximized = maximized;
                    }
                    a.relayout_strip();
                }
                let _ = webview.evaluate_script("window.__shell&&window.__shell.refresh()");
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                let _ = webview.evaluate_script(&js);
            }

            _ => {}
        }
    });
}
