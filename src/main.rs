//! Subtitle shell - a tabbed, frameless desktop shell for subtitle tools.
//!
//! Entry point: opens the frameless main window with its webview chrome.
//! When built without the `gui` feature, runs a console demo against an
//! in-memory window.

use clap::Parser;

use subtitle_shell::cli::Cli;

fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(feature = "gui")]
fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(err) = subtitle_shell::ui::shell_app::run(cli) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_logging();
    let cli = Cli::parse();
    demo::run(&cli);
}

#[cfg(not(feature = "gui"))]
mod demo {
    use subtitle_shell::app::App;
    use subtitle_shell::cli::Cli;
    use subtitle_shell::managers::tab_manager::TabManagerTrait;
    use subtitle_shell::platform::HeadlessWindow;
    use subtitle_shell::types::event::{ChromeEvent, MouseButton, PointerRegion};
    use subtitle_shell::types::geometry::{Point, Rect};
    use subtitle_shell::types::settings::{ShellConfig, WindowKind};

    const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

    fn section(name: &str) {
        println!("───────────────────────────────────────────────────────────────");
        println!("  {}", name);
        println!("───────────────────────────────────────────────────────────────");
    }

    fn print_tabs(app: &App<HeadlessWindow>) {
        for tab in app.tab_manager.summaries() {
            println!(
                "  {} {:<28} history {}/{}{}{}",
                if tab.active { "▶" } else { " " },
                tab.title,
                tab.cursor + 1,
                tab.history_len,
                if tab.can_go_back { "  ◀ back" } else { "" },
                if tab.can_go_forward { "  forward ▶" } else { "" },
            );
        }
    }

    fn print_chrome(app: &App<HeadlessWindow>) {
        let geometry = app.chrome.window_geometry().unwrap_or_default();
        println!(
            "  window {}x{} at ({}, {})  state={}  button={:?}",
            geometry.width,
            geometry.height,
            geometry.x,
            geometry.y,
            app.chrome.state().name(),
            app.chrome.affordance(),
        );
    }

    fn flush_notifications(app: &mut App<HeadlessWindow>) {
        for note in app.take_notifications() {
            eprintln!("[{:?}] {}: {}", note.severity, note.title, note.message);
        }
    }

    pub fn run(cli: &Cli) {
        println!();
        println!("Subtitle Shell v{} - demo mode (built without `gui`)", env!("CARGO_PKG_VERSION"));
        println!();

        let config = cli.load_config().unwrap_or_else(|err| {
            log::warn!("{}; using defaults", err);
            ShellConfig::default()
        });
        let window = HeadlessWindow::new(config.window.initial_geometry(), config.window.minimum_size(), SCREEN);
        let mut app = App::new(config, window.clone(), WindowKind::Main);

        section("Startup");
        app.startup(cli.file.as_deref(), cli.tool.as_deref());
        flush_notifications(&mut app);
        print_tabs(&app);

        section("Navigation");
        let tool_ids: Vec<String> = app
            .tab_manager
            .registry()
            .summaries()
            .into_iter()
            .map(|tool| tool.id)
            .collect();
        app.tab_manager.open_new_tab();
        for id in tool_ids.iter().skip(1).take(2) {
            if let Err(err) = app.tab_manager.open_tool(id) {
                app.notify(&err);
            }
        }
        app.tab_manager.go_back();
        print_tabs(&app);

        section("Window chrome");
        print_chrome(&app);
        let origin = window.snapshot().origin();
        let grab = origin + Point::new(200, 10);
        app.chrome.handle_event(ChromeEvent::PointerPressed {
            button: MouseButton::Primary,
            global: grab,
            region: PointerRegion::Draggable,
        });
        app.chrome.handle_event(ChromeEvent::PointerMoved { global: grab + Point::new(150, 80) });
        app.chrome.handle_event(ChromeEvent::PointerReleased {
            button: MouseButton::Primary,
            global: grab + Point::new(150, 80),
        });
        println!("  after drag:");
        print_chrome(&app);

        let corner = window.snapshot();
        let corner = Point::new(corner.right() - 1, corner.bottom() - 1);
        app.chrome.handle_event(ChromeEvent::PointerPressed {
            button: MouseButton::Primary,
            global: corner,
            region: PointerRegion::Content,
        });
        app.chrome.handle_event(ChromeEvent::PointerMoved { global: corner - Point::new(2000, 2000) });
        app.chrome.handle_event(ChromeEvent::PointerReleased {
            button: MouseButton::Primary,
            global: corner,
        });
        println!("  after shrinking past the minimum:");
        print_chrome(&app);

        app.chrome.toggle_maximize();
        println!("  after maximize:");
        print_chrome(&app);

        flush_notifications(&mut app);
        app.shutdown();
        println!();
    }
}
