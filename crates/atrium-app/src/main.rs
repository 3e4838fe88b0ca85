//! ATRIUM DESK headless demo.
//!
//! Boots the desktop environment against a directory-backed store and a
//! recording surface, then runs a short scripted session: seed apps, create
//! one from a prompt, wait out content generation, exercise the window
//! manager, and arrange the icons. State survives across runs in the store
//! directory, so a second invocation reopens where the first left off.

use std::path::Path;

use anyhow::Result;

use atrium_core::platform::{SystemClock, entropy_seed};
use atrium_core::store::DirStore;
use atrium_core::types::app::AppId;
use atrium_core::types::geometry::{Point, Size};
use atrium_core::types::input::PointerEvent;
use atrium_core::{DeskConfig, DesktopEnvironment, HeadlessSurface};
use atrium_gen::KeywordGenerator;
use atrium_shell::AppForm;
use atrium_wm::{ResizeEdge, ResizeSession};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config from desk.toml beside the binary, or defaults.
    let config = DeskConfig::load(Path::new("desk.toml"))?;
    log::info!(
        "Starting {} ({}x{})",
        config.window_title,
        config.canvas_width,
        config.canvas_height,
    );

    let store = DirStore::open(&config.store_dir)?;
    let canvas = Size::new(config.canvas_width, config.canvas_height);
    let surface = HeadlessSurface::new(canvas, canvas);

    let mut env = DesktopEnvironment::new(
        Box::new(store),
        surface,
        SystemClock::new(),
        Box::new(KeywordGenerator::new()),
        config.generation_delay_ticks,
        entropy_seed(),
    );
    env.init();

    log::info!("clock: {} / {}", env.clock_text(), env.date_text());
    for app in env.apps() {
        log::info!("  app {} {:?} at {:?}", app.id, app.name, app.position);
    }

    // Create an app from a prompt and let generation finish.
    let id = env.add_app(AppForm {
        name: "Notlar".to_string(),
        icon: "\u{1F4DD}".to_string(),
        prompt: "hızlı notlar için bir not defteri".to_string(),
    })?;
    while env.generation_in_flight() > 0 {
        env.tick();
    }
    log::info!(
        "generated {} bytes of content for {id}",
        env.app(&id).map(|a| a.content.len()).unwrap_or(0),
    );

    // Window manager tour: open two windows, maximize round-trip, resize,
    // drag, close.
    env.open_app(&id);
    env.open_app(&AppId::from("calculator"));
    env.toggle_maximize(&id);
    env.toggle_maximize(&id);
    let start = env
        .wm
        .window(&id)
        .map(|w| (w.geometry.position, w.geometry.size));
    if let Some((origin, size)) = start {
        let session = ResizeSession::begin(id.clone(), ResizeEdge::SouthEast, origin, size);
        let (position, size) = session.update(80, 40);
        env.wm.apply_geometry(&id, position, size);
        env.end_window_interaction(&id);
    }
    env.drag_window_to(&id, Point::new(200, 140));
    env.end_window_interaction(&id);
    env.close_app(&id);
    log::info!(
        "{} window(s) open, active: {:?}",
        env.wm.window_count(),
        env.wm.active(),
    );

    // Drag the new icon somewhere via raw pointer events, then tidy up.
    if let Some(origin) = env.app(&id).map(|a| a.position) {
        env.handle_pointer(PointerEvent::Down {
            x: origin.x + 10,
            y: origin.y + 10,
        });
        env.handle_pointer(PointerEvent::Move { x: 420, y: 230 });
        if let Some(dropped) = env.handle_pointer(PointerEvent::Up { x: 420, y: 230 }) {
            log::info!("dragged {id} to {dropped:?}");
        }
    }
    env.arrange_icons();

    println!(
        "{}: {} apps on the desktop",
        config.window_title,
        env.apps().len()
    );
    for app in env.apps() {
        println!(
            "  {:>16}  {:<24} {:?}",
            app.id.as_str(),
            app.name,
            app.position
        );
    }
    println!("surface recorded {} operations", env.surface().ops.len());

    Ok(())
}
