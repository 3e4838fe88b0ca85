//! The desktop environment aggregate.
//!
//! Owns the app list and wires every manager to one key-value store and one
//! rendering surface. Hosts drive it with pointer events and ticks; all
//! state changes flow through here so persistence stays consistent.

use atrium_desktop::{DragSession, PlacementConfig, PlacementEngine};
use atrium_gen::{ContentGenerator, GenerationQueue, templates};
use atrium_platform::Clock;
use atrium_shell::{
    AppForm, ContextMenuManager, LanguageManager, MenuAction, Modal, ModalManager, SearchManager,
    SettingsManager,
};
use atrium_store::{KvStore, keys, load_json, save_json};
use atrium_types::app::{App, AppId};
use atrium_types::error::Result;
use atrium_types::geometry::{Point, Rect};
use atrium_types::input::PointerEvent;
use atrium_types::surface::Surface;
use atrium_wm::WindowManager;

/// Default simulated generation latency, in host ticks.
pub const GENERATION_DELAY_TICKS: u64 = 2;

/// The single environment instance: app list, managers, store, surface.
pub struct DesktopEnvironment<S: Surface, C: Clock> {
    apps: Vec<App>,
    store: Box<dyn KvStore>,
    surface: S,
    clock: C,
    placement: PlacementEngine,
    pub wm: WindowManager,
    pub settings: SettingsManager,
    pub language: LanguageManager,
    pub search: SearchManager,
    pub modals: ModalManager,
    pub context_menu: ContextMenuManager,
    generation: GenerationQueue,
    drag: Option<DragSession>,
    ticks: u64,
}

impl<S: Surface, C: Clock> DesktopEnvironment<S, C> {
    pub fn new(
        store: Box<dyn KvStore>,
        surface: S,
        clock: C,
        generator: Box<dyn ContentGenerator>,
        generation_delay_ticks: u64,
        placement_seed: u64,
    ) -> Self {
        let settings = SettingsManager::load(store.as_ref());
        let language = LanguageManager::load(store.as_ref());
        let search = SearchManager::load(store.as_ref());
        let wm = WindowManager::load(store.as_ref());
        Self {
            apps: Vec::new(),
            store,
            surface,
            clock,
            placement: PlacementEngine::new(PlacementConfig::default(), placement_seed),
            wm,
            settings,
            language,
            search,
            modals: ModalManager::new(),
            context_menu: ContextMenuManager::new(),
            generation: GenerationQueue::new(generator, generation_delay_ticks),
            drag: None,
            ticks: 0,
        }
    }

    /// Load the persisted app list (malformed or absent data seeds the
    /// default apps) and create the icon nodes.
    pub fn init(&mut self) {
        match load_json::<Vec<App>>(self.store.as_ref(), keys::APPS) {
            Ok(Some(apps)) if !apps.is_empty() => self.apps = apps,
            Ok(_) => self.create_default_apps(),
            Err(err) => {
                log::warn!("app list load failed: {err}");
                self.create_default_apps();
            },
        }
        for app in &self.apps {
            if let Err(err) = self.surface.create_icon_node(app) {
                log::warn!("icon node for {} failed: {err}", app.id);
            }
        }
        log::info!("desktop environment initialized with {} apps", self.apps.len());
    }

    fn create_default_apps(&mut self) {
        self.apps = vec![
            App {
                id: AppId::from("welcome"),
                name: self.language.get("welcome").to_string(),
                icon: "\u{1F44B}".to_string(),
                prompt: String::new(),
                content: templates::welcome_app(),
                position: Point::new(50, 50),
            },
            App {
                id: AppId::from("calculator"),
                name: self.language.get("calculator").to_string(),
                icon: "\u{1F9EE}".to_string(),
                prompt: String::new(),
                content: templates::calculator_app(),
                position: Point::new(50, 180),
            },
        ];
        self.save_apps();
    }

    // -- Accessors ----------------------------------------------------------

    pub fn apps(&self) -> &[App] {
        &self.apps
    }

    pub fn app(&self, id: &AppId) -> Option<&App> {
        self.apps.iter().find(|a| &a.id == id)
    }

    pub fn placement(&self) -> &PlacementEngine {
        &self.placement
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // -- App lifecycle ------------------------------------------------------

    /// Create an app from the add form: validated, placed on the canvas,
    /// persisted, and queued for content generation.
    pub fn add_app(&mut self, form: AppForm) -> Result<AppId> {
        form.validate()?;
        let id = self.next_app_id()?;
        let occupied: Vec<Point> = self.apps.iter().map(|a| a.position).collect();
        let canvas = self.surface.canvas_bounds();
        let position = self.placement.find_available_position(&occupied, canvas);

        let name = form.name.trim().to_string();
        let prompt = form.prompt.trim().to_string();
        let app = App {
            id: id.clone(),
            name: name.clone(),
            icon: form.icon,
            prompt: prompt.clone(),
            content: String::new(),
            position,
        };
        if let Err(err) = self.surface.create_icon_node(&app) {
            log::warn!("icon node for {id} failed: {err}");
        }
        self.apps.push(app);
        self.save_apps();
        self.generation.submit(id.clone(), &name, &prompt, self.ticks);
        log::info!("added app {name:?} as {id} at {position:?}");
        Ok(id)
    }

    /// Submit the add-app modal: create the app and dismiss the dialog.
    pub fn submit_add_form(&mut self, form: AppForm) -> Result<AppId> {
        let id = self.add_app(form)?;
        self.modals.close();
        Ok(id)
    }

    /// Edit an existing app and regenerate its content. Returns false for
    /// an unknown id.
    pub fn update_app(&mut self, id: &AppId, form: AppForm) -> Result<bool> {
        form.validate()?;
        let Some(app) = self.apps.iter_mut().find(|a| &a.id == id) else {
            return Ok(false);
        };
        app.name = form.name.trim().to_string();
        app.icon = form.icon;
        app.prompt = form.prompt.trim().to_string();
        let name = app.name.clone();
        let prompt = app.prompt.clone();

        if let Err(err) = self.surface.set_icon_label(id, &name) {
            log::warn!("icon label for {id} failed: {err}");
        }
        self.save_apps();
        self.generation.submit(id.clone(), &name, &prompt, self.ticks);
        Ok(true)
    }

    /// Delete an app: icon node, open window, in-flight generation, and
    /// search suggestion all go with it.
    pub fn delete_app(&mut self, id: &AppId) -> bool {
        let Some(idx) = self.apps.iter().position(|a| &a.id == id) else {
            return false;
        };
        let removed = self.apps.remove(idx);
        self.save_apps();
        if let Err(err) = self.surface.remove_icon_node(id) {
            log::warn!("icon removal for {id} failed: {err}");
        }
        self.wm.close_window(id, self.store.as_mut());
        self.generation.cancel(id);
        self.search.remove_suggestion(&removed.name);
        log::info!("deleted app {id}");
        true
    }

    /// Open (or re-focus) the window for an app, remember it as the last
    /// opened, and record its name for search suggestions.
    pub fn open_app(&mut self, id: &AppId) -> bool {
        let Some(app) = self.apps.iter().find(|a| &a.id == id) else {
            return false;
        };
        let name = app.name.clone();
        let content = app.content.clone();

        self.wm.open_window(id, self.store.as_mut());
        self.search.add_suggestion(&name);
        if let Err(err) = self.store.set(keys::LAST_OPENED, id.as_str()) {
            log::warn!("last-opened persist failed: {err}");
        }
        if let Err(err) = self.surface.refresh_window(id, &content) {
            log::warn!("window refresh for {id} failed: {err}");
        }
        true
    }

    /// Close an app's window, persisting its final geometry.
    pub fn close_app(&mut self, id: &AppId) -> bool {
        self.wm.close_window(id, self.store.as_mut())
    }

    pub fn toggle_minimize(&mut self, id: &AppId) -> bool {
        self.wm.toggle_minimize(id, self.store.as_mut())
    }

    pub fn toggle_maximize(&mut self, id: &AppId) -> bool {
        let viewport = self.surface.viewport_bounds();
        self.wm.toggle_maximize(id, viewport, self.store.as_mut())
    }

    /// Move a window during drag, clamped to the viewport. Persisted only
    /// by [`end_window_interaction`](Self::end_window_interaction).
    pub fn drag_window_to(&mut self, id: &AppId, target: Point) -> Option<Point> {
        let viewport = self.surface.viewport_bounds();
        self.wm.drag_to(id, target, viewport)
    }

    /// Pointer released after a window drag or resize: persist geometry.
    pub fn end_window_interaction(&mut self, id: &AppId) {
        self.wm.end_interaction(id, self.store.as_mut());
    }

    /// Id of the most recently opened app, if the store has one.
    pub fn last_opened_app(&self) -> Option<AppId> {
        match self.store.get(keys::LAST_OPENED) {
            Ok(Some(id)) => Some(AppId::new(id)),
            Ok(None) => None,
            Err(err) => {
                log::warn!("last-opened load failed: {err}");
                None
            },
        }
    }

    /// Case-insensitive name search over the app list.
    pub fn search_apps(&self, query: &str) -> Vec<&App> {
        self.search.search(&self.apps, query)
    }

    /// Run a search from the header field: record the query and return hits.
    pub fn handle_search(&mut self, query: &str) -> Vec<AppId> {
        let hits: Vec<AppId> = self
            .search
            .search(&self.apps, query)
            .into_iter()
            .map(|a| a.id.clone())
            .collect();
        self.search.record_query(query, self.store.as_mut());
        hits
    }

    // -- Icon drag ----------------------------------------------------------

    /// Pointer pressed over an icon. Returns false for an unknown id or if
    /// a drag is already in progress.
    pub fn begin_icon_drag(&mut self, id: &AppId, pointer: Point) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let Some(app) = self.apps.iter().find(|a| &a.id == id) else {
            return false;
        };
        self.drag = Some(DragSession::begin(id.clone(), pointer, app.position));
        true
    }

    /// Pointer moved during a (potential) drag. Returns the icon's new
    /// position once the drag is active.
    pub fn pointer_moved(&mut self, pointer: Point) -> Option<Point> {
        let icon_id = self.drag.as_ref()?.icon_id().clone();
        let others: Vec<Point> = self
            .apps
            .iter()
            .filter(|a| a.id != icon_id)
            .map(|a| a.position)
            .collect();
        let canvas = self.surface.canvas_bounds();

        let drag = self.drag.as_mut()?;
        let moved = drag.update(&self.placement, pointer, &others, canvas)?;
        if let Err(err) = self.surface.move_icon_node(&icon_id, moved) {
            log::warn!("icon move for {icon_id} failed: {err}");
        }
        Some(moved)
    }

    /// Pointer released: commit the final position if a drag happened.
    /// Returns `None` for a plain click (the caller decides whether that
    /// opens the app).
    pub fn pointer_released(&mut self) -> Option<Point> {
        let drag = self.drag.take()?;
        let icon_id = drag.icon_id().clone();
        let final_position = drag.finish()?;

        if let Some(app) = self.apps.iter_mut().find(|a| a.id == icon_id) {
            app.position = final_position;
        }
        self.save_apps();
        Some(final_position)
    }

    /// Host lost the pointer: drop any drag without committing.
    pub fn pointer_cancelled(&mut self) {
        self.drag = None;
    }

    /// App whose icon covers a canvas point; the later entry wins when
    /// icons overlap, matching paint order.
    pub fn icon_at(&self, p: Point) -> Option<AppId> {
        let size = self.placement.config().icon_size as u32;
        self.apps
            .iter()
            .rev()
            .find(|app| Rect::new(app.position.x, app.position.y, size, size).contains(p))
            .map(|a| a.id.clone())
    }

    /// Dispatch a raw pointer event: press arms a drag on the icon under
    /// the pointer, movement drags it, release either commits the drag or
    /// opens the app (a sub-threshold press-release is a click).
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<Point> {
        match event {
            PointerEvent::Down { x, y } => {
                let p = Point::new(x, y);
                if let Some(id) = self.icon_at(p) {
                    self.begin_icon_drag(&id, p);
                }
                None
            },
            PointerEvent::Move { x, y } => self.pointer_moved(Point::new(x, y)),
            PointerEvent::Up { .. } => {
                let pressed = self.drag.as_ref().map(|d| d.icon_id().clone());
                let committed = self.pointer_released();
                if committed.is_none() {
                    if let Some(id) = pressed {
                        self.open_app(&id);
                    }
                }
                committed
            },
            PointerEvent::Cancel => {
                self.pointer_cancelled();
                None
            },
        }
    }

    /// Row-pack every icon and persist the new layout.
    pub fn arrange_icons(&mut self) {
        let canvas = self.surface.canvas_bounds();
        let positions = self.placement.arrange_icons(self.apps.len(), canvas);
        for (app, position) in self.apps.iter_mut().zip(&positions) {
            app.position = *position;
        }
        for app in &self.apps {
            if let Err(err) = self.surface.move_icon_node(&app.id, app.position) {
                log::warn!("icon move for {} failed: {err}", app.id);
            }
        }
        self.save_apps();
    }

    // -- Context menu -------------------------------------------------------

    /// Activate a context-menu entry against its current target.
    pub fn activate_menu(&mut self, action: MenuAction) -> bool {
        let Some((action, id)) = self.context_menu.select(action) else {
            return false;
        };
        match action {
            MenuAction::Open => self.open_app(&id),
            MenuAction::Edit => {
                self.modals.open(Modal::EditApp(id));
                true
            },
            MenuAction::Delete => self.delete_app(&id),
        }
    }

    // -- Generation ---------------------------------------------------------

    /// Advance one host tick and apply any finished generations. Stale
    /// completions were already discarded by the queue.
    pub fn tick(&mut self) {
        self.ticks += 1;
        let completions = self.generation.poll(self.ticks);
        if completions.is_empty() {
            return;
        }
        for done in completions {
            let Some(app) = self.apps.iter_mut().find(|a| a.id == done.app_id) else {
                continue;
            };
            app.content = done.content;
            let id = app.id.clone();
            let content = app.content.clone();
            if self.wm.window(&id).is_some() {
                if let Err(err) = self.surface.refresh_window(&id, &content) {
                    log::warn!("window refresh for {id} failed: {err}");
                }
            }
        }
        self.save_apps();
    }

    /// Generation requests still in flight.
    pub fn generation_in_flight(&self) -> usize {
        self.generation.in_flight()
    }

    // -- Header -------------------------------------------------------------

    /// Localized header clock text.
    pub fn clock_text(&self) -> String {
        match self.clock.now() {
            Ok(now) => self
                .language
                .format_time(&now, self.settings.settings().clock_24h),
            Err(err) => {
                log::warn!("clock read failed: {err}");
                "--:--".to_string()
            },
        }
    }

    /// Localized long date text.
    pub fn date_text(&self) -> String {
        match self.clock.now() {
            Ok(now) => self.language.format_date(&now),
            Err(err) => {
                log::warn!("clock read failed: {err}");
                String::new()
            },
        }
    }

    /// Change the UI language and persist the preference (also mirrored
    /// into the settings record, which the settings form owns).
    pub fn set_language(&mut self, lang: &str) {
        self.language.set_language(lang, self.store.as_mut());
        let lang = self.language.current().to_string();
        self.settings
            .edit(self.store.as_mut(), |s| s.language = lang);
    }

    // -- Persistence --------------------------------------------------------

    fn save_apps(&mut self) {
        if let Err(err) = save_json(self.store.as_mut(), keys::APPS, &self.apps) {
            log::warn!("app list persist failed: {err}");
        }
    }

    fn next_app_id(&self) -> Result<AppId> {
        let mut millis = self.clock.epoch_millis()?;
        loop {
            let candidate = millis.to_string();
            if !self.apps.iter().any(|a| a.id.as_str() == candidate) {
                return Ok(AppId::new(candidate));
            }
            millis += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessSurface, SurfaceOp};
    use atrium_gen::KeywordGenerator;
    use atrium_platform::{FixedClock, WallTime};
    use atrium_store::MemoryStore;
    use atrium_types::geometry::Size;

    fn fixed_time() -> WallTime {
        WallTime {
            year: 2026,
            month: 2,
            day: 13,
            hour: 14,
            minute: 30,
            second: 0,
        }
    }

    fn env() -> DesktopEnvironment<HeadlessSurface, FixedClock> {
        env_with_store(Box::new(MemoryStore::new()))
    }

    fn env_with_store(
        store: Box<dyn KvStore>,
    ) -> DesktopEnvironment<HeadlessSurface, FixedClock> {
        let surface = HeadlessSurface::new(Size::new(1280, 720), Size::new(1280, 720));
        let clock = FixedClock::new(fixed_time(), 1_712_000_000_000);
        let mut env = DesktopEnvironment::new(
            store,
            surface,
            clock,
            Box::new(KeywordGenerator::new()),
            GENERATION_DELAY_TICKS,
            0x5eed,
        );
        env.init();
        env
    }

    fn form(name: &str, prompt: &str) -> AppForm {
        AppForm {
            name: name.to_string(),
            icon: "*".to_string(),
            prompt: prompt.to_string(),
        }
    }

    #[test]
    fn empty_store_seeds_default_apps() {
        let env = env();
        assert_eq!(env.apps().len(), 2);
        assert_eq!(env.apps()[0].id, AppId::from("welcome"));
        assert_eq!(env.apps()[1].id, AppId::from("calculator"));
        // Default language is Turkish.
        assert_eq!(env.apps()[0].name, "Hoş Geldiniz");
        assert_eq!(env.surface().icon_count(), 2);
    }

    #[test]
    fn malformed_app_list_seeds_defaults() {
        let mut store = MemoryStore::new();
        store.set(keys::APPS, "[[[").unwrap();
        let env = env_with_store(Box::new(store));
        assert_eq!(env.apps().len(), 2);
    }

    #[test]
    fn add_app_places_persists_and_queues_generation() {
        let mut env = env();
        let id = env.add_app(form("Notes", "a notepad for notes")).unwrap();

        let app = env.app(&id).unwrap();
        // The default apps at (50,50) and (50,180) shadow the first grid
        // column, so the scan lands on the second cell of row one.
        assert_eq!(app.position, Point::new(140, 20));
        assert!(app.content.is_empty());
        assert_eq!(env.generation_in_flight(), 1);

        env.tick();
        assert!(env.app(&id).unwrap().content.is_empty());
        env.tick();
        let content = &env.app(&id).unwrap().content;
        assert!(content.contains("Notepad"));
        assert_eq!(env.generation_in_flight(), 0);
    }

    #[test]
    fn add_app_rejects_incomplete_form() {
        let mut env = env();
        assert!(env.add_app(form("", "prompt")).is_err());
        assert!(env.add_app(form("name", "")).is_err());
        assert_eq!(env.apps().len(), 2);
    }

    #[test]
    fn app_ids_are_unique_under_rapid_creation() {
        let mut env = env();
        let a = env.add_app(form("A", "first app")).unwrap();
        let b = env.add_app(form("B", "second app")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn stale_generation_is_discarded_after_edit() {
        let mut env = env();
        let id = env.add_app(form("Tool", "notepad")).unwrap();
        // Edit before the first generation completes.
        env.tick();
        env.update_app(&id, form("Tool", "calculator")).unwrap();
        // First request's deadline passes; its completion must be dropped.
        env.tick();
        env.tick();
        env.tick();
        let content = &env.app(&id).unwrap().content;
        assert!(content.contains("Calculator"));
        assert!(!content.contains("Notepad"));
    }

    #[test]
    fn update_unknown_app_is_false() {
        let mut env = env();
        assert!(!env.update_app(&"ghost".into(), form("X", "y")).unwrap());
    }

    #[test]
    fn delete_app_removes_icon_window_and_generation() {
        let mut env = env();
        let id = env.add_app(form("Temp", "a timer")).unwrap();
        env.open_app(&id);
        assert!(env.wm.window(&id).is_some());

        assert!(env.delete_app(&id));
        assert!(env.app(&id).is_none());
        assert!(env.wm.window(&id).is_none());
        assert_eq!(env.generation_in_flight(), 0);
        assert!(env.surface().ops.contains(&SurfaceOp::RemoveIcon(id)));
    }

    #[test]
    fn open_app_records_last_opened_and_suggestion() {
        let mut env = env();
        env.open_app(&"calculator".into());
        assert_eq!(env.last_opened_app(), Some(AppId::from("calculator")));
        assert_eq!(env.wm.active(), Some(&"calculator".into()));
        // Opening an unknown id changes nothing.
        assert!(!env.open_app(&"ghost".into()));
    }

    #[test]
    fn open_twice_keeps_single_window() {
        let mut env = env();
        env.open_app(&"welcome".into());
        env.open_app(&"welcome".into());
        assert_eq!(env.wm.window_count(), 1);
    }

    #[test]
    fn completed_generation_refreshes_open_window() {
        let mut env = env();
        let id = env.add_app(form("Board", "a chart")).unwrap();
        env.open_app(&id);
        let refreshes_before = env
            .surface()
            .ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::RefreshWindow(_)))
            .count();

        env.tick();
        env.tick();
        let refreshes_after = env
            .surface()
            .ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::RefreshWindow(_)))
            .count();
        assert_eq!(refreshes_after, refreshes_before + 1);
    }

    #[test]
    fn drag_commits_only_on_release() {
        let mut env = env();
        let id = AppId::from("welcome");
        assert!(env.begin_icon_drag(&id, Point::new(60, 60)));
        env.pointer_moved(Point::new(400, 300));
        // In-memory app position is untouched mid-drag.
        assert_eq!(env.app(&id).unwrap().position, Point::new(50, 50));

        let final_pos = env.pointer_released().unwrap();
        assert_eq!(env.app(&id).unwrap().position, final_pos);
    }

    #[test]
    fn click_without_motion_commits_nothing() {
        let mut env = env();
        let id = AppId::from("welcome");
        env.begin_icon_drag(&id, Point::new(60, 60));
        env.pointer_moved(Point::new(62, 61));
        assert_eq!(env.pointer_released(), None);
        assert_eq!(env.app(&id).unwrap().position, Point::new(50, 50));
    }

    #[test]
    fn pointer_events_click_opens_app() {
        let mut env = env();
        // Press and release inside the welcome icon without moving.
        env.handle_pointer(PointerEvent::Down { x: 60, y: 60 });
        env.handle_pointer(PointerEvent::Up { x: 60, y: 60 });
        assert_eq!(env.wm.active(), Some(&"welcome".into()));
        assert_eq!(env.app(&"welcome".into()).unwrap().position, Point::new(50, 50));
    }

    #[test]
    fn pointer_events_drag_moves_icon() {
        let mut env = env();
        env.handle_pointer(PointerEvent::Down { x: 60, y: 60 });
        env.handle_pointer(PointerEvent::Move { x: 500, y: 400 });
        let dropped = env.handle_pointer(PointerEvent::Up { x: 500, y: 400 });
        let dropped = dropped.expect("drag should commit");
        assert_eq!(env.app(&"welcome".into()).unwrap().position, dropped);
        // A real drag never opens the window.
        assert_eq!(env.wm.window_count(), 0);
    }

    #[test]
    fn pointer_down_outside_icons_is_inert() {
        let mut env = env();
        env.handle_pointer(PointerEvent::Down { x: 900, y: 600 });
        assert!(env.handle_pointer(PointerEvent::Move { x: 910, y: 610 }).is_none());
        env.handle_pointer(PointerEvent::Up { x: 910, y: 610 });
        assert_eq!(env.wm.window_count(), 0);
    }

    #[test]
    fn pointer_cancel_releases_drag_without_commit() {
        let mut env = env();
        env.handle_pointer(PointerEvent::Down { x: 60, y: 60 });
        env.handle_pointer(PointerEvent::Move { x: 400, y: 300 });
        env.handle_pointer(PointerEvent::Cancel);
        assert_eq!(env.app(&"welcome".into()).unwrap().position, Point::new(50, 50));
        // Cancel also means no click-open.
        assert_eq!(env.wm.window_count(), 0);
    }

    #[test]
    fn icon_hit_testing_finds_icons_under_point() {
        let mut env = env();
        assert_eq!(env.icon_at(Point::new(60, 60)), Some(AppId::from("welcome")));
        assert_eq!(env.icon_at(Point::new(60, 190)), Some(AppId::from("calculator")));
        assert_eq!(env.icon_at(Point::new(1000, 700)), None);
    }

    #[test]
    fn only_one_drag_at_a_time() {
        let mut env = env();
        assert!(env.begin_icon_drag(&"welcome".into(), Point::new(60, 60)));
        assert!(!env.begin_icon_drag(&"calculator".into(), Point::new(60, 190)));
        env.pointer_cancelled();
        assert!(env.begin_icon_drag(&"calculator".into(), Point::new(60, 190)));
    }

    #[test]
    fn arrange_icons_packs_rows_and_moves_nodes() {
        let mut env = env();
        env.arrange_icons();
        assert_eq!(env.apps()[0].position, Point::new(20, 20));
        assert_eq!(env.apps()[1].position, Point::new(140, 20));
        assert_eq!(
            env.surface().last_move(&"calculator".into()),
            Some(Point::new(140, 20))
        );
    }

    #[test]
    fn apps_persist_across_environments() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let store = atrium_store::DirStore::open(tmp.path()).unwrap();
            let mut env = env_with_store(Box::new(store));
            env.add_app(form("Keeper", "notes to keep")).unwrap();
            env.arrange_icons();
        }
        // A fresh environment over the same directory sees the same apps.
        let store = atrium_store::DirStore::open(tmp.path()).unwrap();
        let env2 = env_with_store(Box::new(store));
        assert_eq!(env2.apps().len(), 3);
        assert!(env2.apps().iter().any(|a| a.name == "Keeper"));
        assert_eq!(env2.apps()[0].position, Point::new(20, 20));
    }

    #[test]
    fn search_and_history_flow() {
        let mut env = env();
        let hits = env.handle_search("hesap");
        assert_eq!(hits, vec![AppId::from("calculator")]);
        assert_eq!(env.search.history(), &["hesap".to_string()]);
    }

    #[test]
    fn context_menu_delete_flow() {
        let mut env = env();
        env.context_menu
            .show(Point::new(70, 70), "welcome".into());
        assert!(env.activate_menu(MenuAction::Delete));
        assert!(env.app(&"welcome".into()).is_none());
        assert!(!env.context_menu.is_visible());
    }

    #[test]
    fn context_menu_edit_opens_modal() {
        let mut env = env();
        env.context_menu
            .show(Point::new(70, 70), "welcome".into());
        env.activate_menu(MenuAction::Edit);
        assert_eq!(
            env.modals.active(),
            Some(&Modal::EditApp(AppId::from("welcome")))
        );
    }

    #[test]
    fn clock_text_honors_language_and_format() {
        let mut env = env();
        assert_eq!(env.clock_text(), "14:30");
        env.settings.edit(env.store.as_mut(), |s| s.clock_24h = false);
        assert_eq!(env.clock_text(), "2:30 PM");
    }

    #[test]
    fn set_language_updates_settings_record() {
        let mut env = env();
        env.set_language("en");
        assert_eq!(env.language.current(), "en");
        assert_eq!(env.settings.settings().language, "en");
        assert_eq!(env.date_text(), "Friday, February 13, 2026");
    }

    #[test]
    fn submit_add_form_closes_modal() {
        let mut env = env();
        env.modals.open(Modal::AddApp);
        env.submit_add_form(form("Quick", "a quick form")).unwrap();
        assert!(!env.modals.is_open());
    }
}
