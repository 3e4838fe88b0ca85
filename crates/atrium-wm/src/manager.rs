//! Open-window tracking and geometry persistence.

use std::collections::BTreeMap;

use atrium_store::{KvStore, keys, load_json, save_json};
use atrium_types::app::{AppId, WindowGeometry};
use atrium_types::geometry::{Point, Size, clamp};

use crate::resize::MIN_WINDOW_SIZE;

/// Pixels reserved for the header bar; maximized windows start below it.
pub const HEADER_OFFSET: i32 = 60;

/// Z-order counter start value.
const Z_BASE: u64 = 1600;

/// Cascade origin and per-window offset for windows with no saved geometry.
const CASCADE_BASE: i32 = 100;
const CASCADE_STEP: i32 = 30;

const DEFAULT_SIZE: Size = Size::new(600, 400);

/// One open window.
#[derive(Debug, Clone)]
pub struct ManagedWindow {
    pub app_id: AppId,
    pub geometry: WindowGeometry,
    /// Z-order; higher is closer to the viewer.
    pub z: u64,
    /// Pre-maximize geometry, present only while maximized.
    restore: Option<(Point, Size)>,
}

/// Tracks open windows and the persisted geometry map.
///
/// The window list is kept in open order, so "most recently opened" is
/// always the last element. Focus never searches or sorts: the focused
/// window simply takes the next counter value.
#[derive(Debug)]
pub struct WindowManager {
    windows: Vec<ManagedWindow>,
    active: Option<AppId>,
    z_counter: u64,
    /// Persisted geometry per app id, survives close/reopen.
    states: BTreeMap<String, WindowGeometry>,
}

impl WindowManager {
    /// Start with no saved geometry.
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            z_counter: Z_BASE,
            states: BTreeMap::new(),
        }
    }

    /// Load the persisted geometry map; malformed or absent data starts
    /// empty.
    pub fn load(store: &dyn KvStore) -> Self {
        let mut wm = Self::new();
        match load_json::<BTreeMap<String, WindowGeometry>>(store, keys::WINDOW_STATES) {
            Ok(Some(states)) => wm.states = states,
            Ok(None) => {},
            Err(err) => log::warn!("window state load failed: {err}"),
        }
        wm
    }

    // -- Accessors ----------------------------------------------------------

    pub fn window(&self, app_id: &AppId) -> Option<&ManagedWindow> {
        self.windows.iter().find(|w| &w.app_id == app_id)
    }

    fn window_mut(&mut self, app_id: &AppId) -> Option<&mut ManagedWindow> {
        self.windows.iter_mut().find(|w| &w.app_id == app_id)
    }

    pub fn active(&self) -> Option<&AppId> {
        self.active.as_ref()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Visible (non-minimized) windows in open order.
    pub fn open_windows(&self) -> impl Iterator<Item = &ManagedWindow> {
        self.windows.iter().filter(|w| !w.geometry.minimized)
    }

    pub fn minimized_windows(&self) -> impl Iterator<Item = &ManagedWindow> {
        self.windows.iter().filter(|w| w.geometry.minimized)
    }

    // -- Open / close / focus ----------------------------------------------

    /// Open a window for an app, or bring the existing one to front.
    ///
    /// At most one window exists per app id. New windows take the persisted
    /// geometry when present (floored to the minimum size), else the next
    /// cascade slot. A freshly opened window is always visible and
    /// unmaximized, whatever state it closed in.
    pub fn open_window(&mut self, app_id: &AppId, store: &mut dyn KvStore) -> &ManagedWindow {
        if let Some(idx) = self.windows.iter().position(|w| &w.app_id == app_id) {
            self.focus_window(app_id);
            return &self.windows[idx];
        }

        let mut geometry = match self.states.get(app_id.as_str()) {
            Some(saved) => WindowGeometry::new(saved.position, saved.size),
            None => {
                let offset = CASCADE_BASE + self.windows.len() as i32 * CASCADE_STEP;
                WindowGeometry::new(Point::new(offset, offset), DEFAULT_SIZE)
            },
        };
        geometry.size.width = geometry.size.width.max(MIN_WINDOW_SIZE);
        geometry.size.height = geometry.size.height.max(MIN_WINDOW_SIZE);

        log::info!("opening window for {app_id}");
        self.z_counter += 1;
        self.windows.push(ManagedWindow {
            app_id: app_id.clone(),
            geometry,
            z: self.z_counter,
            restore: None,
        });
        self.active = Some(app_id.clone());
        self.persist(app_id, store);
        let idx = self.windows.len() - 1;
        &self.windows[idx]
    }

    /// Close a window: persist final geometry, drop the record, and focus
    /// the most recently opened remaining window. Returns false when no
    /// window was open for the id.
    pub fn close_window(&mut self, app_id: &AppId, store: &mut dyn KvStore) -> bool {
        let Some(idx) = self.windows.iter().position(|w| &w.app_id == app_id) else {
            return false;
        };
        self.persist(app_id, store);
        self.windows.remove(idx);
        log::info!("closed window for {app_id}");

        let next = match self.windows.last() {
            Some(last) if !last.geometry.minimized => Some(last.app_id.clone()),
            _ => None,
        };
        match next {
            Some(id) => {
                self.focus_window(&id);
            },
            None => self.active = None,
        }
        true
    }

    /// Raise a window to the top of the z-order and mark it active.
    pub fn focus_window(&mut self, app_id: &AppId) -> bool {
        let z = self.z_counter + 1;
        let Some(window) = self.window_mut(app_id) else {
            return false;
        };
        window.z = z;
        self.z_counter = z;
        self.active = Some(app_id.clone());
        true
    }

    /// Focus the next visible window after the active one (open order).
    pub fn cycle_focus(&mut self) {
        let visible: Vec<AppId> = self.open_windows().map(|w| w.app_id.clone()).collect();
        if visible.len() <= 1 {
            return;
        }
        let current = self
            .active
            .as_ref()
            .and_then(|id| visible.iter().position(|v| v == id))
            .unwrap_or(0);
        let next = visible[(current + 1) % visible.len()].clone();
        self.focus_window(&next);
    }

    // -- Minimize / maximize ------------------------------------------------

    /// Toggle visibility. Restoring also focuses the window.
    pub fn toggle_minimize(&mut self, app_id: &AppId, store: &mut dyn KvStore) -> bool {
        let Some(window) = self.window_mut(app_id) else {
            return false;
        };
        let restoring = window.geometry.minimized;
        window.geometry.minimized = !restoring;
        if restoring {
            self.focus_window(app_id);
        }
        self.persist(app_id, store);
        true
    }

    /// Maximize to the viewport below the header, or restore the exact
    /// pre-maximize geometry.
    pub fn toggle_maximize(
        &mut self,
        app_id: &AppId,
        viewport: Size,
        store: &mut dyn KvStore,
    ) -> bool {
        let Some(window) = self.window_mut(app_id) else {
            return false;
        };
        if window.geometry.maximized {
            if let Some((position, size)) = window.restore.take() {
                window.geometry.position = position;
                window.geometry.size = size;
            }
            window.geometry.maximized = false;
        } else {
            window.restore = Some((window.geometry.position, window.geometry.size));
            window.geometry.position = Point::new(0, HEADER_OFFSET);
            window.geometry.size = Size::new(
                viewport.width,
                viewport.height.saturating_sub(HEADER_OFFSET as u32),
            );
            window.geometry.maximized = true;
        }
        self.persist(app_id, store);
        true
    }

    // -- Drag / resize ------------------------------------------------------

    /// Move a window during drag, clamped to the viewport. Geometry is not
    /// persisted per move; call [`end_interaction`](Self::end_interaction)
    /// on pointer-up.
    pub fn drag_to(&mut self, app_id: &AppId, target: Point, viewport: Size) -> Option<Point> {
        let window = self.window_mut(app_id)?;
        let max_x = viewport.width as i32 - window.geometry.size.width as i32;
        let max_y = viewport.height as i32 - window.geometry.size.height as i32;
        let clamped = Point::new(clamp(target.x, 0, max_x), clamp(target.y, 0, max_y));
        window.geometry.position = clamped;
        Some(clamped)
    }

    /// Apply in-progress resize geometry. Not persisted per move.
    pub fn apply_geometry(&mut self, app_id: &AppId, position: Point, size: Size) -> bool {
        let Some(window) = self.window_mut(app_id) else {
            return false;
        };
        window.geometry.position = position;
        window.geometry.size = size;
        true
    }

    /// Pointer released after a drag or resize: persist the final geometry.
    pub fn end_interaction(&mut self, app_id: &AppId, store: &mut dyn KvStore) {
        self.persist(app_id, store);
    }

    // -- Bulk layout --------------------------------------------------------

    /// Restack every window along the cascade diagonal.
    pub fn cascade_windows(&mut self, store: &mut dyn KvStore) {
        let ids: Vec<AppId> = self.windows.iter().map(|w| w.app_id.clone()).collect();
        for (index, id) in ids.iter().enumerate() {
            let offset = CASCADE_BASE + index as i32 * CASCADE_STEP;
            if let Some(window) = self.window_mut(id) {
                window.geometry.position = Point::new(offset, offset);
            }
            self.persist(id, store);
        }
    }

    /// Tile all visible windows in a near-square grid below the header.
    pub fn tile_windows(&mut self, viewport: Size, store: &mut dyn KvStore) {
        let visible: Vec<AppId> = self.open_windows().map(|w| w.app_id.clone()).collect();
        if visible.is_empty() {
            return;
        }

        let cols = (visible.len() as f64).sqrt().ceil() as usize;
        let rows = visible.len().div_ceil(cols);
        let tile_w = viewport.width / cols as u32;
        let tile_h = viewport.height.saturating_sub(HEADER_OFFSET as u32) / rows as u32;

        for (index, id) in visible.iter().enumerate() {
            let col = index % cols;
            let row = index / cols;
            if let Some(window) = self.window_mut(id) {
                window.geometry.position = Point::new(
                    col as i32 * tile_w as i32,
                    HEADER_OFFSET + row as i32 * tile_h as i32,
                );
                window.geometry.size = Size::new(tile_w, tile_h);
                window.geometry.maximized = false;
                window.restore = None;
            }
            self.persist(id, store);
        }
    }

    // -- Persistence --------------------------------------------------------

    /// Write the geometry map. Fire-and-forget: a failed write is logged and
    /// the in-memory state stays authoritative.
    fn persist(&mut self, app_id: &AppId, store: &mut dyn KvStore) {
        if let Some(geometry) = self.window(app_id).map(|w| w.geometry) {
            self.states.insert(app_id.as_str().to_string(), geometry);
        }
        if let Err(err) = save_json(store, keys::WINDOW_STATES, &self.states) {
            log::warn!("window state persist failed: {err}");
        }
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}
