//! App search: substring matching, bounded history, suggestions.

use std::collections::BTreeSet;

use atrium_store::{KvStore, keys, load_json, save_json};
use atrium_types::app::App;

/// Most recent queries kept.
const HISTORY_CAP: usize = 10;
/// Suggestions returned per query.
const SUGGESTION_CAP: usize = 8;
/// Entries returned by `popular`.
const POPULAR_CAP: usize = 5;

/// Search state: bounded query history plus names suggested from opened
/// apps.
#[derive(Debug)]
pub struct SearchManager {
    history: Vec<String>,
    suggestions: BTreeSet<String>,
}

impl SearchManager {
    pub fn load(store: &dyn KvStore) -> Self {
        let history = match load_json::<Vec<String>>(store, keys::SEARCH_HISTORY) {
            Ok(Some(h)) => h,
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("search history load failed: {err}");
                Vec::new()
            },
        };
        Self {
            history,
            suggestions: BTreeSet::new(),
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Case-insensitive substring match over app names. A blank query
    /// matches nothing.
    pub fn search<'a>(&self, apps: &'a [App], query: &str) -> Vec<&'a App> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        apps.iter()
            .filter(|app| app.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Record a query: most recent first, no duplicates, capped. Repeating
    /// a query already in the history leaves the order unchanged.
    pub fn record_query(&mut self, query: &str, store: &mut dyn KvStore) {
        let query = query.trim();
        if query.is_empty() || self.history.iter().any(|h| h == query) {
            return;
        }
        self.history.insert(0, query.to_string());
        self.history.truncate(HISTORY_CAP);
        self.persist(store);
    }

    /// Remember an opened app's name for suggestions.
    pub fn add_suggestion(&mut self, app_name: &str) {
        self.suggestions.insert(app_name.to_lowercase());
    }

    pub fn remove_suggestion(&mut self, app_name: &str) {
        self.suggestions.remove(&app_name.to_lowercase());
    }

    /// Matching app names first, then matching history entries, capped.
    pub fn suggestions(&self, apps: &[App], query: &str) -> Vec<String> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut out: Vec<String> = Vec::new();
        for app in apps {
            if app.name.to_lowercase().contains(&query) {
                out.push(app.name.clone());
            }
        }
        for item in &self.history {
            if item.to_lowercase().contains(&query) && !out.contains(item) {
                out.push(item.clone());
            }
        }
        out.truncate(SUGGESTION_CAP);
        out
    }

    /// Most frequent history entries, ties in first-seen order.
    pub fn popular(&self) -> Vec<String> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for query in &self.history {
            match counts.iter_mut().find(|(q, _)| q == query) {
                Some((_, n)) => *n += 1,
                None => counts.push((query.clone(), 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.into_iter().take(POPULAR_CAP).map(|(q, _)| q).collect()
    }

    pub fn clear_history(&mut self, store: &mut dyn KvStore) {
        self.history.clear();
        self.persist(store);
    }

    fn persist(&self, store: &mut dyn KvStore) {
        if let Err(err) = save_json(store, keys::SEARCH_HISTORY, &self.history) {
            log::warn!("search history persist failed: {err}");
        }
    }
}
