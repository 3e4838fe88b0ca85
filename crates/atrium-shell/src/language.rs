//! Localization: string tables and date/time formatting.
//!
//! Two built-in languages (Turkish, the original default, and English).
//! Lookup falls back to the key itself so a missing entry degrades to
//! something readable instead of an error.

use std::collections::BTreeMap;

use atrium_platform::{WallTime, Weekday};
use atrium_store::{KvStore, keys};

type Table = BTreeMap<String, String>;

fn table(entries: &[(&str, &str)]) -> Table {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn turkish() -> Table {
    table(&[
        // Header
        ("add_app", "Uygulama Ekle"),
        ("settings", "Ayarlar"),
        ("search_placeholder", "Uygulama ara..."),
        // Add app modal
        ("app_name", "Uygulama Adı"),
        ("ai_prompt", "AI Prompt (Uygulama Açıklaması)"),
        ("app_icon", "Uygulama Simgesi"),
        ("cancel", "İptal"),
        ("create_app", "Uygulamayı Oluştur"),
        // Settings modal
        ("theme", "Tema"),
        ("language", "Dil"),
        ("display", "Görünüm"),
        ("theme_color", "Tema Rengi"),
        ("background_color", "Arkaplan Rengi"),
        ("select_language", "Dil Seçin"),
        ("font_family", "Yazı Tipi"),
        ("icon_size", "Simge Boyutu"),
        ("save", "Kaydet"),
        // Context menu
        ("open", "Aç"),
        ("edit", "Düzenle"),
        ("delete", "Sil"),
        // Messages
        ("generating_app", "Uygulama oluşturuluyor..."),
        ("fill_all_fields", "Lütfen tüm alanları doldurun!"),
        ("error_creating_app", "Uygulama oluşturulurken hata oluştu!"),
        ("confirm_delete", "Bu uygulamayı silmek istediğinizden emin misiniz?"),
        ("no_results", "için sonuç bulunamadı"),
        // App names
        ("welcome", "Hoş Geldiniz"),
        ("calculator", "Hesap Makinesi"),
        ("notepad", "Not Defteri"),
        // Weekdays
        ("monday", "Pazartesi"),
        ("tuesday", "Salı"),
        ("wednesday", "Çarşamba"),
        ("thursday", "Perşembe"),
        ("friday", "Cuma"),
        ("saturday", "Cumartesi"),
        ("sunday", "Pazar"),
    ])
}

fn english() -> Table {
    table(&[
        // Header
        ("add_app", "Add App"),
        ("settings", "Settings"),
        ("search_placeholder", "Search apps..."),
        // Add app modal
        ("app_name", "App Name"),
        ("ai_prompt", "AI Prompt (App Description)"),
        ("app_icon", "App Icon"),
        ("cancel", "Cancel"),
        ("create_app", "Create App"),
        // Settings modal
        ("theme", "Theme"),
        ("language", "Language"),
        ("display", "Display"),
        ("theme_color", "Theme Color"),
        ("background_color", "Background Color"),
        ("select_language", "Select Language"),
        ("font_family", "Font Family"),
        ("icon_size", "Icon Size"),
        ("save", "Save"),
        // Context menu
        ("open", "Open"),
        ("edit", "Edit"),
        ("delete", "Delete"),
        // Messages
        ("generating_app", "Generating app..."),
        ("fill_all_fields", "Please fill all fields!"),
        ("error_creating_app", "Error creating app!"),
        ("confirm_delete", "Are you sure you want to delete this app?"),
        ("no_results", "No results found for"),
        // App names
        ("welcome", "Welcome"),
        ("calculator", "Calculator"),
        ("notepad", "Notepad"),
        // Weekdays
        ("monday", "Monday"),
        ("tuesday", "Tuesday"),
        ("wednesday", "Wednesday"),
        ("thursday", "Thursday"),
        ("friday", "Friday"),
        ("saturday", "Saturday"),
        ("sunday", "Sunday"),
    ])
}

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Current language plus the translation tables.
#[derive(Debug)]
pub struct LanguageManager {
    current: String,
    tables: BTreeMap<String, Table>,
}

impl LanguageManager {
    /// Load the persisted language preference; unknown or absent values
    /// keep the Turkish default.
    pub fn load(store: &dyn KvStore) -> Self {
        let mut mgr = Self {
            current: "tr".to_string(),
            tables: BTreeMap::from([("tr".to_string(), turkish()), ("en".to_string(), english())]),
        };
        match store.get(keys::LANGUAGE) {
            Ok(Some(lang)) if mgr.tables.contains_key(&lang) => mgr.current = lang,
            Ok(_) => {},
            Err(err) => log::warn!("language load failed: {err}"),
        }
        mgr
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn supported(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Switch language and persist the preference. Unsupported codes are
    /// ignored.
    pub fn set_language(&mut self, lang: &str, store: &mut dyn KvStore) {
        if !self.tables.contains_key(lang) {
            return;
        }
        self.current = lang.to_string();
        if let Err(err) = store.set(keys::LANGUAGE, lang) {
            log::warn!("language persist failed: {err}");
        }
        log::info!("language changed to {lang}");
    }

    /// Look up a string; missing keys fall back to the key itself.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.tables
            .get(&self.current)
            .and_then(|t| t.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Extend a language table (creating the language if new).
    pub fn add_translation(&mut self, lang: &str, key: &str, value: &str) {
        self.tables
            .entry(lang.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Long date, localized: `5 Ocak 2026 Pazartesi` / `Monday, January 5, 2026`.
    pub fn format_date(&self, time: &WallTime) -> String {
        let weekday = self.get(weekday_key(time.weekday()));
        let month_idx = (time.month.clamp(1, 12) - 1) as usize;
        if self.current == "tr" {
            format!(
                "{} {} {} {}",
                time.day, MONTHS_TR[month_idx], time.year, weekday
            )
        } else {
            format!(
                "{}, {} {}, {}",
                weekday, MONTHS_EN[month_idx], time.day, time.year
            )
        }
    }

    /// Header clock, honoring the 24-hour flag.
    pub fn format_time(&self, time: &WallTime, clock_24h: bool) -> String {
        if clock_24h {
            format!("{:02}:{:02}", time.hour, time.minute)
        } else {
            let (hour, suffix) = match time.hour {
                0 => (12, "AM"),
                h if h < 12 => (h, "AM"),
                12 => (12, "PM"),
                h => (h - 12, "PM"),
            };
            format!("{}:{:02} {}", hour, time.minute, suffix)
        }
    }
}

fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "monday",
        Weekday::Tuesday => "tuesday",
        Weekday::Wednesday => "wednesday",
        Weekday::Thursday => "thursday",
        Weekday::Friday => "friday",
        Weekday::Saturday => "saturday",
        Weekday::Sunday => "sunday",
    }
}
