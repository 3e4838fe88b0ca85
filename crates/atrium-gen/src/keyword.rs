//! Keyword-table generation strategy.

use atrium_types::error::Result;

use crate::templates;

/// Pluggable content generation strategy: free-text prompt plus app name in,
/// HTML document out.
pub trait ContentGenerator {
    fn generate(&self, prompt: &str, app_name: &str) -> Result<String>;
}

/// App categories the keyword table can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    Calculator,
    Notepad,
    Todo,
    Timer,
    Weather,
    Game,
    Form,
    Chart,
    Custom,
}

/// Keyword sets per category, Turkish and English. Order matters: the first
/// matching category wins.
const KEYWORD_TABLE: &[(AppKind, &[&str])] = &[
    (AppKind::Calculator, &["hesap", "calculator", "matematik"]),
    (AppKind::Notepad, &["not", "note", "text"]),
    (AppKind::Todo, &["todo", "görev", "task"]),
    (AppKind::Timer, &["timer", "krono", "zaman"]),
    (AppKind::Weather, &["weather", "hava"]),
    (AppKind::Game, &["oyun", "game"]),
    (AppKind::Form, &["form", "input"]),
    (AppKind::Chart, &["chart", "grafik"]),
];

/// Classify a prompt by case-insensitive substring match.
pub fn classify_prompt(prompt: &str) -> AppKind {
    let lower = prompt.to_lowercase();
    for (kind, keywords) in KEYWORD_TABLE {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *kind;
        }
    }
    AppKind::Custom
}

/// The default strategy: pick a static template for the classified category.
#[derive(Debug, Default)]
pub struct KeywordGenerator;

impl KeywordGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ContentGenerator for KeywordGenerator {
    fn generate(&self, prompt: &str, app_name: &str) -> Result<String> {
        let kind = classify_prompt(prompt);
        log::info!("generating {kind:?} content for {app_name:?}");
        let doc = match kind {
            AppKind::Calculator => templates::calculator_app(),
            AppKind::Notepad => templates::notepad_app(),
            AppKind::Todo => templates::todo_app(),
            AppKind::Timer => templates::timer_app(),
            AppKind::Weather => templates::weather_app(),
            AppKind::Game => templates::game_app(prompt),
            AppKind::Form => templates::form_app(prompt),
            AppKind::Chart => templates::chart_app(),
            AppKind::Custom => templates::custom_app(prompt, app_name),
        };
        Ok(doc)
    }
}
