//! Canned content generation for ATRIUM DESK.
//!
//! "Generation" is static template selection by keyword match on the app
//! prompt -- there is no inference step. The strategy lives behind the
//! [`ContentGenerator`] trait so a real backend can replace the keyword
//! table without touching callers. Latency is simulated through the
//! tick-driven [`GenerationQueue`], which also guards against stale
//! completions overwriting newer requests.

mod keyword;
mod queue;
pub mod templates;

pub use keyword::{AppKind, ContentGenerator, KeywordGenerator, classify_prompt};
pub use queue::{GenerationCompletion, GenerationQueue};
