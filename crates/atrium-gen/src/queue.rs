//! Tick-driven generation queue.
//!
//! Submitting a request records a per-app sequence number and schedules the
//! completion a fixed number of ticks out, simulating generation latency
//! without threads. `poll` drains due completions; a completion whose
//! sequence is no longer the latest for its app is stale -- a newer edit
//! superseded it -- and is discarded instead of clobbering the newer result.

use std::collections::BTreeMap;

use atrium_types::app::AppId;

use crate::keyword::ContentGenerator;
use crate::templates;

#[derive(Debug)]
struct PendingJob {
    app_id: AppId,
    seq: u64,
    app_name: String,
    prompt: String,
    ready_at: u64,
}

/// A finished generation ready to be applied to app state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationCompletion {
    pub app_id: AppId,
    pub seq: u64,
    pub content: String,
}

/// Queue of in-flight generation requests.
pub struct GenerationQueue {
    generator: Box<dyn ContentGenerator>,
    delay_ticks: u64,
    pending: Vec<PendingJob>,
    latest_seq: BTreeMap<AppId, u64>,
    next_seq: u64,
}

impl GenerationQueue {
    pub fn new(generator: Box<dyn ContentGenerator>, delay_ticks: u64) -> Self {
        Self {
            generator,
            delay_ticks,
            pending: Vec::new(),
            latest_seq: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Schedule generation for an app. Returns the request's sequence
    /// number; any earlier in-flight request for the same app becomes stale.
    pub fn submit(&mut self, app_id: AppId, app_name: &str, prompt: &str, now: u64) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest_seq.insert(app_id.clone(), seq);
        self.pending.push(PendingJob {
            app_id,
            seq,
            app_name: app_name.to_string(),
            prompt: prompt.to_string(),
            ready_at: now + self.delay_ticks,
        });
        seq
    }

    /// Number of requests still in flight (stale ones included until drained).
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Drain completions due at `now`.
    ///
    /// Generation failure substitutes the placeholder template; it is never
    /// surfaced to the caller as an error. Stale completions are dropped.
    pub fn poll(&mut self, now: u64) -> Vec<GenerationCompletion> {
        let mut completed = Vec::new();
        let mut still_pending = Vec::new();

        for job in self.pending.drain(..) {
            if job.ready_at > now {
                still_pending.push(job);
                continue;
            }
            if self.latest_seq.get(&job.app_id) != Some(&job.seq) {
                log::info!(
                    "discarding stale generation (seq {}) for {}",
                    job.seq,
                    job.app_id
                );
                continue;
            }
            let content = match self.generator.generate(&job.prompt, &job.app_name) {
                Ok(doc) => doc,
                Err(err) => {
                    log::warn!("generation failed for {}: {err}, using fallback", job.app_id);
                    templates::basic_template(&job.app_name, &job.prompt)
                },
            };
            completed.push(GenerationCompletion {
                app_id: job.app_id,
                seq: job.seq,
                content,
            });
        }

        self.pending = still_pending;
        completed
    }

    /// Forget an app entirely (deleted before generation finished).
    pub fn cancel(&mut self, app_id: &AppId) {
        self.pending.retain(|job| &job.app_id != app_id);
        self.latest_seq.remove(app_id);
    }
}

impl std::fmt::Debug for GenerationQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationQueue")
            .field("delay_ticks", &self.delay_ticks)
            .field("pending", &self.pending)
            .field("next_seq", &self.next_seq)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::KeywordGenerator;
    use atrium_types::error::{AtriumError, Result};

    struct FailingGenerator;

    impl ContentGenerator for FailingGenerator {
        fn generate(&self, _prompt: &str, _app_name: &str) -> Result<String> {
            Err(AtriumError::Gen("backend unavailable".into()))
        }
    }

    fn queue() -> GenerationQueue {
        GenerationQueue::new(Box::new(KeywordGenerator::new()), 2)
    }

    #[test]
    fn completion_arrives_after_the_delay() {
        let mut q = queue();
        q.submit("a".into(), "Calc", "calculator", 0);

        assert!(q.poll(0).is_empty());
        assert!(q.poll(1).is_empty());
        let done = q.poll(2);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].app_id, AppId::from("a"));
        assert!(done[0].content.contains("<!DOCTYPE html>"));
        assert_eq!(q.in_flight(), 0);
    }

    #[test]
    fn sequence_numbers_increase() {
        let mut q = queue();
        let s0 = q.submit("a".into(), "A", "x", 0);
        let s1 = q.submit("b".into(), "B", "y", 0);
        assert!(s1 > s0);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut q = queue();
        q.submit("a".into(), "App", "notepad please", 0);
        // Second edit before the first completes supersedes it.
        let latest = q.submit("a".into(), "App", "calculator please", 1);

        let done = q.poll(10);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].seq, latest);
        assert!(done[0].content.contains("Calculator"));
    }

    #[test]
    fn independent_apps_complete_independently() {
        let mut q = queue();
        q.submit("a".into(), "A", "notepad", 0);
        q.submit("b".into(), "B", "timer", 1);

        let done = q.poll(2);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].app_id, AppId::from("a"));
        let done = q.poll(3);
        assert_eq!(done[0].app_id, AppId::from("b"));
    }

    #[test]
    fn failure_substitutes_placeholder() {
        let mut q = GenerationQueue::new(Box::new(FailingGenerator), 0);
        q.submit("a".into(), "My App", "whatever", 0);
        let done = q.poll(0);
        assert_eq!(done.len(), 1);
        assert!(done[0].content.contains("My App"));
        assert!(done[0].content.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn cancel_drops_in_flight_work() {
        let mut q = queue();
        q.submit("a".into(), "A", "calculator", 0);
        q.cancel(&"a".into());
        assert_eq!(q.in_flight(), 0);
        assert!(q.poll(10).is_empty());
    }

    #[test]
    fn zero_delay_completes_on_submit_tick() {
        let mut q = GenerationQueue::new(Box::new(KeywordGenerator::new()), 0);
        q.submit("a".into(), "A", "chart", 5);
        assert_eq!(q.poll(5).len(), 1);
    }
}
