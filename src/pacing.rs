//! Spacing between provider requests.
//!
//! Search backends are shared public endpoints and one selection can issue
//! up to ten queries back to back, so requests are kept a minimum interval
//! apart. The interval doubles while the backend is failing and snaps back
//! to the minimum on the next success.

use std::thread;
use std::time::{Duration, Instant};

pub struct Pacer {
    name: String,
    min_gap: Duration,
    current_gap: Duration,
    max_gap: Duration,
    last_request: Option<Instant>,
}

impl Pacer {
    /// * `name` — label for log messages (e.g. "Invidious", "yt-dlp")
    /// * `min_gap` — minimum time between requests
    pub fn new(name: &str, min_gap: Duration) -> Self {
        Pacer {
            name: name.to_string(),
            min_gap,
            current_gap: min_gap,
            max_gap: min_gap * 8,
            last_request: None,
        }
    }

    /// Sleep until the current gap has passed since the previous request.
    /// Call before every request.
    pub fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.current_gap {
                thread::sleep(self.current_gap - elapsed);
            }
        }
        self.last_request = Some(Instant::now());
    }

    /// A request went through; drop back to the minimum gap.
    pub fn note_success(&mut self) {
        self.current_gap = self.min_gap;
    }

    /// A request failed; double the gap, capped at 8x the minimum.
    pub fn note_failure(&mut self) {
        self.current_gap = (self.current_gap * 2).min(self.max_gap);
        println!(
            "  [{}] backing off, next request in {:.1}s",
            self.name,
            self.current_gap.as_secs_f64()
        );
    }
}
