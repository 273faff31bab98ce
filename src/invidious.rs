//! Invidious search backend.
//!
//! Queries the JSON search API of an Invidious instance and maps video
//! results to [`SearchCandidate`]. Invidious mirrors the video platform's
//! search without an API key, which keeps the selector free of OAuth
//! concerns. The instance URL is configurable since public instances come
//! and go.

use serde::Deserialize;
use std::error::Error;
use std::time::Duration;

use crate::candidate::SearchCandidate;
use crate::pacing::Pacer;
use crate::selector::SearchProvider;

const USER_AGENT: &str = "audiomatch/0.1";

/// A reasonably long-lived public instance; override via config or
/// `--instance` when it rate-limits or disappears.
pub const DEFAULT_INSTANCE: &str = "https://yewtu.be";

// ── API response types ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ApiSearchItem {
    #[serde(rename = "type", default)]
    item_type: String,
    #[serde(default)]
    title: String,
    #[serde(rename = "videoId", default)]
    video_id: String,
    #[serde(default)]
    author: String,
    #[serde(rename = "lengthSeconds", default)]
    length_seconds: u64,
    #[serde(rename = "viewCount", default)]
    view_count: u64,
}

// ── Provider ─────────────────────────────────────────────────────────────────

pub struct InvidiousProvider {
    instance: String,
    pacer: Pacer,
}

impl InvidiousProvider {
    pub fn new(instance: &str, min_request_gap: Duration) -> Self {
        InvidiousProvider {
            instance: instance.trim_end_matches('/').to_string(),
            pacer: Pacer::new("Invidious", min_request_gap),
        }
    }
}

impl SearchProvider for InvidiousProvider {
    fn search(
        &mut self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchCandidate>, Box<dyn Error>> {
        let url = format!(
            "{}/api/v1/search?q={}&type=video",
            self.instance,
            urlencoded(query)
        );

        self.pacer.wait();

        let response = match ureq::get(&url).set("User-Agent", USER_AGENT).call() {
            Ok(r) => r,
            Err(e) => {
                self.pacer.note_failure();
                return Err(e.into());
            }
        };

        let items: Vec<ApiSearchItem> = serde_json::from_reader(response.into_reader())?;
        self.pacer.note_success();

        Ok(items
            .into_iter()
            .filter(|i| i.item_type == "video" && !i.video_id.is_empty())
            .take(max_results)
            .map(|i| SearchCandidate {
                title: i.title,
                uploader: i.author,
                // Live streams report 0 seconds; treat that as unknown
                duration_secs: if i.length_seconds > 0 {
                    Some(i.length_seconds)
                } else {
                    None
                },
                view_count: i.view_count,
                url: format!("https://www.youtube.com/watch?v={}", i.video_id),
            })
            .collect())
    }
}

/// Minimal URL-encoding (spaces and a few special characters).
fn urlencoded(s: &str) -> String {
    s.replace('%', "%25")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace('#', "%23")
        .replace('+', "%2B")
        .replace(' ', "+")
}
