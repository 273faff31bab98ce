//! yt-dlp search backend.
//!
//! Shells out to `yt-dlp --flat-playlist -J "ytsearchN:QUERY"` and maps
//! the flat-playlist entries to [`SearchCandidate`]. Requires the `yt-dlp`
//! binary on PATH; the upside is that it tracks the platform's markup
//! changes so this crate never has to.

use serde::Deserialize;
use std::error::Error;
use std::process::Command;
use std::time::Duration;

use crate::candidate::SearchCandidate;
use crate::pacing::Pacer;
use crate::selector::SearchProvider;

// ── yt-dlp JSON types ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct FlatPlaylist {
    #[serde(default)]
    entries: Vec<FlatEntry>,
}

#[derive(Debug, Deserialize)]
struct FlatEntry {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    uploader: Option<String>,
    #[serde(default)]
    channel: Option<String>,
    /// Fractional seconds in flat-playlist output
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    view_count: Option<u64>,
    #[serde(default)]
    url: Option<String>,
}

// ── Provider ─────────────────────────────────────────────────────────────────

pub struct YtDlpProvider {
    program: String,
    pacer: Pacer,
}

impl YtDlpProvider {
    pub fn new(min_request_gap: Duration) -> Self {
        Self::with_program("yt-dlp", min_request_gap)
    }

    /// Use a different binary name/path (e.g. a pinned yt-dlp build).
    pub fn with_program(program: &str, min_request_gap: Duration) -> Self {
        YtDlpProvider {
            program: program.to_string(),
            pacer: Pacer::new("yt-dlp", min_request_gap),
        }
    }
}

impl SearchProvider for YtDlpProvider {
    fn search(
        &mut self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchCandidate>, Box<dyn Error>> {
        let search_term = format!("ytsearch{}:{}", max_results, query);

        self.pacer.wait();

        let output = Command::new(&self.program)
            .args(["--flat-playlist", "-J", &search_term])
            .output()?;

        if !output.status.success() {
            self.pacer.note_failure();
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("yt-dlp search failed: {}", stderr.trim()).into());
        }

        let playlist: FlatPlaylist = serde_json::from_slice(&output.stdout)?;
        self.pacer.note_success();

        Ok(playlist
            .entries
            .into_iter()
            .filter(|e| !e.id.is_empty())
            .map(|e| {
                let url = e
                    .url
                    .unwrap_or_else(|| format!("https://www.youtube.com/watch?v={}", e.id));
                SearchCandidate {
                    title: e.title,
                    uploader: e.uploader.or(e.channel).unwrap_or_default(),
                    duration_secs: e
                        .duration
                        .filter(|d| *d > 0.0)
                        .map(|d| d.round() as u64),
                    view_count: e.view_count.unwrap_or(0),
                    url,
                }
            })
            .collect())
    }
}
