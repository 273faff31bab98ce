//! Additive desirability scoring for accepted candidates.
//!
//! The score is an open-ended accumulation of bonuses; it is only ever
//! compared between candidates of the same query batch, so no
//! normalisation is needed.

use crate::candidate::SearchCandidate;

/// Title phrases and their bonuses. Every phrase present in the title
/// adds its points, so a title with "official audio" also collects the
/// "official" bonus.
const TITLE_PHRASE_BONUSES: &[(&str, u32)] = &[
    ("official audio", 50),
    ("lyrics", 40),
    ("lyric video", 40),
    ("audio only", 45),
    ("music only", 45),
    ("original", 30),
    ("official", 25),
];

/// Subdomain of the video platform that hosts audio-focused uploads.
pub const MUSIC_SUBDOMAIN: &str = "music.youtube.com";

/// Compute the desirability score for a candidate given the target song
/// and artist. Higher is better; there is no upper bound. All text checks
/// are case-insensitive.
pub fn score(candidate: &SearchCandidate, song_name: &str, artist_name: &str) -> u32 {
    let title = candidate.title.to_lowercase();
    let uploader = candidate.uploader.to_lowercase();

    let mut total = 0u32;

    for (phrase, bonus) in TITLE_PHRASE_BONUSES {
        if title.contains(phrase) {
            total += bonus;
        }
    }

    if candidate.url.contains(MUSIC_SUBDOMAIN) {
        total += 60;
    }

    let artist = artist_name.to_lowercase();
    if (!artist.is_empty() && uploader.contains(&artist)) || uploader.contains("official") {
        total += 30;
    }

    if candidate.view_count > 1_000_000 {
        total += 20;
    } else if candidate.view_count > 100_000 {
        total += 10;
    }

    // Tight band first; the wide band is a fallback, never additive.
    if let Some(duration) = candidate.duration_secs {
        if (120..=480).contains(&duration) {
            total += 15;
        } else if (60..=600).contains(&duration) {
            total += 5;
        }
    }

    let prefix = song_prefix(song_name);
    if !prefix.is_empty() && title.contains(&prefix) {
        total += 25;
    }

    total
}

/// First 10 characters of the lowercased song name (the whole name when
/// shorter). Character-wise so multi-byte titles never split a codepoint.
fn song_prefix(song_name: &str) -> String {
    song_name.to_lowercase().chars().take(10).collect()
}
