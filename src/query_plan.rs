//! Query plan construction.
//!
//! A plan is an ordered list of search queries, most specific first. The
//! selector walks it in order and stops at the first query that yields an
//! acceptable candidate, so the audio-focused song+artist combinations
//! come before the raw-query fallbacks.

use crate::scorer::MUSIC_SUBDOMAIN;

/// Build the ordered query list for one selection request.
///
/// `search_query` is the caller's raw query (typically "artist song");
/// `song_name` and `artist_name` are the cleaned metadata fields. The plan
/// is built fresh per request and never persisted.
pub fn build_query_plan(search_query: &str, song_name: &str, artist_name: &str) -> Vec<String> {
    let song_artist = format!("{} {}", song_name, artist_name).trim().to_string();

    vec![
        // Priority: audio-focused song+artist combinations
        format!("{} official audio", song_artist),
        format!("{} lyrics audio", song_artist),
        format!("{} lyric video", song_artist),
        format!("{} site:{}", song_artist, MUSIC_SUBDOMAIN),
        format!("{} audio only", song_artist),
        format!("{} music only", song_artist),
        // Fallbacks: negative-qualified combination, then the raw query
        format!("{} -video -live -cover", song_artist),
        format!("{} official audio", search_query),
        format!("{} lyrics", search_query),
        format!("{} -remix -cover -live -video", search_query),
    ]
}
