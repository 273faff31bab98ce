//! Best-match selection over an escalating query plan.
//!
//! Queries are issued one at a time, sequentially and blocking; the first
//! query whose results contain at least one acceptable candidate decides
//! the outcome. Scores are only comparable within a single query's batch,
//! so a modest match from an early (more specific) query beats anything a
//! later query might have returned.

use std::error::Error;

use crate::candidate::SearchCandidate;
use crate::filter::{self, Verdict};
use crate::query_plan::build_query_plan;
use crate::scorer;

/// Search capability consumed by the selector.
pub trait SearchProvider {
    /// Run one search and return up to `max_results` candidates.
    fn search(
        &mut self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchCandidate>, Box<dyn Error>>;
}

/// The winning candidate of a selection, with the query that found it.
#[derive(Debug, Clone)]
pub struct BestMatch {
    pub url: String,
    pub title: String,
    pub score: u32,
    pub query: String,
}

/// Find the best audio match for a song.
///
/// Walks the query plan in order. A provider failure on an individual
/// query is logged and counts as zero candidates for that query; it never
/// aborts the selection. Results are filtered, accepted ones scored, and
/// the first query with at least one accepted candidate returns its
/// highest-scoring one immediately (ties go to the earlier result).
///
/// Returns `None` when the whole plan is exhausted without an acceptable
/// candidate. That is an expected outcome, not an error.
pub fn select_best_match(
    provider: &mut dyn SearchProvider,
    search_query: &str,
    song_name: &str,
    artist_name: &str,
    max_results: usize,
    verbose: bool,
) -> Option<BestMatch> {
    let plan = build_query_plan(search_query, song_name, artist_name);

    for query in &plan {
        if verbose {
            println!("Searching: \"{}\"", query);
        }

        let results = match provider.search(query, max_results) {
            Ok(r) => r,
            Err(e) => {
                println!("  Search failed for \"{}\": {} — trying next query", query, e);
                continue;
            }
        };

        let mut best: Option<(u32, &SearchCandidate)> = None;

        for candidate in &results {
            match filter::classify(candidate) {
                Verdict::Rejected(reason) => {
                    if verbose {
                        println!("  Rejected \"{}\": {}", candidate.title, reason);
                    }
                }
                Verdict::Accepted => {
                    let score = scorer::score(candidate, song_name, artist_name);
                    if verbose {
                        println!("  Accepted \"{}\" (score {})", candidate.title, score);
                    }
                    // Strictly-greater keeps the first-seen candidate on ties
                    match best {
                        Some((best_score, _)) if score <= best_score => {}
                        _ => best = Some((score, candidate)),
                    }
                }
            }
        }

        if let Some((score, candidate)) = best {
            if verbose {
                println!(
                    "Best match: \"{}\" ({}) score={}",
                    candidate.title, candidate.url, score
                );
            }
            return Some(BestMatch {
                url: candidate.url.clone(),
                title: candidate.title.clone(),
                score,
                query: query.clone(),
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider that replays a fixed script of per-query outcomes and
    /// records every query it was asked.
    struct ScriptedProvider {
        script: Vec<Result<Vec<SearchCandidate>, String>>,
        calls: Vec<String>,
    }

    impl ScriptedProvider {
        fn new(script: Vec<Result<Vec<SearchCandidate>, String>>) -> Self {
            ScriptedProvider {
                script,
                calls: Vec::new(),
            }
        }
    }

    impl SearchProvider for ScriptedProvider {
        fn search(
            &mut self,
            query: &str,
            _max_results: usize,
        ) -> Result<Vec<SearchCandidate>, Box<dyn Error>> {
            self.calls.push(query.to_string());
            if self.script.is_empty() {
                return Ok(Vec::new());
            }
            self.script.remove(0).map_err(|e| e.into())
        }
    }

    fn candidate(title: &str, uploader: &str, duration_secs: Option<u64>, view_count: u64, url: &str) -> SearchCandidate {
        SearchCandidate {
            title: title.to_string(),
            uploader: uploader.to_string(),
            duration_secs,
            view_count,
            url: url.to_string(),
        }
    }

    #[test]
    fn test_first_query_with_accepted_candidate_short_circuits() {
        let winner = candidate(
            "Song - Official Audio",
            "ArtistVEVO",
            Some(200),
            50_000,
            "https://music.youtube.com/watch?v=abc",
        );
        let mut provider = ScriptedProvider::new(vec![Ok(vec![winner])]);

        let result = select_best_match(&mut provider, "Artist Song", "Song", "Artist", 5, false)
            .expect("should find a match");

        assert_eq!(result.url, "https://music.youtube.com/watch?v=abc");
        // official audio 50 + official 25 + subdomain 60 + uploader 30
        // + duration band 15 + song prefix 25
        assert_eq!(result.score, 205);
        assert_eq!(result.query, "Song Artist official audio");
        // No later query was attempted
        assert_eq!(provider.calls.len(), 1);
    }

    #[test]
    fn test_exhausted_plan_returns_none() {
        // Every query returns only rejected candidates
        let script = (0..10)
            .map(|i| {
                Ok(vec![candidate(
                    "Song (Live Version)",
                    "x",
                    Some(200),
                    0,
                    &format!("https://www.youtube.com/watch?v={}", i),
                )])
            })
            .collect();
        let mut provider = ScriptedProvider::new(script);

        let result = select_best_match(&mut provider, "Artist Song", "Song", "Artist", 5, false);

        assert!(result.is_none());
        assert_eq!(provider.calls.len(), 10);
    }

    #[test]
    fn test_provider_failure_is_not_fatal() {
        let winner = candidate("Song - Lyrics", "x", Some(200), 0, "https://www.youtube.com/watch?v=ok");
        let mut provider = ScriptedProvider::new(vec![
            Err("connection reset".to_string()),
            Ok(vec![winner]),
        ]);

        let result = select_best_match(&mut provider, "Artist Song", "Song", "Artist", 5, false)
            .expect("second query should still win");

        assert_eq!(result.url, "https://www.youtube.com/watch?v=ok");
        assert_eq!(provider.calls.len(), 2);
    }

    #[test]
    fn test_early_query_beats_unattempted_later_one() {
        // First query yields a barely-acceptable candidate; the second one
        // would yield a much better candidate but must never be reached.
        let modest = candidate("Artist - Song", "x", Some(700), 0, "https://www.youtube.com/watch?v=modest");
        let great = candidate(
            "Song - Official Audio",
            "ArtistVEVO",
            Some(200),
            2_000_000,
            "https://music.youtube.com/watch?v=great",
        );
        let mut provider = ScriptedProvider::new(vec![Ok(vec![modest]), Ok(vec![great])]);

        let result = select_best_match(&mut provider, "Artist Song", "Song", "Artist", 5, false)
            .expect("first batch should decide");

        assert_eq!(result.url, "https://www.youtube.com/watch?v=modest");
        assert_eq!(provider.calls.len(), 1);
    }

    #[test]
    fn test_highest_score_wins_within_a_batch() {
        let weak = candidate("Artist - Song", "x", Some(200), 0, "https://www.youtube.com/watch?v=weak");
        let strong = candidate("Song - Official Audio", "x", Some(200), 0, "https://www.youtube.com/watch?v=strong");
        let mut provider = ScriptedProvider::new(vec![Ok(vec![weak, strong])]);

        let result = select_best_match(&mut provider, "Artist Song", "Song", "Artist", 5, false)
            .expect("should find a match");

        assert_eq!(result.url, "https://www.youtube.com/watch?v=strong");
    }

    #[test]
    fn test_ties_go_to_first_seen() {
        let first = candidate("Song A", "x", Some(200), 0, "https://www.youtube.com/watch?v=first");
        let second = candidate("Song B", "x", Some(200), 0, "https://www.youtube.com/watch?v=second");
        let mut provider = ScriptedProvider::new(vec![Ok(vec![first, second])]);

        let result = select_best_match(&mut provider, "Artist Song", "Song A B", "Artist", 5, false)
            .expect("should find a match");

        assert_eq!(result.url, "https://www.youtube.com/watch?v=first");
    }

    #[test]
    fn test_empty_batches_fall_through_to_fallback_queries() {
        let mut script: Vec<Result<Vec<SearchCandidate>, String>> =
            (0..9).map(|_| Ok(Vec::new())).collect();
        script.push(Ok(vec![candidate(
            "Artist - Song",
            "x",
            Some(200),
            0,
            "https://www.youtube.com/watch?v=last",
        )]));
        let mut provider = ScriptedProvider::new(script);

        let result = select_best_match(&mut provider, "Artist Song", "Song", "Artist", 5, false)
            .expect("last query should win");

        assert_eq!(result.url, "https://www.youtube.com/watch?v=last");
        assert_eq!(result.query, "Artist Song -remix -cover -live -video");
        assert_eq!(provider.calls.len(), 10);
    }
}
