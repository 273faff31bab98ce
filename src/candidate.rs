//! Search result types shared by the providers and the selection logic.

/// One video-platform search result under consideration as an audio match.
///
/// Produced by a [`SearchProvider`](crate::selector::SearchProvider); the
/// filter and scorer only read it. A candidate has no identity beyond its
/// URL.
#[derive(Debug, Clone)]
pub struct SearchCandidate {
    pub title: String,
    /// Channel / uploader name. Empty when the provider omits it.
    pub uploader: String,
    /// Length in seconds. `None` when the provider has no duration
    /// metadata; such candidates bypass the length checks instead of
    /// pretending to be zero seconds long.
    pub duration_secs: Option<u64>,
    /// View count, 0 when unknown.
    pub view_count: u64,
    pub url: String,
}
