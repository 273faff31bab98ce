//! Pre-score rejection of unsuitable search results.
//!
//! Three fixed keyword lists drive the classification:
//! * *good* keywords mark audio-only uploads and can override a bad
//!   keyword on the same title,
//! * *bad* keywords mark video-style content (music videos, live cuts),
//! * *unwanted* keywords mark content that is never acceptable (karaoke,
//!   parody, shorts) and cannot be overridden.
//!
//! All keyword checks are case-insensitive substring matches on the title.

use crate::candidate::SearchCandidate;

/// Shortest acceptable result, seconds.
const MIN_DURATION_SECS: u64 = 60;
/// Longest acceptable result, seconds (15 minutes).
const MAX_DURATION_SECS: u64 = 900;

/// Title phrases that mark a result as audio-focused.
pub const GOOD_KEYWORDS: &[&str] = &[
    "official audio",
    "lyrics",
    "lyric video",
    "audio only",
    "music only",
];

/// Title phrases that mark video-style content. A good keyword on the
/// same title overrides these.
const BAD_KEYWORDS: &[&str] = &[
    "official video",
    "music video",
    "video clip",
    "clip",
    "mv",
    "live performance",
    "live version",
    "concert",
    "live at",
    "reaction",
    "review",
    "tutorial",
    "lesson",
    "how to",
    "dance",
    "choreography",
    "tiktok",
    "vine",
    "meme",
    "cover version",
    "acoustic version",
    "remix",
    "mashup",
];

/// Title phrases that reject a result outright, good keywords or not.
const UNWANTED_KEYWORDS: &[&str] = &[
    "shorts",
    "short",
    "karaoke",
    "instrumental",
    "funny",
    "parody",
    "comedy",
    "skit",
];

/// Outcome of running one candidate through the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    /// Rejected, with the failed duration rule or matched keyword as reason.
    Rejected(&'static str),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Classify a candidate as acceptable or rejected-with-reason.
///
/// A candidate whose duration is unknown skips both length checks; only a
/// known out-of-range duration rejects.
pub fn classify(candidate: &SearchCandidate) -> Verdict {
    if let Some(duration) = candidate.duration_secs {
        if duration < MIN_DURATION_SECS {
            return Verdict::Rejected("too short");
        }
        if duration > MAX_DURATION_SECS {
            return Verdict::Rejected("too long");
        }
    }

    let title = candidate.title.to_lowercase();
    let has_good_keyword = GOOD_KEYWORDS.iter().any(|k| title.contains(k));

    if !has_good_keyword {
        if let Some(bad) = BAD_KEYWORDS.iter().copied().find(|k| title.contains(k)) {
            return Verdict::Rejected(bad);
        }
    }

    if let Some(unwanted) = UNWANTED_KEYWORDS.iter().copied().find(|k| title.contains(k)) {
        return Verdict::Rejected(unwanted);
    }

    Verdict::Accepted
}
