pub mod candidate;
pub mod config;
pub mod filter;
pub mod invidious;
pub mod pacing;
pub mod query_plan;
pub mod scorer;
pub mod selector;
pub mod ytdlp;

pub use candidate::SearchCandidate;
pub use config::Config;
pub use invidious::InvidiousProvider;
pub use query_plan::build_query_plan;
pub use selector::{select_best_match, BestMatch, SearchProvider};
pub use ytdlp::YtDlpProvider;
