//! Diagnostic: run one raw query against a search backend and show every
//! candidate with its filter verdict and score.
//!
//! Usage:
//!   search_probe <QUERY> [--song <NAME>] [--artist <ARTIST>]
//!                [--backend ytdlp|invidious] [--instance <URL>]
//!                [--max-results <N>]

use std::process::exit;
use std::time::Duration;

use audiomatch::filter::{self, Verdict};
use audiomatch::invidious::{InvidiousProvider, DEFAULT_INSTANCE};
use audiomatch::scorer;
use audiomatch::selector::SearchProvider;
use audiomatch::ytdlp::YtDlpProvider;

fn arg_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1).cloned())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let query = match args.get(1).filter(|a| !a.starts_with("--")) {
        Some(q) => q.clone(),
        None => {
            eprintln!(
                "Usage: search_probe <QUERY> [--song <NAME>] [--artist <ARTIST>] \
                 [--backend ytdlp|invidious] [--instance <URL>] [--max-results <N>]"
            );
            exit(2);
        }
    };

    let song = arg_value(&args, "--song").unwrap_or_else(|| query.clone());
    let artist = arg_value(&args, "--artist").unwrap_or_default();
    let max_results = arg_value(&args, "--max-results")
        .and_then(|v| v.parse().ok())
        .unwrap_or(5);
    let backend = arg_value(&args, "--backend").unwrap_or_else(|| "ytdlp".to_string());
    let min_gap = Duration::from_millis(1000);

    let mut provider: Box<dyn SearchProvider> = match backend.as_str() {
        "ytdlp" => Box::new(YtDlpProvider::new(min_gap)),
        "invidious" => {
            let instance =
                arg_value(&args, "--instance").unwrap_or_else(|| DEFAULT_INSTANCE.to_string());
            Box::new(InvidiousProvider::new(&instance, min_gap))
        }
        other => {
            eprintln!("Unknown backend: {} (expected ytdlp or invidious)", other);
            exit(2);
        }
    };

    println!("Query: \"{}\" (backend: {})", query, backend);
    println!();

    let candidates = match provider.search(&query, max_results) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Search failed: {}", e);
            exit(1);
        }
    };

    if candidates.is_empty() {
        println!("No results.");
        return;
    }

    for (i, c) in candidates.iter().enumerate() {
        let duration = c
            .duration_secs
            .map_or("?".to_string(), |d| format!("{}s", d));
        println!("{}. \"{}\"", i + 1, c.title);
        println!("   uploader: {}  duration: {}  views: {}", c.uploader, duration, c.view_count);
        println!("   url: {}", c.url);
        match filter::classify(c) {
            Verdict::Rejected(reason) => println!("   verdict: rejected ({})", reason),
            Verdict::Accepted => {
                let score = scorer::score(c, &song, &artist);
                println!("   verdict: accepted, score {}", score);
            }
        }
        println!();
    }
}
