//! Find the best audio match for a song on the video platform.
//!
//! Usage:
//!   find_match --song <NAME> [--artist <ARTIST>] [--query <RAW_QUERY>]
//!              [--backend ytdlp|invidious] [--instance <URL>]
//!              [--max-results <N>] [--verbose]
//!
//! Prints the winning URL on stdout; exits 1 when no query in the plan
//! yields an acceptable candidate.

use std::process::exit;
use std::time::Duration;

use audiomatch::config::Config;
use audiomatch::invidious::{InvidiousProvider, DEFAULT_INSTANCE};
use audiomatch::selector::{select_best_match, SearchProvider};
use audiomatch::ytdlp::YtDlpProvider;

fn arg_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1).cloned())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let song = match arg_value(&args, "--song") {
        Some(s) => s,
        None => {
            eprintln!(
                "Usage: find_match --song <NAME> [--artist <ARTIST>] [--query <RAW_QUERY>] \
                 [--backend ytdlp|invidious] [--instance <URL>] [--max-results <N>] [--verbose]"
            );
            exit(2);
        }
    };
    let artist = arg_value(&args, "--artist").unwrap_or_default();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: could not read config: {}", e);
        Config::new()
    });

    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v")
        || config.verbose.unwrap_or(false);
    let query = arg_value(&args, "--query")
        .unwrap_or_else(|| format!("{} {}", artist, song).trim().to_string());
    let max_results = arg_value(&args, "--max-results")
        .and_then(|v| v.parse().ok())
        .or(config.max_results)
        .unwrap_or(5);
    let min_gap = Duration::from_millis(config.min_request_gap_ms.unwrap_or(1000));

    let backend = arg_value(&args, "--backend")
        .or_else(|| config.backend.clone())
        .unwrap_or_else(|| "ytdlp".to_string());

    let mut provider: Box<dyn SearchProvider> = match backend.as_str() {
        "ytdlp" => Box::new(YtDlpProvider::new(min_gap)),
        "invidious" => {
            let instance = arg_value(&args, "--instance")
                .or_else(|| config.instance.clone())
                .unwrap_or_else(|| DEFAULT_INSTANCE.to_string());
            Box::new(InvidiousProvider::new(&instance, min_gap))
        }
        other => {
            eprintln!("Unknown backend: {} (expected ytdlp or invidious)", other);
            exit(2);
        }
    };

    if verbose {
        config.print("Loaded defaults");
        println!("Looking for: {} - {}", if artist.is_empty() { "?" } else { artist.as_str() }, song);
        println!();
    }

    match select_best_match(provider.as_mut(), &query, &song, &artist, max_results, verbose) {
        Some(best) => {
            if verbose {
                println!();
                println!("\"{}\" score={} via \"{}\"", best.title, best.score, best.query);
            }
            println!("{}", best.url);
        }
        None => {
            eprintln!("No suitable result for: {}", query);
            exit(1);
        }
    }
}
