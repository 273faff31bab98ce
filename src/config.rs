use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Configuration defaults that can be saved to a file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Search backend: "ytdlp" or "invidious"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,

    /// Invidious instance base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Candidates fetched per query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,

    /// Minimum gap between provider requests, milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_request_gap_ms: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl Config {
    /// Create a new empty config
    pub fn new() -> Self {
        Config {
            backend: None,
            instance: None,
            max_results: None,
            min_request_gap_ms: None,
            verbose: None,
        }
    }

    /// Get the config file path (~/.state/audiomatch/defaults.toml)
    pub fn get_config_path() -> Result<PathBuf, io::Error> {
        let home = std::env::var("HOME").map_err(|_| {
            io::Error::new(io::ErrorKind::NotFound, "HOME environment variable not set")
        })?;

        let config_dir = Path::new(&home).join(".state").join("audiomatch");
        Ok(config_dir.join("defaults.toml"))
    }

    /// Load config from file
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            // Return empty config if file doesn't exist
            return Ok(Config::new());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        fs::write(&config_path, toml_string)?;

        Ok(())
    }

    /// Merge this config with another, preferring values from other
    pub fn merge(&mut self, other: &Config) {
        if other.backend.is_some() {
            self.backend = other.backend.clone();
        }
        if other.instance.is_some() {
            self.instance = other.instance.clone();
        }
        if other.max_results.is_some() {
            self.max_results = other.max_results;
        }
        if other.min_request_gap_ms.is_some() {
            self.min_request_gap_ms = other.min_request_gap_ms;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Print the config in a human-readable format
    pub fn print(&self, title: &str) {
        println!("{}:", title);

        if let Some(backend) = &self.backend {
            println!("  Backend:          {}", backend);
        }
        if let Some(instance) = &self.instance {
            println!("  Instance:         {}", instance);
        }
        if let Some(max_results) = self.max_results {
            println!("  Max results:      {}", max_results);
        }
        if let Some(gap) = self.min_request_gap_ms {
            println!("  Min request gap:  {} ms", gap);
        }
        if let Some(verbose) = self.verbose {
            println!("  Verbose:          {}", if verbose { "on" } else { "off" });
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Config::new();
        base.backend = Some("ytdlp".to_string());
        base.max_results = Some(5);

        let mut other = Config::new();
        other.backend = Some("invidious".to_string());

        base.merge(&other);
        assert_eq!(base.backend.as_deref(), Some("invidious"));
        // Unset fields in other leave base untouched
        assert_eq!(base.max_results, Some(5));
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let mut config = Config::new();
        config.backend = Some("invidious".to_string());
        config.min_request_gap_ms = Some(1500);

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.backend.as_deref(), Some("invidious"));
        assert_eq!(parsed.min_request_gap_ms, Some(1500));
        assert!(parsed.instance.is_none());
    }
}
