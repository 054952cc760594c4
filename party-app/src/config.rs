use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Comma-separated corpus locations: http(s) URLs or file paths.
    pub word_sources: Vec<String>,
    pub fetch_timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        let sources = env::var("WORD_SOURCES").unwrap_or_else(|_| "words.json".to_string());
        Self {
            word_sources: sources
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            fetch_timeout_seconds: env::var("FETCH_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid FETCH_TIMEOUT_SECONDS"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
