use std::time::Duration;

use futures_util::future::try_join_all;
use party_types::CorpusError;
use serde::Deserialize;
use tracing::info;

use crate::config::Config;

/// One group of the corpus wire format: `[{"words": [...]}, ...]`. Groups
/// are a packaging detail of the word files; the game only sees the
/// flattened pool.
#[derive(Debug, Clone, Deserialize)]
pub struct WordGroup {
    pub words: Vec<String>,
}

/// Fetches and merges the theme word pool from the configured sources.
pub struct CorpusLoader {
    sources: Vec<String>,
    timeout: Duration,
}

impl CorpusLoader {
    pub fn new(sources: Vec<String>, timeout: Duration) -> Self {
        Self { sources, timeout }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.word_sources.clone(),
            Duration::from_secs(config.fetch_timeout_seconds),
        )
    }

    /// Load every source concurrently and flatten all groups into one pool,
    /// source order first, group order within a source second. Any failing
    /// or timed-out source fails the whole load; an empty merged pool is an
    /// error of its own.
    pub async fn load(&self) -> Result<Vec<String>, CorpusError> {
        let fetches = self.sources.iter().map(|source| self.fetch_source(source));
        let groups = try_join_all(fetches).await?;

        let words: Vec<String> = groups
            .into_iter()
            .flatten()
            .flat_map(|group| group.words)
            .collect();
        if words.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }

        info!(
            sources = self.sources.len(),
            words = words.len(),
            "word corpus loaded"
        );
        Ok(words)
    }

    async fn fetch_source(&self, location: &str) -> Result<Vec<WordGroup>, CorpusError> {
        let fetch = async {
            let raw = if location.starts_with("http://") || location.starts_with("https://") {
                let response = reqwest::get(location)
                    .await
                    .and_then(|response| response.error_for_status())
                    .map_err(|e| fetch_error(location, &e.to_string()))?;
                response
                    .text()
                    .await
                    .map_err(|e| fetch_error(location, &e.to_string()))?
            } else {
                tokio::fs::read_to_string(location)
                    .await
                    .map_err(|e| fetch_error(location, &e.to_string()))?
            };
            parse_corpus(location, &raw)
        };

        match tokio::time::timeout(self.timeout, fetch).await {
            Ok(result) => result,
            Err(_) => Err(CorpusError::Timeout {
                location: location.to_string(),
                seconds: self.timeout.as_secs(),
            }),
        }
    }
}

/// Parse one source body into its word groups.
pub fn parse_corpus(location: &str, raw: &str) -> Result<Vec<WordGroup>, CorpusError> {
    serde_json::from_str(raw).map_err(|e| CorpusError::Malformed {
        location: location.to_string(),
        message: e.to_string(),
    })
}

fn fetch_error(location: &str, message: &str) -> CorpusError {
    CorpusError::Fetch {
        location: location.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_source(name: &str, body: &str) -> (PathBuf, String) {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, body).unwrap();
        (path.clone(), path.to_string_lossy().into_owned())
    }

    #[test]
    fn test_parse_corpus_groups() {
        let raw = r#"[{"words": ["sushi", "ramen"]}, {"words": ["mochi"]}]"#;
        let groups = parse_corpus("inline", raw).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].words, vec!["sushi", "ramen"]);
        assert_eq!(groups[1].words, vec!["mochi"]);
    }

    #[test]
    fn test_parse_corpus_rejects_malformed_json() {
        let result = parse_corpus("inline", r#"{"words": "not-a-group-list"}"#);
        assert!(matches!(result, Err(CorpusError::Malformed { .. })));
    }

    #[tokio::test]
    async fn test_load_merges_sources_in_order() {
        let (path_a, source_a) =
            temp_source("party_corpus_merge_a.json", r#"[{"words": ["sushi", "ramen"]}]"#);
        let (path_b, source_b) = temp_source(
            "party_corpus_merge_b.json",
            r#"[{"words": ["tempura"]}, {"words": ["mochi"]}]"#,
        );

        let loader = CorpusLoader::new(vec![source_a, source_b], Duration::from_secs(5));
        let words = loader.load().await.unwrap();
        assert_eq!(words, vec!["sushi", "ramen", "tempura", "mochi"]);

        std::fs::remove_file(path_a).ok();
        std::fs::remove_file(path_b).ok();
    }

    #[tokio::test]
    async fn test_load_surfaces_missing_source() {
        let loader = CorpusLoader::new(
            vec!["/nonexistent/party_corpus.json".to_string()],
            Duration::from_secs(5),
        );
        let result = loader.load().await;
        assert!(matches!(result, Err(CorpusError::Fetch { .. })));
    }

    #[tokio::test]
    async fn test_load_rejects_empty_pool() {
        let (path, source) = temp_source("party_corpus_empty.json", r#"[{"words": []}]"#);

        let loader = CorpusLoader::new(vec![source], Duration::from_secs(5));
        let result = loader.load().await;
        assert!(matches!(result, Err(CorpusError::EmptyCorpus)));

        std::fs::remove_file(path).ok();
    }
}
