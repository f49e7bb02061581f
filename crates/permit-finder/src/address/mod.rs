//! Address autocomplete behind a provider capability with a static fallback.

mod fallback;
mod places;
pub mod router;

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use tracing::warn;

use crate::config::AddressConfig;

pub use fallback::StaticAddressBook;
pub use places::GooglePlacesSuggester;
pub use router::{address_router, SuggestionQuery};

/// Where a set of suggestions came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    GooglePlaces,
    Static,
}

impl SuggestionSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::GooglePlaces => "google_places",
            Self::Static => "static",
        }
    }
}

impl fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("address provider request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("address provider returned {status}: {message}")]
    Provider { status: String, message: String },
}

/// Request URLs carry the API key, so they are dropped before the error is kept.
impl From<reqwest::Error> for SuggestionError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

/// Source of candidate addresses for a partially typed query.
#[async_trait]
pub trait AddressSuggester: fmt::Debug + Send + Sync {
    fn source(&self) -> SuggestionSource;

    async fn suggest(&self, query: &str, limit: usize) -> Result<Vec<String>, SuggestionError>;
}

/// Suggestions returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressSuggestions {
    pub query: String,
    pub source: SuggestionSource,
    pub suggestions: Vec<String>,
}

/// Provider selected at startup plus the local list used when it fails.
#[derive(Debug)]
pub struct AddressLookup {
    provider: Box<dyn AddressSuggester>,
    fallback: StaticAddressBook,
    limit: usize,
    min_query_len: usize,
}

impl AddressLookup {
    pub fn new(
        provider: Box<dyn AddressSuggester>,
        fallback: StaticAddressBook,
        limit: usize,
        min_query_len: usize,
    ) -> Self {
        Self {
            provider,
            fallback,
            limit,
            min_query_len,
        }
    }

    /// Uses Google Places when an API key is configured, the static list otherwise.
    pub fn from_config(config: &AddressConfig) -> Self {
        let fallback = StaticAddressBook::standard();
        let provider: Box<dyn AddressSuggester> = match config.google_maps_api_key.as_deref() {
            Some(api_key) => match GooglePlacesSuggester::new(
                api_key,
                &config.places_endpoint,
                &config.country,
                config.request_timeout,
            ) {
                Ok(places) => Box::new(places),
                Err(err) => {
                    warn!(error = %err, "unable to build address provider, using static suggestions");
                    Box::new(fallback.clone())
                }
            },
            None => Box::new(fallback.clone()),
        };

        Self::new(
            provider,
            fallback,
            config.suggestion_limit,
            config.min_query_len,
        )
    }

    pub fn offline(limit: usize, min_query_len: usize) -> Self {
        let fallback = StaticAddressBook::standard();
        Self::new(Box::new(fallback.clone()), fallback, limit, min_query_len)
    }

    pub fn source(&self) -> SuggestionSource {
        self.provider.source()
    }

    /// Never fails: provider errors are logged and answered from the static list.
    pub async fn suggest(&self, query: &str) -> AddressSuggestions {
        let query = query.trim();

        if query.chars().count() < self.min_query_len {
            return AddressSuggestions {
                query: query.to_string(),
                source: self.provider.source(),
                suggestions: Vec::new(),
            };
        }

        match self.provider.suggest(query, self.limit).await {
            Ok(mut suggestions) => {
                suggestions.truncate(self.limit);
                AddressSuggestions {
                    query: query.to_string(),
                    source: self.provider.source(),
                    suggestions,
                }
            }
            Err(err) => {
                warn!(
                    error = %err,
                    provider = %self.provider.source(),
                    "address provider unavailable, using static suggestions"
                );
                AddressSuggestions {
                    query: query.to_string(),
                    source: self.fallback.source(),
                    suggestions: self.fallback.matching(query, self.limit),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FailingProvider;

    #[async_trait]
    impl AddressSuggester for FailingProvider {
        fn source(&self) -> SuggestionSource {
            SuggestionSource::GooglePlaces
        }

        async fn suggest(
            &self,
            _query: &str,
            _limit: usize,
        ) -> Result<Vec<String>, SuggestionError> {
            Err(SuggestionError::Provider {
                status: "REQUEST_DENIED".to_string(),
                message: "API key invalid".to_string(),
            })
        }
    }

    #[derive(Debug)]
    struct ChattyProvider;

    #[async_trait]
    impl AddressSuggester for ChattyProvider {
        fn source(&self) -> SuggestionSource {
            SuggestionSource::GooglePlaces
        }

        async fn suggest(
            &self,
            query: &str,
            _limit: usize,
        ) -> Result<Vec<String>, SuggestionError> {
            Ok((1..=10).map(|n| format!("{n} {query} Ave")).collect())
        }
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_static_list() {
        let lookup = AddressLookup::new(
            Box::new(FailingProvider),
            StaticAddressBook::standard(),
            4,
            3,
        );

        let result = lookup.suggest("castro").await;
        assert_eq!(result.source, SuggestionSource::Static);
        assert_eq!(
            result.suggestions,
            vec!["1567 Castro Street, San Francisco, CA 94114".to_string()]
        );
    }

    #[tokio::test]
    async fn provider_results_are_capped() {
        let lookup = AddressLookup::new(
            Box::new(ChattyProvider),
            StaticAddressBook::standard(),
            4,
            3,
        );

        let result = lookup.suggest("Elm").await;
        assert_eq!(result.source, SuggestionSource::GooglePlaces);
        assert_eq!(result.suggestions.len(), 4);
        assert_eq!(result.suggestions[0], "1 Elm Ave");
    }

    #[tokio::test]
    async fn short_queries_skip_the_provider() {
        let lookup = AddressLookup::new(
            Box::new(FailingProvider),
            StaticAddressBook::standard(),
            4,
            3,
        );

        let result = lookup.suggest("  sa ").await;
        assert_eq!(result.query, "sa");
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn provider_error_message_includes_detail() {
        let error = SuggestionError::Provider {
            status: "REQUEST_DENIED".to_string(),
            message: "key expired".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "address provider returned REQUEST_DENIED: key expired"
        );
    }

    #[test]
    fn config_without_key_selects_static_provider() {
        let config = AddressConfig::default();
        let lookup = AddressLookup::from_config(&config);
        assert_eq!(lookup.source(), SuggestionSource::Static);
    }

    #[test]
    fn config_with_key_selects_google_places() {
        let config = AddressConfig {
            google_maps_api_key: Some("test-key".to_string()),
            ..AddressConfig::default()
        };
        let lookup = AddressLookup::from_config(&config);
        assert_eq!(lookup.source(), SuggestionSource::GooglePlaces);
    }
}
