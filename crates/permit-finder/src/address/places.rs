use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::debug;

use super::{AddressSuggester, SuggestionError, SuggestionSource};

/// Google Places Autocomplete client restricted to street addresses.
pub struct GooglePlacesSuggester {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    description: String,
}

impl GooglePlacesSuggester {
    pub fn new(
        api_key: &str,
        endpoint: &str,
        country: &str,
        timeout: Duration,
    ) -> Result<Self, SuggestionError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            country: country.to_ascii_lowercase(),
        })
    }
}

impl fmt::Debug for GooglePlacesSuggester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GooglePlacesSuggester")
            .field("endpoint", &self.endpoint)
            .field("country", &self.country)
            .finish_non_exhaustive()
    }
}

fn into_suggestions(
    response: AutocompleteResponse,
    limit: usize,
) -> Result<Vec<String>, SuggestionError> {
    if !matches!(response.status.as_str(), "OK" | "ZERO_RESULTS") {
        return Err(SuggestionError::Provider {
            status: response.status,
            message: response
                .error_message
                .unwrap_or_else(|| "no error message".to_string()),
        });
    }

    Ok(response
        .predictions
        .into_iter()
        .map(|prediction| prediction.description)
        .take(limit)
        .collect())
}

#[async_trait]
impl AddressSuggester for GooglePlacesSuggester {
    fn source(&self) -> SuggestionSource {
        SuggestionSource::GooglePlaces
    }

    async fn suggest(&self, query: &str, limit: usize) -> Result<Vec<String>, SuggestionError> {
        let components = format!("country:{}", self.country);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("input", query),
                ("types", "address"),
                ("components", components.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let payload: AutocompleteResponse = response.json().await?;
        debug!(
            status = %payload.status,
            predictions = payload.predictions.len(),
            "places autocomplete answered"
        );
        into_suggestions(payload, limit)
    }
}
