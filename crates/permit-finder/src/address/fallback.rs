use async_trait::async_trait;

use super::{AddressSuggester, SuggestionError, SuggestionSource};

/// Fixed candidate addresses for offline or credential-free operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAddressBook {
    addresses: Vec<String>,
}

impl StaticAddressBook {
    pub fn standard() -> Self {
        Self::new([
            "1247 Oak Street, San Francisco, CA 94117",
            "3865 Mission St, San Francisco, CA 94110",
            "2134 Fillmore Street, San Francisco, CA 94115",
            "892 Valencia St, San Francisco, CA 94110",
            "1567 Castro Street, San Francisco, CA 94114",
            "445 Divisadero St, San Francisco, CA 94117",
        ])
    }

    pub fn new<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            addresses: addresses.into_iter().map(Into::into).collect(),
        }
    }

    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    /// Case-insensitive substring filter, in list order.
    pub fn matching(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        self.addresses
            .iter()
            .filter(|address| address.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }
}

impl Default for StaticAddressBook {
    fn default() -> Self {
        Self::standard()
    }
}

#[async_trait]
impl AddressSuggester for StaticAddressBook {
    fn source(&self) -> SuggestionSource {
        SuggestionSource::Static
    }

    async fn suggest(&self, query: &str, limit: usize) -> Result<Vec<String>, SuggestionError> {
        Ok(self.matching(query, limit))
    }
}
