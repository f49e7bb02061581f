use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::catalog::PermitCatalog;
use super::domain::{PermitCategory, PermitDefinition};
use super::keywords::{CategoryRule, KeywordRules};
use super::location::{LocationPricing, LocationTier};

/// Static tables rejected while building a rule set. Raised at startup only.
#[derive(Debug, thiserror::Error)]
pub enum RuleSetError {
    #[error("permit catalog is empty")]
    EmptyCatalog,
    #[error("permit id {0} appears more than once in the catalog")]
    DuplicatePermitId(u32),
    #[error("permit {0} has a blank name")]
    BlankPermitName(u32),
    #[error("category '{0}' has a blank keyword")]
    BlankKeyword(PermitCategory),
    #[error("category '{0}' is declared more than once")]
    DuplicateCategory(PermitCategory),
    #[error("location tier '{0}' has a blank marker")]
    BlankMarker(String),
    #[error("location tier '{tier}' has invalid multiplier {multiplier}")]
    InvalidMultiplier { tier: String, multiplier: f64 },
    #[error("unable to read rule file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to parse rule file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Catalog, keyword table and location pricing loaded once per process.
#[derive(Debug, Clone, PartialEq)]
pub struct PermitRuleSet {
    pub catalog: PermitCatalog,
    pub keywords: KeywordRules,
    pub pricing: LocationPricing,
}

impl PermitRuleSet {
    pub fn standard() -> Self {
        Self {
            catalog: PermitCatalog::standard(),
            keywords: KeywordRules::standard(),
            pricing: LocationPricing::standard(),
        }
    }

    /// Reads a JSON overlay. Sections missing from the file keep the shipped tables.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RuleSetError> {
        let file: RuleSetFile = serde_json::from_reader(reader)?;
        let mut rules = Self::standard();

        if let Some(catalog) = file.catalog {
            rules.catalog = PermitCatalog::new(catalog)?;
        }
        if let Some(keywords) = file.keywords {
            rules.keywords = KeywordRules::new(
                keywords.rules,
                keywords.fallback_terms,
                keywords.fallback_category,
            )?;
        }
        if let Some(pricing) = file.location_tiers {
            rules.pricing = LocationPricing::new(
                pricing.tiers,
                pricing.default_tier,
                pricing.default_multiplier,
            )?;
        }

        Ok(rules)
    }

    pub fn load(path: &Path) -> Result<Self, RuleSetError> {
        let file = File::open(path).map_err(|source| RuleSetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_optional_path(path: Option<&Path>) -> Result<Self, RuleSetError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::standard()),
        }
    }
}

impl Default for PermitRuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RuleSetFile {
    #[serde(default)]
    catalog: Option<Vec<PermitDefinition>>,
    #[serde(default)]
    keywords: Option<KeywordSection>,
    #[serde(default)]
    location_tiers: Option<PricingSection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeywordSection {
    rules: Vec<CategoryRule>,
    #[serde(default = "default_fallback_terms")]
    fallback_terms: Vec<String>,
    #[serde(default = "default_fallback_category")]
    fallback_category: PermitCategory,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PricingSection {
    tiers: Vec<LocationTier>,
    #[serde(default = "default_tier_name")]
    default_tier: String,
    #[serde(default = "default_multiplier")]
    default_multiplier: f64,
}

fn default_fallback_terms() -> Vec<String> {
    vec!["project".to_string(), "work".to_string()]
}

fn default_fallback_category() -> PermitCategory {
    PermitCategory::Building
}

fn default_tier_name() -> String {
    "standard".to_string()
}

fn default_multiplier() -> f64 {
    1.0
}
