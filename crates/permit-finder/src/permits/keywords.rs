use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::domain::PermitCategory;
use super::rules::RuleSetError;

/// Trigger phrases that classify a description into one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: PermitCategory,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new<I, S>(category: PermitCategory, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }
}

/// Ordered keyword table plus the generic-language fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRules {
    rules: Vec<CategoryRule>,
    fallback_terms: Vec<String>,
    fallback_category: PermitCategory,
}

impl KeywordRules {
    pub fn standard() -> Self {
        Self {
            rules: standard_category_rules(),
            fallback_terms: vec!["project".to_string(), "work".to_string()],
            fallback_category: PermitCategory::Building,
        }
    }

    /// Builds a validated table. Keywords are normalised to lower case.
    pub fn new(
        rules: Vec<CategoryRule>,
        fallback_terms: Vec<String>,
        fallback_category: PermitCategory,
    ) -> Result<Self, RuleSetError> {
        let mut seen = HashSet::new();
        let mut normalised = Vec::with_capacity(rules.len());

        for rule in rules {
            if !seen.insert(rule.category) {
                return Err(RuleSetError::DuplicateCategory(rule.category));
            }
            let keywords = normalise_terms(&rule.keywords)
                .ok_or(RuleSetError::BlankKeyword(rule.category))?;
            normalised.push(CategoryRule {
                category: rule.category,
                keywords,
            });
        }

        let fallback_terms = normalise_terms(&fallback_terms)
            .ok_or(RuleSetError::BlankKeyword(fallback_category))?;

        Ok(Self {
            rules: normalised,
            fallback_terms,
            fallback_category,
        })
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn fallback_category(&self) -> PermitCategory {
        self.fallback_category
    }

    /// Classifies a free-text description, preserving rule-table order.
    pub fn match_categories(&self, description: &str) -> Vec<PermitCategory> {
        let lowered = description.to_lowercase();

        let matched: Vec<PermitCategory> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(&lowered))
            .map(|rule| rule.category)
            .collect();

        if matched.is_empty()
            && self
                .fallback_terms
                .iter()
                .any(|term| lowered.contains(term.as_str()))
        {
            return vec![self.fallback_category];
        }

        matched
    }
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self::standard()
    }
}

fn normalise_terms(terms: &[String]) -> Option<Vec<String>> {
    terms
        .iter()
        .map(|term| {
            let lowered = term.trim().to_lowercase();
            (!lowered.is_empty()).then_some(lowered)
        })
        .collect()
}

fn standard_category_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            PermitCategory::Building,
            [
                "renovation",
                "remodel",
                "addition",
                "construction",
                "build",
                "structure",
                "wall",
            ],
        ),
        CategoryRule::new(
            PermitCategory::Electrical,
            [
                "electrical",
                "wiring",
                "outlet",
                "circuit",
                "panel",
                "lighting",
                "switch",
            ],
        ),
        CategoryRule::new(
            PermitCategory::Plumbing,
            [
                "plumbing", "pipe", "bathroom", "sink", "toilet", "shower", "water",
            ],
        ),
        CategoryRule::new(
            PermitCategory::Mechanical,
            [
                "hvac",
                "heating",
                "cooling",
                "air conditioning",
                "furnace",
                "ductwork",
                "ventilation",
            ],
        ),
        CategoryRule::new(
            PermitCategory::Demolition,
            [
                "demolition",
                "remove",
                "tear down",
                "demo",
                "destroy",
                "eliminate",
            ],
        ),
    ]
}
