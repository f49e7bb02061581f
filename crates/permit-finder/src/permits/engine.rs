use tracing::{debug, warn};

use super::catalog::PermitCatalog;
use super::domain::{
    LocationMatch, PermitAssessment, PermitCategory, PermitDefinition, RequiredPermit,
};
use super::location::adjusted_cost;
use super::rules::PermitRuleSet;

/// Stateless inference over an immutable rule set; safe to share across requests.
#[derive(Debug, Clone)]
pub struct PermitEngine {
    rules: PermitRuleSet,
}

impl PermitEngine {
    pub fn new(rules: PermitRuleSet) -> Self {
        for category in rules.catalog.uncovered_categories() {
            warn!(%category, "no catalog permit name contains this category");
        }
        Self { rules }
    }

    pub fn standard() -> Self {
        Self::new(PermitRuleSet::standard())
    }

    pub fn rules(&self) -> &PermitRuleSet {
        &self.rules
    }

    pub fn catalog(&self) -> &PermitCatalog {
        &self.rules.catalog
    }

    pub fn match_categories(&self, description: &str) -> Vec<PermitCategory> {
        self.rules.keywords.match_categories(description)
    }

    pub fn select_permits(&self, categories: &[PermitCategory]) -> Vec<&PermitDefinition> {
        self.rules.catalog.select(categories)
    }

    /// Prices every permit with the single multiplier resolved for `address`.
    pub fn adjust_costs(
        &self,
        permits: &[&PermitDefinition],
        address: &str,
    ) -> Vec<RequiredPermit> {
        let location = self.rules.pricing.resolve(address);
        price(permits, &location)
    }

    pub fn required_permits(&self, address: &str, description: &str) -> Vec<RequiredPermit> {
        let categories = self.match_categories(description);
        let selected = self.select_permits(&categories);
        debug!(
            categories = ?categories,
            permits = selected.len(),
            "matched project description"
        );
        self.adjust_costs(&selected, address)
    }

    pub fn assess(&self, address: &str, description: &str) -> PermitAssessment {
        let categories = self.match_categories(description);
        let location = self.rules.pricing.resolve(address);
        let permits = price(&self.select_permits(&categories), &location);
        let total_estimated_cost = permits
            .iter()
            .map(|permit| u64::from(permit.estimated_cost))
            .sum();

        debug!(
            categories = ?categories,
            tier = %location.tier,
            permits = permits.len(),
            "assessed permit requirements"
        );

        PermitAssessment {
            address: address.to_string(),
            categories,
            location,
            permits,
            total_estimated_cost,
        }
    }

    /// Every catalog permit at its base cost.
    pub fn all_permits(&self) -> Vec<RequiredPermit> {
        self.rules
            .catalog
            .permits()
            .iter()
            .map(|permit| permit.priced_at(permit.base_cost))
            .collect()
    }
}

fn price(permits: &[&PermitDefinition], location: &LocationMatch) -> Vec<RequiredPermit> {
    permits
        .iter()
        .map(|permit| permit.priced_at(adjusted_cost(permit.base_cost, location.multiplier)))
        .collect()
}

impl Default for PermitEngine {
    fn default() -> Self {
        Self::standard()
    }
}
