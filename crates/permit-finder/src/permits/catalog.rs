use std::collections::HashSet;

use super::domain::{PermitCategory, PermitDefinition, PermitPriority};
use super::rules::RuleSetError;

/// Immutable list of every permit the engine can recommend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermitCatalog {
    permits: Vec<PermitDefinition>,
}

impl PermitCatalog {
    pub fn standard() -> Self {
        Self {
            permits: standard_permits(),
        }
    }

    pub fn new(permits: Vec<PermitDefinition>) -> Result<Self, RuleSetError> {
        if permits.is_empty() {
            return Err(RuleSetError::EmptyCatalog);
        }

        let mut ids = HashSet::new();
        for permit in &permits {
            if !ids.insert(permit.id) {
                return Err(RuleSetError::DuplicatePermitId(permit.id));
            }
            if permit.name.trim().is_empty() {
                return Err(RuleSetError::BlankPermitName(permit.id));
            }
        }

        Ok(Self { permits })
    }

    pub fn permits(&self) -> &[PermitDefinition] {
        &self.permits
    }

    /// Selects entries per category in order, keeping the first selection of each id.
    pub fn select(&self, categories: &[PermitCategory]) -> Vec<&PermitDefinition> {
        let mut seen = HashSet::new();
        categories
            .iter()
            .flat_map(|category| {
                self.permits
                    .iter()
                    .filter(move |permit| permit.covers(*category))
            })
            .filter(|permit| seen.insert(permit.id))
            .collect()
    }

    pub fn uncovered_categories(&self) -> Vec<PermitCategory> {
        PermitCategory::ordered()
            .into_iter()
            .filter(|category| !self.permits.iter().any(|permit| permit.covers(*category)))
            .collect()
    }
}

impl Default for PermitCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[allow(clippy::too_many_arguments)]
fn permit(
    id: u32,
    name: &str,
    description: &str,
    base_cost: u32,
    processing_time: &str,
    priority: PermitPriority,
    icon: &str,
    requirements: [&str; 4],
) -> PermitDefinition {
    PermitDefinition {
        id,
        name: name.to_string(),
        description: description.to_string(),
        base_cost,
        processing_time: processing_time.to_string(),
        priority,
        icon: icon.to_string(),
        requirements: requirements.iter().map(|item| item.to_string()).collect(),
    }
}

fn standard_permits() -> Vec<PermitDefinition> {
    vec![
        permit(
            1,
            "Building Permit",
            "Required for structural modifications, additions, or new construction. This permit ensures your project meets local building codes and safety standards.",
            150,
            "2-3 weeks",
            PermitPriority::High,
            "🏗️",
            [
                "Detailed construction plans and blueprints",
                "Site survey and property documentation",
                "Contractor license verification",
                "Structural engineer approval (if applicable)",
            ],
        ),
        permit(
            2,
            "Electrical Permit",
            "Required when adding, modifying, or upgrading electrical systems. Covers new circuits, panel upgrades, and major electrical work.",
            75,
            "1-2 weeks",
            PermitPriority::High,
            "⚡",
            [
                "Electrical system diagram",
                "Licensed electrician information",
                "Load calculation documentation",
                "Equipment specifications",
            ],
        ),
        permit(
            3,
            "Plumbing Permit",
            "Required for plumbing modifications including new fixtures, pipe rerouting, or water line changes.",
            65,
            "1-2 weeks",
            PermitPriority::Medium,
            "🔧",
            [
                "Plumbing fixture layout",
                "Licensed plumber certification",
                "Water pressure test results",
                "Pipe material specifications",
            ],
        ),
        permit(
            4,
            "Mechanical Permit",
            "Required for HVAC system installation, modification, or major repairs. Includes heating, cooling, and ventilation systems.",
            85,
            "1-3 weeks",
            PermitPriority::Medium,
            "🌡️",
            [
                "HVAC system specifications",
                "Energy efficiency calculations",
                "Ductwork layout plans",
                "Licensed HVAC contractor information",
            ],
        ),
        permit(
            5,
            "Demolition Permit",
            "Required before removing walls, structures, or significant building components. Ensures safe demolition practices.",
            45,
            "1 week",
            PermitPriority::High,
            "🔨",
            [
                "Demolition plan and scope",
                "Structural impact assessment",
                "Asbestos inspection report",
                "Debris disposal plan",
            ],
        ),
    ]
}
