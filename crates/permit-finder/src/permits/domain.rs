use serde::{Deserialize, Serialize};
use std::fmt;

/// Permit domain a project description can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermitCategory {
    Building,
    Electrical,
    Plumbing,
    Mechanical,
    Demolition,
}

impl PermitCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Building,
            Self::Electrical,
            Self::Plumbing,
            Self::Mechanical,
            Self::Demolition,
        ]
    }

    /// Identifier matched against lower-cased catalog names.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Building => "building",
            Self::Electrical => "electrical",
            Self::Plumbing => "plumbing",
            Self::Mechanical => "mechanical",
            Self::Demolition => "demolition",
        }
    }
}

impl fmt::Display for PermitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermitPriority {
    High,
    Medium,
    Low,
}

impl PermitPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "must have",
            Self::Medium => "probably need",
            Self::Low => "maybe need",
        }
    }
}

/// Static catalog entry priced at its base cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitDefinition {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub base_cost: u32,
    pub processing_time: String,
    pub priority: PermitPriority,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl PermitDefinition {
    /// Catalog entries are tied to categories by their display name.
    pub fn covers(&self, category: PermitCategory) -> bool {
        self.name.to_lowercase().contains(category.key())
    }

    pub fn priced_at(&self, estimated_cost: u32) -> RequiredPermit {
        RequiredPermit {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            estimated_cost,
            processing_time: self.processing_time.clone(),
            priority: self.priority,
            icon: self.icon.clone(),
            requirements: self.requirements.clone(),
        }
    }
}

/// Permit returned to callers, carrying the location-adjusted fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredPermit {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub estimated_cost: u32,
    pub processing_time: String,
    pub priority: PermitPriority,
    pub icon: String,
    pub requirements: Vec<String>,
}

/// Location tier that priced an assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationMatch {
    pub tier: String,
    pub multiplier: f64,
}

/// Inference output together with the intermediate decisions behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitAssessment {
    pub address: String,
    pub categories: Vec<PermitCategory>,
    pub location: LocationMatch,
    pub permits: Vec<RequiredPermit>,
    pub total_estimated_cost: u64,
}

impl PermitAssessment {
    pub fn headline(&self) -> String {
        match self.permits.len() {
            0 => "No permits needed".to_string(),
            1 => "1 permit needed".to_string(),
            count => format!("{count} permits needed"),
        }
    }
}
