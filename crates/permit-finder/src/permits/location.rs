use serde::{Deserialize, Serialize};

use super::domain::LocationMatch;
use super::rules::RuleSetError;

/// Cost bracket keyed by substrings found in an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationTier {
    pub name: String,
    pub multiplier: f64,
    pub markers: Vec<String>,
}

impl LocationTier {
    pub fn new<I, S>(name: impl Into<String>, multiplier: f64, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            multiplier,
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Tiers are evaluated in declaration order; the first hit prices the request.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationPricing {
    tiers: Vec<LocationTier>,
    default_tier: String,
    default_multiplier: f64,
}

impl LocationPricing {
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                LocationTier::new(
                    "premium",
                    1.5,
                    ["san francisco", "manhattan", "beverly hills"],
                ),
                LocationTier::new("moderate", 1.2, ["california", "new york", "washington"]),
            ],
            default_tier: "standard".to_string(),
            default_multiplier: 1.0,
        }
    }

    pub fn new(
        tiers: Vec<LocationTier>,
        default_tier: impl Into<String>,
        default_multiplier: f64,
    ) -> Result<Self, RuleSetError> {
        let default_tier = default_tier.into();
        validate_multiplier(&default_tier, default_multiplier)?;

        let tiers = tiers
            .into_iter()
            .map(|tier| {
                validate_multiplier(&tier.name, tier.multiplier)?;
                let markers = tier
                    .markers
                    .iter()
                    .map(|marker| {
                        let lowered = marker.trim().to_lowercase();
                        if lowered.is_empty() {
                            Err(RuleSetError::BlankMarker(tier.name.clone()))
                        } else {
                            Ok(lowered)
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(LocationTier { markers, ..tier })
            })
            .collect::<Result<Vec<_>, RuleSetError>>()?;

        Ok(Self {
            tiers,
            default_tier,
            default_multiplier,
        })
    }

    pub fn tiers(&self) -> &[LocationTier] {
        &self.tiers
    }

    /// Resolves the tier for an address. Evaluated once per request.
    pub fn resolve(&self, address: &str) -> LocationMatch {
        let lowered = address.to_lowercase();
        self.tiers
            .iter()
            .find(|tier| {
                tier.markers
                    .iter()
                    .any(|marker| lowered.contains(marker.as_str()))
            })
            .map(|tier| LocationMatch {
                tier: tier.name.clone(),
                multiplier: tier.multiplier,
            })
            .unwrap_or_else(|| LocationMatch {
                tier: self.default_tier.clone(),
                multiplier: self.default_multiplier,
            })
    }
}

impl Default for LocationPricing {
    fn default() -> Self {
        Self::standard()
    }
}

/// Scales a base fee, rounding halves up.
pub fn adjusted_cost(base_cost: u32, multiplier: f64) -> u32 {
    let scaled = (f64::from(base_cost) * multiplier).round();
    if scaled >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        scaled as u32
    }
}

fn validate_multiplier(tier: &str, multiplier: f64) -> Result<(), RuleSetError> {
    if multiplier.is_finite() && multiplier > 0.0 {
        Ok(())
    } else {
        Err(RuleSetError::InvalidMultiplier {
            tier: tier.to_string(),
            multiplier,
        })
    }
}
