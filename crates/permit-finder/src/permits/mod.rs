//! Permit inference: keyword classification, catalog selection and
//! location-based fee adjustment.

pub mod catalog;
pub mod domain;
mod engine;
pub mod keywords;
pub mod location;
pub mod router;
pub mod rules;

#[cfg(test)]
mod tests;

pub use catalog::PermitCatalog;
pub use domain::{
    LocationMatch, PermitAssessment, PermitCategory, PermitDefinition, PermitPriority,
    RequiredPermit,
};
pub use engine::PermitEngine;
pub use keywords::{CategoryRule, KeywordRules};
pub use location::{LocationPricing, LocationTier};
pub use router::{permit_router, PermitRequest};
pub use rules::{PermitRuleSet, RuleSetError};
