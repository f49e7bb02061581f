use permit_finder::permits::{PermitEngine, PermitRuleSet, RuleSetError};
use std::fs;
use std::path::PathBuf;

fn write_rules(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "permit-finder-{}-{}.json",
        name,
        std::process::id()
    ));
    fs::write(&path, contents).expect("write rule file");
    path
}

#[test]
fn rule_file_overrides_location_tiers() {
    let path = write_rules(
        "tiers",
        r#"{
            "locationTiers": {
                "tiers": [
                    { "name": "metro", "multiplier": 2.0, "markers": ["austin"] }
                ],
                "defaultTier": "rural",
                "defaultMultiplier": 0.8
            }
        }"#,
    );

    let rules = PermitRuleSet::load(&path).expect("rules load");
    fs::remove_file(&path).ok();
    let engine = PermitEngine::new(rules);

    let austin = engine.assess("123 Main St, Austin, TX", "new circuit");
    assert_eq!(austin.location.tier, "metro");
    assert_eq!(austin.permits[0].estimated_cost, 150);

    let rural = engine.assess("Route 1, Marfa, TX", "new circuit");
    assert_eq!(rural.location.tier, "rural");
    assert_eq!(rural.permits[0].estimated_cost, 60);
}

#[test]
fn rule_file_overrides_keywords() {
    let path = write_rules(
        "keywords",
        r#"{
            "keywords": {
                "rules": [
                    { "category": "mechanical", "keywords": ["Heat Pump", "mini-split"] }
                ],
                "fallbackTerms": ["upgrade"],
                "fallbackCategory": "mechanical"
            }
        }"#,
    );

    let rules = PermitRuleSet::load(&path).expect("rules load");
    fs::remove_file(&path).ok();
    let engine = PermitEngine::new(rules);

    let permits = engine.required_permits("Austin, TX", "install a heat pump");
    assert_eq!(permits.len(), 1);
    assert_eq!(permits[0].name, "Mechanical Permit");

    let fallback = engine.required_permits("Austin, TX", "energy upgrade");
    assert_eq!(fallback[0].name, "Mechanical Permit");

    assert!(engine
        .required_permits("Austin, TX", "kitchen remodel with new electrical outlets")
        .is_empty());
}

#[test]
fn malformed_rule_file_is_a_startup_error() {
    let path = write_rules(
        "duplicate-ids",
        r#"{
            "catalog": [
                { "id": 1, "name": "Building Permit", "description": "", "baseCost": 10, "processingTime": "1 week", "priority": "high" },
                { "id": 1, "name": "Electrical Permit", "description": "", "baseCost": 10, "processingTime": "1 week", "priority": "high" }
            ]
        }"#,
    );

    let error = PermitRuleSet::load(&path).expect_err("duplicate id rejected");
    fs::remove_file(&path).ok();
    assert!(matches!(error, RuleSetError::DuplicatePermitId(1)));
}
