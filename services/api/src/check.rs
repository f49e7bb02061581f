use crate::infra::load_engine;
use clap::Args;
use permit_finder::address::{AddressLookup, AddressSuggestions};
use permit_finder::config::AppConfig;
use permit_finder::error::AppError;
use permit_finder::permits::{PermitAssessment, RequiredPermit};

/// Requirements shown per permit before collapsing the rest.
const VISIBLE_REQUIREMENTS: usize = 3;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Street address of the project
    #[arg(long)]
    pub(crate) address: String,
    /// Free-text description of the work
    #[arg(long)]
    pub(crate) description: String,
    /// Print the assessment as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AddressSuggestArgs {
    /// Partial address typed so far
    pub(crate) query: String,
}

pub(crate) fn run_permit_check(config: &AppConfig, args: CheckArgs) -> Result<(), AppError> {
    let engine = load_engine(&config.permits)?;
    let assessment = engine.assess(&args.address, &args.description);

    if args.json {
        let rendered = serde_json::to_string_pretty(&assessment)?;
        println!("{rendered}");
    } else {
        print!("{}", render_assessment(&args.description, &assessment));
    }
    Ok(())
}

pub(crate) fn run_catalog_listing(config: &AppConfig) -> Result<(), AppError> {
    let engine = load_engine(&config.permits)?;

    println!("Permit catalog");
    for permit in engine.all_permits() {
        println!(
            "- #{} {} | ${} | {} | {}",
            permit.id,
            permit.name,
            permit.estimated_cost,
            permit.processing_time,
            permit.priority.label()
        );
    }
    Ok(())
}

pub(crate) async fn run_address_suggest(
    config: &AppConfig,
    args: AddressSuggestArgs,
) -> Result<(), AppError> {
    let lookup = AddressLookup::from_config(&config.address);
    let suggestions = lookup.suggest(&args.query).await;
    print!("{}", render_suggestions(&suggestions));
    Ok(())
}

fn render_assessment(description: &str, assessment: &PermitAssessment) -> String {
    let mut out = String::new();
    out.push_str("Permit check\n");
    out.push_str(&format!("Project address: {}\n", assessment.address));
    out.push_str(&format!("What you're building: {}\n", description));
    out.push_str(&format!(
        "Location tier: {} (x{:.1})\n",
        assessment.location.tier, assessment.location.multiplier
    ));

    if assessment.permits.is_empty() {
        out.push_str("\nGood news! No permits needed for this project.\n");
        return out;
    }

    out.push_str(&format!(
        "\n{} | Total fees: ${}\n",
        assessment.headline(),
        assessment.total_estimated_cost
    ));
    for permit in &assessment.permits {
        out.push_str(&render_permit(permit));
    }
    out
}

fn render_permit(permit: &RequiredPermit) -> String {
    let mut out = format!(
        "\n{} {} [{}]\n  City fee: ${} | Typical wait: {}\n",
        permit.icon,
        permit.name,
        permit.priority.label(),
        permit.estimated_cost,
        permit.processing_time
    );
    for requirement in permit.requirements.iter().take(VISIBLE_REQUIREMENTS) {
        out.push_str(&format!("  - {requirement}\n"));
    }
    let hidden = permit
        .requirements
        .len()
        .saturating_sub(VISIBLE_REQUIREMENTS);
    if hidden > 0 {
        out.push_str(&format!("  +{hidden} more things\n"));
    }
    out
}

fn render_suggestions(suggestions: &AddressSuggestions) -> String {
    if suggestions.suggestions.is_empty() {
        return format!(
            "No address suggestions for '{}' ({})\n",
            suggestions.query, suggestions.source
        );
    }

    let mut out = format!(
        "Suggestions for '{}' ({})\n",
        suggestions.query, suggestions.source
    );
    for suggestion in &suggestions.suggestions {
        out.push_str(&format!("- {suggestion}\n"));
    }
    out
}
