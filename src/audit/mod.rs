pub mod optimization;
pub mod patterns;
pub mod recommend;
pub mod redundancy;
pub mod score;

use crate::error::{AuditError, Result};
use crate::llm::TextGenerator;
use crate::types::audit::{
    AuditSummary, Optimization, OptimizationType, Redundancy, TechAuditInput, TechAuditResult,
};
use crate::types::tool::SelectedTool;
use patterns::PatternCatalog;

/// Runs the full audit pipeline for one request.
///
/// Inputs are validated first; nothing is computed for a rejected input.
/// Generation failures are absorbed by the recommendation fallback, so the
/// only other failure is an internal computation error.
pub fn run_audit(
    input: &TechAuditInput,
    catalog: &PatternCatalog,
    generator: &dyn TextGenerator,
) -> Result<TechAuditResult> {
    input.validate()?;

    let total_monthly_cost = input.total_monthly_cost();
    ensure_finite("totalMonthlyCost", total_monthly_cost)?;
    let redundancies = redundancy::identify_redundancies(&input.selected_tools, catalog);
    let optimizations = optimization::find_optimizations(&input.selected_tools);
    let score = score::calculate_score(input, &redundancies)?;
    let summary = create_summary(&redundancies, &optimizations, &input.selected_tools)?;
    let recommendations =
        recommend::generate_recommendations(input, &redundancies, &optimizations, generator);

    tracing::info!(
        score,
        total_monthly_cost,
        redundancies = summary.redundancy_count,
        potential_savings = summary.potential_savings,
        "audit complete"
    );

    Ok(TechAuditResult {
        score,
        total_monthly_cost,
        redundancies,
        optimizations,
        recommendations,
        summary,
    })
}

pub fn create_summary(
    redundancies: &[Redundancy],
    optimizations: &[Optimization],
    tools: &[SelectedTool],
) -> Result<AuditSummary> {
    let redundancy_savings: f64 = redundancies
        .iter()
        .map(|redundancy| redundancy.potential_savings)
        .sum();
    let cost_savings: f64 = optimizations
        .iter()
        .filter(|optimization| optimization.kind == OptimizationType::Cost)
        .map(|optimization| optimization.impact)
        .sum();
    let potential_savings = redundancy_savings + cost_savings;
    ensure_finite("potentialSavings", potential_savings)?;

    let daily = tools.iter().filter(|tool| tool.is_daily()).count();
    let efficiency_score = if tools.is_empty() {
        0
    } else {
        (100.0 * daily as f64 / tools.len() as f64).round() as u8
    };

    Ok(AuditSummary {
        potential_savings: potential_savings.max(0.0).round() as u64,
        efficiency_score,
        redundancy_count: redundancies.len(),
        underutilized_tools: tools.iter().filter(|tool| tool.is_rarely_used()).count(),
    })
}

fn ensure_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        tracing::error!(field, "non-finite amount during audit");
        Err(AuditError::Computation(format!("{field} is not a finite amount")))
    }
}

/// Currency amount for prose: at most two decimals, trailing zeros dropped.
pub fn format_amount(amount: f64) -> String {
    let rounded = format!("{amount:.2}");
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
