use super::format_amount;
use crate::error::GenerationError;
use crate::llm::TextGenerator;
use crate::types::audit::{Optimization, Redundancy, TechAuditInput};

pub const MAX_RECOMMENDATIONS: usize = 5;

const GENERIC_RECOMMENDATIONS: [&str; 3] = [
    "Conduct quarterly tech stack reviews to identify new optimization opportunities",
    "Implement usage tracking to better understand tool ROI",
    "Consider integrated platforms to reduce tool sprawl",
];

/// Asks the generator for advice and falls back to templated text on any
/// failure. Never fails itself.
pub fn generate_recommendations(
    input: &TechAuditInput,
    redundancies: &[Redundancy],
    optimizations: &[Optimization],
    generator: &dyn TextGenerator,
) -> Vec<String> {
    let prompt = build_prompt(input, redundancies, optimizations);
    let generated = generator
        .generate(&prompt)
        .and_then(|response| parse_recommendations(&response));

    match generated {
        Ok(mut recommendations) => {
            recommendations.truncate(MAX_RECOMMENDATIONS);
            tracing::debug!(
                generator = generator.name(),
                count = recommendations.len(),
                "recommendations generated"
            );
            recommendations
        }
        Err(GenerationError::Disabled) => {
            tracing::debug!("text generation disabled, using fallback recommendations");
            fallback_recommendations(redundancies, optimizations)
        }
        Err(e) => {
            tracing::warn!(
                generator = generator.name(),
                error = %e,
                "recommendation generation failed, using fallback"
            );
            fallback_recommendations(redundancies, optimizations)
        }
    }
}

pub fn build_prompt(
    input: &TechAuditInput,
    redundancies: &[Redundancy],
    optimizations: &[Optimization],
) -> String {
    let tools = input
        .selected_tools
        .iter()
        .map(|tool| {
            format!(
                "{} (${}/month, {} use)",
                tool.name,
                format_amount(tool.monthly_cost),
                tool.usage_frequency
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    let top_redundancy = redundancies
        .first()
        .map(|redundancy| redundancy.description.as_str())
        .unwrap_or("None");
    let top_optimization = optimizations
        .first()
        .map(|optimization| optimization.description.as_str())
        .unwrap_or("None");

    format!(
        "Analyze this tech stack audit and provide 4-5 specific, actionable recommendations:

Company: {company_size} company in {industry}
Team Size: {team_size}
Tools: {tools}

Redundancies Found: {redundancy_count}
Top Redundancy: {top_redundancy}

Optimization Opportunities: {optimization_count}
Top Optimization: {top_optimization}

Provide recommendations as a JSON array focusing on:
1. Cost reduction opportunities
2. Efficiency improvements
3. Tool consolidation
4. Usage optimization
5. Integration opportunities

Format: [\"recommendation 1\", \"recommendation 2\", ...]",
        company_size = input.company_size,
        industry = input.industry,
        team_size = input.team_size,
        redundancy_count = redundancies.len(),
        optimization_count = optimizations.len(),
    )
}

/// Strips code-fence markup and parses a JSON array of strings.
pub fn parse_recommendations(response: &str) -> Result<Vec<String>, GenerationError> {
    let cleaned = response.replace("```json", "").replace("```", "");
    let recommendations: Vec<String> = serde_json::from_str(cleaned.trim())
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;
    if recommendations.is_empty() {
        return Err(GenerationError::MalformedResponse(
            "empty recommendation list".to_string(),
        ));
    }
    Ok(recommendations)
}

pub fn fallback_recommendations(
    redundancies: &[Redundancy],
    optimizations: &[Optimization],
) -> Vec<String> {
    let mut recommendations = Vec::with_capacity(MAX_RECOMMENDATIONS);
    if let Some(top) = redundancies.first() {
        recommendations.push(format!(
            "Address {} redundancy to save ${}/month",
            top.category,
            format_amount(top.potential_savings)
        ));
    }
    if let Some(top) = optimizations.first() {
        recommendations.push(top.description.clone());
    }
    recommendations.extend(GENERIC_RECOMMENDATIONS.iter().map(|text| text.to_string()));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
