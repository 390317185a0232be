use crate::types::audit::{Effort, Optimization, OptimizationType};
use crate::types::tool::{SelectedTool, UsageFrequency};
use std::collections::BTreeSet;

const EXPENSIVE_SEAT_COST: f64 = 50.0;
const COST_SAVINGS_RATE: f64 = 0.2;
const ADOPTION_GAIN_RATE: f64 = 0.3;
const SPRAWL_CATEGORY_LIMIT: usize = 5;
const INTEGRATION_GAIN_PER_TOOL: f64 = 10.0;

/// Every rule is evaluated on its own, so one tool can yield several entries.
pub fn find_optimizations(tools: &[SelectedTool]) -> Vec<Optimization> {
    let mut optimizations: Vec<Optimization> = tools
        .iter()
        .filter(|tool| tool.monthly_cost > EXPENSIVE_SEAT_COST)
        .map(|tool| Optimization {
            kind: OptimizationType::Cost,
            description: format!(
                "Review {} pricing - consider downgrading plan or negotiating volume discount",
                tool.name
            ),
            impact: tool.monthly_cost * COST_SAVINGS_RATE,
            effort: Effort::Low,
        })
        .collect();

    optimizations.extend(
        tools
            .iter()
            .filter(|tool| tool.usage_frequency == UsageFrequency::Weekly)
            .map(|tool| Optimization {
                kind: OptimizationType::Efficiency,
                description: format!(
                    "Increase {} adoption - currently underutilized for its cost",
                    tool.name
                ),
                impact: tool.monthly_cost * ADOPTION_GAIN_RATE,
                effort: Effort::Medium,
            }),
    );

    let categories: BTreeSet<&str> = tools.iter().map(|tool| tool.category.as_str()).collect();
    if categories.len() > SPRAWL_CATEGORY_LIMIT {
        optimizations.push(Optimization {
            kind: OptimizationType::Integration,
            description:
                "Consider integrated platforms to reduce tool sprawl and improve workflow"
                    .to_string(),
            impact: tools.len() as f64 * INTEGRATION_GAIN_PER_TOOL,
            effort: Effort::High,
        });
    }

    optimizations.sort_by(|a, b| b.impact.total_cmp(&a.impact));
    tracing::debug!(count = optimizations.len(), "optimizations found");
    optimizations
}
