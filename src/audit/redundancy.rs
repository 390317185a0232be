use super::format_amount;
use super::patterns::{PatternCatalog, PatternGroup};
use crate::types::audit::{Redundancy, Severity};
use crate::types::tool::SelectedTool;

pub const UNDERUTILIZED_CATEGORY: &str = "Underutilized";
const UNDERUTILIZED_MIN_COST: f64 = 20.0;
const UNDERUTILIZED_HIGH_COST: f64 = 50.0;

/// Same-category overlaps followed by rarely-used costly tools, sorted by
/// savings descending. Ties keep detection order.
pub fn identify_redundancies(tools: &[SelectedTool], catalog: &PatternCatalog) -> Vec<Redundancy> {
    let mut redundancies = Vec::new();

    for (category, members) in group_by_category(tools) {
        if members.len() < 2 {
            continue;
        }
        for pattern in catalog.patterns_for(category) {
            if let Some(redundancy) = overlap_for_pattern(category, &members, pattern) {
                redundancies.push(redundancy);
            }
        }
    }

    redundancies.extend(tools.iter().filter_map(underutilized));

    sort_by_savings(&mut redundancies);
    tracing::debug!(count = redundancies.len(), "redundancies identified");
    redundancies
}

/// Groups keyed by category in first-appearance order.
fn group_by_category(tools: &[SelectedTool]) -> Vec<(&str, Vec<&SelectedTool>)> {
    let mut groups: Vec<(&str, Vec<&SelectedTool>)> = Vec::new();
    for tool in tools {
        match groups
            .iter_mut()
            .find(|(category, _)| *category == tool.category)
        {
            Some((_, members)) => members.push(tool),
            None => groups.push((tool.category.as_str(), vec![tool])),
        }
    }
    groups
}

fn overlap_for_pattern(
    category: &str,
    members: &[&SelectedTool],
    pattern: &PatternGroup,
) -> Option<Redundancy> {
    let matching: Vec<&SelectedTool> = members
        .iter()
        .copied()
        .filter(|tool| pattern.matches(&tool.name))
        .collect();
    if matching.len() < 2 {
        return None;
    }

    let total: f64 = matching.iter().map(|tool| tool.effective_cost()).sum();
    let cheapest = matching
        .iter()
        .copied()
        .reduce(|min, tool| {
            if tool.effective_cost() < min.effective_cost() {
                tool
            } else {
                min
            }
        })?;
    let potential_savings = total - cheapest.effective_cost();

    Some(Redundancy {
        category: category.to_string(),
        tools: matching.iter().map(|tool| tool.name.clone()).collect(),
        potential_savings,
        severity: Severity::from_savings(potential_savings),
        description: format!(
            "Multiple {} tools detected. Consider consolidating to {}.",
            category.to_lowercase(),
            cheapest.name
        ),
    })
}

fn underutilized(tool: &SelectedTool) -> Option<Redundancy> {
    if !tool.is_rarely_used() || tool.monthly_cost <= UNDERUTILIZED_MIN_COST {
        return None;
    }
    let cost = tool.effective_cost();
    Some(Redundancy {
        category: UNDERUTILIZED_CATEGORY.to_string(),
        tools: vec![tool.name.clone()],
        potential_savings: cost,
        severity: if tool.monthly_cost > UNDERUTILIZED_HIGH_COST {
            Severity::High
        } else {
            Severity::Medium
        },
        description: format!(
            "{} is rarely used but costs ${}/month",
            tool.name,
            format_amount(cost)
        ),
    })
}

fn sort_by_savings(redundancies: &mut [Redundancy]) {
    redundancies.sort_by(|a, b| b.potential_savings.total_cmp(&a.potential_savings));
}
