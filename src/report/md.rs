use crate::audit::format_amount;
use crate::types::audit::{Effort, OptimizationType, TechAuditResult};

pub fn rating_label(score: u8) -> &'static str {
    if score >= 80 {
        "Highly Optimized"
    } else if score >= 60 {
        "Room for Improvement"
    } else {
        "Needs Optimization"
    }
}

pub fn to_markdown(result: &TechAuditResult) -> String {
    let mut output = String::new();
    output.push_str("# Tech Stack Audit\n\n");
    output.push_str(&format!(
        "Efficiency score: {} ({})\n\n",
        result.score,
        rating_label(result.score)
    ));

    output.push_str("## Summary\n\n");
    output.push_str(&format!(
        "- monthly cost: ${}\n- potential savings: ${}/month\n- redundancies: {}\n- underutilized tools: {}\n- daily usage: {}%\n\n",
        format_amount(result.total_monthly_cost),
        result.summary.potential_savings,
        result.summary.redundancy_count,
        result.summary.underutilized_tools,
        result.summary.efficiency_score
    ));

    output.push_str("## Redundancies\n\n");
    if result.redundancies.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for redundancy in &result.redundancies {
            output.push_str(&format!(
                "- [{}] {}: {} (tools: {}; save ${}/month)\n",
                redundancy.severity.to_string().to_uppercase(),
                redundancy.category,
                redundancy.description,
                redundancy.tools.join(", "),
                format_amount(redundancy.potential_savings)
            ));
        }
        output.push('\n');
    }

    output.push_str("## Optimizations\n\n");
    if result.optimizations.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for optimization in &result.optimizations {
            output.push_str(&format!(
                "- {} ({} effort, impact ${}): {}\n",
                kind_label(optimization.kind),
                effort_label(optimization.effort),
                format_amount(optimization.impact),
                optimization.description
            ));
        }
        output.push('\n');
    }

    output.push_str("## Recommendations\n\n");
    for (index, recommendation) in result.recommendations.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, recommendation));
    }

    output
}

fn kind_label(kind: OptimizationType) -> &'static str {
    match kind {
        OptimizationType::Cost => "cost",
        OptimizationType::Efficiency => "efficiency",
        OptimizationType::Integration => "integration",
    }
}

fn effort_label(effort: Effort) -> &'static str {
    match effort {
        Effort::Low => "low",
        Effort::Medium => "medium",
        Effort::High => "high",
    }
}
