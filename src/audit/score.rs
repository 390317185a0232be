use crate::error::{AuditError, Result};
use crate::types::audit::{Redundancy, TechAuditInput};

const BASE_SCORE: i32 = 100;
const DAILY_BONUS: i32 = 10;
const DAILY_BONUS_FRACTION: f64 = 0.7;

/// Efficiency score in `0..=100`. Starts at 100, loses points per
/// redundancy, per-seat spend and tool sprawl, gains a bonus when most tools
/// are used daily.
///
/// `team_size` must be positive; a zero team is an input violation.
pub fn calculate_score(input: &TechAuditInput, redundancies: &[Redundancy]) -> Result<u8> {
    if input.team_size == 0 {
        return Err(AuditError::Validation(
            "teamSize must be greater than 0".to_string(),
        ));
    }

    let mut score = BASE_SCORE;
    score -= redundancies
        .iter()
        .map(|redundancy| redundancy.severity.score_deduction())
        .sum::<i32>();

    // Seat prices only; users_count is not applied here.
    let cost_per_user = input
        .selected_tools
        .iter()
        .map(|tool| tool.monthly_cost)
        .sum::<f64>()
        / f64::from(input.team_size);
    score -= cost_penalty(cost_per_user);

    score -= sprawl_penalty(input.selected_tools.len());

    let tool_count = input.selected_tools.len();
    if tool_count > 0 {
        let daily = input
            .selected_tools
            .iter()
            .filter(|tool| tool.is_daily())
            .count();
        if daily as f64 / tool_count as f64 > DAILY_BONUS_FRACTION {
            score += DAILY_BONUS;
        }
    }

    let clamped = score.clamp(0, 100);
    tracing::debug!(raw = score, score = clamped, cost_per_user, "score calculated");
    u8::try_from(clamped).map_err(|e| AuditError::Computation(e.to_string()))
}

fn cost_penalty(cost_per_user: f64) -> i32 {
    if cost_per_user > 100.0 {
        20
    } else if cost_per_user > 50.0 {
        10
    } else {
        0
    }
}

fn sprawl_penalty(tool_count: usize) -> i32 {
    if tool_count > 15 {
        15
    } else if tool_count > 10 {
        10
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::audit::Severity;
    use crate::types::tool::{SelectedTool, UsageFrequency};

    fn tool(name: &str, category: &str, monthly_cost: f64, usage: UsageFrequency) -> SelectedTool {
        SelectedTool {
            tool_id: name.to_lowercase(),
            name: name.to_string(),
            category: category.to_string(),
            monthly_cost,
            users_count: 1,
            usage_frequency: usage,
        }
    }

    fn input(tools: Vec<SelectedTool>, team_size: u32) -> TechAuditInput {
        TechAuditInput {
            selected_tools: tools,
            company_size: "medium".to_string(),
            industry: "finance".to_string(),
            team_size,
        }
    }

    fn redundancy(severity: Severity) -> Redundancy {
        Redundancy {
            category: "CRM".to_string(),
            tools: vec!["HubSpot".to_string(), "Salesforce".to_string()],
            potential_savings: 0.0,
            severity,
            description: String::new(),
        }
    }

    #[test]
    fn zero_team_size_is_rejected() {
        let audit = input(vec![tool("Slack", "Communication", 10.0, UsageFrequency::Daily)], 0);
        assert!(calculate_score(&audit, &[]).is_err());
    }

    #[test]
    fn redundancies_deduct_by_severity() {
        let audit = input(vec![tool("Slack", "Communication", 10.0, UsageFrequency::Weekly)], 1);
        let redundancies = vec![
            redundancy(Severity::High),
            redundancy(Severity::Medium),
            redundancy(Severity::Low),
        ];
        assert_eq!(calculate_score(&audit, &redundancies).expect("score"), 70);
    }

    #[test]
    fn sixteen_daily_categories_net_minus_five() {
        let tools = (0..16)
            .map(|i| tool(&format!("Tool{i}"), &format!("Cat{i}"), 1.0, UsageFrequency::Daily))
            .collect();
        assert_eq!(calculate_score(&input(tools, 16), &[]).expect("score"), 95);
    }

    #[test]
    fn cost_per_user_uses_seat_price_without_seats() {
        let mut expensive = tool("Salesforce", "CRM", 120.0, UsageFrequency::Weekly);
        expensive.users_count = 50;
        assert_eq!(calculate_score(&input(vec![expensive.clone()], 1), &[]).expect("score"), 80);
        assert_eq!(calculate_score(&input(vec![expensive], 2), &[]).expect("score"), 90);
    }

    #[test]
    fn score_never_drops_below_zero() {
        let audit = input(vec![tool("Salesforce", "CRM", 500.0, UsageFrequency::Rarely)], 1);
        let redundancies = vec![redundancy(Severity::High); 10];
        assert_eq!(calculate_score(&audit, &redundancies).expect("score"), 0);
    }

    #[test]
    fn bonus_requires_strictly_more_than_seventy_percent_daily() {
        let mut tools: Vec<SelectedTool> = (0..7)
            .map(|i| tool(&format!("Daily{i}"), "Ops", 1.0, UsageFrequency::Daily))
            .collect();
        tools.extend((0..3).map(|i| tool(&format!("Weekly{i}"), "Ops", 1.0, UsageFrequency::Weekly)));
        assert_eq!(
            calculate_score(&input(tools, 10), &[redundancy(Severity::High)]).expect("score"),
            85
        );

        let audit = input(
            vec![tool("Slack", "Communication", 1.0, UsageFrequency::Daily)],
            1,
        );
        assert_eq!(calculate_score(&audit, &[redundancy(Severity::High)]).expect("score"), 95);
    }

    #[test]
    fn empty_tool_list_skips_daily_bonus() {
        assert_eq!(calculate_score(&input(vec![], 3), &[]).expect("score"), 100);
    }
}
