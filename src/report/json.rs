use crate::types::audit::TechAuditResult;

pub fn to_json(result: &TechAuditResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::audit::{AuditSummary, Redundancy, Severity};

    #[test]
    fn json_report_uses_camel_case_fields() {
        let result = TechAuditResult {
            score: 85,
            total_monthly_cost: 90.0,
            redundancies: vec![Redundancy {
                category: "Communication".to_string(),
                tools: vec!["Slack".to_string(), "Microsoft Teams".to_string()],
                potential_savings: 50.0,
                severity: Severity::Medium,
                description: "overlap".to_string(),
            }],
            optimizations: vec![],
            recommendations: vec!["Consolidate chat".to_string()],
            summary: AuditSummary {
                potential_savings: 50,
                efficiency_score: 50,
                redundancy_count: 1,
                underutilized_tools: 0,
            },
        };

        let rendered = to_json(&result).expect("json should serialize");
        assert!(rendered.contains("\"score\": 85"));
        assert!(rendered.contains("\"totalMonthlyCost\": 90.0"));
        assert!(rendered.contains("\"potentialSavings\": 50.0"));
        assert!(rendered.contains("\"severity\": \"medium\""));
        assert!(rendered.contains("\"redundancyCount\": 1"));
    }
}
