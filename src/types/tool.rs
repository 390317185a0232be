use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageFrequency {
    Daily,
    Weekly,
    Monthly,
    Rarely,
}

impl fmt::Display for UsageFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UsageFrequency::Daily => "daily",
            UsageFrequency::Weekly => "weekly",
            UsageFrequency::Monthly => "monthly",
            UsageFrequency::Rarely => "rarely",
        };
        f.write_str(label)
    }
}

/// A tool the company pays for, as supplied by the caller for one audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedTool {
    pub tool_id: String,
    pub name: String,
    pub category: String,
    /// Per-seat monthly price.
    pub monthly_cost: f64,
    pub users_count: u32,
    pub usage_frequency: UsageFrequency,
}

impl SelectedTool {
    /// Monthly spend across all seats.
    pub fn effective_cost(&self) -> f64 {
        self.monthly_cost * f64::from(self.users_count)
    }

    pub fn is_daily(&self) -> bool {
        self.usage_frequency == UsageFrequency::Daily
    }

    pub fn is_rarely_used(&self) -> bool {
        self.usage_frequency == UsageFrequency::Rarely
    }
}

/// Catalog entry offered to users when they build their tool list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub avg_monthly_cost: f64,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_cost_multiplies_seats() {
        let tool = SelectedTool {
            tool_id: "slack".to_string(),
            name: "Slack".to_string(),
            category: "Communication".to_string(),
            monthly_cost: 12.5,
            users_count: 4,
            usage_frequency: UsageFrequency::Daily,
        };
        assert_eq!(tool.effective_cost(), 50.0);
    }

    #[test]
    fn selected_tool_parses_camel_case_json() {
        let tool: SelectedTool = serde_json::from_str(
            r#"{"toolId":"zoom","name":"Zoom","category":"Communication","monthlyCost":15,"usersCount":3,"usageFrequency":"weekly"}"#,
        )
        .expect("tool should parse");
        assert_eq!(tool.usage_frequency, UsageFrequency::Weekly);
        assert_eq!(tool.users_count, 3);
    }

    #[test]
    fn unknown_usage_frequency_is_rejected() {
        let parsed = serde_json::from_str::<SelectedTool>(
            r#"{"toolId":"x","name":"X","category":"Y","monthlyCost":1,"usersCount":1,"usageFrequency":"hourly"}"#,
        );
        assert!(parsed.is_err());
    }
}
