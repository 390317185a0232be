use crate::error::{AuditError, Result};
use crate::types::tool::SelectedTool;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechAuditInput {
    pub selected_tools: Vec<SelectedTool>,
    pub company_size: String,
    pub industry: String,
    pub team_size: u32,
}

impl TechAuditInput {
    /// Rejects inputs the engine cannot score. Runs before any computation.
    pub fn validate(&self) -> Result<()> {
        if self.selected_tools.is_empty() {
            return Err(AuditError::Validation(
                "at least one tool is required".to_string(),
            ));
        }
        if self.team_size == 0 {
            return Err(AuditError::Validation(
                "teamSize must be greater than 0".to_string(),
            ));
        }
        for (index, tool) in self.selected_tools.iter().enumerate() {
            if tool.name.trim().is_empty() {
                return Err(AuditError::Validation(format!(
                    "selectedTools[{index}].name must not be empty"
                )));
            }
            if tool.category.trim().is_empty() {
                return Err(AuditError::Validation(format!(
                    "selectedTools[{index}].category must not be empty"
                )));
            }
            if tool.users_count == 0 {
                return Err(AuditError::Validation(format!(
                    "selectedTools[{index}].usersCount must be greater than 0"
                )));
            }
            if !tool.monthly_cost.is_finite() || tool.monthly_cost < 0.0 {
                return Err(AuditError::Validation(format!(
                    "selectedTools[{index}].monthlyCost must be a non-negative number"
                )));
            }
        }
        Ok(())
    }

    pub fn total_monthly_cost(&self) -> f64 {
        self.selected_tools
            .iter()
            .map(SelectedTool::effective_cost)
            .sum()
    }
}

/// Input document accepted by the CLI: the audit input plus the submitter
/// contact used as the persistence key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub input: TechAuditInput,
}

impl AuditRequest {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| AuditError::Validation(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(email) = &self.email {
            let email = email.trim();
            if email.is_empty() || !email.contains('@') {
                return Err(AuditError::Validation(format!(
                    "email is not a valid address: {email:?}"
                )));
            }
        }
        self.input.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Tier for a same-category overlap given what consolidation would save.
    pub fn from_savings(savings: f64) -> Self {
        if savings > 100.0 {
            Severity::High
        } else if savings > 50.0 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn score_deduction(self) -> i32 {
        match self {
            Severity::High => 15,
            Severity::Medium => 10,
            Severity::Low => 5,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redundancy {
    pub category: String,
    pub tools: Vec<String>,
    pub potential_savings: f64,
    pub severity: Severity,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationType {
    Cost,
    Efficiency,
    Integration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    #[serde(rename = "type")]
    pub kind: OptimizationType,
    pub description: String,
    pub impact: f64,
    pub effort: Effort,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub potential_savings: u64,
    pub efficiency_score: u8,
    pub redundancy_count: usize,
    pub underutilized_tools: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechAuditResult {
    pub score: u8,
    pub total_monthly_cost: f64,
    pub redundancies: Vec<Redundancy>,
    pub optimizations: Vec<Optimization>,
    pub recommendations: Vec<String>,
    pub summary: AuditSummary,
}
