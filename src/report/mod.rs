pub mod json;
pub mod md;

use crate::error::AuditError;
use crate::types::audit::TechAuditResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(result: &TechAuditResult, format: OutputFormat) -> Result<String, AuditError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(AuditError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}
