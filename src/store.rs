use crate::error::{AuditError, Result};
use crate::types::audit::{TechAuditInput, TechAuditResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const LEADS_DIR: &str = "leads";
const ASSESSMENTS_DIR: &str = "assessments";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub email: String,
    pub company_size: String,
    pub industry: String,
    pub team_size: u32,
    pub first_seen: String,
    pub last_seen: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub email: String,
    pub company_name: String,
    pub status: String,
    pub input_data: TechAuditInput,
    pub analysis_data: TechAuditResult,
    pub score: u8,
    pub recommendations: Vec<String>,
    pub completed_at: String,
}

/// Where submitted audits end up. Leads are upserted by email, assessments
/// are append-only.
pub trait AssessmentStore {
    fn upsert_lead(&self, lead: &LeadRecord) -> Result<()>;

    /// Returns the identifier of the stored assessment.
    fn insert_assessment(&self, assessment: &AssessmentRecord) -> Result<String>;
}

/// JSON documents under a directory: one file per lead, one immutable file
/// per assessment.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn lead_path(&self, email: &str) -> PathBuf {
        self.root
            .join(LEADS_DIR)
            .join(format!("{}.json", email_key(email)))
    }

    pub fn assessments_dir(&self) -> PathBuf {
        self.root.join(ASSESSMENTS_DIR)
    }

    fn read_lead(path: &Path) -> Result<Option<LeadRecord>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}

impl AssessmentStore for FileStore {
    fn upsert_lead(&self, lead: &LeadRecord) -> Result<()> {
        let path = self.lead_path(&lead.email);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut record = lead.clone();
        if let Some(existing) = Self::read_lead(&path)? {
            record.first_seen = existing.first_seen;
        }

        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&path, json)?;
        tracing::debug!(path = %path.display(), "lead upserted");
        Ok(())
    }

    fn insert_assessment(&self, assessment: &AssessmentRecord) -> Result<String> {
        let dir = self.assessments_dir();
        fs::create_dir_all(&dir)?;

        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.6fZ");
        let suffix = Uuid::new_v4().simple().to_string();
        let id = format!("{stamp}-{}", &suffix[..12]);
        let path = dir.join(format!("{id}.json"));

        let json = serde_json::to_string_pretty(assessment)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| AuditError::Store(format!("{}: {}", path.display(), e)))?;
        file.write_all(json.as_bytes())?;
        tracing::debug!(path = %path.display(), "assessment stored");
        Ok(id)
    }
}

/// Records the lead and the assessment. Failures are logged and never
/// affect the audit response.
pub fn persist_best_effort(
    store: &dyn AssessmentStore,
    email: &str,
    input: &TechAuditInput,
    result: &TechAuditResult,
) -> Option<String> {
    let now = Utc::now().to_rfc3339();
    let email = email.trim().to_string();

    let lead = LeadRecord {
        email: email.clone(),
        company_size: input.company_size.clone(),
        industry: input.industry.clone(),
        team_size: input.team_size,
        first_seen: now.clone(),
        last_seen: now.clone(),
    };
    if let Err(e) = store.upsert_lead(&lead) {
        tracing::warn!(error = %e, "failed to save lead");
    }

    let assessment = AssessmentRecord {
        email,
        company_name: "Unknown".to_string(),
        status: "completed".to_string(),
        input_data: input.clone(),
        analysis_data: result.clone(),
        score: result.score,
        recommendations: result.recommendations.clone(),
        completed_at: now,
    };
    match store.insert_assessment(&assessment) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!(error = %e, "failed to save assessment");
            None
        }
    }
}

fn email_key(email: &str) -> String {
    sha256_hex(email.trim().to_lowercase().as_bytes())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
