use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("invalid audit input: {0}")]
    Validation(String),

    #[error("audit computation failed: {0}")]
    Computation(String),

    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AuditError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AuditError::Validation(_))
    }
}

/// Failures of the text-generation collaborator. These never leave the
/// recommendation stage.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("missing credentials: environment variable {0} is not set")]
    MissingCredentials(String),

    #[error("text generation is disabled")]
    Disabled,

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("upstream returned no text")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, AuditError>;
