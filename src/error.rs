use std::fmt;

/// Result alias for block invocations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every way a block invocation can fail.
///
/// All variants propagate to the host unchanged. None of them is retried here;
/// whether a failure is worth retrying is the host's decision.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field is missing or malformed. Raised before any network call.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The STS exchange failed or returned an incomplete credential set.
    #[error("failed to assume role {role_arn}: {reason}")]
    CredentialResolution { role_arn: String, reason: String },

    /// The target service rejected the request or could not be reached.
    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Failure reported by (or while talking to) the target service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationError {
    /// Catalog id of the operation, e.g. `iam.CreateAccessKey`
    pub operation: String,
    /// HTTP status, absent when no response was received
    pub status: Option<u16>,
    /// Service error code such as `ValidationError` or `AccessDenied`
    pub code: Option<String>,
    pub message: String,
}

impl OperationError {
    /// Error raised locally, before or without a service response.
    pub fn local(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: None,
            code: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed", self.operation)?;
        match (&self.code, self.status) {
            (Some(code), Some(status)) => write!(f, " ({code}, HTTP {status})")?,
            (Some(code), None) => write!(f, " ({code})")?,
            (None, Some(status)) => write!(f, " (HTTP {status})")?,
            (None, None) => {}
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for OperationError {}
