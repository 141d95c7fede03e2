//! CLI exit codes and error reporting.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants to exit codes.
//! - Print an error and its advisory hint to stderr.
//!
//! Does NOT handle:
//! - Error message wording (owned by `ClientError`'s Display and `advice()`).
//!
//! Invariants:
//! - Exit codes 1-7 are reserved for specific error categories.
//! - Errors that do not wrap a `ClientError` exit with `GeneralError`.

use es_client::ClientError;

/// Structured exit codes for es-viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - the cluster rejected the credentials (401).
    AuthenticationFailed = 2,

    /// Connection error - refused, DNS failure, or timeout.
    ///
    /// Scripts may retry.
    ConnectionError = 3,

    /// Document or index not found (404).
    NotFound = 4,

    /// Validation error - missing index or id, malformed JSON, or a 400 from the cluster.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - the user lacks the privilege (403).
    PermissionDenied = 6,

    /// TLS verification failed.
    ///
    /// Retry with `--insecure` only for a trusted cluster with a self-signed certificate.
    TlsError = 7,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Http { status: 401, .. } => ExitCode::AuthenticationFailed,
            ClientError::Http { status: 403, .. } => ExitCode::PermissionDenied,
            ClientError::Http { status: 404, .. } => ExitCode::NotFound,
            ClientError::Http { status: 400, .. } => ExitCode::ValidationError,
            ClientError::Http { .. } => ExitCode::GeneralError,

            ClientError::Connection { .. } => ExitCode::ConnectionError,
            ClientError::TlsVerification { .. } => ExitCode::TlsError,

            ClientError::InvalidInput(_) => ExitCode::ValidationError,
            ClientError::MalformedJson { .. } => ExitCode::ValidationError,
            ClientError::InvalidUrl(_) => ExitCode::ValidationError,

            ClientError::Build(_) => ExitCode::GeneralError,
        }
    }
}

/// Find the first `ClientError` in an error chain.
fn find_client_error(err: &anyhow::Error) -> Option<&ClientError> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ClientError>())
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns `ExitCode::GeneralError` if the error does not wrap a `ClientError`.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        find_client_error(self)
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

/// Render an error for stderr: the full context chain, then the advisory hint.
pub fn render_error(err: &anyhow::Error) -> String {
    let mut message = format!("Error: {:#}", err);
    if let Some(advice) = find_client_error(err).and_then(ClientError::advice) {
        message.push_str("\nHint: ");
        message.push_str(advice);
    }
    message
}
