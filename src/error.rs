//! Error surface for skill request handling

use thiserror::Error;

/// Errors produced while handling a skill event
#[derive(Debug, Error)]
pub enum SkillError {
    /// The inbound event declared a request type this skill does not handle
    #[error("unsupported request type: {request_type}")]
    UnsupportedRequestType {
        /// The declared type string, preserved verbatim for diagnostics
        request_type: String,
    },

    /// The inbound event could not be decoded into a request envelope
    #[error("malformed request envelope")]
    MalformedRequest {
        #[source]
        source: serde_json::Error,
    },

    /// The outbound response could not be encoded
    #[error("failed to encode response")]
    ResponseEncoding {
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for skill operations
pub type SkillResult<T> = Result<T, SkillError>;
