//! Inbound event model for the skill
//!
//! These types mirror the platform's request JSON one-to-one. The envelope
//! is immutable, one per invocation; `session` is pass-through context that
//! handlers may read but never persist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The top-level inbound event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    /// Protocol version declared by the platform
    pub version: String,
    /// Conversational context for this turn, if the platform sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    /// Opaque device/system context, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    /// The request body, discriminated by its `type` field
    pub request: RequestBody,
}

/// Conversational session state attached to the event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Whether this is the first request of the session
    #[serde(default)]
    pub new: bool,
    /// Platform-assigned session identifier
    pub session_id: String,
    /// Attributes carried across turns by the platform
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
    /// The skill the session belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    /// The user speaking to the skill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// The skill identity on the platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// The platform account invoking the skill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Consent payload, opaque to this skill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<serde_json::Value>,
}

/// Request body variants, tagged by the wire `type` field
///
/// Unrecognized type strings land in `Other` so the dispatcher can surface
/// them in a diagnostic instead of failing to decode the whole envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum RequestBody {
    /// The user opened the skill without naming an intent
    LaunchRequest(LaunchRequest),
    /// The user's utterance resolved to a named intent
    IntentRequest(IntentRequest),
    /// The platform closed the session; no response may be sent
    SessionEndedRequest(SessionEndedRequest),
    /// Any request type this skill does not recognize
    #[serde(untagged)]
    Other(UnknownRequest),
}

/// Session launch without a named intent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    #[serde(default)]
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// An intent invocation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    #[serde(default)]
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Multi-turn dialog progress as reported by the platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_state: Option<String>,
    /// The resolved intent
    pub intent: Intent,
}

/// Session termination notice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    #[serde(default)]
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Why the platform ended the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<SessionEndReason>,
    /// Error detail when the reason is an error, opaque to this skill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

/// Why a session ended
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEndReason {
    /// The user asked to exit
    UserInitiated,
    /// The platform hit an error mid-session
    Error,
    /// The user stopped responding to reprompts
    ExceededMaxReprompts,
    /// Any reason string this skill does not recognize
    #[serde(untagged)]
    Other(String),
}

/// A request body whose `type` the skill does not recognize
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnknownRequest {
    /// The declared type string, kept verbatim for diagnostics
    #[serde(rename = "type")]
    pub request_type: String,
    /// Remaining body fields, untouched
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

/// A user-expressed action recognized by the voice platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Declared intent name; routing matches this exactly
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
    /// Named parameters extracted from the utterance (unused by handlers)
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

/// A named parameter attached to an intent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
    /// Entity-resolution payload, opaque to this skill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolutions: Option<serde_json::Value>,
}

impl Intent {
    /// Create an intent carrying only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            confirmation_status: None,
            slots: HashMap::new(),
        }
    }
}

impl RequestEnvelope {
    /// Wrap a request body in a minimal envelope
    pub fn new(request: RequestBody) -> Self {
        Self {
            version: crate::response::PROTOCOL_VERSION.to_string(),
            session: None,
            context: None,
            request,
        }
    }

    /// Attach session context to the envelope
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }
}
