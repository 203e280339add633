//! Outbound response model and composition entry points
//!
//! The envelope mirrors the platform's response JSON: a protocol version,
//! a session-attributes mapping (empty unless a handler supplies one), and
//! an inner body with the output speech and the end-session flag.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::ssml;

/// Protocol version tag emitted on every response
pub const PROTOCOL_VERSION: &str = "1.0";

/// The top-level outbound response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    /// Attributes the platform should carry into the next turn
    pub session_attributes: HashMap<String, serde_json::Value>,
    pub response: ResponseBody,
}

/// The speech payload and session-continuation state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    pub should_end_session: bool,
}

/// Speech output, discriminated by the wire `type` field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    /// Literal text, synthesized with default prosody
    PlainText { text: String },
    /// Speech-markup text; must be a complete `<speak>` document
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    /// The speech content, regardless of kind
    pub fn content(&self) -> &str {
        match self {
            OutputSpeech::PlainText { text } => text,
            OutputSpeech::Ssml { ssml } => ssml,
        }
    }
}

impl ResponseEnvelope {
    /// Compose a plain-text response, wrapping the literal verbatim
    pub fn plain(text: impl Into<String>, end_session: bool) -> Self {
        Self::from_speech(
            OutputSpeech::PlainText { text: text.into() },
            end_session,
        )
    }

    /// Compose a speech-markup response, wrapping the body in the
    /// enclosing `<speak>` root tag
    pub fn ssml(body: impl AsRef<str>, end_session: bool) -> Self {
        Self::from_speech(
            OutputSpeech::Ssml {
                ssml: ssml::speak(body.as_ref()),
            },
            end_session,
        )
    }

    fn from_speech(output_speech: OutputSpeech, end_session: bool) -> Self {
        Self {
            version: PROTOCOL_VERSION.to_string(),
            session_attributes: HashMap::new(),
            response: ResponseBody {
                output_speech,
                should_end_session: end_session,
            },
        }
    }

    /// Attach session attributes for the platform to carry forward
    pub fn with_session_attributes(
        mut self,
        attributes: HashMap<String, serde_json::Value>,
    ) -> Self {
        self.session_attributes = attributes;
        self
    }

    /// Whether this response asks the platform to close the session
    pub fn ends_session(&self) -> bool {
        self.response.should_end_session
    }

    /// The speech payload of this response
    pub fn speech(&self) -> &OutputSpeech {
        &self.response.output_speech
    }
}
