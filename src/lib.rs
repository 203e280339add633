//! Voice-skill dialog module
//!
//! This crate handles one spoken-interaction event per invocation for a
//! voice-assistant skill and produces the platform response. It provides:
//! - Request-type dispatch (launch, intent invocation, session end)
//! - Exact-match intent routing over a fixed set of recognized intent names
//! - Response composition as plain text or speech markup (SSML)
//! - Per-category message pools with uniform-random variant selection
//! - A typed error surface for unsupported and malformed events
//!
//! Execution is synchronous and request-scoped: one event in, one response
//! (or an intentional no-response for session end) out. The message pools
//! are read-only process-wide constants; no state survives an invocation.

pub mod error;
pub mod handlers;
pub mod messages;
pub mod request;
pub mod response;
pub mod ssml;

// Re-export main types
pub use error::{SkillError, SkillResult};

pub use request::{
    Application, Intent, IntentRequest, LaunchRequest, RequestBody,
    RequestEnvelope, Session, SessionEndReason, SessionEndedRequest, Slot,
    UnknownRequest, User,
};

pub use response::{OutputSpeech, ResponseBody, ResponseEnvelope, PROTOCOL_VERSION};

pub use handlers::{IntentKind, SkillDispatcher};

pub use messages::{MessageCatalog, MessageCategory, SpeechKind};

pub use ssml::{EmphasisLevel, PitchLevel, RateLevel};
