//! Skill request dispatcher
//!
//! Routes one inbound event to exactly one handler by (request type,
//! intent name) and returns the composed response. The session-ended path
//! intentionally produces no response: the protocol forbids replying after
//! a session-ended notification.

use tracing::{debug, error, info};

use crate::error::{SkillError, SkillResult};
use crate::handlers::intent::IntentKind;
use crate::messages::{MessageCatalog, MessageCategory};
use crate::request::{
    IntentRequest, LaunchRequest, RequestBody, RequestEnvelope, Session,
    SessionEndedRequest,
};
use crate::response::ResponseEnvelope;

/// Dispatches skill events to named handlers
pub struct SkillDispatcher {
    catalog: &'static MessageCatalog,
}

impl SkillDispatcher {
    /// Create a dispatcher over the process-wide message catalog
    pub fn new() -> Self {
        Self {
            catalog: MessageCatalog::global(),
        }
    }

    /// Handle one inbound event
    ///
    /// Returns `Ok(Some(response))` for launch and intent requests,
    /// `Ok(None)` for session-ended requests, and an error for request
    /// types this skill does not handle.
    pub fn dispatch(
        &self,
        envelope: &RequestEnvelope,
    ) -> SkillResult<Option<ResponseEnvelope>> {
        let session = envelope.session.as_ref();
        match &envelope.request {
            RequestBody::LaunchRequest(request) => {
                Ok(Some(self.on_launch(request, session)))
            }
            RequestBody::IntentRequest(request) => {
                Ok(Some(self.on_intent(request, session)))
            }
            RequestBody::SessionEndedRequest(request) => {
                self.on_session_ended(request, session);
                Ok(None)
            }
            RequestBody::Other(unknown) => {
                error!("Unsupported request type: {}", unknown.request_type);
                Err(SkillError::UnsupportedRequestType {
                    request_type: unknown.request_type.clone(),
                })
            }
        }
    }

    /// Handle one inbound event given as a JSON payload
    ///
    /// Decoding failures surface as `MalformedRequest`; the response, if
    /// any, is returned re-encoded as JSON.
    pub fn dispatch_json(&self, payload: &str) -> SkillResult<Option<String>> {
        let envelope: RequestEnvelope = serde_json::from_str(payload)
            .map_err(|source| SkillError::MalformedRequest { source })?;

        match self.dispatch(&envelope)? {
            Some(response) => {
                let encoded = serde_json::to_string(&response)
                    .map_err(|source| SkillError::ResponseEncoding { source })?;
                Ok(Some(encoded))
            }
            None => Ok(None),
        }
    }

    fn on_launch(&self, request: &LaunchRequest, _session: Option<&Session>) -> ResponseEnvelope {
        info!("Session started: request {}", request.request_id);
        self.catalog.speech(MessageCategory::Welcome, false)
    }

    fn on_intent(&self, request: &IntentRequest, session: Option<&Session>) -> ResponseEnvelope {
        let kind = IntentKind::from_name(&request.intent.name);
        debug!("Routing intent {:?} as {:?}", request.intent.name, kind);

        match kind {
            IntentKind::Stop => self.handle_stop(request, session),
            IntentKind::Cancel => self.handle_cancel(request, session),
            IntentKind::Help => self.handle_help(request, session),
            IntentKind::Hello => self.handle_hello(request, session),
            IntentKind::HowAreYou => self.handle_how_are_you(request, session),
            IntentKind::WeatherForecast => self.handle_weather_forecast(request, session),
            IntentKind::Test => self.handle_test(request, session),
            IntentKind::Unrecognized => self.handle_unrecognized(request, session),
        }
    }

    fn on_session_ended(&self, request: &SessionEndedRequest, _session: Option<&Session>) {
        // No response may follow a session-ended notification
        info!("Session ended: reason {:?}", request.reason);
    }

    fn handle_stop(
        &self,
        _request: &IntentRequest,
        _session: Option<&Session>,
    ) -> ResponseEnvelope {
        self.respond(IntentKind::Stop)
    }

    fn handle_cancel(
        &self,
        request: &IntentRequest,
        session: Option<&Session>,
    ) -> ResponseEnvelope {
        // Cancel behaves exactly like stop
        self.handle_stop(request, session)
    }

    fn handle_help(
        &self,
        _request: &IntentRequest,
        _session: Option<&Session>,
    ) -> ResponseEnvelope {
        self.respond(IntentKind::Help)
    }

    fn handle_hello(
        &self,
        _request: &IntentRequest,
        _session: Option<&Session>,
    ) -> ResponseEnvelope {
        self.respond(IntentKind::Hello)
    }

    fn handle_how_are_you(
        &self,
        _request: &IntentRequest,
        _session: Option<&Session>,
    ) -> ResponseEnvelope {
        self.respond(IntentKind::HowAreYou)
    }

    fn handle_weather_forecast(
        &self,
        _request: &IntentRequest,
        _session: Option<&Session>,
    ) -> ResponseEnvelope {
        self.respond(IntentKind::WeatherForecast)
    }

    fn handle_test(
        &self,
        _request: &IntentRequest,
        _session: Option<&Session>,
    ) -> ResponseEnvelope {
        self.respond(IntentKind::Test)
    }

    fn handle_unrecognized(
        &self,
        request: &IntentRequest,
        _session: Option<&Session>,
    ) -> ResponseEnvelope {
        debug!("No handler for intent {:?}, using default", request.intent.name);
        self.respond(IntentKind::Unrecognized)
    }

    fn respond(&self, kind: IntentKind) -> ResponseEnvelope {
        self.catalog.speech(kind.category(), kind.ends_session())
    }
}

impl Default for SkillDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
