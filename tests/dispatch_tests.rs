//! Tests for request dispatch and the per-intent session policy

use skill_dialog::{
    Intent, IntentKind, IntentRequest, LaunchRequest, MessageCatalog, MessageCategory,
    OutputSpeech, RequestBody, RequestEnvelope, SessionEndedRequest, SkillDispatcher,
    SkillError,
};
use uuid::Uuid;

fn intent_envelope(name: &str) -> RequestEnvelope {
    RequestEnvelope::new(RequestBody::IntentRequest(IntentRequest {
        request_id: format!("amzn1.echo-api.request.{}", Uuid::new_v4()),
        timestamp: None,
        locale: Some("en-US".to_string()),
        dialog_state: None,
        intent: Intent::named(name),
    }))
}

#[test]
fn test_launch_returns_welcome_and_keeps_session_open() {
    // Setup
    let dispatcher = SkillDispatcher::new();
    let envelope = RequestEnvelope::new(RequestBody::LaunchRequest(LaunchRequest {
        request_id: format!("amzn1.echo-api.request.{}", Uuid::new_v4()),
        timestamp: None,
        locale: Some("en-US".to_string()),
    }));

    // Execute
    let response = dispatcher.dispatch(&envelope).unwrap().unwrap();

    // Verify
    assert!(!response.ends_session());
    let welcome = MessageCatalog::global().lines(MessageCategory::Welcome);
    match response.speech() {
        OutputSpeech::PlainText { text } => {
            assert!(welcome.contains(text), "unexpected welcome line: {text}");
        }
        other => panic!("Expected PlainText speech, got {other:?}"),
    }
}

#[test]
fn test_end_session_policy_for_every_recognized_intent() {
    let dispatcher = SkillDispatcher::new();

    for name in IntentKind::recognized_names() {
        let response = dispatcher
            .dispatch(&intent_envelope(name))
            .unwrap()
            .unwrap();

        let expected = IntentKind::from_name(name).ends_session();
        assert_eq!(
            response.ends_session(),
            expected,
            "end-session policy mismatch for {name}"
        );
    }
}

#[test]
fn test_stop_intent_ends_session_with_a_farewell() {
    // Setup
    let dispatcher = SkillDispatcher::new();

    // Execute
    let response = dispatcher
        .dispatch(&intent_envelope("AMAZON.StopIntent"))
        .unwrap()
        .unwrap();

    // Verify
    assert!(response.ends_session());
    let farewells = MessageCatalog::global().lines(MessageCategory::Farewell);
    match response.speech() {
        OutputSpeech::PlainText { text } => {
            assert!(farewells.contains(text), "unexpected farewell: {text}");
        }
        other => panic!("Expected PlainText speech, got {other:?}"),
    }
}

#[test]
fn test_cancel_intent_matches_stop_behavior() {
    let dispatcher = SkillDispatcher::new();

    let response = dispatcher
        .dispatch(&intent_envelope("AMAZON.CancelIntent"))
        .unwrap()
        .unwrap();

    assert!(response.ends_session());
    let farewells = MessageCatalog::global().lines(MessageCategory::Farewell);
    match response.speech() {
        OutputSpeech::PlainText { text } => {
            assert!(farewells.contains(text), "unexpected farewell: {text}");
        }
        other => panic!("Expected PlainText speech, got {other:?}"),
    }
}

#[test]
fn test_help_intent_keeps_the_session_open() {
    let dispatcher = SkillDispatcher::new();

    let response = dispatcher
        .dispatch(&intent_envelope("AMAZON.HelpIntent"))
        .unwrap()
        .unwrap();

    assert!(!response.ends_session());
}

#[test]
fn test_weather_forecast_intents_return_markup_speech() {
    let dispatcher = SkillDispatcher::new();

    for name in [
        "AMAZON.SearchAction<object@WeatherForecast>",
        "AMAZON.SearchAction<object@WeatherForecast|temperature>",
        "AMAZON.SearchAction<object@WeatherForecast|weatherCondition>",
    ] {
        let response = dispatcher
            .dispatch(&intent_envelope(name))
            .unwrap()
            .unwrap();

        assert!(!response.ends_session());
        match response.speech() {
            OutputSpeech::Ssml { ssml } => {
                assert!(ssml.starts_with("<speak>"), "missing root tag: {ssml}");
                assert!(ssml.ends_with("</speak>"), "missing closing tag: {ssml}");
            }
            other => panic!("Expected SSML speech, got {other:?}"),
        }
    }
}

#[test]
fn test_unrecognized_intent_falls_through_to_the_default_handler() {
    // Setup
    let dispatcher = SkillDispatcher::new();

    // Execute
    let response = dispatcher
        .dispatch(&intent_envelope("unknownIntent123"))
        .unwrap()
        .unwrap();

    // Verify: a normal response, not an error
    assert!(!response.ends_session());
    let fallback = MessageCatalog::global().lines(MessageCategory::Fallback);
    match response.speech() {
        OutputSpeech::PlainText { text } => {
            assert!(fallback.contains(text), "unexpected fallback: {text}");
        }
        other => panic!("Expected PlainText speech, got {other:?}"),
    }
}

#[test]
fn test_session_ended_produces_no_response_by_contract() {
    // Setup
    let dispatcher = SkillDispatcher::new();
    let envelope = RequestEnvelope::new(RequestBody::SessionEndedRequest(SessionEndedRequest {
        request_id: format!("amzn1.echo-api.request.{}", Uuid::new_v4()),
        timestamp: None,
        locale: None,
        reason: None,
        error: None,
    }));

    // Execute
    let result = dispatcher.dispatch(&envelope).unwrap();

    // Verify
    assert!(result.is_none());
}

#[test]
fn test_unsupported_request_type_surfaces_a_typed_error() {
    // Setup: an event whose type this skill does not handle
    let dispatcher = SkillDispatcher::new();
    let payload = r#"{
        "version": "1.0",
        "request": { "type": "CanFulfillIntentRequest", "requestId": "r-1" }
    }"#;

    // Execute
    let result = dispatcher.dispatch_json(payload);

    // Verify: the offending type string is preserved
    match result.unwrap_err() {
        SkillError::UnsupportedRequestType { request_type } => {
            assert_eq!(request_type, "CanFulfillIntentRequest");
        }
        other => panic!("Expected UnsupportedRequestType, got {other:?}"),
    }
}

#[test]
fn test_malformed_payload_fails_with_a_typed_error() {
    let dispatcher = SkillDispatcher::new();

    // Missing the request object entirely
    let result = dispatcher.dispatch_json(r#"{ "version": "1.0" }"#);

    match result.unwrap_err() {
        SkillError::MalformedRequest { .. } => {}
        other => panic!("Expected MalformedRequest, got {other:?}"),
    }
}

#[test]
fn test_intent_without_a_name_is_malformed() {
    let dispatcher = SkillDispatcher::new();
    let payload = r#"{
        "version": "1.0",
        "request": { "type": "IntentRequest", "requestId": "r-1", "intent": {} }
    }"#;

    let result = dispatcher.dispatch_json(payload);

    match result.unwrap_err() {
        SkillError::MalformedRequest { .. } => {}
        other => panic!("Expected MalformedRequest, got {other:?}"),
    }
}
