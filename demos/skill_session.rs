//! Skill Session Example
//!
//! This example demonstrates how to:
//! - Dispatch a session launch event
//! - Invoke recognized and unrecognized intents
//! - Observe the end-session policy for stop
//! - Handle the session-ended notification

use skill_dialog::{
    Intent, IntentRequest, LaunchRequest, RequestBody, RequestEnvelope, Session,
    SessionEndReason, SessionEndedRequest, SkillDispatcher,
};
use std::collections::HashMap;
use uuid::Uuid;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== Skill Dialog Example ===\n");

    let dispatcher = SkillDispatcher::new();
    let session = Session {
        new: true,
        session_id: format!("amzn1.echo-api.session.{}", Uuid::new_v4()),
        attributes: HashMap::new(),
        application: None,
        user: None,
    };

    // Step 1: The user opens the skill
    println!("1. Launching the skill...");
    let launch = RequestEnvelope::new(RequestBody::LaunchRequest(LaunchRequest {
        request_id: request_id(),
        timestamp: None,
        locale: Some("en-US".to_string()),
    }))
    .with_session(session.clone());

    print_turn(&dispatcher, &launch)?;

    // Step 2: The user says hello
    println!("2. Saying hello...");
    print_turn(&dispatcher, &intent_turn(&session, "helloIntent"))?;

    // Step 3: The user asks for the weather
    println!("3. Asking for the weather forecast...");
    print_turn(
        &dispatcher,
        &intent_turn(&session, "AMAZON.SearchAction<object@WeatherForecast>"),
    )?;

    // Step 4: An utterance the skill does not recognize
    println!("4. Sending an unrecognized intent...");
    print_turn(&dispatcher, &intent_turn(&session, "orderPizzaIntent"))?;

    // Step 5: The user asks to stop
    println!("5. Stopping the skill...");
    print_turn(&dispatcher, &intent_turn(&session, "AMAZON.StopIntent"))?;

    // Step 6: The platform closes the session
    println!("6. Session-ended notification...");
    let ended = RequestEnvelope::new(RequestBody::SessionEndedRequest(SessionEndedRequest {
        request_id: request_id(),
        timestamp: None,
        locale: Some("en-US".to_string()),
        reason: Some(SessionEndReason::UserInitiated),
        error: None,
    }))
    .with_session(session);

    match dispatcher.dispatch(&ended)? {
        Some(_) => println!("   Unexpected response after session end!"),
        None => println!("   No response, as the protocol requires."),
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}

fn intent_turn(session: &Session, name: &str) -> RequestEnvelope {
    RequestEnvelope::new(RequestBody::IntentRequest(IntentRequest {
        request_id: request_id(),
        timestamp: None,
        locale: Some("en-US".to_string()),
        dialog_state: None,
        intent: Intent::named(name),
    }))
    .with_session(session.clone())
}

fn request_id() -> String {
    format!("amzn1.echo-api.request.{}", Uuid::new_v4())
}

fn print_turn(
    dispatcher: &SkillDispatcher,
    envelope: &RequestEnvelope,
) -> anyhow::Result<()> {
    let response = dispatcher
        .dispatch(envelope)?
        .expect("this turn should produce a response");

    println!("   Speech: {}", response.speech().content());
    println!("   Ends session: {}\n", response.ends_session());
    Ok(())
}
