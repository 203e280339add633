//! Speech Markup Example
//!
//! This example demonstrates how to:
//! - Build speech-markup spans with the combinators
//! - Compose nested spans by string concatenation
//! - Draw random variants from the message pools

use skill_dialog::messages::{MessageCatalog, MessageCategory};
use skill_dialog::ssml::{self, EmphasisLevel, PitchLevel, RateLevel};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== Speech Markup Example ===\n");

    // Step 1: Single-span combinators
    println!("1. Individual combinators...");
    println!("   {}", ssml::emphasis(EmphasisLevel::Strong, "Winter is coming"));
    println!("   {}", ssml::whisper("The night is dark and full of terror"));
    println!("   {}", ssml::pitch(PitchLevel::XHigh, "Dragons overhead!"));
    println!("   {}", ssml::rate(RateLevel::XSlow, "Hold the door."));
    println!("   {}\n", ssml::expletive("darn"));

    // Step 2: Nesting by concatenation
    println!("2. Nested spans...");
    let warning = format!(
        "Expect {} tonight. {}",
        ssml::emphasis(EmphasisLevel::Strong, "heavy snow"),
        ssml::whisper("Stay indoors."),
    );
    println!("   {}\n", ssml::speak(&warning));

    // Step 3: Random draws from a pool
    println!("3. Five draws from the weather pool...");
    let catalog = MessageCatalog::global();
    for n in 1..=5 {
        println!("   Draw {n}: {}", catalog.pick(MessageCategory::WeatherForecast));
    }

    // Step 4: A composed response envelope
    println!("\n4. Composed response JSON...");
    let response = catalog.speech(MessageCategory::HowAreYou, false);
    println!("   {}", serde_json::to_string_pretty(&response)?);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
