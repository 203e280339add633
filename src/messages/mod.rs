//! Pre-authored response lines, grouped by intent category
//!
//! Each category maps to an ordered list of candidate lines and the speech
//! kind those lines render as. Selection is uniform-random per call with no
//! repetition avoidance. The catalog is built once and read-only afterwards.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::response::ResponseEnvelope;
use crate::ssml::{self, EmphasisLevel, PitchLevel, RateLevel};

static CATALOG: LazyLock<MessageCatalog> = LazyLock::new(MessageCatalog::new);

/// Intent categories with authored response pools
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MessageCategory {
    /// Session launch greeting
    Welcome,
    /// Stop/cancel farewell
    Farewell,
    /// Usage prompt
    Help,
    /// Themed forecast lines
    WeatherForecast,
    /// Reply to a hello
    Greeting,
    /// Reply to "how are you"
    HowAreYou,
    /// Confirmation for the test intent
    Test,
    /// Deflection for unmatched intents
    Fallback,
}

impl MessageCategory {
    /// Every category the catalog carries
    pub fn all() -> &'static [MessageCategory] {
        &[
            MessageCategory::Welcome,
            MessageCategory::Farewell,
            MessageCategory::Help,
            MessageCategory::WeatherForecast,
            MessageCategory::Greeting,
            MessageCategory::HowAreYou,
            MessageCategory::Test,
            MessageCategory::Fallback,
        ]
    }
}

/// How a category's lines are rendered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SpeechKind {
    /// Emitted verbatim as plain text
    Plain,
    /// Emitted inside a `<speak>` markup document
    Ssml,
}

/// A category's candidate lines and their speech kind
#[derive(Debug, Clone, PartialEq)]
pub struct MessagePool {
    pub kind: SpeechKind,
    pub lines: Vec<String>,
}

/// Read-only mapping from category to candidate response lines
#[derive(Debug, Clone, PartialEq)]
pub struct MessageCatalog {
    pools: HashMap<MessageCategory, MessagePool>,
}

impl MessageCatalog {
    /// Build the catalog with its authored pools
    pub fn new() -> Self {
        let mut pools = HashMap::new();

        pools.insert(
            MessageCategory::Welcome,
            MessagePool {
                kind: SpeechKind::Plain,
                lines: vec![
                    "I'm launching".to_string(),
                    "Welcome back. What can I do for you?".to_string(),
                    "Hello. Ready when you are.".to_string(),
                ],
            },
        );

        pools.insert(
            MessageCategory::Farewell,
            MessagePool {
                kind: SpeechKind::Plain,
                lines: vec![
                    "Oh, hashtag finally".to_string(),
                    "Goodbye for now.".to_string(),
                    "See you next time.".to_string(),
                ],
            },
        );

        pools.insert(
            MessageCategory::Help,
            MessagePool {
                kind: SpeechKind::Plain,
                lines: vec![
                    "Try asking for the weather forecast, or just say hello.".to_string(),
                    "You can ask about the weather, say hello, or say stop to leave."
                        .to_string(),
                ],
            },
        );

        pools.insert(
            MessageCategory::WeatherForecast,
            MessagePool {
                kind: SpeechKind::Ssml,
                lines: vec![
                    "The night is dark and full of terror".to_string(),
                    format!(
                        "Winter is coming. {}",
                        ssml::whisper("The night is dark and full of terror")
                    ),
                    format!(
                        "Expect {} beyond the wall.",
                        ssml::emphasis(EmphasisLevel::Strong, "heavy snow")
                    ),
                    format!(
                        "{} Bring a cloak.",
                        ssml::pitch(PitchLevel::Low, "A cold wind rises from the north.")
                    ),
                ],
            },
        );

        pools.insert(
            MessageCategory::Greeting,
            MessagePool {
                kind: SpeechKind::Plain,
                lines: vec![
                    "Hello there.".to_string(),
                    "Hi. Nice to hear from you.".to_string(),
                    "Well hello. What shall we do?".to_string(),
                ],
            },
        );

        pools.insert(
            MessageCategory::HowAreYou,
            MessagePool {
                kind: SpeechKind::Ssml,
                lines: vec![
                    format!(
                        "I'm doing {}, thanks for asking.",
                        ssml::emphasis(EmphasisLevel::Strong, "great")
                    ),
                    format!(
                        "{} Never better.",
                        ssml::rate(RateLevel::Fast, "Fantastic.")
                    ),
                    format!(
                        "Pretty {} good, honestly.",
                        ssml::expletive("darn")
                    ),
                ],
            },
        );

        pools.insert(
            MessageCategory::Test,
            MessagePool {
                kind: SpeechKind::Plain,
                lines: vec!["You successfully tested the functionality!".to_string()],
            },
        );

        pools.insert(
            MessageCategory::Fallback,
            MessagePool {
                kind: SpeechKind::Plain,
                lines: vec![
                    "This is an intent".to_string(),
                    "I didn't catch that. Say help to hear what I can do.".to_string(),
                ],
            },
        );

        Self { pools }
    }

    /// The process-wide catalog, built on first use
    pub fn global() -> &'static MessageCatalog {
        &CATALOG
    }

    /// The candidate lines for a category
    pub fn lines(&self, category: MessageCategory) -> &[String] {
        &self.pool(category).lines
    }

    /// The speech kind a category renders as
    pub fn kind(&self, category: MessageCategory) -> SpeechKind {
        self.pool(category).kind
    }

    /// Uniformly select one candidate line from a category
    pub fn pick(&self, category: MessageCategory) -> &str {
        let pool = self.pool(category);
        pool.lines
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            // every pool is constructed non-empty above
            .unwrap_or_default()
    }

    /// Select a line and compose it into a response envelope
    pub fn speech(&self, category: MessageCategory, end_session: bool) -> ResponseEnvelope {
        let line = self.pick(category);
        match self.kind(category) {
            SpeechKind::Plain => ResponseEnvelope::plain(line, end_session),
            SpeechKind::Ssml => ResponseEnvelope::ssml(line, end_session),
        }
    }

    fn pool(&self, category: MessageCategory) -> &MessagePool {
        // the constructor inserts a pool for every category
        &self.pools[&category]
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}
