//! Intent routing by exact name match
//!
//! The recognized set is fixed and enumerable. Matching is case-sensitive
//! and exact: no fuzzy or prefix matching, no slot inspection. Unmatched
//! names fall through to `Unrecognized`, which is a normal response path.

use serde::{Deserialize, Serialize};

use crate::messages::MessageCategory;

/// Built-in stop intent name
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
/// Built-in cancel intent name
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
/// Built-in help intent name
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
/// Custom hello intent name
pub const HELLO_INTENT: &str = "helloIntent";
/// Custom "how are you" intent name
pub const HOW_ARE_YOU_INTENT: &str = "howAreYouIntent";
/// Custom test intent name
pub const TEST_INTENT: &str = "testIntent";
/// Built-in weather-forecast search action
pub const WEATHER_FORECAST_INTENT: &str = "AMAZON.SearchAction<object@WeatherForecast>";
/// Built-in weather-forecast search action, temperature facet
pub const WEATHER_TEMPERATURE_INTENT: &str =
    "AMAZON.SearchAction<object@WeatherForecast|temperature>";
/// Built-in weather-forecast search action, condition facet
pub const WEATHER_CONDITION_INTENT: &str =
    "AMAZON.SearchAction<object@WeatherForecast|weatherCondition>";

/// The handler an intent name routes to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IntentKind {
    /// User asked to stop; session ends
    Stop,
    /// User asked to cancel; delegates to the stop handler
    Cancel,
    /// User asked what the skill can do
    Help,
    /// User said hello
    Hello,
    /// User asked how the skill is doing
    HowAreYou,
    /// Any of the three weather-forecast search actions
    WeatherForecast,
    /// Functional smoke-test intent
    Test,
    /// Name not in the recognized set; default handler
    Unrecognized,
}

impl IntentKind {
    /// Route a declared intent name to its handler by exact match
    pub fn from_name(name: &str) -> Self {
        match name {
            STOP_INTENT => IntentKind::Stop,
            CANCEL_INTENT => IntentKind::Cancel,
            HELP_INTENT => IntentKind::Help,
            HELLO_INTENT => IntentKind::Hello,
            HOW_ARE_YOU_INTENT => IntentKind::HowAreYou,
            WEATHER_FORECAST_INTENT | WEATHER_TEMPERATURE_INTENT | WEATHER_CONDITION_INTENT => {
                IntentKind::WeatherForecast
            }
            TEST_INTENT => IntentKind::Test,
            _ => IntentKind::Unrecognized,
        }
    }

    /// Every intent name with a dedicated handler
    pub fn recognized_names() -> &'static [&'static str] {
        &[
            STOP_INTENT,
            CANCEL_INTENT,
            HELP_INTENT,
            HELLO_INTENT,
            HOW_ARE_YOU_INTENT,
            WEATHER_FORECAST_INTENT,
            WEATHER_TEMPERATURE_INTENT,
            WEATHER_CONDITION_INTENT,
            TEST_INTENT,
        ]
    }

    /// Whether this intent's response closes the session
    ///
    /// Policy: only stop and cancel end the session. Help invites a
    /// follow-up utterance, so it keeps the session open.
    pub fn ends_session(&self) -> bool {
        matches!(self, IntentKind::Stop | IntentKind::Cancel)
    }

    /// The message pool this intent's response draws from
    pub fn category(&self) -> MessageCategory {
        match self {
            IntentKind::Stop | IntentKind::Cancel => MessageCategory::Farewell,
            IntentKind::Help => MessageCategory::Help,
            IntentKind::Hello => MessageCategory::Greeting,
            IntentKind::HowAreYou => MessageCategory::HowAreYou,
            IntentKind::WeatherForecast => MessageCategory::WeatherForecast,
            IntentKind::Test => MessageCategory::Test,
            IntentKind::Unrecognized => MessageCategory::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_names_route_to_their_kind() {
        assert_eq!(IntentKind::from_name(STOP_INTENT), IntentKind::Stop);
        assert_eq!(IntentKind::from_name(CANCEL_INTENT), IntentKind::Cancel);
        assert_eq!(IntentKind::from_name(HELP_INTENT), IntentKind::Help);
        assert_eq!(IntentKind::from_name(HELLO_INTENT), IntentKind::Hello);
        assert_eq!(
            IntentKind::from_name(HOW_ARE_YOU_INTENT),
            IntentKind::HowAreYou
        );
        assert_eq!(IntentKind::from_name(TEST_INTENT), IntentKind::Test);
    }

    #[test]
    fn test_all_three_weather_actions_share_one_handler() {
        for name in [
            WEATHER_FORECAST_INTENT,
            WEATHER_TEMPERATURE_INTENT,
            WEATHER_CONDITION_INTENT,
        ] {
            assert_eq!(IntentKind::from_name(name), IntentKind::WeatherForecast);
        }
    }

    #[test]
    fn test_matching_is_case_sensitive_and_exact() {
        assert_eq!(
            IntentKind::from_name("amazon.stopintent"),
            IntentKind::Unrecognized
        );
        assert_eq!(IntentKind::from_name("AMAZON.Stop"), IntentKind::Unrecognized);
        assert_eq!(
            IntentKind::from_name("AMAZON.StopIntentX"),
            IntentKind::Unrecognized
        );
        assert_eq!(IntentKind::from_name(""), IntentKind::Unrecognized);
    }

    #[test]
    fn test_only_stop_and_cancel_end_the_session() {
        for name in IntentKind::recognized_names() {
            let kind = IntentKind::from_name(name);
            let expected = matches!(kind, IntentKind::Stop | IntentKind::Cancel);
            assert_eq!(kind.ends_session(), expected, "policy mismatch for {name}");
        }
        assert!(!IntentKind::Unrecognized.ends_session());
    }

    #[test]
    fn test_recognized_names_never_fall_through() {
        for name in IntentKind::recognized_names() {
            assert_ne!(
                IntentKind::from_name(name),
                IntentKind::Unrecognized,
                "{name} should have a dedicated handler"
            );
        }
    }
}
