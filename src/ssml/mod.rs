//! Speech-markup combinators
//!
//! Small builder functions over SSML tags: each wraps a substring in a
//! start/end tag pair by string concatenation. Nothing here parses markup
//! or builds a tree; nesting happens by composing the returned strings.

use serde::{Deserialize, Serialize};

/// Wrap `body` in a bare start/end tag pair
pub fn wrap(tag: &str, body: &str) -> String {
    format!("<{tag}>{body}</{tag}>")
}

/// Wrap `body` in a tag carrying a single attribute
pub fn wrap_with(tag: &str, attribute: &str, value: &str, body: &str) -> String {
    format!("<{tag} {attribute}=\"{value}\">{body}</{tag}>")
}

/// Enclose a markup body in the `<speak>` root tag
pub fn speak(body: &str) -> String {
    wrap("speak", body)
}

/// Emphasize a span at the given level
pub fn emphasis(level: EmphasisLevel, body: &str) -> String {
    wrap_with("emphasis", "level", level.as_str(), body)
}

/// Deliver a span in a whisper
pub fn whisper(body: &str) -> String {
    wrap_with("amazon:effect", "name", "whispered", body)
}

/// Mask a span as an expletive (rendered as a bleep)
pub fn expletive(body: &str) -> String {
    wrap_with("say-as", "interpret-as", "expletive", body)
}

/// Shift the pitch of a span
pub fn pitch(level: PitchLevel, body: &str) -> String {
    wrap_with("prosody", "pitch", level.as_str(), body)
}

/// Change the speaking rate of a span
pub fn rate(level: RateLevel, body: &str) -> String {
    wrap_with("prosody", "rate", level.as_str(), body)
}

/// Emphasis strength for a span
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisLevel {
    Strong,
    Moderate,
    Reduced,
}

impl EmphasisLevel {
    /// The attribute value the synthesizer expects
    pub fn as_str(&self) -> &'static str {
        match self {
            EmphasisLevel::Strong => "strong",
            EmphasisLevel::Moderate => "moderate",
            EmphasisLevel::Reduced => "reduced",
        }
    }
}

/// Pitch shift for a span
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PitchLevel {
    XLow,
    Low,
    Medium,
    High,
    XHigh,
}

impl PitchLevel {
    /// The attribute value the synthesizer expects
    pub fn as_str(&self) -> &'static str {
        match self {
            PitchLevel::XLow => "x-low",
            PitchLevel::Low => "low",
            PitchLevel::Medium => "medium",
            PitchLevel::High => "high",
            PitchLevel::XHigh => "x-high",
        }
    }
}

/// Speaking rate for a span
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RateLevel {
    XSlow,
    Slow,
    Medium,
    Fast,
    XFast,
}

impl RateLevel {
    /// The attribute value the synthesizer expects
    pub fn as_str(&self) -> &'static str {
        match self {
            RateLevel::XSlow => "x-slow",
            RateLevel::Slow => "slow",
            RateLevel::Medium => "medium",
            RateLevel::Fast => "fast",
            RateLevel::XFast => "x-fast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_emits_matching_tag_pair() {
        assert_eq!(wrap("speak", "hello"), "<speak>hello</speak>");
    }

    #[test]
    fn test_wrap_with_emits_attribute() {
        assert_eq!(
            wrap_with("prosody", "rate", "slow", "take it easy"),
            "<prosody rate=\"slow\">take it easy</prosody>"
        );
    }

    #[test]
    fn test_wrap_is_deterministic() {
        // Same literal, same tag, same output both times
        let first = emphasis(EmphasisLevel::Strong, "dragons");
        let second = emphasis(EmphasisLevel::Strong, "dragons");
        assert_eq!(first, second);
    }

    #[test]
    fn test_nesting_is_string_concatenation() {
        let inner = whisper("full of terror");
        let outer = speak(&format!("The night is dark and {inner}"));
        assert_eq!(
            outer,
            "<speak>The night is dark and \
             <amazon:effect name=\"whispered\">full of terror</amazon:effect></speak>"
        );
    }

    #[test]
    fn test_combinators_are_well_formed() {
        // Every opened tag has a matching closing tag
        let samples = vec![
            speak("hi"),
            emphasis(EmphasisLevel::Moderate, "hi"),
            whisper("hi"),
            expletive("hi"),
            pitch(PitchLevel::XHigh, "hi"),
            rate(RateLevel::XSlow, "hi"),
        ];
        for markup in samples {
            assert_eq!(
                markup.matches('<').count(),
                markup.matches('>').count(),
                "unbalanced angle brackets in {markup}"
            );
            assert_eq!(
                markup.matches("</").count(),
                1,
                "expected exactly one closing tag in {markup}"
            );
        }
    }

    #[test]
    fn test_level_values_match_wire_vocabulary() {
        assert_eq!(PitchLevel::XLow.as_str(), "x-low");
        assert_eq!(RateLevel::XFast.as_str(), "x-fast");
        assert_eq!(EmphasisLevel::Reduced.as_str(), "reduced");
    }
}
