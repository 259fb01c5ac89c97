//! Rotating headline words.
//!
//! The rotator cycles through a list of words read from markup. Each cycle is
//! two steps: the word fades out (`begin_fade`), then after a short delay the
//! next word is swapped in and the fade cleared (`complete_fade`). Keeping the
//! two steps explicit lets the DOM side drive them from separate timers.

use crate::motion::MotionPreference;
use serde::Deserialize;
use thiserror::Error;

pub const ROTATOR_SELECTOR: &str = "[data-rotating]";
pub const WORDS_ATTR: &str = "data-words";
pub const FADE_CLASS: &str = "fade";

#[derive(Debug, Error)]
pub enum RotatorConfigError {
    #[error("word list is not a JSON array of strings: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(transparent)]
struct WordList(Vec<String>);

/// Parses the `data-words` payload. A missing attribute reads as `[]`.
pub fn parse_words(raw: Option<&str>) -> Result<Vec<String>, RotatorConfigError> {
    let WordList(words) = serde_json::from_str(raw.unwrap_or("[]"))?;
    Ok(words)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotatorPhase {
    Displaying,
    Fading,
}

#[derive(Clone, Debug)]
pub struct WordRotator {
    words: Vec<String>,
    index: usize,
    phase: RotatorPhase,
}

impl WordRotator {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            index: 0,
            phase: RotatorPhase::Displaying,
        }
    }

    /// Builds a rotator from raw markup. Malformed input yields an empty
    /// rotator, which never displays or animates anything.
    pub fn from_config(raw: Option<&str>) -> Self {
        let words = parse_words(raw).unwrap_or_else(|error| {
            tracing::debug!(%error, "ignoring rotator word list");
            Vec::new()
        });
        Self::new(words)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> RotatorPhase {
        self.phase
    }

    pub fn current(&self) -> Option<&str> {
        self.words.get(self.index).map(String::as_str)
    }

    pub fn should_animate(&self, motion: MotionPreference) -> bool {
        !motion.is_reduced() && self.words.len() > 1
    }

    /// Displaying -> Fading. Returns false if a fade is already running.
    pub fn begin_fade(&mut self) -> bool {
        if self.phase == RotatorPhase::Fading {
            return false;
        }
        self.phase = RotatorPhase::Fading;
        true
    }

    /// Fading -> Displaying, advancing to the next word with wraparound.
    pub fn complete_fade(&mut self) -> Option<&str> {
        if self.phase != RotatorPhase::Fading || self.words.is_empty() {
            return None;
        }
        self.phase = RotatorPhase::Displaying;
        self.index = (self.index + 1) % self.words.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(rotator: &mut WordRotator) -> String {
        assert!(rotator.begin_fade());
        assert_eq!(rotator.phase(), RotatorPhase::Fading);
        rotator
            .complete_fade()
            .expect("fade completes with a word")
            .to_string()
    }

    #[test]
    fn malformed_payloads_yield_empty_static_rotator() {
        for raw in ["not json", "{\"a\":1}", "[1, 2]", "[\"ok\", null]", "", "[\"unterminated"] {
            let rotator = WordRotator::from_config(Some(raw));
            assert!(rotator.words().is_empty(), "payload {raw:?} should be empty");
            assert_eq!(rotator.current(), None);
            assert!(!rotator.should_animate(MotionPreference::Full));
        }
    }

    #[test]
    fn missing_attribute_reads_as_empty() {
        let rotator = WordRotator::from_config(None);
        assert!(rotator.words().is_empty());
        assert!(parse_words(None).expect("default payload parses").is_empty());
    }

    #[test]
    fn parse_error_is_reported() {
        let error = parse_words(Some("[")).expect_err("truncated payload fails");
        assert!(matches!(error, RotatorConfigError::Malformed(_)));
    }

    #[test]
    fn cycles_in_order_and_wraps() {
        let mut rotator = WordRotator::from_config(Some("[\"Build\",\"Ship\",\"Scale\"]"));
        assert_eq!(rotator.current(), Some("Build"));
        assert!(rotator.should_animate(MotionPreference::Full));

        assert_eq!(cycle(&mut rotator), "Ship");
        assert_eq!(cycle(&mut rotator), "Scale");
        assert_eq!(cycle(&mut rotator), "Build");
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn reduced_motion_or_single_word_stays_static() {
        let many = WordRotator::from_config(Some("[\"a\",\"b\"]"));
        assert!(!many.should_animate(MotionPreference::Reduced));
        assert_eq!(many.current(), Some("a"));

        let single = WordRotator::from_config(Some("[\"only\"]"));
        assert!(!single.should_animate(MotionPreference::Full));
        assert_eq!(single.current(), Some("only"));
    }

    #[test]
    fn out_of_phase_steps_are_ignored() {
        let mut rotator = WordRotator::new(vec!["a".into(), "b".into()]);
        assert_eq!(rotator.complete_fade(), None);
        assert_eq!(rotator.index(), 0);

        assert!(rotator.begin_fade());
        assert!(!rotator.begin_fade());
        assert_eq!(rotator.complete_fade(), Some("b"));
        assert_eq!(rotator.phase(), RotatorPhase::Displaying);
    }
}
