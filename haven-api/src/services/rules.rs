//! Rule-based mood fallback
//!
//! Last tier of the mood-resolution chain. Scans a configurable ordered
//! keyword table first, then a fixed ordered set of regex categories, and
//! pairs the resolved mood with canned affirmations and playlists. Urgent
//! language always wins and raises the safety flag.

use haven_common::types::{Mood, MoodInference, PlaylistEntry, SafetyFlag};
use once_cell::sync::Lazy;
use regex::Regex;

/// Confidence reported when the rule tier resolves normally
pub const RULE_CONFIDENCE: f64 = 0.85;

// Urgent-language patterns. These are checked before anything else; a hit
// forces mood `urgent` and safety flag `flag`.
static URGENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bkill myself\b|\bkill me\b|\bi want to die\b|\bwant to end my life\b|\bsuicid\w*|\bhurt myself\b|\bending my life\b|\bend my life\b|\bwant to die\b",
    )
    .unwrap()
});

// Fixed category checks, applied in order after the keyword table.
static STRESSED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"stress|stressed|anxiet|anxious|panic|overwhelm").unwrap());
static SAD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"sad|depress|gloom|down").unwrap());
static HAPPY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"happy|great|good|excited").unwrap());
static LONELY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"lonely|alone").unwrap());
static TIRED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"tired|exhaust|sleepy").unwrap());

/// Rule-based mood classifier with canned responses
pub struct RuleEngine {
    /// Ordered keyword table; first matching multi-character keyword wins
    keywords: Vec<(String, Mood)>,
}

impl RuleEngine {
    /// Build with the bundled keyword table
    pub fn new() -> Self {
        Self::with_keywords(parse_keyword_csv(include_str!("../../data/moods.csv")))
    }

    /// Build with an explicit keyword table (order is significant)
    pub fn with_keywords(keywords: Vec<(String, Mood)>) -> Self {
        Self { keywords }
    }

    /// Classify text into a mood bucket
    pub fn classify(&self, text: &str) -> Mood {
        let lower = text.to_lowercase();

        if URGENT_RE.is_match(&lower) {
            return Mood::Urgent;
        }

        for (keyword, mood) in &self.keywords {
            if keyword.len() > 1 && lower.contains(keyword.as_str()) {
                return *mood;
            }
        }

        if STRESSED_RE.is_match(&lower) {
            Mood::Stressed
        } else if SAD_RE.is_match(&lower) {
            Mood::Sad
        } else if HAPPY_RE.is_match(&lower) {
            Mood::Happy
        } else if LONELY_RE.is_match(&lower) {
            Mood::Lonely
        } else if TIRED_RE.is_match(&lower) {
            Mood::Tired
        } else {
            Mood::Neutral
        }
    }

    /// Produce a full inference for the text at the given confidence
    pub fn infer(&self, text: &str, confidence: f64) -> MoodInference {
        let mood = self.classify(text);
        let safety_flag = if mood == Mood::Urgent {
            SafetyFlag::Flag
        } else {
            SafetyFlag::Safe
        };
        MoodInference {
            mood,
            affirmation: affirmation_for(mood).to_string(),
            playlist: vec![PlaylistEntry::from_url(playlist_for(mood))],
            safety_flag,
            confidence,
        }
    }

    /// Canned neutral inference, used for empty input and total fallback
    pub fn default_inference(confidence: f64) -> MoodInference {
        MoodInference {
            mood: Mood::Neutral,
            affirmation: affirmation_for(Mood::Neutral).to_string(),
            playlist: vec![PlaylistEntry::from_url(playlist_for(Mood::Neutral))],
            safety_flag: SafetyFlag::Safe,
            confidence,
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Canned affirmation per mood; neutral is the catch-all entry
fn affirmation_for(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "Great to hear you're feeling positive!",
        Mood::Sad => "I'm sorry you're feeling down. Remember, it's okay to not be okay.",
        Mood::Stressed => "Stress is normal. Try some deep breathing or take a short break.",
        Mood::Tired => "Rest is important for your wellbeing. Consider getting some sleep.",
        Mood::Lonely => "Feeling alone is hard. Reaching out to one person can help.",
        Mood::Urgent => "You matter, and you don't have to face this alone. Please reach out to a helpline now.",
        Mood::Neutral => "Thank you for sharing. Remember to be kind to yourself today.",
    }
}

/// Canned playlist URL per mood; neutral is the catch-all entry
fn playlist_for(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "https://open.spotify.com/playlist/37i9dQZF1DXdPec7aLTmlC",
        Mood::Sad => "https://open.spotify.com/playlist/37i9dQZF1DWY4xHQp97fN0",
        Mood::Stressed | Mood::Urgent => {
            "https://open.spotify.com/playlist/37i9dQZF1DX4sWSpwq3LiO"
        }
        Mood::Lonely => "https://open.spotify.com/playlist/37i9dQZF1DX7gIoKXt0gmx",
        Mood::Tired | Mood::Neutral => {
            "https://open.spotify.com/playlist/37i9dQZF1DX0XUsuxWHRQd"
        }
    }
}

/// Parse a `keyword,mood` CSV (header row skipped) preserving line order
fn parse_keyword_csv(csv: &str) -> Vec<(String, Mood)> {
    csv.lines()
        .skip(1)
        .filter_map(|line| {
            let mut parts = line.splitn(2, ',');
            let keyword = parts.next()?.trim().to_lowercase();
            let mood = Mood::from_label(parts.next()?);
            if keyword.is_empty() {
                None
            } else {
                Some((keyword, mood))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_wins_over_regex() {
        // "exam" maps to stressed via the table even though no stress regex hits
        let engine = RuleEngine::new();
        assert_eq!(engine.classify("big exam tomorrow"), Mood::Stressed);
    }

    #[test]
    fn table_order_is_first_match() {
        let engine = RuleEngine::with_keywords(vec![
            ("blue".to_string(), Mood::Sad),
            ("blue sky".to_string(), Mood::Happy),
        ]);
        assert_eq!(engine.classify("blue sky today"), Mood::Sad);
    }

    #[test]
    fn regex_categories_in_order() {
        let engine = RuleEngine::with_keywords(Vec::new());
        assert_eq!(engine.classify("so much anxiety lately"), Mood::Stressed);
        assert_eq!(engine.classify("feeling gloomy"), Mood::Sad);
        assert_eq!(engine.classify("I feel great today"), Mood::Happy);
        assert_eq!(engine.classify("all alone tonight"), Mood::Lonely);
        assert_eq!(engine.classify("nothing in particular"), Mood::Neutral);
    }

    #[test]
    fn urgent_language_flags() {
        let engine = RuleEngine::new();
        let inference = engine.infer("I want to end my life", RULE_CONFIDENCE);
        assert_eq!(inference.mood, Mood::Urgent);
        assert_eq!(inference.safety_flag, SafetyFlag::Flag);
    }

    #[test]
    fn infer_carries_confidence_and_playlist() {
        let engine = RuleEngine::new();
        let inference = engine.infer("happy happy happy", 0.85);
        assert_eq!(inference.mood, Mood::Happy);
        assert_eq!(inference.confidence, 0.85);
        assert_eq!(inference.playlist.len(), 1);
        assert_eq!(inference.safety_flag, SafetyFlag::Safe);
    }

    #[test]
    fn default_inference_is_neutral() {
        let inference = RuleEngine::default_inference(0.0);
        assert_eq!(inference.mood, Mood::Neutral);
        assert_eq!(inference.confidence, 0.0);
        assert!(!inference.affirmation.is_empty());
    }
}
