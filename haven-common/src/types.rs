//! Core domain types shared across the Haven backend
//!
//! The mood bucket enumeration, safety flag, the persisted check-in record,
//! and the ephemeral inference result produced by the mood resolver.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed mood bucket set summarizing inferred emotional state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Stressed,
    Tired,
    Lonely,
    Urgent,
    Neutral,
}

impl Mood {
    /// Normalize an upstream mood label into the fixed bucket set.
    ///
    /// Upstream services are duck-typed; anything unrecognized collapses
    /// to `Neutral` rather than failing the request.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "happy" => Mood::Happy,
            "sad" => Mood::Sad,
            "stressed" | "anxious" => Mood::Stressed,
            "tired" => Mood::Tired,
            "lonely" => Mood::Lonely,
            "urgent" => Mood::Urgent,
            _ => Mood::Neutral,
        }
    }

    /// Lowercase label, matching the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Stressed => "stressed",
            Mood::Tired => "tired",
            Mood::Lonely => "lonely",
            Mood::Urgent => "urgent",
            Mood::Neutral => "neutral",
        }
    }
}

/// Self-harm risk indicator attached to every inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyFlag {
    Safe,
    Flag,
}

impl SafetyFlag {
    /// Parse an upstream safety label; anything unrecognized is `Safe`
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "flag" | "unsafe" => SafetyFlag::Flag,
            _ => SafetyFlag::Safe,
        }
    }
}

/// One playlist suggestion attached to an inference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Playlist identifier (a URL for Spotify playlists)
    pub id: String,
    /// Display label
    pub label: String,
}

impl PlaylistEntry {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            id: url.into(),
            label: "Mood Playlist".to_string(),
        }
    }
}

/// A persisted check-in: immutable once stored, appended per user,
/// read back newest-first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinRecord {
    /// Server-assigned record id
    pub id: String,
    pub user_id: String,
    /// Check-in text, already redacted
    pub text: String,
    pub mood: Mood,
    /// Affirmation shown to the user
    pub message: String,
    pub playlist: Vec<PlaylistEntry>,
    pub safety_flag: SafetyFlag,
    /// ISO-8601 creation timestamp
    pub timestamp: DateTime<Utc>,
}

/// Ephemeral mood inference produced per request by the resolver chain,
/// consumed immediately to build a `CheckinRecord`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodInference {
    pub mood: Mood,
    pub affirmation: String,
    pub playlist: Vec<PlaylistEntry>,
    pub safety_flag: SafetyFlag,
    /// Strategy confidence in [0, 1]
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_label_normalization() {
        assert_eq!(Mood::from_label("Happy"), Mood::Happy);
        assert_eq!(Mood::from_label(" STRESSED "), Mood::Stressed);
        assert_eq!(Mood::from_label("ecstatic"), Mood::Neutral);
        assert_eq!(Mood::from_label(""), Mood::Neutral);
    }

    #[test]
    fn mood_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mood::Happy).unwrap(), "\"happy\"");
        let parsed: Mood = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(parsed, Mood::Urgent);
    }

    #[test]
    fn safety_flag_parsing() {
        assert_eq!(SafetyFlag::from_label("flag"), SafetyFlag::Flag);
        assert_eq!(SafetyFlag::from_label("safe"), SafetyFlag::Safe);
        assert_eq!(SafetyFlag::from_label("???"), SafetyFlag::Safe);
    }
}
