//! Upstream service clients and the mood-resolution chain

pub mod local_ml;
pub mod news_client;
pub mod remote_ml;
pub mod resolver;
pub mod rules;
pub mod weather_client;

pub use local_ml::LocalMlClient;
pub use news_client::NewsClient;
pub use remote_ml::RemoteMlClient;
pub use resolver::MoodResolver;
pub use rules::RuleEngine;
pub use weather_client::WeatherClient;

use haven_common::types::{Mood, MoodInference, PlaylistEntry, SafetyFlag};
use serde::Deserialize;

/// Wire shape shared by the remote ML service and the local inference
/// subprocess. Every field is optional; upstream responses are duck-typed
/// and validated here at the boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct InferencePayload {
    pub mood_bucket: Option<String>,
    pub affirmation: Option<String>,
    pub playlist_url: Option<String>,
    pub safety_flag: Option<String>,
}

impl InferencePayload {
    /// Convert the loose upstream shape into a validated `MoodInference`
    pub fn into_inference(self, confidence: f64) -> MoodInference {
        let mood = self
            .mood_bucket
            .as_deref()
            .map(Mood::from_label)
            .unwrap_or(Mood::Neutral);
        let safety_flag = self
            .safety_flag
            .as_deref()
            .map(SafetyFlag::from_label)
            .unwrap_or(SafetyFlag::Safe);
        MoodInference {
            mood,
            affirmation: self
                .affirmation
                .unwrap_or_else(|| "Thanks for checking in!".to_string()),
            playlist: self
                .playlist_url
                .map(|url| vec![PlaylistEntry::from_url(url)])
                .unwrap_or_default(),
            safety_flag,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_maps_full_response() {
        let payload: InferencePayload = serde_json::from_str(
            r#"{
                "mood_bucket": "Happy",
                "affirmation": "Nice one!",
                "playlist_url": "https://open.spotify.com/playlist/abc",
                "safety_flag": "safe"
            }"#,
        )
        .unwrap();

        let inference = payload.into_inference(0.9);
        assert_eq!(inference.mood, Mood::Happy);
        assert_eq!(inference.affirmation, "Nice one!");
        assert_eq!(inference.playlist.len(), 1);
        assert_eq!(inference.safety_flag, SafetyFlag::Safe);
        assert_eq!(inference.confidence, 0.9);
    }

    #[test]
    fn payload_defaults_missing_fields() {
        let payload: InferencePayload = serde_json::from_str("{}").unwrap();
        let inference = payload.into_inference(0.9);
        assert_eq!(inference.mood, Mood::Neutral);
        assert_eq!(inference.safety_flag, SafetyFlag::Safe);
        assert!(inference.playlist.is_empty());
        assert!(!inference.affirmation.is_empty());
    }
}
