//! Mood resolution chain
//!
//! Tries a remote ML service, then a local inference subprocess, then the
//! rule engine, in that order. Strategy failures are logged and absorbed;
//! `resolve` always returns an inference.

use super::{LocalMlClient, RemoteMlClient, RuleEngine};
use haven_common::types::MoodInference;
use tracing::warn;

/// Confidence reported when an ML tier (remote or local) resolves
const ML_CONFIDENCE: f64 = 0.9;

/// Confidence reported by the rule tier after the local tier failed
const DEGRADED_CONFIDENCE: f64 = 0.1;

/// Confidence reported for empty input
const EMPTY_CONFIDENCE: f64 = 0.0;

/// Three-tier mood resolver
///
/// The remote and local tiers are optional; with neither configured the
/// rule engine handles everything.
pub struct MoodResolver {
    remote: Option<RemoteMlClient>,
    local: Option<LocalMlClient>,
    rules: RuleEngine,
}

impl MoodResolver {
    pub fn new(
        remote: Option<RemoteMlClient>,
        local: Option<LocalMlClient>,
        rules: RuleEngine,
    ) -> Self {
        Self {
            remote,
            local,
            rules,
        }
    }

    /// Rule-only resolver
    pub fn rules_only(rules: RuleEngine) -> Self {
        Self::new(None, None, rules)
    }

    /// Resolve cleaned check-in text into a mood inference. Never fails.
    pub async fn resolve(&self, text: &str) -> MoodInference {
        if text.trim().is_empty() {
            return RuleEngine::default_inference(EMPTY_CONFIDENCE);
        }

        if let Some(remote) = &self.remote {
            match remote.analyze(text).await {
                Ok(payload) => return payload.into_inference(ML_CONFIDENCE),
                Err(e) => {
                    warn!(error = %e, "Remote ML tier failed, falling through");
                }
            }
        }

        let mut local_failed = false;
        if let Some(local) = &self.local {
            match local.analyze(text).await {
                Ok(payload) => return payload.into_inference(ML_CONFIDENCE),
                Err(e) => {
                    local_failed = true;
                    warn!(error = %e, "Local inference tier failed, falling through");
                }
            }
        }

        let confidence = if local_failed {
            DEGRADED_CONFIDENCE
        } else {
            super::rules::RULE_CONFIDENCE
        };
        self.rules.infer(text, confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_common::types::{Mood, SafetyFlag};

    #[tokio::test]
    async fn empty_input_short_circuits() {
        let resolver = MoodResolver::rules_only(RuleEngine::new());
        let inference = resolver.resolve("   ").await;
        assert_eq!(inference.mood, Mood::Neutral);
        assert_eq!(inference.confidence, 0.0);
    }

    #[tokio::test]
    async fn rules_tier_reports_full_confidence() {
        let resolver = MoodResolver::rules_only(RuleEngine::new());
        let inference = resolver.resolve("I feel great today").await;
        assert_eq!(inference.mood, Mood::Happy);
        assert_eq!(inference.safety_flag, SafetyFlag::Safe);
        assert_eq!(inference.confidence, 0.85);
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn failed_local_tier_degrades_confidence() {
        let local = LocalMlClient::from_command_line("false").unwrap();
        let resolver = MoodResolver::new(None, Some(local), RuleEngine::new());
        let inference = resolver.resolve("feeling stressed about exams").await;
        assert_eq!(inference.mood, Mood::Stressed);
        assert_eq!(inference.confidence, 0.1);
    }

    #[tokio::test]
    async fn unreachable_remote_falls_through_to_rules() {
        // Closed port: connection is refused immediately, no hang
        let remote = RemoteMlClient::new("http://127.0.0.1:9").unwrap();
        let resolver = MoodResolver::new(Some(remote), None, RuleEngine::new());
        let inference = resolver.resolve("so sad lately").await;
        assert_eq!(inference.mood, Mood::Sad);
        assert_eq!(inference.confidence, 0.85);
        assert!(inference.confidence >= 0.0 && inference.confidence <= 1.0);
    }
}
