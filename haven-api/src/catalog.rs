//! Bundled reference data: tips, flashcards, crisis helplines
//!
//! Loaded once at startup from JSON bundled into the binary; read-only for
//! the life of the process.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// One wellness tip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tip {
    pub id: String,
    pub category: String,
    pub title: String,
    pub text: String,
    pub duration: String,
    pub language: String,
}

/// One quiz flashcard; `answer` is the index into `options` and is never
/// sent to the client unanswered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub answer: usize,
    pub difficulty: String,
}

/// One crisis helpline entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Helpline {
    pub name: String,
    pub phone: String,
    pub available: String,
}

/// Immutable reference data shared by the route handlers
pub struct Catalog {
    pub tips: Vec<Tip>,
    pub flashcards: Vec<Flashcard>,
    pub helplines: Vec<Helpline>,
}

impl Catalog {
    /// Parse the bundled data files. Fails only if the bundled JSON is
    /// malformed, which is a build defect caught at startup.
    pub fn load() -> anyhow::Result<Self> {
        let tips = serde_json::from_str(include_str!("../data/tips.json"))?;
        let flashcards = serde_json::from_str(include_str!("../data/flashcards.json"))?;
        let helplines = serde_json::from_str(include_str!("../data/helplines.json"))?;
        Ok(Self {
            tips,
            flashcards,
            helplines,
        })
    }

    /// First tip whose category, title, or text contains the mood
    /// (case-insensitive); falls back to a uniformly random tip.
    pub fn tip_for_mood(&self, mood: Option<&str>) -> Option<&Tip> {
        if let Some(mood) = mood {
            let needle = mood.to_lowercase();
            let found = self.tips.iter().find(|t| {
                t.category.to_lowercase().contains(&needle)
                    || t.title.to_lowercase().contains(&needle)
                    || t.text.to_lowercase().contains(&needle)
            });
            if found.is_some() {
                return found;
            }
        }
        self.tips.choose(&mut rand::thread_rng())
    }

    /// Uniformly random flashcard, if any are loaded
    pub fn random_flashcard(&self) -> Option<&Flashcard> {
        self.flashcards.choose(&mut rand::thread_rng())
    }

    /// Flashcard lookup by id
    pub fn flashcard(&self, id: u32) -> Option<&Flashcard> {
        self.flashcards.iter().find(|f| f.id == id)
    }
}
