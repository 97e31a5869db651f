use crate::config::{EmotionConfig, EmotionProfile};
use crate::error::AppError;

/// Result of classifying one piece of journal text.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub emotion: String,
    pub stress: i32,
}

pub struct Classifier {
    emotions: Vec<EmotionProfile>,
    default_index: usize,
}

impl Classifier {
    pub fn new(config: &EmotionConfig) -> Result<Self, AppError> {
        if config.emotions.is_empty() {
            return Err(AppError::InvalidInput {
                field: "emotions",
                reason: "must not be empty".into(),
            });
        }

        let default_index = config
            .emotions
            .iter()
            .position(|e| e.name == config.default_emotion)
            .unwrap_or(0);

        Ok(Self {
            emotions: config.emotions.clone(),
            default_index,
        })
    }

    /// Classify free text into an emotion and its configured stress
    /// score.
    ///
    /// Counts, per emotion, how many of its keywords occur in the
    /// lower-cased text. Each keyword is tested once by substring
    /// containment, so repeated occurrences of the same keyword do not
    /// raise the count. The first emotion in configuration order with
    /// the strictly highest count wins; when nothing matches at all
    /// the default emotion is returned.
    pub fn classify(&self, text: &str) -> Classification {
        let lower = text.to_lowercase();

        let mut best_index = self.default_index;
        let mut best_count = 0;

        for (index, emotion) in self.emotions.iter().enumerate() {
            let count = emotion
                .keywords
                .iter()
                .filter(|keyword| lower.contains(keyword.as_str()))
                .count();

            if count > best_count {
                best_index = index;
                best_count = count;
            }
        }

        let winner = &self.emotions[best_index];
        Classification {
            emotion: winner.name.clone(),
            stress: winner.stress,
        }
    }
}
