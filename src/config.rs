use crate::constants::MAX_STRESS;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One emotion of the closed classification set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionProfile {
    pub name: String,
    /// Display color for distribution/chart views.
    pub color: String,
    /// Constant stress score (0-100) copied onto entries at
    /// classification time.
    pub stress: i32,
    /// Lower-cased substrings that trigger this emotion.
    pub keywords: Vec<String>,
}

/// The full classification configuration.
///
/// Vector order is the enumeration order. Classification tie-breaks
/// depend on it, so it is preserved exactly as configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionConfig {
    pub emotions: Vec<EmotionProfile>,
    /// Emotion returned when no keyword matches.
    pub default_emotion: String,
}

pub const DEFAULT_EMOTION: &str = "Neutral";

pub const DEFAULT_EMOTIONS: &[(&str, &str, i32, &[&str])] = &[
    ("Energetic", "#FF6B6B", 15, &["energetic", "excited", "pumped", "awesome", "amazing"]),
    ("Motivated", "#4ECDC4", 20, &["motivated", "focused", "goal", "succeed", "study"]),
    ("Neutral", "#95A5A6", 35, &["okay", "fine", "normal", "alright", "meh"]),
    ("Tired", "#9B59B6", 55, &["tired", "exhausted", "sleepy", "sleep", "fatigue"]),
    ("Sad", "#3498DB", 65, &["sad", "unhappy", "crying", "lonely", "miss"]),
    ("Angry", "#E74C3C", 70, &["angry", "mad", "furious", "hate", "annoyed"]),
    ("Stressed", "#F39C12", 80, &["stressed", "exam", "deadline", "pressure", "worried"]),
    ("Overwhelmed", "#E91E63", 95, &["overwhelmed", "cant", "panic", "help", "breaking"]),
];

impl Default for EmotionConfig {
    fn default() -> Self {
        let emotions = DEFAULT_EMOTIONS
            .iter()
            .map(|(name, color, stress, keywords)| EmotionProfile {
                name: (*name).to_string(),
                color: (*color).to_string(),
                stress: *stress,
                keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            })
            .collect();

        Self {
            emotions,
            default_emotion: DEFAULT_EMOTION.to_string(),
        }
    }
}

impl EmotionConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise use the built-in
    /// table.
    pub fn load_or_builtin(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn find(&self, name: &str) -> Option<&EmotionProfile> {
        self.emotions.iter().find(|e| e.name == name)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.emotions.is_empty() {
            return Err(AppError::InvalidInput {
                field: "emotions",
                reason: "must not be empty".into(),
            });
        }

        for (i, emotion) in self.emotions.iter().enumerate() {
            if emotion.stress < 0 || emotion.stress > MAX_STRESS {
                return Err(AppError::InvalidInput {
                    field: "stress",
                    reason: format!("'{}' must be between 0 and {}", emotion.name, MAX_STRESS),
                });
            }
            if self.emotions[..i].iter().any(|other| other.name == emotion.name) {
                return Err(AppError::InvalidInput {
                    field: "emotions",
                    reason: format!("duplicate emotion '{}'", emotion.name),
                });
            }
        }

        if self.find(&self.default_emotion).is_none() {
            return Err(AppError::InvalidInput {
                field: "default_emotion",
                reason: format!("'{}' is not a configured emotion", self.default_emotion),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_config_is_valid() {
        let config = EmotionConfig::default();
        config.validate().unwrap();
        assert_eq!(config.emotions.len(), 8);
        assert_eq!(config.find("Tired").unwrap().stress, 55);
        assert_eq!(config.default_emotion, "Neutral");
    }

    #[test]
    fn test_enumeration_order_is_preserved() {
        let config = EmotionConfig::default();
        assert_eq!(config.emotions[0].name, "Energetic");
        assert_eq!(config.emotions[7].name, "Overwhelmed");
    }

    #[test]
    fn test_load_from_file_overrides_builtin() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let json = r##"{
            "emotions": [
                {"name": "Calm", "color": "#AAAAAA", "stress": 10, "keywords": ["calm"]},
                {"name": "Frantic", "color": "#BB0000", "stress": 90, "keywords": ["frantic"]}
            ],
            "default_emotion": "Calm"
        }"##;
        std::fs::write(&path, json).unwrap();

        let config = EmotionConfig::load_or_builtin(&path).unwrap();
        assert_eq!(config.emotions.len(), 2);
        assert_eq!(config.find("Frantic").unwrap().stress, 90);
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let dir = tempdir().unwrap();
        let config = EmotionConfig::load_or_builtin(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.emotions.len(), 8);
    }

    #[test]
    fn test_stress_out_of_range_is_rejected() {
        let mut config = EmotionConfig::default();
        config.emotions[0].stress = 150;
        assert!(matches!(
            config.validate(),
            Err(AppError::InvalidInput { field: "stress", .. })
        ));
    }

    #[test]
    fn test_duplicate_emotion_is_rejected() {
        let mut config = EmotionConfig::default();
        config.emotions[1].name = "Energetic".to_string();
        assert!(matches!(
            config.validate(),
            Err(AppError::InvalidInput { field: "emotions", .. })
        ));
    }

    #[test]
    fn test_unknown_default_is_rejected() {
        let mut config = EmotionConfig::default();
        config.default_emotion = "Serene".to_string();
        assert!(matches!(
            config.validate(),
            Err(AppError::InvalidInput { field: "default_emotion", .. })
        ));
    }
}
