//! Next-exercise suggestion on top of an injected predictor.

use crate::core::encoder::{WorkoutKind, decode_kind, feature_vector};
use crate::core::training::FrequencyModel;
use crate::errors::AppResult;
use std::fmt;
use std::path::Path;

/// A trained classifier: two features in, one class code out.
pub trait Predictor {
    fn predict(&self, features: &[f64; 2]) -> AppResult<i64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Suggested(WorkoutKind),
    Unavailable,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Suggested(kind) => {
                write!(f, "Next Recommended Exercise: {}", kind.label())
            }
            Recommendation::Unavailable => write!(f, "Next Recommended Exercise: (Train model)"),
        }
    }
}

pub struct Recommender {
    predictor: Option<Box<dyn Predictor>>,
    default_duration: i64,
}

impl Recommender {
    pub fn new(predictor: Box<dyn Predictor>) -> Self {
        Self {
            predictor: Some(predictor),
            default_duration: 30,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            predictor: None,
            default_duration: 30,
        }
    }

    /// Load the artifact at `path`. A missing or unreadable artifact leaves
    /// the recommender unavailable instead of failing.
    pub fn from_artifact(path: &Path) -> Self {
        if !path.exists() {
            log::info!("Prediction model not found at {}. Train the model first.", path.display());
            return Self::unavailable();
        }

        match FrequencyModel::load(path) {
            Ok(model) => Self::new(Box::new(model)),
            Err(e) => {
                log::warn!("Ignoring prediction model {}: {}", path.display(), e);
                Self::unavailable()
            }
        }
    }

    pub fn with_default_duration(mut self, minutes: i64) -> Self {
        self.default_duration = minutes;
        self
    }

    pub fn is_available(&self) -> bool {
        self.predictor.is_some()
    }

    /// Suggest the next exercise from the current form values. An empty or
    /// non-numeric duration falls back to the default duration.
    pub fn recommend(&self, current_type: &str, duration: &str) -> Recommendation {
        let Some(predictor) = &self.predictor else {
            return Recommendation::Unavailable;
        };

        let minutes = duration.trim().parse::<i64>().unwrap_or(self.default_duration);
        let features = feature_vector(current_type, minutes);

        match predictor.predict(&features) {
            Ok(code) => Recommendation::Suggested(decode_kind(code)),
            Err(e) => {
                log::warn!("Prediction failed: {}", e);
                Recommendation::Unavailable
            }
        }
    }
}
