//! Training data built from the workout history, plus the frequency model
//! shipped as the default predictor artifact.

use crate::core::encoder::{UNKNOWN_CODE, WorkoutKind, encode};
use crate::core::predict::Predictor;
use crate::core::store::WorkoutStore;
use crate::errors::{AppError, AppResult};
use crate::models::workout::Workout;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One `(type_code, duration) -> next_type_code` example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingSample {
    pub features: [i64; 2],
    pub label: i64,
}

/// Build samples from consecutive workouts of a chronological history.
///
/// Pairs whose leading type is unknown are skipped; an unknown following
/// type is labelled as `Run`.
pub fn training_pairs(history: &[Workout]) -> Vec<TrainingSample> {
    history
        .windows(2)
        .filter_map(|w| {
            let (current, next) = (&w[0], &w[1]);
            let code = encode(&current.workout_type);
            if code == UNKNOWN_CODE {
                return None;
            }
            let label = match encode(&next.workout_type) {
                UNKNOWN_CODE => WorkoutKind::Run.code(),
                c => c,
            };
            Some(TrainingSample {
                features: [code, current.duration],
                label,
            })
        })
        .collect()
}

/// Most frequent next type for each current type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyModel {
    pub transitions: BTreeMap<i64, i64>,
    pub fallback: i64,
}

impl FrequencyModel {
    pub fn fit(samples: &[TrainingSample]) -> AppResult<Self> {
        if samples.is_empty() {
            return Err(AppError::Model("Not enough data to train the model.".into()));
        }

        let mut per_type: BTreeMap<i64, BTreeMap<i64, usize>> = BTreeMap::new();
        let mut overall: BTreeMap<i64, usize> = BTreeMap::new();

        for s in samples {
            *per_type
                .entry(s.features[0])
                .or_default()
                .entry(s.label)
                .or_insert(0) += 1;
            *overall.entry(s.label).or_insert(0) += 1;
        }

        let transitions = per_type
            .into_iter()
            .filter_map(|(code, counts)| majority(&counts).map(|label| (code, label)))
            .collect();

        let fallback = majority(&overall).unwrap_or(WorkoutKind::Run.code());

        Ok(Self {
            transitions,
            fallback,
        })
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| AppError::Model(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json =
            serde_json::to_string_pretty(self).map_err(|e| AppError::Model(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Highest count wins; ties go to the lowest code.
fn majority(counts: &BTreeMap<i64, usize>) -> Option<i64> {
    counts
        .iter()
        .fold(None, |best: Option<(i64, usize)>, (&code, &n)| match best {
            Some((_, m)) if m >= n => best,
            _ => Some((code, n)),
        })
        .map(|(code, _)| code)
}

impl Predictor for FrequencyModel {
    fn predict(&self, features: &[f64; 2]) -> AppResult<i64> {
        let code = features[0].round() as i64;
        Ok(self
            .transitions
            .get(&code)
            .copied()
            .unwrap_or(self.fallback))
    }
}

/// Fit a model on the full stored history and write it to `artifact`.
/// Returns the model and the number of samples it was fitted on.
pub fn train(store: &WorkoutStore, artifact: &Path) -> AppResult<(FrequencyModel, usize)> {
    let history = store.history()?;
    let samples = training_pairs(&history);
    let model = FrequencyModel::fit(&samples)?;
    model.save(artifact)?;
    log::info!(
        "trained on {} samples, model saved to {}",
        samples.len(),
        artifact.display()
    );
    Ok((model, samples.len()))
}
