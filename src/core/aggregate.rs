//! Derived views over a snapshot of the workout list: per-type totals and
//! counts, time series and a duration histogram.
//!
//! Everything here is a pure function of its input. Rows whose date does not
//! parse are left out of the whole analysis and logged. Calorie totals
//! saturate at `i64::MAX` instead of overflowing.

use crate::core::encoder::WorkoutKind;
use crate::core::store::WorkoutStore;
use crate::errors::AppResult;
use crate::models::workout::Workout;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Filter label meaning "no filtering".
pub const ALL_TYPES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s == ALL_TYPES {
            TypeFilter::All
        } else {
            TypeFilter::Only(s.to_string())
        }
    }

    /// Known labels compare by kind, so legacy spellings match their
    /// canonical label. Anything else compares as exact text.
    pub fn matches(&self, workout_type: &str) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => {
                match (WorkoutKind::from_label(t), WorkoutKind::from_label(workout_type)) {
                    (Some(a), Some(b)) => a == b,
                    _ => t == workout_type,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    /// Chronological `(time, calories)` points.
    pub calories_series: Vec<(NaiveDateTime, i64)>,
    /// Chronological `(time, duration)` points.
    pub duration_series: Vec<(NaiveDateTime, i64)>,
    pub calories_by_type: BTreeMap<String, i64>,
    pub count_by_type: BTreeMap<String, usize>,
    /// Rows dropped because their date did not parse.
    pub skipped: usize,
}

impl Analysis {
    pub fn total_count(&self) -> usize {
        self.count_by_type.values().sum()
    }

    /// Percentage of workouts per type.
    pub fn shares(&self) -> BTreeMap<String, f64> {
        let total = self.total_count();
        if total == 0 {
            return BTreeMap::new();
        }
        self.count_by_type
            .iter()
            .map(|(t, n)| (t.clone(), *n as f64 * 100.0 / total as f64))
            .collect()
    }

    /// Equal-width histogram of durations over `[min, max]`. A single
    /// distinct value is centred in a unit-wide range.
    pub fn duration_histogram(&self, bins: usize) -> Vec<HistogramBin> {
        let values: Vec<i64> = self.duration_series.iter().map(|(_, d)| *d).collect();
        let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
            return Vec::new();
        };
        if bins == 0 {
            return Vec::new();
        }

        let (lo, hi) = if min == max {
            (min as f64 - 0.5, max as f64 + 0.5)
        } else {
            (min as f64, max as f64)
        };
        let width = (hi - lo) / bins as f64;

        let mut out: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                start: lo + width * i as f64,
                end: lo + width * (i + 1) as f64,
                count: 0,
            })
            .collect();

        for v in values {
            let idx = (((v as f64 - lo) / width).floor() as usize).min(bins - 1);
            out[idx].count += 1;
        }
        out
    }
}

pub fn analyze(workouts: &[Workout], filter: &TypeFilter) -> Analysis {
    let mut out = Analysis::default();

    for w in workouts.iter().filter(|w| filter.matches(&w.workout_type)) {
        let when = match w.timestamp() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Error processing workout {}: {}", w.id, e);
                out.skipped += 1;
                continue;
            }
        };

        out.calories_series.push((when, w.calories));
        out.duration_series.push((when, w.duration));
        let total = out
            .calories_by_type
            .entry(w.workout_type.clone())
            .or_insert(0);
        *total = total.saturating_add(w.calories);
        *out.count_by_type.entry(w.workout_type.clone()).or_insert(0) += 1;
    }

    out.calories_series.sort_by_key(|(t, _)| *t);
    out.duration_series.sort_by_key(|(t, _)| *t);
    out
}

pub fn calories_by_type(workouts: &[Workout], filter: &TypeFilter) -> BTreeMap<String, i64> {
    analyze(workouts, filter).calories_by_type
}

pub fn count_by_type(workouts: &[Workout], filter: &TypeFilter) -> BTreeMap<String, usize> {
    analyze(workouts, filter).count_by_type
}

pub fn calories_series(workouts: &[Workout], filter: &TypeFilter) -> Vec<(NaiveDateTime, i64)> {
    analyze(workouts, filter).calories_series
}

pub fn duration_series(workouts: &[Workout], filter: &TypeFilter) -> Vec<(NaiveDateTime, i64)> {
    analyze(workouts, filter).duration_series
}

impl WorkoutStore {
    /// Re-read the full list and analyze it. Nothing is cached.
    pub fn analyze(&self, filter: &TypeFilter) -> AppResult<Analysis> {
        let workouts = self.list()?;
        log::info!("Computing statistics for {} workouts", workouts.len());
        Ok(analyze(&workouts, filter))
    }
}
