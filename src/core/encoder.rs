//! Workout-type ⇔ integer code mapping shared by training and prediction.

use serde::{Deserialize, Serialize};

/// Code returned by [`encode`] for labels outside the known set.
pub const UNKNOWN_CODE: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Run,      // 0
    Walk,     // 1
    Strength, // 2
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [WorkoutKind::Run, WorkoutKind::Walk, WorkoutKind::Strength];

    pub fn code(self) -> i64 {
        match self {
            WorkoutKind::Run => 0,
            WorkoutKind::Walk => 1,
            WorkoutKind::Strength => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Run => "Run",
            WorkoutKind::Walk => "Walk",
            WorkoutKind::Strength => "Strength",
        }
    }

    /// Exact, case-sensitive match. `Strenght` is the spelling older
    /// databases were written with.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Run" => Some(WorkoutKind::Run),
            "Walk" => Some(WorkoutKind::Walk),
            "Strength" | "Strenght" => Some(WorkoutKind::Strength),
            _ => None,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(WorkoutKind::Run),
            1 => Some(WorkoutKind::Walk),
            2 => Some(WorkoutKind::Strength),
            _ => None,
        }
    }
}

pub fn encode(label: &str) -> i64 {
    WorkoutKind::from_label(label)
        .map(WorkoutKind::code)
        .unwrap_or(UNKNOWN_CODE)
}

/// Unrecognized codes decode to `Run`.
pub fn decode_kind(code: i64) -> WorkoutKind {
    WorkoutKind::from_code(code).unwrap_or(WorkoutKind::Run)
}

pub fn decode(code: i64) -> &'static str {
    decode_kind(code).label()
}

/// Predictor input `[type_code, duration]`.
///
/// At prediction time an unknown type is fed as `Run`; the trainer skips
/// such rows instead (see `training::training_pairs`).
pub fn feature_vector(label: &str, duration: i64) -> [f64; 2] {
    let code = match encode(label) {
        UNKNOWN_CODE => WorkoutKind::Run.code(),
        c => c,
    };
    [code as f64, duration as f64]
}
