use fitlogger::core::aggregate::{
    TypeFilter, analyze, calories_by_type, calories_series, count_by_type, duration_series,
};
use fitlogger::models::workout::Workout;

fn workout(id: i64, date: &str, t: &str, duration: i64, calories: i64) -> Workout {
    Workout {
        id,
        date: date.to_string(),
        workout_type: t.to_string(),
        duration,
        calories,
    }
}

/// Most recent first, as returned by the store.
fn snapshot() -> Vec<Workout> {
    vec![
        workout(4, "2025-03-04 18:00:00", "Strength", 50, 320),
        workout(3, "2025-03-03 07:30:00", "Run", 25, 220),
        workout(2, "2025-03-02 19:00:00", "Walk", 60, 280),
        workout(1, "2025-03-01 07:00:00", "Run", 30, 250),
    ]
}

#[test]
fn test_totals_and_counts() {
    let data = snapshot();
    let totals = calories_by_type(&data, &TypeFilter::All);
    assert_eq!(totals.get("Run"), Some(&470));
    assert_eq!(totals.get("Walk"), Some(&280));
    assert_eq!(totals.get("Strength"), Some(&320));

    let counts = count_by_type(&data, &TypeFilter::All);
    assert_eq!(counts.get("Run"), Some(&2));
    assert_eq!(counts.get("Walk"), Some(&1));
    assert_eq!(counts.get("Strength"), Some(&1));
}

#[test]
fn test_all_filter_equals_unfiltered_and_is_idempotent() {
    let data = snapshot();
    let first = analyze(&data, &TypeFilter::parse("All"));
    let second = analyze(&data, &TypeFilter::parse("All"));
    assert_eq!(first, second);
    assert_eq!(first, analyze(&data, &TypeFilter::default()));
    assert_eq!(TypeFilter::parse(""), TypeFilter::All);
}

#[test]
fn test_type_filter() {
    let data = snapshot();
    let filter = TypeFilter::parse("Run");
    assert_eq!(filter, TypeFilter::Only("Run".to_string()));

    let analysis = analyze(&data, &filter);
    assert_eq!(analysis.total_count(), 2);
    assert_eq!(analysis.calories_by_type.len(), 1);
    assert_eq!(analysis.calories_by_type.get("Run"), Some(&470));

    let none = analyze(&data, &TypeFilter::parse("Swim"));
    assert_eq!(none.total_count(), 0);
    assert!(none.shares().is_empty());
}

#[test]
fn test_series_are_chronological() {
    let data = snapshot();
    let cal: Vec<i64> = calories_series(&data, &TypeFilter::All)
        .into_iter()
        .map(|(_, c)| c)
        .collect();
    assert_eq!(cal, vec![250, 280, 220, 320]);

    let dur = duration_series(&data, &TypeFilter::All);
    assert_eq!(dur.len(), 4);
    assert!(dur.windows(2).all(|w| w[0].0 <= w[1].0));
    assert_eq!(dur[0].1, 30);
}

#[test]
fn test_bad_dates_are_skipped() {
    let mut data = snapshot();
    data.push(workout(5, "03/05/2025", "Walk", 10, 999));
    data.push(workout(6, "2025-03-05", "Run", 10, 999));

    let analysis = analyze(&data, &TypeFilter::All);
    assert_eq!(analysis.skipped, 2);
    assert_eq!(analysis.total_count(), 4);
    assert_eq!(analysis.calories_by_type.get("Walk"), Some(&280));
}

#[test]
fn test_shares() {
    let analysis = analyze(&snapshot(), &TypeFilter::All);
    let shares = analysis.shares();
    assert!((shares["Run"] - 50.0).abs() < 1e-9);
    assert!((shares["Walk"] - 25.0).abs() < 1e-9);
    let sum: f64 = shares.values().sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn test_duration_histogram() {
    let analysis = analyze(&snapshot(), &TypeFilter::All);
    let bins = analysis.duration_histogram(10);
    assert_eq!(bins.len(), 10);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 4);
    assert_eq!(bins[0].start, 25.0);
    assert_eq!(bins[9].end, 60.0);
    // max value lands in the last bin
    assert_eq!(bins[9].count, 1);
    assert_eq!(bins[0].count, 1);

    let single = analyze(
        &[workout(1, "2025-03-01 07:00:00", "Run", 30, 250)],
        &TypeFilter::All,
    );
    let bins = single.duration_histogram(4);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 1);
    assert_eq!(bins[0].start, 29.5);

    assert!(analyze(&[], &TypeFilter::All).duration_histogram(10).is_empty());
}

#[test]
fn test_calorie_totals_saturate_instead_of_overflowing() {
    let data = vec![
        workout(2, "2025-03-02 07:00:00", "Run", 30, i64::MAX),
        workout(1, "2025-03-01 07:00:00", "Run", 30, i64::MAX),
    ];

    let analysis = analyze(&data, &TypeFilter::All);
    assert_eq!(analysis.calories_by_type.get("Run"), Some(&i64::MAX));
    assert_eq!(analysis.count_by_type.get("Run"), Some(&2));
    assert_eq!(analysis.calories_series.len(), 2);
}

#[test]
fn test_extreme_durations_do_not_break_histogram() {
    let data = vec![
        workout(2, "2025-03-02 07:00:00", "Run", i64::MAX, 1),
        workout(1, "2025-03-01 07:00:00", "Run", i64::MAX - 1, 1),
    ];

    let bins = analyze(&data, &TypeFilter::All).duration_histogram(10);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
}

#[test]
fn test_filter_matches_legacy_spelling() {
    let data = vec![
        workout(3, "2025-03-03 07:00:00", "Strenght", 40, 200),
        workout(2, "2025-03-02 07:00:00", "Strength", 20, 150),
        workout(1, "2025-03-01 07:00:00", "Run", 30, 250),
    ];

    let strength = analyze(&data, &TypeFilter::parse("Strength"));
    assert_eq!(strength.total_count(), 2);

    let legacy = analyze(&data, &TypeFilter::parse("Strenght"));
    assert_eq!(legacy.total_count(), 2);

    // unknown labels still compare as exact text
    assert!(TypeFilter::parse("Yoga").matches("Yoga"));
    assert!(!TypeFilter::parse("Yoga").matches("yoga"));
    assert!(!TypeFilter::parse("Run").matches("Walk"));
}
