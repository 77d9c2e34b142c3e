//! Aggregation and reporting helpers
//!
//! Groups the workout log by calendar date, filters it to trailing
//! windows, and classifies the calorie trend for the statistics screen.
//! All helpers operate on plain slices so they compose with any store
//! snapshot or pre-filtered subset.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Workout;

/// Per-date workout summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWorkoutSummary {
    pub date: NaiveDate,
    pub duration_min: f64,
    pub calories_burned: f64,
    /// Workouts without a distance contribute 0
    pub distance_km: f64,
}

/// Aggregate totals over a set of workouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTotals {
    pub count: usize,
    pub calories_burned: f64,
    pub distance_km: f64,
    /// 0 for an empty input
    pub avg_duration_min: f64,
}

/// Direction of the calorie-burn trend over a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Group workouts by calendar date, summing duration, calories, distance
///
/// Output is sorted ascending by date, ready for charting.
pub fn group_by_date(workouts: &[Workout]) -> Vec<DailyWorkoutSummary> {
    let mut by_date: BTreeMap<NaiveDate, DailyWorkoutSummary> = BTreeMap::new();
    for w in workouts {
        let day = w.date.date_naive();
        let entry = by_date.entry(day).or_insert_with(|| DailyWorkoutSummary {
            date: day,
            duration_min: 0.0,
            calories_burned: 0.0,
            distance_km: 0.0,
        });
        entry.duration_min += w.duration_min;
        entry.calories_burned += w.calories_burned;
        entry.distance_km += w.distance_km.unwrap_or(0.0);
    }
    by_date.into_values().collect()
}

/// Filter workouts to a trailing window: date >= now - `days`
///
/// Any positive window length is accepted; the UI uses 7/30/90.
pub fn trailing_window(workouts: &[Workout], now: DateTime<Utc>, days: u32) -> Vec<Workout> {
    let cutoff = now - Duration::days(i64::from(days));
    workouts
        .iter()
        .filter(|w| w.date >= cutoff)
        .cloned()
        .collect()
}

/// Compute totals over a workout slice
pub fn totals(workouts: &[Workout]) -> WorkoutTotals {
    let count = workouts.len();
    let calories_burned = workouts.iter().map(|w| w.calories_burned).sum();
    let distance_km = workouts.iter().map(|w| w.distance_km.unwrap_or(0.0)).sum();
    let avg_duration_min = if count > 0 {
        workouts.iter().map(|w| w.duration_min).sum::<f64>() / count as f64
    } else {
        0.0
    };
    WorkoutTotals {
        count,
        calories_burned,
        distance_km,
        avg_duration_min,
    }
}

/// Classify the calorie-burn trend of a workout period
///
/// The workouts are ordered by date, split at floor(len/2), and the mean
/// calories of the two halves compared. An empty half has a mean of 0 by
/// convention, so empty input classifies as `Stable`.
pub fn classify_trend(workouts: &[Workout]) -> TrendDirection {
    let mut ordered: Vec<&Workout> = workouts.iter().collect();
    ordered.sort_by_key(|w| w.date);

    let half = ordered.len() / 2;
    let first_avg = mean_calories(&ordered[..half]);
    let second_avg = mean_calories(&ordered[half..]);

    if second_avg > first_avg {
        TrendDirection::Up
    } else if second_avg < first_avg {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    }
}

fn mean_calories(workouts: &[&Workout]) -> f64 {
    if workouts.is_empty() {
        return 0.0;
    }
    workouts.iter().map(|w| w.calories_burned).sum::<f64>() / workouts.len() as f64
}
