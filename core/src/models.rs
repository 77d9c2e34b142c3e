//! Data models for the NeoFit core

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender used for physiological calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Somatotype label shown on the profile screen
///
/// Currently decorative: no formula consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Ectomorph,
    Mesomorph,
    Endomorph,
}

/// UI theme preference, persisted alongside the fitness data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Origin of a workout record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutSource {
    Manual,
    Device,
}

/// User profile
///
/// `weight_kg` is the baseline/fallback weight: once weight entries exist,
/// [`crate::FitnessStore::latest_weight`] supersedes it for every derived
/// metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub gender: Gender,
    /// Age in years
    pub age: i32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Baseline weight in kilograms (fallback when no entries are logged)
    pub weight_kg: f64,
    /// Goal weight in kilograms
    pub target_weight_kg: f64,
    /// Body fat percentage
    pub body_fat_percent: f64,
    pub body_type: BodyType,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age: 30,
            height_cm: 175.0,
            weight_kg: 80.0,
            target_weight_kg: 75.0,
            body_fat_percent: 20.0,
            body_type: BodyType::Mesomorph,
        }
    }
}

/// Partial profile update, shallow-merged into [`UserProfile`]
///
/// Field validation is a UI concern; the merge itself never fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub gender: Option<Gender>,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub target_weight_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub body_type: Option<BodyType>,
}

impl UserProfile {
    /// Apply a partial update in place
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(height_cm) = update.height_cm {
            self.height_cm = height_cm;
        }
        if let Some(weight_kg) = update.weight_kg {
            self.weight_kg = weight_kg;
        }
        if let Some(target_weight_kg) = update.target_weight_kg {
            self.target_weight_kg = target_weight_kg;
        }
        if let Some(body_fat_percent) = update.body_fat_percent {
            self.body_fat_percent = body_fat_percent;
        }
        if let Some(body_type) = update.body_type {
            self.body_type = body_type;
        }
    }
}

/// A logged body-weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: Uuid,
    /// Calendar date of the measurement (no time component)
    pub date: NaiveDate,
    /// Weight in kilograms, strictly positive
    pub weight_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    /// Free-text activity label ("running", "bench press", ...)
    pub workout_type: String,
    pub date: DateTime<Utc>,
    /// Duration in minutes, strictly positive
    pub duration_min: f64,
    /// Energy burned in kcal, non-negative
    pub calories_burned: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate_bpm: Option<i32>,
    pub source: WorkoutSource,
}

/// Workout input, everything but the generated id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkout {
    pub workout_type: String,
    pub date: DateTime<Utc>,
    pub duration_min: f64,
    pub calories_burned: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate_bpm: Option<i32>,
    pub source: WorkoutSource,
}

/// Per-date calorie ledger, at most one record per calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub calories_consumed: f64,
    pub calories_burned: f64,
}
