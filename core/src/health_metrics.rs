//! Health metrics calculations
//!
//! Pure formula layer: BMI, Deurenberg body-fat estimate, Mifflin-St Jeor
//! BMR, and TDEE. Everything here is a pure function of its arguments; the
//! store-aware getters on [`crate::FitnessStore`] feed these with the
//! canonical current weight.
//!
//! Degenerate inputs degenerate the output instead of failing: a zero
//! height yields an infinite BMI, an absurd age yields an absurd body-fat
//! estimate. Clamping such values would hide bad input data, so none is
//! applied here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::Gender;

// ============================================================================
// Activity Level
// ============================================================================

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = CoreError;

    /// Parse an activity-level key as used by the UI/persisted settings
    ///
    /// An unknown key is a caller bug, not a runtime condition.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            other => Err(CoreError::InvalidArgument(format!(
                "unknown activity level: {other}"
            ))),
        }
    }
}

// ============================================================================
// BMI
// ============================================================================

/// BMI category shown next to the BMI figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// Precondition: height > 0. A non-positive height is not rejected; the
/// result is infinite/NaN and it is the caller's job to guard the display.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// Body Fat Estimate
// ============================================================================

/// Estimate body fat percentage using the Deurenberg formula
///
/// Male:   BF% = 1.20 × BMI + 0.23 × age - 16.2
/// Female: BF% = 1.20 × BMI + 0.23 × age - 5.4
///
/// This is a regression estimate, not a measurement. Extreme inputs can
/// produce values below 0 or above 100; those propagate unclamped so bad
/// input data stays visible.
pub fn estimate_body_fat(bmi: f64, age_years: i32, gender: Gender) -> f64 {
    let base = 1.20 * bmi + 0.23 * age_years as f64;
    match gender {
        Gender::Male => base - 16.2,
        Gender::Female => base - 5.4,
    }
}

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Male:   BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Female: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * level.multiplier()
}
