//! NeoFit WASM Module
//!
//! WebAssembly bindings exposing the core calculations to the browser
//! host: BMI/TDEE figures for the stats panel, avatar scale factors for
//! the 3D renderer, and a moving average for chart smoothing.

use wasm_bindgen::prelude::*;

use neofit_core::{
    body_scales, calculate_bmi as core_bmi, calculate_bmr, calculate_tdee as core_tdee,
    ActivityLevel, BodyType, Gender, UserProfile,
};

/// Calculate moving average for a series of values
#[wasm_bindgen]
pub fn calculate_moving_average(values: &[f64], window_size: usize) -> Vec<f64> {
    if values.is_empty() || window_size == 0 {
        return vec![];
    }

    let mut result = Vec::with_capacity(values.len());

    for i in 0..values.len() {
        let start = if i >= window_size { i - window_size + 1 } else { 0 };
        let window = &values[start..=i];
        let avg = window.iter().sum::<f64>() / window.len() as f64;
        result.push(avg);
    }

    result
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    core_bmi(weight_kg, height_cm)
}

/// Calculate TDEE (Total Daily Energy Expenditure)
///
/// Mifflin-St Jeor BMR scaled by the activity-level key
/// (sedentary/light/moderate/active/very_active). An unknown key is a
/// caller bug and throws.
#[wasm_bindgen]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    is_male: bool,
    activity_level: &str,
) -> Result<f64, JsError> {
    let gender = if is_male { Gender::Male } else { Gender::Female };
    let level: ActivityLevel = activity_level
        .parse()
        .map_err(|e| JsError::new(&format!("{e}")))?;
    let bmr = calculate_bmr(weight_kg, height_cm, age_years, gender);
    Ok(core_tdee(bmr, level))
}

/// Avatar scale factors, flat fields for the JS renderer
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct AvatarScales {
    pub height: f64,
    pub width: f64,
    pub body_fat_factor: f64,
    pub muscle: f64,
    pub definition: f64,
}

/// Compute avatar scale factors from profile attributes
#[wasm_bindgen]
pub fn avatar_scales(
    height_cm: f64,
    weight_kg: f64,
    body_fat_percent: f64,
    is_male: bool,
) -> AvatarScales {
    let profile = UserProfile {
        gender: if is_male { Gender::Male } else { Gender::Female },
        age: 0, // unused by the mapper
        height_cm,
        weight_kg,
        target_weight_kg: weight_kg,
        body_fat_percent,
        body_type: BodyType::Mesomorph,
    };
    let scales = body_scales(&profile);
    AvatarScales {
        height: scales.height,
        width: scales.width,
        body_fat_factor: scales.body_fat_factor,
        muscle: scales.muscle,
        definition: scales.definition,
    }
}
