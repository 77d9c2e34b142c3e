//! Input validation functions
//!
//! Validation helpers used by the store's mutating operations. Only
//! structural validity is checked here; plausibility bounds (is 400 kg a
//! likely weight?) are a UI concern.

/// Validate a logged weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err("Weight must be greater than 0 kg".to_string());
    }
    Ok(())
}

/// Validate a workout duration (in minutes)
pub fn validate_duration_min(minutes: f64) -> Result<(), String> {
    if minutes.is_nan() || minutes.is_infinite() {
        return Err("Duration must be a valid number".to_string());
    }
    if minutes <= 0.0 {
        return Err("Duration must be greater than 0 minutes".to_string());
    }
    Ok(())
}

/// Validate a calorie value
pub fn validate_calories(calories: f64) -> Result<(), String> {
    if calories.is_nan() || calories.is_infinite() {
        return Err("Calories must be a valid number".to_string());
    }
    if calories < 0.0 {
        return Err("Calories cannot be negative".to_string());
    }
    Ok(())
}

/// Validate a height value (in cm)
///
/// The metrics layer never rejects heights itself; callers that want a
/// finite BMI can gate on this first.
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm <= 0.0 {
        return Err("Height must be greater than 0 cm".to_string());
    }
    Ok(())
}
