//! Workout data export
//!
//! CSV export of the workout log for spreadsheets. Full structured export
//! is already covered by the JSON [`crate::Snapshot`]; this module only
//! handles the tabular format the statistics screen offers for download.

use crate::errors::CoreError;
use crate::models::{Workout, WorkoutSource};

/// Render workouts as CSV
///
/// Header: `date,type,duration_min,calories_kcal,distance_km,heart_rate_bpm,source`.
/// Absent optional fields become empty cells. Row order follows the input.
pub fn workouts_to_csv(workouts: &[Workout]) -> Result<String, CoreError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "date",
            "type",
            "duration_min",
            "calories_kcal",
            "distance_km",
            "heart_rate_bpm",
            "source",
        ])
        .map_err(|e| CoreError::Serialization(e.to_string()))?;

    for w in workouts {
        writer
            .write_record([
                w.date.date_naive().to_string(),
                w.workout_type.clone(),
                w.duration_min.to_string(),
                w.calories_burned.to_string(),
                w.distance_km.map(|d| d.to_string()).unwrap_or_default(),
                w.heart_rate_bpm.map(|h| h.to_string()).unwrap_or_default(),
                match w.source {
                    WorkoutSource::Manual => "manual".to_string(),
                    WorkoutSource::Device => "device".to_string(),
                },
            ])
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CoreError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CoreError::Serialization(e.to_string()))
}
