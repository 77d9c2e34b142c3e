//! Profile and history store
//!
//! Owns the user profile, the weight-entry log, the workout log, and the
//! sparse daily calorie ledger. One instance per session, passed explicitly
//! to whoever needs it; the derived getters are pure reads recomputed on
//! every call, so the UI can poll them on each refresh without staleness.
//!
//! Weight entries are kept sorted descending by date so index 0 is always
//! the latest measurement. [`FitnessStore::latest_weight`] is the canonical
//! "current weight": every derived metric reads through it rather than
//! touching `profile.weight_kg` directly.

use chrono::{Datelike, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::health_metrics::{
    calculate_bmi, calculate_bmr, calculate_tdee, estimate_body_fat, ActivityLevel,
};
use crate::models::{
    DailyStats, NewWorkout, ProfileUpdate, Theme, UserProfile, WeightEntry, Workout,
};
use crate::validation::{validate_calories, validate_duration_min, validate_weight_kg};

/// Session-wide fitness data store
#[derive(Debug, Clone, Default)]
pub struct FitnessStore {
    profile: UserProfile,
    /// Sorted descending by date; ties keep insertion order
    weight_entries: Vec<WeightEntry>,
    workouts: Vec<Workout>,
    daily_stats: Vec<DailyStats>,
    theme: Theme,
}

impl FitnessStore {
    /// Create a store with default profile and empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a store from previously persisted state
    ///
    /// The weight entries are re-sorted so the head invariant holds even
    /// for payloads written by an older or foreign producer.
    pub(crate) fn from_parts(
        profile: UserProfile,
        weight_entries: Vec<WeightEntry>,
        workouts: Vec<Workout>,
        daily_stats: Vec<DailyStats>,
        theme: Theme,
    ) -> Self {
        let mut store = Self {
            profile,
            weight_entries,
            workouts,
            daily_stats,
            theme,
        };
        store.resort_weight_entries();
        store
    }

    // ========================================================================
    // Profile
    // ========================================================================

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Shallow-merge a partial update and return the new profile
    ///
    /// Never fails; field validation is the UI's responsibility.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> &UserProfile {
        self.profile.apply(update);
        debug!("profile updated");
        &self.profile
    }

    // ========================================================================
    // Weight entries
    // ========================================================================

    pub fn weight_entries(&self) -> &[WeightEntry] {
        &self.weight_entries
    }

    /// Log a weight measurement
    ///
    /// Fails with [`CoreError::Validation`] for non-positive or non-finite
    /// weights, leaving the store untouched.
    pub fn add_weight_entry(
        &mut self,
        date: NaiveDate,
        weight_kg: f64,
        note: Option<String>,
    ) -> Result<Uuid, CoreError> {
        validate_weight_kg(weight_kg).map_err(CoreError::Validation)?;

        let id = Uuid::new_v4();
        self.weight_entries.push(WeightEntry {
            id,
            date,
            weight_kg,
            note,
        });
        self.resort_weight_entries();
        debug!(%id, %date, weight_kg, "weight entry added");
        Ok(id)
    }

    /// Update an existing entry's date, weight, or note
    ///
    /// No-op if the id is absent. A new weight is validated like an insert.
    pub fn update_weight_entry(
        &mut self,
        id: Uuid,
        date: Option<NaiveDate>,
        weight_kg: Option<f64>,
        note: Option<String>,
    ) -> Result<(), CoreError> {
        if let Some(weight) = weight_kg {
            validate_weight_kg(weight).map_err(CoreError::Validation)?;
        }
        if let Some(entry) = self.weight_entries.iter_mut().find(|e| e.id == id) {
            if let Some(date) = date {
                entry.date = date;
            }
            if let Some(weight) = weight_kg {
                entry.weight_kg = weight;
            }
            if let Some(note) = note {
                entry.note = Some(note);
            }
            self.resort_weight_entries();
            debug!(%id, "weight entry updated");
        }
        Ok(())
    }

    /// Delete an entry; no-op if the id is absent
    pub fn delete_weight_entry(&mut self, id: Uuid) {
        self.weight_entries.retain(|e| e.id != id);
    }

    /// Current weight: the latest logged entry, else the profile baseline
    pub fn latest_weight(&self) -> f64 {
        self.weight_entries
            .first()
            .map(|e| e.weight_kg)
            .unwrap_or(self.profile.weight_kg)
    }

    /// Restore the descending-by-date order after an insert or update
    ///
    /// `sort_by` is stable, so same-date entries keep insertion order.
    fn resort_weight_entries(&mut self) {
        self.weight_entries.sort_by(|a, b| b.date.cmp(&a.date));
    }

    // ========================================================================
    // Workouts
    // ========================================================================

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Append a workout to the log
    ///
    /// Multiple workouts per day are expected; nothing is deduplicated.
    /// Fails with [`CoreError::Validation`] for non-positive duration or
    /// negative calories, leaving the store untouched.
    pub fn add_workout(&mut self, workout: NewWorkout) -> Result<Uuid, CoreError> {
        validate_duration_min(workout.duration_min).map_err(CoreError::Validation)?;
        validate_calories(workout.calories_burned).map_err(CoreError::Validation)?;

        let id = Uuid::new_v4();
        debug!(%id, workout_type = %workout.workout_type, "workout added");
        self.workouts.push(Workout {
            id,
            workout_type: workout.workout_type,
            date: workout.date,
            duration_min: workout.duration_min,
            calories_burned: workout.calories_burned,
            distance_km: workout.distance_km,
            heart_rate_bpm: workout.heart_rate_bpm,
            source: workout.source,
        });
        Ok(id)
    }

    /// Delete a workout; no-op if the id is absent
    pub fn delete_workout(&mut self, id: Uuid) {
        self.workouts.retain(|w| w.id != id);
    }

    // ========================================================================
    // Daily stats
    // ========================================================================

    pub fn daily_stats(&self) -> &[DailyStats] {
        &self.daily_stats
    }

    /// Insert or replace the ledger record for the given date
    pub fn upsert_daily_stats(&mut self, stats: DailyStats) {
        if let Some(existing) = self.daily_stats.iter_mut().find(|s| s.date == stats.date) {
            *existing = stats;
        } else {
            self.daily_stats.push(stats);
        }
    }

    // ========================================================================
    // Theme
    // ========================================================================

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    // ========================================================================
    // Derived metrics
    // ========================================================================
    //
    // All getters below are pure functions of the current state (plus an
    // explicit clock anchor where a calendar is involved). Nothing is
    // cached; the inputs are small and the UI re-reads on every render.

    /// BMI from the current weight and profile height
    ///
    /// Precondition height > 0; a zero height propagates as infinity.
    pub fn bmi(&self) -> f64 {
        calculate_bmi(self.latest_weight(), self.profile.height_cm)
    }

    /// Deurenberg body-fat estimate from BMI, age, and gender
    pub fn body_fat_percentage(&self) -> f64 {
        estimate_body_fat(self.bmi(), self.profile.age, self.profile.gender)
    }

    /// Mifflin-St Jeor BMR from the current weight and profile
    pub fn bmr(&self) -> f64 {
        calculate_bmr(
            self.latest_weight(),
            self.profile.height_cm,
            self.profile.age,
            self.profile.gender,
        )
    }

    /// TDEE for the given activity level
    pub fn tdee(&self, level: ActivityLevel) -> f64 {
        calculate_tdee(self.bmr(), level)
    }

    /// Total calories burned in the calendar month containing `today`
    pub fn monthly_calories_burned(&self, today: NaiveDate) -> f64 {
        let first_of_month = first_day_of_month(today);
        self.workouts
            .iter()
            .filter(|w| w.date.date_naive() >= first_of_month)
            .map(|w| w.calories_burned)
            .sum()
    }

    /// Total distance in the calendar month containing `today`
    ///
    /// Workouts without a distance contribute 0, keeping the total additive.
    pub fn monthly_distance(&self, today: NaiveDate) -> f64 {
        let first_of_month = first_day_of_month(today);
        self.workouts
            .iter()
            .filter(|w| w.date.date_naive() >= first_of_month)
            .map(|w| w.distance_km.unwrap_or(0.0))
            .sum()
    }

    /// Consumed-minus-burned balance for `today`'s ledger record
    ///
    /// No record logged for the day is a normal state and reads as 0.
    pub fn daily_calorie_balance(&self, today: NaiveDate) -> f64 {
        self.daily_stats
            .iter()
            .find(|s| s.date == today)
            .map(|s| s.calories_consumed - s.calories_burned)
            .unwrap_or(0.0)
    }
}

/// First calendar day of the month containing `date`
fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutSource;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workout_on(y: i32, m: u32, d: u32, calories: f64, distance: Option<f64>) -> NewWorkout {
        NewWorkout {
            workout_type: "running".to_string(),
            date: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
            duration_min: 30.0,
            calories_burned: calories,
            distance_km: distance,
            heart_rate_bpm: None,
            source: WorkoutSource::Manual,
        }
    }

    // =========================================================================
    // Weight entry ordering and latest_weight
    // =========================================================================

    #[test]
    fn test_latest_weight_falls_back_to_profile() {
        let store = FitnessStore::new();
        assert_eq!(store.latest_weight(), 80.0);
    }

    #[test]
    fn test_latest_weight_is_date_maximal_regardless_of_insert_order() {
        let mut store = FitnessStore::new();
        store
            .add_weight_entry(date(2024, 2, 1), 78.0, None)
            .unwrap();
        store
            .add_weight_entry(date(2024, 1, 1), 82.0, None)
            .unwrap();
        assert_eq!(store.latest_weight(), 78.0);

        // Inserting in the other order gives the same answer
        let mut store = FitnessStore::new();
        store
            .add_weight_entry(date(2024, 1, 1), 82.0, None)
            .unwrap();
        store
            .add_weight_entry(date(2024, 2, 1), 78.0, None)
            .unwrap();
        assert_eq!(store.latest_weight(), 78.0);
    }

    #[test]
    fn test_same_date_ties_keep_insertion_order() {
        let mut store = FitnessStore::new();
        store
            .add_weight_entry(date(2024, 3, 1), 81.0, None)
            .unwrap();
        store
            .add_weight_entry(date(2024, 3, 1), 79.5, None)
            .unwrap();
        // Stable sort: the first-inserted entry stays at the head
        assert_eq!(store.latest_weight(), 81.0);
    }

    #[test]
    fn test_invalid_weight_rejected_and_state_unchanged() {
        let mut store = FitnessStore::new();
        store
            .add_weight_entry(date(2024, 1, 1), 82.0, None)
            .unwrap();

        let err = store.add_weight_entry(date(2024, 1, 2), 0.0, None);
        assert!(matches!(err, Err(CoreError::Validation(_))));
        assert!(store
            .add_weight_entry(date(2024, 1, 2), -3.0, None)
            .is_err());
        assert_eq!(store.weight_entries().len(), 1);
        assert_eq!(store.latest_weight(), 82.0);
    }

    #[test]
    fn test_delete_weight_entry_absent_id_is_noop() {
        let mut store = FitnessStore::new();
        store
            .add_weight_entry(date(2024, 1, 1), 82.0, None)
            .unwrap();
        store.delete_weight_entry(Uuid::new_v4());
        assert_eq!(store.weight_entries().len(), 1);
    }

    #[test]
    fn test_update_weight_entry_resorts() {
        let mut store = FitnessStore::new();
        let id = store
            .add_weight_entry(date(2024, 1, 1), 82.0, None)
            .unwrap();
        store
            .add_weight_entry(date(2024, 2, 1), 78.0, None)
            .unwrap();

        // Moving the older entry past the newer one promotes it to latest
        store
            .update_weight_entry(id, Some(date(2024, 3, 1)), None, None)
            .unwrap();
        assert_eq!(store.latest_weight(), 82.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: entries stay sorted non-increasing by date under any
        /// insertion sequence, and the head carries the date-maximal weight.
        #[test]
        fn prop_entries_sorted_descending(
            days in proptest::collection::vec(0u32..3650, 1..40)
        ) {
            let mut store = FitnessStore::new();
            let epoch = date(2015, 1, 1);
            for (i, offset) in days.iter().enumerate() {
                let d = epoch + chrono::Days::new(u64::from(*offset));
                store.add_weight_entry(d, 60.0 + i as f64, None).unwrap();
            }
            let entries = store.weight_entries();
            for pair in entries.windows(2) {
                prop_assert!(pair[0].date >= pair[1].date);
            }
            let max_date = entries.iter().map(|e| e.date).max().unwrap();
            prop_assert_eq!(entries[0].date, max_date);
        }
    }

    // =========================================================================
    // Profile merge
    // =========================================================================

    #[test]
    fn test_update_profile_merges_partially() {
        let mut store = FitnessStore::new();
        let profile = store.update_profile(ProfileUpdate {
            age: Some(41),
            target_weight_kg: Some(72.0),
            ..Default::default()
        });
        assert_eq!(profile.age, 41);
        assert_eq!(profile.target_weight_kg, 72.0);
        // Untouched fields keep their values
        assert_eq!(profile.height_cm, 175.0);
        assert_eq!(profile.gender, Gender::Male);
    }

    // =========================================================================
    // Derived metrics
    // =========================================================================

    use crate::models::Gender;

    #[test]
    fn test_worked_example_defaults() {
        // Default profile: male, 30y, 175cm, 80kg fallback, no entries
        let store = FitnessStore::new();
        assert!((store.bmi() - 26.122).abs() < 0.001);
        assert!((store.bmr() - 1748.75).abs() < 1e-9);
        assert!((store.tdee(ActivityLevel::Sedentary) - 2098.5).abs() < 1e-9);
        assert!((store.body_fat_percentage() - 22.047).abs() < 0.01);
    }

    #[test]
    fn test_metrics_follow_weight_history_not_profile() {
        let mut store = FitnessStore::new();
        store
            .add_weight_entry(date(2024, 2, 1), 70.0, None)
            .unwrap();
        // 70 / 1.75^2
        assert!((store.bmi() - 22.857).abs() < 0.001);
        // BMR uses the logged 70kg, not the 80kg profile baseline
        assert!((store.bmr() - 1648.75).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_invariant_under_older_entry_insert() {
        let mut store = FitnessStore::new();
        store
            .add_weight_entry(date(2024, 2, 1), 78.0, None)
            .unwrap();
        let before = store.bmi();
        store
            .add_weight_entry(date(2023, 6, 1), 95.0, None)
            .unwrap();
        assert_eq!(store.bmi(), before);
    }

    #[test]
    fn test_bmi_with_zero_height_is_degenerate_not_error() {
        let mut store = FitnessStore::new();
        store.update_profile(ProfileUpdate {
            height_cm: Some(0.0),
            ..Default::default()
        });
        assert!(store.bmi().is_infinite());
    }

    // =========================================================================
    // Workouts and aggregates
    // =========================================================================

    #[test]
    fn test_workout_validation() {
        let mut store = FitnessStore::new();

        let mut bad = workout_on(2024, 3, 1, 300.0, None);
        bad.duration_min = 0.0;
        assert!(matches!(
            store.add_workout(bad),
            Err(CoreError::Validation(_))
        ));

        let mut bad = workout_on(2024, 3, 1, -10.0, None);
        bad.calories_burned = -10.0;
        assert!(store.add_workout(bad).is_err());
        assert!(store.workouts().is_empty());

        // Zero calories is fine (a stretch session burns "nothing")
        store.add_workout(workout_on(2024, 3, 1, 0.0, None)).unwrap();
        assert_eq!(store.workouts().len(), 1);
    }

    #[test]
    fn test_delete_workout() {
        let mut store = FitnessStore::new();
        let id = store
            .add_workout(workout_on(2024, 3, 1, 300.0, None))
            .unwrap();
        store.delete_workout(Uuid::new_v4());
        assert_eq!(store.workouts().len(), 1);
        store.delete_workout(id);
        assert!(store.workouts().is_empty());
    }

    #[test]
    fn test_monthly_calories_exclude_prior_month() {
        let mut store = FitnessStore::new();
        store
            .add_workout(workout_on(2024, 3, 2, 300.0, None))
            .unwrap();
        store
            .add_workout(workout_on(2024, 3, 20, 200.0, None))
            .unwrap();
        store
            .add_workout(workout_on(2024, 2, 28, 500.0, None))
            .unwrap();

        let today = date(2024, 3, 25);
        assert_eq!(store.monthly_calories_burned(today), 500.0);
    }

    #[test]
    fn test_monthly_distance_missing_contributes_zero() {
        let mut store = FitnessStore::new();
        store
            .add_workout(workout_on(2024, 3, 2, 300.0, Some(5.0)))
            .unwrap();
        store
            .add_workout(workout_on(2024, 3, 10, 200.0, None))
            .unwrap();
        store
            .add_workout(workout_on(2024, 3, 15, 250.0, Some(2.5)))
            .unwrap();

        assert_eq!(store.monthly_distance(date(2024, 3, 20)), 7.5);
    }

    #[test]
    fn test_first_of_month_is_inclusive() {
        let mut store = FitnessStore::new();
        store
            .add_workout(workout_on(2024, 3, 1, 150.0, None))
            .unwrap();
        assert_eq!(store.monthly_calories_burned(date(2024, 3, 31)), 150.0);
    }

    // =========================================================================
    // Daily stats
    // =========================================================================

    #[test]
    fn test_daily_balance_defaults_to_zero() {
        let store = FitnessStore::new();
        assert_eq!(store.daily_calorie_balance(date(2024, 3, 1)), 0.0);
    }

    #[test]
    fn test_daily_balance_and_upsert() {
        let mut store = FitnessStore::new();
        let today = date(2024, 3, 1);
        store.upsert_daily_stats(DailyStats {
            date: today,
            calories_consumed: 2200.0,
            calories_burned: 400.0,
        });
        assert_eq!(store.daily_calorie_balance(today), 1800.0);

        // Upsert replaces, never duplicates
        store.upsert_daily_stats(DailyStats {
            date: today,
            calories_consumed: 2000.0,
            calories_burned: 600.0,
        });
        assert_eq!(store.daily_stats().len(), 1);
        assert_eq!(store.daily_calorie_balance(today), 1400.0);

        // Other dates read as zero
        assert_eq!(store.daily_calorie_balance(date(2024, 3, 2)), 0.0);
    }
}
