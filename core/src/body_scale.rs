//! Parametric body-scale mapping for the 3D avatar
//!
//! Maps the user profile onto a small vector of dimensionless multipliers
//! consumed by the renderer. The renderer multiplies its base mesh
//! dimensions by these factors; no geometry crosses this boundary.
//!
//! The mapper is intentionally driven by the profile's baseline weight
//! rather than the weight-entry history: the avatar reflects the profile
//! the user edited, while the metrics engine tracks logged weigh-ins.

use serde::{Deserialize, Serialize};

use crate::health_metrics::calculate_bmi;
use crate::models::{Gender, UserProfile};

/// Reference height (cm) that maps to a height scale of 1.0
const BASE_HEIGHT_CM: f64 = 175.0;

/// Reference "normal" BMI that maps to a width ratio of 1.0
const BASE_BMI: f64 = 22.0;

/// Dimensionless scale factors for the avatar mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyScales {
    /// Vertical scale, 1.0 at 175 cm
    pub height: f64,
    /// Lateral scale, BMI- and body-fat-driven
    pub width: f64,
    /// Body-fat contribution already folded into `width`, exposed for
    /// renderers that shade by adiposity
    pub body_fat_factor: f64,
    /// Muscle bulk multiplier, clamped to [0.75, 1.25]
    pub muscle: f64,
    /// Surface definition, 0 at high BMI, unbounded above 1 for low BMI
    pub definition: f64,
}

/// Compute avatar scale factors from a profile
///
/// Pure function; callers recompute on every profile change rather than
/// caching the result.
pub fn body_scales(profile: &UserProfile) -> BodyScales {
    let height = profile.height_cm / 100.0 / (BASE_HEIGHT_CM / 100.0);

    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
    let bmi_ratio = bmi / BASE_BMI;

    // Width scale based on BMI, sub-linear so extreme BMIs stay renderable
    let gender_factor = match profile.gender {
        Gender::Male => 1.0,
        Gender::Female => 0.88,
    };
    let width = bmi_ratio.powf(0.4) * gender_factor;

    let body_fat_factor = 1.0 + (profile.body_fat_percent - 15.0) * 0.01;

    // Lower BMI = more defined musculature
    let muscle = (1.4 - (bmi - BASE_BMI) * 0.04).clamp(0.75, 1.25);
    let definition = (1.0 - (bmi - BASE_BMI) * 0.03).max(0.0);

    BodyScales {
        height,
        width: width * body_fat_factor,
        body_fat_factor,
        muscle,
        definition,
    }
}
