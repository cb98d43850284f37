//! # Standard Lay-Rate Curve
//!
//! Idealized age-to-lay-rate curve for a generic laying breed: onset around
//! week 19, a steep ramp to peak, a long plateau, then a slow decline that
//! levels off for aged flocks. Actual flocks are calibrated against this
//! baseline rather than modeled individually.

/// Reference lay-rate model.
///
/// `expected_rate` is total over all non-negative ages and monotonic
/// non-increasing after the peak at week 25.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardLayCurve;

impl StandardLayCurve {
    /// Fraction of a flock expected to lay per day at the given age.
    /// Always within `[0, 1]`.
    pub fn expected_rate(&self, age_in_weeks: f64) -> f64 {
        if age_in_weeks < 19.0 {
            // Pullets: no production before point of lay.
            0.0
        } else if age_in_weeks <= 21.0 {
            // Onset ramp, 5% -> 75%.
            0.05 + (age_in_weeks - 19.0) * 0.35
        } else if age_in_weeks <= 25.0 {
            // Approach to peak, 75% -> 95%.
            0.75 + (age_in_weeks - 21.0) * 0.05
        } else if age_in_weeks <= 40.0 {
            // Peak plateau.
            0.95
        } else if age_in_weeks <= 70.0 {
            // Gradual decline, 95% -> 77%.
            0.95 - (age_in_weeks - 40.0) * 0.006
        } else {
            // Late-lay decline, floored at 60%.
            (0.77 - (age_in_weeks - 70.0) * 0.008).max(0.60)
        }
    }
}
