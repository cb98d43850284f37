//! # Performance Calibration
//!
//! Learns how a flock actually performs relative to the standard curve by
//! replaying its recent egg logs at the age the flock had on each log date.
//! The result is a single factor the forecast multiplies onto the curve.

use chrono::NaiveDate;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::config::CalibrationConfig;
use crate::domain::{EggCollectionRecord, Flock};
use crate::forecast::StandardLayCurve;

/// Factor used when history carries no usable signal.
pub const NEUTRAL_FACTOR: f64 = 1.0;

/// Computes per-flock efficiency factors from recent egg-collection logs.
#[derive(Debug, Clone, Default)]
pub struct PerformanceCalibrator {
    curve: StandardLayCurve,
    config: CalibrationConfig,
}

impl PerformanceCalibrator {
    pub fn new(config: CalibrationConfig) -> Self {
        Self {
            curve: StandardLayCurve,
            config,
        }
    }

    /// Efficiency factor for one flock, always within the configured clamp
    /// range or exactly [`NEUTRAL_FACTOR`].
    ///
    /// Records belonging to other flocks are ignored. With fewer than
    /// `min_samples` records, a zero population, or no record taken at a
    /// meaningful point on the curve, the flock keeps the neutral factor.
    pub fn calibrate(
        &self,
        flock: &Flock,
        records: &[EggCollectionRecord],
        today: NaiveDate,
    ) -> f64 {
        let recent: Vec<&EggCollectionRecord> = records
            .iter()
            .filter(|r| r.flock_id == flock.id)
            .sorted_by(|a, b| b.date.cmp(&a.date))
            .take(self.config.max_samples)
            .collect();

        if recent.len() < self.config.min_samples {
            trace!(
                flock = %flock.id,
                samples = recent.len(),
                "insufficient history, keeping neutral factor"
            );
            return NEUTRAL_FACTOR;
        }

        if flock.current_population == 0 {
            trace!(flock = %flock.id, "zero population, keeping neutral factor");
            return NEUTRAL_FACTOR;
        }

        let current_age_days = flock.age_in_days(today);
        let population = f64::from(flock.current_population);

        let mut efficiencies = Vec::with_capacity(recent.len());
        for record in recent {
            let days_ago = (today - record.date).num_days();
            let age_at_log_days = (current_age_days - days_ago).max(0);
            let standard_rate = self.curve.expected_rate(age_at_log_days as f64 / 7.0);

            // The curve carries no signal near onset; a ratio against a
            // near-zero baseline would be all noise.
            if standard_rate <= self.config.min_standard_rate {
                continue;
            }

            let actual_rate = f64::from(record.total_good_count) / population;
            let efficiency = (actual_rate / standard_rate)
                .clamp(self.config.efficiency_floor, self.config.efficiency_ceiling);
            efficiencies.push(efficiency);
        }

        if efficiencies.is_empty() {
            return NEUTRAL_FACTOR;
        }

        let factor = efficiencies.iter().sum::<f64>() / efficiencies.len() as f64;
        debug!(
            flock = %flock.id,
            samples = efficiencies.len(),
            factor,
            "flock calibrated"
        );
        factor
    }
}
