use chrono::Duration;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::domain::{ForecastPoint, ProductionSnapshot, YieldForecast};
use crate::forecast::{PerformanceCalibrator, StandardLayCurve, WeeklyKpis};

/// Front door of the engine: calibrates every active layer flock against
/// recent history, then simulates their combined output forward day by day.
///
/// The engine holds no state between calls; every method is a fresh,
/// idempotent computation over the snapshot it is given.
pub struct ForecastEngine {
    config: EngineConfig,
    curve: StandardLayCurve,
    calibrator: PerformanceCalibrator,
}

impl ForecastEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            curve: StandardLayCurve,
            calibrator: PerformanceCalibrator::new(config.calibration.clone()),
            config,
        }
    }

    /// Efficiency factor for every active layer flock in the snapshot.
    pub fn calibrate_factors(&self, snapshot: &ProductionSnapshot) -> HashMap<Uuid, f64> {
        snapshot
            .active_layers()
            .map(|flock| {
                (
                    flock.id,
                    self.calibrator
                        .calibrate(flock, &snapshot.egg_records, snapshot.today),
                )
            })
            .collect()
    }

    /// Trailing-window FCR and hen-day production for the snapshot.
    pub fn weekly_kpis(&self, snapshot: &ProductionSnapshot) -> WeeklyKpis {
        WeeklyKpis::compute(
            &snapshot.flocks,
            &snapshot.egg_records,
            &snapshot.feed_records,
            snapshot.today,
            &self.config.kpi,
        )
    }

    /// Calibrate, then project output over the configured horizon.
    pub fn forecast(&self, snapshot: &ProductionSnapshot) -> YieldForecast {
        let factors = self.calibrate_factors(snapshot);
        self.forecast_with_factors(snapshot, &factors)
    }

    /// Project output using caller-supplied performance factors. Flocks
    /// missing from the map run at the neutral factor.
    pub fn forecast_with_factors(
        &self,
        snapshot: &ProductionSnapshot,
        factors: &HashMap<Uuid, f64>,
    ) -> YieldForecast {
        let horizon = i64::from(self.config.forecast.horizon_days);
        let survival_rate = self.config.forecast.daily_survival_rate;

        let mut points = Vec::with_capacity(horizon as usize);
        for day in 1..=horizon {
            let date = snapshot.today + Duration::days(day);
            let survival_factor = survival_rate.powi(day as i32);

            let mut projected_total = 0.0;
            let mut standard_total = 0.0;
            for flock in snapshot.active_layers() {
                let elapsed = (snapshot.today - flock.start_date).num_days();
                let age_days = (elapsed + day).max(0) + i64::from(flock.initial_age_days);
                let standard_rate = self.curve.expected_rate(age_days as f64 / 7.0);

                let factor = factors.get(&flock.id).copied().unwrap_or(1.0);
                // Cap at 100% of the flock laying; anything above is not
                // physically meaningful.
                let adjusted_rate = (standard_rate * factor).min(1.0);

                let projected_population = f64::from(flock.current_population) * survival_factor;
                projected_total += projected_population * adjusted_rate;
                standard_total += projected_population * standard_rate;
            }

            points.push(ForecastPoint {
                date,
                projected_total,
                standard_total,
            });
        }

        debug!(
            horizon_days = horizon,
            flocks = snapshot.active_layers().count(),
            "yield forecast generated"
        );
        YieldForecast::new(snapshot.today, points)
    }
}
