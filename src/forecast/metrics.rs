//! # Rolling Efficiency Metrics
//!
//! Trailing-window production KPIs recomputed fresh on every call:
//!
//! - **FCR** (feed-conversion ratio): kg of feed per kg of egg mass produced;
//!   lower is more efficient
//! - **Hen-day production**: eggs collected per bird-day
//!
//! Both come back as [`Kpi::NoData`] rather than NaN or infinity whenever
//! the window holds no supporting data.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use crate::config::KpiConfig;
use crate::domain::{EggCollectionRecord, FeedConsumptionRecord, Flock, Kpi};

/// Trailing-window KPIs for the active layer population.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyKpis {
    pub fcr: Kpi,
    pub hen_day_production: Kpi,

    /// Good eggs collected inside the window.
    pub eggs_collected: u64,
    /// Feed drawn inside the window, kg.
    pub feed_consumed_kg: f64,
    /// Window length the sums were taken over.
    pub window_days: u32,
}

impl WeeklyKpis {
    /// Compute both KPIs over the trailing window ending at `today`.
    ///
    /// Only records dated inside the window and belonging to an active
    /// layer flock contribute.
    pub fn compute(
        flocks: &[Flock],
        egg_records: &[EggCollectionRecord],
        feed_records: &[FeedConsumptionRecord],
        today: NaiveDate,
        config: &KpiConfig,
    ) -> Self {
        let layers: Vec<&Flock> = flocks.iter().filter(|f| f.is_active_layer()).collect();
        let layer_ids: HashSet<Uuid> = layers.iter().map(|f| f.id).collect();
        let cutoff = today - Duration::days(i64::from(config.window_days));

        let eggs_collected: u64 = egg_records
            .iter()
            .filter(|r| r.date >= cutoff && layer_ids.contains(&r.flock_id))
            .map(|r| u64::from(r.total_good_count))
            .sum();

        let feed_consumed_kg: f64 = feed_records
            .iter()
            .filter(|r| r.date >= cutoff && layer_ids.contains(&r.flock_id))
            .map(|r| r.quantity_kg)
            .sum();

        let egg_mass_kg = eggs_collected as f64 * config.egg_mass_kg;
        let fcr = Kpi::ratio(feed_consumed_kg, egg_mass_kg);

        let total_population: u64 = layers
            .iter()
            .map(|f| u64::from(f.current_population))
            .sum();
        let bird_days = total_population as f64 * f64::from(config.window_days);
        let hen_day_production = Kpi::ratio(eggs_collected as f64, bird_days);

        debug!(
            eggs = eggs_collected,
            feed_kg = feed_consumed_kg,
            layers = layers.len(),
            "weekly KPIs computed"
        );

        Self {
            fcr,
            hen_day_production,
            eggs_collected,
            feed_consumed_kg,
            window_days: config.window_days,
        }
    }
}

impl fmt::Display for WeeklyKpis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FCR={} hen-day={} over {}d",
            self.fcr, self.hen_day_production, self.window_days
        )
    }
}
