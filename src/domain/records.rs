use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::Flock;
use crate::error::EngineError;

/// One day's good-egg count for a flock, as entered by farm staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EggCollectionRecord {
    pub date: NaiveDate,
    pub flock_id: Uuid,
    pub total_good_count: u32,
}

/// One day's feed draw for a flock, in kilograms.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedConsumptionRecord {
    pub date: NaiveDate,
    pub flock_id: Uuid,
    #[validate(range(min = 0.0))]
    pub quantity_kg: f64,
}

/// Everything the engine computes over: the reference date and read-only
/// copies of the flock, egg, and feed records as of that date.
///
/// The engine never mutates a snapshot; repeated calls over the same
/// snapshot return identical results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionSnapshot {
    pub today: NaiveDate,
    pub flocks: Vec<Flock>,
    pub egg_records: Vec<EggCollectionRecord>,
    pub feed_records: Vec<FeedConsumptionRecord>,
}

impl ProductionSnapshot {
    /// Reject caller contract violations before any computation runs.
    ///
    /// Sparse data is fine; malformed data (negative quantities, records
    /// dated past `today`) is not.
    pub fn validate(&self) -> Result<(), EngineError> {
        for flock in &self.flocks {
            Validate::validate(flock)?;
        }

        for record in &self.egg_records {
            if record.date > self.today {
                return Err(EngineError::RecordFromFuture {
                    date: record.date,
                    today: self.today,
                });
            }
        }

        for record in &self.feed_records {
            Validate::validate(record)?;
            if record.date > self.today {
                return Err(EngineError::RecordFromFuture {
                    date: record.date,
                    today: self.today,
                });
            }
        }

        Ok(())
    }

    /// Flocks that participate in calibration, KPIs, and forecasting.
    pub fn active_layers(&self) -> impl Iterator<Item = &Flock> {
        self.flocks.iter().filter(|f| f.is_active_layer())
    }
}
