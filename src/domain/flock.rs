use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;
use validator::Validate;

/// Production purpose of a flock. Only layer flocks participate in
/// calibration, KPIs, and forecasting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum FlockType {
    Layer,
    Broiler,
}

/// Lifecycle status of a flock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum FlockStatus {
    Active,
    Sold,
    Closed,
}

/// A flock as recorded by data entry. Immutable to this engine.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Flock {
    pub id: Uuid,

    #[validate(length(min = 1))]
    pub name: String,

    #[serde(rename = "type")]
    pub flock_type: FlockType,

    pub status: FlockStatus,

    /// Date the flock was placed.
    pub start_date: NaiveDate,

    /// Age at placement, in days.
    pub initial_age_days: u32,

    pub current_population: u32,
}

impl Flock {
    /// Whether this flock contributes to production figures.
    pub fn is_active_layer(&self) -> bool {
        self.flock_type == FlockType::Layer && self.status == FlockStatus::Active
    }

    /// Age in days on the given date. Days elapsed before placement count
    /// as zero, so the age is never below `initial_age_days`.
    pub fn age_in_days(&self, on: NaiveDate) -> i64 {
        let elapsed = (on - self.start_date).num_days().max(0);
        elapsed + i64::from(self.initial_age_days)
    }

    /// Age in fractional weeks on the given date.
    pub fn age_in_weeks(&self, on: NaiveDate) -> f64 {
        self.age_in_days(on) as f64 / 7.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flock(start: NaiveDate, initial_age_days: u32) -> Flock {
        Flock {
            id: Uuid::new_v4(),
            name: "House 1".to_string(),
            flock_type: FlockType::Layer,
            status: FlockStatus::Active,
            start_date: start,
            initial_age_days,
            current_population: 500,
        }
    }

    #[test]
    fn test_age_accumulates_from_placement() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let f = flock(start, 10);

        assert_eq!(f.age_in_days(start), 10);
        assert_eq!(f.age_in_days(start + chrono::Duration::days(25)), 35);
        assert_eq!(f.age_in_weeks(start + chrono::Duration::days(60)), 10.0);
    }

    #[test]
    fn test_age_never_negative_before_placement() {
        let start = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let f = flock(start, 14);

        // Asking about a date before placement clamps elapsed days to zero.
        let earlier = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        assert_eq!(f.age_in_days(earlier), 14);
    }

    #[test]
    fn test_is_active_layer() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut f = flock(start, 0);
        assert!(f.is_active_layer());

        f.status = FlockStatus::Sold;
        assert!(!f.is_active_layer());

        f.status = FlockStatus::Active;
        f.flock_type = FlockType::Broiler;
        assert!(!f.is_active_layer());
    }

    #[test]
    fn test_type_parsing() {
        use std::str::FromStr;

        assert_eq!(FlockType::from_str("LAYER").unwrap(), FlockType::Layer);
        assert_eq!(FlockType::from_str("broiler").unwrap(), FlockType::Broiler);
        assert!(FlockType::from_str("DUCK").is_err());
        assert_eq!(FlockStatus::Active.to_string(), "ACTIVE");
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut f = flock(start, 0);
        f.name = String::new();
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_serialization_uses_wire_names() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let f = flock(start, 0);
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["type"], "LAYER");
        assert_eq!(json["status"], "ACTIVE");
    }
}
