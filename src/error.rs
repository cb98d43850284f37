use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised at the engine boundary for caller contract violations.
///
/// Sparse or missing data is never an error: the core algorithms answer
/// those cases with neutral factors or [`crate::Kpi::NoData`] sentinels.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Record dated {date} is after the reference date {today}")]
    RecordFromFuture { date: NaiveDate, today: NaiveDate },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_future_record_display() {
        let err = EngineError::RecordFromFuture {
            date: NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
            today: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Record dated 2026-05-02 is after the reference date 2026-05-01"
        );
    }
}
