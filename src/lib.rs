//! # Poultry Yield Engine
//!
//! Egg-production forecasting and efficiency calibration for layer flocks.
//!
//! ## Components
//!
//! - **StandardLayCurve**: reference age-to-lay-rate curve for a generic laying breed
//! - **PerformanceCalibrator**: learns a per-flock efficiency factor from recent egg logs
//! - **WeeklyKpis**: trailing-window feed-conversion ratio and hen-day production
//! - **ForecastEngine**: day-by-day forward simulation of flock output with survival decay
//!
//! The engine is a pure, synchronous computation over an in-memory
//! [`ProductionSnapshot`]. It holds no state between calls, performs no I/O,
//! and the "today" reference is always an explicit argument, so identical
//! snapshots always produce identical results.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use uuid::Uuid;
//! use poultry_yield_engine::{
//!     EngineConfig, Flock, FlockStatus, FlockType, ForecastEngine, ProductionSnapshot,
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
//! let flock = Flock {
//!     id: Uuid::new_v4(),
//!     name: "House A".to_string(),
//!     flock_type: FlockType::Layer,
//!     status: FlockStatus::Active,
//!     start_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
//!     initial_age_days: 7,
//!     current_population: 1200,
//! };
//! let snapshot = ProductionSnapshot {
//!     today,
//!     flocks: vec![flock],
//!     egg_records: vec![],
//!     feed_records: vec![],
//! };
//!
//! let engine = ForecastEngine::new(EngineConfig::default());
//! let forecast = engine.forecast(&snapshot);
//! assert_eq!(forecast.points.len(), 30);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod forecast;

pub use config::{CalibrationConfig, EngineConfig, ForecastConfig, KpiConfig};
pub use domain::{
    EggCollectionRecord, FeedConsumptionRecord, Flock, FlockStatus, FlockType, ForecastPoint,
    Kpi, ProductionSnapshot, YieldForecast,
};
pub use error::EngineError;
pub use forecast::{ForecastEngine, PerformanceCalibrator, StandardLayCurve, WeeklyKpis};
