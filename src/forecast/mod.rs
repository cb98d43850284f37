//! # Production Forecasting
//!
//! The algorithmic core of the engine, in dependency order:
//!
//! - **Curve**: fixed reference curve mapping flock age to expected lay rate
//! - **Calibration**: per-flock efficiency factor learned from recent egg logs
//! - **Metrics**: trailing-window feed-conversion and hen-day KPIs
//! - **Engine**: compounding day-by-day projection across all active flocks
//!
//! Everything here is a pure function of its arguments. Division-by-zero
//! paths resolve to neutral factors or [`crate::Kpi::NoData`], never to
//! NaN, infinity, or a panic.

pub mod calibration;
pub mod curve;
pub mod engine;
pub mod metrics;

pub use calibration::PerformanceCalibrator;
pub use curve::StandardLayCurve;
pub use engine::ForecastEngine;
pub use metrics::WeeklyKpis;
