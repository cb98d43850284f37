pub mod flock;
pub mod kpi;
pub mod records;

pub use flock::{Flock, FlockStatus, FlockType};
pub use kpi::{ForecastPoint, Kpi, YieldForecast};
pub use records::{EggCollectionRecord, FeedConsumptionRecord, ProductionSnapshot};
