use serde::Deserialize;

/// Tuning parameters for the engine. Every value here is a domain heuristic
/// with a documented default, not a load-bearing invariant.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub calibration: CalibrationConfig,
    pub forecast: ForecastConfig,
    pub kpi: KpiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Most recent egg records considered per flock.
    pub max_samples: usize,
    /// Below this many records the flock keeps the neutral factor.
    pub min_samples: usize,
    /// Records taken while the curve is below this rate carry no signal.
    pub min_standard_rate: f64,
    /// Lower clamp on a single record's efficiency ratio.
    pub efficiency_floor: f64,
    /// Upper clamp on a single record's efficiency ratio.
    pub efficiency_ceiling: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            max_samples: 14,
            min_samples: 3,
            min_standard_rate: 0.1,
            efficiency_floor: 0.5,
            efficiency_ceiling: 1.2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Days to project forward.
    pub horizon_days: u32,
    /// Fraction of the population surviving each projected day.
    pub daily_survival_rate: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_days: 30,
            daily_survival_rate: 0.999,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KpiConfig {
    /// Trailing window for the rolling KPIs.
    pub window_days: u32,
    /// Assumed mass of one egg, used to convert counts to egg mass.
    pub egg_mass_kg: f64,
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            window_days: 7,
            egg_mass_kg: 0.06,
        }
    }
}

impl EngineConfig {
    /// Validate that the parameters are usable.
    pub fn validate(&self) -> Result<(), String> {
        if self.calibration.efficiency_floor > self.calibration.efficiency_ceiling {
            return Err("efficiency_floor must be <= efficiency_ceiling".to_string());
        }

        if self.calibration.efficiency_floor < 0.0 {
            return Err("efficiency_floor must be non-negative".to_string());
        }

        if self.calibration.min_samples == 0 {
            return Err("min_samples must be at least 1".to_string());
        }

        if !(0.0..=1.0).contains(&self.forecast.daily_survival_rate) {
            return Err("daily_survival_rate must be between 0 and 1".to_string());
        }

        if self.forecast.horizon_days == 0 {
            return Err("horizon_days must be at least 1".to_string());
        }

        if self.kpi.window_days == 0 {
            return Err("window_days must be at least 1".to_string());
        }

        if self.kpi.egg_mass_kg <= 0.0 {
            return Err("egg_mass_kg must be positive".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.calibration.max_samples, 14);
        assert_eq!(config.forecast.horizon_days, 30);
        assert_eq!(config.kpi.egg_mass_kg, 0.06);
    }

    #[test]
    fn test_validate_rejects_inverted_clamp() {
        let mut config = EngineConfig::default();
        config.calibration.efficiency_floor = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_survival_rate() {
        let mut config = EngineConfig::default();
        config.forecast.daily_survival_rate = 1.5;
        assert!(config.validate().is_err());

        config.forecast.daily_survival_rate = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_overrides() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"forecast": {"horizon_days": 14}}"#).unwrap();
        assert_eq!(config.forecast.horizon_days, 14);
        assert_eq!(config.forecast.daily_survival_rate, 0.999);
        assert_eq!(config.kpi.window_days, 7);
    }
}
