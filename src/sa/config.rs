//! SA configuration.

use crate::error::ConfigError;

/// Configuration for the Simulated Annealing algorithm.
///
/// Temperature starts at `initial_temperature`, is multiplied by
/// `cooling_rate` after every iteration, and the search stops once it is
/// no longer above `stop_temperature`.
///
/// # Examples
///
/// ```
/// use u_timetable::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.99)
///     .with_stop_temperature(0.01);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// The search stops when the temperature drops to or below this.
    pub stop_temperature: f64,

    /// Maximum total iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Record the current cost every this many iterations. 0 is treated
    /// as 1.
    pub history_interval: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.95,
            stop_temperature: 0.1,
            max_iterations: 0,
            history_interval: 1,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_stop_temperature(mut self, t: f64) -> Self {
        self.stop_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of iterations the cooling schedule allows, ignoring
    /// `max_iterations`: `ceil(log_rate(stop / initial))`.
    pub fn scheduled_iterations(&self) -> usize {
        let steps = (self.stop_temperature / self.initial_temperature).ln() / self.cooling_rate.ln();
        if steps.is_finite() && steps > 0.0 {
            steps.ceil() as usize
        } else {
            1
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let temperatures_ok = self.initial_temperature.is_finite()
            && self.stop_temperature > 0.0
            && self.stop_temperature < self.initial_temperature;
        if !temperatures_ok {
            return Err(ConfigError::InvalidTemperature {
                initial: self.initial_temperature,
                stop: self.stop_temperature,
            });
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::InvalidCoolingRate(self.cooling_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.95).abs() < 1e-10);
        assert!((config.stop_temperature - 0.1).abs() < 1e-10);
        assert_eq!(config.max_iterations, 0);
        assert_eq!(config.history_interval, 1);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTemperature { .. })
        ));

        let config = SaConfig::default().with_stop_temperature(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_stop_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_stop_temperature(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        for rate in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
            let config = SaConfig::default().with_cooling_rate(rate);
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidCoolingRate(_))),
                "rate {rate} should be rejected"
            );
        }
    }

    #[test]
    fn test_scheduled_iterations() {
        // 100 * 0.95^n <= 0.1  =>  n >= 134.7
        assert_eq!(SaConfig::default().scheduled_iterations(), 135);
        let fast = SaConfig::default().with_cooling_rate(1e-12);
        assert_eq!(fast.scheduled_iterations(), 1);
    }
}
