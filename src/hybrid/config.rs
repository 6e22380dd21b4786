//! Hybrid GA+SA configuration.

use crate::error::ConfigError;
use crate::ga::GaConfig;

/// Default per-gene proposal rate of the annealed mutation.
pub const DEFAULT_HYBRID_MUTATION_RATE: f64 = 0.3;

/// Configuration for the hybrid optimizer.
///
/// Same parameters as [`GaConfig`], but `mutation_rate` is the
/// probability that a gene is *proposed* for change; each proposal is
/// then accepted or rejected by the Metropolis criterion. Defaults to
/// [`DEFAULT_HYBRID_MUTATION_RATE`].
///
/// ```
/// use u_timetable::hybrid::HybridConfig;
///
/// let config = HybridConfig::default().with_max_generations(50).with_seed(3);
/// assert_eq!(config.ga.max_generations, 50);
/// assert!((config.ga.mutation_rate - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HybridConfig {
    /// Evolutionary loop parameters.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_hybrid_ga"))]
    pub ga: GaConfig,
}

/// Reads a possibly partial `ga` section, filling missing fields from the
/// hybrid defaults rather than the plain GA ones.
#[cfg(feature = "serde")]
fn deserialize_hybrid_ga<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<GaConfig, D::Error> {
    #[derive(serde::Deserialize)]
    struct Section {
        population_size: Option<usize>,
        max_generations: Option<usize>,
        mutation_rate: Option<f64>,
        parallel: Option<bool>,
        seed: Option<u64>,
    }

    let section = <Section as serde::Deserialize>::deserialize(deserializer)?;
    let mut ga = HybridConfig::default().ga;
    if let Some(n) = section.population_size {
        ga.population_size = n;
    }
    if let Some(n) = section.max_generations {
        ga.max_generations = n;
    }
    if let Some(rate) = section.mutation_rate {
        ga.mutation_rate = rate;
    }
    if let Some(parallel) = section.parallel {
        ga.parallel = parallel;
    }
    ga.seed = section.seed;
    Ok(ga)
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            ga: GaConfig::default().with_mutation_rate(DEFAULT_HYBRID_MUTATION_RATE),
        }
    }
}

impl HybridConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.ga = self.ga.with_population_size(n);
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.ga = self.ga.with_max_generations(n);
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.ga = self.ga.with_mutation_rate(rate);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.ga = self.ga.with_parallel(parallel);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.ga = self.ga.with_seed(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ga.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_differ_only_in_rate() {
        let hybrid = HybridConfig::default();
        let ga = GaConfig::default();
        assert_eq!(hybrid.ga.population_size, ga.population_size);
        assert_eq!(hybrid.ga.max_generations, ga.max_generations);
        assert!((hybrid.ga.mutation_rate - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_validate_delegates() {
        let config = HybridConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(ConfigError::PopulationTooSmall(0)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_keeps_hybrid_rate() {
        let config: HybridConfig =
            serde_json::from_str(r#"{ "ga": { "max_generations": 40 } }"#).unwrap();
        assert_eq!(config.ga.max_generations, 40);
        assert_eq!(config.ga.population_size, 20);
        assert!((config.ga.mutation_rate - 0.3).abs() < 1e-12);

        let explicit: HybridConfig =
            serde_json::from_str(r#"{ "ga": { "mutation_rate": 0.5, "seed": 9 } }"#).unwrap();
        assert!((explicit.ga.mutation_rate - 0.5).abs() < 1e-12);
        assert_eq!(explicit.ga.seed, Some(9));
    }
}
