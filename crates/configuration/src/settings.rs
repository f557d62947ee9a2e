use crate::error::ConfigError;
use core_types::Benchmark;
use rust_decimal::Decimal;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub analysis: Analysis,
    pub benchmarks: BenchmarkLabels,
}

/// Contains the market assumptions shared by the risk and benchmark engines.
#[derive(Debug, Clone, Deserialize)]
pub struct Analysis {
    /// The assumed fixed annual risk-free rate, as a fraction (0.03 = 3%).
    pub risk_free_rate: Decimal,
}

/// Display labels for the three market-index series, in report order.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkLabels {
    pub index_a: String,
    pub index_b: String,
    pub index_c: String,
}

impl BenchmarkLabels {
    /// Returns the configured label for the given index.
    pub fn label(&self, index: Benchmark) -> &str {
        match index {
            Benchmark::IndexA => &self.index_a,
            Benchmark::IndexB => &self.index_b,
            Benchmark::IndexC => &self.index_c,
        }
    }
}

impl Config {
    /// Checks that the configured assumptions are logical.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.risk_free_rate < Decimal::ZERO
            || self.analysis.risk_free_rate >= Decimal::ONE
        {
            return Err(ConfigError::Invalid(
                "risk_free_rate must be a fraction between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Config {
        Config {
            analysis: Analysis {
                risk_free_rate: dec!(0.03),
            },
            benchmarks: BenchmarkLabels {
                index_a: "Alpha Composite".to_string(),
                index_b: "Beta 30".to_string(),
                index_c: "Gamma 100".to_string(),
            },
        }
    }

    #[test]
    fn labels_follow_the_fixed_benchmark_order() {
        let config = sample();
        let labels: Vec<&str> = Benchmark::ALL
            .iter()
            .map(|b| config.benchmarks.label(*b))
            .collect();
        assert_eq!(labels, vec!["Alpha Composite", "Beta 30", "Gamma 100"]);
    }

    #[test]
    fn validation_rejects_a_nonsensical_risk_free_rate() {
        let mut config = sample();
        config.analysis.risk_free_rate = dec!(1.5);
        assert!(config.validate().is_err());

        config.analysis.risk_free_rate = dec!(-0.01);
        assert!(config.validate().is_err());

        config.analysis.risk_free_rate = dec!(0.03);
        assert!(config.validate().is_ok());
    }
}
