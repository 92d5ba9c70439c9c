//! Avalanche vs. snowball comparison and recommendation

use super::debt::{DebtItem, PayoffTimeline, Strategy};
use super::simulator::{PayoffSimulator, SimulatorConfig};
use serde::{Deserialize, Serialize};

/// Absolute interest-saved cutoff above which avalanche is recommended.
///
/// Below this, snowball's quick psychological wins are favored even though
/// avalanche never costs more interest. Deliberately an absolute currency
/// amount, not a ratio.
pub const DEFAULT_AVALANCHE_THRESHOLD: f64 = 1000.0;

/// Configuration for a strategy comparison
#[derive(Debug, Clone)]
pub struct ComparatorConfig {
    /// Interest avalanche must save (vs. snowball) to be recommended
    pub avalanche_threshold: f64,

    /// Passed through to both simulation runs
    pub simulator: SimulatorConfig,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            avalanche_threshold: DEFAULT_AVALANCHE_THRESHOLD,
            simulator: SimulatorConfig::default(),
        }
    }
}

/// Paired timelines with derived savings and a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub avalanche: PayoffTimeline,
    pub snowball: PayoffTimeline,

    /// Snowball interest minus avalanche interest; non-negative, since
    /// avalanche always targets the highest-rate balance first
    pub interest_saved: f64,

    /// Snowball months minus avalanche months; signed, month ordering is not
    /// guaranteed either way
    pub months_saved: i64,

    /// Recommended strategy under the configured threshold
    pub recommended: Strategy,
}

/// Runs both strategies over identical inputs and derives a recommendation
pub struct StrategyComparator {
    config: ComparatorConfig,
}

impl StrategyComparator {
    /// Create a new comparator with the given config
    pub fn new(config: ComparatorConfig) -> Self {
        Self { config }
    }

    /// Simulate both strategies and compare
    pub fn compare(&self, debts: &[DebtItem], extra_payment: f64) -> StrategyComparison {
        let simulator = PayoffSimulator::new(self.config.simulator.clone());
        let avalanche = simulator.simulate(debts, extra_payment, Strategy::Avalanche);
        let snowball = simulator.simulate(debts, extra_payment, Strategy::Snowball);

        let interest_saved = snowball.total_interest - avalanche.total_interest;
        let months_saved = snowball.total_months as i64 - avalanche.total_months as i64;
        let recommended = if interest_saved > self.config.avalanche_threshold {
            Strategy::Avalanche
        } else {
            Strategy::Snowball
        };

        StrategyComparison {
            avalanche,
            snowball,
            interest_saved,
            months_saved,
            recommended,
        }
    }
}

impl Default for StrategyComparator {
    fn default() -> Self {
        Self::new(ComparatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debt(id: &str, balance: f64, minimum: f64, rate: f64) -> DebtItem {
        DebtItem {
            id: id.into(),
            name: id.to_uppercase(),
            balance,
            minimum_payment: minimum,
            interest_rate: rate,
        }
    }

    /// Wide rate spread and large balances: snowball parks money on the
    /// cheap debt while the expensive one compounds
    fn wide_spread_portfolio() -> Vec<DebtItem> {
        vec![
            debt("card", 20_000.0, 400.0, 24.0),
            debt("auto", 15_000.0, 280.0, 5.0),
        ]
    }

    #[test]
    fn test_avalanche_never_pays_more_interest() {
        let comparison = StrategyComparator::default().compare(&wide_spread_portfolio(), 400.0);

        assert!(comparison.avalanche.completed);
        assert!(comparison.snowball.completed);
        assert!(comparison.avalanche.total_interest <= comparison.snowball.total_interest);
        assert!(comparison.interest_saved >= 0.0);
        // Month ordering is NOT asserted; only interest ordering is invariant
    }

    #[test]
    fn test_large_savings_recommend_avalanche() {
        let comparison = StrategyComparator::default().compare(&wide_spread_portfolio(), 400.0);

        assert!(
            comparison.interest_saved > DEFAULT_AVALANCHE_THRESHOLD,
            "fixture saves {}",
            comparison.interest_saved
        );
        assert_eq!(comparison.recommended, Strategy::Avalanche);
    }

    #[test]
    fn test_small_savings_recommend_snowball() {
        // Identical rates: targeting order cannot change total interest
        let debts = vec![
            debt("a", 3000.0, 90.0, 10.0),
            debt("b", 2000.0, 60.0, 10.0),
        ];
        let comparison = StrategyComparator::default().compare(&debts, 150.0);

        assert!(comparison.interest_saved.abs() < DEFAULT_AVALANCHE_THRESHOLD);
        assert_eq!(comparison.recommended, Strategy::Snowball);
    }

    #[test]
    fn test_threshold_is_overridable() {
        // Modest rate spread: savings are positive but well under $1000
        let debts = vec![
            debt("a", 3000.0, 90.0, 12.0),
            debt("b", 2000.0, 60.0, 10.0),
        ];

        let default_rec = StrategyComparator::default().compare(&debts, 150.0);
        assert_eq!(default_rec.recommended, Strategy::Snowball);

        let zero_threshold = StrategyComparator::new(ComparatorConfig {
            avalanche_threshold: 0.0,
            ..Default::default()
        })
        .compare(&debts, 150.0);
        assert!(zero_threshold.interest_saved > 0.0);
        assert_eq!(zero_threshold.recommended, Strategy::Avalanche);
    }

    #[test]
    fn test_comparison_is_deterministic() {
        let comparator = StrategyComparator::default();
        let first = comparator.compare(&wide_spread_portfolio(), 250.0);
        let second = comparator.compare(&wide_spread_portfolio(), 250.0);
        assert_eq!(first, second);
    }
}
