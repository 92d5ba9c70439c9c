//! Multi-debt payoff simulation and strategy comparison

mod compare;
mod debt;
mod simulator;

pub use compare::{ComparatorConfig, StrategyComparator, StrategyComparison, DEFAULT_AVALANCHE_THRESHOLD};
pub use debt::{DebtItem, DebtPayoffResult, MonthlySnapshot, PayoffTimeline, Strategy, UnresolvedDebt};
pub use simulator::{PayoffSimulator, SimulatorConfig, DEFAULT_MONTH_CAP};
