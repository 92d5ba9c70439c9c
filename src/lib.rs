//! Payoff Engine - Deterministic debt amortization and payoff simulation
//!
//! This library provides:
//! - Single-debt amortization schedules with extra-payment support
//! - Closed-form payoff, interest, and ratio metrics
//! - Multi-debt payoff simulation with rolling extra payments
//! - Avalanche vs. snowball strategy comparison
//!
//! Every function is pure: synchronous, deterministic, bounded by explicit
//! month caps, and free of I/O and shared state. Error conditions come back
//! as data (sentinels, explicit status fields), never as panics, so UI
//! callers can retry with adjusted inputs.

pub mod amortization;
pub mod metrics;
pub mod payoff;

// Re-export commonly used types
pub use amortization::{monthly_payment, AmortizationEngine, AmortizationSchedule, LedgerEntry};
pub use metrics::PayoffEstimate;
pub use payoff::{DebtItem, PayoffSimulator, PayoffTimeline, Strategy, StrategyComparator};

/// Monthly rate from an annual percentage: `annual_pct / 100 / 12`
pub(crate) fn monthly_rate(annual_pct: f64) -> f64 {
    annual_pct / 100.0 / 12.0
}
