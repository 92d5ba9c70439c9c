//! Single-debt amortization: fixed-payment math and schedule generation

mod engine;
mod schedule;

pub use engine::{monthly_payment, AmortizationEngine, LoanTerms, ScheduleConfig, BALANCE_EPSILON};
pub use schedule::{AmortizationSchedule, LedgerEntry, ScheduleStatus};
