//! Core engine for monthly loan amortization schedules

use super::schedule::{AmortizationSchedule, LedgerEntry, ScheduleStatus};
use crate::monthly_rate;
use serde::{Deserialize, Serialize};

/// Balance at or below this many currency units is considered retired
pub const BALANCE_EPSILON: f64 = 0.01;

/// Loan terms supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate as a percentage (6.0 = 6%)
    pub annual_rate_pct: f64,

    /// Scheduled term in months
    pub term_months: u32,
}

/// Configuration for a schedule run
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Additional principal paid every month on top of the base payment
    pub extra_payment: f64,

    /// Balance threshold below which the loan counts as paid off
    pub balance_epsilon: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            extra_payment: 0.0,
            balance_epsilon: BALANCE_EPSILON,
        }
    }
}

/// Fixed monthly payment for a fully amortizing loan.
///
/// Standard annuity formula `P·c·(1+c)^n / ((1+c)^n − 1)`. A zero rate
/// degenerates to straight-line `principal / term_months`. Non-positive
/// principal or a zero term returns 0.0; financial forms routinely submit
/// transient empty states, so degenerate input is neutral, not an error.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, term_months: u32) -> f64 {
    if principal <= 0.0 || term_months == 0 {
        return 0.0;
    }

    let c = monthly_rate(annual_rate_pct);
    if c == 0.0 {
        return principal / term_months as f64;
    }

    let growth = (1.0 + c).powi(term_months as i32);
    principal * c * growth / (growth - 1.0)
}

/// Generates month-by-month amortization schedules
pub struct AmortizationEngine {
    config: ScheduleConfig,
}

impl AmortizationEngine {
    /// Create a new engine with the given config
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Run a schedule for the given loan terms.
    ///
    /// Iterates months `1..=term_months` while the balance exceeds the
    /// epsilon. Extra payments shorten the schedule; early termination is the
    /// expected prepayment path. If the payment does not cover accrued
    /// interest the run stops with [`ScheduleStatus::NonAmortizing`] instead
    /// of looping to the term bound.
    pub fn schedule(&self, terms: &LoanTerms) -> AmortizationSchedule {
        let mut result = AmortizationSchedule::new(ScheduleStatus::PaidOff);

        if terms.principal <= 0.0 || terms.term_months == 0 {
            return result;
        }

        let rate = monthly_rate(terms.annual_rate_pct);
        let base_payment = monthly_payment(terms.principal, terms.annual_rate_pct, terms.term_months);

        let mut balance = terms.principal;
        let mut cumulative_interest = 0.0;
        let mut cumulative_principal = 0.0;

        for month in 1..=terms.term_months {
            if balance <= self.config.balance_epsilon {
                break;
            }

            let interest = balance * rate;
            let available = base_payment - interest + self.config.extra_payment;
            if available <= 0.0 {
                result.status = ScheduleStatus::NonAmortizing;
                break;
            }

            // Clamp so the final month never drives the balance negative
            let principal_portion = available.min(balance);
            let payment = principal_portion + interest;
            balance -= principal_portion;

            cumulative_interest += interest;
            cumulative_principal += principal_portion;

            result.add_entry(LedgerEntry {
                month,
                payment,
                principal: principal_portion,
                interest,
                balance,
                cumulative_interest,
                cumulative_principal,
            });
        }

        result
    }
}

impl Default for AmortizationEngine {
    fn default() -> Self {
        Self::new(ScheduleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_rate_payment() {
        assert_abs_diff_eq!(monthly_payment(1200.0, 0.0, 12), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_standard_loan_payment() {
        // 30-year $200k loan at 6%
        assert_abs_diff_eq!(monthly_payment(200_000.0, 6.0, 360), 1199.10, epsilon = 0.01);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(monthly_payment(0.0, 6.0, 360), 0.0);
        assert_eq!(monthly_payment(-500.0, 6.0, 360), 0.0);
        assert_eq!(monthly_payment(1000.0, 6.0, 0), 0.0);
    }

    #[test]
    fn test_schedule_converges_to_zero() {
        let engine = AmortizationEngine::default();
        let schedule = engine.schedule(&LoanTerms {
            principal: 200_000.0,
            annual_rate_pct: 6.0,
            term_months: 360,
        });

        assert_eq!(schedule.status, ScheduleStatus::PaidOff);
        assert!(schedule.entries.len() <= 360);
        let final_balance = schedule.entries.last().unwrap().balance;
        assert!(final_balance.abs() <= 0.01, "final balance {}", final_balance);

        // Total interest on this loan is ~$231,676 over 30 years
        assert_abs_diff_eq!(schedule.total_interest(), 231_676.38, epsilon = 1.0);
    }

    #[test]
    fn test_zero_rate_schedule_has_no_interest() {
        let engine = AmortizationEngine::default();
        let schedule = engine.schedule(&LoanTerms {
            principal: 1200.0,
            annual_rate_pct: 0.0,
            term_months: 12,
        });

        assert_eq!(schedule.months(), 12);
        for entry in &schedule.entries {
            assert_eq!(entry.interest, 0.0);
            assert_abs_diff_eq!(entry.payment, 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_extra_payment_terminates_early() {
        let base = AmortizationEngine::default().schedule(&LoanTerms {
            principal: 10_000.0,
            annual_rate_pct: 12.0,
            term_months: 60,
        });
        let prepaid = AmortizationEngine::new(ScheduleConfig {
            extra_payment: 200.0,
            ..Default::default()
        })
        .schedule(&LoanTerms {
            principal: 10_000.0,
            annual_rate_pct: 12.0,
            term_months: 60,
        });

        assert!(prepaid.months() < base.months());
        assert!(prepaid.total_interest() < base.total_interest());
        assert_eq!(prepaid.status, ScheduleStatus::PaidOff);
    }

    #[test]
    fn test_payment_equals_principal_plus_interest() {
        let engine = AmortizationEngine::default();
        let schedule = engine.schedule(&LoanTerms {
            principal: 35_000.0,
            annual_rate_pct: 7.5,
            term_months: 72,
        });

        for entry in &schedule.entries {
            assert_abs_diff_eq!(entry.payment, entry.principal + entry.interest, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_non_amortizing_surfaces_status() {
        // Negative extra payment large enough that nothing reaches principal
        let engine = AmortizationEngine::new(ScheduleConfig {
            extra_payment: -2000.0,
            ..Default::default()
        });
        let schedule = engine.schedule(&LoanTerms {
            principal: 100_000.0,
            annual_rate_pct: 6.0,
            term_months: 360,
        });

        assert_eq!(schedule.status, ScheduleStatus::NonAmortizing);
        assert!(schedule.entries.is_empty());
    }

    #[test]
    fn test_degenerate_terms_empty_schedule() {
        let engine = AmortizationEngine::default();
        let schedule = engine.schedule(&LoanTerms {
            principal: 0.0,
            annual_rate_pct: 6.0,
            term_months: 360,
        });
        assert!(schedule.entries.is_empty());
        assert_eq!(schedule.status, ScheduleStatus::PaidOff);
    }
}
