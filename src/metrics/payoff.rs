//! Closed-form payoff math for a single debt
//!
//! Schedule-free formulas for quick lookups: how long a fixed payment takes
//! to retire a balance, what it costs in interest, and when it lands.

use crate::monthly_rate;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Outcome of a payoff-duration estimate.
///
/// `Never` is a real answer, not an error: a payment that does not exceed the
/// monthly interest charge can never extinguish the balance. It is kept
/// distinct from any finite month count so callers cannot mistake a capped
/// loop for a payoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "months")]
pub enum PayoffEstimate {
    /// Paid off after this many whole months
    Months(u32),
    /// The payment never retires the balance
    Never,
}

impl PayoffEstimate {
    /// Month count, or None for `Never`
    pub fn months(&self) -> Option<u32> {
        match self {
            PayoffEstimate::Months(m) => Some(*m),
            PayoffEstimate::Never => None,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, PayoffEstimate::Never)
    }
}

/// Months to retire `balance` at `apr_pct` with a fixed `payment`.
///
/// Uses the logarithmic closed form `n = −ln(1 − B·r/P) / ln(1+r)`, rounded
/// up to whole months. A zero rate falls back to linear division. Returns
/// `Months(0)` for a non-positive balance and `Never` when the payment is
/// non-positive or does not exceed the first month's interest charge.
pub fn payoff_months(balance: f64, apr_pct: f64, payment: f64) -> PayoffEstimate {
    if balance <= 0.0 {
        return PayoffEstimate::Months(0);
    }
    if payment <= 0.0 {
        return PayoffEstimate::Never;
    }

    let r = monthly_rate(apr_pct);
    if r == 0.0 {
        return PayoffEstimate::Months((balance / payment).ceil() as u32);
    }
    if payment <= balance * r {
        return PayoffEstimate::Never;
    }

    let n = -(1.0 - balance * r / payment).ln() / (1.0 + r).ln();
    PayoffEstimate::Months(n.ceil() as u32)
}

/// Total interest paid over the payoff horizon: `months × payment − balance`.
/// None when the balance never pays off.
pub fn total_interest(balance: f64, apr_pct: f64, payment: f64) -> Option<f64> {
    payoff_months(balance, apr_pct, payment)
        .months()
        .map(|n| (n as f64 * payment - balance).max(0.0))
}

/// Calendar date the final payment lands, given the start date.
/// None when the balance never pays off.
pub fn payoff_date(start: NaiveDate, balance: f64, apr_pct: f64, payment: f64) -> Option<NaiveDate> {
    let months = payoff_months(balance, apr_pct, payment).months()?;
    start.checked_add_months(Months::new(months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_payment_below_interest_never_pays_off() {
        // $5000 at 24% APR accrues $100/month; $90 can never catch up
        assert_eq!(payoff_months(5000.0, 24.0, 90.0), PayoffEstimate::Never);
    }

    #[test]
    fn test_payment_equal_to_interest_never_pays_off() {
        assert_eq!(payoff_months(5000.0, 24.0, 100.0), PayoffEstimate::Never);
    }

    #[test]
    fn test_zero_payment_never_pays_off() {
        assert_eq!(payoff_months(5000.0, 24.0, 0.0), PayoffEstimate::Never);
        assert_eq!(payoff_months(5000.0, 24.0, -50.0), PayoffEstimate::Never);
    }

    #[test]
    fn test_zero_balance_is_instant() {
        assert_eq!(payoff_months(0.0, 24.0, 100.0), PayoffEstimate::Months(0));
        assert_eq!(payoff_months(-10.0, 24.0, 100.0), PayoffEstimate::Months(0));
    }

    #[test]
    fn test_zero_rate_is_linear() {
        assert_eq!(payoff_months(1200.0, 0.0, 100.0), PayoffEstimate::Months(12));
        // Partial final month rounds up
        assert_eq!(payoff_months(1250.0, 0.0, 100.0), PayoffEstimate::Months(13));
    }

    #[test]
    fn test_closed_form_matches_hand_calc() {
        // B=5000, r=0.015, P=150: n = -ln(0.5)/ln(1.015) = 46.56 -> 47
        assert_eq!(payoff_months(5000.0, 18.0, 150.0), PayoffEstimate::Months(47));
    }

    #[test]
    fn test_total_interest_substitution() {
        let interest = total_interest(5000.0, 18.0, 150.0).unwrap();
        assert_abs_diff_eq!(interest, 47.0 * 150.0 - 5000.0, epsilon = 1e-9);
        assert_eq!(total_interest(5000.0, 24.0, 90.0), None);
    }

    #[test]
    fn test_payoff_date_substitution() {
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let date = payoff_date(start, 1200.0, 0.0, 100.0).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2027, 3, 1).unwrap());

        assert_eq!(payoff_date(start, 5000.0, 24.0, 90.0), None);
    }

    #[test]
    fn test_estimate_accessors() {
        assert_eq!(PayoffEstimate::Months(5).months(), Some(5));
        assert!(PayoffEstimate::Never.is_never());
        assert!(!PayoffEstimate::Months(5).is_never());
    }
}
