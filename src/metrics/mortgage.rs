//! Mortgage-specific metrics: PMI removal, refinance analysis, PITI payment
//!
//! PMI removal is a small simulation loop rather than a closed form because
//! the exit condition depends on the property value, not just the balance
//! trajectory.

use crate::amortization::monthly_payment;
use crate::metrics::ratios::loan_to_value;
use crate::monthly_rate;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// LTV percentage at or below which PMI drops off
pub const DEFAULT_PMI_LTV_THRESHOLD: f64 = 80.0;

/// Bound on the PMI-removal search (30 years)
pub const DEFAULT_PMI_MONTH_CAP: u32 = 360;

/// Break-even ceiling for a refinance to be worth doing
pub const DEFAULT_BREAKEVEN_CAP_MONTHS: u32 = 60;

/// Bound on refinance interest loops (50 years)
pub const DEFAULT_REFI_HORIZON_MONTHS: u32 = 600;

/// Policy knobs for the PMI-removal search
#[derive(Debug, Clone)]
pub struct PmiConfig {
    /// LTV percentage at or below which PMI is removed
    pub ltv_threshold: f64,

    /// Maximum months to search before giving up
    pub month_cap: u32,
}

impl Default for PmiConfig {
    fn default() -> Self {
        Self {
            ltv_threshold: DEFAULT_PMI_LTV_THRESHOLD,
            month_cap: DEFAULT_PMI_MONTH_CAP,
        }
    }
}

/// First month at which LTV falls to the threshold, or None if the search
/// cap is reached or the payment does not amortize the loan.
///
/// Returns `Some(0)` when the starting position is already at or below the
/// threshold (no PMI owed at all).
pub fn pmi_removal_month(
    loan_balance: f64,
    annual_rate_pct: f64,
    payment: f64,
    property_value: f64,
    config: &PmiConfig,
) -> Option<u32> {
    if loan_balance <= 0.0 || property_value <= 0.0 {
        return Some(0);
    }
    if loan_to_value(loan_balance, property_value) <= config.ltv_threshold {
        return Some(0);
    }

    let rate = monthly_rate(annual_rate_pct);
    let mut balance = loan_balance;

    for month in 1..=config.month_cap {
        let interest = balance * rate;
        let principal = payment - interest;
        if principal <= 0.0 {
            // Balance never decreases from here
            return None;
        }
        balance -= principal;
        if loan_to_value(balance, property_value) <= config.ltv_threshold {
            return Some(month);
        }
    }

    None
}

/// Calendar date PMI drops off, or None on cap-out
pub fn pmi_removal_date(
    start: NaiveDate,
    loan_balance: f64,
    annual_rate_pct: f64,
    payment: f64,
    property_value: f64,
    config: &PmiConfig,
) -> Option<NaiveDate> {
    let month = pmi_removal_month(loan_balance, annual_rate_pct, payment, property_value, config)?;
    start.checked_add_months(Months::new(month))
}

/// Inputs to a refinance comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinanceInputs {
    /// Outstanding balance on the current loan
    pub current_balance: f64,

    /// Current loan's annual rate as a percentage
    pub current_rate_pct: f64,

    /// Current monthly payment
    pub current_payment: f64,

    /// New loan's annual rate as a percentage
    pub new_rate_pct: f64,

    /// New loan's term in months
    pub new_term_months: u32,

    /// One-time cost to close the refinance
    pub closing_costs: f64,
}

/// Policy knobs for the refinance decision
#[derive(Debug, Clone)]
pub struct RefinancePolicy {
    /// Break-even must land within this many months
    pub breakeven_cap_months: u32,

    /// Bound on the interest loops for either loan
    pub horizon_months: u32,
}

impl Default for RefinancePolicy {
    fn default() -> Self {
        Self {
            breakeven_cap_months: DEFAULT_BREAKEVEN_CAP_MONTHS,
            horizon_months: DEFAULT_REFI_HORIZON_MONTHS,
        }
    }
}

/// Months until closing costs are recovered from the lower payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "months")]
pub enum BreakEven {
    Months(u32),
    /// The new payment is not strictly lower, so costs are never recovered
    Never,
}

/// Outcome of a refinance comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinanceAnalysis {
    /// Monthly payment on the new loan
    pub new_payment: f64,

    /// Current payment minus new payment (positive = cheaper month-to-month)
    pub payment_delta: f64,

    /// Remaining interest if the current loan runs to payoff
    pub current_interest: f64,

    /// Total interest over the new loan's term
    pub new_interest: f64,

    /// Current interest minus new interest, before closing costs
    pub interest_saved: f64,

    /// Months until the payment delta recovers the closing costs
    pub break_even: BreakEven,

    /// True only if interest saved net of closing costs is positive and
    /// break-even lands within the policy cap
    pub worth_it: bool,
}

/// Compare continuing the current loan against refinancing into new terms.
pub fn analyze_refinance(inputs: &RefinanceInputs, policy: &RefinancePolicy) -> RefinanceAnalysis {
    let new_payment = monthly_payment(inputs.current_balance, inputs.new_rate_pct, inputs.new_term_months);

    let current_interest = interest_to_payoff(
        inputs.current_balance,
        inputs.current_rate_pct,
        inputs.current_payment,
        policy.horizon_months,
    );
    let new_interest = interest_to_payoff(
        inputs.current_balance,
        inputs.new_rate_pct,
        new_payment,
        inputs.new_term_months.min(policy.horizon_months),
    );

    let payment_delta = inputs.current_payment - new_payment;
    let break_even = if payment_delta > 0.0 {
        BreakEven::Months((inputs.closing_costs / payment_delta).ceil() as u32)
    } else {
        BreakEven::Never
    };

    let interest_saved = current_interest - new_interest;
    let worth_it = interest_saved - inputs.closing_costs > 0.0
        && matches!(break_even, BreakEven::Months(m) if m <= policy.breakeven_cap_months);

    RefinanceAnalysis {
        new_payment,
        payment_delta,
        current_interest,
        new_interest,
        interest_saved,
        break_even,
        worth_it,
    }
}

/// Sum interest on a declining balance under a fixed payment, bounded by
/// `horizon` months. A non-amortizing payment accrues interest to the bound.
fn interest_to_payoff(balance: f64, annual_rate_pct: f64, payment: f64, horizon: u32) -> f64 {
    let rate = monthly_rate(annual_rate_pct);
    let mut remaining = balance;
    let mut total = 0.0;

    for _ in 0..horizon {
        if remaining <= crate::amortization::BALANCE_EPSILON {
            break;
        }
        let interest = remaining * rate;
        total += interest;
        let principal = (payment - interest).min(remaining);
        if principal > 0.0 {
            remaining -= principal;
        }
    }

    total
}

/// Full monthly housing payment: principal and interest plus monthly shares
/// of tax and insurance plus PMI
pub fn monthly_housing_payment(
    principal: f64,
    annual_rate_pct: f64,
    term_months: u32,
    annual_tax: f64,
    annual_insurance: f64,
    monthly_pmi: f64,
) -> f64 {
    monthly_payment(principal, annual_rate_pct, term_months)
        + annual_tax / 12.0
        + annual_insurance / 12.0
        + monthly_pmi
}
