//! Pure ratio helpers for credit and property positions
//!
//! Every ratio returns 0 when its denominator is 0; these feed UI fields that
//! render mid-edit, so a blank form never divides by zero.

/// Credit utilization as a percentage of the limit
pub fn utilization(balance: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        0.0
    } else {
        balance / limit * 100.0
    }
}

/// Credit remaining under the limit, floored at zero
pub fn available_credit(balance: f64, limit: f64) -> f64 {
    (limit - balance).max(0.0)
}

/// Owner equity in a financed asset, floored at zero
pub fn equity(value: f64, loan_balance: f64) -> f64 {
    (value - loan_balance).max(0.0)
}

/// Loan-to-value as a percentage of the asset value
pub fn loan_to_value(loan_balance: f64, value: f64) -> f64 {
    if value <= 0.0 {
        0.0
    } else {
        loan_balance / value * 100.0
    }
}

/// Debt-to-income: total monthly obligations as a percentage of monthly income
pub fn debt_to_income(monthly_debt: f64, monthly_income: f64) -> f64 {
    if monthly_income <= 0.0 {
        0.0
    } else {
        monthly_debt / monthly_income * 100.0
    }
}

/// Card minimum payment: the greater of a percent of balance and a fixed
/// floor, clamped so it never exceeds the balance itself
pub fn card_minimum_payment(balance: f64, pct_of_balance: f64, floor: f64) -> f64 {
    if balance <= 0.0 {
        return 0.0;
    }
    (balance * pct_of_balance / 100.0).max(floor).min(balance)
}
