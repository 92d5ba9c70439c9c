//! Input and output types for multi-debt payoff simulation

use serde::{Deserialize, Serialize};

/// Ordering strategy for directing surplus payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Highest interest rate first (interest-minimizing)
    Avalanche,
    /// Smallest balance first (quick psychological wins)
    Snowball,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Avalanche => write!(f, "avalanche"),
            Strategy::Snowball => write!(f, "snowball"),
        }
    }
}

/// A single debt as supplied by the caller.
///
/// The simulator treats this as read-only and keeps its own working balances;
/// the caller's list is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtItem {
    /// Caller-assigned unique identifier
    pub id: String,

    /// Display name, echoed into results
    pub name: String,

    /// Outstanding balance
    pub balance: f64,

    /// Contractual minimum monthly payment
    pub minimum_payment: f64,

    /// Annual interest rate as a percentage (21.99 = 21.99% APR)
    pub interest_rate: f64,
}

/// Outcome for a debt that was fully retired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoffResult {
    pub debt_id: String,
    pub debt_name: String,

    /// Simulation month (1-indexed) in which the balance first reached zero
    pub payoff_month: u32,

    /// Interest accrued on this debt over its lifetime in the simulation
    pub total_interest: f64,

    /// Everything paid toward this debt, minimums and extra combined
    pub total_paid: f64,
}

/// A debt still active when the simulation hit its month cap.
///
/// Kept distinct from [`DebtPayoffResult`] so downstream code can never
/// misread "absent from results" as "paid off early".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnresolvedDebt {
    pub debt_id: String,
    pub debt_name: String,

    /// Working balance remaining at cap-out
    pub remaining_balance: f64,

    /// Interest accrued on this debt up to cap-out
    pub interest_accrued: f64,

    /// Everything paid toward this debt up to cap-out
    pub amount_paid: f64,
}

/// Per-month snapshot of the whole portfolio, emitted when the simulator is
/// configured for detailed output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// Simulation month (1-indexed)
    pub month: u32,

    /// Working balance of each debt, indexed to match the input list;
    /// retired debts hold 0.0
    pub balances: Vec<f64>,

    /// Extra-payment pool available next month (grows as debts retire and
    /// their minimums roll in)
    pub extra_pool: f64,
}

/// Portfolio-level outcome of a payoff simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffTimeline {
    /// Strategy the simulation ran under
    pub strategy: Strategy,

    /// Retired debts in payoff order
    pub debts: Vec<DebtPayoffResult>,

    /// Debts still active when the month cap was hit (empty when completed)
    pub unresolved: Vec<UnresolvedDebt>,

    /// Monthly snapshots, populated only under detailed output
    pub snapshots: Vec<MonthlySnapshot>,

    /// Months the simulation ran
    pub total_months: u32,

    /// Interest accrued across every debt, including minimum-payment interest
    /// on debts that never received extra funds
    pub total_interest: f64,

    /// Total paid across every debt
    pub total_paid: f64,

    /// False when the month cap was reached with debts still active
    pub completed: bool,
}
