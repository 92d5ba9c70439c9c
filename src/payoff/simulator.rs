//! Multi-debt payoff simulation with rolling extra payments
//!
//! Discrete monthly time-stepping over a portfolio of debts. Every debt pays
//! its own minimum each month; the shared extra pool goes to exactly one debt
//! chosen by the strategy, and a retired debt's minimum folds into the pool
//! for all later months (the rolling snowball/avalanche).

use super::debt::{
    DebtItem, DebtPayoffResult, MonthlySnapshot, PayoffTimeline, Strategy, UnresolvedDebt,
};
use crate::amortization::BALANCE_EPSILON;
use crate::monthly_rate;
use std::cmp::Ordering;

/// Bound on the simulation (50 years); termination is structural, not
/// contingent on convergence
pub const DEFAULT_MONTH_CAP: u32 = 600;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Hard bound on simulated months
    pub month_cap: u32,

    /// Balance threshold at or below which a debt counts as retired
    pub balance_epsilon: f64,

    /// Whether to emit per-month portfolio snapshots
    pub detailed_output: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            month_cap: DEFAULT_MONTH_CAP,
            balance_epsilon: BALANCE_EPSILON,
            detailed_output: false,
        }
    }
}

/// Per-debt working state, owned by a single simulation run
#[derive(Debug, Clone)]
struct WorkingDebt {
    balance: f64,
    interest_accrued: f64,
    amount_paid: f64,
    active: bool,
}

/// Simulates portfolio payoff under a chosen strategy
pub struct PayoffSimulator {
    config: SimulatorConfig,
}

impl PayoffSimulator {
    /// Create a new simulator with the given config
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Run the simulation.
    ///
    /// The input list is read-only; working balances are owned by this call,
    /// so concurrent invocations need no coordination. Debts still active
    /// when the month cap is hit land in `unresolved` with
    /// `completed = false`, never silently omitted.
    pub fn simulate(
        &self,
        debts: &[DebtItem],
        extra_payment: f64,
        strategy: Strategy,
    ) -> PayoffTimeline {
        let priority = priority_order(debts, strategy);

        let mut working: Vec<WorkingDebt> = debts
            .iter()
            .map(|d| WorkingDebt {
                balance: d.balance.max(0.0),
                interest_accrued: 0.0,
                amount_paid: 0.0,
                active: d.balance > self.config.balance_epsilon,
            })
            .collect();

        let mut extra_pool = extra_payment.max(0.0);
        let mut results: Vec<DebtPayoffResult> = Vec::new();
        let mut snapshots: Vec<MonthlySnapshot> = Vec::new();
        let mut total_months = 0;

        for month in 1..=self.config.month_cap {
            if working.iter().all(|w| !w.active) {
                break;
            }
            total_months = month;

            // Minimums released by debts retired this month; folded into the
            // pool only after the month closes
            let mut released = 0.0;

            // Minimum payments, in input order
            for (idx, debt) in debts.iter().enumerate() {
                let w = &mut working[idx];
                if !w.active {
                    continue;
                }

                let interest = w.balance * monthly_rate(debt.interest_rate);
                w.balance += interest;
                w.interest_accrued += interest;

                let payment = debt.minimum_payment.min(w.balance).max(0.0);
                w.balance -= payment;
                w.amount_paid += payment;

                if w.balance <= self.config.balance_epsilon {
                    w.balance = 0.0;
                    w.active = false;
                    released += debt.minimum_payment;
                    results.push(retired(debt, w, month));
                    log::debug!("{} retired at month {} by minimum payments", debt.id, month);
                }
            }

            // Whole extra pool to the single highest-priority active debt.
            // Retirement here attributes no additional interest: the extra
            // payment is pure principal.
            if extra_pool > 0.0 {
                if let Some(&idx) = priority.iter().find(|&&idx| working[idx].active) {
                    let debt = &debts[idx];
                    let w = &mut working[idx];

                    let payment = extra_pool.min(w.balance);
                    w.balance -= payment;
                    w.amount_paid += payment;

                    if w.balance <= self.config.balance_epsilon {
                        w.balance = 0.0;
                        w.active = false;
                        released += debt.minimum_payment;
                        results.push(retired(debt, w, month));
                        log::debug!("{} retired at month {} by extra payment", debt.id, month);
                    }
                }
            }

            extra_pool += released;

            if self.config.detailed_output {
                snapshots.push(MonthlySnapshot {
                    month,
                    balances: working.iter().map(|w| w.balance).collect(),
                    extra_pool,
                });
            }
        }

        let completed = working.iter().all(|w| !w.active);
        if !completed {
            log::warn!(
                "payoff simulation hit the {}-month cap with {} debts unresolved",
                self.config.month_cap,
                working.iter().filter(|w| w.active).count()
            );
        }

        let unresolved = debts
            .iter()
            .zip(&working)
            .filter(|(_, w)| w.active)
            .map(|(d, w)| UnresolvedDebt {
                debt_id: d.id.clone(),
                debt_name: d.name.clone(),
                remaining_balance: w.balance,
                interest_accrued: w.interest_accrued,
                amount_paid: w.amount_paid,
            })
            .collect();

        PayoffTimeline {
            strategy,
            debts: results,
            unresolved,
            snapshots,
            total_months,
            total_interest: working.iter().map(|w| w.interest_accrued).sum(),
            total_paid: working.iter().map(|w| w.amount_paid).sum(),
            completed,
        }
    }
}

impl Default for PayoffSimulator {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

fn retired(debt: &DebtItem, w: &WorkingDebt, month: u32) -> DebtPayoffResult {
    DebtPayoffResult {
        debt_id: debt.id.clone(),
        debt_name: debt.name.clone(),
        payoff_month: month,
        total_interest: w.interest_accrued,
        total_paid: w.amount_paid,
    }
}

/// Priority order for extra payments, computed once per run.
///
/// Avalanche sorts by rate descending, snowball by balance ascending. The
/// sort is stable, so ties keep the caller's input order.
fn priority_order(debts: &[DebtItem], strategy: Strategy) -> Vec<usize> {
    let mut order: Vec<usize> = (0..debts.len()).collect();
    match strategy {
        Strategy::Avalanche => order.sort_by(|&a, &b| {
            debts[b]
                .interest_rate
                .partial_cmp(&debts[a].interest_rate)
                .unwrap_or(Ordering::Equal)
        }),
        Strategy::Snowball => order.sort_by(|&a, &b| {
            debts[a]
                .balance
                .partial_cmp(&debts[b].balance)
                .unwrap_or(Ordering::Equal)
        }),
    }
    order
}
