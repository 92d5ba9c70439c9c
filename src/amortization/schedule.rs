//! Schedule output structures for amortization runs

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single row of amortization output for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Schedule month (1-indexed)
    pub month: u32,

    /// Total payment made this month
    pub payment: f64,

    /// Portion of the payment applied to principal
    pub principal: f64,

    /// Portion of the payment covering accrued interest
    pub interest: f64,

    /// Remaining balance after the payment
    pub balance: f64,

    /// Interest paid from month 1 through this month
    pub cumulative_interest: f64,

    /// Principal paid from month 1 through this month
    pub cumulative_principal: f64,
}

/// How a schedule run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    /// Balance reached zero within the term (possibly early, via extra payments)
    PaidOff,
    /// The monthly payment does not cover accrued interest; the balance
    /// would never decrease, so no rows beyond detection are generated
    NonAmortizing,
}

/// Complete amortization schedule for a single loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Monthly ledger rows, chronological
    pub entries: Vec<LedgerEntry>,

    /// Terminal status of the run
    pub status: ScheduleStatus,
}

impl AmortizationSchedule {
    pub(crate) fn new(status: ScheduleStatus) -> Self {
        Self {
            entries: Vec::new(),
            status,
        }
    }

    pub(crate) fn add_entry(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    /// Number of months until payoff (schedule length)
    pub fn months(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Total interest paid over the life of the schedule
    pub fn total_interest(&self) -> f64 {
        self.entries.iter().map(|e| e.interest).sum()
    }

    /// Total amount paid over the life of the schedule
    pub fn total_paid(&self) -> f64 {
        self.entries.iter().map(|e| e.payment).sum()
    }

    /// Payoff date: the start date advanced by the schedule's length.
    /// None for an empty or non-amortizing schedule.
    pub fn payoff_date(&self, start: NaiveDate) -> Option<NaiveDate> {
        if self.status == ScheduleStatus::NonAmortizing || self.entries.is_empty() {
            return None;
        }
        start.checked_add_months(Months::new(self.months()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(month: u32, payment: f64, interest: f64, balance: f64) -> LedgerEntry {
        LedgerEntry {
            month,
            payment,
            principal: payment - interest,
            interest,
            balance,
            cumulative_interest: 0.0,
            cumulative_principal: 0.0,
        }
    }

    #[test]
    fn test_totals_sum_rows() {
        let mut schedule = AmortizationSchedule::new(ScheduleStatus::PaidOff);
        schedule.add_entry(entry(1, 100.0, 10.0, 50.0));
        schedule.add_entry(entry(2, 55.0, 5.0, 0.0));

        assert_eq!(schedule.months(), 2);
        assert!((schedule.total_paid() - 155.0).abs() < 1e-9);
        assert!((schedule.total_interest() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_payoff_date() {
        let mut schedule = AmortizationSchedule::new(ScheduleStatus::PaidOff);
        for m in 1..=12 {
            schedule.add_entry(entry(m, 100.0, 0.0, 1200.0 - 100.0 * m as f64));
        }

        let start = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let payoff = schedule.payoff_date(start).unwrap();
        assert_eq!(payoff, NaiveDate::from_ymd_opt(2027, 1, 15).unwrap());
    }

    #[test]
    fn test_payoff_date_none_when_non_amortizing() {
        let schedule = AmortizationSchedule::new(ScheduleStatus::NonAmortizing);
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(schedule.payoff_date(start), None);
    }
}
