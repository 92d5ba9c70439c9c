//! Single-debt metrics: closed-form payoff math, credit/property ratios, and
//! mortgage-specific analyses

pub mod mortgage;
pub mod payoff;
pub mod ratios;

pub use mortgage::{
    analyze_refinance, monthly_housing_payment, pmi_removal_date, pmi_removal_month, BreakEven,
    PmiConfig, RefinanceAnalysis, RefinanceInputs, RefinancePolicy,
};
pub use payoff::{payoff_date, payoff_months, total_interest, PayoffEstimate};
