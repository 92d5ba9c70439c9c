//! Sweep extra-payment levels and tabulate strategy outcomes
//!
//! Usage: cargo run --bin payment_sweep -- --max-extra 1000 --step 50

use clap::Parser;
use payoff_engine::payoff::{DebtItem, StrategyComparator};
use rayon::prelude::*;

#[derive(Parser)]
#[command(name = "payment_sweep", about = "Parallel sweep of extra-payment levels")]
struct Args {
    /// Largest extra payment to test
    #[arg(long, default_value_t = 1000.0)]
    max_extra: f64,

    /// Step between tested levels
    #[arg(long, default_value_t = 50.0)]
    step: f64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let debts = vec![
        DebtItem {
            id: "card-1".into(),
            name: "Rewards card".into(),
            balance: 6200.0,
            minimum_payment: 130.0,
            interest_rate: 22.99,
        },
        DebtItem {
            id: "auto-1".into(),
            name: "Auto loan".into(),
            balance: 14_800.0,
            minimum_payment: 310.0,
            interest_rate: 6.4,
        },
        DebtItem {
            id: "personal-1".into(),
            name: "Personal loan".into(),
            balance: 3100.0,
            minimum_payment: 95.0,
            interest_rate: 11.5,
        },
    ];

    let step = if args.step > 0.0 { args.step } else { 50.0 };
    let levels: Vec<f64> = std::iter::successors(Some(0.0), |x| Some(x + step))
        .take_while(|&x| x <= args.max_extra)
        .collect();

    println!("Sweeping {} extra-payment levels over {} debts...\n", levels.len(), debts.len());

    let rows: Vec<_> = levels
        .par_iter()
        .map(|&extra| {
            let comparison = StrategyComparator::default().compare(&debts, extra);
            (extra, comparison)
        })
        .collect();

    println!(
        "{:>8} {:>12} {:>14} {:>12} {:>14} {:>12} {:>12}",
        "Extra", "Aval months", "Aval interest", "Snow months", "Snow interest", "Saved", "Recommended"
    );
    println!("{}", "-".repeat(90));
    for (extra, c) in &rows {
        println!(
            "{:>8.0} {:>12} {:>14.2} {:>12} {:>14.2} {:>12.2} {:>12}",
            extra,
            c.avalanche.total_months,
            c.avalanche.total_interest,
            c.snowball.total_months,
            c.snowball.total_interest,
            c.interest_saved,
            c.recommended,
        );
    }
}
