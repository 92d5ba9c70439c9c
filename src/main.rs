//! Payoff Engine CLI
//!
//! Command-line demo: amortizes a loan and compares payoff strategies for a
//! debt portfolio.

use clap::Parser;
use payoff_engine::amortization::{AmortizationEngine, LoanTerms, ScheduleConfig};
use payoff_engine::payoff::{DebtItem, StrategyComparator};

#[derive(Parser)]
#[command(name = "payoff_engine", about = "Debt amortization and payoff strategy demo")]
struct Args {
    /// Loan principal for the amortization demo
    #[arg(long, default_value_t = 200_000.0)]
    principal: f64,

    /// Annual rate as a percentage
    #[arg(long, default_value_t = 6.0)]
    rate: f64,

    /// Term in months
    #[arg(long, default_value_t = 360)]
    term: u32,

    /// Extra monthly payment applied to the loan and to the portfolio pool
    #[arg(long, default_value_t = 200.0)]
    extra: f64,

    /// Print the strategy comparison as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("Payoff Engine v0.1.0");
    println!("====================\n");

    // Amortization demo
    let engine = AmortizationEngine::new(ScheduleConfig {
        extra_payment: args.extra,
        ..Default::default()
    });
    let schedule = engine.schedule(&LoanTerms {
        principal: args.principal,
        annual_rate_pct: args.rate,
        term_months: args.term,
    });

    println!(
        "Loan: ${:.2} at {}% over {} months, ${:.2}/month extra",
        args.principal, args.rate, args.term, args.extra
    );
    println!("{:>5} {:>12} {:>12} {:>12} {:>14}", "Month", "Payment", "Principal", "Interest", "Balance");
    println!("{}", "-".repeat(60));
    for entry in schedule.entries.iter().take(12) {
        println!(
            "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            entry.month, entry.payment, entry.principal, entry.interest, entry.balance
        );
    }
    if schedule.entries.len() > 12 {
        println!("... ({} more months)", schedule.entries.len() - 12);
    }
    println!(
        "Paid off in {} months, total interest ${:.2}\n",
        schedule.months(),
        schedule.total_interest()
    );

    // Strategy comparison demo on a sample portfolio
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

    let comparison = StrategyComparator::default().compare(&debts, args.extra);

    if args.json {
        match serde_json::to_string_pretty(&comparison) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("failed to serialize comparison: {}", e),
        }
        return;
    }

    println!("Portfolio: {} debts, ${:.2}/month extra", debts.len(), args.extra);
    for timeline in [&comparison.avalanche, &comparison.snowball] {
        println!(
            "  {:<9} {:>3} months, total interest ${:>10.2}{}",
            timeline.strategy,
            timeline.total_months,
            timeline.total_interest,
            if timeline.completed { "" } else { "  (cap reached!)" }
        );
        for result in &timeline.debts {
            println!(
                "    month {:>3}: {} (interest ${:.2})",
                result.payoff_month, result.debt_name, result.total_interest
            );
        }
    }
    println!(
        "\nAvalanche saves ${:.2} and {} months -> recommended: {}",
        comparison.interest_saved, comparison.months_saved, comparison.recommended
    );
}
