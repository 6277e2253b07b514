//! Run a month-by-month projection with a fixed monthly contribution
//!
//! Example: simulate --initial 10000 --monthly 1000 --rate 0.8 --months 24 --csv out.csv

use anyhow::{Context, Result};
use clap::Parser;
use investment_simulator::input::{FormInput, ParsePolicy};
use investment_simulator::projection::{self, export};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Project an investment balance with monthly contributions")]
struct Args {
    /// Initial amount
    #[arg(long, default_value = "0")]
    initial: String,

    /// Contribution added at the end of each month (negative = withdrawal)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    monthly: String,

    /// Monthly rate in percent (0.8 = 0.8% per month)
    #[arg(long, allow_hyphen_values = true)]
    rate: String,

    /// Number of months to project
    #[arg(long, allow_hyphen_values = true)]
    months: String,

    /// Treat unreadable numbers as 0 instead of failing
    #[arg(long)]
    lenient: bool,

    /// Write the period series to this CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Print the full result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let policy = if args.lenient { ParsePolicy::DefaultToZero } else { ParsePolicy::Strict };
    let form = FormInput::new(args.initial, args.monthly, args.rate, args.months);
    let params = form.parse(policy).context("Invalid simulation input")?;

    let start = Instant::now();
    let result = projection::project(&params).context("Projection failed")?;
    log::debug!("Projected {} periods in {:?}", params.periods, start.elapsed());

    if args.json {
        println!("{}", result.to_json_pretty()?);
    } else {
        println!("Month | Balance        | Contributed    | Interest");
        for point in &result.series {
            println!(
                "{:5} | {:14.2} | {:14.2} | {:12.2}",
                point.period,
                point.balance,
                point.cumulative_contributions,
                point.interest_to_date()
            );
        }

        println!("\nSummary:");
        println!("  Final balance:     {:.2}", result.final_balance);
        println!("  Total contributed: {:.2}", result.total_contributed);
        println!("  Total interest:    {:.2}", result.total_interest);
    }

    if let Some(path) = &args.csv {
        export::write_series_csv_path(&result, path)
            .with_context(|| format!("Failed to write {path}"))?;
        eprintln!("Series written to {path}");
    }

    Ok(())
}
