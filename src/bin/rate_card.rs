//! Quick-simulate one amount against every investment option
//!
//! Outputs the balance at each configured checkpoint per option, grouped by category

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use investment_simulator::catalog::{
    checkpoint_label, InvestmentCatalog, InvestmentCategory, InvestmentOption, QuickSimulation,
};
use investment_simulator::input::parse_amount;
use investment_simulator::{ProjectionError, SimulatorConfig};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Compare investment options for a single amount")]
struct Args {
    /// Amount to simulate (defaults to the configured amount)
    #[arg(long)]
    amount: Option<String>,

    /// Only show one category: fixed-income, stocks, crypto or funds
    #[arg(long)]
    category: Option<String>,

    /// Only show the option with this id
    #[arg(long)]
    option: Option<u32>,

    /// JSON config file
    #[arg(long)]
    config: Option<String>,
}

type Row<'a> = (&'a InvestmentOption, Result<QuickSimulation, ProjectionError>);

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            SimulatorConfig::load(path).with_context(|| format!("Failed to load {path}"))?
        }
        None => SimulatorConfig::default(),
    };

    let amount = match &args.amount {
        Some(text) => parse_amount(text, config.parse_policy)?,
        None => config.default_amount,
    };

    let category = match &args.category {
        Some(name) => Some(
            InvestmentCategory::from_name(name)
                .ok_or_else(|| anyhow!("Unknown category: {name}"))?,
        ),
        None => None,
    };

    let catalog = InvestmentCatalog::default();
    let options: Vec<&InvestmentOption> = match args.option {
        Some(id) => vec![catalog.find(id).ok_or_else(|| anyhow!("Unknown option id: {id}"))?],
        None => match category {
            Some(c) => catalog.options_in(c),
            None => catalog.iter().collect(),
        },
    };

    // Each simulation is independent
    let mut rows: Vec<Row> = options
        .par_iter()
        .map(|&option| (option, option.simulate(amount, &config.checkpoints)))
        .collect();
    rows.sort_by_key(|(option, _)| option.id);

    let header: Vec<String> = config
        .checkpoints
        .iter()
        .map(|&c| format!("{:>12}", checkpoint_label(c)))
        .collect();
    println!("Amount: {amount:.2}");

    for section in catalog.categories() {
        let section_rows: Vec<&Row> = rows.iter().filter(|(o, _)| o.category == section).collect();
        if section_rows.is_empty() {
            continue;
        }

        println!("\n== {section} ==");
        println!("{:<3} {:<28} {:<24} {}", "Id", "Option", "Risk / Term", header.join(" "));

        for (option, result) in section_rows {
            let risk = format!("{} ({}), {}", option.risk, option.risk.band(), option.term);
            match result {
                Ok(sim) => {
                    let cells: Vec<String> = sim
                        .projection
                        .points
                        .iter()
                        .map(|p| format!("{:>12.2}", p.balance))
                        .collect();
                    println!(
                        "{:<3} {:<28} {:<24} {}",
                        option.id,
                        option.name,
                        risk,
                        cells.join(" ")
                    );
                }
                Err(ProjectionError::BelowMinimum { minimum, .. }) => {
                    println!(
                        "{:<3} {:<28} {:<24} (minimum {:.2})",
                        option.id, option.name, risk, minimum
                    );
                }
                Err(e) => return Err(anyhow!("{}: {e}", option.name)),
            }
        }
    }

    if let Some(best) = rows
        .iter()
        .filter_map(|(_, r)| r.as_ref().ok())
        .max_by(|a, b| a.profit.total_cmp(&b.profit))
    {
        println!("\nHighest projected profit: {} (+{:.2})", best.option_name, best.profit);
    }

    Ok(())
}
