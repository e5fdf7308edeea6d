//! Fincast CLI
//!
//! Loads profile JSON (or falls back to built-in defaults), runs the
//! retirement and lifestyle projections, prints a report, and writes
//! year-by-year CSV output.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use fincast::profile::loader;
use fincast::{FinancialProfile, HouseholdProfile, ScenarioRunner};

#[derive(Parser)]
#[command(name = "fincast", about = "Household financial projection calculator")]
struct Args {
    /// Financial profile JSON; built-in defaults are used when omitted
    #[arg(long)]
    financial: Option<PathBuf>,

    /// Household profile JSON; built-in defaults are used when omitted
    #[arg(long)]
    household: Option<PathBuf>,

    /// Retirement projection CSV output path
    #[arg(long, default_value = "retirement_projection.csv")]
    retirement_csv: PathBuf,

    /// Lifestyle projection CSV output path
    #[arg(long, default_value = "lifestyle_projection.csv")]
    lifestyle_csv: PathBuf,

    /// Skip the lifestyle projection
    #[arg(long)]
    retirement_only: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Fincast v0.1.0");
    println!("==============\n");

    let financial = match &args.financial {
        Some(path) => loader::load_financial_profile(path)
            .with_context(|| format!("loading financial profile {}", path.display()))?,
        None => FinancialProfile::default(),
    };

    let runner = ScenarioRunner::new();
    run_retirement(&runner, &financial, &args)?;

    if !args.retirement_only {
        let household = match &args.household {
            Some(path) => loader::load_household_profile(path)
                .with_context(|| format!("loading household profile {}", path.display()))?,
            None => HouseholdProfile::default(),
        };
        run_lifestyle(&runner, &household, &args)?;
    }

    Ok(())
}

fn run_retirement(
    runner: &ScenarioRunner,
    profile: &FinancialProfile,
    args: &Args,
) -> anyhow::Result<()> {
    let result = runner.run(profile);

    println!("Retirement Projection ({} years):", result.horizon_years);
    println!("  Gross Income: ${:.0}", profile.gross_income);
    println!("  Total Tax: ${:.0}", result.taxes.total);
    println!(
        "    Federal ${:.0} / State ${:.0} / City ${:.0} / FICA ${:.0}",
        result.taxes.federal, result.taxes.state, result.taxes.city, result.taxes.fica
    );
    println!("  Take-Home: ${:.0}", result.take_home);
    println!("  Annual Savings: ${:.0}", result.total_savings);
    println!();

    for advisory in &result.advisories {
        println!("  Warning: {advisory}");
    }
    if !result.advisories.is_empty() {
        println!();
    }

    println!(
        "{:>4} {:>5} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "Year", "Age", "Pre-Tax", "Roth", "Taxable", "Accessible", "Grand Total"
    );
    println!("{}", "-".repeat(88));
    for row in result.years.iter().take(12) {
        println!(
            "{:>4} {:>5.1} {:>14.0} {:>14.0} {:>14.0} {:>14.0} {:>14.0}",
            row.year,
            row.age,
            row.pretax_401k,
            row.roth_total,
            row.taxable_total,
            row.accessible_before,
            row.grand_total
        );
    }
    if result.years.len() > 12 {
        println!("... ({} more years)", result.years.len() - 12);
    }

    let summary = result.summary();
    println!("\nSummary at retirement:");
    println!("  Grand Total: ${:.0}", summary.final_grand_total);
    println!(
        "  Grand Total (today's dollars): ${:.0}",
        summary.final_grand_total_real
    );
    println!("  Accessible Before 59.5: ${:.0}", summary.final_accessible_before);
    println!("  Locked Until 59.5: ${:.0}", summary.final_locked_before);
    println!("  After Estimated Taxes: ${:.0}", summary.final_after_tax);

    let mut writer = csv::Writer::from_path(&args.retirement_csv)
        .with_context(|| format!("creating {}", args.retirement_csv.display()))?;
    for row in &result.years {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!(
        "\nFull retirement results written to: {}",
        args.retirement_csv.display()
    );

    Ok(())
}

fn run_lifestyle(
    runner: &ScenarioRunner,
    profile: &HouseholdProfile,
    args: &Args,
) -> anyhow::Result<()> {
    let engine = fincast::LifestyleEngine::new(runner.costs().clone());
    let projection = engine.project(profile);
    let summary = fincast::lifestyle::summarize(&projection, profile, runner.costs());

    println!("\nLifestyle Projection (30 years):");
    println!("  30-Year Total: ${:.0}", summary.thirty_year_total);
    println!(
        "  Peak Year: {} (${:.0})",
        summary.peak_year.year + 1,
        summary.peak_year.amount
    );
    println!(
        "  Lowest Year: {} (${:.0})",
        summary.lowest_year.year + 1,
        summary.lowest_year.amount
    );
    println!("  Income Gap (Year 1): ${:.0}", summary.income_gap);

    if !summary.insights.is_empty() {
        println!("\nInsights:");
        for insight in &summary.insights {
            println!("  - {insight}");
        }
    }

    let mut file = File::create(&args.lifestyle_csv)
        .with_context(|| format!("creating {}", args.lifestyle_csv.display()))?;
    writeln!(
        file,
        "Year,Housing,Education,Childcare,Food,Simchas,Transportation,Insurance,Tzedakah,Extras,Total,Events"
    )?;
    for year in &projection {
        let events = year
            .events
            .iter()
            .map(|e| e.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        writeln!(
            file,
            "{},{:.0},{:.0},{:.0},{:.0},{:.0},{:.0},{:.0},{:.0},{:.0},{:.0},{}",
            year.year + 1,
            year.costs.housing,
            year.costs.education,
            year.costs.childcare,
            year.costs.food,
            year.costs.simchas,
            year.costs.transportation,
            year.costs.insurance,
            year.costs.tzedakah,
            year.costs.extras,
            year.total_annual,
            events
        )?;
    }
    println!(
        "\nFull lifestyle results written to: {}",
        args.lifestyle_csv.display()
    );

    Ok(())
}
