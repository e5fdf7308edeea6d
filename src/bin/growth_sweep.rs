//! Growth-rate sensitivity sweep
//!
//! Re-runs the retirement projection across a grid of growth rates in
//! parallel and writes one summary row per rate.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use fincast::profile::loader;
use fincast::{FinancialProfile, ScenarioRunner};

#[derive(Parser)]
#[command(name = "growth_sweep", about = "Growth-rate sensitivity sweep")]
struct Args {
    /// Financial profile JSON; built-in defaults are used when omitted
    #[arg(long)]
    financial: Option<PathBuf>,

    /// Lowest growth rate in the grid
    #[arg(long, default_value_t = 0.03)]
    from: f64,

    /// Highest growth rate in the grid
    #[arg(long, default_value_t = 0.10)]
    to: f64,

    /// Grid step
    #[arg(long, default_value_t = 0.0025)]
    step: f64,

    /// Output CSV path
    #[arg(long, default_value = "growth_sweep.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let profile = match &args.financial {
        Some(path) => loader::load_financial_profile(path)
            .with_context(|| format!("loading financial profile {}", path.display()))?,
        None => FinancialProfile::default(),
    };

    let mut rates = Vec::new();
    let mut rate = args.from;
    while rate <= args.to + 1e-9 {
        rates.push(rate);
        rate += args.step;
    }

    println!("Sweeping {} growth rates...", rates.len());
    let start = Instant::now();

    let runner = ScenarioRunner::new();
    let results = runner.sweep_growth_rates(&profile, &rates);

    println!("Sweep complete in {:?}", start.elapsed());

    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writeln!(
        file,
        "GrowthRate,GrandTotal,GrandTotalReal,AccessibleBefore,LockedBefore,AfterTax"
    )?;
    for (rate, projection) in &results {
        let summary = projection.summary();
        writeln!(
            file,
            "{:.4},{:.0},{:.0},{:.0},{:.0},{:.0}",
            rate,
            summary.final_grand_total,
            summary.final_grand_total_real,
            summary.final_accessible_before,
            summary.final_locked_before,
            summary.final_after_tax
        )?;
    }

    println!("Results written to: {}", args.output.display());

    println!(
        "\n{:>8} {:>16} {:>16} {:>16}",
        "Rate", "Grand Total", "Real", "After Tax"
    );
    println!("{}", "-".repeat(60));
    for (rate, projection) in &results {
        let summary = projection.summary();
        println!(
            "{:>8.4} {:>16.0} {:>16.0} {:>16.0}",
            rate, summary.final_grand_total, summary.final_grand_total_real, summary.final_after_tax
        );
    }

    Ok(())
}
