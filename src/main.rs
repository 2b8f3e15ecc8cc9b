//! SIP Calculator CLI
//!
//! Runs a single-plan projection and writes the growth series to CSV

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use sip_calculator::{Plan, ProjectionEngine, Schedule};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScheduleArg {
    Monthly,
    Quarterly,
    OneTime,
}

impl From<ScheduleArg> for Schedule {
    fn from(arg: ScheduleArg) -> Self {
        match arg {
            ScheduleArg::Monthly => Schedule::Monthly,
            ScheduleArg::Quarterly => Schedule::Quarterly,
            ScheduleArg::OneTime => Schedule::OneTime,
        }
    }
}

/// Project the future value of a systematic investment plan
#[derive(Debug, Parser)]
#[command(name = "sip_calculator", version)]
struct Args {
    /// Contribution amount per period (lump sum for one-time)
    #[arg(long, default_value_t = 2000.0)]
    amount: f64,

    /// Investment period in years
    #[arg(long, default_value_t = 4)]
    years: u32,

    /// Expected annual return rate in percent
    #[arg(long, default_value_t = 12.0)]
    rate: f64,

    /// Reduce the rate by 5 percentage points for inflation
    #[arg(long)]
    adjust_inflation: bool,

    /// Contribution schedule
    #[arg(long, value_enum, default_value_t = ScheduleArg::Monthly)]
    schedule: ScheduleArg,

    /// First contribution date (defaults to today)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Path for the growth series CSV
    #[arg(long, default_value = "sip_projection.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let plan = Plan::new(
        args.amount,
        args.years,
        args.rate,
        args.adjust_inflation,
        args.schedule.into(),
    )
    .context("invalid plan input")?;

    let start = args.start_date.unwrap_or_else(|| Local::now().date_naive());

    let engine = ProjectionEngine::with_defaults();
    let result = engine.project(&plan);
    let series = engine.growth_series(&plan, start);

    println!("SIP Calculator v0.1.0");
    println!("=====================\n");

    println!("Plan: {} for {} years at {}%{}", plan.schedule.as_str(), plan.years,
        plan.annual_rate_pct,
        if plan.adjust_for_inflation { " (inflation-adjusted)" } else { "" });
    println!("  Effective Rate:   {:.2}%", engine.effective_annual_rate_pct(&plan));
    println!("  Total Investment: {:>14.2}", result.total_invested);
    println!("  Expected Returns: {:>14.2}", result.estimated_returns());
    println!("  Total Value:      {:>14.2}", result.future_value);
    println!();

    // Print the first year of the series to console
    println!("Growth Series ({} periods):", series.len());
    println!("{:>7} {:>12} {:>16} {:>16}", "Period", "Date", "Invested", "Value");
    println!("{}", "-".repeat(55));
    let preview = plan.schedule.periods_per_year() as usize;
    for point in series.points.iter().take(preview) {
        println!("{:>7} {:>12} {:>16.2} {:>16.2}",
            point.period_index,
            point.date,
            point.cumulative_invested,
            point.projected_value,
        );
    }
    if series.len() > preview {
        println!("... ({} more periods)", series.len() - preview);
    }

    // Write the full series to CSV
    let mut file = File::create(&args.output)
        .with_context(|| format!("unable to create {}", args.output.display()))?;
    writeln!(file, "Period,Date,CumulativeInvested,ProjectedValue")?;
    for point in &series.points {
        writeln!(file, "{},{},{:.2},{:.2}",
            point.period_index,
            point.date,
            point.cumulative_invested,
            point.projected_value,
        )?;
    }
    println!("\nFull series written to: {}", args.output.display());

    // Yearly breakdown for the bar chart
    println!("\nYearly Breakdown:");
    println!("{:>5} {:>16} {:>16}", "Year", "Invested", "Value");
    println!("{}", "-".repeat(40));
    for row in series.yearly_breakdown() {
        println!("{:>5} {:>16.2} {:>16.2}", row.year, row.cumulative_invested, row.projected_value);
    }

    Ok(())
}
