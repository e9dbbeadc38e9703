//! cierre-runner: headless batch runner for the closing report.
//!
//! Usage:
//!   cierre-runner --input sac_octubre1.xlsx --roster dotacion-bbdd.xlsx --output cierre.xlsx
//!   cierre-runner --config report.json

use anyhow::{bail, Result};
use cierre_core::{config::ReportConfig, pipeline};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_arg(&args, "--config") {
        Some(path) => ReportConfig::load(&PathBuf::from(path))?,
        None => {
            let (Some(input), Some(roster), Some(output)) = (
                parse_arg(&args, "--input"),
                parse_arg(&args, "--roster"),
                parse_arg(&args, "--output"),
            ) else {
                bail!(
                    "usage: cierre-runner --input <activity.xlsx> --roster <roster.xlsx> \
                     --output <report.xlsx>  (or --config <report.json>)"
                );
            };
            ReportConfig {
                activity_file: PathBuf::from(input),
                roster_file: PathBuf::from(roster),
                output_file: PathBuf::from(output),
            }
        }
    };

    println!("Cierre — closing report runner");
    println!("  activity: {}", config.activity_file.display());
    println!("  roster:   {}", config.roster_file.display());
    println!("  output:   {}", config.output_file.display());
    println!();

    let summary = pipeline::run(&config)?;

    println!("=== RUN SUMMARY ===");
    println!("  activity rows:       {}", summary.activity_rows);
    println!("  roster entries:      {}", summary.roster_rows);
    println!("  agent-days resolved: {}", summary.agent_days);
    println!("  agents (summary):    {}", summary.category_agents);
    println!("  agents (minutes):    {}", summary.minutes_agents);
    println!();
    println!("report written to {}", config.output_file.display());

    Ok(())
}

fn parse_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
