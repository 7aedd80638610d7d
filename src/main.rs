use anyhow::{bail, Result};
use clap::Parser;
use tabled::{settings::Style, Table, Tabled};

use pacecast::analysis::{run_scenario, run_scenario_with_curve};
use pacecast::config::constants;
use pacecast::{
    builtin_curve, load_curve_file, load_dataset, AnalysisCache, CategoryWeights, Cli,
    CohortSelection, DataError, ForecastResult, ScenarioInput,
};

#[derive(Tabled)]
struct KpiRow {
    metric: &'static str,
    value: String,
}

#[derive(Tabled)]
struct WeightRow {
    label: String,
    weight: String,
}

fn main() -> Result<()> {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Warn, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .filter(Some("pacecast"), my_code_level)
        .init();

    let args = Cli::parse();

    let Some(cohort) = CohortSelection::parse(&args.cohort) else {
        bail!(
            "unrecognized cohort '{}'; expected all, short, medium or long",
            args.cohort
        );
    };

    let input = ScenarioInput {
        day: args.day,
        transactions: args.transactions,
        avg_tickets_per_txn: args.avg_tickets,
        tier: args.tier.clone(),
        giveaway: args.giveaway.clone(),
        day_of_week: args.day_of_week.clone(),
        cohort,
    };

    let (result, weights) = evaluate(&args, &input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&input, &result, &weights);
    }
    Ok(())
}

/// Runs the scenario against the best benchmark available: dataset curves
/// first, then the precomputed curve file, then the builtin curve. Data
/// errors degrade to the next source instead of exiting.
fn evaluate(args: &Cli, input: &ScenarioInput) -> Result<(ForecastResult, CategoryWeights)> {
    match load_dataset(&args.input, &constants::columns::DEFAULT) {
        Ok(dataset) => {
            log::info!(
                "loaded {} rows across {} events from {}",
                dataset.len(),
                dataset.events().len(),
                args.input.display()
            );
            let mut cache = AnalysisCache::new();
            let (curves, weights) = cache.get_or_build(&dataset, &constants::weights::DEFAULT);

            match run_scenario(input, weights, curves) {
                Ok(result) => Ok((result, weights.clone())),
                Err(DataError::EmptyCohort(cohort)) => {
                    log::warn!("no pacing data for cohort {cohort}; broadening to All Games");
                    let broadened = ScenarioInput {
                        cohort: CohortSelection::AllGames,
                        ..input.clone()
                    };
                    let result = run_scenario(&broadened, weights, curves)?;
                    Ok((result, weights.clone()))
                }
                Err(e) => Err(e.into()),
            }
        }
        Err(e) => {
            log::warn!("could not use {}: {e}; falling back", args.input.display());
            let curve = match &args.curve_file {
                Some(path) => load_curve_file(path).unwrap_or_else(|e| {
                    log::warn!(
                        "curve file {} unusable: {e}; using builtin curve",
                        path.display()
                    );
                    builtin_curve()
                }),
                None => builtin_curve(),
            };
            let weights = CategoryWeights::neutral();
            let result = run_scenario_with_curve(input, &weights, &curve, 0);
            Ok((result, weights))
        }
    }
}

fn print_report(input: &ScenarioInput, result: &ForecastResult, weights: &CategoryWeights) {
    println!("\nTicket Sales - Forecast & Pacing");
    println!("Scenario: {} | day {} | {} txns x {:.1} tickets | {} / {} / {}",
        input.cohort,
        input.day,
        input.transactions,
        input.avg_tickets_per_txn,
        input.tier,
        input.giveaway,
        input.day_of_week,
    );

    let kpis = vec![
        KpiRow {
            metric: "Goal (tickets)",
            value: format!("{:.0}", result.goal_tickets),
        },
        KpiRow {
            metric: "Forecast",
            value: format!("{:.0}", result.forecast_tickets),
        },
        KpiRow {
            metric: "Gap to goal",
            value: format!("{:.0}", result.gap_to_goal),
        },
        KpiRow {
            metric: "Progress",
            value: format!("{:.1}%", result.progress_pct),
        },
        KpiRow {
            metric: "Momentum",
            value: format!("{:.3}", result.momentum.value()),
        },
        KpiRow {
            metric: "Band at day",
            value: format!(
                "P25 {:.3} | median {:.3} | P75 {:.3}",
                result.p25_at_day, result.pace_median, result.p75_at_day
            ),
        },
        KpiRow {
            metric: "Status",
            value: result.status.to_string(),
        },
    ];
    let mut table = Table::new(kpis);
    table.with(Style::sharp());
    println!("{table}");

    if result.low_sample {
        println!(
            "note: benchmark backed by only {} rows; treat as low-confidence",
            result.sample_rows
        );
    }

    print_weight_table("Tier weights", &weights.tier);
    print_weight_table("Giveaway weights", &weights.giveaway);
    print_weight_table("Day-of-week weights", &weights.day_of_week);
    print_weight_table("Theme weights", &weights.theme);
}

fn print_weight_table(
    title: &str,
    weights: &std::collections::BTreeMap<String, pacecast::config::Weight>,
) {
    println!("\n{title}");
    let rows: Vec<WeightRow> = weights
        .iter()
        .map(|(label, w)| WeightRow {
            label: label.clone(),
            weight: w.to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{table}");
}
