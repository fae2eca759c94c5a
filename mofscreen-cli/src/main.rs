//! MofScreen terminal front-end
//!
//! Thin presentation layer over `mofscreen-core`: applies `field=value`
//! overrides to the reference material, prints the screening report, and
//! optionally keeps re-screening from stdin. The target-bar toggle and
//! output format live here - the core emits the same dataset either way.

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use mofscreen_core::{ChartData, InputField, Screener};

const BAR_WIDTH: usize = 40;

/// Screen a porous framework against the DOE storage targets.
///
/// Starts from the reference material (gsa=3000, vsa=1500, vf=0.5, pv=1.2,
/// density=0.8, lcd=12, pld=8) and applies any FIELD=VALUE overrides.
#[derive(Parser, Debug)]
#[command(name = "mofscreen", version, about)]
struct Args {
    /// Input overrides as name=value (names: gsa, vsa, vf, pv, density, lcd, pld)
    #[arg(value_name = "FIELD=VALUE")]
    overrides: Vec<String>,

    /// Hide the target bars in the chart
    #[arg(long)]
    hide_targets: bool,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,

    /// Keep reading `field value` lines from stdin, re-screening per line
    #[arg(long)]
    watch: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut screener = Screener::default();

    for raw in &args.overrides {
        let Some((name, value)) = raw.split_once('=') else {
            eprintln!("error: expected FIELD=VALUE, got {raw:?}");
            return ExitCode::from(2);
        };
        match name.parse::<InputField>() {
            Ok(field) => screener.set_field(field, value),
            Err(_) => {
                eprintln!(
                    "error: unknown field {name:?} (expected one of: gsa, vsa, vf, pv, density, lcd, pld)"
                );
                return ExitCode::from(2);
            }
        }
    }

    render(&screener, &args);

    if args.watch {
        watch(&mut screener, &args);
    }

    ExitCode::SUCCESS
}

fn watch(screener: &mut Screener, args: &Args) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let mut parts = line.split_whitespace();
        let (Some(name), Some(value)) = (parts.next(), parts.next()) else {
            eprintln!("expected: <field> <value>");
            continue;
        };
        match name.parse::<InputField>() {
            Ok(field) => {
                screener.set_field(field, value);
                render(screener, args);
            }
            Err(_) => eprintln!("unknown field {name:?}"),
        }
    }
}

fn render(screener: &Screener, args: &Args) {
    let snapshot = screener.snapshot();
    let chart = screener.chart(!args.hide_targets);

    if args.json {
        let report = serde_json::json!({
            "inputs": snapshot.inputs,
            "uptake": snapshot.uptake,
            "verdict": {
                "gravimetric": snapshot.verdict.gravimetric,
                "volumetric": snapshot.verdict.volumetric,
                "overall": snapshot.verdict.overall(),
            },
            "chart": chart,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serializes")
        );
        return;
    }

    println!("MofScreen Screening Report");
    println!("==========================\n");

    println!("Inputs:");
    for field in InputField::ALL {
        println!(
            "  {:<26} {:>10} {}",
            field.label(),
            screener.inputs().get(field),
            field.unit()
        );
    }
    println!();

    let targets = screener.targets();
    println!("Working uptake vs DOE targets:");
    println!(
        "  Gravimetric  {:>8.2} wt%   target >= {:<6} {}",
        snapshot.uptake.gravimetric,
        targets.gravimetric,
        pass_mark(snapshot.verdict.gravimetric)
    );
    println!(
        "  Volumetric   {:>8.2} g/L   target >= {:<6} {}",
        snapshot.uptake.volumetric,
        targets.volumetric,
        pass_mark(snapshot.verdict.volumetric)
    );
    println!();

    if snapshot.verdict.overall() {
        println!("Verdict: Promising candidate");
    } else {
        println!("Verdict: Does not meet targets");
    }
    println!();

    render_chart(&chart);
    println!();
}

fn pass_mark(passing: bool) -> &'static str {
    if passing {
        "PASS"
    } else {
        "FAIL"
    }
}

fn render_chart(chart: &ChartData) {
    // Scale both bars against the tallest of value and target so the
    // chart stays comparable across metrics.
    let mut scale = 0.0f64;
    for datum in &chart.series {
        scale = scale.max(datum.value).max(datum.target);
    }
    if scale <= 0.0 {
        scale = 1.0;
    }

    for datum in &chart.series {
        let filled = ((datum.value / scale) * BAR_WIDTH as f64).round() as usize;
        println!(
            "  {:<18} |{:<width$}| {:>7.2}  {}",
            datum.name,
            "#".repeat(filled.min(BAR_WIDTH)),
            datum.value,
            pass_mark(datum.passing),
            width = BAR_WIDTH
        );
        if chart.show_targets {
            let mark = ((datum.target / scale) * BAR_WIDTH as f64).round() as usize;
            println!(
                "  {:<18} |{:<width$}| {:>7.2}  target",
                "",
                "-".repeat(mark.min(BAR_WIDTH)),
                datum.target,
                width = BAR_WIDTH
            );
        }
    }
}
