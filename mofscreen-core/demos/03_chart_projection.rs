//! Chart Projection Example
//!
//! Projects a screening snapshot into the fixed two-bar chart dataset and
//! renders it as text bars. Demonstrates the display-only clamp: a
//! negative prediction draws as an empty bar but still fails the screen.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_chart_projection
//! ```

use mofscreen_core::{ChartData, InputField, Screener};

const BAR_WIDTH: usize = 40;

fn render(chart: &ChartData) {
    // Scale both bars against the tallest of value and target.
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
            if datum.passing { "PASS" } else { "FAIL" },
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

fn main() {
    println!("MofScreen Chart Projection Example");
    println!("==================================\n");

    let mut screener = Screener::default();

    println!("Reference material, targets shown:");
    render(&screener.chart(true));
    println!();

    println!("Reference material, targets hidden (same dataset):");
    render(&screener.chart(false));
    println!();

    // Collapse the material until predictions go negative.
    for field in InputField::ALL {
        screener.set_value(field, 0.0);
    }
    println!("Degenerate all-zero material (negative predictions clamp to 0):");
    render(&screener.chart(true));

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- The dataset always has two bars: gravimetric, then volumetric");
    println!("- Targets are always in the dataset; the toggle is for renderers");
    println!("- The clamp is display-only: pass/fail judged the raw value");
}
