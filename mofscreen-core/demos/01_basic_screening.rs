//! Basic Screening Example
//!
//! The simplest use of MofScreen: evaluate the reference material and
//! read back predictions and the DOE verdict.
//!
//! ## What You'll Learn
//!
//! - Creating a screener pre-loaded with the reference inputs
//! - Reading the derived snapshot (predictions + verdict)
//! - How the overall verdict combines the two metrics
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_screening
//! ```

use mofscreen_core::{InputField, Screener, DOE_TARGETS};

fn main() {
    println!("MofScreen Basic Screening Example");
    println!("=================================\n");

    // The default screener starts from the reference material:
    // gsa=3000 m²/g, vsa=1500 m²/cm³, vf=0.5, pv=1.2 cm³/g,
    // density=0.8 g/cm³, lcd=12 Å, pld=8 Å
    let screener = Screener::default();

    println!("Input vector:");
    for field in InputField::ALL {
        println!(
            "  {:<26} {:>8} {}",
            field.label(),
            screener.inputs().get(field),
            field.unit()
        );
    }
    println!();

    let snapshot = screener.snapshot();
    println!("Predicted working uptake:");
    println!(
        "  Gravimetric: {:.2} wt%  (target >= {} wt%)  {}",
        snapshot.uptake.gravimetric,
        DOE_TARGETS.gravimetric,
        if snapshot.verdict.gravimetric { "PASS" } else { "FAIL" }
    );
    println!(
        "  Volumetric:  {:.2} g/L  (target >= {} g/L)  {}",
        snapshot.uptake.volumetric,
        DOE_TARGETS.volumetric,
        if snapshot.verdict.volumetric { "PASS" } else { "FAIL" }
    );
    println!();

    if snapshot.verdict.overall() {
        println!("Verdict: Promising candidate - meets both DOE targets");
    } else {
        println!("Verdict: Does not meet the DOE targets");
    }

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- Both metrics must pass for an overall pass");
    println!("- Comparison is inclusive: a value exactly on the target passes");
    println!("- The snapshot is derived wholesale from the current inputs");
}
