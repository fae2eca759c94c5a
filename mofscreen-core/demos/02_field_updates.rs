//! Field Update Example
//!
//! Shows the reactive update contract: every committed field edit
//! synchronously recomputes the snapshot, and text that does not parse as
//! a finite number stores 0.0 instead of failing or keeping a stale value.
//!
//! ## What You'll Learn
//!
//! - Updating fields from user-entered text
//! - The parse-failure-to-zero policy
//! - Observing recomputations with a subscribed callback
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_field_updates
//! ```

use mofscreen_core::{InputField, Screener, Snapshot};

fn report(snapshot: &Snapshot) {
    println!(
        "    -> recomputed: wug={:.3} wt%, wuv={:.3} g/L, overall {}",
        snapshot.uptake.gravimetric,
        snapshot.uptake.volumetric,
        if snapshot.verdict.overall() { "PASS" } else { "FAIL" }
    );
}

fn main() {
    println!("MofScreen Field Update Example");
    println!("==============================\n");

    let mut screener = Screener::default();
    screener.subscribe(report).expect("observer slot available");

    let edits = [
        (InputField::Gsa, "4200", "a high-surface-area framework"),
        (InputField::Pv, "1.6", "more pore volume"),
        (InputField::Density, "0.55", "a lighter framework"),
        (InputField::Vf, "not-a-number", "a typo: parses to 0.0"),
        (InputField::Vf, "0.85", "fixing the typo"),
    ];

    for (field, raw, why) in &edits {
        println!("Set {} = {:?} ({})", field.name(), raw, why);
        screener.set_field(*field, raw);
        println!("    {} is now {}", field.name(), screener.inputs().get(*field));
    }

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- One committed edit triggers exactly one recomputation");
    println!("- Bad text zeroes the field; the other six are untouched");
    println!("- The screen never errors out: there is always a result to show");
}
