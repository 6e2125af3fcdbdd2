//! Sortviz quickstart: a complete, minimal animation from scratch.
//!
//! Demonstrates:
//!   1. Implementing a `Renderer` (plain terminal output)
//!   2. Building a `ControllerConfig` and `AnimationController`
//!   3. Running an algorithm and reading the statistics
//!   4. Resetting to the pre-run snapshot and running a second algorithm
//!
//! Run with:
//!   cargo run --example quickstart

use sortviz_core::{AlgorithmKind, Marker, RenderError, Renderer, Statistics};
use sortviz_engine::{AnimationController, ControllerConfig};

// ─── Renderer: one line of numbers per frame ────────────────────
//
// A real frontend would draw proportional bars and style the marked
// positions; printing the raw values keeps the example dependency-free.

struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn draw(&mut self, values: &[u32]) -> Result<(), RenderError> {
        let mut line = String::new();
        for value in values {
            line.push_str(&format!("{value:>4}"));
        }
        println!("  {line}");
        Ok(())
    }

    fn mark(&mut self, index: usize, marker: Marker) -> Result<(), RenderError> {
        if marker == Marker::Sorted {
            println!("  bar {index} is {marker}");
        }
        Ok(())
    }

    fn unmark(&mut self, _index: usize, _marker: Marker) -> Result<(), RenderError> {
        Ok(())
    }

    fn show_statistics(&mut self, _stats: &Statistics) -> Result<(), RenderError> {
        // The final statistics are printed from the run report instead.
        Ok(())
    }

    fn run_started(&mut self) -> Result<(), RenderError> {
        println!("-- run started --");
        Ok(())
    }

    fn run_finished(&mut self) -> Result<(), RenderError> {
        println!("-- run finished --");
        Ok(())
    }
}

// ─── Main ───────────────────────────────────────────────────────

fn main() {
    let config = ControllerConfig {
        size: 12,
        speed: 10,
        seed: 2024,
    };
    let mut controller = AnimationController::new(config, Box::new(TerminalRenderer));
    println!("initial sequence: {:?}", controller.sequence());

    let report = controller.run(AlgorithmKind::Quick);
    println!(
        "quick sort: {} comparisons, {} swaps in {:?}",
        report.statistics.comparisons, report.statistics.swaps, report.statistics.elapsed
    );

    // Back to the pre-run values, then sort them a different way.
    controller.reset();
    println!("after reset: {:?}", controller.sequence());

    let report = controller.run_named("heap");
    println!(
        "heap sort: {} comparisons, {} swaps in {:?}",
        report.statistics.comparisons, report.statistics.swaps, report.statistics.elapsed
    );
    println!("final sequence: {:?}", controller.sequence());
}
