//! Example selecting the most valuable set of observation windows.
//!
//! Run with: `cargo run --example best_schedule`

use qtty::Second;
use wisched::{
    locate_boundary, MemoizedSolver, SelectionAlgorithm, TabulatedSolver, TieBreak,
    WeightedInterval,
};

fn main() {
    println!("=== Weighted Interval Scheduling Example ===\n");

    let requests = [
        (0.0, 10.0, 4.0, "Data Download"),
        (8.0, 20.0, 9.0, "Image Processing"),
        (12.0, 18.0, 3.0, "Calibration"),
        (21.0, 30.0, 5.0, "Transmission"),
        (19.0, 35.0, 8.0, "Deep Exposure"),
        (36.0, 40.0, 1.0, "Housekeeping"),
    ];

    println!("--- Candidate Intervals ---");
    let mut intervals = Vec::with_capacity(requests.len());
    for (begin, end, weight, name) in requests {
        match WeightedInterval::<Second>::try_from_f64(begin, end, weight) {
            Ok(interval) => {
                println!("{name:<18} {interval}");
                intervals.push(interval);
            }
            Err(e) => println!("Skipping {name}: {e}"),
        }
    }

    println!("\n--- Rejected Input ---");
    if let Err(e) = WeightedInterval::<Second>::try_from_f64(50.0, 45.0, 2.0) {
        println!("(50, 45, 2.0): {e}");
    }

    println!("\n--- Optimal Selection ---");
    let (solution, stats) = TabulatedSolver::default().select_with_stats(&intervals);
    for interval in solution.iter() {
        println!("  {interval}");
    }
    println!("Total weight: {:.1}", solution.total_weight());
    println!(
        "Work: {} sub-problems, {} boundary queries",
        stats.subproblems_evaluated, stats.boundary_queries
    );

    println!("\n--- Strategy Comparison ---");
    let memoized = MemoizedSolver::new(TieBreak::PreferInclude).select(&intervals);
    println!("Memoized solver agrees: {}", memoized == solution);

    let cautious = TabulatedSolver::new(TieBreak::PreferExclude).select(&intervals);
    println!("Prefer-exclude tie-break: {cautious}");

    println!("\n--- Boundary Lookup ---");
    let mut sorted = intervals.clone();
    sorted.sort_by(|a, b| a.end().value().total_cmp(&b.end().value()));
    for reference in &sorted {
        println!(
            "{reference}: {} interval(s) end before it begins",
            locate_boundary(&sorted, reference)
        );
    }
}
