//! Bipartite Match - Demo Binary
//!
//! Solves a small fixed instance and prints the assignment.
//! Set `RUST_LOG=debug` to see each augmentation.

use bipartite_match::{MatchingEngine, MatchingError};

fn main() -> Result<(), MatchingError> {
    env_logger::init();

    println!("===========================================");
    println!("  Minimum-Weight Bipartite Matching");
    println!("===========================================");
    println!();

    let rows = [
        [3.0, 5.0, 6.0],
        [5.0, 8.0, 6.0],
        [84.0, 2.0, 10.0],
    ];

    println!("Cost matrix:");
    for row in &rows {
        println!("  {:?}", row);
    }
    println!();

    let mut engine = MatchingEngine::from_rows(&rows)?;
    let solution = engine.find_match()?;

    println!("Assignment:");
    for (left, &right) in solution.iter().enumerate() {
        println!("  left {} => right {} ({})", left, right, engine.matrix().cost(left, right));
    }
    println!();

    let receipt = engine.receipt()?;
    println!("Total cost:      {}", engine.total_cost()?);
    println!("Augmentations:   {}", receipt.augmentations);
    println!("Assignment root: {}", receipt.assignment_root_hex());

    Ok(())
}
