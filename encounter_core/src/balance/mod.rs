//! Balance system - Side aggregation and difficulty classification

mod evaluator;
mod totals;
mod verdict;

pub use evaluator::{evaluate, evaluate_totals, evaluate_with};
pub use totals::SideTotals;
pub use verdict::{Difficulty, DifficultyVerdict};
