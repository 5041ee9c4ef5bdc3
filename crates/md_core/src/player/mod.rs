pub mod calculator;

pub use calculator::{OverallCalculator, WeightedOverall};
