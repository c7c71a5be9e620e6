//! Renders the analysis on standard output.

use std::path::Path;

use crate::dataset::Dataset;
use crate::regression::RegressionResult;

pub fn print_summary(path: &Path, dataset: &Dataset, result: &RegressionResult) {
    println!("Linear regression analysis");
    println!("--------------------------");
    println!("Loaded from: {}", path.display());
    println!("Records: {}", dataset.len());
    println!("Equation: {}", result.equation);
    println!("Slope (a): {:.4}", result.slope);
    println!("Intercept (b): {:.4}", result.intercept);
    println!("R²: {:.4}", result.r_squared);
}

pub fn print_not_loaded() {
    println!("The analysis could not be run because no data was loaded.");
}
