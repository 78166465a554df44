#![allow(non_snake_case)]
pub mod Examples;
pub mod Utils;
pub mod symbolic;

use crate::Examples::boolean_examples::boolean_examples;

fn main() {
    // 0 - construction and canonical rendering
    // 1 - De Morgan step by step
    // 2 - fixed-point simplification and evaluation
    // 3 - possibility exploration
    // 4 - driver with logging and statistics
    // 5 - truth tables and equivalence
    let example = 0;
    boolean_examples(example);
}
