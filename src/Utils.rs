//! different utility modules used throughout the project
/// tiny module to enumerate a formula over every assignment of its variables,
/// pretty-print the result and decide semantic equivalence
pub mod truth_table;
