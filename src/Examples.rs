//! examples of usage of RustedLogicThe
/// Boolean simplification examples
pub mod boolean_examples;
