//! # Boolean Driver Module
//!
//! High-level driver around the two simplification strategies: repeated local
//! reduction and exhaustive possibility search. The driver owns the fixed-point
//! loop, the pass cap, logging setup and the run statistics, so a caller only
//! configures an instance and asks for the simplified formula.
//!
//! ## Usage Pattern
//! 1. `BoolSimplifier::new()` - create with defaults
//! 2. `set_expression()` - the formula to simplify
//! 3. `set_solver_params()` - loglevel, strategy, pass cap (all optional)
//! 4. `solve()` - run with logging, or `main_loop()` for a bare run
//! 5. `get_result()` - the simplified expression

use crate::symbolic::boolean_engine::Expr;
use chrono::Local;
use log::{info, warn};
use simplelog::LevelFilter;
use simplelog::*;
use std::collections::HashMap;
use std::fs::File;
use std::time::Instant;
use strum_macros::{Display, EnumIter};
use tabled::{builder::Builder, settings::Style};

/// Strategy used by the driver to move a formula towards its fixed point.
#[derive(Debug, Clone, PartialEq, Display, EnumIter)]
pub enum SimplifyMethod {
    /// one local rewrite per node position and pass, recursing into operands
    LocalReduction,
    /// enumerate every applicable rewriting per pass, keep the best candidate
    ExhaustiveSearch,
}

/// Driver for Boolean formula simplification.
///
/// Both strategies iterate until the canonical rendering stops changing or the
/// pass cap is reached; every intermediate formula is equivalent to the input,
/// so the result is valid even when the cap cuts the run short. The exhaustive
/// strategy may alternate between equal-cost rewritings of the same formula;
/// the cap bounds that walk and the last candidate is returned.
///
/// ### Example
/// ```
/// use RustedLogicThe::symbolic::boolean_driver::{BoolSimplifier, SimplifyMethod};
/// use RustedLogicThe::symbolic::boolean_engine::Expr;
///
/// let a = Expr::variable("A");
/// let b = Expr::variable("B");
/// let mut solver_instance = BoolSimplifier::new();
/// solver_instance.set_expression(Expr::not(a & b));
/// solver_instance.set_solver_params(
///     Some("off".to_string()),
///     Some(SimplifyMethod::LocalReduction),
///     Some(16),
/// );
/// let result = solver_instance.solve().unwrap();
/// assert_eq!(result.render(), "(~(A) + ~(B))");
/// ```
pub struct BoolSimplifier {
    /// formula to simplify
    pub expression: Expr,
    /// chosen simplification strategy
    pub method: SimplifyMethod,
    /// cap on fixed-point passes
    pub max_passes: usize,
    /// pass counter
    pub i: usize,
    /// simplified formula
    pub result: Option<Expr>,
    /// logging level; "off" or "none" disables logging completely
    pub loglevel: Option<String>,
    calc_statistics: HashMap<String, usize>,
}

impl BoolSimplifier {
    pub fn new() -> BoolSimplifier {
        BoolSimplifier {
            expression: Expr::Const(true),
            method: SimplifyMethod::LocalReduction,
            max_passes: Expr::DEFAULT_MAX_PASSES,
            i: 0,
            result: None,
            loglevel: Some("info".to_string()),
            calc_statistics: HashMap::new(),
        }
    }

    /// Sets the formula to simplify; the pass counter and result are reset.
    pub fn set_expression(&mut self, expression: Expr) {
        assert!(
            expression.validate().is_ok(),
            "Expression exceeds the nesting depth limit."
        );
        self.expression = expression;
        self.i = 0;
        self.result = None;
    }

    /// Sets the optional solver parameters, keeping the current value for every
    /// `None` argument.
    pub fn set_solver_params(
        &mut self,
        loglevel: Option<String>,
        method: Option<SimplifyMethod>,
        max_passes: Option<usize>,
    ) {
        self.loglevel = if let Some(level) = loglevel {
            assert!(
                level == "debug"
                    || level == "info"
                    || level == "warn"
                    || level == "error"
                    || level == "off"
                    || level == "none",
                "loglevel must be debug, info, warn, error, off or none"
            );
            Some(level)
        } else {
            self.loglevel.clone()
        };
        self.method = if let Some(method) = method {
            method
        } else {
            self.method.clone()
        };
        self.max_passes = if let Some(max_passes) = max_passes {
            assert!(max_passes > 0, "max_passes must be positive");
            max_passes
        } else {
            self.max_passes
        };
    }

    /////////////////////////////////////////////////////////////////////////////////////////////
    //                FIXED-POINT LOOP
    /////////////////////////////////////////////////////////////////////////////////////////////

    /// Main loop driving the chosen strategy until the rendering stabilizes.
    pub fn main_loop(&mut self) -> Option<Expr> {
        let mut current = self.expression.clone();
        let mut key = current.render();
        self.result = Some(current.clone());
        while self.i < self.max_passes {
            let next = match self.method {
                SimplifyMethod::LocalReduction => current.reduce(),
                SimplifyMethod::ExhaustiveSearch => {
                    let candidates = current.simplify_possibilities();
                    info!(
                        "pass = {}, candidates explored = {}",
                        self.i + 1,
                        candidates.len()
                    );
                    match Expr::pick_best(&candidates) {
                        Some(best) => best,
                        None => break,
                    }
                }
            };
            let next_key = next.render();
            if next_key == key {
                self.result = Some(next.clone());
                return Some(next);
            }
            current = next;
            key = next_key;
            self.i += 1;
            info!("pass = {}, render = {}", self.i, key);
        }
        warn!("Maximum number of passes reached before the render stabilized.");
        self.result = Some(current.clone());
        Some(current)
    }

    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
    //                                       main functions to start the solver and calculate statistics
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

    pub fn solver(&mut self) -> Option<Expr> {
        let nodes_before = self.expression.count_nodes();
        let render_length_before = self.expression.render().len();
        let begin = Instant::now();
        let res = self.main_loop();
        let end = begin.elapsed();
        self.calc_statistics
            .insert("time elapsed, ms".to_string(), end.as_millis() as usize);
        self.calc_statistics.insert("passes".to_string(), self.i);
        self.calc_statistics
            .insert("nodes before".to_string(), nodes_before);
        self.calc_statistics
            .insert("render length before".to_string(), render_length_before);
        if let Some(ref result) = res {
            self.calc_statistics
                .insert("nodes after".to_string(), result.count_nodes());
            self.calc_statistics
                .insert("render length after".to_string(), result.render().len());
        }
        self.calc_statistics();

        self.result = res;
        self.result.clone()
    }

    // wrapper around solver function to implement logging
    pub fn solve(&mut self) -> Option<Expr> {
        let is_logging_disabled = self
            .loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(false);

        if is_logging_disabled {
            self.solver()
        } else {
            let loglevel = self.loglevel.clone();
            let log_option = if let Some(level) = loglevel {
                match level.as_str() {
                    "debug" => LevelFilter::Info,
                    "info" => LevelFilter::Info,
                    "warn" => LevelFilter::Warn,
                    "error" => LevelFilter::Error,
                    _ => panic!("loglevel must be debug, info, warn or error"),
                }
            } else {
                LevelFilter::Info
            };
            println!(" \n \n Program started with loglevel: {}", log_option);
            let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
            let name = format!("log_{}.txt", date_and_time);
            let logger_instance = CombinedLogger::init(vec![
                TermLogger::new(
                    log_option,
                    Config::default(),
                    TerminalMode::Mixed,
                    ColorChoice::Auto,
                ),
                WriteLogger::new(log_option, Config::default(), File::create(name).unwrap()),
            ]);

            match logger_instance {
                Ok(()) => {
                    let res = self.solver();
                    info!(" \n \n Program ended");
                    res
                }
                Err(_) => {
                    let res = self.solver();
                    res
                }
            }
        }
    }

    pub fn get_result(&self) -> Option<Expr> {
        self.result.clone()
    }

    fn calc_statistics(&self) {
        let stats = self.calc_statistics.clone();
        let mut table = Builder::from(stats).build();
        table.with(Style::modern_rounded());
        info!("\n \n CALC STATISTICS \n \n {}", table.to_string());
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                     TESTS
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[test]
fn test_local_reduction_de_morgan() {
    let a = Expr::variable("A");
    let b = Expr::variable("B");
    let mut solver_instance = BoolSimplifier::new();
    solver_instance.set_expression(Expr::not(a & b));
    solver_instance.main_loop();
    let result = solver_instance.get_result().unwrap();
    assert_eq!(result.render(), "(~(A) + ~(B))");
    assert!(solver_instance.i >= 1);
}

#[test]
fn test_exhaustive_search_reaches_constant() {
    let a = Expr::variable("A");
    let b = Expr::variable("B");
    let mut solver_instance = BoolSimplifier::new();
    solver_instance.set_expression(Expr::Or(vec![a.clone(), b, a.complement()]));
    solver_instance.set_solver_params(
        Some("off".to_string()),
        Some(SimplifyMethod::ExhaustiveSearch),
        None,
    );
    let result = solver_instance.solve().unwrap();
    assert_eq!(result, Expr::Const(true));
}

#[test]
fn test_solver_derives_xor() {
    let a = Expr::variable("A");
    let b = Expr::variable("B");
    let mut solver_instance = BoolSimplifier::new();
    solver_instance.set_expression(Expr::xor(a, b));
    solver_instance.set_solver_params(Some("off".to_string()), None, Some(10));
    let result = solver_instance.solve();
    assert!(result.is_some());
    assert_eq!(result.unwrap().render(), "((A · ~(B)) + (~(A) · B))");
}

#[test]
fn test_exhaustive_search_derives_nested_xor() {
    let a = Expr::variable("A");
    let b = Expr::variable("B");
    let c = Expr::variable("C");
    let formula = Expr::Or(vec![Expr::xor(a, b), c]);
    let mut exhaustive_instance = BoolSimplifier::new();
    exhaustive_instance.set_expression(formula.clone());
    exhaustive_instance.set_solver_params(None, Some(SimplifyMethod::ExhaustiveSearch), None);
    exhaustive_instance.main_loop();
    let exhaustive_result = exhaustive_instance.get_result().unwrap();
    let mut local_instance = BoolSimplifier::new();
    local_instance.set_expression(formula);
    local_instance.main_loop();
    let local_result = local_instance.get_result().unwrap();
    assert_eq!(exhaustive_result.render(), "(((A · ~(B)) + (~(A) · B)) + C)");
    assert_eq!(exhaustive_result.render(), local_result.render());
}

#[test]
fn test_fixed_point_input_returns_immediately() {
    let a = Expr::variable("A");
    let b = Expr::variable("B");
    let mut solver_instance = BoolSimplifier::new();
    solver_instance.set_expression(a | b);
    solver_instance.main_loop();
    assert_eq!(solver_instance.i, 0);
    assert_eq!(solver_instance.get_result().unwrap().render(), "(A + B)");
}

#[test]
fn test_method_enum_display_and_iteration() {
    use strum::IntoEnumIterator;
    assert_eq!(SimplifyMethod::LocalReduction.to_string(), "LocalReduction");
    assert_eq!(SimplifyMethod::ExhaustiveSearch.to_string(), "ExhaustiveSearch");
    let methods: Vec<SimplifyMethod> = SimplifyMethod::iter().collect();
    assert_eq!(methods.len(), 2);
}
