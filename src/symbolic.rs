#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module defining the Boolean expression tree, canonical rendering, substitution,
/// evaluation and structural validation
///
/// Variables, constants, negation and the n-ary connectives are all variants of the
/// Expr enum, and every structural comparison in the crate goes through the canonical
/// render of a node.
///# Example
/// ```
/// use RustedLogicThe::symbolic::boolean_engine::Expr;
/// let a = Expr::variable("A");
/// let b = Expr::variable("B");
/// let formula = Expr::not(a & b);
/// println!("formula: {}", formula);
/// assert_eq!(formula.render(), "~((A · B))");
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod boolean_engine;
///____________________________________________________________________________________________________________________________
/// a module implementing the local reduction engine: one algebraic rewrite per node
/// position, iterated to a render fixed point
///
/// The binary rule set (identity, annihilator, idempotence, complement law, absorption)
/// is shared with the exhaustive generator in boolean_possibilities.
///# Example
/// ```
/// use RustedLogicThe::symbolic::boolean_engine::Expr;
/// let a = Expr::variable("A");
/// let b = Expr::variable("B");
/// let simplified = Expr::not(a & b).simplify();
/// assert_eq!(simplified.render(), "(~(A) + ~(B))");
/// ```
pub mod boolean_simplify;
/// a module generating the set of one-step rewritings of a node instead of committing
/// to a single one, with a cost heuristic to pick the preferred candidate
///# Example
/// ```
/// use RustedLogicThe::symbolic::boolean_engine::Expr;
/// let a = Expr::variable("A");
/// let candidates = Expr::Or(vec![a.clone(), a.complement()]).simplify_possibilities();
/// assert_eq!(candidates, vec![Expr::Const(true)]);
/// ```
pub mod boolean_possibilities;
/// a module with the simplification driver: strategy selection, pass accounting,
/// logging and calculation statistics
///# Example
/// ```
/// use RustedLogicThe::symbolic::boolean_driver::{BoolSimplifier, SimplifyMethod};
/// use RustedLogicThe::symbolic::boolean_engine::Expr;
/// let formula = Expr::not(Expr::variable("A") & Expr::variable("B"));
/// let mut solver_instance = BoolSimplifier::new();
/// solver_instance.set_expression(formula);
/// solver_instance.set_solver_params(Some("off".to_string()), None, None);
/// let result = solver_instance.solve();
/// assert_eq!(result.unwrap().render(), "(~(A) + ~(B))");
/// ```
pub mod boolean_driver;
mod boolean_simplify_tests;
