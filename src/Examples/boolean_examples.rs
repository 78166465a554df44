// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::Utils::truth_table::{TruthTable, equivalent};
use crate::symbolic::boolean_driver::{BoolSimplifier, SimplifyMethod};
use crate::symbolic::boolean_engine::Expr;
use rand::Rng;

#[allow(dead_code)]
pub fn boolean_examples(example: usize) {
    match example {
        0 => {
            // CONSTRUCTION AND CANONICAL RENDERING
            // create variables from a comma-separated string
            let vars = Expr::Symbols("A, B, C");
            let (a, b, c) = (vars[0].clone(), vars[1].clone(), vars[2].clone());
            // build a formula from explicit constructors
            let formula = Expr::Or(vec![a.clone() & b.clone(), Expr::not(c.clone())]);
            println!("formula: {}", formula);
            println!("canonical render: {}", formula.render());
            println!("simple key: {}", formula.simple_key());
            println!("variables: {:?}", formula.extract_variables());
            println!(
                "nodes: {}, depth: {} \n",
                formula.count_nodes(),
                formula.depth()
            );
            // operator overloading builds the same trees
            let overloaded = (a & b) | !c;
            println!("overloaded: {}", overloaded.render());
            // the negation flag and the Not wrapper render identically
            let flagged = Expr::negated_variable("A");
            let wrapped = Expr::not(Expr::variable("A"));
            println!(
                "flag form {} renders like wrapper form {}",
                flagged.render(),
                wrapped.render()
            );
        }
        1 => {
            // DE MORGAN STEP BY STEP
            let a = Expr::variable("A");
            let b = Expr::variable("B");
            let formula = Expr::not(a & b);
            println!("start: {}", formula.render());
            // one local pass pushes the negation inward
            let step = formula.reduce();
            println!("after one pass: {}", step.render());
            // a second pass changes nothing, the fixed point is reached
            let settled = step.reduce();
            println!("after another pass: {}", settled.render());
            let disjunction = Expr::not(Expr::variable("A") | Expr::variable("B"));
            println!(
                "{} reduces to {}",
                disjunction.render(),
                disjunction.reduce().render()
            );
        }
        2 => {
            // FIXED-POINT SIMPLIFICATION AND EVALUATION
            let a = Expr::variable("A");
            let b = Expr::variable("B");
            // exclusive or is derived into its defining expansion
            let parity = a.clone() ^ b.clone();
            println!("{} simplifies to {}", parity.render(), parity.simplify());
            // an exclusive or of identical operands collapses to 0
            let collapsed = (a.clone() ^ a.clone()).simplify();
            println!("A ⊕ A simplifies to {}", collapsed);
            // substitute and evaluate
            let fixed = (a.clone() & b.clone()).set_variable("A", true);
            println!("(A · B) with A = 1 becomes {}", fixed.render());
            let assignment =
                std::collections::HashMap::from([("A".to_string(), true), ("B".to_string(), false)]);
            let value = (a | b).eval(&assignment).unwrap();
            println!("(A + B) at A = 1, B = 0 evaluates to {}", value);
        }
        3 => {
            // POSSIBILITY EXPLORATION
            let a = Expr::variable("A");
            let b = Expr::variable("B");
            let c = Expr::variable("C");
            let formula = Expr::Or(vec![a.clone(), b & c]);
            let candidates = formula.simplify_possibilities();
            println!("candidates of {}:", formula.render());
            for candidate in &candidates {
                println!("   {}", candidate.render());
            }
            let best = Expr::pick_best(&candidates).unwrap();
            println!("preferred candidate: {}", best.render());
            // a complementary pair short-circuits the whole disjunction
            let wide = Expr::Or(vec![a.clone(), Expr::variable("B"), a.complement()]);
            println!(
                "{} collapses to {:?}",
                wide.render(),
                wide.simplify_possibilities()
            );
        }
        4 => {
            // DRIVER WITH LOGGING AND STATISTICS
            let a = Expr::variable("A");
            let b = Expr::variable("B");
            let c = Expr::variable("C");
            let formula = Expr::not(Expr::And(vec![a, b, c]));
            let mut solver_instance = BoolSimplifier::new();
            solver_instance.set_expression(formula);
            solver_instance.set_solver_params(
                Some("info".to_string()),
                Some(SimplifyMethod::LocalReduction),
                Some(32),
            );
            let result = solver_instance.solve();
            println!("simplified: {}", result.unwrap().render());
            // the same run with the exhaustive strategy
            let mut exhaustive_instance = BoolSimplifier::new();
            exhaustive_instance.set_expression(Expr::Or(vec![
                Expr::variable("A"),
                Expr::variable("B"),
                Expr::negated_variable("A"),
            ]));
            exhaustive_instance.set_solver_params(
                Some("off".to_string()),
                Some(SimplifyMethod::ExhaustiveSearch),
                None,
            );
            let result = exhaustive_instance.solve();
            println!("exhaustive result: {}", result.unwrap().render());
        }
        5 => {
            // TRUTH TABLES AND EQUIVALENCE
            let a = Expr::variable("A");
            let b = Expr::variable("B");
            let formula = Expr::not(a.clone() & b.clone());
            let table = TruthTable::build(&formula).unwrap();
            println!("{}", table.pretty_table());
            let de_morgan_form = a.complement() | b.complement();
            println!(
                "{} equivalent to {}: {}",
                formula.render(),
                de_morgan_form.render(),
                equivalent(&formula, &de_morgan_form).unwrap()
            );
            // simplification never changes the truth table
            let random_tree = random_expression(3);
            let simplified = random_tree.simplify();
            println!(
                "random tree {} simplifies to {} (equivalent: {})",
                random_tree.render(),
                simplified.render(),
                equivalent(&random_tree, &simplified).unwrap()
            );
        }
        _ => {
            println!("there is no such example");
        }
    }
}

/// named formulas exercised by the demos and the benchmarks
pub fn demo_formulas() -> Vec<(String, Expr)> {
    let a = Expr::variable("A");
    let b = Expr::variable("B");
    let c = Expr::variable("C");
    vec![
        ("de_morgan".to_string(), Expr::not(a.clone() & b.clone())),
        (
            "absorption".to_string(),
            Expr::Or(vec![a.clone(), a.clone() & b.clone()]),
        ),
        (
            "complement".to_string(),
            Expr::Or(vec![a.clone(), b.clone(), a.complement()]),
        ),
        (
            "distribution".to_string(),
            Expr::Or(vec![a.clone(), b.clone() & c.clone()]),
        ),
        ("xor_pair".to_string(), a.clone() ^ b.clone()),
        (
            "double_negation".to_string(),
            Expr::not(Expr::not(a | c)),
        ),
    ]
}

/// Generates a random expression tree up to the given depth, drawing variables
/// from a fixed four-name pool. Used for stress testing and benchmarks.
pub fn random_expression(max_depth: usize) -> Expr {
    let mut rng = rand::rng();
    random_node(&mut rng, max_depth)
}

fn random_node(rng: &mut impl Rng, depth: usize) -> Expr {
    const POOL: [&str; 4] = ["A", "B", "C", "D"];
    if depth == 0 || rng.random_bool(0.3) {
        // leaves are mostly variables, occasionally constants
        if rng.random_bool(0.15) {
            return Expr::constant(rng.random_bool(0.5));
        }
        let name = POOL[rng.random_range(0..POOL.len())];
        if rng.random_bool(0.25) {
            return Expr::negated_variable(name);
        }
        return Expr::variable(name);
    }
    match rng.random_range(0..4) {
        0 => Expr::not(random_node(rng, depth - 1)),
        1 => {
            let arity = rng.random_range(2..=3);
            Expr::And((0..arity).map(|_| random_node(rng, depth - 1)).collect())
        }
        2 => {
            let arity = rng.random_range(2..=3);
            Expr::Or((0..arity).map(|_| random_node(rng, depth - 1)).collect())
        }
        _ => Expr::xor(random_node(rng, depth - 1), random_node(rng, depth - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_formulas_are_named_and_valid() {
        let formulas = demo_formulas();
        assert!(!formulas.is_empty());
        for (name, formula) in &formulas {
            assert!(!name.is_empty());
            assert!(formula.validate().is_ok());
        }
    }

    #[test]
    fn test_random_expression_respects_depth_cap() {
        for _ in 0..50 {
            let tree = random_expression(3);
            assert!(tree.depth() <= 4);
            assert!(tree.validate().is_ok());
        }
    }
}
