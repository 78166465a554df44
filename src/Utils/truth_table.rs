/*
Truth-table materialization for Boolean expressions. Used to inspect a formula
exhaustively and to decide semantic equivalence of two formulas by comparing
their outputs over every assignment of the united variable set.
*/
use crate::symbolic::boolean_engine::{Expr, ExprError};
use std::collections::HashMap;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Exhaustive enumeration of a formula over all assignments of its variables.
///
/// Row order is fixed: assignments are enumerated as binary numbers with the
/// alphabetically first variable owning the most significant bit, so the last
/// row is the all-true assignment.
pub struct TruthTable {
    /// variable names in alphabetical order, one column each
    pub variables: Vec<String>,
    /// one row per assignment: the input values and the formula output
    pub rows: Vec<(Vec<bool>, bool)>,
    /// canonical rendering of the tabulated formula
    pub formula: String,
}

impl TruthTable {
    /// Cap on tabulated variables; 2^12 rows is the largest table worth printing.
    pub const MAX_VARIABLES: usize = 12;

    /// Materializes the truth table of an expression.
    ///
    /// # Returns
    /// The table, or an error when the formula has more variables than the cap
    pub fn build(expression: &Expr) -> Result<TruthTable, ExprError> {
        let variables = expression.extract_variables();
        if variables.len() > Self::MAX_VARIABLES {
            return Err(ExprError::TooManyVariables {
                found: variables.len(),
                limit: Self::MAX_VARIABLES,
            });
        }
        let combinations = 1usize << variables.len();
        let mut rows: Vec<(Vec<bool>, bool)> = Vec::with_capacity(combinations);
        for mask in 0..combinations {
            let mut assignment: HashMap<String, bool> = HashMap::new();
            let mut inputs: Vec<bool> = Vec::with_capacity(variables.len());
            for (position, variable) in variables.iter().enumerate() {
                // leftmost variable owns the most significant bit
                let value = (mask >> (variables.len() - 1 - position)) & 1 == 1;
                assignment.insert(variable.clone(), value);
                inputs.push(value);
            }
            let output = expression.eval(&assignment)?;
            rows.push((inputs, output));
        }
        Ok(TruthTable {
            variables,
            rows,
            formula: expression.render(),
        })
    }

    /// Renders the table with one column per variable plus the formula column.
    pub fn pretty_table(&self) -> String {
        let mut builder = Builder::default();
        let mut header: Vec<String> = self.variables.clone();
        header.push(self.formula.clone());
        builder.push_record(header);
        for (inputs, output) in &self.rows {
            let mut record: Vec<String> = inputs
                .iter()
                .map(|value| if *value { "1".to_string() } else { "0".to_string() })
                .collect();
            record.push(if *output { "1".to_string() } else { "0".to_string() });
            builder.push_record(record);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.to_string()
    }
}

/// Decides semantic equivalence of two formulas over their united variable set.
///
/// The formulas may mention different variables; the check runs over every
/// assignment of the union, so `A` and `A + B` correctly compare unequal.
pub fn equivalent(a: &Expr, b: &Expr) -> Result<bool, ExprError> {
    let mut variables = a.extract_variables();
    variables.extend(b.extract_variables());
    variables.sort();
    variables.dedup();
    if variables.len() > TruthTable::MAX_VARIABLES {
        return Err(ExprError::TooManyVariables {
            found: variables.len(),
            limit: TruthTable::MAX_VARIABLES,
        });
    }
    let combinations = 1usize << variables.len();
    for mask in 0..combinations {
        let mut assignment: HashMap<String, bool> = HashMap::new();
        for (position, variable) in variables.iter().enumerate() {
            let value = (mask >> (variables.len() - 1 - position)) & 1 == 1;
            assignment.insert(variable.clone(), value);
        }
        if a.eval(&assignment)? != b.eval(&assignment)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_table_of_conjunction() {
        let a = Expr::variable("A");
        let b = Expr::variable("B");
        let table = TruthTable::build(&(a & b)).unwrap();
        assert_eq!(table.variables, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(table.rows.len(), 4);
        let outputs: Vec<bool> = table.rows.iter().map(|(_, output)| *output).collect();
        assert_eq!(outputs, vec![false, false, false, true]);
        assert_eq!(table.rows[2].0, vec![true, false]);
    }

    #[test]
    fn test_truth_table_of_constant() {
        let table = TruthTable::build(&Expr::Const(true)).unwrap();
        assert!(table.variables.is_empty());
        assert_eq!(table.rows.len(), 1);
        assert!(table.rows[0].1);
    }

    #[test]
    fn test_truth_table_variable_cap() {
        let operands: Vec<Expr> = (0..13)
            .map(|k| Expr::variable(&format!("V{}", k)))
            .collect();
        let result = TruthTable::build(&Expr::And(operands));
        assert!(matches!(result, Err(ExprError::TooManyVariables { .. })));
    }

    #[test]
    fn test_pretty_table_layout() {
        let a = Expr::variable("A");
        let table = TruthTable::build(&Expr::not(a)).unwrap();
        let printed = table.pretty_table();
        assert!(printed.contains("A"));
        assert!(printed.contains("~(A)"));
    }

    #[test]
    fn test_equivalence_of_de_morgan_pair() {
        let a = Expr::variable("A");
        let b = Expr::variable("B");
        let lhs = Expr::not(a.clone() & b.clone());
        let rhs = a.complement() | b.complement();
        assert!(equivalent(&lhs, &rhs).unwrap());
    }

    #[test]
    fn test_non_equivalent_formulas() {
        let a = Expr::variable("A");
        let b = Expr::variable("B");
        assert!(!equivalent(&(a.clone() & b.clone()), &(a | b)).unwrap());
    }

    #[test]
    fn test_equivalence_over_united_variable_sets() {
        let a = Expr::variable("A");
        let b = Expr::variable("B");
        assert!(!equivalent(&a.clone(), &(a.clone() | b)).unwrap());
    }
}
