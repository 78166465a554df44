//! # Boolean Engine Module
//!
//! This module provides the core symbolic engine for Boolean algebra: creating,
//! inspecting, substituting and evaluating Boolean expression trees. It is the
//! foundation the simplification machinery in this framework is built on.
//!
//! ## Purpose
//!
//! The Boolean engine allows users to:
//! - Build expression trees from variables, constants and the NOT/AND/OR operators
//!   (plus the derived XOR/XNOR connectives)
//! - Render any tree to its canonical, fully parenthesized string form
//! - Substitute variables with constants and evaluate under an assignment
//! - Inspect trees (variables, node counts, depth) and guard against pathological nesting
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! The core expression type supporting:
//! - **Variables**: `Var { identifier, negated }` - the negation is carried as a flag,
//!   so `~A` stays a single comparable unit instead of a `Not` wrapper
//! - **Constants**: `Const(bool)` - rendered as `1`/`0`
//! - **Operators**: `Not`, n-ary `And`/`Or`, binary-only `Xor`/`NXor`
//!
//! ### Key Methods
//! - `Symbols(symbols: &str)` - create multiple variables from a comma-separated string
//! - `render()` - canonical string form, the sole structural-equality oracle
//! - `simple_key()` - flattened identifier concatenation for presentation purposes
//! - `set_variable()` / `eval()` - substitution and total evaluation
//! - `validate()` - defensive recursion-depth bound
//!
//! ## Interesting Code Features
//!
//! 1. **Closed variant set**: every rewriting operation matches exhaustively over
//!    the enum, so adding a variant is checked for completeness at compile time
//!
//! 2. **Operator Overloading**: implements `std::ops` traits (`BitAnd`, `BitOr`,
//!    `BitXor`, `Not`) for natural formula syntax: `a & b | !c`
//!
//! 3. **Identity-element convention**: `And(vec![])` is the multiplicative identity
//!    and renders as `1`, `Or(vec![])` is the additive identity and renders as `0`,
//!    so degenerate arities never need an error path
//!
//! 4. **Immutable trees**: every rewrite produces a new tree; sub-trees are cloned
//!    freely between simplification candidates
//!
//! 5. **Macro System**: provides convenient macros like `symbols!(a, b, c)` and the
//!    variadic `and!`/`or!` constructors for n-ary nodes

use std::collections::HashMap;
use std::fmt;

/// Core Boolean expression enum representing formulas as an abstract syntax tree.
///
/// Composite variants own their operand sub-trees through `Box`/`Vec`, allowing
/// arbitrarily deep expression trees. `And`/`Or` are n-ary (arity >= 0), while
/// `Xor`/`NXor` are deliberately binary only: n-ary XOR parity semantics differ
/// from pairwise expansion, so the asymmetry is kept on purpose.
///
/// # Examples
/// ```rust, ignore
/// use boolean_engine::Expr;
/// let a = Expr::variable("A");
/// let expr = Expr::not(a & Expr::variable("B"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name; the negation flag makes `~A` a single unit
    Var { identifier: String, negated: bool },
    /// Boolean constant, rendered as `1`/`0`
    Const(bool),
    /// Logical negation: ~(x)
    Not(Box<Expr>),
    /// n-ary conjunction: (x · y · ...); zero operands mean the identity `1`
    And(Vec<Expr>),
    /// n-ary disjunction: (x + y + ...); zero operands mean the identity `0`
    Or(Vec<Expr>),
    /// Exclusive or, binary only: derives to (L·~R) + (~L·R) before reduction
    Xor(Box<Expr>, Box<Expr>),
    /// Exclusive nor, binary only: derives to (L·R) + (~L·~R) before reduction
    NXor(Box<Expr>, Box<Expr>),
}

/// Display implementation delegating to the canonical renderer.
///
/// Two expressions are considered structurally equal iff their rendered strings
/// are equal, so `Display` and the equality oracle can never disagree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl std::ops::BitAnd for Expr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::And(vec![self, rhs])
    }
}

impl std::ops::BitOr for Expr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::Or(vec![self, rhs])
    }
}

impl std::ops::BitXor for Expr {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Expr::Xor(self.boxed(), rhs.boxed())
    }
}

impl std::ops::BitAndAssign for Expr {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = Expr::And(vec![self.clone(), rhs]);
    }
}

impl std::ops::BitOrAssign for Expr {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = Expr::Or(vec![self.clone(), rhs]);
    }
}

impl std::ops::BitXorAssign for Expr {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = Expr::Xor(Box::new(self.clone()), Box::new(rhs));
    }
}

/// `!expr` builds the logical complement in normalized form: variables flip their
/// negation flag, constants flip their value, an existing `Not` wrapper is removed.
/// Use `Expr::not` when the plain `Not` node itself is wanted.
impl std::ops::Not for Expr {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Defensive bound on expression nesting accepted by `validate`.
    pub const MAX_DEPTH: usize = 512;

    /// Creates multiple symbolic variables from a comma-separated string.
    ///
    /// Parses a string containing variable names separated by commas and returns
    /// a vector of variable expressions. Whitespace is automatically trimmed.
    ///
    /// # Arguments
    /// * `symbols` - Comma-separated string of variable names (e.g., "A, B, C")
    ///
    /// # Returns
    /// Vector of `Expr::Var` instances for each variable name
    ///
    /// # Examples
    /// ```rust, ignore
    /// let vars = Expr::Symbols("A, B, C");
    /// assert_eq!(vars.len(), 3);
    /// ```
    pub fn Symbols(symbols: &str) -> Vec<Expr> {
        let symbols = symbols.to_string();
        let vec_trimmed: Vec<String> = symbols.split(',').map(|s| s.trim().to_string()).collect();
        let vector_of_symbolic_vars: Vec<Expr> = vec_trimmed
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| Expr::variable(s))
            .collect();
        vector_of_symbolic_vars
    }

    /// Creates a plain (non-negated) variable.
    pub fn variable(name: &str) -> Expr {
        Expr::Var {
            identifier: name.to_string(),
            negated: false,
        }
    }

    /// Creates a negated variable, i.e. `~A` carried as a flag rather than a `Not` node.
    pub fn negated_variable(name: &str) -> Expr {
        Expr::Var {
            identifier: name.to_string(),
            negated: true,
        }
    }

    /// Creates a Boolean constant.
    pub fn constant(value: bool) -> Expr {
        Expr::Const(value)
    }

    /// Wraps an expression in a `Not` node.
    ///
    /// This constructor never normalizes: `Expr::not(Expr::not(a))` really builds a
    /// double negation, which the reduction engine then collapses. The `!` operator
    /// is the normalizing counterpart.
    pub fn not(operand: Expr) -> Expr {
        Expr::Not(operand.boxed())
    }

    /// Creates an n-ary conjunction from an operand list (arity >= 0 is legal).
    pub fn and(operands: Vec<Expr>) -> Expr {
        Expr::And(operands)
    }

    /// Creates an n-ary disjunction from an operand list (arity >= 0 is legal).
    pub fn or(operands: Vec<Expr>) -> Expr {
        Expr::Or(operands)
    }

    /// Creates a binary exclusive-or node.
    pub fn xor(left: Expr, right: Expr) -> Expr {
        Expr::Xor(left.boxed(), right.boxed())
    }

    /// Creates a binary exclusive-nor node.
    pub fn nxor(left: Expr, right: Expr) -> Expr {
        Expr::NXor(left.boxed(), right.boxed())
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    ///
    /// Essential for creating nested expressions since `Not`/`Xor`/`NXor` use `Box<Expr>`.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Checks if expression is exactly the constant `1`.
    pub fn is_true(&self) -> bool {
        matches!(self, Expr::Const(true))
    }

    /// Checks if expression is exactly the constant `0`.
    pub fn is_false(&self) -> bool {
        matches!(self, Expr::Const(false))
    }

    //___________________________________CANONICAL RENDERING____________________________________

    /// Renders the expression to its canonical, fully parenthesized string form.
    ///
    /// The rendering is deterministic and precedence-explicit: `~(X)` for negation,
    /// `(X · Y · ...)` for conjunction, `(X + Y + ...)` for disjunction, `1`/`0` for
    /// constants, `(X ⊕ Y)` / `(X ⊙ Y)` for the derived connectives. A negated
    /// variable renders exactly like its `Not`-wrapped form, so the flag carrier and
    /// the wrapper compare equal - a property the complement detection in the
    /// reduction rules relies on.
    ///
    /// Equality of rendered strings is the sole structural-equality oracle of the
    /// whole engine: two independently constructed trees of the same formula must
    /// produce identical renderings.
    ///
    /// # Returns
    /// Canonical string form of the expression
    pub fn render(&self) -> String {
        match self {
            Expr::Var {
                identifier,
                negated: false,
            } => identifier.clone(),
            Expr::Var {
                identifier,
                negated: true,
            } => format!("~({})", identifier),
            Expr::Const(true) => "1".to_string(),
            Expr::Const(false) => "0".to_string(),
            Expr::Not(operand) => format!("~({})", operand.render()),
            // arity 0 renders as the identity element so the equality oracle
            // agrees with the algebraic convention And() = 1, Or() = 0
            Expr::And(operands) if operands.is_empty() => "1".to_string(),
            Expr::Or(operands) if operands.is_empty() => "0".to_string(),
            Expr::And(operands) => {
                let inner: Vec<String> = operands.iter().map(|e| e.render()).collect();
                format!("({})", inner.join(" · "))
            }
            Expr::Or(operands) => {
                let inner: Vec<String> = operands.iter().map(|e| e.render()).collect();
                format!("({})", inner.join(" + "))
            }
            Expr::Xor(left, right) => format!("({} ⊕ {})", left.render(), right.render()),
            Expr::NXor(left, right) => format!("({} ⊙ {})", left.render(), right.render()),
        }
    }

    /// Produces a flattened identifier key concatenating variable names in order.
    ///
    /// Used only for presentation (labeling a formula in a UI or a table header).
    /// The key is deliberately lossy: a variable's own negation flag is dropped,
    /// only `Not`-wrapped variables contribute a `!(name)` marker, and composite
    /// grouping disappears entirely. It must never be used to decide rule
    /// applicability - that is what `render` is for.
    pub fn simple_key(&self) -> String {
        match self {
            Expr::Var { identifier, .. } => identifier.clone(),
            Expr::Const(true) => "1".to_string(),
            Expr::Const(false) => "0".to_string(),
            Expr::Not(operand) => match operand.as_ref() {
                Expr::Var { identifier, .. } => format!("!({})", identifier),
                other => other.simple_key(),
            },
            Expr::And(operands) | Expr::Or(operands) => {
                operands.iter().map(|e| e.simple_key()).collect()
            }
            Expr::Xor(left, right) | Expr::NXor(left, right) => {
                format!("{}{}", left.simple_key(), right.simple_key())
            }
        }
    }

    //___________________________________SUBSTITUTION AND INSPECTION____________________________________

    /// Substitutes a variable with a constant value throughout the expression.
    ///
    /// Recursively traverses the expression tree and replaces all occurrences of
    /// the named variable with the given constant. A negated variable absorbs the
    /// negation into the constant: substituting `A = 1` into `~A` yields `0`.
    ///
    /// # Arguments
    /// * `var` - Name of the variable to substitute
    /// * `value` - Boolean value to substitute for the variable
    ///
    /// # Returns
    /// New expression with the variable substituted
    pub fn set_variable(&self, var: &str, value: bool) -> Expr {
        match self {
            Expr::Var {
                identifier,
                negated,
            } if identifier == var => Expr::Const(if *negated { !value } else { value }),
            Expr::Var { .. } | Expr::Const(_) => self.clone(),
            Expr::Not(operand) => Expr::Not(Box::new(operand.set_variable(var, value))),
            Expr::And(operands) => Expr::And(
                operands
                    .iter()
                    .map(|operand| operand.set_variable(var, value))
                    .collect(),
            ),
            Expr::Or(operands) => Expr::Or(
                operands
                    .iter()
                    .map(|operand| operand.set_variable(var, value))
                    .collect(),
            ),
            Expr::Xor(left, right) => Expr::Xor(
                Box::new(left.set_variable(var, value)),
                Box::new(right.set_variable(var, value)),
            ),
            Expr::NXor(left, right) => Expr::NXor(
                Box::new(left.set_variable(var, value)),
                Box::new(right.set_variable(var, value)),
            ),
        }
    }

    /// Substitutes multiple variables with constant values using a HashMap.
    ///
    /// More efficient than multiple `set_variable` calls when substituting many
    /// variables. Only variables present in the map are substituted.
    ///
    /// # Arguments
    /// * `var_map` - HashMap mapping variable names to their replacement values
    ///
    /// # Returns
    /// New expression with all mapped variables substituted
    pub fn set_variable_from_map(&self, var_map: &HashMap<String, bool>) -> Expr {
        match self {
            Expr::Var {
                identifier,
                negated,
            } if var_map.contains_key(identifier) => {
                let value = var_map[identifier];
                Expr::Const(if *negated { !value } else { value })
            }
            Expr::Var { .. } | Expr::Const(_) => self.clone(),
            Expr::Not(operand) => Expr::Not(Box::new(operand.set_variable_from_map(var_map))),
            Expr::And(operands) => Expr::And(
                operands
                    .iter()
                    .map(|operand| operand.set_variable_from_map(var_map))
                    .collect(),
            ),
            Expr::Or(operands) => Expr::Or(
                operands
                    .iter()
                    .map(|operand| operand.set_variable_from_map(var_map))
                    .collect(),
            ),
            Expr::Xor(left, right) => Expr::Xor(
                Box::new(left.set_variable_from_map(var_map)),
                Box::new(right.set_variable_from_map(var_map)),
            ),
            Expr::NXor(left, right) => Expr::NXor(
                Box::new(left.set_variable_from_map(var_map)),
                Box::new(right.set_variable_from_map(var_map)),
            ),
        }
    }

    /// Renames a variable throughout the expression, keeping its negation flags.
    ///
    /// # Arguments
    /// * `old_var` - Current variable name to replace
    /// * `new_var` - New variable name
    ///
    /// # Returns
    /// New expression with the variable renamed
    pub fn rename_variable(&self, old_var: &str, new_var: &str) -> Expr {
        match self {
            Expr::Var {
                identifier,
                negated,
            } if identifier == old_var => Expr::Var {
                identifier: new_var.to_string(),
                negated: *negated,
            },
            Expr::Var { .. } | Expr::Const(_) => self.clone(),
            Expr::Not(operand) => Expr::Not(Box::new(operand.rename_variable(old_var, new_var))),
            Expr::And(operands) => Expr::And(
                operands
                    .iter()
                    .map(|operand| operand.rename_variable(old_var, new_var))
                    .collect(),
            ),
            Expr::Or(operands) => Expr::Or(
                operands
                    .iter()
                    .map(|operand| operand.rename_variable(old_var, new_var))
                    .collect(),
            ),
            Expr::Xor(left, right) => Expr::Xor(
                Box::new(left.rename_variable(old_var, new_var)),
                Box::new(right.rename_variable(old_var, new_var)),
            ),
            Expr::NXor(left, right) => Expr::NXor(
                Box::new(left.rename_variable(old_var, new_var)),
                Box::new(right.rename_variable(old_var, new_var)),
            ),
        }
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var { identifier, .. } => identifier == var_name,
            Expr::Const(_) => false,
            Expr::Not(operand) => operand.contains_variable(var_name),
            Expr::And(operands) | Expr::Or(operands) => operands
                .iter()
                .any(|operand| operand.contains_variable(var_name)),
            Expr::Xor(left, right) | Expr::NXor(left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
            }
        }
    }

    /// Collects the distinct variable names of the expression, sorted alphabetically.
    ///
    /// # Returns
    /// Sorted, deduplicated vector of variable names
    pub fn extract_variables(&self) -> Vec<String> {
        let mut vars: Vec<String> = Vec::new();
        match self {
            Expr::Var { identifier, .. } => vars.push(identifier.clone()),
            Expr::Const(_) => {}
            Expr::Not(operand) => vars.extend(operand.extract_variables()),
            Expr::And(operands) | Expr::Or(operands) => {
                for operand in operands {
                    vars.extend(operand.extract_variables());
                }
            }
            Expr::Xor(left, right) | Expr::NXor(left, right) => {
                vars.extend(left.extract_variables());
                vars.extend(right.extract_variables());
            }
        }
        vars.sort();
        vars.dedup();
        vars
    }

    /// Counts every node of the tree, the node itself included.
    pub fn count_nodes(&self) -> usize {
        match self {
            Expr::Var { .. } | Expr::Const(_) => 1,
            Expr::Not(operand) => 1 + operand.count_nodes(),
            Expr::And(operands) | Expr::Or(operands) => {
                1 + operands
                    .iter()
                    .map(|operand| operand.count_nodes())
                    .sum::<usize>()
            }
            Expr::Xor(left, right) | Expr::NXor(left, right) => {
                1 + left.count_nodes() + right.count_nodes()
            }
        }
    }

    /// Depth of the tree; a leaf counts as 1, an empty `And`/`Or` as well.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var { .. } | Expr::Const(_) => 1,
            Expr::Not(operand) => 1 + operand.depth(),
            Expr::And(operands) | Expr::Or(operands) => {
                1 + operands
                    .iter()
                    .map(|operand| operand.depth())
                    .max()
                    .unwrap_or(0)
            }
            Expr::Xor(left, right) | Expr::NXor(left, right) => {
                1 + left.depth().max(right.depth())
            }
        }
    }

    //___________________________________EVALUATION AND VALIDATION____________________________________

    /// Evaluates the expression under a variable assignment.
    ///
    /// Every variable of the tree must be present in the assignment; a missing one
    /// yields `ExprError::UnboundVariable` even when another operand would already
    /// determine the result, so an incomplete assignment is always detected.
    ///
    /// Degenerate arities follow the identity-element convention: an empty `And`
    /// evaluates to `true`, an empty `Or` to `false`.
    ///
    /// # Arguments
    /// * `assignment` - HashMap mapping variable names to truth values
    ///
    /// # Returns
    /// The truth value of the expression, or an error for an unbound variable
    pub fn eval(&self, assignment: &HashMap<String, bool>) -> Result<bool, ExprError> {
        match self {
            Expr::Var {
                identifier,
                negated,
            } => {
                let value = *assignment
                    .get(identifier)
                    .ok_or_else(|| ExprError::UnboundVariable(identifier.clone()))?;
                Ok(if *negated { !value } else { value })
            }
            Expr::Const(value) => Ok(*value),
            Expr::Not(operand) => Ok(!operand.eval(assignment)?),
            Expr::And(operands) => {
                let mut acc = true;
                for operand in operands {
                    acc = operand.eval(assignment)? && acc;
                }
                Ok(acc)
            }
            Expr::Or(operands) => {
                let mut acc = false;
                for operand in operands {
                    acc = operand.eval(assignment)? || acc;
                }
                Ok(acc)
            }
            Expr::Xor(left, right) => Ok(left.eval(assignment)? != right.eval(assignment)?),
            Expr::NXor(left, right) => Ok(left.eval(assignment)? == right.eval(assignment)?),
        }
    }

    /// Checks the tree against the defensive nesting bound `MAX_DEPTH`.
    ///
    /// Every well-formed tree is valid input to every rewriting operation, so this
    /// is the only structural check the engine offers; it exists to reject
    /// pathological inputs before a recursive pass walks them.
    pub fn validate(&self) -> Result<(), ExprError> {
        self.check_depth(1)
    }

    fn check_depth(&self, depth: usize) -> Result<(), ExprError> {
        if depth > Self::MAX_DEPTH {
            return Err(ExprError::DepthLimitExceeded {
                depth,
                limit: Self::MAX_DEPTH,
            });
        }
        match self {
            Expr::Var { .. } | Expr::Const(_) => Ok(()),
            Expr::Not(operand) => operand.check_depth(depth + 1),
            Expr::And(operands) | Expr::Or(operands) => {
                for operand in operands {
                    operand.check_depth(depth + 1)?;
                }
                Ok(())
            }
            Expr::Xor(left, right) | Expr::NXor(left, right) => {
                left.check_depth(depth + 1)?;
                right.check_depth(depth + 1)
            }
        }
    }
}

//___________________________________ERRORS____________________________________

/// Error type for the operations that are not total over arbitrary inputs:
/// evaluation, validation and truth-table materialization. The rewriting
/// operations themselves (`render`, `reduce`, `simplify_possibilities`) never
/// fail and never return this type.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    /// evaluation met a variable the assignment does not bind
    UnboundVariable(String),
    /// the tree nests deeper than the defensive recursion bound
    DepthLimitExceeded { depth: usize, limit: usize },
    /// truth-table materialization over more variables than the row cap allows
    TooManyVariables { found: usize, limit: usize },
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExprError::UnboundVariable(name) => {
                write!(f, "variable '{}' is not bound in the assignment", name)
            }
            ExprError::DepthLimitExceeded { depth, limit } => {
                write!(
                    f,
                    "expression nesting of depth {} exceeds the limit of {}",
                    depth, limit
                )
            }
            ExprError::TooManyVariables { found, limit } => {
                write!(
                    f,
                    "truth table over {} variables exceeds the limit of {}",
                    found, limit
                )
            }
        }
    }
}

impl std::error::Error for ExprError {}

//___________________________________MACROS____________________________________

/// Macro to create symbolic variables from a comma-separated list
/// Usage: symbols!(a, b, c) -> creates variables a, b, c
#[macro_export]
macro_rules! symbols {
    ($($var:ident),+ $(,)?) => {
        {
            let var_names = stringify!($($var),+);
            let vars = Expr::Symbols(var_names);
            let mut iter = vars.into_iter();
            ($(
                {
                    let $var = iter.next().unwrap();
                    $var
                }
            ),+)
        }
    };
}

/// Macro to create an n-ary conjunction from a list of operands
/// Usage: and!(a, b, c) -> And of a, b, c; and!() is the identity `1`
#[macro_export]
macro_rules! and {
    ($($operand:expr),* $(,)?) => {
        Expr::And(vec![$($operand),*])
    };
}

/// Macro to create an n-ary disjunction from a list of operands
/// Usage: or!(a, b, c) -> Or of a, b, c; or!() is the identity `0`
#[macro_export]
macro_rules! or {
    ($($operand:expr),* $(,)?) => {
        Expr::Or(vec![$($operand),*])
    };
}
