//! # Boolean Simplification Module
//!
//! Local reduction engine for Boolean expression trees. Every function here is a
//! pure rewrite: it takes a tree, applies at most one algebraic law at each node
//! position and returns a new tree, leaving the input untouched.
//!
//! ## Main Methods
//! - `reduce()` - one local rewrite pass (De Morgan, identity, annihilator,
//!   idempotence, complement, absorption, XOR/XNOR derivation)
//! - `simplify()` / `simplify_with_limit()` - drive `reduce` to a render fixed point
//! - `binary_and_rule()` / `binary_or_rule()` - the shared two-operand rule set,
//!   also used by the possibility generator
//! - `complement()` / `as_const()` / `is_negation_shaped()` - rule primitives
//!
//! Rule applicability is decided exclusively on canonical renderings (see
//! `render`), never on pointer identity or on `PartialEq` of the trees.

use crate::symbolic::boolean_engine::Expr;
use log::warn;

impl Expr {
    /// Pass cap for the fixed-point drivers; generous for any practical formula.
    pub const DEFAULT_MAX_PASSES: usize = 64;

    //___________________________________RULE PRIMITIVES____________________________________

    /// Returns the logical complement in normalized form.
    ///
    /// A variable flips its negation flag, a constant flips its value, an existing
    /// `Not` wrapper is removed, and any composite is wrapped in a fresh `Not`.
    /// On renderings the operation is an involution: `x.complement().complement()`
    /// always renders like `x`.
    pub fn complement(&self) -> Expr {
        match self {
            Expr::Var {
                identifier,
                negated,
            } => Expr::Var {
                identifier: identifier.clone(),
                negated: !negated,
            },
            Expr::Const(value) => Expr::Const(!value),
            Expr::Not(operand) => (**operand).clone(),
            Expr::And(_) | Expr::Or(_) | Expr::Xor(_, _) | Expr::NXor(_, _) => {
                Expr::Not(self.clone().boxed())
            }
        }
    }

    /// Recognizes expressions with a definite constant value.
    ///
    /// Covers the literal constants and the degenerate arities: an empty `And` is
    /// the identity `1`, an empty `Or` the identity `0`.
    pub fn as_const(&self) -> Option<bool> {
        match self {
            Expr::Const(value) => Some(*value),
            Expr::And(operands) => {
                if operands.is_empty() {
                    Some(true)
                } else {
                    None
                }
            }
            Expr::Or(operands) => {
                if operands.is_empty() {
                    Some(false)
                } else {
                    None
                }
            }
            Expr::Var { .. } | Expr::Not(_) | Expr::Xor(_, _) | Expr::NXor(_, _) => None,
        }
    }

    /// true for the two shapes that carry an outermost negation
    pub fn is_negation_shaped(&self) -> bool {
        matches!(self, Expr::Not(_) | Expr::Var { negated: true, .. })
    }

    //___________________________________BINARY RULE SET____________________________________

    /// Applies the first matching two-operand rule for a conjunction `a · b`.
    ///
    /// Rule order is fixed: idempotence, complement, constants (annihilator `0`
    /// before identity `1`). Absorption is an OR-side rule only; the conjunctive
    /// dual emerges through distribution in the possibility generator instead.
    ///
    /// # Returns
    /// `Some(rewritten)` when a rule fires, `None` otherwise
    pub fn binary_and_rule(a: &Expr, b: &Expr) -> Option<Expr> {
        // idempotence: X · X = X
        if a.render() == b.render() {
            return Some(a.clone());
        }
        // complement: X · ~X = 0
        if a.complement().render() == b.render() {
            return Some(Expr::Const(false));
        }
        // annihilator 0 and identity 1
        match (a.as_const(), b.as_const()) {
            (Some(false), _) | (_, Some(false)) => return Some(Expr::Const(false)),
            (Some(true), _) => return Some(b.clone()),
            (_, Some(true)) => return Some(a.clone()),
            (None, None) => {}
        }
        None
    }

    /// Applies the first matching two-operand rule for a disjunction `a + b`.
    ///
    /// Rule order is fixed: idempotence, complement, constants (annihilator `1`
    /// before identity `0`), then absorption `X + (X · Y) = X` checked with the
    /// conjunction on either side.
    ///
    /// # Returns
    /// `Some(rewritten)` when a rule fires, `None` otherwise
    pub fn binary_or_rule(a: &Expr, b: &Expr) -> Option<Expr> {
        // idempotence: X + X = X
        if a.render() == b.render() {
            return Some(a.clone());
        }
        // complement: X + ~X = 1
        if a.complement().render() == b.render() {
            return Some(Expr::Const(true));
        }
        // annihilator 1 and identity 0
        match (a.as_const(), b.as_const()) {
            (Some(true), _) | (_, Some(true)) => return Some(Expr::Const(true)),
            (Some(false), _) => return Some(b.clone()),
            (_, Some(false)) => return Some(a.clone()),
            (None, None) => {}
        }
        // absorption: X + (X · Y) = X, with the conjunction on either side
        if let Expr::And(operands) = b {
            if operands.len() == 2
                && (operands[0].render() == a.render() || operands[1].render() == a.render())
            {
                return Some(a.clone());
            }
        }
        if let Expr::And(operands) = a {
            if operands.len() == 2
                && (operands[0].render() == b.render() || operands[1].render() == b.render())
            {
                return Some(b.clone());
            }
        }
        None
    }

    //___________________________________LOCAL REDUCTION____________________________________

    /// Performs one local reduction pass over the expression.
    ///
    /// At every node position at most one rule is applied, preferring a rewrite at
    /// the node itself; only when no top-level rule fires is the node rebuilt with
    /// each operand reduced. Variables and constants return unchanged, so `reduce`
    /// is idempotent once a fixed point is reached. Callers iterate to that fixed
    /// point by comparing renderings, which `simplify` does automatically.
    ///
    /// The rewrites applied at the top of a node:
    /// - `Not`: constant flip, double-negation unwrap, variable flag flip, the
    ///   fused double-De-Morgan collapses, then element-wise De Morgan
    /// - `And`/`Or` of arity 0/1: identity element / sole operand
    /// - `And`/`Or` of arity 2: the binary rule set
    /// - `Xor`/`NXor`: expansion into the defining disjunction of conjunctions
    ///
    /// # Returns
    /// The reduced expression (a new tree)
    pub fn reduce(&self) -> Expr {
        match self {
            Expr::Var { .. } | Expr::Const(_) => self.clone(),
            Expr::Not(operand) => Self::reduce_not(operand),
            Expr::And(operands) => match operands.len() {
                0 => Expr::Const(true),
                1 => operands[0].clone(),
                2 => match Expr::binary_and_rule(&operands[0], &operands[1]) {
                    Some(step) => step,
                    None => Expr::And(operands.iter().map(|operand| operand.reduce()).collect()),
                },
                _ => Expr::And(operands.iter().map(|operand| operand.reduce()).collect()),
            },
            Expr::Or(operands) => match operands.len() {
                0 => Expr::Const(false),
                1 => operands[0].clone(),
                2 => match Expr::binary_or_rule(&operands[0], &operands[1]) {
                    Some(step) => step,
                    None => Expr::Or(operands.iter().map(|operand| operand.reduce()).collect()),
                },
                _ => Expr::Or(operands.iter().map(|operand| operand.reduce()).collect()),
            },
            // L ⊕ R = (L · ~R) + (~L · R)
            Expr::Xor(left, right) => Expr::Or(vec![
                Expr::And(vec![(**left).clone(), right.complement()]),
                Expr::And(vec![left.complement(), (**right).clone()]),
            ]),
            // L ⊙ R = (L · R) + (~L · ~R)
            Expr::NXor(left, right) => Expr::Or(vec![
                Expr::And(vec![(**left).clone(), (**right).clone()]),
                Expr::And(vec![left.complement(), right.complement()]),
            ]),
        }
    }

    /// rewrite ladder for a `Not` node; `operand` is the negated sub-tree
    fn reduce_not(operand: &Expr) -> Expr {
        match operand {
            // ~1 = 0, ~0 = 1
            Expr::Const(value) => Expr::Const(!value),
            // ~~X = X
            Expr::Not(inner) => (**inner).clone(),
            // ~A folds into the variable's negation flag
            Expr::Var {
                identifier,
                negated,
            } => Expr::Var {
                identifier: identifier.clone(),
                negated: !negated,
            },
            Expr::And(operands) => {
                // the fused shapes ~(~(P) · ~(Q)) with P, Q conjunctions get a
                // direct collapse before the element-wise law takes over
                if operands.len() == 2 {
                    if let (Expr::Not(left), Expr::Not(right)) = (&operands[0], &operands[1]) {
                        if let (Expr::And(left_inner), Expr::And(right_inner)) =
                            (left.as_ref(), right.as_ref())
                        {
                            // ~(~(P) · ~(P)) = P
                            if operands[0].render() == operands[1].render() {
                                return Expr::And(left_inner.clone());
                            }
                            // ~(~(A · A) · ~(B · B)) = A + B
                            if left_inner.len() == 2
                                && right_inner.len() == 2
                                && left_inner[0].render() == left_inner[1].render()
                                && right_inner[0].render() == right_inner[1].render()
                            {
                                return Expr::Or(vec![
                                    left_inner[0].clone(),
                                    right_inner[0].clone(),
                                ]);
                            }
                        }
                    }
                }
                // De Morgan: ~(X · Y · ...) = ~X + ~Y + ...
                Expr::Or(operands.iter().map(|op| op.complement()).collect())
            }
            // De Morgan: ~(X + Y + ...) = ~X · ~Y · ...
            Expr::Or(operands) => {
                Expr::And(operands.iter().map(|op| op.complement()).collect())
            }
            // no direct law for a negated derived connective; reduce underneath
            Expr::Xor(_, _) | Expr::NXor(_, _) => Expr::Not(operand.reduce().boxed()),
        }
    }

    //___________________________________FIXED-POINT DRIVERS____________________________________

    /// Repeats `reduce` until the canonical rendering stops changing.
    ///
    /// # Examples
    /// ```
    /// use RustedLogicThe::symbolic::boolean_engine::Expr;
    /// let a = Expr::variable("A");
    /// let b = Expr::variable("B");
    /// let formula = Expr::not(a & b);
    /// assert_eq!(formula.simplify().render(), "(~(A) + ~(B))");
    /// ```
    pub fn simplify(&self) -> Expr {
        self.simplify_with_limit(Self::DEFAULT_MAX_PASSES)
    }

    /// Repeats `reduce` until the rendering stabilizes or `max_passes` is reached.
    ///
    /// On cap exhaustion the partially reduced tree is returned and a warning is
    /// logged; every intermediate tree is semantically equivalent to the input, so
    /// the partial result is still a correct formula.
    pub fn simplify_with_limit(&self, max_passes: usize) -> Expr {
        let mut current = self.clone();
        let mut key = current.render();
        for _ in 0..max_passes {
            let next = current.reduce();
            let next_key = next.render();
            if next_key == key {
                return next;
            }
            current = next;
            key = next_key;
        }
        warn!(
            "no fixed point within {} passes, returning the partial reduction",
            max_passes
        );
        current
    }
}
