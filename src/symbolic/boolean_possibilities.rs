//! # Boolean Possibility Generation Module
//!
//! Exhaustive-search counterpart to the local reduction engine: instead of one
//! rewrite per node position, `simplify_possibilities` enumerates every
//! applicable rewriting of the node and returns the full candidate set, leaving
//! the choice of a preferred form to the caller (`pick_best` implements the
//! usual policy: a constant wins, otherwise the shortest rendering).
//!
//! The generator shares the two-operand rule set with the reduction engine and
//! adds the exploratory rewritings that a single local pass deliberately avoids:
//! distribution (which can grow the tree before it collapses), reverse De Morgan
//! compaction, associative flattening of nested nodes and the pairwise
//! decomposition of n-ary operands.
//!
//! Candidate lists are deduplicated by canonical rendering and are never empty:
//! when no rewriting applies, the expression itself is the sole candidate.

use crate::symbolic::boolean_engine::Expr;
use itertools::Itertools;

impl Expr {
    //___________________________________POSSIBILITY GENERATION____________________________________

    /// Enumerates the simplification candidates of the expression.
    ///
    /// Every returned candidate is semantically equivalent to the input; the list
    /// is deduplicated by rendering and guaranteed non-empty. An absorbing
    /// constant (`1` for a disjunction, `0` for a conjunction) discovered anywhere
    /// during the exploration short-circuits the whole node to that single
    /// candidate, regardless of operand order.
    ///
    /// # Examples
    /// ```
    /// use RustedLogicThe::symbolic::boolean_engine::Expr;
    /// let a = Expr::variable("A");
    /// let candidates = Expr::Or(vec![a.clone(), a.complement()]).simplify_possibilities();
    /// assert_eq!(candidates, vec![Expr::Const(true)]);
    /// ```
    pub fn simplify_possibilities(&self) -> Vec<Expr> {
        match self {
            Expr::Var { .. } | Expr::Const(_) => vec![self.clone()],
            Expr::Not(operand) => self.not_possibilities(operand),
            Expr::And(operands) => match operands.len() {
                0 => vec![Expr::Const(true)],
                1 => Self::sole_operand_possibilities(&operands[0]),
                2 => Self::and_pair_possibilities(&operands[0], &operands[1]),
                _ => Self::nary_possibilities(operands, true),
            },
            Expr::Or(operands) => match operands.len() {
                0 => vec![Expr::Const(false)],
                1 => Self::sole_operand_possibilities(&operands[0]),
                2 => Self::or_pair_possibilities(&operands[0], &operands[1]),
                _ => Self::nary_possibilities(operands, false),
            },
            // the derived connectives expose their defining expansion
            Expr::Xor(_, _) | Expr::NXor(_, _) => self.reduce().simplify_possibilities(),
        }
    }

    /// Picks the preferred candidate: the first constant if any, otherwise the
    /// first shortest rendering. `None` only for an empty slice.
    pub fn pick_best(candidates: &[Expr]) -> Option<Expr> {
        if let Some(constant) = candidates.iter().find(|c| c.as_const().is_some()) {
            return Some(constant.clone());
        }
        candidates
            .iter()
            .min_by_key(|c| c.render().len())
            .cloned()
    }

    //___________________________________PER-SHAPE CANDIDATE SETS____________________________________

    /// candidates of a `Not` node; the node itself always stays in the set
    fn not_possibilities(&self, operand: &Expr) -> Vec<Expr> {
        let mut candidates = vec![self.clone()];
        match operand {
            // ~1 = 0, ~0 = 1
            Expr::Const(value) => candidates.push(Expr::Const(!value)),
            // ~A folds into the negation flag
            Expr::Var {
                identifier,
                negated,
            } => candidates.push(Expr::Var {
                identifier: identifier.clone(),
                negated: !negated,
            }),
            // ~~X = X
            Expr::Not(inner) => candidates.push((**inner).clone()),
            // De Morgan in both directions
            Expr::And(operands) => {
                candidates.push(Expr::Or(operands.iter().map(|op| op.complement()).collect()))
            }
            Expr::Or(operands) => {
                candidates.push(Expr::And(operands.iter().map(|op| op.complement()).collect()))
            }
            Expr::Xor(_, _) | Expr::NXor(_, _) => {
                candidates.push(Expr::Not(operand.reduce().boxed()))
            }
        }
        Self::dedup_by_render(candidates)
    }

    /// arity-1 nodes dissolve into their operand
    fn sole_operand_possibilities(operand: &Expr) -> Vec<Expr> {
        match operand {
            Expr::Var { .. } | Expr::Const(_) => vec![operand.clone()],
            Expr::Not(_) | Expr::And(_) | Expr::Or(_) | Expr::Xor(_, _) | Expr::NXor(_, _) => {
                operand.simplify_possibilities()
            }
        }
    }

    /// Candidate set for a two-operand disjunction `a + b`.
    ///
    /// A firing binary rule is final for the pair. A derived connective operand
    /// is expanded to its And/Or form and the pair is explored again. A nested
    /// disjunction behind a variable either absorbs the variable or is flattened
    /// associatively before the exploration continues. The remaining candidates
    /// are the distributive expansion over a conjunction and the reverse
    /// De Morgan compaction `X + Y = ~(~X · ~Y)` offered when a negation is
    /// already present.
    fn or_pair_possibilities(a: &Expr, b: &Expr) -> Vec<Expr> {
        if let Some(step) = Expr::binary_or_rule(a, b) {
            return vec![step];
        }
        // a derived connective never matches a shape rule; expand it first
        if matches!(a, Expr::Xor(_, _) | Expr::NXor(_, _))
            || matches!(b, Expr::Xor(_, _) | Expr::NXor(_, _))
        {
            return Expr::Or(vec![a.derived(), b.derived()]).simplify_possibilities();
        }
        // A + (A + ...) absorbs, A + (X + ...) flattens
        if let Expr::Var { .. } = a {
            if let Expr::Or(inner) = b {
                if inner.iter().any(|op| op.render() == a.render()) {
                    return vec![b.clone()];
                }
                let mut flattened = vec![a.clone()];
                flattened.extend(inner.iter().cloned());
                return Expr::Or(flattened).simplify_possibilities();
            }
        }
        let mut candidates: Vec<Expr> = Vec::new();
        // A + (X · Y · ...) = (A + X) · (A + Y) · ...
        if let (Expr::Var { .. }, Expr::And(inner)) = (a, b) {
            candidates.push(Expr::And(
                inner
                    .iter()
                    .map(|op| Expr::Or(vec![a.clone(), op.clone()]))
                    .collect(),
            ));
        }
        if let (Expr::And(inner), Expr::Var { .. }) = (a, b) {
            candidates.push(Expr::And(
                inner
                    .iter()
                    .map(|op| Expr::Or(vec![op.clone(), b.clone()]))
                    .collect(),
            ));
        }
        // X + Y = ~(~X · ~Y) once a negation is present
        if a.is_negation_shaped() || b.is_negation_shaped() {
            candidates.push(Expr::Not(
                Expr::And(vec![a.complement(), b.complement()]).boxed(),
            ));
        }
        let candidates = Self::dedup_by_render(candidates);
        if candidates.is_empty() {
            vec![Expr::Or(vec![a.clone(), b.clone()])]
        } else {
            candidates
        }
    }

    /// Candidate set for a two-operand conjunction `a · b`, the dual of
    /// `or_pair_possibilities`. Absorption `X · (X + Y) = X` is not a binary
    /// rule here; it falls out of the distributive expansion followed by the
    /// disjunctive rules.
    fn and_pair_possibilities(a: &Expr, b: &Expr) -> Vec<Expr> {
        if let Some(step) = Expr::binary_and_rule(a, b) {
            return vec![step];
        }
        // a derived connective never matches a shape rule; expand it first
        if matches!(a, Expr::Xor(_, _) | Expr::NXor(_, _))
            || matches!(b, Expr::Xor(_, _) | Expr::NXor(_, _))
        {
            return Expr::And(vec![a.derived(), b.derived()]).simplify_possibilities();
        }
        // A · (A · ...) absorbs, A · (X · ...) flattens
        if let Expr::Var { .. } = a {
            if let Expr::And(inner) = b {
                if inner.iter().any(|op| op.render() == a.render()) {
                    return vec![b.clone()];
                }
                let mut flattened = vec![a.clone()];
                flattened.extend(inner.iter().cloned());
                return Expr::And(flattened).simplify_possibilities();
            }
        }
        let mut candidates: Vec<Expr> = Vec::new();
        // A · (X + Y + ...) = (A · X) + (A · Y) + ...
        if let (Expr::Var { .. }, Expr::Or(inner)) = (a, b) {
            candidates.push(Expr::Or(
                inner
                    .iter()
                    .map(|op| Expr::And(vec![a.clone(), op.clone()]))
                    .collect(),
            ));
        }
        if let (Expr::Or(inner), Expr::Var { .. }) = (a, b) {
            candidates.push(Expr::Or(
                inner
                    .iter()
                    .map(|op| Expr::And(vec![op.clone(), b.clone()]))
                    .collect(),
            ));
        }
        // X · Y = ~(~X + ~Y) once a negation is present
        if a.is_negation_shaped() || b.is_negation_shaped() {
            candidates.push(Expr::Not(
                Expr::Or(vec![a.complement(), b.complement()]).boxed(),
            ));
        }
        let candidates = Self::dedup_by_render(candidates);
        if candidates.is_empty() {
            vec![Expr::And(vec![a.clone(), b.clone()])]
        } else {
            candidates
        }
    }

    /// Pairwise decomposition of an n-ary node (arity > 2).
    ///
    /// Every unordered operand pair is explored through the two-operand candidate
    /// set; each pair candidate is folded back with the untouched operands and the
    /// reconstituted node is explored recursively, so each fold strictly shrinks
    /// the operand count. An absorbing constant surfacing at any point decides
    /// the node immediately.
    fn nary_possibilities(operands: &[Expr], is_and: bool) -> Vec<Expr> {
        let absorbing = !is_and;
        if operands
            .iter()
            .any(|op| op.as_const() == Some(absorbing))
        {
            return vec![Expr::Const(absorbing)];
        }
        let mut candidates: Vec<Expr> = Vec::new();
        for i in 0..operands.len() {
            for j in (i + 1)..operands.len() {
                let pair_candidates = if is_and {
                    Self::and_pair_possibilities(&operands[i], &operands[j])
                } else {
                    Self::or_pair_possibilities(&operands[i], &operands[j])
                };
                for candidate in pair_candidates {
                    if candidate.as_const() == Some(absorbing) {
                        return vec![Expr::Const(absorbing)];
                    }
                    let mut reconstituted = vec![candidate];
                    reconstituted.extend(
                        operands
                            .iter()
                            .enumerate()
                            .filter(|(k, _)| *k != i && *k != j)
                            .map(|(_, op)| op.clone()),
                    );
                    let folded = if is_and {
                        Expr::And(reconstituted)
                    } else {
                        Expr::Or(reconstituted)
                    };
                    for possibility in folded.simplify_possibilities() {
                        if possibility.as_const() == Some(absorbing) {
                            return vec![Expr::Const(absorbing)];
                        }
                        candidates.push(possibility);
                    }
                }
            }
        }
        let candidates = Self::dedup_by_render(candidates);
        if candidates.is_empty() {
            let node = if is_and {
                Expr::And(operands.to_vec())
            } else {
                Expr::Or(operands.to_vec())
            };
            vec![node]
        } else {
            candidates
        }
    }

    /// expands a derived connective into its defining And/Or form; every other
    /// shape passes through unchanged
    fn derived(&self) -> Expr {
        match self {
            Expr::Xor(_, _) | Expr::NXor(_, _) => self.reduce(),
            Expr::Var { .. } | Expr::Const(_) | Expr::Not(_) | Expr::And(_) | Expr::Or(_) => {
                self.clone()
            }
        }
    }

    /// keeps the first occurrence of every rendering
    fn dedup_by_render(candidates: Vec<Expr>) -> Vec<Expr> {
        candidates
            .into_iter()
            .unique_by(|candidate| candidate.render())
            .collect()
    }
}
