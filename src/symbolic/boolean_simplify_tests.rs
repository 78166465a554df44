#[cfg(test)]
mod tests {

    use crate::Examples::boolean_examples::random_expression;
    use crate::Utils::truth_table::equivalent;
    use crate::symbolic::boolean_engine::Expr;

    //___________________________________RULE PRIMITIVES____________________________________

    #[test]
    fn test_complement_shapes() {
        let a = Expr::variable("A");
        assert_eq!(a.complement(), Expr::negated_variable("A"));
        assert_eq!(Expr::negated_variable("A").complement(), a);
        assert_eq!(Expr::Const(true).complement(), Expr::Const(false));
        let conjunction = Expr::variable("A") & Expr::variable("B");
        assert_eq!(Expr::not(conjunction.clone()).complement(), conjunction);
        assert_eq!(
            conjunction.complement(),
            Expr::Not(conjunction.clone().boxed())
        );
    }

    #[test]
    fn test_complement_is_involution_on_renderings() {
        let samples = vec![
            Expr::variable("A"),
            Expr::negated_variable("A"),
            Expr::Const(false),
            Expr::variable("A") & Expr::variable("B"),
            Expr::not(Expr::variable("A") | Expr::variable("B")),
        ];
        for sample in samples {
            assert_eq!(sample.complement().complement().render(), sample.render());
        }
    }

    #[test]
    fn test_as_const_recognizes_identities() {
        assert_eq!(Expr::Const(true).as_const(), Some(true));
        assert_eq!(Expr::And(vec![]).as_const(), Some(true));
        assert_eq!(Expr::Or(vec![]).as_const(), Some(false));
        assert_eq!(Expr::variable("A").as_const(), None);
        assert_eq!(Expr::And(vec![Expr::variable("A")]).as_const(), None);
    }

    #[test]
    fn test_negation_shapes() {
        assert!(Expr::not(Expr::variable("A")).is_negation_shaped());
        assert!(Expr::negated_variable("A").is_negation_shaped());
        assert!(!Expr::variable("A").is_negation_shaped());
        assert!(!(Expr::variable("A") & Expr::variable("B")).is_negation_shaped());
    }

    #[test]
    fn test_binary_rules() {
        let a = Expr::variable("A");
        let b = Expr::variable("B");
        assert_eq!(Expr::binary_or_rule(&a, &a), Some(a.clone()));
        assert_eq!(
            Expr::binary_or_rule(&a, &a.complement()),
            Some(Expr::Const(true))
        );
        assert_eq!(
            Expr::binary_and_rule(&a, &a.complement()),
            Some(Expr::Const(false))
        );
        assert_eq!(Expr::binary_or_rule(&a, &Expr::Const(false)), Some(a.clone()));
        assert_eq!(Expr::binary_or_rule(&Expr::Const(false), &a), Some(a.clone()));
        assert_eq!(
            Expr::binary_and_rule(&a, &Expr::Const(false)),
            Some(Expr::Const(false))
        );
        assert_eq!(Expr::binary_and_rule(&a, &b), None);
        assert_eq!(Expr::binary_or_rule(&a, &b), None);
    }

    //___________________________________LOCAL REDUCTION____________________________________

    #[test]
    fn test_reduce_not_constant() {
        assert_eq!(Expr::not(Expr::Const(false)).reduce(), Expr::Const(true));
        assert_eq!(Expr::not(Expr::Const(true)).reduce(), Expr::Const(false));
    }

    #[test]
    fn test_reduce_double_negation() {
        let a = Expr::variable("A");
        assert_eq!(Expr::not(Expr::not(a.clone())).reduce(), a);
    }

    #[test]
    fn test_reduce_not_variable_flips_flag() {
        assert_eq!(
            Expr::not(Expr::variable("A")).reduce(),
            Expr::negated_variable("A")
        );
        assert_eq!(
            Expr::not(Expr::negated_variable("A")).reduce(),
            Expr::variable("A")
        );
    }

    #[test]
    fn test_de_morgan_over_conjunction() {
        let a = Expr::variable("A");
        let b = Expr::variable("B");
        let formula = Expr::not(a & b);
        assert_eq!(formula.reduce().render(), "(~(A) + ~(B))");
    }

    #[test]
    fn test_de_morgan_over_disjunction() {
        let a = Expr::variable("A");
        let b = Expr::variable("B");
        let formula = Expr::not(a | b);
        assert_eq!(formula.reduce().render(), "(~(A) · ~(B))");
    }

    #[test]
    fn test_de_morgan_over_wide_conjunction() {
        let formula = Expr::not(Expr::And(vec![
            Expr::variable("A"),
            Expr::variable("B"),
            Expr::variable("C"),
        ]));
        assert_eq!(formula.reduce().render(), "(~(A) + ~(B) + ~(C))");
    }

    #[test]
    fn test_de_morgan_with_one_negated_operand() {
        let x = Expr::variable("X");
        let y = Expr::variable("Y");
        let formula = Expr::not(Expr::And(vec![Expr::not(x), y]));
        assert_eq!(formula.reduce().render(), "(X + ~(Y))");
    }

    #[test]
    fn test_double_de_morgan_collapses_to_conjunction() {
        let inner = Expr::variable("A") & Expr::variable("B");
        let formula = Expr::not(Expr::And(vec![
            Expr::not(inner.clone()),
            Expr::not(inner),
        ]));
        assert_eq!(formula.reduce().render(), "(A · B)");
    }

    #[test]
    fn test_double_de_morgan_expands_to_disjunction() {
        let aa = Expr::variable("A") & Expr::variable("A");
        let bb = Expr::variable("B") & Expr::variable("B");
        let formula = Expr::not(Expr::And(vec![Expr::not(aa), Expr::not(bb)]));
        assert_eq!(formula.reduce().render(), "(A + B)");
    }

    #[test]
    fn test_idempotence() {
        let a = Expr::variable("A");
        assert_eq!((a.clone() & a.clone()).reduce(), a);
        assert_eq!((a.clone() | a.clone()).reduce(), a);
    }

    #[test]
    fn test_complement_laws() {
        let a = Expr::variable("A");
        assert_eq!(
            (a.clone() & a.complement()).reduce(),
            Expr::Const(false)
        );
        assert_eq!((a.clone() | a.complement()).reduce(), Expr::Const(true));
        // the wrapper form behaves like the flag form
        assert_eq!(
            (a.clone() | Expr::not(a.clone())).reduce(),
            Expr::Const(true)
        );
    }

    #[test]
    fn test_identity_and_annihilator_constants() {
        let a = Expr::variable("A");
        assert_eq!((a.clone() & Expr::Const(true)).reduce(), a);
        assert_eq!(
            (a.clone() & Expr::Const(false)).reduce(),
            Expr::Const(false)
        );
        assert_eq!((a.clone() | Expr::Const(false)).reduce(), a);
        assert_eq!((a.clone() | Expr::Const(true)).reduce(), Expr::Const(true));
    }

    #[test]
    fn test_absorption() {
        let x = Expr::variable("X");
        let y = Expr::variable("Y");
        let formula = Expr::Or(vec![x.clone(), x.clone() & y.clone()]);
        assert_eq!(formula.reduce(), x);
        let mirrored = Expr::Or(vec![y.clone() & x.clone(), x.clone()]);
        assert_eq!(mirrored.reduce(), x);
    }

    #[test]
    fn test_arity_normalization() {
        assert_eq!(Expr::And(vec![]).reduce(), Expr::Const(true));
        assert_eq!(Expr::Or(vec![]).reduce(), Expr::Const(false));
        let a = Expr::variable("A");
        assert_eq!(Expr::And(vec![a.clone()]).reduce(), a.clone());
        assert_eq!(Expr::Or(vec![a.clone()]).reduce(), a);
    }

    #[test]
    fn test_reduce_descends_when_no_top_rule_fires() {
        let formula = Expr::Or(vec![
            Expr::variable("A") & Expr::Const(true),
            Expr::variable("B"),
        ]);
        assert_eq!(formula.reduce().render(), "(A + B)");
    }

    #[test]
    fn test_reduce_is_stable_at_fixed_point() {
        let settled = Expr::variable("A") | Expr::variable("B");
        assert_eq!(settled.reduce(), settled);
        let once = Expr::not(Expr::variable("A") & Expr::variable("B")).reduce();
        assert_eq!(once.reduce().render(), once.render());
    }

    #[test]
    fn test_xor_expansion() {
        let formula = Expr::variable("A") ^ Expr::variable("B");
        assert_eq!(formula.reduce().render(), "((A · ~(B)) + (~(A) · B))");
    }

    #[test]
    fn test_nxor_expansion() {
        let formula = Expr::nxor(Expr::variable("A"), Expr::variable("B"));
        assert_eq!(formula.reduce().render(), "((A · B) + (~(A) · ~(B)))");
    }

    //___________________________________FIXED-POINT DRIVERS____________________________________

    #[test]
    fn test_simplify_reaches_de_morgan_fixed_point() {
        let formula = Expr::not(Expr::variable("A") & Expr::variable("B"));
        let simplified = formula.simplify();
        assert_eq!(simplified.render(), "(~(A) + ~(B))");
        assert_eq!(simplified.simplify().render(), "(~(A) + ~(B))");
    }

    #[test]
    fn test_simplify_collapses_xor_of_identical_operands() {
        let a = Expr::variable("A");
        let formula = a.clone() ^ a;
        assert_eq!(formula.simplify(), Expr::Const(false));
    }

    #[test]
    fn test_simplify_unwraps_double_negation() {
        let formula = Expr::not(Expr::not(Expr::variable("A") | Expr::variable("B")));
        assert_eq!(formula.simplify().render(), "(A + B)");
    }

    #[test]
    fn test_simplify_with_limit_returns_partial_reduction() {
        let a = Expr::variable("A");
        let formula = a.clone() ^ a;
        let partial = formula.simplify_with_limit(1);
        assert_eq!(partial.render(), "((A · ~(A)) + (~(A) · A))");
    }

    //___________________________________POSSIBILITY GENERATION____________________________________

    #[test]
    fn test_possibilities_of_leaves() {
        let a = Expr::variable("A");
        assert_eq!(a.simplify_possibilities(), vec![a.clone()]);
        assert_eq!(
            Expr::Const(false).simplify_possibilities(),
            vec![Expr::Const(false)]
        );
    }

    #[test]
    fn test_possibilities_of_complement_pair() {
        let a = Expr::variable("A");
        let flagged = Expr::Or(vec![a.clone(), a.complement()]);
        assert_eq!(flagged.simplify_possibilities(), vec![Expr::Const(true)]);
        let wrapped = Expr::Or(vec![a.clone(), Expr::not(a)]);
        assert_eq!(wrapped.simplify_possibilities(), vec![Expr::Const(true)]);
    }

    #[test]
    fn test_possibilities_identity_dissolves() {
        let a = Expr::variable("A");
        let formula = Expr::Or(vec![a.clone(), Expr::Const(false)]);
        assert_eq!(formula.simplify_possibilities(), vec![a]);
    }

    #[test]
    fn test_possibilities_annihilator() {
        let a = Expr::variable("A");
        assert_eq!(
            Expr::Or(vec![a.clone(), Expr::Const(true)]).simplify_possibilities(),
            vec![Expr::Const(true)]
        );
        assert_eq!(
            Expr::And(vec![a, Expr::Const(false)]).simplify_possibilities(),
            vec![Expr::Const(false)]
        );
    }

    #[test]
    fn test_possibilities_nested_disjunction_absorbs() {
        let a = Expr::variable("A");
        let b = Expr::variable("B");
        let formula = Expr::Or(vec![a.clone(), Expr::Or(vec![a, b])]);
        let candidates = formula.simplify_possibilities();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].render(), "(A + B)");
    }

    #[test]
    fn test_possibilities_nested_disjunction_flattens() {
        let formula = Expr::Or(vec![
            Expr::variable("A"),
            Expr::Or(vec![Expr::variable("B"), Expr::variable("C")]),
        ]);
        let candidates = formula.simplify_possibilities();
        assert_eq!(candidates.len(), 3);
        assert!(
            candidates
                .iter()
                .any(|candidate| candidate.render() == "((A + B) + C)")
        );
        for candidate in &candidates {
            assert!(equivalent(candidate, &formula).unwrap());
        }
    }

    #[test]
    fn test_possibilities_nested_conjunction_absorbs() {
        let a = Expr::variable("A");
        let b = Expr::variable("B");
        let formula = Expr::And(vec![a.clone(), Expr::And(vec![a, b])]);
        let candidates = formula.simplify_possibilities();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].render(), "(A · B)");
    }

    #[test]
    fn test_possibilities_distribute_disjunction_over_conjunction() {
        let formula = Expr::Or(vec![
            Expr::variable("A"),
            Expr::variable("B") & Expr::variable("C"),
        ]);
        let candidates = formula.simplify_possibilities();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].render(), "((A + B) · (A + C))");
    }

    #[test]
    fn test_possibilities_distribution_mirrored_operands() {
        let formula = Expr::Or(vec![
            Expr::variable("A") & Expr::variable("B"),
            Expr::variable("C"),
        ]);
        let candidates = formula.simplify_possibilities();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].render(), "((A + C) · (B + C))");
    }

    #[test]
    fn test_possibilities_distribute_conjunction_over_disjunction() {
        let formula = Expr::And(vec![
            Expr::variable("A"),
            Expr::variable("B") | Expr::variable("C"),
        ]);
        let candidates = formula.simplify_possibilities();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].render(), "((A · B) + (A · C))");
    }

    #[test]
    fn test_possibilities_reverse_de_morgan_compaction() {
        let formula = Expr::Or(vec![Expr::variable("A"), Expr::not(Expr::variable("B"))]);
        let candidates = formula.simplify_possibilities();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].render(), "~((~(A) · B))");
        assert!(equivalent(&candidates[0], &formula).unwrap());
    }

    #[test]
    fn test_possibilities_wide_disjunction_short_circuits() {
        let a = Expr::variable("A");
        let b = Expr::variable("B");
        let formula = Expr::Or(vec![a.clone(), b.clone(), a.complement()]);
        assert_eq!(formula.simplify_possibilities(), vec![Expr::Const(true)]);
        // the complementary pair is found regardless of operand order
        let shuffled = Expr::Or(vec![b, a.clone(), a.complement()]);
        assert_eq!(shuffled.simplify_possibilities(), vec![Expr::Const(true)]);
    }

    #[test]
    fn test_possibilities_wide_disjunction_with_two_complement_pairs() {
        let a = Expr::variable("A");
        let b = Expr::variable("B");
        let c = Expr::variable("C");
        // five operands, two complementary pairs, one free variable
        let orders = vec![
            vec![
                a.clone(),
                a.complement(),
                b.clone(),
                b.complement(),
                c.clone(),
            ],
            vec![
                c.clone(),
                b.complement(),
                a.clone(),
                b.clone(),
                a.complement(),
            ],
            vec![b.complement(), c, b, a.complement(), a],
        ];
        for operands in orders {
            let formula = Expr::Or(operands);
            assert_eq!(formula.simplify_possibilities(), vec![Expr::Const(true)]);
        }
    }

    #[test]
    fn test_possibilities_wide_conjunction_short_circuits() {
        let formula = Expr::And(vec![
            Expr::variable("A"),
            Expr::Const(false),
            Expr::variable("B"),
        ]);
        assert_eq!(formula.simplify_possibilities(), vec![Expr::Const(false)]);
    }

    #[test]
    fn test_possibilities_fall_back_to_the_formula_itself() {
        let formula = Expr::variable("A") | Expr::variable("B");
        assert_eq!(formula.simplify_possibilities(), vec![formula.clone()]);
    }

    #[test]
    fn test_possibilities_of_negated_conjunction() {
        let formula = Expr::not(Expr::variable("A") & Expr::variable("B"));
        let candidates = formula.simplify_possibilities();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0], formula);
        assert_eq!(candidates[1].render(), "(~(A) + ~(B))");
    }

    #[test]
    fn test_possibilities_of_derived_connective() {
        let formula = Expr::variable("A") ^ Expr::variable("B");
        let candidates = formula.simplify_possibilities();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].render(), "((A · ~(B)) + (~(A) · B))");
    }

    #[test]
    fn test_possibilities_derive_connective_inside_disjunction() {
        let formula = Expr::Or(vec![
            Expr::variable("A") ^ Expr::variable("B"),
            Expr::variable("C"),
        ]);
        let candidates = formula.simplify_possibilities();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].render(), "(((A · ~(B)) + (~(A) · B)) + C)");
        assert!(equivalent(&candidates[0], &formula).unwrap());
    }

    #[test]
    fn test_possibilities_derive_connective_inside_conjunction() {
        let formula = Expr::And(vec![
            Expr::nxor(Expr::variable("A"), Expr::variable("B")),
            Expr::variable("C"),
        ]);
        let candidates = formula.simplify_possibilities();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].render(), "(((A · B) · C) + ((~(A) · ~(B)) · C))");
        assert!(equivalent(&candidates[0], &formula).unwrap());
    }

    #[test]
    fn test_possibilities_derive_connective_among_wide_operands() {
        let formula = Expr::Or(vec![
            Expr::variable("A") ^ Expr::variable("B"),
            Expr::variable("C"),
            Expr::variable("D"),
        ]);
        let candidates = formula.simplify_possibilities();
        assert!(!candidates.is_empty());
        for candidate in &candidates {
            assert!(!candidate.render().contains('⊕'));
            assert!(equivalent(candidate, &formula).unwrap());
        }
    }

    #[test]
    fn test_pick_best_prefers_constants_then_short_renderings() {
        let a = Expr::variable("A");
        let wide = Expr::variable("A") | Expr::variable("B");
        assert_eq!(Expr::pick_best(&[]), None);
        assert_eq!(
            Expr::pick_best(&[wide.clone(), Expr::Const(true)]),
            Some(Expr::Const(true))
        );
        assert_eq!(Expr::pick_best(&[wide, a.clone()]), Some(a));
    }

    //___________________________________SEMANTIC PRESERVATION____________________________________

    #[test]
    fn test_possibilities_preserve_semantics() {
        let formulas = vec![
            Expr::Or(vec![
                Expr::variable("A"),
                Expr::variable("B") & Expr::variable("C"),
            ]),
            Expr::And(vec![
                Expr::variable("A"),
                Expr::variable("B") | Expr::variable("C"),
            ]),
            Expr::Or(vec![Expr::variable("A"), Expr::not(Expr::variable("B"))]),
            Expr::Or(vec![
                Expr::variable("A"),
                Expr::variable("B"),
                Expr::variable("C"),
            ]),
            Expr::not(Expr::variable("A") & Expr::variable("B")),
            Expr::variable("A") ^ Expr::variable("B"),
        ];
        for formula in formulas {
            for candidate in formula.simplify_possibilities() {
                assert!(
                    equivalent(&candidate, &formula).unwrap(),
                    "candidate {} is not equivalent to {}",
                    candidate.render(),
                    formula.render()
                );
            }
        }
    }

    #[test]
    fn test_simplify_preserves_semantics_on_random_trees() {
        for _ in 0..20 {
            let tree = random_expression(4);
            let simplified = tree.simplify();
            assert!(
                equivalent(&tree, &simplified).unwrap(),
                "simplification of {} changed its meaning into {}",
                tree.render(),
                simplified.render()
            );
        }
    }

    #[test]
    fn test_possibilities_preserve_semantics_on_random_trees() {
        for _ in 0..10 {
            let tree = random_expression(2);
            for candidate in tree.simplify_possibilities() {
                assert!(
                    equivalent(&candidate, &tree).unwrap(),
                    "candidate {} is not equivalent to {}",
                    candidate.render(),
                    tree.render()
                );
            }
        }
    }
}
