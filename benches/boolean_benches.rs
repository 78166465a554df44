use RustedLogicThe::Examples::boolean_examples::{demo_formulas, random_expression};
use RustedLogicThe::symbolic::boolean_engine::Expr;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_simplify_demo_formulas(c: &mut Criterion) {
    let formulas = demo_formulas();
    c.bench_function("simplify demo formulas", |b| {
        b.iter(|| {
            for (_, formula) in &formulas {
                black_box(formula.simplify());
            }
        })
    });
}

fn bench_possibilities_wide_disjunction(c: &mut Criterion) {
    let operands: Vec<Expr> = ["A", "B", "C", "D", "E"]
        .iter()
        .map(|name| Expr::variable(name))
        .collect();
    let formula = Expr::Or(operands);
    c.bench_function("possibilities of a 5-ary disjunction", |b| {
        b.iter(|| black_box(formula.simplify_possibilities()))
    });
}

fn bench_reduce_random_trees(c: &mut Criterion) {
    let trees: Vec<Expr> = (0..32).map(|_| random_expression(4)).collect();
    c.bench_function("reduce 32 random trees", |b| {
        b.iter(|| {
            for tree in &trees {
                black_box(tree.reduce());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_simplify_demo_formulas,
    bench_possibilities_wide_disjunction,
    bench_reduce_random_trees
);
criterion_main!(benches);
