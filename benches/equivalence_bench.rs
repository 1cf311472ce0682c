/// Benchmarks for the equivalence engine.
///
/// Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hedgehog_equiv::application::duplicates::find_duplicates;
use hedgehog_equiv::domain::{
    EquivalenceChecker, Expression, Fragment, NamedFragment, NoResolver, Operator, Statement,
};
use hedgehog_equiv::infrastructure::{SymbolInfo, SymbolTable};

// ═══════════════════════════════════════════════════════════════════════════
// Synthetic Tree Generators
// ═══════════════════════════════════════════════════════════════════════════

/// Left-leaning `x0 + (x1 + (... + xN))`, wrapped in parentheses every few levels.
fn deep_expression(depth: usize, leaf: &str) -> Expression {
    let mut expr = Expression::name(leaf);
    for level in 0..depth {
        let operand = Expression::name(format!("x{}", level));
        expr = Expression::binary(operand, Operator::Plus, expr);
        if level % 4 == 0 {
            expr = Expression::parenthesized(expr);
        }
    }
    expr
}

/// A loop body of `width` assignments, each bound to a field symbol.
fn loop_statement(width: usize, seed: usize) -> Statement {
    let body = (0..width)
        .map(|i| {
            Statement::expression(Expression::assign(
                Expression::field(Expression::this(), format!("f{}", i)).bound_to(&format!("f{}", i)),
                Operator::PlusAssign,
                Expression::name(format!("v{}", (i + seed) % 3)),
            ))
        })
        .collect();
    Statement::while_(Expression::name("running"), Statement::block(body))
}

fn field_table(width: usize) -> SymbolTable {
    (0..width)
        .map(|i| (format!("f{}", i), SymbolInfo::field(&format!("f{}", i), "bench.Holder")))
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Benchmarks
// ═══════════════════════════════════════════════════════════════════════════

fn bench_deep_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("equivalence/deep_expression");
    let checker = EquivalenceChecker::new(&NoResolver);

    for depth in [16, 128, 1024].iter() {
        let left = deep_expression(*depth, "leaf");
        let right = deep_expression(*depth, "leaf");
        group.throughput(Throughput::Elements(*depth as u64));
        group.bench_with_input(BenchmarkId::new("depth", depth), &(left, right), |b, (l, r)| {
            b.iter(|| checker.expressions_equivalent(black_box(Some(l)), black_box(Some(r))))
        });
    }

    group.finish();
}

fn bench_resolved_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("equivalence/resolved_loop");
    let table = field_table(64);
    let checker = EquivalenceChecker::new(&table);

    for width in [8, 64].iter() {
        let left = loop_statement(*width, 0);
        let right = loop_statement(*width, 0);
        group.bench_with_input(BenchmarkId::new("width", width), &(left, right), |b, (l, r)| {
            b.iter(|| checker.statements_equivalent(black_box(Some(l)), black_box(Some(r))))
        });
    }

    group.finish();
}

fn bench_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicates/pairwise");
    group.sample_size(20);
    let table = field_table(16);
    let checker = EquivalenceChecker::new(&table);

    for count in [32, 128].iter() {
        let fragments: Vec<NamedFragment> = (0..*count)
            .map(|i| NamedFragment {
                name: format!("frag_{}", i),
                body: Fragment::Statement(loop_statement(16, i)),
            })
            .collect();
        group.throughput(Throughput::Elements((count * (count - 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::new("fragments", count), &fragments, |b, fragments| {
            b.iter(|| find_duplicates(&checker, black_box(fragments)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_deep_expressions,
    bench_resolved_statements,
    bench_duplicates
);
criterion_main!(benches);
