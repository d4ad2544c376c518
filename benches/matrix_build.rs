//! Matrix expansion and command construction
//!
//! The driver rebuilds every argument list before spawning, so these stay
//! well below the cost of a single process launch.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use synduce_bench::command::CommandBuilder;
use synduce_bench::config::DriverConfig;
use synduce_bench::matrix::ExperimentMatrix;
use synduce_bench::variants::Table;

fn bench_matrix_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_cells");

    for table in [Table::Test, Table::One, Table::Two, Table::Three] {
        let matrix = ExperimentMatrix::for_table(table, None);
        group.bench_with_input(
            BenchmarkId::from_parameter(table.number()),
            &matrix,
            |bencher, m| bencher.iter(|| black_box(m).cells().map(|cell| cell.marker()).count()),
        );
    }

    group.finish();
}

fn bench_command_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("command_build");
    let cfg = DriverConfig::new("/srv/synduce");
    let matrix = ExperimentMatrix::for_table(Table::Three, None);

    group.bench_function("table3_full", |bencher| {
        let builder = CommandBuilder::new(&cfg);
        bencher.iter(|| {
            for cell in matrix.cells() {
                black_box(builder.build(black_box(&cell)));
            }
        })
    });

    group.bench_function("table3_full_rendered", |bencher| {
        let builder = CommandBuilder::new(&cfg).write_solutions(true);
        bencher.iter(|| {
            for cell in matrix.cells() {
                black_box(builder.build(&cell).to_string());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_matrix_cells, bench_command_build);
criterion_main!(benches);
