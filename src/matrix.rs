use crate::catalog::{BenchmarkEntry, BenchmarkSet};
use crate::variants::{AlgorithmVariant, OptimizationVariant, Table};

/// One run of the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub entry: &'static BenchmarkEntry,
    pub algorithm: &'static AlgorithmVariant,
    pub optimization: &'static OptimizationVariant,
}

impl Cell {
    /// Progress line printed before the cell runs: `B:<file>,<algo>+<optim>`.
    pub fn marker(&self) -> String {
        format!(
            "B:{},{}+{}",
            self.entry.path, self.algorithm.label, self.optimization.label
        )
    }
}

/// Benchmarks × algorithms × optimizations.
#[derive(Clone, Copy, Debug)]
pub struct ExperimentMatrix {
    pub set: BenchmarkSet,
    pub algorithms: &'static [AlgorithmVariant],
    pub optimizations: &'static [OptimizationVariant],
}

impl ExperimentMatrix {
    pub fn new(
        set: BenchmarkSet,
        algorithms: &'static [AlgorithmVariant],
        optimizations: &'static [OptimizationVariant],
    ) -> Self {
        Self {
            set,
            algorithms,
            optimizations,
        }
    }

    pub fn for_table(table: Table, reduced: Option<i64>) -> Self {
        Self::new(
            table.benchmark_set(reduced),
            table.algorithms(),
            table.optimizations(),
        )
    }

    pub fn len(&self) -> usize {
        self.set.len() * self.algorithms.len() * self.optimizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells with benchmarks outermost and optimizations innermost.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.set.entries().iter().flat_map(move |entry| {
            self.algorithms.iter().flat_map(move |algorithm| {
                self.optimizations.iter().map(move |optimization| Cell {
                    entry,
                    algorithm,
                    optimization,
                })
            })
        })
    }
}
