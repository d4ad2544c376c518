use serde::Serialize;

use crate::catalog::BenchmarkSet;

/// A solving strategy and the solver flags selecting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AlgorithmVariant {
    pub label: &'static str,
    pub flags: &'static str,
}

/// An optimization setting and the solver flags selecting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OptimizationVariant {
    pub label: &'static str,
    pub flags: &'static str,
}

const REQUATION_TEST: AlgorithmVariant = AlgorithmVariant {
    label: "requation",
    flags: "",
};
const REQUATION: AlgorithmVariant = AlgorithmVariant {
    label: "requation",
    flags: "--no-gropt",
};
const ACEGIS: AlgorithmVariant = AlgorithmVariant {
    label: "acegis",
    flags: "--acegis --no-gropt",
};
const CCEGIS: AlgorithmVariant = AlgorithmVariant {
    label: "ccegis",
    flags: "--ccegis --no-gropt",
};

const ALL_ON: OptimizationVariant = OptimizationVariant {
    label: "all",
    flags: "",
};

static TEST_ALGORITHMS: &[AlgorithmVariant] = &[REQUATION_TEST];
static TABLE1_ALGORITHMS: &[AlgorithmVariant] = &[REQUATION, ACEGIS];
static TABLE2_ALGORITHMS: &[AlgorithmVariant] = &[REQUATION, ACEGIS, CCEGIS];
static TABLE3_ALGORITHMS: &[AlgorithmVariant] = &[REQUATION, ACEGIS];

static DEFAULT_OPTIMIZATIONS: &[OptimizationVariant] = &[ALL_ON];
static TABLE3_OPTIMIZATIONS: &[OptimizationVariant] = &[
    ALL_ON,
    OptimizationVariant {
        label: "ini",
        flags: "-c --no-gropt",
    },
    OptimizationVariant {
        label: "st",
        flags: "-st --no-gropt",
    },
    OptimizationVariant {
        label: "d",
        flags: "--no-syndef --no-gropt",
    },
    OptimizationVariant {
        label: "off",
        flags: "-st --no-syndef --no-gropt",
    },
];

/// Table selector accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Table {
    /// `-1`: run the solver once per benchmark and keep its solutions.
    Test,
    /// Synduce against the abstract CEGIS baseline.
    One,
    /// Table 1 plus concrete CEGIS.
    Two,
    /// Table 1 algorithms with each optimization switched off in turn.
    Three,
}

impl Table {
    pub fn from_selector(n: i64) -> Option<Self> {
        match n {
            -1 => Some(Table::Test),
            1 => Some(Table::One),
            2 => Some(Table::Two),
            3 => Some(Table::Three),
            _ => None,
        }
    }

    pub fn number(&self) -> i64 {
        match self {
            Table::Test => -1,
            Table::One => 1,
            Table::Two => 2,
            Table::Three => 3,
        }
    }

    /// Selectors `<= 0` run in test mode, which also writes solutions.
    pub fn is_test_mode(&self) -> bool {
        self.number() <= 0
    }

    pub fn algorithms(&self) -> &'static [AlgorithmVariant] {
        match self {
            Table::Test => TEST_ALGORITHMS,
            Table::One => TABLE1_ALGORITHMS,
            Table::Two => TABLE2_ALGORITHMS,
            Table::Three => TABLE3_ALGORITHMS,
        }
    }

    pub fn optimizations(&self) -> &'static [OptimizationVariant] {
        match self {
            Table::Three => TABLE3_OPTIMIZATIONS,
            _ => DEFAULT_OPTIMIZATIONS,
        }
    }

    /// Pick the benchmark list from the optional reduced-set flag.
    ///
    /// `None` runs everything, `Some(0)` the kick-the-tires list, any other
    /// value the reduced list of this table (kick-the-tires if it has none).
    pub fn benchmark_set(&self, reduced: Option<i64>) -> BenchmarkSet {
        match reduced {
            None => BenchmarkSet::Full,
            Some(0) => BenchmarkSet::KickTheTires,
            Some(_) => match self {
                Table::Two => BenchmarkSet::ReducedTable2,
                Table::Three => BenchmarkSet::ReducedTable3,
                Table::Test | Table::One => BenchmarkSet::KickTheTires,
            },
        }
    }
}

/// The single configuration used by the legacy ReFunS run.
pub static LEGACY_ALGORITHMS: &[AlgorithmVariant] = &[AlgorithmVariant {
    label: "refuns",
    flags: "",
}];
pub static LEGACY_OPTIMIZATIONS: &[OptimizationVariant] = &[ALL_ON];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_round_trip() {
        for n in [-1, 1, 2, 3] {
            assert_eq!(Table::from_selector(n).map(|t| t.number()), Some(n));
        }
        for n in [-2, 0, 4, 42] {
            assert!(Table::from_selector(n).is_none());
        }
    }

    #[test]
    fn test_test_mode_only_for_negative() {
        assert!(Table::Test.is_test_mode());
        assert!(!Table::One.is_test_mode());
        assert!(!Table::Three.is_test_mode());
    }

    #[test]
    fn test_variant_counts() {
        assert_eq!(Table::Test.algorithms().len(), 1);
        assert_eq!(Table::Test.algorithms()[0].label, "requation");
        assert_eq!(Table::Test.algorithms()[0].flags, "");
        assert_eq!(Table::One.algorithms().len(), 2);
        assert_eq!(Table::Two.algorithms().len(), 3);
        assert_eq!(Table::Two.algorithms()[2].flags, "--ccegis --no-gropt");
        assert_eq!(Table::Three.algorithms().len(), 2);

        assert_eq!(Table::One.optimizations().len(), 1);
        assert_eq!(Table::Three.optimizations().len(), 5);
        let labels: Vec<_> = Table::Three.optimizations().iter().map(|o| o.label).collect();
        assert_eq!(labels, ["all", "ini", "st", "d", "off"]);
    }

    #[test]
    fn test_benchmark_set_resolution() {
        assert_eq!(Table::Two.benchmark_set(None), BenchmarkSet::Full);
        assert_eq!(Table::Two.benchmark_set(Some(0)), BenchmarkSet::KickTheTires);
        assert_eq!(Table::Three.benchmark_set(Some(0)), BenchmarkSet::KickTheTires);
        assert_eq!(Table::Two.benchmark_set(Some(1)), BenchmarkSet::ReducedTable2);
        assert_eq!(Table::Three.benchmark_set(Some(-7)), BenchmarkSet::ReducedTable3);
        assert_eq!(Table::One.benchmark_set(Some(5)), BenchmarkSet::KickTheTires);
        assert_eq!(Table::Test.benchmark_set(Some(1)), BenchmarkSet::KickTheTires);
    }
}
