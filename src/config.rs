//! Driver configuration: where things live relative to the project root and
//! which limits the timeout wrapper enforces.

use std::path::PathBuf;

/// Wall-clock limit per solver run, in seconds.
pub const TIMEOUT_SECS: u64 = 240;

/// Memory limit per solver run, in KB (8000 * 1024). Older notes describe this
/// as 4GB; the numeric value is what the wrapper receives.
pub const MEMOUT_KB: u64 = 8000 * (1 << 10);

pub const DEFAULT_WRAPPER: &str = "extras/timeout/timeout";
pub const DEFAULT_SOLVER: &str = "_build/default/bin/Synduce.exe";
pub const LEGACY_SOLVER: &str = "_build/default/bin/ReFunS.exe";
pub const DEFAULT_BENCHMARKS_DIR: &str = "benchmarks";
pub const DEFAULT_SOLUTIONS_DIR: &str = "extras/solutions";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceLimits {
    pub timeout_secs: u64,
    pub memout_kb: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            timeout_secs: TIMEOUT_SECS,
            memout_kb: MEMOUT_KB,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DriverConfig {
    /// Project root; every other path is resolved against it.
    pub root: PathBuf,
    pub wrapper: PathBuf,
    pub solver: PathBuf,
    pub benchmarks_dir: PathBuf,
    /// Kept relative so `-o` arguments read like `extras/solutions/list/`.
    pub solutions_dir: PathBuf,
    pub limits: ResourceLimits,
}

impl DriverConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            wrapper: PathBuf::from(DEFAULT_WRAPPER),
            solver: PathBuf::from(DEFAULT_SOLVER),
            benchmarks_dir: PathBuf::from(DEFAULT_BENCHMARKS_DIR),
            solutions_dir: PathBuf::from(DEFAULT_SOLUTIONS_DIR),
            limits: ResourceLimits::default(),
        }
    }

    pub fn with_solver(mut self, solver: impl Into<PathBuf>) -> Self {
        self.solver = solver.into();
        self
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn wrapper_path(&self) -> PathBuf {
        self.root.join(&self.wrapper)
    }

    pub fn solver_path(&self) -> PathBuf {
        self.root.join(&self.solver)
    }

    pub fn benchmarks_path(&self) -> PathBuf {
        self.root.join(&self.benchmarks_dir)
    }

    /// Absolute path of a benchmark file. Symlinks are resolved when the file
    /// exists; otherwise the joined path is returned as is.
    pub fn resolve_benchmark(&self, relative: &str) -> PathBuf {
        let joined = self.benchmarks_path().join(relative);
        std::fs::canonicalize(&joined).unwrap_or(joined)
    }
}
