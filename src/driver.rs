//! Top level of both command-line entry points.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::catalog::BenchmarkSet;
use crate::config::DriverConfig;
use crate::error::{DriverError, DriverResult};
use crate::harness::{Launcher, RunOptions, Runner};
use crate::inventory;
use crate::matrix::ExperimentMatrix;
use crate::schema::{RunMeta, RunRecord};
use crate::variants::{Table, LEGACY_ALGORITHMS, LEGACY_OPTIMIZATIONS};

pub const USAGE: &str = "\
Usage: synduce-bench TABLE_NO [USE_REDUCED_SET]
\tRun the experiments to generate data for table TABLE_NO (1, 2, or 3) or -1 for running tests.
\tIf an additional argument is provided, only a reduced set of benchmarks is run.
\t\tUSE_REDUCED_SET=0 kick-the-tire benchmarks set
\t\tUSE_REDUCED_SET !=0 reduced set of benchmarks
";

/// Header printed by the legacy run. The solver is expected to print the rows.
pub const LEGACY_CSV_HEADER: &str = "folder,file,# refinements, synthesis time";

/// Parsed command line of the main driver.
#[derive(Clone, Debug, Default)]
pub struct Request {
    pub table: Option<i64>,
    pub reduced: Option<i64>,
    /// Check the selected set against the benchmarks tree instead of running.
    pub audit: bool,
    /// Where to write the JSON run record, if anywhere.
    pub record: Option<PathBuf>,
}

/// A valid table together with the matrix it expands to.
#[derive(Clone, Copy, Debug)]
pub struct Selection {
    pub table: Table,
    pub matrix: ExperimentMatrix,
}

impl Selection {
    pub fn resolve(table: Option<i64>, reduced: Option<i64>) -> DriverResult<Self> {
        let n = table.ok_or_else(|| DriverError::Usage("missing TABLE_NO".to_string()))?;
        let table = Table::from_selector(n)
            .ok_or_else(|| DriverError::Usage(format!("unknown table {n}")))?;
        Ok(Self {
            table,
            matrix: ExperimentMatrix::for_table(table, reduced),
        })
    }
}

fn now_utc() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("unix:{secs}")
}

fn git_sha_short() -> Option<String> {
    std::env::var("GIT_SHA")
        .ok()
        .or_else(|| std::env::var("GITHUB_SHA").ok())
        .map(|s| s.chars().take(12).collect())
}

/// Run the main driver.
///
/// A missing or unknown table prints [`USAGE`] to `out` and returns `Ok`
/// without touching `launcher`.
pub fn run<W: Write, L: Launcher>(
    cfg: &DriverConfig,
    request: &Request,
    out: &mut W,
    launcher: &mut L,
) -> DriverResult<()> {
    let selection = match Selection::resolve(request.table, request.reduced) {
        Ok(s) => s,
        Err(DriverError::Usage(reason)) => {
            tracing::debug!(%reason, "printing usage");
            out.write_all(USAGE.as_bytes())?;
            out.flush()?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let Selection { table, matrix } = selection;
    tracing::info!(
        table = table.number(),
        set = matrix.set.as_str(),
        cells = matrix.len(),
        "selected experiment"
    );

    if request.audit {
        let report = inventory::audit(cfg, matrix.set)?;
        report.write_to(out)?;
        out.flush()?;
        return Ok(());
    }

    let options = RunOptions {
        markers: true,
        write_solutions: table.is_test_mode(),
        digest_inputs: request.record.is_some(),
    };
    let cells = Runner::new(cfg, options).run(&matrix, out, launcher)?;

    if let Some(path) = &request.record {
        let record = RunRecord {
            run: RunMeta {
                schema_version: 1,
                driver_version: env!("CARGO_PKG_VERSION").to_string(),
                table: table.number(),
                benchmark_set: matrix.set.as_str().to_string(),
                timeout_secs: cfg.limits.timeout_secs,
                memout_kb: cfg.limits.memout_kb,
                timestamp_utc: now_utc(),
                git_sha: git_sha_short(),
            },
            cells,
        };
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(path, json)?;
        tracing::info!(path = %path.display(), "wrote run record");
    }

    Ok(())
}

/// Run the legacy ReFunS experiment: CSV header, then one run per
/// kick-the-tires benchmark with no markers in between.
pub fn run_legacy<W: Write, L: Launcher>(
    cfg: &DriverConfig,
    out: &mut W,
    launcher: &mut L,
) -> DriverResult<()> {
    let matrix = ExperimentMatrix::new(
        BenchmarkSet::KickTheTires,
        LEGACY_ALGORITHMS,
        LEGACY_OPTIMIZATIONS,
    );
    tracing::info!(cells = matrix.len(), solver = %cfg.solver.display(), "legacy run");

    writeln!(out, "{LEGACY_CSV_HEADER}")?;
    out.flush()?;

    let options = RunOptions {
        markers: false,
        ..RunOptions::default()
    };
    Runner::new(cfg, options).run(&matrix, out, launcher)?;
    Ok(())
}
