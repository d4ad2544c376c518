use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use synduce_bench::config::{DriverConfig, ResourceLimits, MEMOUT_KB, TIMEOUT_SECS};
use synduce_bench::driver::{self, Request, USAGE};
use synduce_bench::harness::{PrintLauncher, SystemLauncher};
use synduce_bench::DriverError;

#[derive(Parser, Debug)]
#[command(name = "synduce-bench")]
#[command(about = "Run the Synduce experiment tables under the timeout wrapper")]
struct Args {
    /// Table to generate data for (1, 2 or 3), or -1 to run the tests.
    #[arg(value_name = "TABLE_NO", allow_negative_numbers = true)]
    table: Option<i64>,

    /// 0 runs the kick-the-tires set; any other value the reduced set of the table.
    #[arg(value_name = "USE_REDUCED_SET", allow_negative_numbers = true)]
    reduced: Option<i64>,

    /// Project root holding `benchmarks/`, `extras/` and `_build/`. Defaults to
    /// the current directory.
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Solver executable, relative to the root.
    #[arg(long, value_name = "PATH")]
    solver: Option<PathBuf>,

    /// Wall-clock limit per run, in seconds.
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    timeout: u64,

    /// Memory limit per run, in KB.
    #[arg(long, default_value_t = MEMOUT_KB)]
    memout: u64,

    /// Print each command instead of running it.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Check the selected benchmark set against the files on disk.
    #[arg(long, default_value_t = false, conflicts_with = "dry_run")]
    audit: bool,

    /// Write a JSON record of the run to this file.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

fn main() -> Result<(), DriverError> {
    synduce_bench::init_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            tracing::warn!("{}", e.render());
            let mut stdout = io::stdout();
            stdout.write_all(USAGE.as_bytes())?;
            stdout.flush()?;
            return Ok(());
        }
    };

    let cwd = std::env::current_dir()?;
    let root = match args.root {
        Some(root) => cwd.join(root),
        None => cwd,
    };
    let mut cfg = DriverConfig::new(&root).with_limits(ResourceLimits {
        timeout_secs: args.timeout,
        memout_kb: args.memout,
    });
    if let Some(solver) = args.solver {
        cfg = cfg.with_solver(solver);
    }

    let request = Request {
        table: args.table,
        reduced: args.reduced,
        audit: args.audit,
        record: args.out,
    };

    let mut stdout = io::stdout();
    if args.dry_run {
        driver::run(&cfg, &request, &mut stdout, &mut PrintLauncher::new(io::stdout()))
    } else {
        driver::run(&cfg, &request, &mut stdout, &mut SystemLauncher::new(&root))
    }
}
