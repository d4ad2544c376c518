//! Legacy experiment: runs the kick-the-tires benchmarks through ReFunS and
//! prints a CSV header ahead of the solver's own output.

use std::io;
use synduce_bench::config::{DriverConfig, LEGACY_SOLVER};
use synduce_bench::driver;
use synduce_bench::harness::SystemLauncher;
use synduce_bench::DriverError;

fn main() -> Result<(), DriverError> {
    synduce_bench::init_tracing();

    let root = std::env::current_dir()?;
    let cfg = DriverConfig::new(&root).with_solver(LEGACY_SOLVER);

    driver::run_legacy(&cfg, &mut io::stdout(), &mut SystemLauncher::new(&root))
}
