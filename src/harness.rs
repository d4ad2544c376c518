use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::command::{CommandBuilder, Invocation};
use crate::config::DriverConfig;
use crate::error::DriverResult;
use crate::inventory::sha256_file;
use crate::matrix::ExperimentMatrix;
use crate::schema::CellRecord;

/// What the driver learns about a finished child.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub exit_code: Option<i32>,
    pub elapsed: Duration,
}

/// Runs one invocation to completion.
pub trait Launcher {
    fn launch(&mut self, invocation: &Invocation) -> io::Result<Outcome>;
}

/// Spawns the wrapper and blocks until it exits. The child's stdout is
/// inherited and its stderr is pointed at the same stream.
#[derive(Clone, Debug)]
pub struct SystemLauncher {
    cwd: PathBuf,
}

impl SystemLauncher {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl Launcher for SystemLauncher {
    fn launch(&mut self, invocation: &Invocation) -> io::Result<Outcome> {
        let start = Instant::now();
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&self.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(stderr_to_stdout()?)
            .status()?;

        Ok(Outcome {
            exit_code: status.code(),
            elapsed: start.elapsed(),
        })
    }
}

#[cfg(unix)]
fn stderr_to_stdout() -> io::Result<Stdio> {
    use std::os::fd::AsFd;
    let fd = io::stdout().as_fd().try_clone_to_owned()?;
    Ok(Stdio::from(fd))
}

#[cfg(not(unix))]
fn stderr_to_stdout() -> io::Result<Stdio> {
    Ok(Stdio::inherit())
}

/// Writes the command line instead of running it.
#[derive(Debug)]
pub struct PrintLauncher<W: Write> {
    out: W,
}

impl<W: Write> PrintLauncher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Launcher for PrintLauncher<W> {
    fn launch(&mut self, invocation: &Invocation) -> io::Result<Outcome> {
        writeln!(self.out, "{invocation}")?;
        self.out.flush()?;
        Ok(Outcome::default())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RunOptions {
    /// Print `B:<file>,<algo>+<optim>` before each cell.
    pub markers: bool,
    /// Pass `-o <solutions>/<category>/` to the solver.
    pub write_solutions: bool,
    /// Hash each input file into its cell record.
    pub digest_inputs: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            markers: true,
            write_solutions: false,
            digest_inputs: false,
        }
    }
}

/// The experiment loop.
pub struct Runner<'a> {
    cfg: &'a DriverConfig,
    options: RunOptions,
}

impl<'a> Runner<'a> {
    pub fn new(cfg: &'a DriverConfig, options: RunOptions) -> Self {
        Self { cfg, options }
    }

    /// Run every cell in order, one child at a time.
    ///
    /// The marker is flushed before the child starts, since the child may block
    /// for the full timeout. Launch failures are logged and the loop moves on;
    /// only errors writing to `out` end the run early.
    pub fn run<W: Write, L: Launcher>(
        &self,
        matrix: &ExperimentMatrix,
        out: &mut W,
        launcher: &mut L,
    ) -> DriverResult<Vec<CellRecord>> {
        let builder = CommandBuilder::new(self.cfg).write_solutions(self.options.write_solutions);
        let mut records = Vec::with_capacity(matrix.len());

        for cell in matrix.cells() {
            if self.options.markers {
                writeln!(out, "{}", cell.marker())?;
            }
            out.flush()?;

            let invocation = builder.build(&cell);
            tracing::debug!(command = %invocation, "launching");

            let (outcome, spawn_error) = match launcher.launch(&invocation) {
                Ok(outcome) => {
                    tracing::debug!(
                        benchmark = cell.entry.path,
                        exit_code = ?outcome.exit_code,
                        elapsed_ms = outcome.elapsed.as_millis() as u64,
                        "finished"
                    );
                    (outcome, None)
                }
                Err(e) => {
                    tracing::warn!(
                        program = %invocation.program.display(),
                        benchmark = cell.entry.path,
                        error = %e,
                        "failed to launch"
                    );
                    (Outcome::default(), Some(e.to_string()))
                }
            };

            let input_sha256 = if self.options.digest_inputs {
                sha256_file(&self.cfg.resolve_benchmark(cell.entry.path)).ok()
            } else {
                None
            };

            records.push(CellRecord {
                benchmark: cell.entry.path.to_string(),
                category: cell.entry.category().to_string(),
                algorithm: cell.algorithm.label.to_string(),
                optimization: cell.optimization.label.to_string(),
                argv: invocation.argv(),
                exit_code: outcome.exit_code,
                elapsed_ms: outcome.elapsed.as_millis() as u64,
                spawn_error,
                input_sha256,
            });
        }

        Ok(records)
    }
}
