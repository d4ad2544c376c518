//! Argument lists for the wrapped solver.
//!
//! ```text
//! <wrapper> -t <secs> -m <KB> --no-info-on-success \
//!   <solver> <algo flags> <optim flags> -i <abs benchmark path> <extra flags> [-o <dir>/<category>/]
//! ```

use std::fmt;
use std::path::PathBuf;

use crate::config::DriverConfig;
use crate::matrix::Cell;

/// A fully resolved child process invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.to_string_lossy().into_owned());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Value following the last occurrence of `flag`.
    pub fn flag_value(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .rposition(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let argv = self.argv();
        let mut first = true;
        for arg in &argv {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            f.write_str(&shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Split a flag string the way a shell would split unquoted words.
pub fn split_flags(flags: &str) -> impl Iterator<Item = String> + '_ {
    flags.split_ascii_whitespace().map(str::to_string)
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| !c.is_whitespace() && !matches!(c, '\'' | '"' | '\\' | '$' | '`'));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Builds invocations for one run configuration.
#[derive(Clone, Debug)]
pub struct CommandBuilder<'a> {
    cfg: &'a DriverConfig,
    write_solutions: bool,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(cfg: &'a DriverConfig) -> Self {
        Self {
            cfg,
            write_solutions: false,
        }
    }

    /// Append `-o <solutions>/<category>/` to every invocation.
    pub fn write_solutions(mut self, enabled: bool) -> Self {
        self.write_solutions = enabled;
        self
    }

    /// `-o` argument for a category, with a trailing separator.
    pub fn solutions_arg(&self, category: &str) -> String {
        format!("{}/{}/", self.cfg.solutions_dir.display(), category)
    }

    pub fn build(&self, cell: &Cell) -> Invocation {
        let limits = self.cfg.limits;
        let mut args = vec![
            "-t".to_string(),
            limits.timeout_secs.to_string(),
            "-m".to_string(),
            limits.memout_kb.to_string(),
            "--no-info-on-success".to_string(),
            self.cfg.solver_path().to_string_lossy().into_owned(),
        ];
        args.extend(split_flags(cell.algorithm.flags));
        args.extend(split_flags(cell.optimization.flags));
        args.push("-i".to_string());
        args.push(
            self.cfg
                .resolve_benchmark(cell.entry.path)
                .to_string_lossy()
                .into_owned(),
        );
        args.extend(split_flags(cell.entry.extra_flags));
        if self.write_solutions {
            args.push("-o".to_string());
            args.push(self.solutions_arg(cell.entry.category()));
        }

        Invocation {
            program: self.cfg.wrapper_path(),
            args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::ExperimentMatrix;
    use crate::variants::Table;
    use std::path::Path;

    fn cfg() -> DriverConfig {
        DriverConfig::new("/work/synduce")
    }

    #[test]
    fn test_argument_order() {
        let cfg = cfg();
        let m = ExperimentMatrix::for_table(Table::Three, Some(1));
        let cell = m.cells().nth(4).unwrap();
        assert_eq!(cell.optimization.label, "off");

        let inv = CommandBuilder::new(&cfg).build(&cell);
        assert_eq!(inv.program, Path::new("/work/synduce/extras/timeout/timeout"));
        assert_eq!(
            inv.args,
            [
                "-t",
                "240",
                "-m",
                "8192000",
                "--no-info-on-success",
                "/work/synduce/_build/default/bin/Synduce.exe",
                "--no-gropt",
                "-st",
                "--no-syndef",
                "--no-gropt",
                "-i",
                "/work/synduce/benchmarks/list/sumhom.pmrs",
            ]
        );
    }

    #[test]
    fn test_extra_flags_follow_input() {
        let cfg = cfg();
        let m = ExperimentMatrix::for_table(Table::Two, Some(1));
        let cell = m
            .cells()
            .find(|c| c.entry.path == "treepaths/leftmostodd.pmrs")
            .unwrap();
        let inv = CommandBuilder::new(&cfg).build(&cell);
        let tail: Vec<&str> = inv.args.iter().rev().take(3).map(String::as_str).collect();
        assert_eq!(tail, ["6", "-b", "/work/synduce/benchmarks/treepaths/leftmostodd.pmrs"]);
        assert!(inv.flag_value("-o").is_none());
    }

    #[test]
    fn test_solutions_dir_uses_category() {
        let cfg = cfg();
        let m = ExperimentMatrix::for_table(Table::Test, Some(0));
        let builder = CommandBuilder::new(&cfg).write_solutions(true);
        for cell in m.cells() {
            let inv = builder.build(&cell);
            let out = inv.flag_value("-o").unwrap();
            assert_eq!(
                Path::new(out).file_name().and_then(|s| s.to_str()),
                Some(cell.entry.category())
            );
            assert!(out.ends_with('/'));
        }
        assert_eq!(builder.solutions_arg("list"), "extras/solutions/list/");
    }

    #[test]
    fn test_display_quotes_only_when_needed() {
        let inv = Invocation {
            program: PathBuf::from("/bin/timeout"),
            args: vec!["-i".into(), "/tmp/my file.pmrs".into(), "it's".into()],
        };
        assert_eq!(
            inv.to_string(),
            r"/bin/timeout -i '/tmp/my file.pmrs' 'it'\''s'"
        );
    }

    #[test]
    fn test_empty_flags_add_nothing() {
        assert_eq!(split_flags("").count(), 0);
        assert_eq!(split_flags("  --acegis   --no-gropt ").collect::<Vec<_>>(), ["--acegis", "--no-gropt"]);
    }
}
