//! Cross-checks a benchmark set against the files actually on disk.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::catalog::BenchmarkSet;
use crate::config::DriverConfig;
use crate::error::DriverResult;

const BENCHMARK_EXTENSIONS: [&str; 2] = ["pmrs", "ml"];

pub fn sha256_file(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(hex32(Sha256::digest(&bytes).into()))
}

fn hex32(d: [u8; 32]) -> String {
    let mut s = String::with_capacity(64);
    for b in d {
        s.push_str(&format!("{:02x}", b));
    }
    s
}

/// Benchmark files under `root`, as sorted `/`-separated relative paths.
fn collect_benchmark_files(root: &Path) -> DriverResult<BTreeSet<String>> {
    let mut out = BTreeSet::new();
    if !root.is_dir() {
        return Ok(out);
    }

    for entry in walkdir::WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_benchmark = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| BENCHMARK_EXTENSIONS.contains(&e));
        if !is_benchmark {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root) {
            let rel: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            out.insert(rel.join("/"));
        }
    }
    Ok(out)
}

#[derive(Debug, Clone, Serialize)]
pub struct PresentFile {
    pub path: &'static str,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryReport {
    pub set: BenchmarkSet,
    pub present: Vec<PresentFile>,
    pub missing: Vec<&'static str>,
    /// Files on disk that no benchmark set mentions.
    pub uncatalogued: Vec<String>,
}

impl InventoryReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "set {}: {} present, {} missing",
            self.set.as_str(),
            self.present.len(),
            self.missing.len()
        )?;
        for f in &self.present {
            writeln!(out, "  ok       {} {}", f.sha256, f.path)?;
        }
        for path in &self.missing {
            writeln!(out, "  missing  {path}")?;
        }
        if !self.uncatalogued.is_empty() {
            writeln!(out, "uncatalogued files: {}", self.uncatalogued.len())?;
            for path in &self.uncatalogued {
                writeln!(out, "  {path}")?;
            }
        }
        Ok(())
    }
}

pub fn audit(cfg: &DriverConfig, set: BenchmarkSet) -> DriverResult<InventoryReport> {
    let dir = cfg.benchmarks_path();
    let on_disk = collect_benchmark_files(&dir)?;

    let mut present = Vec::new();
    let mut missing = Vec::new();
    for entry in set.entries() {
        if on_disk.contains(entry.path) {
            present.push(PresentFile {
                path: entry.path,
                sha256: sha256_file(&dir.join(entry.path))?,
            });
        } else {
            missing.push(entry.path);
        }
    }

    let uncatalogued = on_disk
        .into_iter()
        .filter(|p| !BenchmarkSet::is_catalogued(p))
        .collect();

    Ok(InventoryReport {
        set,
        present,
        missing,
        uncatalogued,
    })
}
