use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    pub schema_version: u32,
    pub driver_version: String,
    pub table: i64,
    pub benchmark_set: String,
    pub timeout_secs: u64,
    pub memout_kb: u64,
    pub timestamp_utc: String,
    pub git_sha: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellRecord {
    pub benchmark: String,
    pub category: String,
    pub algorithm: String,
    pub optimization: String,
    pub argv: Vec<String>,

    /// `None` when the child was killed by a signal or never started.
    pub exit_code: Option<i32>,
    pub elapsed_ms: u64,
    pub spawn_error: Option<String>,

    pub input_sha256: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub run: RunMeta,
    pub cells: Vec<CellRecord>,
}
