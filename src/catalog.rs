//! Static benchmark tables.
//!
//! Every set is an ordered slice of [`BenchmarkEntry`]; the order is the order in
//! which cells are run and printed, so it must not be sorted or deduplicated.

use serde::Serialize;

/// One benchmark input: a path relative to the benchmarks directory plus the
/// extra solver flags that file needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BenchmarkEntry {
    pub path: &'static str,
    pub extra_flags: &'static str,
}

impl BenchmarkEntry {
    const fn new(path: &'static str, extra_flags: &'static str) -> Self {
        Self { path, extra_flags }
    }

    /// Top-level folder of the benchmark, e.g. `list` for `list/sumhom.pmrs`.
    pub fn category(&self) -> &'static str {
        self.path.split('/').next().unwrap_or(self.path)
    }

    /// File name without the category, e.g. `sumhom.pmrs`.
    pub fn file_name(&self) -> &'static str {
        self.path.rsplit('/').next().unwrap_or(self.path)
    }
}

/// Named benchmark lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkSet {
    KickTheTires,
    ReducedTable2,
    ReducedTable3,
    Full,
}

impl BenchmarkSet {
    pub const ALL: [BenchmarkSet; 4] = [
        BenchmarkSet::KickTheTires,
        BenchmarkSet::ReducedTable2,
        BenchmarkSet::ReducedTable3,
        BenchmarkSet::Full,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BenchmarkSet::KickTheTires => "kick_the_tires",
            BenchmarkSet::ReducedTable2 => "reduced_table2",
            BenchmarkSet::ReducedTable3 => "reduced_table3",
            BenchmarkSet::Full => "full",
        }
    }

    pub fn entries(&self) -> &'static [BenchmarkEntry] {
        match self {
            BenchmarkSet::KickTheTires => KICK_THE_TIRES,
            BenchmarkSet::ReducedTable2 => REDUCED_TABLE2,
            BenchmarkSet::ReducedTable3 => REDUCED_TABLE3,
            BenchmarkSet::Full => FULL,
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// True if any set references `path`.
    pub fn is_catalogued(path: &str) -> bool {
        Self::ALL
            .iter()
            .any(|set| set.entries().iter().any(|e| e.path == path))
    }
}

pub static KICK_THE_TIRES: &[BenchmarkEntry] = &[
    BenchmarkEntry::new("list/sumhom.pmrs", ""),
    BenchmarkEntry::new("ptree/sum.pmrs", ""),
    BenchmarkEntry::new("tree/sumtree.pmrs", ""),
    BenchmarkEntry::new("tailopt/sum.pmrs", ""),
    BenchmarkEntry::new("treepaths/sum.pmrs", ""),
    BenchmarkEntry::new("treepaths/height.pmrs", ""),
    BenchmarkEntry::new("treepaths/maxPathWeight.pmrs", ""),
    BenchmarkEntry::new("ptree/mul.pmrs", ""),
    BenchmarkEntry::new("tree/maxtree.pmrs", ""),
    BenchmarkEntry::new("tree/min.pmrs", ""),
    BenchmarkEntry::new("tree/maxtree2.pmrs", ""),
    BenchmarkEntry::new("list/sumodds.pmrs", ""),
    BenchmarkEntry::new("list/prodhom.pmrs", ""),
    BenchmarkEntry::new("list/polyhom.pmrs", ""),
    BenchmarkEntry::new("list/hamming.pmrs", ""),
    BenchmarkEntry::new("list/sumevens.pmrs", ""),
    BenchmarkEntry::new("list/lenhom.pmrs", ""),
    BenchmarkEntry::new("list/last.pmrs", ""),
];

pub static REDUCED_TABLE2: &[BenchmarkEntry] = &[
    BenchmarkEntry::new("list/sumhom.pmrs", ""),
    BenchmarkEntry::new("ptree/sum.pmrs", ""),
    BenchmarkEntry::new("tree/sumtree.pmrs", ""),
    BenchmarkEntry::new("tailopt/sum.pmrs", ""),
    BenchmarkEntry::new("tailopt/mps.pmrs", ""),
    BenchmarkEntry::new("treepaths/sum.pmrs", ""),
    BenchmarkEntry::new("treepaths/height.pmrs", ""),
    BenchmarkEntry::new("treepaths/leftmostodd.pmrs", "-b 6"),
    BenchmarkEntry::new("ptree/mul.pmrs", ""),
    BenchmarkEntry::new("tree/maxtree.pmrs", ""),
    BenchmarkEntry::new("tree/min.pmrs", ""),
    BenchmarkEntry::new("tree/poly.pmrs", ""),
    BenchmarkEntry::new("list/sumevens.pmrs", ""),
    BenchmarkEntry::new("list/polyhom.pmrs", ""),
    BenchmarkEntry::new("list/minhom.pmrs", ""),
    BenchmarkEntry::new("list/last.pmrs", ""),
    BenchmarkEntry::new("list/msshom.pmrs", ""),
    BenchmarkEntry::new("tree/sorted.pmrs", "-t"),
    BenchmarkEntry::new("tree/mips.pmrs", ""),
];

pub static REDUCED_TABLE3: &[BenchmarkEntry] = &[
    BenchmarkEntry::new("list/sumhom.pmrs", ""),
    BenchmarkEntry::new("ptree/sum.pmrs", ""),
    BenchmarkEntry::new("tree/sumtree.pmrs", ""),
    BenchmarkEntry::new("tailopt/sum.pmrs", ""),
    BenchmarkEntry::new("tailopt/mps.pmrs", ""),
    BenchmarkEntry::new("treepaths/sum.pmrs", ""),
    BenchmarkEntry::new("treepaths/height.pmrs", ""),
    BenchmarkEntry::new("ptree/mul.pmrs", ""),
    BenchmarkEntry::new("tree/maxtree.pmrs", ""),
    BenchmarkEntry::new("tree/min.pmrs", ""),
    BenchmarkEntry::new("list/polyhom.pmrs", ""),
    BenchmarkEntry::new("list/minhom.pmrs", ""),
    BenchmarkEntry::new("list/mtshom.pmrs", ""),
    BenchmarkEntry::new("tree/mips.pmrs", ""),
];

pub static FULL: &[BenchmarkEntry] = &[
    BenchmarkEntry::new("ptree/sum.pmrs", ""),
    BenchmarkEntry::new("tree/sumtree.pmrs", ""),
    BenchmarkEntry::new("tailopt/sum.pmrs", ""),
    BenchmarkEntry::new("tailopt/mts.pmrs", ""),
    BenchmarkEntry::new("tailopt/mps.pmrs", ""),
    BenchmarkEntry::new("combine/mts.pmrs", ""),
    BenchmarkEntry::new("combine/mts_and_mps.pmrs", ""),
    BenchmarkEntry::new("treepaths/sum.pmrs", ""),
    BenchmarkEntry::new("treepaths/height.pmrs", ""),
    BenchmarkEntry::new("treepaths/mips.pmrs", ""),
    BenchmarkEntry::new("treepaths/leftmostodd.pmrs", "-b 6"),
    BenchmarkEntry::new("treepaths/maxPathWeight.pmrs", ""),
    BenchmarkEntry::new("treepaths/maxPathWeight2.pmrs", ""),
    BenchmarkEntry::new("ptree/mul.pmrs", ""),
    BenchmarkEntry::new("ptree/maxheads.pmrs", ""),
    BenchmarkEntry::new("ptree/maxlast.pmrs", ""),
    BenchmarkEntry::new("ptree/maxsum.pmrs", ""),
    BenchmarkEntry::new("tree/maxtree.pmrs", ""),
    BenchmarkEntry::new("tree/min.pmrs", ""),
    BenchmarkEntry::new("tree/minmax.pmrs", ""),
    BenchmarkEntry::new("tree/maxtree2.pmrs", ""),
    BenchmarkEntry::new("tree/poly.pmrs", ""),
    BenchmarkEntry::new("tree/maxPathWeight.pmrs", ""),
    BenchmarkEntry::new("list/sumhom.pmrs", ""),
    BenchmarkEntry::new("list/sumevens.pmrs", ""),
    BenchmarkEntry::new("list/lenhom.pmrs", ""),
    BenchmarkEntry::new("list/prodhom.pmrs", ""),
    BenchmarkEntry::new("list/polyhom.pmrs", ""),
    BenchmarkEntry::new("list/hamming.pmrs", ""),
    BenchmarkEntry::new("list/maxcount.pmrs", ""),
    BenchmarkEntry::new("list/minhom.pmrs", ""),
    BenchmarkEntry::new("list/last.pmrs", ""),
    BenchmarkEntry::new("list/mtshom.pmrs", ""),
    BenchmarkEntry::new("list/mpshom.pmrs", ""),
    BenchmarkEntry::new("list/msshom.pmrs", ""),
    BenchmarkEntry::new("list/search.pmrs", ""),
    BenchmarkEntry::new("list/line_of_sight.pmrs", ""),
    BenchmarkEntry::new("list/mts_and_mps_hom.pmrs", ""),
    BenchmarkEntry::new("list/issorted.pmrs", "-t"),
    BenchmarkEntry::new("tree/sorted.pmrs", "-t"),
    BenchmarkEntry::new("tree/mips.pmrs", ""),
    BenchmarkEntry::new("tree/mits.pmrs", ""),
    BenchmarkEntry::new("tree/mpps.pmrs", ""),
    // Extra benchmarks
    BenchmarkEntry::new("list_to_tree/search.pmrs", ""),
    BenchmarkEntry::new("list_to_tree/search_v2.pmrs", ""),
    BenchmarkEntry::new("list_to_tree/search_v3.pmrs", ""),
    BenchmarkEntry::new("list_to_tree/mls.pmrs", ""),
    BenchmarkEntry::new("list/maxhom.pmrs", ""),
    BenchmarkEntry::new("list/sumodds.pmrs", ""),
    BenchmarkEntry::new("list/sumgt.ml", ""),
    BenchmarkEntry::new("list/sndminhom.pmrs", ""),
    BenchmarkEntry::new("list/mincount.pmrs", ""),
];
