use serde::Serialize;

/// Identical (source, target) pairs found in more than one entry.
#[derive(Debug, Serialize, PartialEq)]
pub struct DuplicatePair {
    pub source: String,
    pub target: String,
    pub ids: Vec<u32>,
}

/// A term shared by several entries, with what it is paired with in each.
#[derive(Debug, Serialize, PartialEq)]
pub struct SharedTerm {
    pub term: String,
    pub variants: Vec<TermVariant>,
    pub distinct: usize, // Number of distinct counterparts
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TermVariant {
    pub counterpart: String,
    pub id: u32,
}

#[derive(Debug, Default, Serialize)]
pub struct DuplicateReport {
    pub pairs: Vec<DuplicatePair>,
    pub sources: Vec<SharedTerm>,
    pub targets: Vec<SharedTerm>,
    pub scanned: usize,
}

impl DuplicateReport {
    pub fn is_clean(&self) -> bool {
        self.pairs.is_empty() && self.sources.is_empty() && self.targets.is_empty()
    }
}
