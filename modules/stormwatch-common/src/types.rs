use serde::{Deserialize, Serialize};

// --- Reference records ---

/// One NWS forecast zone, keyed by its composite `state_zone` field
/// (two-letter state + `Z` + three-digit zone, e.g. "ALZ001").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub key: String,
    pub name: String,
    pub state: String,
}

/// One county from the SAME code table, keyed by its FIPS code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyRecord {
    pub key: String,
    pub name: String,
    pub state: String,
}

// --- Alert input ---

/// One `cap:geocode` element: the ordered valueName/value pairs as they
/// appear in the feed. The UGC kind label and code string sit at index 1
/// (the feed carries a FIPS6 pair first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeBlock {
    pub value_names: Vec<String>,
    pub values: Vec<String>,
}

/// One alert entry from the hazard feed. Other CAP fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertItem {
    pub summary: String,
    pub link: String,
    pub geocode: Vec<GeocodeBlock>,
}

// --- Resolution output ---

/// A human-readable affected area. Either a reference-table projection or
/// a synthesized placeholder preserving the unresolved code in its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRegion {
    pub name: String,
    pub state: String,
}

/// The record handed to a report sink for each flagged alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertReport {
    pub terms: Vec<String>,
    pub summary: String,
    pub regions: Vec<ResolvedRegion>,
    pub link: String,
}

// --- Run accounting ---

/// Counters for one pass over the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub alerts_seen: usize,
    pub flagged: usize,
    pub report_failures: usize,
}

impl std::fmt::Display for ScanStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} alerts seen, {} flagged, {} report failures",
            self.alerts_seen, self.flagged, self.report_failures
        )
    }
}
