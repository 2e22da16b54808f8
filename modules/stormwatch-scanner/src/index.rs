use std::collections::HashMap;

use stormwatch_common::{CountyRecord, ZoneRecord};

use crate::refdata::{CountyRow, ZoneRow};

/// Lookup tables for zone and county reference records.
/// Built once at startup, read-only afterwards; share behind an Arc.
#[derive(Debug, Default)]
pub struct ReferenceIndex {
    zones: HashMap<String, ZoneRecord>,
    counties: HashMap<String, CountyRecord>,
}

/// Zero-pad a county FIPS code to 5 characters, but only when the raw
/// value is exactly 4 characters long. Any other length passes through.
fn pad_fips(fips: &str) -> String {
    if fips.len() == 4 {
        format!("0{fips}")
    } else {
        fips.to_string()
    }
}

impl ReferenceIndex {
    /// Fold raw reference rows into the two keyed tables.
    /// Duplicate keys: last write wins.
    pub fn build(zone_rows: Vec<ZoneRow>, county_rows: Vec<CountyRow>) -> Self {
        let mut zones = HashMap::new();
        for row in zone_rows {
            zones.insert(
                row.state_zone.clone(),
                ZoneRecord {
                    key: row.state_zone,
                    name: row.name,
                    state: row.state,
                },
            );
        }

        let mut counties = HashMap::new();
        for row in county_rows {
            let key = pad_fips(&row.fips);
            counties.insert(
                key.clone(),
                CountyRecord {
                    key,
                    name: row.name,
                    state: row.state,
                },
            );
        }

        Self { zones, counties }
    }

    pub fn zone(&self, key: &str) -> Option<&ZoneRecord> {
        self.zones.get(key)
    }

    pub fn county(&self, key: &str) -> Option<&CountyRecord> {
        self.counties.get(key)
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn county_count(&self) -> usize {
        self.counties.len()
    }
}
