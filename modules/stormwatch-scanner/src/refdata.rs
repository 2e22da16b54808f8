//! CSV loaders for the two NWS reference tables.
//!
//! Zone/county correlation file: https://www.weather.gov/gis/ZoneCounty
//! SAME county code file: https://www.weather.gov/source/nwr/SameCode.txt

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use stormwatch_common::StormwatchError;

/// One row of the pipe-delimited zone/county correlation file.
/// The file carries no header; field order is positional.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneRow {
    pub state: String,
    pub zone: String,
    pub cwa: String,
    pub name: String,
    pub state_zone: String,
    pub county: String,
    pub fips: String,
    pub time_zone: String,
    pub fe_area: String,
    pub latitude: String,
    pub longitude: String,
}

/// One row of the comma-delimited SAME county code file (headerless).
#[derive(Debug, Clone, Deserialize)]
pub struct CountyRow {
    pub fips: String,
    pub name: String,
    pub state: String,
}

pub fn load_zones(path: impl AsRef<Path>) -> Result<Vec<ZoneRow>, StormwatchError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| StormwatchError::Reference(format!("open {}: {e}", path.display())))?;
    read_zones(file)
}

pub fn load_counties(path: impl AsRef<Path>) -> Result<Vec<CountyRow>, StormwatchError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| StormwatchError::Reference(format!("open {}: {e}", path.display())))?;
    read_counties(file)
}

pub fn read_zones(input: impl Read) -> Result<Vec<ZoneRow>, StormwatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'|')
        .from_reader(input);
    reader
        .deserialize()
        .collect::<Result<Vec<ZoneRow>, _>>()
        .map_err(|e| StormwatchError::Reference(format!("zone table: {e}")))
}

pub fn read_counties(input: impl Read) -> Result<Vec<CountyRow>, StormwatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .from_reader(input);
    reader
        .deserialize()
        .collect::<Result<Vec<CountyRow>, _>>()
        .map_err(|e| StormwatchError::Reference(format!("county table: {e}")))
}
