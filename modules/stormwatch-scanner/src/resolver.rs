use std::sync::Arc;

use tracing::warn;

use stormwatch_common::{state_fips, GeocodeBlock, ResolvedRegion};

use crate::index::ReferenceIndex;

/// The validated shape of an alert's geocode payload.
/// Classified up front so the resolver never probes nested fields inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodeShape {
    Unsupported,
    Ugc(Vec<String>),
}

/// Classify an alert's raw geocode blocks.
///
/// Exactly one block is supported, and its second valueName/value pair
/// must be the UGC one (the feed puts a FIPS6 pair first). A block count
/// other than one is skipped without a diagnostic; a non-UGC label is
/// logged with the alert link.
pub fn classify_geocode(geocode: &[GeocodeBlock], alert_link: &str) -> GeocodeShape {
    if geocode.len() != 1 {
        return GeocodeShape::Unsupported;
    }

    let block = &geocode[0];
    let kind = block.value_names.get(1).map(String::as_str).unwrap_or("");
    if kind != "UGC" {
        warn!(
            kind,
            link = alert_link,
            "Unrecognized geocoding type, skipping affected regions"
        );
        return GeocodeShape::Unsupported;
    }

    let codes = block
        .values
        .get(1)
        .map(|v| v.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    GeocodeShape::Ugc(codes)
}

/// Resolves encoded UGC region codes into human-readable areas.
pub struct RegionResolver {
    index: Arc<ReferenceIndex>,
}

impl RegionResolver {
    pub fn new(index: Arc<ReferenceIndex>) -> Self {
        Self { index }
    }

    /// Resolve one alert's geocode payload, preserving input code order.
    /// Every recognized code yields a region, real or placeholder; codes
    /// with an unrecognized kind character contribute nothing.
    pub fn resolve(&self, geocode: &[GeocodeBlock], alert_link: &str) -> Vec<ResolvedRegion> {
        let codes = match classify_geocode(geocode, alert_link) {
            GeocodeShape::Ugc(codes) => codes,
            GeocodeShape::Unsupported => return Vec::new(),
        };

        let mut regions = Vec::new();
        for code in &codes {
            match code.as_bytes().get(2) {
                Some(b'Z') => regions.push(self.resolve_zone(code)),
                Some(b'C') => regions.push(self.resolve_county(code)),
                _ => {
                    warn!(
                        code,
                        link = alert_link,
                        "UGC region code not recognized, third character should be \
                         Z (zone) or C (county); skipping in affected areas"
                    );
                }
            }
        }
        regions
    }

    fn resolve_zone(&self, code: &str) -> ResolvedRegion {
        match self.index.zone(code) {
            Some(record) => ResolvedRegion {
                name: record.name.clone(),
                state: record.state.clone(),
            },
            None => placeholder("Zone", code),
        }
    }

    fn resolve_county(&self, code: &str) -> ResolvedRegion {
        let state_abbrev = code.get(..2).unwrap_or(code);
        let county_digits = code.get(3..).unwrap_or("");

        // Derived key is "0" + 2-digit state prefix + 3-digit county
        // number: 6 characters against a table indexed by 5-character
        // padded FIPS codes. Misses fall through to the placeholder.
        let record = match state_fips(state_abbrev) {
            Ok(prefix) => {
                let key = format!("0{prefix}{county_digits}");
                self.index.county(&key)
            }
            Err(e) => {
                warn!(code, error = %e, "Cannot derive county FIPS key");
                None
            }
        };

        match record {
            Some(record) => ResolvedRegion {
                name: record.name.clone(),
                state: record.state.clone(),
            },
            None => placeholder("County", code),
        }
    }
}

/// Synthesized region for a code with no reference record. The original
/// code is preserved in the name; the state is the code's first two
/// characters.
fn placeholder(kind: &str, code: &str) -> ResolvedRegion {
    ResolvedRegion {
        name: format!("Unknown {kind} ({code})"),
        state: code.get(..2).unwrap_or(code).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refdata::{CountyRow, ZoneRow};

    fn test_index() -> Arc<ReferenceIndex> {
        let zone = ZoneRow {
            state: "AL".to_string(),
            zone: "001".to_string(),
            cwa: "BMX".to_string(),
            name: "Central Alabama".to_string(),
            state_zone: "ALZ001".to_string(),
            county: String::new(),
            fips: String::new(),
            time_zone: "C".to_string(),
            fe_area: String::new(),
            latitude: "0.0".to_string(),
            longitude: "0.0".to_string(),
        };
        // Stored under the padded 5-character key "01001" — which the
        // resolver's 6-character derived key can never hit.
        let county = CountyRow {
            fips: "1001".to_string(),
            name: "Autauga".to_string(),
            state: "AL".to_string(),
        };
        Arc::new(ReferenceIndex::build(vec![zone], vec![county]))
    }

    fn ugc_geocode(value: &str) -> Vec<GeocodeBlock> {
        vec![GeocodeBlock {
            value_names: vec!["FIPS6".to_string(), "UGC".to_string()],
            values: vec!["006015".to_string(), value.to_string()],
        }]
    }

    #[test]
    fn test_known_zone_returns_stored_record() {
        let resolver = RegionResolver::new(test_index());
        let regions = resolver.resolve(&ugc_geocode("ALZ001"), "http://example.test/a");
        assert_eq!(
            regions,
            vec![ResolvedRegion {
                name: "Central Alabama".to_string(),
                state: "AL".to_string(),
            }]
        );
    }

    #[test]
    fn test_unknown_zone_gets_placeholder() {
        let resolver = RegionResolver::new(test_index());
        let regions = resolver.resolve(&ugc_geocode("TXZ123"), "http://example.test/a");
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].name, "Unknown Zone (TXZ123)");
        assert_eq!(regions[0].state, "TX");
    }

    #[test]
    fn test_county_code_misses_padded_key_and_gets_placeholder() {
        // The table holds Autauga under "01001", but the derived key for
        // ALC001 is "001001". The miss is the pinned behavior.
        let resolver = RegionResolver::new(test_index());
        let regions = resolver.resolve(&ugc_geocode("ALC001"), "http://example.test/a");
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].name, "Unknown County (ALC001)");
        assert_eq!(regions[0].state, "AL");
    }

    #[test]
    fn test_county_with_unknown_state_gets_placeholder() {
        let resolver = RegionResolver::new(test_index());
        let regions = resolver.resolve(&ugc_geocode("XXC001"), "http://example.test/a");
        assert_eq!(regions[0].name, "Unknown County (XXC001)");
        assert_eq!(regions[0].state, "XX");
    }

    #[test]
    fn test_unrecognized_kind_skipped_and_resolution_continues() {
        let resolver = RegionResolver::new(test_index());
        let regions = resolver.resolve(&ugc_geocode("ALX001 ALZ001"), "http://example.test/a");
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].name, "Central Alabama");
    }

    #[test]
    fn test_order_preserved_across_codes() {
        let resolver = RegionResolver::new(test_index());
        let regions = resolver.resolve(&ugc_geocode("TXZ123 ALZ001"), "http://example.test/a");
        assert_eq!(regions[0].name, "Unknown Zone (TXZ123)");
        assert_eq!(regions[1].name, "Central Alabama");
    }

    #[test]
    fn test_geocode_count_other_than_one_yields_empty() {
        let resolver = RegionResolver::new(test_index());
        assert!(resolver.resolve(&[], "http://example.test/a").is_empty());

        let two = [ugc_geocode("ALZ001"), ugc_geocode("ALZ001")].concat();
        assert!(resolver.resolve(&two, "http://example.test/a").is_empty());
    }

    #[test]
    fn test_non_ugc_label_yields_empty() {
        let resolver = RegionResolver::new(test_index());
        let geocode = vec![GeocodeBlock {
            value_names: vec!["FIPS6".to_string(), "SAME".to_string()],
            values: vec!["006015".to_string(), "ALZ001".to_string()],
        }];
        assert!(resolver.resolve(&geocode, "http://example.test/a").is_empty());
    }

    #[test]
    fn test_classify_missing_pairs_is_unsupported() {
        let geocode = vec![GeocodeBlock::default()];
        assert_eq!(
            classify_geocode(&geocode, "http://example.test/a"),
            GeocodeShape::Unsupported
        );
    }
}
