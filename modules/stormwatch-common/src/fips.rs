use crate::error::StormwatchError;

/// Numeric state FIPS prefix for a 2-letter state abbreviation.
/// Leading zeros are significant ("AL" is "01", not "1").
/// Unknown abbreviations are a named error, never a silent default.
pub fn state_fips(abbrev: &str) -> Result<&'static str, StormwatchError> {
    let prefix = match abbrev {
        "AL" => "01",
        "AK" => "02",
        "AZ" => "04",
        "AR" => "05",
        "CA" => "06",
        "CO" => "08",
        "CT" => "09",
        "DE" => "10",
        "DC" => "11",
        "FL" => "12",
        "GA" => "13",
        "HI" => "15",
        "ID" => "16",
        "IL" => "17",
        "IN" => "18",
        "IA" => "19",
        "KS" => "20",
        "KY" => "21",
        "LA" => "22",
        "ME" => "23",
        "MD" => "24",
        "MA" => "25",
        "MI" => "26",
        "MN" => "27",
        "MS" => "28",
        "MO" => "29",
        "MT" => "30",
        "NE" => "31",
        "NV" => "32",
        "NH" => "33",
        "NJ" => "34",
        "NM" => "35",
        "NY" => "36",
        "NC" => "37",
        "ND" => "38",
        "OH" => "39",
        "OK" => "40",
        "OR" => "41",
        "PA" => "42",
        "RI" => "44",
        "SC" => "45",
        "SD" => "46",
        "TN" => "47",
        "TX" => "48",
        "UT" => "49",
        "VT" => "50",
        "VA" => "51",
        "WA" => "53",
        "WV" => "54",
        "WI" => "55",
        "WY" => "56",
        "AS" => "60",
        "GU" => "66",
        "MP" => "69",
        "PR" => "72",
        "UM" => "74",
        "VI" => "78",
        other => return Err(StormwatchError::UnknownState(other.to_string())),
    };
    Ok(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_state_keeps_leading_zero() {
        assert_eq!(state_fips("AL").unwrap(), "01");
        assert_eq!(state_fips("CA").unwrap(), "06");
        assert_eq!(state_fips("WY").unwrap(), "56");
    }

    #[test]
    fn test_territories_present() {
        assert_eq!(state_fips("PR").unwrap(), "72");
        assert_eq!(state_fips("VI").unwrap(), "78");
    }

    #[test]
    fn test_unknown_state_is_named_error() {
        let err = state_fips("XX").unwrap_err();
        assert!(matches!(err, StormwatchError::UnknownState(ref s) if s == "XX"));
    }
}
