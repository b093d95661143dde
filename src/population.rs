//! State resident population reference table (2020 decennial census).
//!
//! Covers the 50 states and the District of Columbia. Territories and marine
//! zone codes are deliberately absent so they drop out of per-capita output.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Census year the populations refer to.
pub const REFERENCE_YEAR: i32 = 2020;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateInfo {
    pub code: &'static str,
    pub name: &'static str,
    /// Two-digit FIPS code as an integer, used to join to map geometry.
    pub fips: u32,
    pub population: u64,
}

const fn state(code: &'static str, name: &'static str, fips: u32, population: u64) -> StateInfo {
    StateInfo {
        code,
        name,
        fips,
        population,
    }
}

static STATES: &[StateInfo] = &[
    state("AL", "Alabama", 1, 5_024_279),
    state("AK", "Alaska", 2, 733_391),
    state("AZ", "Arizona", 4, 7_151_502),
    state("AR", "Arkansas", 5, 3_011_524),
    state("CA", "California", 6, 39_538_223),
    state("CO", "Colorado", 8, 5_773_714),
    state("CT", "Connecticut", 9, 3_605_944),
    state("DE", "Delaware", 10, 989_948),
    state("DC", "District of Columbia", 11, 689_545),
    state("FL", "Florida", 12, 21_538_187),
    state("GA", "Georgia", 13, 10_711_908),
    state("HI", "Hawaii", 15, 1_455_271),
    state("ID", "Idaho", 16, 1_839_106),
    state("IL", "Illinois", 17, 12_812_508),
    state("IN", "Indiana", 18, 6_785_528),
    state("IA", "Iowa", 19, 3_190_369),
    state("KS", "Kansas", 20, 2_937_880),
    state("KY", "Kentucky", 21, 4_505_836),
    state("LA", "Louisiana", 22, 4_657_757),
    state("ME", "Maine", 23, 1_362_359),
    state("MD", "Maryland", 24, 6_177_224),
    state("MA", "Massachusetts", 25, 7_029_917),
    state("MI", "Michigan", 26, 10_077_331),
    state("MN", "Minnesota", 27, 5_706_494),
    state("MS", "Mississippi", 28, 2_961_279),
    state("MO", "Missouri", 29, 6_154_913),
    state("MT", "Montana", 30, 1_084_225),
    state("NE", "Nebraska", 31, 1_961_504),
    state("NV", "Nevada", 32, 3_104_614),
    state("NH", "New Hampshire", 33, 1_377_529),
    state("NJ", "New Jersey", 34, 9_288_994),
    state("NM", "New Mexico", 35, 2_117_522),
    state("NY", "New York", 36, 20_201_249),
    state("NC", "North Carolina", 37, 10_439_388),
    state("ND", "North Dakota", 38, 779_094),
    state("OH", "Ohio", 39, 11_799_448),
    state("OK", "Oklahoma", 40, 3_959_353),
    state("OR", "Oregon", 41, 4_237_256),
    state("PA", "Pennsylvania", 42, 13_002_700),
    state("RI", "Rhode Island", 44, 1_097_379),
    state("SC", "South Carolina", 45, 5_118_425),
    state("SD", "South Dakota", 46, 886_667),
    state("TN", "Tennessee", 47, 6_910_840),
    state("TX", "Texas", 48, 29_145_505),
    state("UT", "Utah", 49, 3_271_616),
    state("VT", "Vermont", 50, 643_077),
    state("VA", "Virginia", 51, 8_631_393),
    state("WA", "Washington", 53, 7_705_281),
    state("WV", "West Virginia", 54, 1_793_716),
    state("WI", "Wisconsin", 55, 5_893_718),
    state("WY", "Wyoming", 56, 576_851),
];

static BY_CODE: LazyLock<BTreeMap<&'static str, &'static StateInfo>> =
    LazyLock::new(|| STATES.iter().map(|s| (s.code, s)).collect());

/// Looks up a state by its two-letter postal code (case-insensitive).
pub fn lookup(code: &str) -> Option<&'static StateInfo> {
    BY_CODE.get(code.trim().to_uppercase().as_str()).copied()
}

/// All states, ordered by postal code.
pub fn states() -> impl Iterator<Item = &'static StateInfo> {
    BY_CODE.values().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifty_states_plus_dc() {
        assert_eq!(states().count(), 51);
    }

    #[test]
    fn test_lookup() {
        let tx = lookup("tx").unwrap();
        assert_eq!(tx.name, "Texas");
        assert_eq!(tx.fips, 48);
        assert_eq!(tx.population, 29_145_505);
    }

    #[test]
    fn test_territories_are_absent() {
        for code in ["PR", "GU", "VI", "AS", "MP", "AM", "GM"] {
            assert!(lookup(code).is_none(), "{code}");
        }
    }

    #[test]
    fn test_states_are_ordered_by_code() {
        let codes: Vec<_> = states().map(|s| s.code).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }
}
