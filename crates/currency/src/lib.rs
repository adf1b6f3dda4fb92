//! ISO 4217 currency codes and minor-unit amount conversion.
//!
//! The table is process-wide, immutable and covers active ISO 4217 codes with
//! their minor-unit decimal places (0 for JPY/ISK, 2 for most, 3 for BHD/JOD,
//! 4 for UYW/CLF). All balances and payment amounts in the system are stored
//! as integers in minor units; this crate is the only place that converts
//! between external decimal amounts and that internal representation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

mod convert;
mod table;

pub use convert::{format_amount, to_major, to_minor};

/// The given code is not part of the ISO 4217 table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is not a valid ISO 4217 code")]
pub struct UnknownCurrency(pub String);

/// A currency from the ISO 4217 table.
///
/// Cheap to copy; compares by identity of the table entry. Serializes as the
/// three-letter alpha code (e.g. `"USD"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(u16);

impl Currency {
    /// Look up a currency by its three-letter alpha code.
    pub fn parse(code: &str) -> Result<Self, UnknownCurrency> {
        table::TABLE
            .binary_search_by(|entry| entry.code.cmp(code))
            .map(|idx| Currency(idx as u16))
            .map_err(|_| UnknownCurrency(code.to_string()))
    }

    /// Look up a currency by its ISO 4217 numeric code.
    pub fn from_numeric(numeric: u16) -> Result<Self, UnknownCurrency> {
        table::TABLE
            .iter()
            .position(|entry| entry.numeric == numeric)
            .map(|idx| Currency(idx as u16))
            .ok_or_else(|| UnknownCurrency(numeric.to_string()))
    }

    fn entry(&self) -> &'static table::Entry {
        &table::TABLE[self.0 as usize]
    }

    /// Three-letter alpha code, e.g. `"USD"`.
    pub fn code(&self) -> &'static str {
        self.entry().code
    }

    /// Display name, e.g. `"US Dollar"`.
    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    /// Number of minor-unit decimal places.
    pub fn decimals(&self) -> u32 {
        self.entry().decimals
    }

    /// ISO 4217 numeric code, e.g. `840` for USD.
    pub fn numeric(&self) -> u16 {
        self.entry().numeric
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::parse(s)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Currency::parse(&code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_codes() {
        for (code, decimals) in [("USD", 2), ("JPY", 0), ("BHD", 3), ("CLF", 4), ("ISK", 0)] {
            let c = Currency::parse(code).unwrap();
            assert_eq!(c.code(), code);
            assert_eq!(c.decimals(), decimals);
        }
    }

    #[test]
    fn parse_rejects_unknown_code() {
        let err = Currency::parse("XXY").unwrap_err();
        assert_eq!(err, UnknownCurrency("XXY".to_string()));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(Currency::parse("usd").is_err());
    }

    #[test]
    fn numeric_lookup_round_trips() {
        let usd = Currency::parse("USD").unwrap();
        assert_eq!(usd.numeric(), 840);
        assert_eq!(Currency::from_numeric(840).unwrap(), usd);
        assert!(Currency::from_numeric(1).is_err());
    }

    #[test]
    fn names_come_from_the_table() {
        assert_eq!(Currency::parse("EUR").unwrap().name(), "Euro");
        assert_eq!(Currency::parse("JPY").unwrap().name(), "Yen");
    }

    #[test]
    fn serde_uses_alpha_codes() {
        let usd = Currency::parse("USD").unwrap();
        assert_eq!(serde_json::to_string(&usd).unwrap(), "\"USD\"");
        let back: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(back, usd);
        assert!(serde_json::from_str::<Currency>("\"???\"").is_err());
    }

    #[test]
    fn table_is_sorted_for_binary_search() {
        let codes: Vec<_> = crate::table::TABLE.iter().map(|e| e.code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }
}
