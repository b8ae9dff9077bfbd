//! Region (state/union territory) table used for state matching.
//!
//! The bundled table covers the Indian states and union territories with
//! their 2-digit GST state codes. The same codes are used for
//! tax-jurisdiction fields elsewhere, so they are kept as strings with a
//! leading zero preserved ("06", not "6").

use once_cell::sync::Lazy;

use crate::error::{Error, Result};

/// One first-level administrative division: a human-readable name plus its
/// 2-digit numeric code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionEntry {
    /// Human-readable region name (e.g., "Karnataka").
    pub name: String,
    /// 2-digit numeric code (e.g., "29").
    pub code: String,
}

impl RegionEntry {
    /// Create a new region entry.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// Indian states and union territories with GST state codes, in code order.
///
/// Codes 25 and 28 are intentionally absent: Daman and Diu was merged into
/// code 26 and the old Andhra Pradesh code was replaced by 37 after the
/// Telangana split.
const INDIA_STATES: &[(&str, &str)] = &[
    ("Jammu and Kashmir", "01"),
    ("Himachal Pradesh", "02"),
    ("Punjab", "03"),
    ("Chandigarh", "04"),
    ("Uttarakhand", "05"),
    ("Haryana", "06"),
    ("Delhi", "07"),
    ("Rajasthan", "08"),
    ("Uttar Pradesh", "09"),
    ("Bihar", "10"),
    ("Sikkim", "11"),
    ("Arunachal Pradesh", "12"),
    ("Nagaland", "13"),
    ("Manipur", "14"),
    ("Mizoram", "15"),
    ("Tripura", "16"),
    ("Meghalaya", "17"),
    ("Assam", "18"),
    ("West Bengal", "19"),
    ("Jharkhand", "20"),
    ("Odisha", "21"),
    ("Chhattisgarh", "22"),
    ("Madhya Pradesh", "23"),
    ("Gujarat", "24"),
    ("Dadra and Nagar Haveli and Daman and Diu", "26"),
    ("Maharashtra", "27"),
    ("Karnataka", "29"),
    ("Goa", "30"),
    ("Lakshadweep", "31"),
    ("Kerala", "32"),
    ("Tamil Nadu", "33"),
    ("Puducherry", "34"),
    ("Andaman and Nicobar Islands", "35"),
    ("Telangana", "36"),
    ("Andhra Pradesh", "37"),
    ("Ladakh", "38"),
];

static INDIA_TABLE: Lazy<RegionTable> = Lazy::new(|| RegionTable {
    entries: INDIA_STATES
        .iter()
        .map(|(name, code)| RegionEntry::new(*name, *code))
        .collect(),
});

/// Ordered, validated collection of [`RegionEntry`] values.
///
/// The parser scans this table in order when matching state segments, so
/// order is significant for ambiguous inputs and is preserved as given.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionTable {
    entries: Vec<RegionEntry>,
}

impl RegionTable {
    /// Build a table from caller-supplied entries.
    ///
    /// # Errors
    ///
    /// Returns an error if any code is not exactly two ASCII digits, or if a
    /// name (case-insensitively) or code appears more than once.
    pub fn new(entries: Vec<RegionEntry>) -> Result<Self> {
        for entry in &entries {
            if entry.code.len() != 2 || !entry.code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::invalid_region_code(&entry.name, &entry.code));
            }
        }
        for (i, entry) in entries.iter().enumerate() {
            for other in &entries[i + 1..] {
                if entry.code == other.code || entry.name.eq_ignore_ascii_case(&other.name) {
                    return Err(Error::duplicate_region(&entry.name, &entry.code));
                }
            }
        }
        Ok(Self { entries })
    }

    /// The bundled table of Indian states and union territories.
    pub fn india_states() -> &'static RegionTable {
        &INDIA_TABLE
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[RegionEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a region by its 2-digit code.
    pub fn by_code(&self, code: &str) -> Option<&RegionEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// Look up a region by name, case-insensitively.
    pub fn by_name(&self, name: &str) -> Option<&RegionEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::Error;

    #[test]
    fn bundled_table_has_all_states_and_uts() {
        let table = RegionTable::india_states();
        assert_eq!(table.len(), 36);
        assert_eq!(table.by_code("29").map(|e| e.name.as_str()), Some("Karnataka"));
        assert_eq!(table.by_code("06").map(|e| e.name.as_str()), Some("Haryana"));
        // Retired codes stay absent.
        assert_eq!(table.by_code("25"), None);
        assert_eq!(table.by_code("28"), None);
    }

    #[test]
    fn by_name_is_case_insensitive() {
        let table = RegionTable::india_states();
        let entry = table.by_name("tamil nadu").unwrap();
        assert_eq!(entry.code, "33");
    }

    #[test]
    fn rejects_malformed_code() {
        let err = RegionTable::new(vec![RegionEntry::new("Karnataka", "9")]).unwrap_err();
        assert_matches!(err, Error::InvalidRegionCode { .. });

        let err = RegionTable::new(vec![RegionEntry::new("Karnataka", "2x")]).unwrap_err();
        assert_matches!(err, Error::InvalidRegionCode { .. });
    }

    #[test]
    fn rejects_duplicate_name_or_code() {
        let err = RegionTable::new(vec![
            RegionEntry::new("Karnataka", "29"),
            RegionEntry::new("KARNATAKA", "30"),
        ])
        .unwrap_err();
        assert_matches!(err, Error::DuplicateRegion { .. });

        let err = RegionTable::new(vec![
            RegionEntry::new("Karnataka", "29"),
            RegionEntry::new("Goa", "29"),
        ])
        .unwrap_err();
        assert_matches!(err, Error::DuplicateRegion { .. });
    }

    #[test]
    fn empty_table_is_allowed() {
        // State matching simply never succeeds against an empty table.
        let table = RegionTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
    }
}
