//! Heuristic address parsing functionality.
//!
//! The parser decomposes one comma-formatted address string (as returned by
//! geocoding/autocomplete services) into structured components. Extraction is
//! purely heuristic: positional rules, a 6-digit pincode pattern, and
//! case-insensitive matching against a region table. Every stage degrades to
//! an empty field instead of failing, because geocoder output is unreliable
//! free text and the result is only ever a suggestion for an editable form.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::regions::{RegionEntry, RegionTable};

/// First run of exactly six digits bounded by non-digits or string edges.
static PINCODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{6}\b").unwrap());

/// Words that mark a segment as street/locality text rather than a city name.
const STREET_SUFFIX_WORDS: &[&str] = &[
    "road", "street", "avenue", "lane", "colony", "nagar", "area", "puram", "palayam", "patti",
    "circle", "chowk", "market", "plaza", "mall", "sector", "phase", "block",
];

/// High-level address parser with idiomatic Rust API.
///
/// Holds the region table used for state matching; [`AddressParser::new`]
/// uses the bundled Indian state/UT table.
#[derive(Debug, Clone)]
pub struct AddressParser {
    regions: RegionTable,
}

impl AddressParser {
    /// Create a new parser using the bundled region table.
    pub fn new() -> Self {
        Self {
            regions: RegionTable::india_states().clone(),
        }
    }

    /// Use a custom region table for state matching.
    pub fn with_region_table(mut self, regions: RegionTable) -> Self {
        self.regions = regions;
        self
    }

    /// The region table this parser matches states against.
    pub fn region_table(&self) -> &RegionTable {
        &self.regions
    }

    /// Parse a formatted address string into structured components.
    ///
    /// Never fails: components that cannot be inferred come back as empty
    /// strings (or `None` for the state). The stages run in a fixed order,
    /// and a segment claimed by an earlier stage is never reused by a later
    /// one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use addresskit::AddressParser;
    ///
    /// let parser = AddressParser::new();
    /// let parsed = parser.parse("42, MG Road, Indiranagar, Bengaluru, Karnataka, 560038");
    ///
    /// assert_eq!(parsed.door_number, "42");
    /// assert_eq!(parsed.address_line1, "MG Road");
    /// assert_eq!(parsed.address_line2, "Indiranagar");
    /// assert_eq!(parsed.city, "Bengaluru");
    /// assert_eq!(parsed.state.as_ref().map(|s| s.code.as_str()), Some("29"));
    /// assert_eq!(parsed.pincode, "560038");
    /// ```
    pub fn parse(&self, input: &str) -> ParsedAddressComponents {
        let segments = split_segments(input);
        trace!(segments = segments.len(), "tokenized formatted address");

        let pincode = extract_pincode(input);
        let door_number = extract_door_number(&segments, &pincode);
        let (state, state_segment) = match_state(&segments, &pincode, &self.regions);
        let city = extract_city(&segments, &pincode, &state_segment, &door_number);
        let (address_line1, address_line2) = distribute_street_lines(
            &segments,
            &[&door_number, &pincode, &state_segment, &city],
        );

        debug!(
            %pincode,
            %door_number,
            %city,
            state = state.as_ref().map_or("", |s| s.name.as_str()),
            "extracted address components"
        );

        ParsedAddressComponents {
            door_number,
            address_line1,
            address_line2,
            city,
            state,
            pincode,
        }
    }

    /// Parse multiple addresses in batch.
    pub fn parse_batch(&self, inputs: &[&str]) -> Vec<ParsedAddressComponents> {
        inputs.iter().map(|input| self.parse(input)).collect()
    }

    /// Parse multiple addresses in parallel using multiple threads.
    ///
    /// Parsing is pure, so the region table is shared across threads without
    /// synchronization. Results come back in input order.
    #[cfg(feature = "parallel")]
    pub fn parse_batch_parallel(&self, inputs: &[&str]) -> Vec<ParsedAddressComponents> {
        use rayon::prelude::*;

        inputs.par_iter().map(|input| self.parse(input)).collect()
    }
}

impl Default for AddressParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Structured components inferred from one formatted address string.
///
/// Produced fresh on every [`AddressParser::parse`] call. Every non-empty
/// field is a verbatim copy of (or join over) the input's comma-split
/// segments; nothing is fabricated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedAddressComponents {
    /// Unit/building identifier, typically the leading numeric segment.
    pub door_number: String,
    /// First street/locality line.
    pub address_line1: String,
    /// Second street/locality line.
    pub address_line2: String,
    /// Inferred locality name.
    pub city: String,
    /// Matched region, carrying its 2-digit code.
    pub state: Option<RegionEntry>,
    /// 6-digit postal code.
    pub pincode: String,
}

impl ParsedAddressComponents {
    /// The matched state's 2-digit code, if a state was matched.
    pub fn state_code(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.code.as_str())
    }

    /// Check whether no component was inferred at all.
    pub fn is_empty(&self) -> bool {
        self.door_number.is_empty()
            && self.address_line1.is_empty()
            && self.address_line2.is_empty()
            && self.city.is_empty()
            && self.state.is_none()
            && self.pincode.is_empty()
    }
}

/// Split on commas, trim each piece, drop empties. Order is preserved.
fn split_segments(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Leftmost 6-digit run in the raw string wins, even when a second one
/// exists further right. Deliberate simplification; see DESIGN.md.
fn extract_pincode(input: &str) -> String {
    PINCODE_RE
        .find(input)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First segment (left to right) that starts with a digit and is not the
/// pincode itself. Door numbers conventionally precede every other numeric
/// token in a formatted address.
fn extract_door_number(segments: &[String], pincode: &str) -> String {
    segments
        .iter()
        .find(|segment| {
            segment.starts_with(|c: char| c.is_ascii_digit()) && segment.as_str() != pincode
        })
        .cloned()
        .unwrap_or_default()
}

/// Scan segments right to left for one that equals, or contains, a region
/// name. Region names sit near the end of a formatted address, so the
/// backward scan finds the right one before any street name that happens to
/// embed a region word.
///
/// Returns the matched entry plus the segment that matched it, so later
/// stages can exclude that segment.
fn match_state(
    segments: &[String],
    pincode: &str,
    regions: &RegionTable,
) -> (Option<RegionEntry>, String) {
    for segment in segments.iter().rev() {
        if segment == pincode {
            continue;
        }
        let lowered = segment.to_lowercase();
        for entry in regions.entries() {
            let name = entry.name.to_lowercase();
            if lowered == name || lowered.contains(&name) {
                return (Some(entry.clone()), segment.clone());
            }
        }
    }
    (None, String::new())
}

/// Scan from the second-to-last segment backward for a plausible city name:
/// not already claimed, free of street-suffix words, longer than two
/// characters. The last segment is skipped outright since state/pincode
/// conventionally sit there.
fn extract_city(
    segments: &[String],
    pincode: &str,
    state_segment: &str,
    door_number: &str,
) -> String {
    if segments.len() < 2 {
        return String::new();
    }
    for segment in segments[..segments.len() - 1].iter().rev() {
        if segment == pincode || segment == state_segment || segment == door_number {
            continue;
        }
        let lowered = segment.to_lowercase();
        if STREET_SUFFIX_WORDS.iter().any(|word| lowered.contains(word)) {
            continue;
        }
        if segment.chars().count() > 2 {
            return segment.clone();
        }
    }
    String::new()
}

/// Distribute every unclaimed segment into the two street lines, preserving
/// input order. Three or more leftovers split at the ceiling of half.
fn distribute_street_lines(segments: &[String], claimed: &[&str]) -> (String, String) {
    let street_parts: Vec<&str> = segments
        .iter()
        .map(String::as_str)
        .filter(|segment| !claimed.contains(segment))
        .collect();

    match street_parts.len() {
        0 => (String::new(), String::new()),
        1 => (street_parts[0].to_string(), String::new()),
        2 => (street_parts[0].to_string(), street_parts[1].to_string()),
        n => {
            let mid = n.div_ceil(2);
            (street_parts[..mid].join(", "), street_parts[mid..].join(", "))
        }
    }
}
