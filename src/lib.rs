//! # addresskit
//!
//! Heuristic parsing of comma-formatted Indian postal addresses into
//! structured components.
//!
//! Geocoding and autocomplete services hand back a single formatted string
//! ("42, MG Road, Indiranagar, Bengaluru, Karnataka, 560038"). This crate
//! splits that string into the fields an address form actually edits: door
//! number, two street lines, city, state (with its 2-digit GST code), and
//! pincode. Extraction is positional and pattern-based, tolerates missing
//! or ambiguous data, and never fails: anything it cannot infer comes back
//! empty for the user to fill in.
//!
//! ## Features
//!
//! - **Infallible parsing**: every input yields a complete record; fields
//!   degrade to empty independently
//! - **Bundled region table**: all 36 Indian states and union territories
//!   with their GST state codes, overridable per parser
//! - **Form pre-fill**: editable field structs with display placeholders
//! - **Pure and thread safe**: no shared mutable state, safe to call
//!   concurrently
//!
//! ## Quick Start
//!
//! ```rust
//! use addresskit::parse_formatted_address;
//!
//! let parsed = parse_formatted_address("42, MG Road, Indiranagar, Bengaluru, Karnataka, 560038");
//! assert_eq!(parsed.door_number, "42");
//! assert_eq!(parsed.city, "Bengaluru");
//! assert_eq!(parsed.state_code(), Some("29"));
//! assert_eq!(parsed.pincode, "560038");
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod form;
pub mod parser;
pub mod regions;

// Re-export main API
pub use error::{Error, Result};
pub use form::{AddressFormFields, FIELD_PLACEHOLDER};
pub use parser::{AddressParser, ParsedAddressComponents};
pub use regions::{RegionEntry, RegionTable};

/// Parse a formatted address using the bundled Indian region table.
///
/// This is a convenience wrapper over [`AddressParser`]; build one yourself
/// to reuse a custom [`RegionTable`] across calls.
///
/// # Examples
///
/// ```rust
/// use addresskit::parse_formatted_address;
///
/// let parsed = parse_formatted_address("Flat 5B, Park View Apartments, Sector 15, Gurugram, Haryana");
/// assert_eq!(parsed.city, "Gurugram");
/// assert_eq!(parsed.state_code(), Some("06"));
/// assert_eq!(parsed.pincode, "");
/// ```
pub fn parse_formatted_address(input: &str) -> ParsedAddressComponents {
    AddressParser::new().parse(input)
}
