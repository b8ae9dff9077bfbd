//! Editable form fields pre-filled from a parsed address.
//!
//! The parser's output is a suggestion, never authoritative: the calling
//! form copies it into six independently editable fields and lets the user
//! override any of them. This module owns that copy step so the parser
//! itself stays pure.

use crate::parser::ParsedAddressComponents;
use crate::regions::RegionEntry;

/// Display fallback for fields the parser could not infer.
pub const FIELD_PLACEHOLDER: &str = "Not specified";

/// Six independently editable address fields.
///
/// Constructed from a [`ParsedAddressComponents`] value; after construction
/// the two are independent and edits here never flow back into the parsed
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressFormFields {
    /// Unit/building identifier.
    pub door_number: String,
    /// First street/locality line.
    pub address_line1: String,
    /// Second street/locality line.
    pub address_line2: String,
    /// Locality name.
    pub city: String,
    /// Selected region, if any.
    pub state: Option<RegionEntry>,
    /// 6-digit postal code.
    pub pincode: String,
}

/// A field value for display, falling back to [`FIELD_PLACEHOLDER`] when
/// the field is empty.
///
/// Empty fields must never block the user; required-field validation is the
/// form's own concern and independent of the parser.
pub fn field_or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        FIELD_PLACEHOLDER
    } else {
        value
    }
}

impl AddressFormFields {
    /// The selected state's name for display.
    pub fn state_display(&self) -> &str {
        self.state
            .as_ref()
            .map_or(FIELD_PLACEHOLDER, |s| s.name.as_str())
    }
}

impl From<ParsedAddressComponents> for AddressFormFields {
    fn from(parsed: ParsedAddressComponents) -> Self {
        Self {
            door_number: parsed.door_number,
            address_line1: parsed.address_line1,
            address_line2: parsed.address_line2,
            city: parsed.city,
            state: parsed.state,
            pincode: parsed.pincode,
        }
    }
}
