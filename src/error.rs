//! Error types and handling for addresskit.
//!
//! Parsing itself is infallible (missing components degrade to empty
//! fields); errors only arise when building a custom region table.

/// Result type alias for addresskit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for addresskit operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A region code is not exactly two ASCII digits
    #[error("invalid region code {code:?} for region {name:?}: expected two ASCII digits")]
    InvalidRegionCode {
        /// Region name
        name: String,
        /// Offending code
        code: String,
    },

    /// A region name or code appears more than once in the table
    #[error("duplicate region entry {name:?} ({code})")]
    DuplicateRegion {
        /// Region name
        name: String,
        /// Region code
        code: String,
    },
}

impl Error {
    /// Create a new invalid-region-code error
    pub fn invalid_region_code(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self::InvalidRegionCode {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Create a new duplicate-region error
    pub fn duplicate_region(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self::DuplicateRegion {
            name: name.into(),
            code: code.into(),
        }
    }
}
