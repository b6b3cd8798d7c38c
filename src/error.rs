//! Error types for fwaddr.

use thiserror::Error;

use crate::family::AddressFamily;

/// Error type for fwaddr operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A token does not match any accepted address grammar
    #[error("malformed address token: {0}")]
    Format(String),

    /// Two addresses of different families were combined
    #[error("address family mismatch: {left} vs {right}")]
    FamilyMismatch {
        /// Family of the first operand
        left: AddressFamily,
        /// Family of the second operand
        right: AddressFamily,
    },

    /// A range with exactly one wildcard endpoint
    #[error("range has exactly one wildcard endpoint")]
    InvalidRange,

    /// A subnet mask with no bits set
    #[error("subnet mask has no bits set")]
    InvalidMask,
}

/// Result type alias for fwaddr operations.
pub type Result<T> = std::result::Result<T, Error>;
