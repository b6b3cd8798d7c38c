//! Single IP address tokens.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::raw::RawAddress;

/// SingleIp is one concrete address, or the universal wildcard.
///
/// The wildcard matches every address in every family and always formats
/// as `*`. It is family-less: an all-zero address of either family
/// normalizes to [`SingleIp::Any`] at construction, so `0.0.0.0` and `::`
/// are the same value as a parsed `*`.
#[derive(Debug, Clone, Copy)]
pub enum SingleIp {
    /// Matches every address; formats as `*`
    Any,
    /// One concrete, non-wildcard address
    Addr(RawAddress),
}

impl SingleIp {
    /// Build a SingleIp from a raw address, folding wildcard values into
    /// [`SingleIp::Any`].
    pub fn new(raw: RawAddress) -> Self {
        if raw.is_wildcard() {
            SingleIp::Any
        } else {
            SingleIp::Addr(raw)
        }
    }

    /// `true` for the universal wildcard.
    pub fn is_any(&self) -> bool {
        match self {
            SingleIp::Any => true,
            SingleIp::Addr(raw) => raw.is_wildcard(),
        }
    }

    /// The concrete address, if this is not the wildcard.
    pub fn raw(&self) -> Option<RawAddress> {
        match self {
            SingleIp::Any => None,
            SingleIp::Addr(raw) => Some(*raw),
        }
    }

    /// Parse a single address token.
    ///
    /// `*` parses to the wildcard; anything else must be a strict
    /// dotted-quad or colon-hex address.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "*" {
            return Ok(SingleIp::Any);
        }
        RawAddress::parse(s).map(SingleIp::new)
    }
}

// The wildcard compares equal to an all-zero address of either family, so
// equality goes through is_any() before byte comparison.
impl PartialEq for SingleIp {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (a, b) if a.is_any() && b.is_any() => true,
            (SingleIp::Addr(a), SingleIp::Addr(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for SingleIp {}

impl Hash for SingleIp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_any() {
            state.write_u8(0);
        } else if let SingleIp::Addr(raw) = self {
            state.write_u8(1);
            raw.hash(state);
        }
    }
}

impl fmt::Display for SingleIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SingleIp::Any => write!(f, "*"),
            SingleIp::Addr(raw) => write!(f, "{}", raw),
        }
    }
}

impl std::str::FromStr for SingleIp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SingleIp::parse(s)
    }
}

impl From<RawAddress> for SingleIp {
    fn from(raw: RawAddress) -> Self {
        SingleIp::new(raw)
    }
}
