//! Inclusive address range tokens.

use std::fmt;

use crate::error::{Error, Result};
use crate::family::AddressFamily;
use crate::raw::RawAddress;

use super::SingleIp;

/// AddressRange is an inclusive `[start, end]` span of same-family
/// addresses.
///
/// Endpoints are normalized at construction so `start <= end` holds no
/// matter which order the constructor receives them in. A range where
/// both endpoints are the wildcard is the degenerate "any" range and
/// formats as `*`; a range with exactly one wildcard endpoint is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRange {
    start: RawAddress,
    end: RawAddress,
}

impl AddressRange {
    /// Build a range from two endpoints, in either order.
    ///
    /// # Errors
    /// `Error::FamilyMismatch` if the endpoints belong to different
    /// families, `Error::InvalidRange` if exactly one endpoint is the
    /// wildcard.
    pub fn new(a: RawAddress, b: RawAddress) -> Result<Self> {
        if a.family() != b.family() {
            return Err(Error::FamilyMismatch {
                left: a.family(),
                right: b.family(),
            });
        }
        if a.is_wildcard() != b.is_wildcard() {
            return Err(Error::InvalidRange);
        }
        let start = RawAddress::min(a, b)?;
        let end = RawAddress::max(a, b)?;
        Ok(Self { start, end })
    }

    /// The degenerate range covering every address.
    pub fn any() -> Self {
        let w = RawAddress::wildcard(AddressFamily::V4);
        Self { start: w, end: w }
    }

    /// Lower endpoint.
    pub fn start(&self) -> RawAddress {
        self.start
    }

    /// Upper endpoint.
    pub fn end(&self) -> RawAddress {
        self.end
    }

    /// `true` if this is the wildcard range.
    pub fn is_any(&self) -> bool {
        // Both endpoints are wildcards whenever one is, by construction.
        self.start.is_wildcard()
    }

    /// `true` if the range describes exactly one address.
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// `true` if `addr` falls within the range.
    ///
    /// The wildcard range contains every address of every family;
    /// otherwise a family mismatch never matches.
    pub fn contains(&self, addr: &RawAddress) -> bool {
        if self.is_any() {
            return true;
        }
        let after_start = matches!(
            self.start.compare(addr),
            Ok(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)
        );
        let before_end = matches!(
            addr.compare(&self.end),
            Ok(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)
        );
        after_start && before_end
    }

    /// Parse a range token.
    ///
    /// Accepts `*`, a bare address (a degenerate single-address range),
    /// or `addr1-addr2`. More than one `-` is malformed.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.matches('-').count() {
            0 => match SingleIp::parse(s)? {
                SingleIp::Any => Ok(Self::any()),
                SingleIp::Addr(raw) => Self::new(raw, raw),
            },
            1 => {
                let (left, right) = s.split_once('-').ok_or_else(|| Error::Format(s.to_string()))?;
                let a = SingleIp::parse(left)?;
                let b = SingleIp::parse(right)?;
                // A bare wildcard endpoint takes the family of the other
                // side, so the partial-wildcard check sees one family.
                let (ra, rb) = match (a, b) {
                    (SingleIp::Any, SingleIp::Any) => return Ok(Self::any()),
                    (SingleIp::Any, SingleIp::Addr(r)) => (RawAddress::wildcard(r.family()), r),
                    (SingleIp::Addr(r), SingleIp::Any) => (r, RawAddress::wildcard(r.family())),
                    (SingleIp::Addr(x), SingleIp::Addr(y)) => (x, y),
                };
                Self::new(ra, rb)
            }
            _ => Err(Error::Format(s.to_string())),
        }
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            if self.start.is_wildcard() {
                write!(f, "*")
            } else {
                write!(f, "{}", self.start)
            }
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl std::str::FromStr for AddressRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AddressRange::parse(s)
    }
}
