//! Fixed-length raw address values.

use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{Error, Result};
use crate::family::AddressFamily;

/// RawAddress is a fixed-length address value tagged with its family.
///
/// The payload length is tied to the variant, so a 4-byte value can never
/// carry the V6 tag and vice versa. Comparison is unsigned byte-wise
/// lexicographic and only defined within a single family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawAddress {
    /// 4-byte IPv4 address in network byte order
    V4([u8; 4]),
    /// 16-byte IPv6 address in network byte order
    V6([u8; 16]),
}

impl RawAddress {
    /// Get the family of this address.
    pub fn family(&self) -> AddressFamily {
        match self {
            RawAddress::V4(_) => AddressFamily::V4,
            RawAddress::V6(_) => AddressFamily::V6,
        }
    }

    /// Get the octets in network byte order.
    pub fn octets(&self) -> &[u8] {
        match self {
            RawAddress::V4(bytes) => &bytes[..],
            RawAddress::V6(bytes) => &bytes[..],
        }
    }

    /// The all-zero wildcard value for a family.
    pub const fn wildcard(family: AddressFamily) -> Self {
        match family {
            AddressFamily::V4 => RawAddress::V4([0; 4]),
            AddressFamily::V6 => RawAddress::V6([0; 16]),
        }
    }

    /// The all-ones single-host mask for a family.
    pub const fn host_mask(family: AddressFamily) -> Self {
        match family {
            AddressFamily::V4 => RawAddress::V4([0xff; 4]),
            AddressFamily::V6 => RawAddress::V6([0xff; 16]),
        }
    }

    /// `true` if every octet is zero.
    pub fn is_wildcard(&self) -> bool {
        self.octets().iter().all(|b| *b == 0)
    }

    /// `true` if every octet is all ones.
    pub fn is_host_mask(&self) -> bool {
        self.octets().iter().all(|b| *b == 0xff)
    }

    /// Compare two addresses of the same family.
    ///
    /// Octets are compared left to right as unsigned integers; the first
    /// differing octet decides.
    ///
    /// # Errors
    /// `Error::FamilyMismatch` if the families differ.
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        if self.family() != other.family() {
            return Err(Error::FamilyMismatch {
                left: self.family(),
                right: other.family(),
            });
        }
        Ok(self.octets().cmp(other.octets()))
    }

    /// The smaller of two same-family addresses.
    pub fn min(a: Self, b: Self) -> Result<Self> {
        match a.compare(&b)? {
            Ordering::Greater => Ok(b),
            _ => Ok(a),
        }
    }

    /// The larger of two same-family addresses.
    pub fn max(a: Self, b: Self) -> Result<Self> {
        match a.compare(&b)? {
            Ordering::Less => Ok(b),
            _ => Ok(a),
        }
    }

    /// Parse a textual address of either family.
    ///
    /// Accepts strict dotted-quad IPv4 or standard/compressed colon-hex
    /// IPv6 notation, nothing else.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(addr) = s.parse::<Ipv4Addr>() {
            return Ok(RawAddress::V4(addr.octets()));
        }
        if let Ok(addr) = s.parse::<Ipv6Addr>() {
            return Ok(RawAddress::V6(addr.octets()));
        }
        Err(Error::Format(s.to_string()))
    }
}

impl fmt::Display for RawAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAddress::V4(bytes) => write!(f, "{}", Ipv4Addr::from(*bytes)),
            RawAddress::V6(bytes) => write!(f, "{}", Ipv6Addr::from(*bytes)),
        }
    }
}

impl std::str::FromStr for RawAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RawAddress::parse(s)
    }
}

impl From<Ipv4Addr> for RawAddress {
    fn from(addr: Ipv4Addr) -> Self {
        RawAddress::V4(addr.octets())
    }
}

impl From<Ipv6Addr> for RawAddress {
    fn from(addr: Ipv6Addr) -> Self {
        RawAddress::V6(addr.octets())
    }
}

impl From<IpAddr> for RawAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<RawAddress> for IpAddr {
    fn from(addr: RawAddress) -> Self {
        match addr {
            RawAddress::V4(bytes) => IpAddr::V4(Ipv4Addr::from(bytes)),
            RawAddress::V6(bytes) => IpAddr::V6(Ipv6Addr::from(bytes)),
        }
    }
}
