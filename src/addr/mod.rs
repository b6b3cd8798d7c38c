//! Address value variants and the tagged union over them.
//!
//! Each variant owns its own parser and formatter. Several token shapes
//! are syntactically valid for more than one variant (a bare address is
//! a valid single IP, a degenerate range, and a single-host network), so
//! [`AddressValue::parse`] applies the variant parsers in a fixed
//! priority order: special token, range, single IP, network. That order
//! is part of the observable contract, not an implementation detail.

mod network;
mod range;
mod single;
mod special;

pub use network::NetworkAddress;
pub use range::AddressRange;
pub use single::SingleIp;
pub use special::SpecialToken;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// AddressValue is one firewall address specification token in
/// structured form.
///
/// Consumers depend only on formatting to the canonical wire string and
/// on structural equality; everything else lives on the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressValue {
    /// One address, or the universal wildcard
    Single(SingleIp),
    /// An inclusive range of same-family addresses
    Range(AddressRange),
    /// A base address and subnet mask
    Network(NetworkAddress),
    /// A symbolic keyword with no byte payload
    Special(SpecialToken),
}

impl AddressValue {
    /// Parse one token by trying the variant parsers in priority order.
    ///
    /// The first parser that accepts the token wins; a token no parser
    /// accepts is a format error. Because the range parser also accepts
    /// bare addresses, those decode as degenerate ranges here.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(token) = SpecialToken::parse(s) {
            return Ok(AddressValue::Special(token));
        }
        if let Ok(range) = AddressRange::parse(s) {
            return Ok(AddressValue::Range(range));
        }
        if let Ok(ip) = SingleIp::parse(s) {
            return Ok(AddressValue::Single(ip));
        }
        if let Ok(net) = NetworkAddress::parse(s) {
            return Ok(AddressValue::Network(net));
        }
        Err(Error::Format(s.to_string()))
    }

    /// `true` if the value is wildcard-equivalent in any variant's
    /// clothing: a lone wildcard, the degenerate any-range, or the
    /// single-host network on the wildcard base.
    pub fn is_any(&self) -> bool {
        match self {
            AddressValue::Single(ip) => ip.is_any(),
            AddressValue::Range(range) => range.is_any(),
            AddressValue::Network(net) => net.is_any(),
            AddressValue::Special(_) => false,
        }
    }
}

impl fmt::Display for AddressValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressValue::Single(ip) => write!(f, "{}", ip),
            AddressValue::Range(range) => write!(f, "{}", range),
            AddressValue::Network(net) => write!(f, "{}", net),
            AddressValue::Special(token) => write!(f, "{}", token),
        }
    }
}

impl std::str::FromStr for AddressValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AddressValue::parse(s)
    }
}

impl From<SingleIp> for AddressValue {
    fn from(ip: SingleIp) -> Self {
        AddressValue::Single(ip)
    }
}

impl From<AddressRange> for AddressValue {
    fn from(range: AddressRange) -> Self {
        AddressValue::Range(range)
    }
}

impl From<NetworkAddress> for AddressValue {
    fn from(net: NetworkAddress) -> Self {
        AddressValue::Network(net)
    }
}

impl From<SpecialToken> for AddressValue {
    fn from(token: SpecialToken) -> Self {
        AddressValue::Special(token)
    }
}

// Address values serialize as their wire strings so rule configurations
// can embed them directly.
impl Serialize for AddressValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AddressValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AddressValue::parse(&s).map_err(D::Error::custom)
    }
}
