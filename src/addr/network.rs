//! Network (base address + subnet mask) tokens.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use ipnet::{Ipv4Net, Ipv6Net};

use crate::error::{Error, Result};
use crate::family::AddressFamily;
use crate::raw::RawAddress;

use super::SingleIp;

/// NetworkAddress is a base address paired with a same-family subnet
/// mask.
///
/// The mask may come from a CIDR prefix length or be spelled out as an
/// address; either way it is stored and formatted in address notation.
/// An all-zero mask would make the network cover everything and is
/// rejected everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkAddress {
    base: RawAddress,
    mask: RawAddress,
}

impl NetworkAddress {
    /// Build a network from a base address and an explicit mask.
    ///
    /// # Errors
    /// `Error::FamilyMismatch` if base and mask belong to different
    /// families, `Error::InvalidMask` if the mask has no bits set.
    pub fn new(base: RawAddress, mask: RawAddress) -> Result<Self> {
        if base.family() != mask.family() {
            return Err(Error::FamilyMismatch {
                left: base.family(),
                right: mask.family(),
            });
        }
        if mask.is_wildcard() {
            return Err(Error::InvalidMask);
        }
        Ok(Self { base, mask })
    }

    /// Build a single-host network from a bare address.
    pub fn from_base(base: RawAddress) -> Self {
        Self {
            base,
            mask: RawAddress::host_mask(base.family()),
        }
    }

    /// The single-host network on the wildcard base; formats as `*`.
    pub fn any() -> Self {
        Self::from_base(RawAddress::wildcard(AddressFamily::V4))
    }

    /// Base address.
    pub fn base(&self) -> RawAddress {
        self.base
    }

    /// Subnet mask, in address form.
    pub fn mask(&self) -> RawAddress {
        self.mask
    }

    /// `true` if this is the wildcard network.
    pub fn is_any(&self) -> bool {
        self.base.is_wildcard() && self.mask.is_host_mask()
    }

    /// The inclusive `[start, end]` span the base and mask imply.
    ///
    /// A single-host mask yields `(base, base)`. Otherwise the span runs
    /// from `base AND mask` to `base OR NOT mask`, with the endpoints
    /// then nudged inward by one bit so the network and broadcast
    /// addresses themselves fall outside the span.
    pub fn bounds(&self) -> (RawAddress, RawAddress) {
        if self.mask.is_host_mask() {
            return (self.base, self.base);
        }
        match (self.base, self.mask) {
            (RawAddress::V4(base), RawAddress::V4(mask)) => {
                let (b, m) = (u32::from_be_bytes(base), u32::from_be_bytes(mask));
                let start = (b & m) | 1;
                let end = (b | !m) & !1;
                (
                    RawAddress::V4(start.to_be_bytes()),
                    RawAddress::V4(end.to_be_bytes()),
                )
            }
            (RawAddress::V6(base), RawAddress::V6(mask)) => {
                let (b, m) = (u128::from_be_bytes(base), u128::from_be_bytes(mask));
                let start = (b & m) | 1;
                let end = (b | !m) & !1;
                (
                    RawAddress::V6(start.to_be_bytes()),
                    RawAddress::V6(end.to_be_bytes()),
                )
            }
            // Families match by construction.
            _ => unreachable!("base and mask families verified at construction"),
        }
    }

    /// `true` if `addr` falls within the derived span.
    pub fn contains(&self, addr: &RawAddress) -> bool {
        if self.is_any() {
            return true;
        }
        let (start, end) = self.bounds();
        let after_start = matches!(
            start.compare(addr),
            Ok(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)
        );
        let before_end = matches!(
            addr.compare(&end),
            Ok(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)
        );
        after_start && before_end
    }

    /// Parse a network token.
    ///
    /// Accepts `*`, a bare address (single-host network),
    /// `addr/prefixLen` with `1..=32` (IPv4) or `1..=128` (IPv6), or
    /// `addr/maskAddr` with a same-family mask. Prefix length `0` and
    /// all-zero masks are rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.matches('/').count() {
            0 => match SingleIp::parse(s)? {
                SingleIp::Any => Ok(Self::any()),
                SingleIp::Addr(raw) => Ok(Self::from_base(raw)),
            },
            1 => {
                let (left, right) = s.split_once('/').ok_or_else(|| Error::Format(s.to_string()))?;
                let base = match SingleIp::parse(left)? {
                    SingleIp::Any => RawAddress::wildcard(AddressFamily::V4),
                    SingleIp::Addr(raw) => raw,
                };
                let mask = match right.trim().parse::<u8>() {
                    Ok(0) => return Err(Error::InvalidMask),
                    Ok(n) => mask_from_prefix(base.family(), n)
                        .ok_or_else(|| Error::Format(s.to_string()))?,
                    Err(_) => RawAddress::parse(right)?,
                };
                Self::new(base, mask)
            }
            _ => Err(Error::Format(s.to_string())),
        }
    }
}

/// Build the mask with the leading `prefix` bits set, or `None` when the
/// prefix exceeds the family width.
fn mask_from_prefix(family: AddressFamily, prefix: u8) -> Option<RawAddress> {
    match family {
        AddressFamily::V4 => Ipv4Net::new(Ipv4Addr::UNSPECIFIED, prefix)
            .ok()
            .map(|net| RawAddress::from(net.netmask())),
        AddressFamily::V6 => Ipv6Net::new(Ipv6Addr::UNSPECIFIED, prefix)
            .ok()
            .map(|net| RawAddress::from(net.netmask())),
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.bounds();
        if start == end {
            if self.base.is_wildcard() {
                write!(f, "*")
            } else {
                write!(f, "{}", self.base)
            }
        } else {
            write!(f, "{}/{}", self.base, self.mask)
        }
    }
}

impl std::str::FromStr for NetworkAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NetworkAddress::parse(s)
    }
}
