//! Symbolic firewall address keywords.

use std::fmt;

use crate::error::{Error, Result};

/// SpecialToken is a symbolic keyword standing in for addresses the
/// firewall resolves on its own (the local DHCP server, the local
/// subnet, and so on). There is no byte payload behind a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialToken {
    /// The DHCP server addresses
    Dhcp,
    /// The DNS server addresses
    Dns,
    /// The WINS server addresses
    Wins,
    /// The default gateway address
    DefaultGateway,
    /// Every address on the local subnet
    LocalSubnet,
}

impl SpecialToken {
    /// All keywords, in canonical order.
    pub const ALL: [SpecialToken; 5] = [
        SpecialToken::Dhcp,
        SpecialToken::Dns,
        SpecialToken::Wins,
        SpecialToken::DefaultGateway,
        SpecialToken::LocalSubnet,
    ];

    /// Parse a keyword (case-insensitive, whitespace-trimmed).
    ///
    /// Only exact matches are accepted; there are no abbreviations.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "DHCP" => Ok(SpecialToken::Dhcp),
            "DNS" => Ok(SpecialToken::Dns),
            "WINS" => Ok(SpecialToken::Wins),
            "DEFAULTGATEWAY" => Ok(SpecialToken::DefaultGateway),
            "LOCALSUBNET" => Ok(SpecialToken::LocalSubnet),
            _ => Err(Error::Format(s.trim().to_string())),
        }
    }

    /// Get the canonical keyword string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialToken::Dhcp => "DHCP",
            SpecialToken::Dns => "DNS",
            SpecialToken::Wins => "WINS",
            SpecialToken::DefaultGateway => "Defaultgateway",
            SpecialToken::LocalSubnet => "LocalSubnet",
        }
    }
}

impl fmt::Display for SpecialToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SpecialToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SpecialToken::parse(s)
    }
}
