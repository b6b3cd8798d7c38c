//! fwaddr - Parsing and formatting of firewall address specifications.
//!
//! This crate models the textual tokens a firewall rule uses to describe
//! which network addresses it applies to, and the bidirectional
//! conversion between that wire form and validated, structured values.
//!
//! # Features
//!
//! - **Single addresses**: IPv4 dotted-quad and IPv6 colon-hex, with a
//!   universal `*` wildcard
//! - **Address ranges**: `addr1-addr2` with normalized endpoints
//! - **Networks**: `addr/prefixLen` or `addr/maskAddr`, with the
//!   implied `[start, end]` span derived on demand
//! - **Special tokens**: symbolic keywords (`DHCP`, `DNS`, `WINS`,
//!   `LocalSubnet`, `Defaultgateway`) the firewall resolves itself
//! - **List codec**: comma-joined rule strings with permissive decoding
//!   and an absorbing wildcard on encoding
//! - **Immutable values**: every type is a plain value; all operations
//!   are pure and thread-safe by construction
//!
//! # Quick Start
//!
//! ```
//! use fwaddr::{decode, encode, AddressValue};
//!
//! // Parse a rule's address string
//! let values = decode("DNS,192.168.2.0/24,10.0.0.1-10.0.0.9");
//! assert_eq!(values.len(), 3);
//!
//! // Serialize it back for persisting
//! assert_eq!(
//!     encode(&values),
//!     "DNS,192.168.2.0/255.255.255.0,10.0.0.1-10.0.0.9"
//! );
//!
//! // Single tokens parse with the same grammar
//! let net = AddressValue::parse("192.168.2.0/24").unwrap();
//! assert_eq!(net.to_string(), "192.168.2.0/255.255.255.0");
//! ```
//!
//! # Wire grammar
//!
//! - Wildcard: `*`
//! - Single address: `a.b.c.d` or standard/compressed colon-hex
//! - Range: `addr1-addr2`, both endpoints the same family
//! - Network: `addr`, `addr/prefixLen` (1-32 for IPv4, 1-128 for IPv6),
//!   or `addr/maskAddr`; all-zero masks are rejected
//! - Special tokens, case-insensitive on input
//! - Composite list: comma-separated tokens in any mix of the above
//!
//! # Decoding priority
//!
//! List tokens are tried against the variant parsers in a fixed order:
//! special token, range, single IP, network. The order is observable
//! (a bare address decodes as a degenerate range, for example) and is
//! part of the contract. Tokens no parser accepts are dropped, not
//! errors; see [`decode`].

mod codec;
mod error;
mod family;
mod raw;

pub mod addr;

// Re-export core types
pub use addr::{AddressRange, AddressValue, NetworkAddress, SingleIp, SpecialToken};
pub use codec::{decode, encode, AddressList};
pub use error::{Error, Result};
pub use family::AddressFamily;
pub use raw::RawAddress;
