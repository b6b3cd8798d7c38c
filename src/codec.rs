//! Comma-joined wire string codec for address lists.
//!
//! This is the boundary the firewall rule objects talk to: they hand a
//! stored rule string to [`decode`] and persist whatever [`encode`]
//! produces. Decoding is deliberately permissive: a token no variant
//! parser accepts is dropped, never an error. Rule strings
//! written by other tools routinely carry tokens this grammar does not
//! cover, and a single stray token must not invalidate the whole rule.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::addr::AddressValue;

/// Serialize address values to the comma-joined wire string.
///
/// The wildcard is absorbing: if any element is wildcard-equivalent the
/// output is exactly `*`, whatever else the list holds. Otherwise the
/// elements format in their original order.
pub fn encode(values: &[AddressValue]) -> String {
    if values.iter().any(AddressValue::is_any) {
        return "*".to_string();
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a comma-joined wire string into address values.
///
/// Tokens are tried against the variant parsers in the fixed priority
/// order (special token, range, single IP, network). Empty tokens are
/// skipped; a token no parser accepts is logged and dropped. Decoding
/// never fails.
pub fn decode(s: &str) -> Vec<AddressValue> {
    let mut values = Vec::new();
    for token in s.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match AddressValue::parse(token) {
            Ok(value) => values.push(value),
            Err(e) => {
                log::debug!("Dropped unparsable address token {:?}: {}", token, e);
            }
        }
    }
    values
}

/// AddressList is an ordered list of address values with the wire codec
/// behind the standard string conversions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressList(Vec<AddressValue>);

impl AddressList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a wire string. Never fails; see [`decode`].
    pub fn decode(s: &str) -> Self {
        Self(decode(s))
    }

    /// Serialize to the wire string; see [`encode`].
    pub fn encode(&self) -> String {
        encode(&self.0)
    }

    /// Append a value.
    pub fn push(&mut self, value: impl Into<AddressValue>) {
        self.0.push(value.into());
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The values, in order.
    pub fn as_slice(&self) -> &[AddressValue] {
        &self.0
    }

    /// Iterate over the values.
    pub fn iter(&self) -> std::slice::Iter<'_, AddressValue> {
        self.0.iter()
    }
}

impl From<Vec<AddressValue>> for AddressList {
    fn from(values: Vec<AddressValue>) -> Self {
        Self(values)
    }
}

impl FromIterator<AddressValue> for AddressList {
    fn from_iter<I: IntoIterator<Item = AddressValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AddressList {
    type Item = AddressValue;
    type IntoIter = std::vec::IntoIter<AddressValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressList {
    type Item = &'a AddressValue;
    type IntoIter = std::slice::Iter<'a, AddressValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for AddressList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl std::str::FromStr for AddressList {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AddressList::decode(s))
    }
}

impl Serialize for AddressList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for AddressList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(AddressList::decode(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addr::{AddressRange, SingleIp, SpecialToken};

    #[test]
    fn test_decode_mixed_list() {
        let values = decode("DNS,192.168.1.1,10.0.0.0/8,172.16.0.1-172.16.0.9");
        assert_eq!(values.len(), 4);
        assert!(matches!(values[0], AddressValue::Special(SpecialToken::Dns)));
        assert!(matches!(values[1], AddressValue::Range(_)));
        assert!(matches!(values[2], AddressValue::Network(_)));
        assert!(matches!(values[3], AddressValue::Range(_)));
    }

    #[test]
    fn test_decode_drops_unparsable_tokens() {
        // Permissive by contract: stray tokens vanish, decoding never fails
        let values = decode("DNS,bogus!!,10.0.0.1");
        assert_eq!(values.len(), 2);
        assert!(matches!(values[0], AddressValue::Special(SpecialToken::Dns)));
        assert_eq!(values[1].to_string(), "10.0.0.1");
    }

    #[test]
    fn test_decode_skips_empty_tokens() {
        let values = decode("DNS,,DHCP,");
        assert_eq!(values.len(), 2);
        assert_eq!(decode(""), Vec::new());
        assert_eq!(decode(",,,"), Vec::new());
    }

    #[test]
    fn test_encode_joins_in_order() {
        let values = decode("DNS,DHCP,LocalSubnet");
        assert_eq!(encode(&values), "DNS,DHCP,LocalSubnet");
    }

    #[test]
    fn test_encode_wildcard_absorbs_list() {
        let mut values = decode("DNS,192.168.1.1,10.0.0.0/8");
        values.push(AddressValue::Single(SingleIp::Any));
        values.extend(decode("172.16.0.1-172.16.0.9,WINS"));
        assert_eq!(encode(&values), "*");
    }

    #[test]
    fn test_encode_absorbs_any_variant_wildcard() {
        // decode("*") lands in the Range variant; absorption still holds
        let values = decode("192.168.1.1,*");
        assert!(matches!(values[1], AddressValue::Range(_)));
        assert_eq!(encode(&values), "*");
    }

    #[test]
    fn test_round_trip_preserves_canonical_forms() {
        let wire = "DNS,192.168.2.0/255.255.255.0,10.0.0.1-10.0.0.9,Defaultgateway";
        assert_eq!(encode(&decode(wire)), wire);
    }

    #[test]
    fn test_address_list_string_conversions() {
        let list: AddressList = "DNS,DHCP".parse().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), "DNS,DHCP");
    }

    #[test]
    fn test_address_list_push_and_iterate() {
        let mut list = AddressList::new();
        assert!(list.is_empty());
        list.push(SpecialToken::Dns);
        list.push(AddressRange::any());
        assert_eq!(list.len(), 2);
        assert_eq!(list.encode(), "*");
        assert_eq!(list.iter().count(), 2);
    }

    #[test]
    fn test_address_list_serde_round_trip() {
        let list = AddressList::decode("DNS,192.168.1.1");
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "\"DNS,192.168.1.1\"");
        let back: AddressList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
