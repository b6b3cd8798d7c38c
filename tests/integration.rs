//! Integration tests for the public address codec API.

use fwaddr::{
    decode, encode, AddressList, AddressRange, AddressValue, Error, NetworkAddress, RawAddress,
    SingleIp, SpecialToken,
};

#[test]
fn test_single_ip_round_trip() {
    let ip = SingleIp::parse("192.168.1.1").unwrap();
    assert_eq!(ip.to_string(), "192.168.1.1");

    let any = SingleIp::parse("*").unwrap();
    assert!(any.is_any());
    assert_eq!(any.to_string(), "*");
}

#[test]
fn test_range_round_trip() {
    let range = AddressRange::parse("192.168.3.30-192.168.4.100").unwrap();
    assert_eq!(range.to_string(), "192.168.3.30-192.168.4.100");

    // Degenerate single-address range
    let range = AddressRange::parse("127.0.0.1").unwrap();
    assert_eq!(range.to_string(), "127.0.0.1");
}

#[test]
fn test_partial_wildcard_range_rejected() {
    assert_eq!(
        AddressRange::parse("0.0.0.0-192.168.1.1"),
        Err(Error::InvalidRange)
    );
}

#[test]
fn test_network_parse_and_format() {
    let net = NetworkAddress::parse("192.168.2.0/24").unwrap();
    assert_eq!(net.base(), RawAddress::parse("192.168.2.0").unwrap());
    assert_eq!(net.mask(), RawAddress::parse("255.255.255.0").unwrap());
    assert_eq!(net.to_string(), "192.168.2.0/255.255.255.0");
}

#[test]
fn test_zero_masks_rejected_in_both_families() {
    assert_eq!(NetworkAddress::parse("127.0.0.1/0"), Err(Error::InvalidMask));
    assert_eq!(NetworkAddress::parse("::1/0"), Err(Error::InvalidMask));
}

#[test]
fn test_special_token_list_round_trip() {
    let values = decode("DNS,DHCP,LocalSubnet");
    assert_eq!(values.len(), 3);
    assert_eq!(encode(&values), "DNS,DHCP,LocalSubnet");
}

#[test]
fn test_wildcard_absorbs_mixed_list() {
    let mut values = decode(
        "DNS,DHCP,192.168.1.1,10.0.0.1-10.0.0.9,172.16.0.0/12,WINS,2001:db8::1,Defaultgateway",
    );
    assert_eq!(values.len(), 8);
    values.push(AddressValue::Single(SingleIp::Any));
    assert_eq!(encode(&values), "*");
}

#[test]
fn test_default_gateway_round_trip() {
    let token = SpecialToken::parse("Defaultgateway").unwrap();
    assert_eq!(token.to_string(), "Defaultgateway");
    assert_eq!(SpecialToken::parse("*"), Err(Error::Format("*".to_string())));
}

#[test]
fn test_family_mismatch_surfaces_everywhere() {
    let v4 = RawAddress::parse("10.0.0.1").unwrap();
    let v6 = RawAddress::parse("2001:db8::1").unwrap();

    assert!(matches!(
        v4.compare(&v6),
        Err(Error::FamilyMismatch { .. })
    ));
    assert!(matches!(
        AddressRange::new(v4, v6),
        Err(Error::FamilyMismatch { .. })
    ));
    assert!(matches!(
        NetworkAddress::new(v4, RawAddress::parse("ffff::").unwrap()),
        Err(Error::FamilyMismatch { .. })
    ));
}

#[test]
fn test_range_constructor_argument_order_not_observable() {
    let a = RawAddress::parse("10.0.0.200").unwrap();
    let b = RawAddress::parse("10.0.0.1").unwrap();
    assert_eq!(
        AddressRange::new(a, b).unwrap(),
        AddressRange::new(b, a).unwrap()
    );
}

#[test]
fn test_zero_address_canonicalizes_to_wildcard() {
    let ip = SingleIp::parse("0.0.0.0").unwrap();
    assert_eq!(ip.to_string(), "*");
}

#[test]
fn test_decode_drops_malformed_tokens_silently() {
    let values = decode("DNS,this-is-not-an-address,DHCP,300.300.300.300");
    assert_eq!(values.len(), 2);
    assert_eq!(encode(&values), "DNS,DHCP");
}

#[test]
fn test_decode_never_fails_on_garbage() {
    assert!(decode("!!!,???,,,").is_empty());
    assert!(decode("").is_empty());
}

#[test]
fn test_full_wire_round_trip() {
    let wire = "DHCP,DNS,WINS,Defaultgateway,LocalSubnet,\
                192.168.1.1,10.0.0.1-10.0.0.200,172.16.0.0/255.240.0.0,2001:db8::1";
    assert_eq!(encode(&decode(wire)), wire);
}

#[test]
fn test_network_bounds_exclude_network_and_broadcast() {
    let net = NetworkAddress::parse("192.168.2.0/24").unwrap();
    let (start, end) = net.bounds();
    assert_eq!(start, RawAddress::parse("192.168.2.1").unwrap());
    assert_eq!(end, RawAddress::parse("192.168.2.254").unwrap());
}

#[test]
fn test_address_list_serde_embedding() {
    // The shape a rule config would persist: address lists as wire strings
    let list = AddressList::decode("DNS,192.168.2.0/24");
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "\"DNS,192.168.2.0/255.255.255.0\"");

    let back: AddressList = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
}

#[test]
fn test_v6_tokens_round_trip() {
    let wire = "2001:db8::1,2001:db8::1-2001:db8::ff,2001:db8::/ffff:ffff::";
    assert_eq!(encode(&decode(wire)), wire);
}
