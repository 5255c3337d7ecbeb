//! Scenario tests for the aggregation engine, driven through `scan_reader`.

use std::io::Cursor;

use gsr::{Profile, Scanner};

fn scan(input: &str) -> Scanner {
    let mut scanner = Scanner::new(Profile::ALL.to_vec());
    scanner.scan_reader(Cursor::new(input)).unwrap();
    scanner
}

#[test]
fn sample_session_line_produces_record_and_identity() {
    let scanner = scan(
        "Jun 16 10:22:01 host: DAP: User <alice@example.com>, Addr 10.0.0.5: Session Attribute aaa.cisco.grouppolicy = \"VPN-Policy\"\n",
    );

    assert_eq!(scanner.sessions.len(), 1);
    let (key, record) = scanner.sessions.iter().next().unwrap();
    assert_eq!(key.user, "<alice@example.com>");
    assert_eq!(key.addr, "10.0.0.5");
    assert_eq!(key.timestamp, "Jun 16 10:22:01");
    assert_eq!(record.get("Group Policy"), Some("VPN-Policy"));
    assert!(scanner.identities.contains("alice@example.com"));
}

#[test]
fn unmapped_attribute_only_contributes_key_fields() {
    let scanner = scan(
        "Jun 16 10:22:01 gw DAP: User u, Addr 10.0.0.1: Session Attribute endpoint.os.version = 11\n",
    );

    assert_eq!(scanner.sessions.len(), 1);
    let (_, record) = scanner.sessions.iter().next().unwrap();
    assert_eq!(record.len(), 3);
    assert_eq!(record.get("User Name"), Some("u"));
    assert_eq!(record.get("IP Address"), Some("10.0.0.1"));
    assert_eq!(record.get("Timestamp"), Some("Jun 16 10:22:01"));
}

#[test]
fn final_record_holds_last_value_written_per_field() {
    let scanner = scan(concat!(
        "Jun 16 10:22:01 gw DAP: User u, Addr 10.0.0.1: Session Attribute aaa.cisco.grouppolicy = First\n",
        "Jun 16 10:22:01 gw DAP: User u, Addr 10.0.0.1: Session Attribute endpoint.anyconnect.devicetype = laptop\n",
        "Jun 16 10:22:01 gw DAP: User u, Addr 10.0.0.1: Session Attribute aaa.cisco.grouppolicy = Second\n",
    ));

    assert_eq!(scanner.sessions.len(), 1);
    let (key, record) = scanner.sessions.iter().next().unwrap();
    assert_eq!(record.get("Group Policy"), Some("Second"));
    assert_eq!(record.get("Device Type"), Some("laptop"));
    assert_eq!(record.get("User Name"), Some(key.user.as_str()));
    assert_eq!(record.get("IP Address"), Some(key.addr.as_str()));
    assert_eq!(record.get("Timestamp"), Some(key.timestamp.as_str()));
}

#[test]
fn device_type_then_mac_merge_into_one_record() {
    let scanner = scan(concat!(
        "Jun 16 10:22:01 gw DAP: User u, Addr 10.0.0.1: Session Attribute endpoint.anyconnect.devicetype = laptop\n",
        "Jun 16 10:22:01 gw DAP: User u, Addr 10.0.0.1: Session Attribute endpoint.anyconnect.publicmacaddress = aa:bb:cc:dd:ee:ff\n",
    ));

    assert_eq!(scanner.sessions.len(), 1);
    let (_, record) = scanner.sessions.iter().next().unwrap();
    assert_eq!(record.get("Device Type"), Some("laptop"));
    assert_eq!(record.get("MAC Address"), Some("aa:bb:cc:dd:ee:ff"));
}

#[test]
fn empty_attribute_value_is_recorded_as_empty_string() {
    let scanner = scan(
        "Jun 16 10:22:01 gw DAP: User u, Addr 10.0.0.1: Session Attribute endpoint.anyconnect.devicecomputername = \n",
    );

    let (_, record) = scanner.sessions.iter().next().unwrap();
    assert_eq!(record.get("Device Name"), Some(""));
}

#[test]
fn line_without_marker_contributes_nothing() {
    let scanner = scan("a quick brown fox jumped over the lazy dog\n");

    assert!(scanner.sessions.is_empty());
    assert!(scanner.identities.is_empty());
    assert_eq!(scanner.dates.min(), None);
    assert_eq!(scanner.stats.lines, 1);
}

#[test]
fn mixed_profiles_produce_separate_keys() {
    // Same user and address, but the two grammars keep different timestamp
    // granularities, so the keys differ byte-for-byte.
    let scanner = scan(concat!(
        "Jun 16 10:22:01 gw DAP: User u, Addr 10.0.0.1: Session Attribute endpoint.anyconnect.devicetype = laptop\n",
        "10:22:01 gw DAP: User u, Addr 10.0.0.1: Session Attribute endpoint.anyconnect.devicetype = laptop\n",
    ));

    assert_eq!(scanner.sessions.len(), 2);
    let timestamps: Vec<_> = scanner.sessions.iter().map(|(k, _)| k.timestamp.as_str()).collect();
    assert_eq!(timestamps, ["Jun 16 10:22:01", "10:22"]);
}

#[test]
fn disabled_profile_lines_are_skipped() {
    let mut scanner = Scanner::new(vec![Profile::Syslog]);
    scanner
        .scan_reader(Cursor::new(
            "10:22:01 gw DAP: User u, Addr 10.0.0.1: Session Attribute endpoint.anyconnect.devicetype = laptop\n",
        ))
        .unwrap();

    assert!(scanner.sessions.is_empty());
    assert_eq!(scanner.stats.matched, 0);
}

#[test]
fn stats_count_lines_and_matches() {
    let scanner = scan(concat!(
        "Jun 16 10:22:01 gw DAP: User u, Addr 10.0.0.1: Session Attribute Addr = 10.0.0.1\n",
        "Jun 16 10:22:02 gw kernel: eth0 link up\n",
        "not even a timestamp\n",
    ));

    assert_eq!(scanner.stats.lines, 3);
    assert_eq!(scanner.stats.matched, 1);
}
