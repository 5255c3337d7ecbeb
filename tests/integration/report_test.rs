//! End-to-end pipeline tests: log files on disk through `scan_files` to
//! the emitted report artifacts.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use gsr::{report, scanner, Profile, Scanner};

const FILE_ONE: &str = "\
Jun 16 10:22:01 gw DAP: User <alice@example.com>, Addr 10.0.0.5: Session Attribute aaa.cisco.grouppolicy = \"VPN-Policy\"
Jun 16 10:22:01 gw DAP: User <alice@example.com>, Addr 10.0.0.5: Session Attribute endpoint.anyconnect.devicetype = laptop
Jun 16 10:23:17 gw kernel: eth0 link up
";

const FILE_TWO: &str = "\
Jun 18 08:01:44 gw DAP: User <bob@example.com>, Addr 10.0.0.6: Session Attribute endpoint.anyconnect.publicmacaddress = aa:bb:cc:dd:ee:ff
10:22:01 gw DAP: User carol, Addr 10.0.0.7: Session Attribute aaa.cisco.tunnelgroup = Remote
";

fn write_logs(temp: &TempDir) -> Vec<PathBuf> {
    let logs = temp.path().join("logs");
    fs::create_dir_all(&logs).unwrap();
    fs::write(logs.join("day1.txt"), FILE_ONE).unwrap();
    fs::write(logs.join("day2.txt"), FILE_TWO).unwrap();
    vec![logs.join("day1.txt"), logs.join("day2.txt")]
}

fn scan_fixture(temp: &TempDir) -> Scanner {
    let paths = write_logs(temp);
    scanner::scan_files(&paths, &Profile::ALL, None).unwrap()
}

#[test]
fn scan_files_merges_in_file_order() {
    let temp = TempDir::new().unwrap();
    let scanner = scan_fixture(&temp);

    assert_eq!(scanner.stats.files, 2);
    assert_eq!(scanner.stats.lines, 5);
    assert_eq!(scanner.stats.matched, 4);
    assert_eq!(scanner.sessions.len(), 3);

    let users: Vec<_> = scanner.sessions.iter().map(|(k, _)| k.user.as_str()).collect();
    assert_eq!(users, ["<alice@example.com>", "<bob@example.com>", "carol"]);
}

#[test]
fn csv_report_snapshot() {
    let temp = TempDir::new().unwrap();
    let scanner = scan_fixture(&temp);

    let path = temp.path().join("report.csv");
    report::write_csv(&path, &scanner.sessions).unwrap();
    let contents = fs::read_to_string(&path).unwrap();

    insta::assert_snapshot!(contents.trim_end(), @r###"
    User Name,IP Address,Timestamp,Group Policy,Tunnel Group,Platform,Device Type,MAC Address,AnyConnect Version,Device Name,Device ID
    <alice@example.com>,10.0.0.5,Jun 16 10:22:01,VPN-Policy,,,laptop,,,,
    <bob@example.com>,10.0.0.6,Jun 18 08:01:44,,,,,aa:bb:cc:dd:ee:ff,,,
    carol,10.0.0.7,10:22,,Remote,,,,,,
    "###);
}

#[test]
fn user_list_snapshot() {
    let temp = TempDir::new().unwrap();
    let scanner = scan_fixture(&temp);

    let path = temp.path().join("users.txt");
    report::write_users(&path, &scanner.identities).unwrap();
    let contents = fs::read_to_string(&path).unwrap();

    insta::assert_snapshot!(contents.trim_end(), @r###"
    alice@example.com
    bob@example.com
    "###);
}

#[test]
fn coverage_spans_both_files() {
    let temp = TempDir::new().unwrap();
    let scanner = scan_fixture(&temp);
    assert_eq!(scanner.dates.summary().unwrap(), "Jun 16 - Jun 18");
}

#[test]
fn scanning_duplicated_content_is_size_stable() {
    let temp = TempDir::new().unwrap();
    let logs = temp.path().join("logs");
    fs::create_dir_all(&logs).unwrap();
    fs::write(logs.join("day1.txt"), FILE_ONE).unwrap();
    fs::write(logs.join("copy.txt"), FILE_ONE).unwrap();

    let paths = vec![logs.join("copy.txt"), logs.join("day1.txt")];
    let scanner = scanner::scan_files(&paths, &Profile::ALL, None).unwrap();

    assert_eq!(scanner.sessions.len(), 1);
    assert_eq!(scanner.identities.len(), 1);
    assert_eq!(scanner.dates.summary().unwrap(), "Jun 16 - Jun 16");
}

#[test]
fn scan_files_reports_unreadable_files() {
    let temp = TempDir::new().unwrap();
    let missing = vec![temp.path().join("absent.txt")];
    let err = scanner::scan_files(&missing, &Profile::ALL, None).unwrap_err();
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn scan_files_with_no_paths_yields_empty_state() {
    let scanner = scanner::scan_files(&[], &Profile::ALL, None).unwrap();
    assert!(scanner.sessions.is_empty());
    assert!(scanner.identities.is_empty());
    assert_eq!(scanner.stats.files, 0);
}
