//! Canonical attribute table.
//!
//! Maps raw vendor attribute names to the human-readable column names used
//! in the report. The table is a fixed allow-list; anything not in it is
//! silently ignored by the aggregator.

/// Canonical column: user identifier (always key-derived).
pub const USER_NAME: &str = "User Name";
/// Canonical column: client address (always key-derived).
pub const IP_ADDRESS: &str = "IP Address";
/// Canonical column: timestamp fragment (always key-derived).
pub const TIMESTAMP: &str = "Timestamp";

/// Report columns, in emitted order.
pub const COLUMNS: [&str; 11] = [
    USER_NAME,
    IP_ADDRESS,
    TIMESTAMP,
    "Group Policy",
    "Tunnel Group",
    "Platform",
    "Device Type",
    "MAC Address",
    "AnyConnect Version",
    "Device Name",
    "Device ID",
];

/// Map a raw vendor attribute name to its canonical column.
///
/// Lookup is case-sensitive and exact; `None` means the attribute is not in
/// the allow-list and should be dropped.
pub fn canonical(attribute: &str) -> Option<&'static str> {
    match attribute {
        "aaa.cisco.username" => Some(USER_NAME),
        "Addr" => Some(IP_ADDRESS),
        "aaa.cisco.grouppolicy" => Some("Group Policy"),
        "aaa.cisco.tunnelgroup" => Some("Tunnel Group"),
        "endpoint.anyconnect.platform" => Some("Platform"),
        "endpoint.anyconnect.devicetype" => Some("Device Type"),
        "endpoint.anyconnect.macaddress[0]" | "endpoint.anyconnect.publicmacaddress" => {
            Some("MAC Address")
        }
        "endpoint.anyconnect.useragent" => Some("AnyConnect Version"),
        "endpoint.anyconnect.devicecomputername" => Some("Device Name"),
        "endpoint.anyconnect.deviceuniqueid" => Some("Device ID"),
        _ => None,
    }
}
