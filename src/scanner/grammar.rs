//! Line grammars for gateway session logs.
//!
//! Gateways emit session attributes one per line, in a handful of slightly
//! different shapes. Each shape is modeled as a named [`Profile`] so the
//! variants can be enabled, listed, and tested independently instead of
//! living in parallel near-duplicate code paths.

use std::sync::OnceLock;

use regex::Regex;

/// A named line grammar recognized by the scanner.
///
/// Profiles are mutually exclusive by construction: the leading timestamp
/// shapes do not overlap, so at most one profile matches any given line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Lines led by a `Mon DD HH:MM:SS` syslog timestamp.
    Syslog,
    /// Lines led by a bare `HH:MM:SS` time.
    BareTime,
}

/// Fields extracted from one matched line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMatch {
    /// Which grammar profile recognized the line.
    pub profile: Profile,
    /// Raw user identifier, exactly as it appears after `User `.
    pub user: String,
    /// Raw address, exactly as it appears after `Addr `.
    pub addr: String,
    /// Timestamp fragment used as the session-key component. Its granularity
    /// depends on the profile; see [`Profile::key_granularity`].
    pub timestamp: String,
    /// Raw vendor attribute name (not yet normalized).
    pub attribute: String,
    /// Attribute value, with surrounding quotes stripped when the profile
    /// says so. May be empty.
    pub value: String,
}

impl Profile {
    /// Every known profile, in the order they are attempted.
    pub const ALL: [Profile; 2] = [Profile::Syslog, Profile::BareTime];

    /// Stable name used in configuration and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Profile::Syslog => "syslog",
            Profile::BareTime => "bare-time",
        }
    }

    /// Look up a profile by its configuration name.
    pub fn from_name(name: &str) -> Option<Profile> {
        Profile::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// One-line description for `gsr profiles`.
    pub fn describe(&self) -> &'static str {
        match self {
            Profile::Syslog => "lines led by 'Mon DD HH:MM:SS'",
            Profile::BareTime => "lines led by a bare 'HH:MM:SS'",
        }
    }

    /// The portion of the line timestamp that ends up in the session key.
    pub fn key_granularity(&self) -> &'static str {
        match self {
            Profile::Syslog => "second",
            Profile::BareTime => "minute",
        }
    }

    /// Whether surrounding double quotes are stripped from attribute values.
    ///
    /// The source formats disagreed on this; the canonical behavior is to
    /// strip in every profile. Kept as a per-profile property so a divergent
    /// profile can be added without touching the match path.
    pub fn strip_quotes(&self) -> bool {
        true
    }

    fn regex(&self) -> &'static Regex {
        match self {
            Profile::Syslog => {
                static RE: OnceLock<Regex> = OnceLock::new();
                RE.get_or_init(|| {
                    Regex::new(
                        r"^(?P<month>[A-Za-z]{3})\s+(?P<day>\d{1,2})\s+(?P<time>\d{2}:\d{2}:\d{2})\s.*?DAP: User (?P<user>[^,]+), Addr (?P<ip>[^:]+): Session Attribute (?P<attr>[^\s=]+) = ?(?P<value>.*)$",
                    )
                    .expect("valid syslog grammar regex")
                })
            }
            Profile::BareTime => {
                static RE: OnceLock<Regex> = OnceLock::new();
                RE.get_or_init(|| {
                    Regex::new(
                        r"^(?P<time>\d{2}:\d{2}):\d{2}\s.*?DAP: User (?P<user>[^,]+), Addr (?P<ip>[^:]+): Session Attribute (?P<attr>[^\s=]+) = ?(?P<value>.*)$",
                    )
                    .expect("valid bare-time grammar regex")
                })
            }
        }
    }

    /// Try this profile against a full line.
    ///
    /// Returns `None` when the line does not have this shape. An empty
    /// attribute value still matches and propagates the empty string.
    pub fn apply(&self, line: &str) -> Option<LineMatch> {
        let caps = self.regex().captures(line)?;

        let timestamp = match self {
            Profile::Syslog => format!("{} {} {}", &caps["month"], &caps["day"], &caps["time"]),
            Profile::BareTime => caps["time"].to_string(),
        };

        let value = if self.strip_quotes() {
            caps["value"].trim_matches('"').to_string()
        } else {
            caps["value"].to_string()
        };

        Some(LineMatch {
            profile: *self,
            user: caps["user"].to_string(),
            addr: caps["ip"].to_string(),
            timestamp,
            attribute: caps["attr"].to_string(),
            value,
        })
    }
}

/// Try each enabled profile in order and return the first match.
pub fn match_line(line: &str, profiles: &[Profile]) -> Option<LineMatch> {
    profiles.iter().find_map(|profile| profile.apply(line))
}
