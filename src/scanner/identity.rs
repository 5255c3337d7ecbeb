//! User identity extraction.
//!
//! Independent of session aggregation: any line carrying a literal
//! `User <...>` marker contributes its captured token to a deduplicated
//! set, whether or not the line matches a session grammar.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    // The capture requires at least one character, so a literal `User <>`
    // contributes nothing.
    MARKER.get_or_init(|| Regex::new(r"User <([^>]+)>").expect("valid identity marker regex"))
}

/// Deduplicated set of identity tokens, iterated in sorted order.
#[derive(Debug, Clone, Default)]
pub struct IdentitySet {
    identities: BTreeSet<String>,
}

impl IdentitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search a line for the first `User <...>` marker and record its token.
    pub fn observe(&mut self, line: &str) {
        if let Some(caps) = marker_regex().captures(line) {
            self.identities.insert(caps[1].to_string());
        }
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.identities.contains(identity)
    }

    /// Identities in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identities.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Union another set into this one.
    pub fn merge(&mut self, other: IdentitySet) {
        self.identities.extend(other.identities);
    }
}
