//! The log-line aggregation engine.
//!
//! A [`Scanner`] makes one forward pass over log lines and feeds three
//! independent observers: the session pipeline (grammar match → attribute
//! normalization → [`SessionTable`]), the [`IdentitySet`], and the
//! [`DateRange`]. The observers share no state, so a batch of files can be
//! scanned in parallel and merged afterward.

pub mod daterange;
pub mod fields;
pub mod grammar;
pub mod identity;
pub mod session;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

pub use daterange::DateRange;
pub use grammar::{LineMatch, Profile};
pub use identity::IdentitySet;
pub use session::{SessionKey, SessionRecord, SessionTable};

/// Errors from the file-level scan path. Line-level noise is never an
/// error; unrecognized lines are simply skipped.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to read log file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: io::Error,
    },
}

/// Counters accumulated during a scan, for the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Files consumed.
    pub files: usize,
    /// Total input size in bytes.
    pub bytes: u64,
    /// Lines read.
    pub lines: usize,
    /// Lines matched by a session grammar.
    pub matched: usize,
}

impl ScanStats {
    fn merge(&mut self, other: &ScanStats) {
        self.files += other.files;
        self.bytes += other.bytes;
        self.lines += other.lines;
        self.matched += other.matched;
    }
}

/// One scanning pass's owned state.
#[derive(Debug, Clone)]
pub struct Scanner {
    profiles: Vec<Profile>,
    pub sessions: SessionTable,
    pub identities: IdentitySet,
    pub dates: DateRange,
    pub stats: ScanStats,
}

impl Scanner {
    /// A scanner using the default reference year for date tracking.
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self::with_year(profiles, None)
    }

    /// A scanner tracking dates against an explicit year when given.
    pub fn with_year(profiles: Vec<Profile>, year: Option<i32>) -> Self {
        Self {
            profiles,
            sessions: SessionTable::new(),
            identities: IdentitySet::new(),
            dates: match year {
                Some(year) => DateRange::with_year(year),
                None => DateRange::new(),
            },
            stats: ScanStats::default(),
        }
    }

    /// Feed one raw log line to all three observers.
    pub fn scan_line(&mut self, line: &str) {
        let line = line.trim();
        self.stats.lines += 1;

        if let Some(matched) = grammar::match_line(line, &self.profiles) {
            self.stats.matched += 1;
            let key = SessionKey {
                user: matched.user,
                addr: matched.addr,
                timestamp: matched.timestamp,
            };
            self.sessions.observe(key, &matched.attribute, matched.value);
        }

        self.identities.observe(line);
        self.dates.observe_line(line);
    }

    /// Consume a reader line by line.
    pub fn scan_reader<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        for line in reader.lines() {
            let line = line?;
            self.scan_line(&line);
        }
        Ok(())
    }

    /// Consume one log file.
    pub fn scan_file(&mut self, path: &Path) -> Result<(), ScanError> {
        let read_error = |source: io::Error| ScanError::ReadFile {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_error)?;
        let bytes = file.metadata().map_err(read_error)?.len();
        self.scan_reader(BufReader::new(file)).map_err(read_error)?;

        self.stats.files += 1;
        self.stats.bytes += bytes;
        debug!(
            "scanned {}: {} lines, {} matched so far",
            path.display(),
            self.stats.lines,
            self.stats.matched
        );
        Ok(())
    }

    /// Fold another scanner's state into this one.
    ///
    /// Sessions merge last-write-wins by key, identities by union, date
    /// bounds by min/max. Merging in a fixed file order gives reproducible
    /// session ordering across runs.
    pub fn merge(&mut self, other: Scanner) {
        self.sessions.merge(other.sessions);
        self.identities.merge(other.identities);
        self.dates.merge(&other.dates);
        self.stats.merge(&other.stats);
    }
}

/// Scan a batch of files, one scanner per file in parallel, merged in the
/// order the paths were given. Callers pass sorted paths to make the global
/// line order (and therefore session order) deterministic.
pub fn scan_files(
    paths: &[PathBuf],
    profiles: &[Profile],
    year: Option<i32>,
) -> Result<Scanner, ScanError> {
    let scanned: Vec<Result<Scanner, ScanError>> = paths
        .par_iter()
        .map(|path| {
            let mut scanner = Scanner::with_year(profiles.to_vec(), year);
            scanner.scan_file(path)?;
            Ok(scanner)
        })
        .collect();

    let mut merged = Scanner::with_year(profiles.to_vec(), year);
    for scanner in scanned {
        merged.merge(scanner?);
    }
    Ok(merged)
}
