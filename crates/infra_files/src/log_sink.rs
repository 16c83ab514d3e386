//! Append-only audit log
//!
//! Each entry is a single line:
//!
//! ```text
//! [2024-03-15 09:30:05] [INFO] ADDED: new customer 'Ana' (Premium) - email: ana@x.com
//! ```
//!
//! Writing never panics. [`FileLogSink::append`] reports failures as a
//! [`FileError`]; the `log*` helpers absorb them and return `false`.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;
use core_kernel::{format_timestamp, parse_timestamp, Clock, SystemClock};
use domain_customer::{AuditError, AuditEvent, AuditLevel, AuditSink, Customer};
use tracing::warn;

use crate::config::ensure_parent;
use crate::error::{FileError, FileOperation};

/// One parsed log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub level: AuditLevel,
    pub message: String,
}

impl LogEntry {
    pub fn new(timestamp: NaiveDateTime, level: AuditLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
        }
    }

    /// Parses a line written by [`FileLogSink`]
    ///
    /// Returns `None` for lines that do not follow the entry layout.
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.trim_end().strip_prefix('[')?;
        let (timestamp, rest) = rest.split_once("] [")?;
        let (level, message) = rest.split_once("] ")
            .or_else(|| rest.strip_suffix(']').map(|level| (level, "")))?;

        Some(Self {
            timestamp: parse_timestamp(timestamp).ok()?,
            level: level.parse().ok()?,
            message: message.to_string(),
        })
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] {}",
            format_timestamp(&self.timestamp),
            self.level,
            self.message
        )
    }
}

/// Audit sink appending entries to a text file
#[derive(Clone)]
pub struct FileLogSink {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for FileLogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLogSink").field("path", &self.path).finish()
    }
}

impl FileLogSink {
    /// Creates a sink stamping entries with the local time
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used to stamp entries
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry, creating the file and its directory when missing
    pub fn append(&self, level: AuditLevel, message: &str) -> Result<(), FileError> {
        ensure_parent(&self.path)?;

        let entry = LogEntry::new(self.clock.now(), level, message);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| FileError::from_io(&self.path, FileOperation::Write, e))?;

        writeln!(file, "{}", entry)
            .map_err(|e| FileError::from_io(&self.path, FileOperation::Write, e))
    }

    /// Appends one entry, returning whether it was written
    pub fn log(&self, level: AuditLevel, message: &str) -> bool {
        match self.append(level, message) {
            Ok(()) => true,
            Err(error) => {
                warn!(path = %self.path.display(), error = %error, "Log entry dropped");
                false
            }
        }
    }

    pub fn info(&self, message: &str) -> bool {
        self.log(AuditLevel::Info, message)
    }

    fn log_event(&self, event: &AuditEvent) -> bool {
        self.log(event.level(), &event.to_string())
    }

    pub fn log_customer_added(&self, customer: &Customer) -> bool {
        self.log_event(&AuditEvent::added(customer))
    }

    pub fn log_customer_removed(&self, customer: &Customer) -> bool {
        self.log_event(&AuditEvent::removed(customer))
    }

    pub fn log_customer_modified<S: AsRef<str>>(&self, customer: &Customer, fields: &[S]) -> bool {
        self.log_event(&AuditEvent::modified(customer, fields))
    }

    /// Logs an error at ERROR level; pass an empty context to omit it
    pub fn log_error(&self, context: &str, error: impl fmt::Display) -> bool {
        self.log_event(&AuditEvent::error(context, error))
    }

    /// Returns the last `n` lines of the log, oldest first
    ///
    /// A log that does not exist yet reads as empty.
    pub fn tail(&self, n: usize) -> Result<Vec<String>, FileError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(FileError::from_io(&self.path, FileOperation::Read, e)),
        };

        let lines: Vec<&str> = contents.lines().filter(|l| !l.trim().is_empty()).collect();
        let start = lines.len().saturating_sub(n);
        Ok(lines[start..].iter().map(|l| l.to_string()).collect())
    }

    /// Returns the last `n` entries that parse, oldest first
    pub fn tail_entries(&self, n: usize) -> Result<Vec<LogEntry>, FileError> {
        Ok(self.tail(n)?.iter().filter_map(|l| LogEntry::parse(l)).collect())
    }
}

impl AuditSink for FileLogSink {
    fn record(&self, level: AuditLevel, message: &str) -> Result<(), AuditError> {
        self.append(level, message)
            .map_err(|e| AuditError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::FixedClock;

    fn sink_in(dir: &Path) -> FileLogSink {
        let clock = FixedClock::at(2024, 3, 15, 9, 30, 5).unwrap();
        FileLogSink::new(dir.join("logs").join("app.log")).with_clock(Arc::new(clock))
    }

    #[test]
    fn test_append_writes_formatted_line() {
        let dir = tempfile::tempdir().unwrap();
        let sink = sink_in(dir.path());

        assert!(sink.info("EXPORT: 3 customers"));

        let contents = fs::read_to_string(sink.path()).unwrap();
        assert_eq!(contents, "[2024-03-15 09:30:05] [INFO] EXPORT: 3 customers\n");
    }

    #[test]
    fn test_tail_returns_last_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let sink = sink_in(dir.path());
        for i in 0..5 {
            sink.info(&format!("entry {}", i));
        }

        let tail = sink.tail(2).unwrap();
        assert_eq!(tail.len(), 2);
        assert!(tail[0].ends_with("entry 3"));
        assert!(tail[1].ends_with("entry 4"));
        assert_eq!(sink.tail(50).unwrap().len(), 5);
    }

    #[test]
    fn test_tail_of_missing_log_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(sink_in(dir.path()).tail(10).unwrap().is_empty());
    }

    #[test]
    fn test_unwritable_log_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("logs");
        fs::write(&blocker, "not a directory").unwrap();

        let sink = sink_in(dir.path());
        assert!(!sink.info("lost"));
        assert!(sink.record(AuditLevel::Info, "lost").is_err());
    }

    #[test]
    fn test_parse_round_trip() {
        let line = "[2024-03-15 09:30:05] [ERROR] ERROR in import: bad row";
        let entry = LogEntry::parse(line).unwrap();
        assert_eq!(entry.level, AuditLevel::Error);
        assert_eq!(entry.message, "ERROR in import: bad row");
        assert_eq!(entry.to_string(), line);
    }

    #[test]
    fn test_parse_rejects_other_lines() {
        assert!(LogEntry::parse("plain text").is_none());
        assert!(LogEntry::parse("[yesterday] [INFO] msg").is_none());
        assert!(LogEntry::parse("[2024-03-15 09:30:05] [LOUD] msg").is_none());
    }
}
