//! Customer Domain Ports
//!
//! The registry reports business events (customers added, removed or
//! modified, and operation errors) to an [`AuditSink`]. The sink decides
//! where entries go; the file-backed implementation lives in `infra_files`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_customer::{CustomerRegistry, ports::AuditSink};
//! use std::sync::Arc;
//!
//! let sink: Arc<dyn AuditSink> = Arc::new(FileLogSink::new(storage.log_file()));
//! let registry = CustomerRegistry::new().with_audit(sink);
//! ```
//!
//! Sink failures never abort a registry operation; the registry traces
//! them and carries on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::customer::{Customer, CustomerProfile};
use crate::kind::CustomerKind;

/// Severity of an audit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditLevel {
    Info,
    Warning,
    Error,
}

impl AuditLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditLevel::Info => "INFO",
            AuditLevel::Warning => "WARNING",
            AuditLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for AuditLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditLevel {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INFO" => Ok(AuditLevel::Info),
            "WARNING" | "WARN" => Ok(AuditLevel::Warning),
            "ERROR" => Ok(AuditLevel::Error),
            other => Err(AuditError::UnknownLevel(other.to_string())),
        }
    }
}

/// Errors raised by audit sinks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditError {
    /// The destination could not be written
    #[error("Audit sink unavailable: {0}")]
    Unavailable(String),

    /// A level name that is not INFO, WARNING or ERROR
    #[error("Unknown audit level: '{0}'")]
    UnknownLevel(String),
}

/// A business event worth recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEvent {
    Added {
        name: String,
        kind: CustomerKind,
        email: String,
    },
    Removed {
        name: String,
        kind: CustomerKind,
        email: String,
    },
    Modified {
        name: String,
        fields: Vec<String>,
    },
    Error {
        context: String,
        message: String,
    },
}

impl AuditEvent {
    pub fn added(customer: &Customer) -> Self {
        AuditEvent::Added {
            name: customer.name().to_string(),
            kind: customer.kind(),
            email: customer.email().to_string(),
        }
    }

    pub fn removed(customer: &Customer) -> Self {
        AuditEvent::Removed {
            name: customer.name().to_string(),
            kind: customer.kind(),
            email: customer.email().to_string(),
        }
    }

    pub fn modified<S: AsRef<str>>(customer: &Customer, fields: &[S]) -> Self {
        AuditEvent::Modified {
            name: customer.name().to_string(),
            fields: fields.iter().map(|f| f.as_ref().to_string()).collect(),
        }
    }

    /// An error event; an empty context is omitted from the message
    pub fn error(context: impl Into<String>, message: impl fmt::Display) -> Self {
        AuditEvent::Error {
            context: context.into(),
            message: message.to_string(),
        }
    }

    pub fn level(&self) -> AuditLevel {
        match self {
            AuditEvent::Error { .. } => AuditLevel::Error,
            _ => AuditLevel::Info,
        }
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditEvent::Added { name, kind, email } => {
                write!(f, "ADDED: new customer '{}' ({}) - email: {}", name, kind, email)
            }
            AuditEvent::Removed { name, kind, email } => {
                write!(f, "REMOVED: customer '{}' ({}) - email: {}", name, kind, email)
            }
            AuditEvent::Modified { name, fields } => {
                write!(f, "MODIFIED: customer '{}' - fields: {}", name, fields.join(", "))
            }
            AuditEvent::Error { context, message } if context.is_empty() => {
                write!(f, "ERROR: {}", message)
            }
            AuditEvent::Error { context, message } => {
                write!(f, "ERROR in {}: {}", context, message)
            }
        }
    }
}

/// Destination for the append-only business log
pub trait AuditSink: Send + Sync {
    /// Records one entry
    fn record(&self, level: AuditLevel, message: &str) -> Result<(), AuditError>;

    /// Records a business event at its own level
    fn record_event(&self, event: &AuditEvent) -> Result<(), AuditError> {
        self.record(event.level(), &event.to_string())
    }
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// In-memory sink capturing every entry
    #[derive(Debug, Default)]
    pub struct RecordingAuditSink {
        entries: Mutex<Vec<(AuditLevel, String)>>,
    }

    impl RecordingAuditSink {
        /// Creates an empty sink
        pub fn new() -> Self {
            Self::default()
        }

        /// Entries recorded so far, oldest first
        pub fn entries(&self) -> Vec<(AuditLevel, String)> {
            self.entries
                .lock()
                .map(|entries| entries.clone())
                .unwrap_or_default()
        }

        /// Messages recorded so far, oldest first
        pub fn messages(&self) -> Vec<String> {
            self.entries().into_iter().map(|(_, message)| message).collect()
        }
    }

    impl AuditSink for RecordingAuditSink {
        fn record(&self, level: AuditLevel, message: &str) -> Result<(), AuditError> {
            let mut entries = self
                .entries
                .lock()
                .map_err(|e| AuditError::Unavailable(e.to_string()))?;
            entries.push((level, message.to_string()));
            Ok(())
        }
    }

    /// Sink that rejects every entry
    #[derive(Debug, Default)]
    pub struct FailingAuditSink;

    impl AuditSink for FailingAuditSink {
        fn record(&self, _level: AuditLevel, _message: &str) -> Result<(), AuditError> {
            Err(AuditError::Unavailable("mock sink always fails".to_string()))
        }
    }
}
