//! File error types
//!
//! This module defines the errors raised while reading and writing the
//! customer files, keeping the offending path in every variant.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Direction of a file access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Read,
    Write,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOperation::Read => f.write_str("read"),
            FileOperation::Write => f.write_str("write"),
        }
    }
}

/// Errors that can occur during file operations
#[derive(Debug, Error)]
pub enum FileError {
    /// The file to read does not exist
    #[error("File not found: '{}'", .0.display())]
    NotFound(PathBuf),

    /// The process may not access the file
    #[error("Permission denied to {operation} '{}'", .path.display())]
    PermissionDenied {
        path: PathBuf,
        operation: FileOperation,
    },

    /// The file exists but its contents have the wrong shape
    #[error("Invalid format in '{}': {detail}", .path.display())]
    MalformedFormat { path: PathBuf, detail: String },

    /// Any other I/O failure
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSV reader or writer failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl FileError {
    /// Maps an I/O error on `path` to the most specific variant
    pub fn from_io(path: &Path, operation: FileOperation, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound if operation == FileOperation::Read => {
                FileError::NotFound(path.to_path_buf())
            }
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied {
                path: path.to_path_buf(),
                operation,
            },
            _ => FileError::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }

    /// Creates a format error for a file
    pub fn malformed(path: &Path, detail: impl Into<String>) -> Self {
        FileError::MalformedFormat {
            path: path.to_path_buf(),
            detail: detail.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            FileError::NotFound(_) => "ARC001",
            FileError::PermissionDenied { .. } => "ARC002",
            FileError::MalformedFormat { .. } => "ARC003",
            FileError::Io { .. } | FileError::Csv(_) => "ARC004",
        }
    }

    /// Checks if this error indicates a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, FileError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_maps_kinds() {
        let path = Path::new("datos/clientes.csv");

        let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert!(FileError::from_io(path, FileOperation::Read, missing).is_not_found());

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "no");
        let error = FileError::from_io(path, FileOperation::Write, denied);
        assert_eq!(error.code(), "ARC002");
        assert!(error.to_string().contains("write"));

        let other = io::Error::new(io::ErrorKind::Other, "disk");
        assert_eq!(FileError::from_io(path, FileOperation::Write, other).code(), "ARC004");
    }

    #[test]
    fn test_missing_parent_on_write_is_io() {
        let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
        let error = FileError::from_io(Path::new("x/y.csv"), FileOperation::Write, missing);
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_malformed_message() {
        let error = FileError::malformed(Path::new("in.csv"), "missing columns: tipo");
        assert_eq!(error.code(), "ARC003");
        assert_eq!(
            error.to_string(),
            "Invalid format in 'in.csv': missing columns: tipo"
        );
    }
}
