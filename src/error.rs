//! Error types for layout2md library.

use std::io;
use thiserror::Error;

/// Result type alias for layout2md operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering layouts.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The layout dump is not valid JSON for the document model.
    #[error("Invalid layout data: {0}")]
    Json(#[from] serde_json::Error),

    /// One or more requested pages do not exist.
    #[error("Page number(s) {} not in document ({page_count} pages)", join_pages(.pages))]
    PageOutOfRange {
        /// Offending 1-based page numbers (at most four)
        pages: Vec<u32>,
        /// Number of pages in the document
        page_count: u32,
    },

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),
}

fn join_pages(pages: &[u32]) -> String {
    pages
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PageOutOfRange {
            pages: vec![11],
            page_count: 10,
        };
        assert_eq!(
            err.to_string(),
            "Page number(s) 11 not in document (10 pages)"
        );

        let err = Error::PageOutOfRange {
            pages: vec![11, 12, 20],
            page_count: 10,
        };
        assert_eq!(
            err.to_string(),
            "Page number(s) 11, 12, 20 not in document (10 pages)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
