//! I/O boundary traits for testability
//!
//! These traits abstract how raw source text is fetched, allowing the
//! loader to be tested with in-memory implementations.

use std::collections::BTreeMap;
use std::io;

/// Produces raw source text for a locator.
pub trait SourceReader: Send + Sync {
    /// Read the full contents of the source at `locator`.
    fn read(&self, locator: &str) -> io::Result<String>;
}

/// Real filesystem implementation; locators are file paths.
#[derive(Debug, Default)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read(&self, locator: &str) -> io::Result<String> {
        std::fs::read_to_string(locator)
    }
}

/// In-memory reader; locators index a fixed set of documents.
#[derive(Debug, Default)]
pub struct StaticReader {
    documents: BTreeMap<String, String>,
}

impl StaticReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `text` under `locator`.
    pub fn with_document(mut self, locator: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(locator.into(), text.into());
        self
    }
}

impl SourceReader for StaticReader {
    fn read(&self, locator: &str) -> io::Result<String> {
        self.documents.get(locator).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such source: {locator}"))
        })
    }
}
