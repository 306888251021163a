//! Raw resume document — the sectioned line dump produced by the extraction
//! script, before any structure is recovered from it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Document compiled into the binary; used when no override path is set.
const DEFAULT_DOCUMENT: &str = include_str!("../../data/resume.json");

/// Ordered line arrays per named section. Sections absent from the source
/// file simply parse as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sections {
    #[serde(default)]
    pub profile: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

/// The raw document as emitted by the extractor: a display name, a single
/// pipe-delimited contact line, and the grouped section lines. Extra fields
/// in the JSON (`source`, `extracted_at`, `raw_lines`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub sections: Sections,
}

impl ResumeDocument {
    /// Loads the document from `path`, or the compiled-in default when no
    /// path is configured.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let raw = match path {
            Some(p) => fs::read_to_string(p)
                .with_context(|| format!("Failed to read resume document at {}", p.display()))?,
            None => DEFAULT_DOCUMENT.to_string(),
        };
        serde_json::from_str(&raw).context("Resume document is not valid JSON")
    }
}
