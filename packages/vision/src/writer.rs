//! Persisting records and screenshots

use crate::types::{ReportOptions, ReportRecord};
use crate::Result;
use crc32fast::Hasher;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

const SUFFIX_LEN: usize = 7;
const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

static ARTIFACT_COUNTER: AtomicU64 = AtomicU64::new(0);

/// File naming for the artifacts of one failed session.
///
/// Records are named `<ElementNameNoSpaces>-automotion<epochMs><suffix>.json`,
/// screenshots `<ElementNameNoSpaces>-screenshot<epochMs><suffix>.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactName {
    pub stem: String,
    pub millis: i64,
    pub suffix: String,
}

impl ArtifactName {
    /// Name artifacts for an element at the current time
    pub fn new(element_name: &str) -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self::at(element_name, millis)
    }

    pub fn at(element_name: &str, millis: i64) -> Self {
        let counter = ARTIFACT_COUNTER.fetch_add(1, Ordering::Relaxed);
        let nanos = chrono::Utc::now().timestamp_subsec_nanos();
        Self {
            stem: element_name.replace(' ', ""),
            millis,
            suffix: suffix(&format!("{}:{}:{}:{}", element_name, millis, nanos, counter)),
        }
    }

    pub fn record_file(&self) -> String {
        format!("{}-automotion{}{}.json", self.stem, self.millis, self.suffix)
    }

    pub fn screenshot_file(&self) -> String {
        format!("{}-screenshot{}{}.png", self.stem, self.millis, self.suffix)
    }
}

/// Seven lowercase alphanumerics derived from a CRC32 of the seed
fn suffix(seed: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(seed.as_bytes());
    let mut value = u64::from(hasher.finalize()) << 8 | (seed.len() as u64 & 0xff);

    let mut out = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        let index = (value % SUFFIX_ALPHABET.len() as u64) as usize;
        out.push(SUFFIX_ALPHABET[index] as char);
        value /= SUFFIX_ALPHABET.len() as u64;
    }
    out
}

/// Writes records and screenshots into the configured directories
pub struct ReportWriter {
    options: ReportOptions,
}

impl ReportWriter {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Write a record as JSON, creating the record directory if needed
    pub fn write_record(&self, record: &ReportRecord, name: &ArtifactName) -> Result<PathBuf> {
        let dir = self.options.json_dir();
        std::fs::create_dir_all(&dir)?;

        let path = dir.join(name.record_file());
        let json = serde_json::to_string(record)?;
        std::fs::write(&path, json)?;

        info!(path = %path.display(), "Wrote validation record");
        Ok(path)
    }

    /// Write PNG bytes into the image directory
    pub fn write_screenshot(&self, png: &[u8], name: &ArtifactName) -> Result<PathBuf> {
        let dir = self.options.img_dir();
        std::fs::create_dir_all(&dir)?;

        let path = dir.join(name.screenshot_file());
        std::fs::write(&path, png)?;

        debug!(path = %path.display(), bytes = png.len(), "Wrote screenshot");
        Ok(path)
    }
}

/// Load every record under a directory, sorted by file name.
///
/// Files that are not valid records are skipped with a warning.
pub fn load_records(dir: &Path) -> Result<Vec<(PathBuf, ReportRecord)>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut records = Vec::new();
    for path in paths {
        let content = std::fs::read_to_string(&path)?;
        match serde_json::from_str::<ReportRecord>(&content) {
            Ok(record) => records.push((path, record)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable record");
            }
        }
    }

    Ok(records)
}
