//! Report directory persistence: write and verify a run report on disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   run_report.json   - canonical JSON report
//!   run_digest.txt    - ASCII digest string (e.g. "sha256:...")
//! ```
//!
//! The directory path is never part of any hash surface.
//!
//! # Fail-closed semantics
//!
//! - Missing file → error
//! - Report bytes not canonical → error
//! - Stored digest differs from recomputed digest → error

use std::path::Path;

use crate::canon::canonical_json_bytes;
use crate::hash::{canonical_hash, ContentHash};
use crate::report::DOMAIN_RUN_REPORT;
use crate::runner::RunReportV1;

/// Report filename inside the directory.
pub const REPORT_FILENAME: &str = "run_report.json";
/// Digest filename inside the directory.
pub const DIGEST_FILENAME: &str = "run_digest.txt";

/// Error writing a report directory.
#[derive(Debug)]
pub enum ReportDirWriteError {
    /// I/O error during write.
    Io { detail: String },
    /// Canonical JSON serialization failed.
    CanonError { detail: String },
}

impl std::fmt::Display for ReportDirWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::CanonError { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for ReportDirWriteError {}

/// Error verifying a report directory.
#[derive(Debug)]
pub enum ReportDirVerifyError {
    /// I/O error during read.
    Io { detail: String },
    /// A required file is missing.
    MissingFile { filename: String },
    /// `run_report.json` is not valid JSON.
    ReportParseError { detail: String },
    /// `run_report.json` is valid JSON but not in canonical form.
    NonCanonicalReport,
    /// `run_digest.txt` is not a `ContentHash` string.
    MalformedDigest { raw: String },
    /// Stored digest does not match the recomputed digest.
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for ReportDirVerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::ReportParseError { detail } => write!(f, "report parse error: {detail}"),
            Self::NonCanonicalReport => write!(f, "report is not canonical JSON"),
            Self::MalformedDigest { raw } => write!(f, "malformed digest: {raw:?}"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(
                    f,
                    "digest mismatch: stored={stored}, recomputed={recomputed}"
                )
            }
        }
    }
}

impl std::error::Error for ReportDirVerifyError {}

/// Write `report` into `dir`, creating the directory if needed.
///
/// Returns the digest written to `run_digest.txt`.
///
/// # Errors
///
/// Returns [`ReportDirWriteError`] on I/O failure or canonical JSON error.
pub fn write_report_dir(
    report: &RunReportV1,
    dir: &Path,
) -> Result<ContentHash, ReportDirWriteError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportDirWriteError::Io {
        detail: format!("create {}: {e}", dir.display()),
    })?;

    let bytes = report
        .to_canonical_json_bytes()
        .map_err(|e| ReportDirWriteError::CanonError {
            detail: e.to_string(),
        })?;
    let digest = canonical_hash(DOMAIN_RUN_REPORT, &bytes);

    for (name, content) in [
        (REPORT_FILENAME, bytes.as_slice()),
        (DIGEST_FILENAME, digest.as_str().as_bytes()),
    ] {
        std::fs::write(dir.join(name), content).map_err(|e| ReportDirWriteError::Io {
            detail: format!("write {name}: {e}"),
        })?;
    }
    Ok(digest)
}

/// Re-read a report directory and check its digest.
///
/// Returns the verified digest.
///
/// # Errors
///
/// Returns [`ReportDirVerifyError`] if a file is missing, the report is not
/// canonical, or the digest does not match.
pub fn verify_report_dir(dir: &Path) -> Result<ContentHash, ReportDirVerifyError> {
    let report_bytes = read_required(dir, REPORT_FILENAME)?;
    let digest_bytes = read_required(dir, DIGEST_FILENAME)?;

    let value: serde_json::Value = serde_json::from_slice(&report_bytes).map_err(|e| {
        ReportDirVerifyError::ReportParseError {
            detail: e.to_string(),
        }
    })?;
    let canonical =
        canonical_json_bytes(&value).map_err(|_| ReportDirVerifyError::NonCanonicalReport)?;
    if canonical != report_bytes {
        return Err(ReportDirVerifyError::NonCanonicalReport);
    }

    let raw = String::from_utf8_lossy(&digest_bytes).trim().to_string();
    let stored = ContentHash::parse(&raw)
        .ok_or_else(|| ReportDirVerifyError::MalformedDigest { raw: raw.clone() })?;
    let recomputed = canonical_hash(DOMAIN_RUN_REPORT, &report_bytes);
    if stored != recomputed {
        return Err(ReportDirVerifyError::DigestMismatch {
            stored: stored.as_str().to_string(),
            recomputed: recomputed.as_str().to_string(),
        });
    }
    Ok(recomputed)
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirVerifyError> {
    let path = dir.join(filename);
    if !path.is_file() {
        return Err(ReportDirVerifyError::MissingFile {
            filename: filename.to_string(),
        });
    }
    std::fs::read(&path).map_err(|e| ReportDirVerifyError::Io {
        detail: format!("read {filename}: {e}"),
    })
}
