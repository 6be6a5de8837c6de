//! Canonical run report: JSON projection, digest, and `key=value` lines.
//!
//! Not-found renders as JSON `null`. The report digest commits to the policy
//! digest, so two reports with the same probes under different policies
//! never share a digest.

use serde_json::json;

use stride_kernel::search::CrossoverError;

use crate::canon::{canonical_json_bytes, CanonError};
use crate::hash::{canonical_hash, ContentHash, HashDomain};
use crate::runner::{CrossoverOutcomeV1, RunReportV1};

/// Domain prefix for run report hashing.
pub const DOMAIN_RUN_REPORT: HashDomain = HashDomain::RunReport;

/// Report schema tag.
pub const REPORT_SCHEMA_VERSION: &str = "run_report.v1";

/// Stable label for a rejected crossover search.
#[must_use]
pub fn crossover_error_label(error: &CrossoverError) -> &'static str {
    match error {
        CrossoverError::EmptySequence => "empty_sequence",
        CrossoverError::PositiveAtStart { .. } => "positive_at_start",
    }
}

impl RunReportV1 {
    /// JSON projection of the report.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let probes: Vec<serde_json::Value> = self
            .probes
            .iter()
            .map(|p| {
                json!({
                    "agree": p.agree,
                    "bisect": p.bisect,
                    "needle": p.needle,
                    "sample": p.sample,
                    "stride": p.stride,
                })
            })
            .collect();

        let crossovers: Vec<serde_json::Value> = self
            .crossovers
            .iter()
            .map(|c| match &c.outcome {
                CrossoverOutcomeV1::Index(index) => json!({
                    "index": index,
                    "sample": c.sample,
                    "threshold": c.threshold,
                }),
                CrossoverOutcomeV1::Rejected(e) => json!({
                    "rejected": crossover_error_label(e),
                    "sample": c.sample,
                    "threshold": c.threshold,
                }),
            })
            .collect();

        json!({
            "crossovers": crossovers,
            "policy_digest": self.policy.digest().as_str(),
            "probes": probes,
            "schema_version": REPORT_SCHEMA_VERSION,
            "verdict": self.verdict().as_str(),
        })
    }

    /// Canonical JSON bytes of [`Self::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            DOMAIN_RUN_REPORT,
            &self.to_canonical_json_bytes()?,
        ))
    }

    /// Deterministic `key=value` summary lines.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the report digest cannot be computed.
    pub fn render_lines(&self) -> Result<Vec<String>, CanonError> {
        let mut lines = vec![
            format!("report_digest={}", self.digest()?),
            format!("policy_digest={}", self.policy.digest()),
            format!("verdict={}", self.verdict().as_str()),
            format!("probe_count={}", self.probes.len()),
            format!("mismatch_count={}", self.mismatches().count()),
            format!("crossover_count={}", self.crossovers.len()),
        ];
        for p in &self.probes {
            lines.push(format!(
                "probe.{}.{}=bisect:{},stride:{}",
                p.sample,
                p.needle,
                render_index(p.bisect),
                render_index(p.stride),
            ));
        }
        for c in &self.crossovers {
            let value = match &c.outcome {
                CrossoverOutcomeV1::Index(index) => index.to_string(),
                CrossoverOutcomeV1::Rejected(e) => crossover_error_label(e).to_string(),
            };
            lines.push(format!("crossover.{}.{}={value}", c.sample, c.threshold));
        }
        Ok(lines)
    }
}

/// Render a search result the way the demonstration prints it: the index, or
/// `-1` when not found.
#[must_use]
pub fn render_index(result: Option<usize>) -> String {
    result.map_or_else(|| "-1".to_string(), |i| i.to_string())
}
