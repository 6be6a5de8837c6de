//! Run policy: the needles and crossover threshold a run was produced under.
//!
//! [`PolicyConfig`] carries optional overrides; [`build_policy`] applies the
//! defaults and freezes the effective values into a [`PolicySnapshotV1`]
//! whose canonical bytes are hashed into the run report. The snapshot never
//! records wall time, cwd, or environment, so identical configs always
//! produce identical bytes.

use crate::canon::canonical_json_bytes;
use crate::hash::{canonical_hash, ContentHash, HashDomain};
use crate::samples::DEFAULT_NEEDLES;

/// Domain prefix for policy snapshot hashing.
pub const DOMAIN_POLICY_SNAPSHOT: HashDomain = HashDomain::PolicySnapshot;

/// Policy configuration that can override defaults.
#[derive(Debug, Clone, Default)]
pub struct PolicyConfig {
    /// Needles probed against every sample. `None` uses [`DEFAULT_NEEDLES`].
    pub needles: Option<Vec<i64>>,
    /// Crossover predicate is `x - threshold`. `None` uses the first needle.
    pub crossover_threshold: Option<i64>,
}

/// Frozen, effective policy for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySnapshotV1 {
    /// Needles in probe order.
    pub needles: Vec<i64>,
    /// Crossover threshold.
    pub crossover_threshold: i64,
    /// Canonical JSON bytes of the snapshot.
    pub bytes: Vec<u8>,
}

impl PolicySnapshotV1 {
    /// Content hash of the canonical bytes.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(DOMAIN_POLICY_SNAPSHOT, &self.bytes)
    }
}

/// Error building a policy snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyBuildError {
    /// `needles` was overridden with an empty list.
    EmptyNeedles,
    /// Canonical JSON serialization failed.
    CanonError { detail: String },
}

impl std::fmt::Display for PolicyBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNeedles => write!(f, "policy override lists no needles"),
            Self::CanonError { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for PolicyBuildError {}

/// Build a [`PolicySnapshotV1`] from optional overrides.
///
/// # Errors
///
/// Returns [`PolicyBuildError::EmptyNeedles`] if the needle override is
/// empty, or [`PolicyBuildError::CanonError`] if serialization fails.
pub fn build_policy(config: &PolicyConfig) -> Result<PolicySnapshotV1, PolicyBuildError> {
    let needles = match &config.needles {
        Some(needles) if needles.is_empty() => return Err(PolicyBuildError::EmptyNeedles),
        Some(needles) => needles.clone(),
        None => DEFAULT_NEEDLES.to_vec(),
    };
    // Non-empty by the match above.
    let crossover_threshold = config.crossover_threshold.unwrap_or(needles[0]);

    let snapshot_value = serde_json::json!({
        "crossover_threshold": crossover_threshold,
        "needles": needles,
        "schema_version": "policy.v1",
    });
    let bytes =
        canonical_json_bytes(&snapshot_value).map_err(|e| PolicyBuildError::CanonError {
            detail: e.to_string(),
        })?;

    Ok(PolicySnapshotV1 {
        needles,
        crossover_threshold,
        bytes,
    })
}
