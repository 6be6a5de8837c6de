//! Harness runner: probes every sample with every strategy.
//!
//! The runner uses ONLY kernel APIs (`Strategy::search`,
//! `try_search_crossover`, `results_agree`). It never decides by itself
//! whether an index is correct; agreement is the kernel's equivalence
//! relation applied to the two strategies' answers.
//!
//! # Pipeline
//!
//! ```text
//! build_policy() → validate samples
//!   → [bisect, stride] × needles × samples → agreement
//!   → try_search_crossover() × non-empty samples
//!   → RunReportV1
//! ```

use std::collections::BTreeSet;

use stride_kernel::search::{results_agree, try_search_crossover, CrossoverError, Strategy};

use crate::policy::{build_policy, PolicyBuildError, PolicyConfig, PolicySnapshotV1};
use crate::samples::SampleV1;

/// Error during a harness run. All variants are pre-flight: no probe has
/// run when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Policy snapshot could not be built.
    PolicyError(PolicyBuildError),
    /// A sample is not in non-decreasing order.
    UnsortedSample { name: String, index: usize },
    /// Two samples share a name.
    DuplicateSampleName { name: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PolicyError(e) => write!(f, "policy error: {e}"),
            Self::UnsortedSample { name, index } => {
                write!(f, "sample {name} descends at index {index}")
            }
            Self::DuplicateSampleName { name } => write!(f, "duplicate sample name: {name}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<PolicyBuildError> for RunError {
    fn from(e: PolicyBuildError) -> Self {
        Self::PolicyError(e)
    }
}

/// One needle probed against one sample by both strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRecordV1 {
    /// Sample name.
    pub sample: String,
    /// Needle searched for.
    pub needle: i64,
    /// `search_bisect` result.
    pub bisect: Option<usize>,
    /// `search_stride` result.
    pub stride: Option<usize>,
    /// Whether the two results are equivalent.
    pub agree: bool,
}

impl ProbeRecordV1 {
    /// Result for a given strategy.
    #[must_use]
    pub fn result(&self, strategy: Strategy) -> Option<usize> {
        match strategy {
            Strategy::Bisect => self.bisect,
            Strategy::Stride => self.stride,
        }
    }
}

/// Outcome of a checked crossover search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossoverOutcomeV1 {
    /// Last index where `x - threshold <= 0`.
    Index(usize),
    /// Precondition rejected before searching.
    Rejected(CrossoverError),
}

/// Crossover search over one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossoverRecordV1 {
    /// Sample name.
    pub sample: String,
    /// Threshold in the predicate `x - threshold`.
    pub threshold: i64,
    /// Index found, or why the search was rejected.
    pub outcome: CrossoverOutcomeV1,
}

/// Overall run verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictV1 {
    /// Every probe agreed.
    Match,
    /// At least one probe disagreed.
    Mismatch,
}

impl VerdictV1 {
    /// Stable name, used in report output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "Match",
            Self::Mismatch => "Mismatch",
        }
    }
}

/// Everything a run produced, in deterministic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReportV1 {
    /// Effective policy.
    pub policy: PolicySnapshotV1,
    /// Probe records, sample-major, needles in policy order.
    pub probes: Vec<ProbeRecordV1>,
    /// Crossover records for non-empty samples, in sample order.
    pub crossovers: Vec<CrossoverRecordV1>,
}

impl RunReportV1 {
    /// `Match` iff every probe agreed.
    #[must_use]
    pub fn verdict(&self) -> VerdictV1 {
        if self.probes.iter().all(|p| p.agree) {
            VerdictV1::Match
        } else {
            VerdictV1::Mismatch
        }
    }

    /// First probe recorded for `sample` and `needle`.
    ///
    /// A needle listed twice in the policy yields two identical records per
    /// sample; this returns the first.
    #[must_use]
    pub fn probe(&self, sample: &str, needle: i64) -> Option<&ProbeRecordV1> {
        self.probes
            .iter()
            .find(|p| p.sample == sample && p.needle == needle)
    }

    /// Probes whose strategies disagreed.
    pub fn mismatches(&self) -> impl Iterator<Item = &ProbeRecordV1> {
        self.probes.iter().filter(|p| !p.agree)
    }
}

/// Run both strategies and the crossover search over `samples`.
///
/// # Errors
///
/// Returns [`RunError`] if the policy is invalid, a sample is not ascending,
/// or two samples share a name.
pub fn run_suite(samples: &[SampleV1], config: &PolicyConfig) -> Result<RunReportV1, RunError> {
    let policy = build_policy(config)?;
    validate_samples(samples)?;

    let mut probes = Vec::with_capacity(samples.len() * policy.needles.len());
    for sample in samples {
        for &needle in &policy.needles {
            probes.push(probe(sample, needle));
        }
    }

    let threshold = policy.crossover_threshold;
    let crossovers = samples
        .iter()
        .filter(|s| !s.values.is_empty())
        .map(|sample| {
            let outcome =
                match try_search_crossover(&sample.values, |x| x.saturating_sub(threshold)) {
                    Ok(index) => CrossoverOutcomeV1::Index(index),
                    Err(e) => CrossoverOutcomeV1::Rejected(e),
                };
            CrossoverRecordV1 {
                sample: sample.name.clone(),
                threshold,
                outcome,
            }
        })
        .collect();

    Ok(RunReportV1 {
        policy,
        probes,
        crossovers,
    })
}

fn probe(sample: &SampleV1, needle: i64) -> ProbeRecordV1 {
    let bisect = Strategy::Bisect.search(&sample.values, needle);
    let stride = Strategy::Stride.search(&sample.values, needle);
    ProbeRecordV1 {
        sample: sample.name.clone(),
        needle,
        bisect,
        stride,
        agree: results_agree(&sample.values, needle, bisect, stride),
    }
}

fn validate_samples(samples: &[SampleV1]) -> Result<(), RunError> {
    let mut seen = BTreeSet::new();
    for sample in samples {
        if !seen.insert(sample.name.as_str()) {
            return Err(RunError::DuplicateSampleName {
                name: sample.name.clone(),
            });
        }
        if let Some(index) = sample.values.windows(2).position(|w| w[0] > w[1]) {
            return Err(RunError::UnsortedSample {
                name: sample.name.clone(),
                index: index + 1,
            });
        }
    }
    Ok(())
}
