//! Fixed sample sequences for the demonstration run.
//!
//! `a1` and `a2` are deliberately identical: two arrays with the same
//! contents must produce the same lines.

/// A named ascending sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleV1 {
    /// Short label used in report keys (e.g. `"a4"`).
    pub name: String,
    /// Ascending values.
    pub values: Vec<i64>,
}

impl SampleV1 {
    /// Build a sample from a label and values.
    #[must_use]
    pub fn new(name: &str, values: &[i64]) -> Self {
        Self {
            name: name.to_string(),
            values: values.to_vec(),
        }
    }

    /// Whether `values` is in non-decreasing order.
    #[must_use]
    pub fn is_ascending(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

/// Needles probed against every sample when no override is configured:
/// one present in most samples, one above every sample, one below.
pub const DEFAULT_NEEDLES: &[i64] = &[4, 14, 0];

/// The seven demonstration samples, `a1` through `a7`.
#[must_use]
pub fn default_samples() -> Vec<SampleV1> {
    vec![
        SampleV1::new("a1", &[1, 2, 3, 4, 5, 6, 7, 8, 9]),
        SampleV1::new("a2", &[1, 2, 3, 4, 5, 6, 7, 8, 9]),
        SampleV1::new("a3", &[4]),
        SampleV1::new("a4", &[1, 4, 9]),
        SampleV1::new("a5", &[1, 4]),
        SampleV1::new("a6", &[4, 9]),
        SampleV1::new("a7", &[]),
    ]
}
