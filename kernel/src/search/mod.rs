//! Ordered search: needle lookup and crossover location over ascending `i64`
//! sequences.
//!
//! Every operation is a pure function of its arguments. Not-found is `None`,
//! so a result cannot be used as an index without being checked first.
//!
//! Each slice operation wraps an index-level core ([`bisect_by`],
//! [`stride_by`]) that only sees a length and a probe closure.

pub mod bisect;
pub mod crossover;
pub mod strategy;
pub mod stride;

pub use bisect::{bisect_by, search_bisect};
pub use crossover::{search_crossover, try_search_crossover, CrossoverError};
pub use strategy::{results_agree, Strategy};
pub use stride::{search_stride, stride_by};
