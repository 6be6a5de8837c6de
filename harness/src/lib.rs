//! Stride Harness: runs the kernel's search strategies over fixed samples.
//!
//! The harness probes every sample with both needle searches, checks that
//! their answers are equivalent, runs the crossover search, and packages the
//! result as a canonical, content-hashed report.
//!
//! The harness does NOT implement search logic; it delegates to the kernel.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod hash;
pub mod policy;
pub mod report;
pub mod report_dir;
pub mod runner;
pub mod samples;
