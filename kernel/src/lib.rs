//! Stride Kernel: search over sorted, random-access sequences.
//!
//! # API Surface
//!
//! - [`search::search_bisect`] -- closed-interval bisection for a needle
//! - [`search::search_stride`] -- halving-stride walk for a needle; same answers
//!   as bisection on every ascending input
//! - [`search::search_crossover`] -- last index where a monotonic predicate is
//!   still `<= 0`
//!
//! Element type is `i64`; indices are `usize`; not-found is `None`.
//!
//! # Input contract
//!
//! Sequences must be in non-decreasing order. Nothing checks this: on
//! unsorted input results are unspecified, but no element outside the
//! sequence is ever read.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod search;
