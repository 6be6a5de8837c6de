//! Shared helpers for lock tests and fixture binaries.

#![forbid(unsafe_code)]
