// src/harness/mod.rs

//! The `harness` module is the adapter between the variants and a benchmark
//! runner.
//!
//! For each configuration of the declared [parameter grid] the harness
//!
//! 1. sets up fixtures once, deterministically, from an explicitly passed
//!    random source,
//! 2. exposes one benchmarked operation per variant (`run`), and
//! 3. exposes one correctness check per variant (`verify`) that does not
//!    depend on any benchmark run.
//!
//! A failed correctness check is a [`VerifyError`], never a warning.
//!
//! [parameter grid]: crate::harness::params
//! [`VerifyError`]: crate::harness::verify::VerifyError

pub mod containment_suite;
pub mod lookup_suite;
pub mod params;
pub mod verify;
