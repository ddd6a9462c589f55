// src/tests/mod.rs

//! Tests for _fbblib_.
//!
//! Tests are placed at `src/tests/`, inside the `fbblib`. This is a
//! reasonable trade-off of separation and access.
//!
//! Tests placed at top-level path `tests/` do not have crate-internal
//! visibility.

pub mod containment_suite_tests;
pub mod lookup_suite_tests;
pub mod lookup_tests;
