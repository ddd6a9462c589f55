// src/lib.rs

//! Correctness-verified micro-benchmarks comparing
//!
//! * three ways to check whether a point is within a rectangle, and
//! * four read-only structures for looking up a value by integer key.
//!
//! The benchmark runner is [criterion], see `benches/`. The `fbb` program
//! runs every correctness check of the declared parameter grid.
//!
//! [criterion]: https://docs.rs/criterion/0.5.1/criterion/

pub mod common;
pub mod data;
pub mod debug;
pub mod harness;
pub mod printer;
#[cfg(test)]
pub mod tests;
pub mod variants;
