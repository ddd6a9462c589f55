// src/data/mod.rs

//! The `data` module is the inputs of the benchmarked operations.
//!
//! ## Definitions of data
//!
//! ### Rectangle and Point
//!
//! A [`Rectangle`] is an axis-aligned region with integer edges. A [`Point`]
//! has floating-point coordinates. The containment suite asks whether a
//! `Point` is within a `Rectangle`.
//!
//! ### Dataset
//!
//! A [`Dataset`] is random `(key, value)` entries with unique keys within
//! `0..=upper_limit`. The lookup suite builds every lookup variant from the
//! same `Dataset`.
//!
//! [`Rectangle`]: crate::data::rectangle::Rectangle
//! [`Point`]: crate::data::rectangle::Point
//! [`Dataset`]: crate::data::dataset::Dataset

pub mod dataset;
pub mod rectangle;
