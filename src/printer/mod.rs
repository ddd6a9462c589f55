// src/printer/mod.rs

//! The `printer` module is for printing user-facing verification results
//! with color.

pub mod printers;
