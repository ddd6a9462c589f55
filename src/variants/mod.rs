// src/variants/mod.rs

//! The `variants` module is the alternative implementations under comparison.
//!
//! * [`containment`]: three point-in-rectangle checks.
//! * [`lookup`] and [`frozenmap`]: four read-only keyed lookup structures
//!   behind the [`KeyLookup`] capability.
//!
//! [`KeyLookup`]: crate::variants::lookup::KeyLookup

pub mod containment;
pub mod frozenmap;
pub mod lookup;
