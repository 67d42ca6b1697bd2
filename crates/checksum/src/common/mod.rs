//! Shared building blocks for the CRC-64/ISO engine.
//!
//! - Const-fn lookup table generation (split-word and slice-by-8)
//! - Portable table-driven kernels
//! - The bitwise reference used as a test oracle
//! - GF(2) matrix operations for `combine()`

pub mod combine;
pub mod portable;
pub mod reference;
pub mod tables;
