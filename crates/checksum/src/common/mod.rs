//! Common utilities for CRC computation.
//!
//! This module provides:
//! - Const-fn lookup table generation
//! - GF(2) matrix operations for `combine()` and compensation
//! - The bitwise reference implementation every kernel is checked against

pub mod combine;
pub mod reference;
pub mod tables;
