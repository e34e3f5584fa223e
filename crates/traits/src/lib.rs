//! Core traits for crcforge.
//!
//! This crate provides the foundational traits that the checksum
//! implementations conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | One-shot checksum computation | CRC-32 |
//! | [`ChecksumCombine`] | Checksum of a concatenation from its parts | CRC with O(log n) combine |
//! | [`ChecksumCompensate`] | Forcing a buffer to a chosen checksum | CRC-32 patch fields |
//!
//! # Error Types
//!
//! - [`CrcCompensationError`] - Why a checksum could not be forced
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;

pub use checksum::{Checksum, ChecksumCombine, ChecksumCompensate};
pub use error::CrcCompensationError;
