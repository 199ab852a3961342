//! # Compact Secret Sharing
//!
//! This library splits fixed-length secrets into shares such that any
//! threshold number of them reconstruct the secret, while fewer reveal
//! nothing about it.
//!
//! ## Supported Schemes
//!
//! - compact96 (prime `2^96 - 17`, 12-byte secrets)
//! - compact104 (prime `2^104 - 17`, 13-byte secrets)
//! - compact128 (prime `2^128 - 159`, 16-byte secrets)
//!
//! Coefficients of the sharing polynomial are derived from the secret and
//! the threshold, so splitting is deterministic. Shares are one byte longer
//! than the secret: the first byte packs the threshold and the share index.

pub mod config;
pub mod errors;
pub mod logger;
pub mod poly;
pub mod scheme;
pub mod shamir;
pub mod suites;

// Re-exports.
pub use self::{config::*, errors::*, scheme::*};
