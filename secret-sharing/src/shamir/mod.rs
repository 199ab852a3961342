//! Shamir secret sharing.

mod dealer;
mod player;
mod share;

// Re-exports.
pub use self::{dealer::*, player::*, share::*};
