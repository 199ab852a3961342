//! Prime-field arithmetic and univariate polynomials over the compact fields.
//!
//! Features include:
//!
//! - Field elements modulo a byte-aligned prime
//! - Evaluation of points on polynomials
//! - Lagrange interpolation at zero

pub mod lagrange;
mod point;
mod scalar;
mod univariate;

// Re-exports.
pub use self::{point::*, scalar::*, univariate::*};
