use zeroize::Zeroize;

use super::{Modulus, Scalar};

/// Univariate polynomial over a compact prime field.
///
/// ```text
/// A(x) = \sum_{i=0}^{deg_x} a_i x^i
/// ```
///
/// The constant zero polynomial is represented by a vector with one zero
/// element, rather than by an empty vector.
///
/// Trailing zeros are never trimmed, so a polynomial built for threshold `m`
/// always holds exactly `m` coefficients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<M: Modulus> {
    pub(crate) a: Vec<Scalar<M>>,
}

impl<M> Polynomial<M>
where
    M: Modulus,
{
    /// Creates a polynomial with the given coefficients.
    pub fn with_coefficients(a: Vec<Scalar<M>>) -> Self {
        if a.is_empty() {
            return Self {
                a: vec![Scalar::zero()],
            };
        }

        Self { a }
    }

    /// Returns the number of coefficients in the polynomial.
    pub fn size(&self) -> usize {
        self.a.len()
    }

    /// Returns the i-th coefficient of the polynomial.
    pub fn coefficient(&self, i: usize) -> Option<&Scalar<M>> {
        self.a.get(i)
    }

    /// Evaluates the polynomial.
    pub fn eval(&self, x: &Scalar<M>) -> Scalar<M> {
        self.a
            .iter()
            .enumerate()
            .map(|(e, ae)| ae * x.pow(e as u32))
            .sum()
    }
}

impl<M> Zeroize for Polynomial<M>
where
    M: Modulus,
{
    fn zeroize(&mut self) {
        for ai in self.a.iter_mut() {
            ai.zeroize();
        }
    }
}
