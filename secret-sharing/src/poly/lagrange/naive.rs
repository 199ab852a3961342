// Lagrange interpolation / reconstruction at zero
use std::iter::zip;

use crate::{
    errors::Error,
    poly::{Modulus, Point, Scalar},
};

/// Returns the value at zero of the Lagrange interpolation polynomial for
/// the given set of points.
///
/// ```text
/// L(0) = \sum_{i=0}^n y_i * L_i(0)
/// ```
///
/// Fails with `Error::NotInvertible` if the x-coordinates are not unique.
pub fn interpolate_at_zero<M: Modulus>(points: &[Point<M>]) -> Result<Scalar<M>, Error> {
    let xs: Vec<_> = points.iter().map(|p| p.x.clone()).collect();
    let cs = coefficients(&xs)?;
    let secret: Scalar<M> = zip(cs, points).map(|(c, p)| c * &p.y).sum();

    Ok(secret)
}

/// Returns Lagrange coefficients for the given set of x-coordinates.
///
/// The i-th Lagrange coefficient is defined as:
/// ```text
/// L_i(0) = \prod_{j=0,j≠i}^n x_j / (x_j - x_i)
/// ```
///
/// Fails with `Error::NotInvertible` if the x-coordinates are not unique.
pub fn coefficients<M: Modulus>(xs: &[Scalar<M>]) -> Result<Vec<Scalar<M>>, Error> {
    (0..xs.len()).map(|i| coefficient(xs, i)).collect()
}

/// Returns i-th Lagrange coefficient for the given set of x-coordinates.
fn coefficient<M: Modulus>(xs: &[Scalar<M>], i: usize) -> Result<Scalar<M>, Error> {
    let mut nom = Scalar::one();
    let mut denom = Scalar::one();
    for j in 0..xs.len() {
        if j == i {
            continue;
        }
        nom *= &xs[j]; // x_j
        denom *= &xs[j] - &xs[i]; // (x_j - x_i)
    }
    let denom_inv = denom.invert().ok_or(Error::NotInvertible)?;
    nom *= denom_inv; // L_i(0) = nom / denom

    Ok(nom)
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::Error,
        poly::{Point, Polynomial, Scalar},
        suites::{Compact128, Compact96},
    };

    use super::{coefficients, interpolate_at_zero};

    type PrimeField = Scalar<Compact96>;

    fn scalars(values: &[i64]) -> Vec<PrimeField> {
        values
            .iter()
            .map(|&w| match w.is_negative() {
                false => PrimeField::from_u64(w as u64),
                true => -PrimeField::from_u64(-w as u64),
            })
            .collect()
    }

    #[test]
    fn test_coefficients() {
        let xs = scalars(&[1]);
        assert_eq!(coefficients(&xs), Ok(scalars(&[1])));

        // L_0(0) = 2 / (2 - 1), L_1(0) = 1 / (1 - 2).
        let xs = scalars(&[1, 2]);
        assert_eq!(coefficients(&xs), Ok(scalars(&[2, -1])));

        let xs = scalars(&[1, 2, 3]);
        assert_eq!(coefficients(&xs), Ok(scalars(&[3, -3, 1])));

        // Coefficients always sum to one.
        let xs = scalars(&[16, 3, 9, 1, 12]);
        let sum: PrimeField = coefficients(&xs).unwrap().into_iter().sum();
        assert_eq!(sum, PrimeField::one());
    }

    #[test]
    fn test_coefficients_duplicate_xs() {
        let xs = scalars(&[1, 2, 1]);
        assert_eq!(coefficients(&xs), Err(Error::NotInvertible));
    }

    #[test]
    fn test_interpolate_at_zero() {
        // f(x) = 7 - 2x + 3x^2 + 5x^3.
        let f = Polynomial::with_coefficients(scalars(&[7, -2, 3, 5]));

        let xss = [
            vec![1, 2, 3, 4],
            vec![16, 1, 8, 5],
            vec![2, 4, 6, 8, 10, 12],
        ];
        for xs in xss {
            let points: Vec<_> = scalars(&xs)
                .into_iter()
                .map(|x| {
                    let y = f.eval(&x);
                    Point::new(x, y)
                })
                .collect();
            assert_eq!(interpolate_at_zero(&points), Ok(scalars(&[7])[0].clone()));
        }

        // Too few points interpolate a different polynomial.
        let points: Vec<_> = scalars(&[1, 2, 3])
            .into_iter()
            .map(|x| {
                let y = f.eval(&x);
                Point::new(x, y)
            })
            .collect();
        assert_ne!(interpolate_at_zero(&points), Ok(scalars(&[7])[0].clone()));
    }

    #[test]
    fn test_interpolate_at_zero_wide_field() {
        let secret = -Scalar::<Compact128>::from_u64(5);
        let a1 = Scalar::<Compact128>::from_u64(u64::MAX);
        let f = Polynomial::with_coefficients(vec![secret.clone(), a1]);

        let points: Vec<_> = [3u64, 11]
            .iter()
            .map(|&x| {
                let x = Scalar::from_u64(x);
                let y = f.eval(&x);
                Point::new(x, y)
            })
            .collect();
        assert_eq!(interpolate_at_zero(&points), Ok(secret));
    }
}
