use slog::{debug, Logger};
use zeroize::Zeroize;

use crate::{
    errors::{Error, InputError},
    logger::get_logger,
    poly::{Modulus, Polynomial, Scalar},
    suites::FieldDigest,
};

use super::{Share, MAX_SHARES};

/// A holder of the secret-sharing polynomial responsible for generating
/// secret shares.
///
/// The polynomial is derived from the secret and the threshold alone, so
/// dealing the same secret twice with the same threshold yields the same
/// shares.
pub struct Dealer<M: Modulus> {
    /// The secret-sharing polynomial where the coefficient of the constant
    /// term represents the shared secret.
    poly: Polynomial<M>,
    /// The number of shares needed to reconstruct the secret.
    threshold: u8,
    logger: Logger,
}

impl<M> Dealer<M>
where
    M: Modulus,
{
    /// Creates a new dealer for the given secret.
    ///
    /// The secret must be exactly `M::byte_size()` bytes, read big-endian, and
    /// smaller than the modulus. Coefficient `a_{i+1}` is the digest of
    /// `secret || threshold || i`.
    pub fn new<H: FieldDigest>(threshold: u8, secret: &[u8]) -> Result<Self, Error> {
        if secret.len() != M::byte_size() {
            return Err(InputError::SecretLength {
                expected: M::byte_size(),
                actual: secret.len(),
            }
            .into());
        }
        let a0 = Scalar::from_repr(secret).ok_or(InputError::SecretOutOfRange)?;
        if !(1..=MAX_SHARES).contains(&threshold) {
            return Err(InputError::ThresholdOutOfRange(threshold).into());
        }

        let mut a = Vec::with_capacity(threshold as usize);
        a.push(a0);

        let mut seed = Vec::with_capacity(secret.len() + 2);
        for i in 0..threshold - 1 {
            seed.clear();
            seed.extend_from_slice(secret);
            seed.push(threshold);
            seed.push(i);
            a.push(H::hash_to_field(&seed));
        }
        seed.zeroize();

        Ok(Self {
            poly: Polynomial::with_coefficients(a),
            threshold,
            logger: get_logger("secret-sharing/shamir/dealer"),
        })
    }

    /// Returns the number of shares needed to reconstruct the secret.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Generates shares for indices `1..=n`.
    ///
    /// The share count must be in `1..=16` and not smaller than the threshold.
    pub fn make_shares(&self, n: u8) -> Result<Vec<Share<M>>, Error> {
        if !(1..=MAX_SHARES).contains(&n) {
            return Err(InputError::ShareCountOutOfRange(n).into());
        }
        if self.threshold > n {
            return Err(InputError::ThresholdExceedsShares {
                threshold: self.threshold,
                shares: n,
            }
            .into());
        }

        debug!(self.logger, "Generating shares";
            "threshold" => self.threshold,
            "shares" => n,
            "bits" => M::NUM_BITS,
        );

        Ok((1..=n).map(|x| self.make_share(x)).collect())
    }

    /// Generates the share for the given index.
    fn make_share(&self, x: u8) -> Share<M> {
        let y = self.poly.eval(&Scalar::from_u64(x as u64));
        Share {
            threshold: self.threshold,
            index: x,
            value: y,
        }
    }
}

impl<M> Drop for Dealer<M>
where
    M: Modulus,
{
    fn drop(&mut self) {
        // The constant term is the secret.
        self.poly.zeroize();
    }
}
