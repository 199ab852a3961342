use std::marker::PhantomData;

use slog::{debug, warn, Logger};

use crate::{
    config::MalformedShares,
    errors::Error,
    logger::get_logger,
    poly::{lagrange, Modulus, Scalar},
};

use super::Share;

/// A constructor of the shared secret.
pub struct Player<M: Modulus> {
    malformed_shares: MalformedShares,
    logger: Logger,
    modulus: PhantomData<M>,
}

impl<M> Player<M>
where
    M: Modulus,
{
    /// Creates a new player.
    pub fn new(malformed_shares: MalformedShares) -> Self {
        Self {
            malformed_shares,
            logger: get_logger("secret-sharing/shamir/player"),
            modulus: PhantomData,
        }
    }

    /// Decodes the provided shares and reconstructs the secret from them.
    ///
    /// Returns the secret as exactly `M::byte_size()` big-endian bytes.
    pub fn reconstruct_secret<S: AsRef<[u8]>>(&self, shares: &[S]) -> Result<Vec<u8>, Error> {
        let shares = self.decode_shares(shares)?;
        let secret = self.reconstruct(&shares)?;

        Ok(secret.to_repr())
    }

    /// Decodes the provided shares.
    ///
    /// Shares of the wrong length are discarded, or rejected if the player
    /// was configured to do so.
    pub fn decode_shares<S: AsRef<[u8]>>(&self, shares: &[S]) -> Result<Vec<Share<M>>, Error> {
        let mut decoded = Vec::with_capacity(shares.len());
        for (position, bytes) in shares.iter().enumerate() {
            let bytes = bytes.as_ref();
            if let Some(share) = Share::from_bytes(bytes) {
                decoded.push(share);
                continue;
            }

            if self.malformed_shares == MalformedShares::Reject {
                return Err(Error::MalformedShare { position });
            }
            warn!(self.logger, "Discarding malformed share";
                "position" => position,
                "len" => bytes.len(),
                "expected_len" => Share::<M>::byte_size(),
            );
        }

        Ok(decoded)
    }

    /// Reconstructs the secret from the provided shares.
    ///
    /// All shares must agree on the threshold and have distinct indices.
    /// The first `threshold` shares are used for interpolation.
    pub fn reconstruct(&self, shares: &[Share<M>]) -> Result<Scalar<M>, Error> {
        let threshold = match shares.first() {
            Some(share) => share.threshold,
            None => return Err(Error::NoValidShares),
        };
        if shares.iter().any(|share| share.threshold != threshold) {
            return Err(Error::InconsistentThreshold);
        }
        if !Self::distinct_shares(shares) {
            return Err(Error::DuplicateIndex);
        }
        let required_shares = threshold as usize;
        if shares.len() < required_shares {
            return Err(Error::InsufficientShares {
                got: shares.len(),
                need: required_shares,
            });
        }

        debug!(self.logger, "Reconstructing secret";
            "threshold" => threshold,
            "shares" => shares.len(),
            "bits" => M::NUM_BITS,
        );

        let points: Vec<_> = shares[..required_shares].iter().map(Share::point).collect();

        lagrange::interpolate_at_zero(&points)
    }

    /// Returns true if shares are from distinct shareholders.
    fn distinct_shares(shares: &[Share<M>]) -> bool {
        // For at most 16 shareholders a brute-force approach suffices.
        for i in 0..shares.len() {
            for j in (i + 1)..shares.len() {
                if shares[i].index == shares[j].index {
                    return false;
                }
            }
        }
        true
    }
}

impl<M> Default for Player<M>
where
    M: Modulus,
{
    fn default() -> Self {
        Self::new(MalformedShares::default())
    }
}
