//! Runtime selection of the compact secret sharing schemes.
use rand::RngCore;

use crate::{
    config::{Config, MalformedShares, SchemeKind},
    errors::Error,
    poly::{Modulus, Scalar},
    shamir::{Dealer, Player, Share},
    suites::{Compact104, Compact128, Compact96, Sha256d},
};

/// Splits secrets into shares and joins them back, using the scheme chosen
/// at construction time.
#[derive(Clone, Debug, Default)]
pub struct SecretSharing {
    config: Config,
}

impl SecretSharing {
    /// Creates a new instance for the given scheme with default settings.
    pub fn new(kind: SchemeKind) -> Self {
        Self::with_config(Config {
            scheme: kind,
            ..Default::default()
        })
    }

    /// Creates a new instance from the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Returns the scheme in use.
    pub fn kind(&self) -> SchemeKind {
        self.config.scheme
    }

    /// Splits the secret into `shares` encoded shares, any `threshold` of
    /// which reconstruct it.
    pub fn split(&self, secret: &[u8], threshold: u8, shares: u8) -> Result<Vec<Vec<u8>>, Error> {
        match self.config.scheme {
            SchemeKind::Compact96 => split::<Compact96>(secret, threshold, shares),
            SchemeKind::Compact104 => split::<Compact104>(secret, threshold, shares),
            SchemeKind::Compact128 => split::<Compact128>(secret, threshold, shares),
        }
    }

    /// Reconstructs the secret from encoded shares.
    pub fn join<S: AsRef<[u8]>>(&self, shares: &[S]) -> Result<Vec<u8>, Error> {
        let mode = self.config.malformed_shares;
        match self.config.scheme {
            SchemeKind::Compact96 => join::<Compact96, S>(mode, shares),
            SchemeKind::Compact104 => join::<Compact104, S>(mode, shares),
            SchemeKind::Compact128 => join::<Compact128, S>(mode, shares),
        }
    }

    /// Draws a uniformly random secret that is valid for the scheme.
    pub fn random_secret(&self, rng: &mut impl RngCore) -> Vec<u8> {
        let mut bytes = vec![0; self.config.scheme.secret_size()];
        loop {
            rng.fill_bytes(&mut bytes);
            let valid = match self.config.scheme {
                SchemeKind::Compact96 => is_valid_secret::<Compact96>(&bytes),
                SchemeKind::Compact104 => is_valid_secret::<Compact104>(&bytes),
                SchemeKind::Compact128 => is_valid_secret::<Compact128>(&bytes),
            };
            if valid {
                return bytes;
            }
        }
    }
}

fn split<M: Modulus>(secret: &[u8], threshold: u8, shares: u8) -> Result<Vec<Vec<u8>>, Error> {
    let dealer = Dealer::<M>::new::<Sha256d>(threshold, secret)?;
    let shares = dealer.make_shares(shares)?;

    Ok(shares.iter().map(Share::to_bytes).collect())
}

fn join<M: Modulus, S: AsRef<[u8]>>(mode: MalformedShares, shares: &[S]) -> Result<Vec<u8>, Error> {
    Player::<M>::new(mode).reconstruct_secret(shares)
}

fn is_valid_secret<M: Modulus>(bytes: &[u8]) -> bool {
    Scalar::<M>::from_repr(bytes).is_some()
}
