use sha2::{Digest, Sha256};
use zeroize::{Zeroize, Zeroizing};

use crate::poly::{Modulus, Scalar};

use super::FieldDigest;

/// Double SHA-256 digest to a prime field.
///
/// A candidate is the leading `M::byte_size()` bytes of
/// `SHA256(SHA256(msg || pad))` read as a big-endian integer, where `pad`
/// starts empty. Candidates that are not smaller than the modulus are
/// rejected and the pad grows by one zero byte until one is accepted.
pub struct Sha256d;

impl Sha256d {
    /// Returns `SHA256(SHA256(msg))`.
    pub fn digest(msg: &[u8]) -> [u8; 32] {
        let inner = Sha256::digest(msg);
        Sha256::digest(inner).into()
    }
}

impl FieldDigest for Sha256d {
    fn hash_to_field<M: Modulus>(msg: &[u8]) -> Scalar<M> {
        let size = M::byte_size();
        rejection_sample(msg, |digest| Scalar::from_repr(&digest[..size]))
    }
}

/// Hashes the message with a growing zero pad until `accept` takes the digest.
///
/// Terminates with overwhelming probability as long as `accept` takes
/// a non-negligible fraction of all digests.
fn rejection_sample<T>(msg: &[u8], mut accept: impl FnMut(&[u8; 32]) -> Option<T>) -> T {
    let mut input = Zeroizing::new(Vec::with_capacity(msg.len() + 32));
    input.extend_from_slice(msg);
    loop {
        let mut digest = Sha256d::digest(&input);
        let accepted = accept(&digest);
        digest.zeroize();

        if let Some(value) = accepted {
            return value;
        }

        // A reallocation would free an unwiped copy of the input.
        if input.len() == input.capacity() {
            let mut grown = Zeroizing::new(Vec::with_capacity(2 * input.capacity()));
            grown.extend_from_slice(&input);
            input = grown;
        }
        input.push(0);
    }
}
