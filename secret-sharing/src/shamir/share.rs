use crate::poly::{Modulus, Point, Scalar};

/// The largest supported threshold, share count and share index.
pub const MAX_SHARES: u8 = 16;

/// A secret share.
///
/// Holds the point `(index, value)` on the secret-sharing polynomial together
/// with the threshold needed to reconstruct the secret. The byte encoding is
/// `1 + M::byte_size()` bytes long:
///
/// ```text
/// byte 0:      [4 bits threshold][4 bits index]   (nibble 0 means 16)
/// bytes 1..:   value, big-endian, zero-padded
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share<M: Modulus> {
    pub(crate) threshold: u8,
    pub(crate) index: u8,
    pub(crate) value: Scalar<M>,
}

impl<M> Share<M>
where
    M: Modulus,
{
    /// Creates a new share.
    ///
    /// Returns `None` if the threshold or the index is not in `1..=16`.
    pub fn new(threshold: u8, index: u8, value: Scalar<M>) -> Option<Self> {
        let range = 1..=MAX_SHARES;
        if !range.contains(&threshold) || !range.contains(&index) {
            return None;
        }

        Some(Self {
            threshold,
            index,
            value,
        })
    }

    /// Returns the threshold of the scheme the share belongs to.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Returns the index of the share, i.e. the x-coordinate of the point.
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Returns the value of the share, i.e. the y-coordinate of the point.
    pub fn value(&self) -> &Scalar<M> {
        &self.value
    }

    /// Returns the point on the secret-sharing polynomial.
    pub fn point(&self) -> Point<M> {
        Point::new(Scalar::from_u64(self.index as u64), self.value.clone())
    }

    /// Returns the size of the byte representation of a share.
    pub fn byte_size() -> usize {
        1 + M::byte_size()
    }

    /// Returns the byte representation of the share.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::byte_size());
        bytes.push((encode_nibble(self.threshold) << 4) | encode_nibble(self.index));
        bytes.extend_from_slice(&self.value.to_repr());
        bytes
    }

    /// Attempts to create a share from its byte representation.
    ///
    /// Only the length is validated. Values that are not smaller than the
    /// modulus are reduced.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::byte_size() {
            return None;
        }

        let threshold = decode_nibble(bytes[0] >> 4);
        let index = decode_nibble(bytes[0] & 0x0f);
        let value = Scalar::from_repr_reduced(&bytes[1..])?;

        Some(Self {
            threshold,
            index,
            value,
        })
    }
}

/// Packs a value in `1..=16` into a nibble, with 16 encoded as 0.
fn encode_nibble(v: u8) -> u8 {
    debug_assert!((1..=MAX_SHARES).contains(&v));
    match v {
        MAX_SHARES => 0,
        v => v,
    }
}

/// Unpacks a nibble into a value in `1..=16`.
fn decode_nibble(n: u8) -> u8 {
    match n {
        0 => MAX_SHARES,
        n => n,
    }
}

#[cfg(test)]
mod tests {
    use rustc_hex::FromHex;

    use crate::{
        poly::Scalar,
        suites::{Compact104, Compact96},
    };

    use super::{decode_nibble, encode_nibble, Share};

    type PrimeField = Scalar<Compact96>;

    #[test]
    fn test_nibbles() {
        for v in 1..=15 {
            assert_eq!(encode_nibble(v), v);
            assert_eq!(decode_nibble(v), v);
        }
        assert_eq!(encode_nibble(16), 0);
        assert_eq!(decode_nibble(0), 16);
    }

    #[test]
    fn test_new() {
        let value = PrimeField::from_u64(7);
        assert!(Share::new(0, 1, value.clone()).is_none());
        assert!(Share::new(1, 0, value.clone()).is_none());
        assert!(Share::new(17, 1, value.clone()).is_none());
        assert!(Share::new(1, 17, value.clone()).is_none());

        let share = Share::new(16, 16, value.clone()).unwrap();
        assert_eq!(share.threshold(), 16);
        assert_eq!(share.index(), 16);
        assert_eq!(share.value(), &value);
        assert_eq!(share.point().x(), &PrimeField::from_u64(16));
        assert_eq!(share.point().y(), &value);
    }

    #[test]
    fn test_to_bytes() {
        let share = Share::new(3, 1, PrimeField::from_u64(0x0102)).unwrap();
        let bytes = share.to_bytes();
        assert_eq!(bytes.len(), Share::<Compact96>::byte_size());
        assert_eq!(
            bytes,
            "31000000000000000000000102".from_hex::<Vec<u8>>().unwrap()
        );

        let share = Share::new(16, 16, PrimeField::zero()).unwrap();
        assert_eq!(share.to_bytes()[0], 0x00);

        let share = Share::new(16, 5, PrimeField::zero()).unwrap();
        assert_eq!(share.to_bytes()[0], 0x05);

        let share = Share::new(2, 16, PrimeField::zero()).unwrap();
        assert_eq!(share.to_bytes()[0], 0x20);
    }

    #[test]
    fn test_from_bytes() {
        let bytes: Vec<u8> = "218902013fab52fd1537217aa588".from_hex().unwrap();
        let share = Share::<Compact104>::from_bytes(&bytes).unwrap();
        assert_eq!(share.threshold(), 2);
        assert_eq!(share.index(), 1);
        assert_eq!(share.value().to_repr(), bytes[1..].to_vec());
        assert_eq!(share.to_bytes(), bytes);

        // Nibble 0 decodes to 16.
        let mut bytes = vec![0; 13];
        bytes[12] = 9;
        let share = Share::<Compact96>::from_bytes(&bytes).unwrap();
        assert_eq!(share.threshold(), 16);
        assert_eq!(share.index(), 16);
        assert_eq!(share.value(), &PrimeField::from_u64(9));
        assert_eq!(share.to_bytes(), bytes);
    }

    #[test]
    fn test_from_bytes_invalid_length() {
        assert!(Share::<Compact96>::from_bytes(&[]).is_none());
        assert!(Share::<Compact96>::from_bytes(&[0x31; 12]).is_none());
        assert!(Share::<Compact96>::from_bytes(&[0x31; 14]).is_none());
        assert!(Share::<Compact104>::from_bytes(&[0x31; 13]).is_none());
    }

    #[test]
    fn test_from_bytes_reduces_value() {
        let mut bytes = vec![0xff; 13];
        bytes[0] = 0x32;
        let share = Share::<Compact96>::from_bytes(&bytes).unwrap();
        assert_eq!(share.value(), &PrimeField::from_u64(16));
    }
}
