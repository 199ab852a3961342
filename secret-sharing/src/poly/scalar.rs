use std::{
    fmt,
    iter::Sum,
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use zeroize::Zeroize;

/// Parameters of a prime field whose modulus fits a whole number of bytes.
pub trait Modulus: Copy + Clone + fmt::Debug + PartialEq + Eq + Send + Sync + 'static {
    /// The bit width of the field, a multiple of 8.
    const NUM_BITS: usize;

    /// Returns the prime modulus, which is strictly less than `2^NUM_BITS`.
    fn modulus() -> &'static BigUint;

    /// Returns the size of the byte representation of a field element.
    fn byte_size() -> usize {
        Self::NUM_BITS / 8
    }
}

/// An element of the prime field defined by `M`.
///
/// The value is always the canonical representative in `[0, p)`.
#[derive(Clone, PartialEq, Eq)]
pub struct Scalar<M: Modulus> {
    value: BigUint,
    modulus: PhantomData<M>,
}

impl<M> Scalar<M>
where
    M: Modulus,
{
    /// Returns the additive identity.
    pub fn zero() -> Self {
        Self::new_unchecked(BigUint::zero())
    }

    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        Self::new_unchecked(BigUint::one())
    }

    /// Converts a small integer to a field element, reducing it if needed.
    pub fn from_u64(value: u64) -> Self {
        Self::reduce(BigUint::from(value))
    }

    /// Converts the fixed-width big-endian representation to a field element.
    ///
    /// Returns `None` if the length is wrong or the value is not smaller than
    /// the modulus.
    pub fn from_repr(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != M::byte_size() {
            return None;
        }
        let value = BigUint::from_bytes_be(bytes);
        if value >= *M::modulus() {
            return None;
        }

        Some(Self::new_unchecked(value))
    }

    /// Converts the fixed-width big-endian representation to a field element,
    /// reducing values that are not smaller than the modulus.
    ///
    /// Returns `None` if the length is wrong.
    pub fn from_repr_reduced(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != M::byte_size() {
            return None;
        }

        Some(Self::reduce(BigUint::from_bytes_be(bytes)))
    }

    /// Returns the big-endian representation, left-padded with zeros to
    /// exactly `M::byte_size()` bytes.
    pub fn to_repr(&self) -> Vec<u8> {
        let size = M::byte_size();
        let bytes = self.value.to_bytes_be();
        let mut repr = vec![0; size];
        repr[size - bytes.len()..].copy_from_slice(&bytes);
        repr
    }

    /// Returns true iff the element is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Raises the element to the given power.
    pub fn pow(&self, exp: u32) -> Self {
        let exp = BigUint::from(exp);
        Self::new_unchecked(self.value.modpow(&exp, M::modulus()))
    }

    /// Returns the multiplicative inverse, or `None` for zero.
    ///
    /// Computed as `a^(p-2)` since the modulus is prime.
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let exp = M::modulus() - &BigUint::from(2u32);

        Some(Self::new_unchecked(self.value.modpow(&exp, M::modulus())))
    }

    fn reduce(value: BigUint) -> Self {
        Self::new_unchecked(value % M::modulus())
    }

    fn new_unchecked(value: BigUint) -> Self {
        Self {
            value,
            modulus: PhantomData,
        }
    }
}

impl<M> Default for Scalar<M>
where
    M: Modulus,
{
    fn default() -> Self {
        Self::zero()
    }
}

impl<M> Zeroize for Scalar<M>
where
    M: Modulus,
{
    fn zeroize(&mut self) {
        self.value.zeroize();
    }
}

impl<M> fmt::Debug for Scalar<M>
where
    M: Modulus,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{:x})", self.value)
    }
}

impl<'a, M> AddAssign<&'a Scalar<M>> for Scalar<M>
where
    M: Modulus,
{
    fn add_assign(&mut self, rhs: &Scalar<M>) {
        self.value += &rhs.value;
        if self.value >= *M::modulus() {
            self.value -= M::modulus();
        }
    }
}

impl<'a, M> SubAssign<&'a Scalar<M>> for Scalar<M>
where
    M: Modulus,
{
    fn sub_assign(&mut self, rhs: &Scalar<M>) {
        if self.value < rhs.value {
            self.value += M::modulus();
        }
        self.value -= &rhs.value;
    }
}

impl<'a, M> MulAssign<&'a Scalar<M>> for Scalar<M>
where
    M: Modulus,
{
    fn mul_assign(&mut self, rhs: &Scalar<M>) {
        self.value = (&self.value * &rhs.value) % M::modulus();
    }
}

impl<M> Neg for Scalar<M>
where
    M: Modulus,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl<'a, M> Neg for &'a Scalar<M>
where
    M: Modulus,
{
    type Output = Scalar<M>;

    fn neg(self) -> Scalar<M> {
        Scalar::zero() - self
    }
}

/// Derives the by-value and by-reference forms of a binary operator from its
/// `*Assign<&Scalar>` implementation.
macro_rules! forward_binop {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl<M: Modulus> $op_assign<Scalar<M>> for Scalar<M> {
            fn $method_assign(&mut self, rhs: Scalar<M>) {
                self.$method_assign(&rhs);
            }
        }

        impl<M: Modulus> $op<Scalar<M>> for Scalar<M> {
            type Output = Scalar<M>;

            fn $method(mut self, rhs: Scalar<M>) -> Scalar<M> {
                self.$method_assign(&rhs);
                self
            }
        }

        impl<'a, M: Modulus> $op<&'a Scalar<M>> for Scalar<M> {
            type Output = Scalar<M>;

            fn $method(mut self, rhs: &Scalar<M>) -> Scalar<M> {
                self.$method_assign(rhs);
                self
            }
        }

        impl<'a, M: Modulus> $op<Scalar<M>> for &'a Scalar<M> {
            type Output = Scalar<M>;

            fn $method(self, rhs: Scalar<M>) -> Scalar<M> {
                let mut r = self.clone();
                r.$method_assign(&rhs);
                r
            }
        }

        impl<'a, 'b, M: Modulus> $op<&'b Scalar<M>> for &'a Scalar<M> {
            type Output = Scalar<M>;

            fn $method(self, rhs: &Scalar<M>) -> Scalar<M> {
                let mut r = self.clone();
                r.$method_assign(rhs);
                r
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);

impl<M> Sum for Scalar<M>
where
    M: Modulus,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a, M> Sum<&'a Scalar<M>> for Scalar<M>
where
    M: Modulus,
{
    fn sum<I: Iterator<Item = &'a Scalar<M>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}
