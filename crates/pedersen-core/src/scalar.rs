//! Scalars canonically reduced modulo the Ed25519 group order `l`
//!
//! Every constructor reduces its input, so a [`Scalar`] always holds a value
//! in `[0, l-1]` and equality is equality of canonical values.

use crate::codec::{self, ENCODED_LEN};
use crate::{AlgebraError, AlgebraResult};
use curve25519_dalek::scalar::Scalar as DalekScalar;
use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

/// Little-endian bytes of `l = 2^252 + 27742317777372353535851937790883648493`
pub const GROUP_ORDER_BYTES: [u8; ENCODED_LEN] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

static GROUP_ORDER: OnceLock<BigUint> = OnceLock::new();

/// The prime order `l` of the Ed25519 main subgroup
pub fn group_order() -> &'static BigUint {
    GROUP_ORDER.get_or_init(|| codec::bytes_to_int(&GROUP_ORDER_BYTES))
}

/// A field element modulo `l`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scalar(DalekScalar);

impl Scalar {
    /// The additive identity
    pub fn zero() -> Self {
        Self(DalekScalar::ZERO)
    }

    /// The multiplicative identity
    pub fn one() -> Self {
        Self(DalekScalar::ONE)
    }

    /// Build a scalar from an arbitrary unsigned integer, reducing mod `l`.
    pub fn from_biguint(n: &BigUint) -> Self {
        let reduced = n % group_order();
        let le = reduced.to_bytes_le();
        let mut bytes = [0u8; ENCODED_LEN];
        bytes[..le.len()].copy_from_slice(&le);
        Self(DalekScalar::from_bytes_mod_order(bytes))
    }

    /// Interpret 32 little-endian bytes as an integer and reduce mod `l`.
    pub fn from_bytes_mod_order(bytes: [u8; ENCODED_LEN]) -> Self {
        Self(DalekScalar::from_bytes_mod_order(bytes))
    }

    /// Interpret 64 little-endian bytes as an integer and reduce mod `l`.
    pub fn from_bytes_mod_order_wide(bytes: &[u8; 64]) -> Self {
        Self(DalekScalar::from_bytes_mod_order_wide(bytes))
    }

    /// Accept 32 bytes only if they already encode a value below `l`.
    pub fn from_canonical_bytes(bytes: [u8; ENCODED_LEN]) -> Option<Self> {
        let canonical: Option<DalekScalar> = DalekScalar::from_canonical_bytes(bytes).into();
        canonical.map(Self)
    }

    /// Decode a 64-character little-endian hex string, reducing mod `l`.
    pub fn from_hex(s: &str) -> AlgebraResult<Self> {
        codec::decode_hex32(s).map(Self::from_bytes_mod_order)
    }

    /// Draw 32 uniformly random bytes and reduce them mod `l`.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; ENCODED_LEN];
        rng.fill_bytes(&mut bytes);
        Self::from_bytes_mod_order(bytes)
    }

    /// Random scalar from the operating system's secure source
    pub fn random_os() -> Self {
        Self::random(&mut OsRng)
    }

    /// The canonical value as a big integer
    pub fn value(&self) -> BigUint {
        codec::bytes_to_int(self.0.as_bytes())
    }

    /// Canonical 32-byte little-endian encoding
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        self.0.to_bytes()
    }

    /// Borrow the canonical encoding
    pub fn as_bytes(&self) -> &[u8; ENCODED_LEN] {
        self.0.as_bytes()
    }

    /// Canonical encoding as lowercase hex
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.as_bytes())
    }

    /// Whether this is the zero scalar
    pub fn is_zero(&self) -> bool {
        self.0 == DalekScalar::ZERO
    }

    /// Bit length of the canonical value (0 for zero)
    pub fn bits(&self) -> usize {
        codec::bit_length(self.0.as_bytes())
    }

    /// The underlying curve25519-dalek scalar
    pub fn inner(&self) -> &DalekScalar {
        &self.0
    }

    /// `(self + other) mod l`
    pub fn add(&self, other: &Scalar) -> Scalar {
        Self(self.0 + other.0)
    }

    /// `(self - other) mod l`
    pub fn subtract(&self, other: &Scalar) -> Scalar {
        Self(self.0 - other.0)
    }

    /// `(self * other) mod l`
    pub fn multiply(&self, other: &Scalar) -> Scalar {
        Self(self.0 * other.0)
    }

    /// `self⁻¹ mod l`, failing for zero
    pub fn invert(&self) -> AlgebraResult<Scalar> {
        if self.is_zero() {
            return Err(AlgebraError::NonInvertible);
        }
        Ok(Self(self.0.invert()))
    }

    /// `(self * other⁻¹) mod l`
    pub fn divide(&self, other: &Scalar) -> AlgebraResult<Scalar> {
        Ok(self.multiply(&other.invert()?))
    }

    /// `self^exponent mod l`, with `0^0 = 1`
    pub fn exponentiate(&self, exponent: &Scalar) -> Scalar {
        Self::from_biguint(&self.value().modpow(&exponent.value(), group_order()))
    }

    /// [`Scalar::add`] with a hex-encoded right-hand side
    pub fn add_hex(&self, other: &str) -> AlgebraResult<Scalar> {
        Ok(self.add(&Scalar::from_hex(other)?))
    }

    /// [`Scalar::subtract`] with a hex-encoded right-hand side
    pub fn subtract_hex(&self, other: &str) -> AlgebraResult<Scalar> {
        Ok(self.subtract(&Scalar::from_hex(other)?))
    }

    /// [`Scalar::multiply`] with a hex-encoded right-hand side
    pub fn multiply_hex(&self, other: &str) -> AlgebraResult<Scalar> {
        Ok(self.multiply(&Scalar::from_hex(other)?))
    }

    /// [`Scalar::divide`] with a hex-encoded right-hand side
    pub fn divide_hex(&self, other: &str) -> AlgebraResult<Scalar> {
        self.divide(&Scalar::from_hex(other)?)
    }

    /// [`Scalar::exponentiate`] with a hex-encoded exponent
    pub fn exponentiate_hex(&self, exponent: &str) -> AlgebraResult<Scalar> {
        Ok(self.exponentiate(&Scalar::from_hex(exponent)?))
    }
}

/// Reduce an arbitrary 32-byte string into a valid scalar.
pub fn sc_reduce32(bytes: [u8; ENCODED_LEN]) -> Scalar {
    Scalar::from_bytes_mod_order(bytes)
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self(DalekScalar::from(value))
    }
}

impl From<DalekScalar> for Scalar {
    fn from(scalar: DalekScalar) -> Self {
        Self(scalar)
    }
}

impl From<Scalar> for DalekScalar {
    fn from(scalar: Scalar) -> Self {
        scalar.0
    }
}

impl From<&BigUint> for Scalar {
    fn from(value: &BigUint) -> Self {
        Self::from_biguint(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        // Most significant byte last in the little-endian encoding
        self.0.as_bytes().iter().rev().cmp(other.0.as_bytes().iter().rev())
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::ops::Add for Scalar {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::Sub for Scalar {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::ops::Mul for Scalar {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl std::ops::Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Self {
        iter.fold(Scalar::zero(), |acc, s| acc + s)
    }
}
