//! Ed25519 points with compressed hex encoding

use crate::codec::{self, ENCODED_LEN};
use crate::{AlgebraError, AlgebraResult, Scalar};
use curve25519_dalek::{
    constants::ED25519_BASEPOINT_POINT,
    edwards::{CompressedEdwardsY, EdwardsPoint},
    traits::{Identity, IsIdentity},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the Ed25519 curve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point(pub EdwardsPoint);

impl Point {
    /// Identity element
    pub fn identity() -> Self {
        Self(EdwardsPoint::identity())
    }

    /// The standard Ed25519 basepoint `G`
    pub fn basepoint() -> Self {
        Self(ED25519_BASEPOINT_POINT)
    }

    /// Decode a compressed Edwards-Y encoding
    pub fn from_compressed_bytes(bytes: [u8; ENCODED_LEN]) -> AlgebraResult<Self> {
        CompressedEdwardsY(bytes)
            .decompress()
            .map(Self)
            .ok_or_else(|| {
                AlgebraError::InvalidPointEncoding(format!(
                    "{} is not a point on the curve",
                    hex::encode(bytes)
                ))
            })
    }

    /// Decode a 64-character compressed hex encoding
    pub fn from_hex(s: &str) -> AlgebraResult<Self> {
        let bytes = codec::decode_hex32(s)
            .map_err(|e| AlgebraError::InvalidPointEncoding(e.to_string()))?;
        Self::from_compressed_bytes(bytes)
    }

    /// Compress this point
    pub fn compress(&self) -> CompressedEdwardsY {
        self.0.compress()
    }

    /// Compressed 32-byte encoding
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        self.0.compress().to_bytes()
    }

    /// Compressed encoding as lowercase hex
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Whether this is the group identity
    pub fn is_identity(&self) -> bool {
        self.0.is_identity()
    }

    /// Whether this point lies in the torsion subgroup
    pub fn is_small_order(&self) -> bool {
        self.0.is_small_order()
    }

    /// Multiply by the cofactor 8, projecting into the prime-order subgroup
    pub fn mul_by_cofactor(&self) -> Self {
        Self(self.0.mul_by_cofactor())
    }

    /// Group addition
    pub fn add(&self, other: &Point) -> Point {
        Self(self.0 + other.0)
    }

    /// Group subtraction
    pub fn subtract(&self, other: &Point) -> Point {
        Self(self.0 - other.0)
    }

    /// Group inverse
    pub fn negate(&self) -> Point {
        Self(-self.0)
    }

    /// Scalar multiplication
    pub fn multiply(&self, scalar: &Scalar) -> Point {
        Self(self.0 * scalar.inner())
    }

    /// `scalar · G`
    pub fn mul_base(scalar: &Scalar) -> Point {
        Self(EdwardsPoint::mul_base(scalar.inner()))
    }

    /// The underlying curve25519-dalek point
    pub fn inner(&self) -> &EdwardsPoint {
        &self.0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::ops::Mul<Scalar> for Point {
    type Output = Self;

    fn mul(self, scalar: Scalar) -> Self {
        Self(self.0 * scalar.inner())
    }
}

impl std::ops::Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Point {
    fn sum<I: Iterator<Item = Point>>(iter: I) -> Self {
        iter.fold(Point::identity(), |acc, p| acc + p)
    }
}

impl From<EdwardsPoint> for Point {
    fn from(point: EdwardsPoint) -> Self {
        Self(point)
    }
}

impl From<Point> for EdwardsPoint {
    fn from(point: Point) -> Self {
        point.0
    }
}
