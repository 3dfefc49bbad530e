//! Fixed-length vectors of curve points

use crate::errors::ensure_same_length;
use crate::multiexp::{self, MultiexpConfig};
use crate::{AlgebraResult, Point, ScalarVector, VectorOperand};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// An ordered vector of Ed25519 points
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointVector(Vec<Point>);

impl PointVector {
    /// Wrap existing points
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Decode compressed hex points; any malformed entry fails the whole vector
    pub fn from_hex<S: AsRef<str>>(encoded: &[S]) -> AlgebraResult<Self> {
        encoded
            .iter()
            .map(|s| Point::from_hex(s.as_ref()))
            .collect::<AlgebraResult<Vec<_>>>()
            .map(Self)
    }

    /// Compressed hex encoding of every point
    pub fn to_hex(&self) -> Vec<String> {
        self.0.iter().map(Point::to_hex).collect()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no points
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Point at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.0.get(index)
    }

    /// Iterate over the points in order
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// Borrow the points as a slice
    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    /// Unwrap into the underlying `Vec`
    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }

    /// Element-wise group addition
    pub fn add(&self, other: &PointVector) -> AlgebraResult<PointVector> {
        ensure_same_length(self.len(), other.len())?;
        Ok(Self(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(a, b)| a.add(b))
                .collect(),
        ))
    }

    /// Element-wise group subtraction `self - other`
    pub fn subtract(&self, other: &PointVector) -> AlgebraResult<PointVector> {
        ensure_same_length(self.len(), other.len())?;
        Ok(Self(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(a, b)| a.subtract(b))
                .collect(),
        ))
    }

    /// Scale each point by the matching scalar, or every point by one scalar
    pub fn multiply<'a>(&self, operand: impl Into<VectorOperand<'a>>) -> AlgebraResult<PointVector> {
        match operand.into() {
            VectorOperand::Scalar(s) => Ok(Self(self.0.par_iter().map(|p| p.multiply(s)).collect())),
            VectorOperand::Vector(scalars) => {
                ensure_same_length(self.len(), scalars.len())?;
                Ok(Self(
                    self.0
                        .par_iter()
                        .zip(scalars.as_slice().par_iter())
                        .map(|(p, s)| p.multiply(s))
                        .collect(),
                ))
            }
        }
    }

    /// Group inverse of every point
    pub fn negate(&self) -> PointVector {
        Self(self.0.iter().map(Point::negate).collect())
    }

    /// Group sum of all points
    pub fn sum(&self) -> Point {
        self.0.iter().copied().sum()
    }

    /// `Σ sᵢ·Pᵢ` through the bucket engine
    pub fn pow(&self, scalars: &ScalarVector) -> AlgebraResult<Point> {
        self.pow_with_config(scalars, &MultiexpConfig::default())
    }

    /// Alias of [`PointVector::pow`]
    pub fn dot_product(&self, scalars: &ScalarVector) -> AlgebraResult<Point> {
        self.pow(scalars)
    }

    /// [`PointVector::pow`] with an explicit engine configuration
    pub fn pow_with_config(
        &self,
        scalars: &ScalarVector,
        config: &MultiexpConfig,
    ) -> AlgebraResult<Point> {
        multiexp::multiscalar_mul_with_config(scalars, self, config)
    }
}

impl From<Vec<Point>> for PointVector {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl FromIterator<Point> for PointVector {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointVector {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
