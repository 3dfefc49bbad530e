//! Fixed-length vectors of scalars with Hadamard algebra

use crate::errors::ensure_same_length;
use crate::{AlgebraResult, Point, PointVector, Scalar};
use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// Right-hand side of a vector multiplication
#[derive(Clone, Copy, Debug)]
pub enum VectorOperand<'a> {
    /// Uniform scaling by one scalar
    Scalar(&'a Scalar),
    /// Elementwise (Hadamard) product
    Vector(&'a ScalarVector),
}

impl<'a> From<&'a Scalar> for VectorOperand<'a> {
    fn from(scalar: &'a Scalar) -> Self {
        VectorOperand::Scalar(scalar)
    }
}

impl<'a> From<&'a ScalarVector> for VectorOperand<'a> {
    fn from(vector: &'a ScalarVector) -> Self {
        VectorOperand::Vector(vector)
    }
}

/// Right-hand side of [`ScalarVector::pow`]
#[derive(Clone, Copy, Debug)]
pub enum PowOperand<'a> {
    /// Inner product with another scalar vector
    Scalars(&'a ScalarVector),
    /// Multiscalar multiplication against a point vector
    Points(&'a PointVector),
}

impl<'a> From<&'a ScalarVector> for PowOperand<'a> {
    fn from(vector: &'a ScalarVector) -> Self {
        PowOperand::Scalars(vector)
    }
}

impl<'a> From<&'a PointVector> for PowOperand<'a> {
    fn from(vector: &'a PointVector) -> Self {
        PowOperand::Points(vector)
    }
}

/// Result of [`ScalarVector::pow`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowOutput {
    /// Inner product of two scalar vectors
    Scalar(Scalar),
    /// Multiscalar multiplication result
    Point(Point),
}

impl PowOutput {
    /// The scalar result, if the operand was a scalar vector
    pub fn into_scalar(self) -> Option<Scalar> {
        match self {
            PowOutput::Scalar(s) => Some(s),
            PowOutput::Point(_) => None,
        }
    }

    /// The point result, if the operand was a point vector
    pub fn into_point(self) -> Option<Point> {
        match self {
            PowOutput::Point(p) => Some(p),
            PowOutput::Scalar(_) => None,
        }
    }
}

/// An ordered vector of scalars
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarVector(Vec<Scalar>);

impl ScalarVector {
    /// Wrap existing scalars
    pub fn new(scalars: Vec<Scalar>) -> Self {
        Self(scalars)
    }

    /// Build from big integers, reducing each mod `l`
    pub fn from_biguints(values: &[BigUint]) -> Self {
        Self(values.iter().map(Scalar::from_biguint).collect())
    }

    /// Build from small integers
    pub fn from_u64s(values: &[u64]) -> Self {
        Self(values.iter().map(|v| Scalar::from(*v)).collect())
    }

    /// `n` zero scalars
    pub fn zeros(n: usize) -> Self {
        Self(vec![Scalar::zero(); n])
    }

    /// `[1, x, x^2, ..., x^(n-1)]`
    pub fn powers(x: &Scalar, n: usize) -> Self {
        let mut powers = Vec::with_capacity(n);
        let mut current = Scalar::one();

        for _ in 0..n {
            powers.push(current);
            current = current.multiply(x);
        }

        Self(powers)
    }

    /// `n` independent random scalars
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R, n: usize) -> Self {
        Self((0..n).map(|_| Scalar::random(&mut *rng)).collect())
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no elements
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Element at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&Scalar> {
        self.0.get(index)
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.0.iter()
    }

    /// Borrow the elements as a slice
    pub fn as_slice(&self) -> &[Scalar] {
        &self.0
    }

    /// Unwrap into the underlying `Vec`
    pub fn into_inner(self) -> Vec<Scalar> {
        self.0
    }

    /// Element-wise sum
    pub fn add(&self, other: &ScalarVector) -> AlgebraResult<ScalarVector> {
        self.zip_with(other, |a, b| a.add(b))
    }

    /// Element-wise difference `self - other`
    pub fn subtract(&self, other: &ScalarVector) -> AlgebraResult<ScalarVector> {
        self.zip_with(other, |a, b| a.subtract(b))
    }

    /// Hadamard product with a vector, or uniform scaling by a scalar
    pub fn multiply<'a>(&self, operand: impl Into<VectorOperand<'a>>) -> AlgebraResult<ScalarVector> {
        match operand.into() {
            VectorOperand::Scalar(s) => Ok(Self(self.0.iter().map(|v| v.multiply(s)).collect())),
            VectorOperand::Vector(other) => self.zip_with(other, |a, b| a.multiply(b)),
        }
    }

    /// Element-wise quotient; fails if any divisor is zero
    pub fn divide(&self, other: &ScalarVector) -> AlgebraResult<ScalarVector> {
        ensure_same_length(self.len(), other.len())?;

        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.divide(b))
            .collect::<AlgebraResult<Vec<_>>>()
            .map(Self)
    }

    /// Additive inverse of every element
    pub fn negate(&self) -> ScalarVector {
        let zero = Scalar::zero();
        Self(self.0.iter().map(|v| zero.subtract(v)).collect())
    }

    /// Field sum of all elements
    pub fn sum_of_all(&self) -> Scalar {
        self.0.iter().copied().sum()
    }

    /// `Σ aᵢ·bᵢ mod l`
    pub fn inner_product(&self, other: &ScalarVector) -> AlgebraResult<Scalar> {
        ensure_same_length(self.len(), other.len())?;

        Ok(self
            .0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.multiply(b))
            .sum())
    }

    /// Inner product against scalars, multiscalar multiplication against points
    pub fn pow<'a>(&self, operand: impl Into<PowOperand<'a>>) -> AlgebraResult<PowOutput> {
        match operand.into() {
            PowOperand::Scalars(other) => self.inner_product(other).map(PowOutput::Scalar),
            PowOperand::Points(points) => points.pow(self).map(PowOutput::Point),
        }
    }

    fn zip_with<F>(&self, other: &ScalarVector, f: F) -> AlgebraResult<ScalarVector>
    where
        F: Fn(&Scalar, &Scalar) -> Scalar,
    {
        ensure_same_length(self.len(), other.len())?;
        Ok(Self(self.0.iter().zip(other.0.iter()).map(|(a, b)| f(a, b)).collect()))
    }
}

impl From<Vec<Scalar>> for ScalarVector {
    fn from(scalars: Vec<Scalar>) -> Self {
        Self(scalars)
    }
}

impl FromIterator<Scalar> for ScalarVector {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ScalarVector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlgebraError;
    use rand::rngs::OsRng;

    fn v(values: &[u64]) -> ScalarVector {
        ScalarVector::from_u64s(values)
    }

    #[test]
    fn test_add_subtract() {
        let a = v(&[1, 2, 3]);
        let b = v(&[10, 20, 30]);
        assert_eq!(a.add(&b).unwrap(), v(&[11, 22, 33]));
        assert_eq!(b.subtract(&a).unwrap(), v(&[9, 18, 27]));
        assert_eq!(a.subtract(&b).unwrap().add(&b).unwrap(), a);
    }

    #[test]
    fn test_multiply_dispatch() {
        let a = v(&[2, 3, 4]);
        let b = v(&[5, 6, 7]);
        let k = Scalar::from(10u64);

        assert_eq!(a.multiply(&b).unwrap(), v(&[10, 18, 28]));
        assert_eq!(a.multiply(&k).unwrap(), v(&[20, 30, 40]));
        assert_eq!(a.multiply(VectorOperand::Scalar(&k)).unwrap(), v(&[20, 30, 40]));
    }

    #[test]
    fn test_divide() {
        let a = v(&[10, 18, 28]);
        let b = v(&[5, 6, 7]);
        assert_eq!(a.divide(&b).unwrap(), v(&[2, 3, 4]));
        assert_eq!(a.divide(&v(&[1, 0, 1])), Err(AlgebraError::NonInvertible));
    }

    #[test]
    fn test_negate() {
        let a = v(&[0, 1, 5]);
        let negated = a.negate();
        assert_eq!(negated.get(0), Some(&Scalar::zero()));
        assert_eq!(negated.add(&a).unwrap(), ScalarVector::zeros(3));
        assert_eq!(negated.negate(), a);
    }

    #[test]
    fn test_sum_of_all() {
        assert_eq!(v(&[1, 2, 3, 4]).sum_of_all(), Scalar::from(10u64));
        assert_eq!(ScalarVector::new(vec![]).sum_of_all(), Scalar::zero());

        let minus_one = Scalar::zero().subtract(&Scalar::one());
        let wrapping = ScalarVector::new(vec![minus_one, Scalar::from(3u64)]);
        assert_eq!(wrapping.sum_of_all(), Scalar::from(2u64));
    }

    #[test]
    fn test_inner_product() {
        let a = v(&[1, 2, 3]);
        let b = v(&[4, 5, 6]);
        assert_eq!(a.inner_product(&b).unwrap(), Scalar::from(32u64));
        assert_eq!(
            a.pow(&b).unwrap(),
            PowOutput::Scalar(Scalar::from(32u64))
        );
    }

    #[test]
    fn test_pow_against_points() {
        let g = Point::basepoint();
        let points = PointVector::new(vec![
            g,
            g.multiply(&Scalar::from(2u64)),
            g.multiply(&Scalar::from(3u64)),
        ]);

        let result = v(&[1, 2, 3]).pow(&points).unwrap();
        assert_eq!(result.into_point(), Some(g.multiply(&Scalar::from(14u64))));
        assert_eq!(result.into_scalar(), None);
    }

    #[test]
    fn test_length_mismatch_everywhere() {
        let a = v(&[1, 2, 3]);
        let b = v(&[1, 2, 3, 4]);
        let mismatch = AlgebraError::LengthMismatch {
            expected: 3,
            actual: 4,
        };

        assert_eq!(a.add(&b), Err(mismatch.clone()));
        assert_eq!(a.subtract(&b), Err(mismatch.clone()));
        assert_eq!(a.multiply(&b), Err(mismatch.clone()));
        assert_eq!(a.divide(&b), Err(mismatch.clone()));
        assert_eq!(a.inner_product(&b), Err(mismatch.clone()));
        assert_eq!(a.pow(&b), Err(mismatch));
    }

    #[test]
    fn test_powers() {
        let powers = ScalarVector::powers(&Scalar::from(3u64), 4);
        assert_eq!(powers, v(&[1, 3, 9, 27]));
        assert!(ScalarVector::powers(&Scalar::from(3u64), 0).is_empty());
    }

    #[test]
    fn test_from_biguints_reduces() {
        let l = crate::group_order();
        let values = vec![l.clone(), l + BigUint::from(1u32), BigUint::from(9u32)];
        assert_eq!(ScalarVector::from_biguints(&values), v(&[0, 1, 9]));
    }

    #[test]
    fn test_random_length() {
        let r = ScalarVector::random(&mut OsRng, 5);
        assert_eq!(r.len(), 5);
        assert_eq!(r.iter().count(), 5);
    }
}
