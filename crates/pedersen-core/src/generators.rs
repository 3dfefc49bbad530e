//! Commitment bases and Pedersen commitments
//!
//! All bases except `G` come from [`hash_to_point`](crate::hash::hash_to_point_with),
//! so nobody knows a discrete log relation between them.

use crate::hash::{hash_to_point_with, HashToCurveConfig};
use crate::multiexp::{self, MultiexpConfig};
use crate::{AlgebraError, AlgebraResult, Point, PointVector, Scalar, ScalarVector};
use sha3::Keccak256;
use tracing::debug;

const H_LABEL: &[u8] = b"pedersen_h_generator";
const G_VEC_LABEL: &[u8] = b"pedersen_g_";

/// Bases for value and vector Pedersen commitments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PedersenGens {
    /// Value base, the Ed25519 basepoint
    pub g: Point,
    /// Blinding base
    pub h: Point,
    /// Vector bases `G_0 .. G_{n-1}`
    pub g_vec: PointVector,
    config: HashToCurveConfig,
}

impl PedersenGens {
    /// Derive `n` vector bases under the default domain
    pub fn new(n: usize) -> AlgebraResult<Self> {
        Self::with_config(n, HashToCurveConfig::default())
    }

    /// Derive `n` vector bases under a custom hash configuration
    pub fn with_config(n: usize, config: HashToCurveConfig) -> AlgebraResult<Self> {
        let h = hash_to_point_with::<Keccak256>(H_LABEL, &config)?;
        let g_vec = (0..n)
            .map(|i| vector_base(i, &config))
            .collect::<AlgebraResult<Vec<_>>>()?;

        debug!(n, "derived pedersen generators");

        Ok(Self {
            g: Point::basepoint(),
            h,
            g_vec: PointVector::new(g_vec),
            config,
        })
    }

    /// Number of vector bases
    pub fn vector_length(&self) -> usize {
        self.g_vec.len()
    }

    /// Extend the vector bases to at least `length`
    pub fn ensure_capacity(&mut self, length: usize) -> AlgebraResult<()> {
        if self.vector_length() >= length {
            return Ok(());
        }

        let mut bases = std::mem::take(&mut self.g_vec).into_inner();
        for i in bases.len()..length {
            bases.push(vector_base(i, &self.config)?);
        }
        self.g_vec = PointVector::new(bases);

        Ok(())
    }

    /// The first `length` vector bases
    pub fn subset(&self, length: usize) -> AlgebraResult<PedersenGens> {
        if length > self.vector_length() {
            return Err(AlgebraError::InsufficientGenerators {
                needed: length,
                available: self.vector_length(),
            });
        }

        Ok(PedersenGens {
            g: self.g,
            h: self.h,
            g_vec: PointVector::new(self.g_vec.as_slice()[..length].to_vec()),
            config: self.config.clone(),
        })
    }

    /// `value·G + blinding·H`
    pub fn commit(&self, value: &Scalar, blinding: &Scalar) -> Point {
        self.g.multiply(value).add(&self.h.multiply(blinding))
    }

    /// `Σ aᵢ·Gᵢ + blinding·H`
    pub fn vector_commit(&self, values: &ScalarVector, blinding: &Scalar) -> AlgebraResult<Point> {
        self.vector_commit_with_config(values, blinding, &MultiexpConfig::default())
    }

    /// [`PedersenGens::vector_commit`] with an explicit engine configuration
    pub fn vector_commit_with_config(
        &self,
        values: &ScalarVector,
        blinding: &Scalar,
        config: &MultiexpConfig,
    ) -> AlgebraResult<Point> {
        if values.len() > self.vector_length() {
            return Err(AlgebraError::InsufficientGenerators {
                needed: values.len(),
                available: self.vector_length(),
            });
        }

        // Fold the blinding term into the same multiexp
        let scalars: ScalarVector = values.iter().copied().chain([*blinding]).collect();
        let points: PointVector = self.g_vec.as_slice()[..values.len()]
            .iter()
            .copied()
            .chain([self.h])
            .collect();

        multiexp::multiscalar_mul_with_config(&scalars, &points, config)
    }
}

fn vector_base(index: usize, config: &HashToCurveConfig) -> AlgebraResult<Point> {
    let mut label = G_VEC_LABEL.to_vec();
    label.extend_from_slice(&(index as u64).to_le_bytes());
    hash_to_point_with::<Keccak256>(&label, config)
}
