//! Multi-scalar multiplication
//!
//! Computes `Σ sᵢ·Pᵢ` with a windowed bucket method (a Pippenger variant).
//! Each window of `c` bits sorts the points into `2^c - 1` buckets by the
//! scalar digit at that window, sums the buckets with a running partial
//! sum, and shifts the accumulator up by `c` doublings before the next,
//! less significant window.

use crate::codec::{bit_length, ENCODED_LEN};
use crate::errors::ensure_same_length;
use crate::{AlgebraError, AlgebraResult, Point, PointVector, ScalarVector};
use curve25519_dalek::edwards::EdwardsPoint;
use group::Group;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Widest supported window
pub const MAX_WINDOW_BITS: usize = 16;

/// Configuration for the bucket engine
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiexpConfig {
    /// Window width `c` in bits
    pub window_bits: usize,
    /// Minimum vector length before buckets are summed on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for MultiexpConfig {
    fn default() -> Self {
        Self {
            window_bits: 4,
            parallel_threshold: 256,
        }
    }
}

impl MultiexpConfig {
    fn validate(&self) -> AlgebraResult<()> {
        if self.window_bits == 0 || self.window_bits > MAX_WINDOW_BITS {
            return Err(AlgebraError::InvalidParameters(format!(
                "window_bits must be in 1..={}, got {}",
                MAX_WINDOW_BITS, self.window_bits
            )));
        }
        Ok(())
    }
}

/// `Σ sᵢ·Pᵢ` with the default configuration
pub fn multiscalar_mul(scalars: &ScalarVector, points: &PointVector) -> AlgebraResult<Point> {
    multiscalar_mul_with_config(scalars, points, &MultiexpConfig::default())
}

/// `Σ sᵢ·Pᵢ` with a custom configuration
pub fn multiscalar_mul_with_config(
    scalars: &ScalarVector,
    points: &PointVector,
    config: &MultiexpConfig,
) -> AlgebraResult<Point> {
    ensure_same_length(points.len(), scalars.len())?;

    let digits: Vec<[u8; ENCODED_LEN]> = scalars.iter().map(|s| s.to_bytes()).collect();
    let curve_points: Vec<EdwardsPoint> = points.iter().map(|p| p.0).collect();

    bucket_msm(&digits, &curve_points, config).map(Point)
}

/// Reference `Σ sᵢ·Pᵢ`: one scalar multiplication per term, then a sum
pub fn naive_multiscalar_mul(scalars: &ScalarVector, points: &PointVector) -> AlgebraResult<Point> {
    ensure_same_length(points.len(), scalars.len())?;

    Ok(scalars
        .iter()
        .zip(points.iter())
        .map(|(s, p)| p.multiply(s))
        .sum())
}

/// Bucket method over any prime-order group.
///
/// `scalars` are 256-bit little-endian integers, one per point.
pub fn bucket_msm<G>(
    scalars: &[[u8; ENCODED_LEN]],
    points: &[G],
    config: &MultiexpConfig,
) -> AlgebraResult<G>
where
    G: Group + Send + Sync,
{
    ensure_same_length(points.len(), scalars.len())?;
    config.validate()?;

    if scalars.is_empty() {
        return Ok(G::identity());
    }

    let c = config.window_bits;
    let max_bits = scalars.iter().map(bit_length).max().unwrap_or(0);
    let num_windows = (max_bits + c - 1) / c;
    let parallel = scalars.len() >= config.parallel_threshold;

    debug!(
        n = scalars.len(),
        window_bits = c,
        num_windows,
        parallel,
        "bucket multiscalar multiplication"
    );

    let mut result = G::identity();

    for window in (0..num_windows).rev() {
        if window + 1 != num_windows {
            for _ in 0..c {
                result = result.double();
            }
        }

        let offset = window * c;
        let members = partition(scalars, offset, c);
        result += if parallel {
            combine_buckets(bucket_sums_parallel(&members, points))
        } else {
            combine_buckets(bucket_sums(&members, points))
        };
    }

    Ok(result)
}

/// Indices of the points in each bucket `1..2^c`, stored at `digit - 1`.
fn partition(scalars: &[[u8; ENCODED_LEN]], offset: usize, width: usize) -> Vec<Vec<usize>> {
    let mut members = vec![Vec::new(); (1usize << width) - 1];

    for (i, scalar) in scalars.iter().enumerate() {
        let digit = window_digit(scalar, offset, width);
        // Digit zero contributes nothing
        if digit > 0 {
            members[digit - 1].push(i);
        }
    }

    members
}

fn bucket_sums<G: Group>(members: &[Vec<usize>], points: &[G]) -> Vec<G> {
    members
        .iter()
        .map(|indices| sum_indices(indices, points))
        .collect()
}

fn bucket_sums_parallel<G: Group + Send + Sync>(members: &[Vec<usize>], points: &[G]) -> Vec<G> {
    members
        .par_iter()
        .map(|indices| sum_indices(indices, points))
        .collect()
}

fn sum_indices<G: Group>(indices: &[usize], points: &[G]) -> G {
    indices
        .iter()
        .fold(G::identity(), |acc, &i| acc + points[i])
}

/// `Σ b·bucket[b-1]` using only additions: scanning from the highest bucket,
/// the running sum at step `b` holds every bucket `≥ b`.
fn combine_buckets<G: Group>(buckets: Vec<G>) -> G {
    let mut window_sum = G::identity();
    let mut running_sum = G::identity();

    for bucket in buckets.into_iter().rev() {
        running_sum += bucket;
        window_sum += running_sum;
    }

    window_sum
}

/// Extract `width` bits starting at `offset` from a little-endian scalar
fn window_digit(scalar: &[u8; ENCODED_LEN], offset: usize, width: usize) -> usize {
    let mut digit = 0usize;

    for bit_idx in offset..offset + width {
        let byte_idx = bit_idx / 8;
        if byte_idx >= ENCODED_LEN {
            break;
        }
        let bit = (scalar[byte_idx] >> (bit_idx % 8)) & 1;
        digit |= (bit as usize) << (bit_idx - offset);
    }

    digit
}
