//! Benchmarks for pedersen-core
//!
//! This crate contains performance benchmarks for:
//! - The bucket multiscalar multiplication engine against naive summation
//! - Scalar and point vector algebra
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench -p benches
//! ```
//!
//! Or run specific benchmarks:
//! ```bash
//! cargo bench -p benches --bench multiexp
//! cargo bench -p benches --bench vector_ops
//! ```

use pedersen_core::{Point, PointVector, Scalar, ScalarVector};
use rand::thread_rng;

/// Random scalars and random prime-order points of length `n`
pub fn random_instance(n: usize) -> (ScalarVector, PointVector) {
    let mut rng = thread_rng();
    let scalars = ScalarVector::random(&mut rng, n);
    let points = (0..n)
        .map(|_| Point::mul_base(&Scalar::random(&mut rng)))
        .collect();
    (scalars, points)
}
