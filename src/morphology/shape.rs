//! Moment-of-inertia shape fitting.

use crate::{Mat3, Vec3};
use serde::Serialize;

/// Axis ratios of the best-fit mass ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxialRatios {
    /// c/a, minor over major
    pub minor_major: f64,
    /// c/b, minor over intermediate
    pub minor_intermediate: f64,
    /// b/a, intermediate over major
    pub intermediate_major: f64,
}

/// Fit a mass ellipsoid to recentred positions and return its axis ratios.
///
/// The tensor uses square-root-normalized terms rather than plain quadratic
/// moments, which tames the weight of far-out particles. Particles at zero
/// radius have no direction and are excluded. Each of the six tensor entries
/// is reduced on its own, skipping only the terms that are undefined for
/// that entry: a particle on a coordinate plane still contributes to every
/// other entry.
pub fn axial_ratios(positions: &[Vec3], masses: &[f64]) -> AxialRatios {
    let kept: Vec<(Vec3, f64)> = positions
        .iter()
        .zip(masses)
        .filter(|(r, _)| r.norm() > 0.0)
        .map(|(r, &m)| (*r, m))
        .collect();

    let diagonal = |select: fn(&Vec3) -> (f64, f64)| -> f64 {
        nan_filtered_sum(kept.iter().map(|(r, m)| {
            let (u, w) = select(r);
            let s = u * u + w * w;
            m * s / s.sqrt()
        }))
    };
    let off_diagonal = |select: fn(&Vec3) -> (f64, f64)| -> f64 {
        nan_filtered_sum(kept.iter().map(|(r, m)| {
            let (u, w) = select(r);
            let p = u * w;
            -m * p / p.abs().sqrt()
        }))
    };

    let i_xx = diagonal(|r| (r.y, r.z));
    let i_yy = diagonal(|r| (r.x, r.z));
    let i_zz = diagonal(|r| (r.x, r.y));
    let i_xy = off_diagonal(|r| (r.x, r.y));
    let i_xz = off_diagonal(|r| (r.x, r.z));
    let i_yz = off_diagonal(|r| (r.y, r.z));

    let tensor = Mat3::new(i_xx, i_xy, i_xz, i_xy, i_yy, i_yz, i_xz, i_yz, i_zz);
    let mut eigenvalues: Vec<f64> = tensor.symmetric_eigen().eigenvalues.iter().copied().collect();
    eigenvalues.sort_by(|a, b| b.total_cmp(a));
    let (w1, w2, w3) = (eigenvalues[0], eigenvalues[1], eigenvalues[2]);

    // Ellipsoid axes, unnormalised; only their ratios carry meaning.
    let a = (w1 + w2 - w3).abs().sqrt();
    let b = (w1 + w3 - w2).abs().sqrt();
    let c = (w2 + w3 - w1).abs().sqrt();

    AxialRatios {
        minor_major: c / a,
        minor_intermediate: c / b,
        intermediate_major: b / a,
    }
}

fn nan_filtered_sum(terms: impl Iterator<Item = f64>) -> f64 {
    terms.filter(|t| !t.is_nan()).sum()
}
