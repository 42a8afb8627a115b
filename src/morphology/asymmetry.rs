//! Directional mass asymmetry.

use crate::morphology::sphere::PixelGrid;
use crate::Vec3;
use anyhow::Result;

/// Mass imbalance between antipodal directions, normalized by total mass.
///
/// Particles are binned by direction on an equal-area pixel grid; for every
/// pixel in the northern half and its antipode the absolute mass difference
/// is accumulated over a single all-radii shell. A point-symmetric
/// distribution scores 0, a one-sided one approaches 1, independent of the
/// radial profile.
pub fn asymmetry_fraction(positions: &[Vec3], masses: &[f64], level: usize) -> Result<f64> {
    let grid = PixelGrid::new(level)?;
    let total_mass: f64 = masses.iter().sum();

    // Mass histogram over direction; one radial bin spanning all radii.
    let mut pixel_mass = vec![0.0; grid.npix()];
    for (r, &m) in positions.iter().zip(masses) {
        pixel_mass[grid.pixel_of(r)] += m;
    }

    let mut imbalance = 0.0;
    for pixel in 0..grid.npix() / 2 {
        let opposite = grid.antipode(pixel);
        imbalance += (pixel_mass[pixel] - pixel_mass[opposite]).abs();
    }
    Ok(imbalance / total_mass)
}
