//! Angular-momentum based disc/spheroid decomposition.
//!
//! `kappa_co` measures the fraction of a galaxy's kinetic energy invested in
//! ordered co-rotation about its spin axis. The decomposition restricts the
//! recentred particle table to a fixed spherical aperture, subtracts the
//! aperture's own mass-weighted mean velocity, and builds everything from
//! per-particle specific angular momenta.

use crate::halo::{Particle, ParticleTable};
use crate::{Mat3, Vec3};
use anyhow::Result;
use nalgebra::Rotation3;
use rayon::prelude::*;
use serde::Serialize;

// Above this many aperture particles the energy sums take the parallel path.
const PARALLEL_CUTOFF: usize = 10_000;

/// Result of the spin decomposition of one halo.
#[derive(Debug, Clone, Serialize)]
pub struct SpinDecomposition {
    /// Fraction of kinetic energy in ordered co-rotation
    pub kappa_co: f64,
    /// Specific angular momentum magnitude (kpc km/s)
    pub specific_angular_momentum: f64,
    /// Unit spin axis
    pub spin_axis: Vec3,
    /// Aperture-restricted table with the local mean velocity subtracted
    pub table: ParticleTable,
}

/// Decompose a recentred particle table into ordered and disordered motion.
///
/// The table must already be in the halo rest frame. Only particles strictly
/// inside `aperture_radius` contribute. Fails when the aperture holds no
/// particle mass; callers are expected to screen out empty haloes first.
///
/// Particles sitting exactly on the spin axis have an undefined rotational
/// velocity. The resulting non-finite values are dropped by the co-rotation
/// filter while their kinetic energy still counts.
pub fn spin_decomposition(
    table: &ParticleTable,
    aperture_radius: f64,
) -> Result<SpinDecomposition> {
    let distances = table.distances();
    let mut parts: Vec<Particle> = Vec::new();
    let mut dists: Vec<f64> = Vec::new();
    for (p, d) in table.iter().zip(&distances) {
        if *d < aperture_radius {
            parts.push(*p);
            dists.push(*d);
        }
    }
    log::debug!(
        "spin decomposition: {} of {} particles within {} kpc",
        parts.len(),
        table.len(),
        aperture_radius
    );

    let total_mass: f64 = parts.iter().map(|p| p.mass).sum();
    if !(total_mass > 0.0) {
        return Err(anyhow::anyhow!(
            "Spin aperture of {} kpc contains no particle mass",
            aperture_radius
        ));
    }

    // Offset between the aperture mass-weighted mean velocity and the halo
    // rest frame, removed before any momentum is formed.
    let mean_velocity: Vec3 =
        parts.iter().map(|p| p.velocity * p.mass).sum::<Vec3>() / total_mass;
    for p in &mut parts {
        p.velocity -= mean_velocity;
    }

    let momenta: Vec<Vec3> = parts
        .iter()
        .map(|p| p.position.cross(&p.velocity))
        .collect();
    let total_momentum: Vec3 = parts
        .iter()
        .zip(&momenta)
        .map(|(p, j)| j * p.mass)
        .sum();
    let specific_angular_momentum = (total_momentum / total_mass).norm();
    let spin_axis = total_momentum / total_momentum.norm();

    let (co_rotation, kinetic) = if parts.len() > PARALLEL_CUTOFF {
        parts
            .par_iter()
            .zip(momenta.par_iter())
            .zip(dists.par_iter())
            .map(|((p, j), d)| energy_terms(p, j, *d, &spin_axis))
            .reduce(|| (0.0, 0.0), |a, b| (a.0 + b.0, a.1 + b.1))
    } else {
        parts
            .iter()
            .zip(&momenta)
            .zip(&dists)
            .map(|((p, j), d)| energy_terms(p, j, *d, &spin_axis))
            .fold((0.0, 0.0), |a, b| (a.0 + b.0, a.1 + b.1))
    };
    let kappa_co = co_rotation / kinetic;

    Ok(SpinDecomposition {
        kappa_co,
        specific_angular_momentum,
        spin_axis,
        table: ParticleTable::new(parts),
    })
}

/// Co-rotational and total kinetic energy contributions of one particle.
fn energy_terms(p: &Particle, momentum: &Vec3, distance: f64, axis: &Vec3) -> (f64, f64) {
    let j_z = momentum.dot(axis);
    let axial = p.position.dot(axis);
    let r_cyl = (distance * distance - axial * axial).sqrt();
    let v_rot = j_z / r_cyl;
    // NaN from a zero cylindrical radius fails the co-rotation test and
    // drops out here.
    let co = if v_rot > 0.0 {
        p.mass * v_rot * v_rot
    } else {
        0.0
    };
    (co, p.mass * p.velocity.norm_squared())
}

/// Per-particle specific angular momentum projected on a spin axis.
pub fn spin_components(table: &ParticleTable, axis: &Vec3) -> Vec<f64> {
    table
        .iter()
        .map(|p| p.position.cross(&p.velocity).dot(axis))
        .collect()
}

/// Proper rotation taking the spin axis to +z, for face-on projections.
pub fn face_on_rotation(axis: &Vec3) -> Mat3 {
    match Rotation3::rotation_between(axis, &Vec3::z()) {
        Some(rot) => rot.into_inner(),
        // Anti-parallel input: half turn about x.
        None => Rotation3::from_axis_angle(&Vec3::x_axis(), std::f64::consts::PI).into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn particle(position: Vec3, mass: f64, velocity: Vec3) -> Particle {
        Particle::new(position, mass, velocity, 0.2)
    }

    #[test]
    fn test_two_particle_decomposition_by_hand() {
        // Equal masses with opposite velocities: the aperture mean velocity
        // is zero and every number below follows directly.
        let table = ParticleTable::new(vec![
            particle(Vec3::new(1.0, 0.0, 0.0), 1.0, Vec3::new(0.0, 2.0, 0.0)),
            particle(Vec3::new(3.0, 0.0, 0.0), 1.0, Vec3::new(0.0, -2.0, 0.0)),
        ]);
        let spin = spin_decomposition(&table, 30.0).unwrap();

        // j1 = +2 z, j2 = -6 z, so the net spin axis points to -z and the
        // first particle counter-rotates.
        assert_abs_diff_eq!(spin.spin_axis.z, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(spin.specific_angular_momentum, 2.0, epsilon = 1e-12);
        // numerator: m2 * (6/3)^2 = 4; denominator: 4 + 4
        assert_abs_diff_eq!(spin.kappa_co, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_point_symmetric_set_has_no_net_momentum() {
        let mut particles = Vec::new();
        for k in 0..64 {
            let t = k as f64;
            let r = Vec3::new((0.3 * t).sin() * 5.0, (0.7 * t).cos() * 5.0, (0.1 * t).sin());
            let v = Vec3::new((0.2 * t).cos() * 50.0, (0.5 * t).sin() * 50.0, 10.0);
            particles.push(particle(r, 2.0, v));
            particles.push(particle(-r, 2.0, v));
        }
        let spin = spin_decomposition(&ParticleTable::new(particles), 30.0).unwrap();
        assert_abs_diff_eq!(spin.specific_angular_momentum, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_or_massless_aperture_is_an_error() {
        let far = ParticleTable::new(vec![particle(
            Vec3::new(100.0, 0.0, 0.0),
            1.0,
            Vec3::zeros(),
        )]);
        assert!(spin_decomposition(&far, 30.0).is_err());

        let massless = ParticleTable::new(vec![particle(
            Vec3::new(1.0, 0.0, 0.0),
            0.0,
            Vec3::new(0.0, 1.0, 0.0),
        )]);
        assert!(spin_decomposition(&massless, 30.0).is_err());
    }

    #[test]
    fn test_on_axis_particle_does_not_poison_kappa() {
        // A small co-rotating ring plus one particle exactly on the spin
        // axis, whose rotational velocity is 0/0.
        let mut particles = vec![
            particle(Vec3::new(2.0, 0.0, 0.0), 1.0, Vec3::new(0.0, 100.0, 0.0)),
            particle(Vec3::new(-2.0, 0.0, 0.0), 1.0, Vec3::new(0.0, -100.0, 0.0)),
            particle(Vec3::new(0.0, 2.0, 0.0), 1.0, Vec3::new(-100.0, 0.0, 0.0)),
            particle(Vec3::new(0.0, -2.0, 0.0), 1.0, Vec3::new(100.0, 0.0, 0.0)),
        ];
        particles.push(particle(Vec3::new(0.0, 0.0, 5.0), 1.0, Vec3::new(0.0, 0.0, 30.0)));
        let spin = spin_decomposition(&ParticleTable::new(particles), 30.0).unwrap();

        assert!(spin.kappa_co.is_finite());
        // The axis particle's kinetic energy stays in the denominator.
        assert!(spin.kappa_co < 1.0);
        assert!(spin.kappa_co > 0.9);
    }

    #[test]
    fn test_spin_components_signs() {
        let table = ParticleTable::new(vec![
            particle(Vec3::new(1.0, 0.0, 0.0), 1.0, Vec3::new(0.0, 3.0, 0.0)),
            particle(Vec3::new(1.0, 0.0, 0.0), 1.0, Vec3::new(0.0, -3.0, 0.0)),
        ]);
        let jz = spin_components(&table, &Vec3::z());
        assert_abs_diff_eq!(jz[0], 3.0);
        assert_abs_diff_eq!(jz[1], -3.0);
    }

    #[test]
    fn test_face_on_rotation_aligns_axis_with_z() {
        let axis = Vec3::new(1.0, -2.0, 0.5).normalize();
        let rot = face_on_rotation(&axis);
        let mapped = rot * axis;
        assert_abs_diff_eq!(mapped.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mapped.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mapped.z, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rot.determinant(), 1.0, epsilon = 1e-12);

        let flipped = face_on_rotation(&Vec3::new(0.0, 0.0, -1.0));
        let mapped = flipped * Vec3::new(0.0, 0.0, -1.0);
        assert_abs_diff_eq!(mapped.z, 1.0, epsilon = 1e-12);
    }
}
