//! Orbit circularity and the disc mass fraction.

use crate::kinematics::potential::PotentialProfile;
use crate::Vec3;

/// Per-particle orbit circularities.
///
/// For each particle the total specific energy is looked up from the
/// potential profile and divided into the particle's spin-axis angular
/// momentum component: epsilon = j_z / j_circ(E). Values near 1 mark
/// disc-like orbits, values near 0 pressure-supported ones.
///
/// The sequence is lazy and restartable; nothing is aggregated here.
pub fn circularities<'a>(
    positions: &'a [Vec3],
    velocities: &'a [Vec3],
    spin_components: &'a [f64],
    profile: &'a PotentialProfile,
) -> impl Iterator<Item = f64> + 'a {
    positions
        .iter()
        .zip(velocities)
        .zip(spin_components)
        .map(move |((r, v), &j_z)| {
            let energy = profile.energy_of(v, r.norm());
            j_z / profile.circular_angular_momentum_of(energy)
        })
}

/// Disc mass fraction from spin-axis angular momentum components.
///
/// A symmetric spheroid contributes as much prograde as retrograde mass, so
/// twice the counter-rotating mass estimates the whole spheroid budget and
/// the remainder is disc. Clamped to [0, 1]; an excess of counter-rotating
/// mass reads as a pure spheroid.
pub fn disc_fraction(masses: &[f64], spin_components: &[f64]) -> f64 {
    let total: f64 = masses.iter().sum();
    let counter_rotating: f64 = masses
        .iter()
        .zip(spin_components)
        .filter(|(_, &j_z)| j_z < 0.0)
        .map(|(&m, _)| m)
        .sum();
    (1.0 - 2.0 * counter_rotating / total).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::constants::G_GALACTIC;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn keplerian_profile(central_mass: f64) -> PotentialProfile {
        let mut ds = vec![0.05, 0.1];
        let mut ms = vec![0.0, central_mass];
        for k in 1..200 {
            ds.push(0.5 + k as f64 * 0.25);
            ms.push(1.0);
        }
        PotentialProfile::build(&ds, &ms).unwrap()
    }

    #[test]
    fn test_circular_orbits_have_unit_circularity() {
        let central_mass = 1.0e10;
        let profile = keplerian_profile(central_mass);

        let radii = [5.0, 12.0, 25.0, 40.0];
        let positions: Vec<Vec3> = radii.iter().map(|&r| Vec3::new(r, 0.0, 0.0)).collect();
        let velocities: Vec<Vec3> = radii
            .iter()
            .map(|&r| Vec3::new(0.0, (G_GALACTIC * central_mass / r).sqrt(), 0.0))
            .collect();
        // Prograde circular orbits in the plane normal to +z.
        let jz: Vec<f64> = positions
            .iter()
            .zip(&velocities)
            .map(|(r, v)| r.cross(v).z)
            .collect();

        let eps: Vec<f64> = circularities(&positions, &velocities, &jz, &profile).collect();
        for e in &eps {
            assert_relative_eq!(*e, 1.0, max_relative = 1e-2);
        }

        // Retrograde twins land at -1.
        let jz_retro: Vec<f64> = jz.iter().map(|j| -j).collect();
        let eps_retro: Vec<f64> =
            circularities(&positions, &velocities, &jz_retro, &profile).collect();
        for e in &eps_retro {
            assert_relative_eq!(*e, -1.0, max_relative = 1e-2);
        }
    }

    #[test]
    fn test_circularities_iterator_is_restartable() {
        let profile = keplerian_profile(1.0e10);
        let positions = [Vec3::new(10.0, 0.0, 0.0)];
        let velocities = [Vec3::new(0.0, 50.0, 0.0)];
        let jz = [500.0];

        let first: Vec<f64> = circularities(&positions, &velocities, &jz, &profile).collect();
        let second: Vec<f64> = circularities(&positions, &velocities, &jz, &profile).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_disc_fraction_balance() {
        // No counter-rotating mass: pure disc.
        assert_abs_diff_eq!(disc_fraction(&[1.0, 2.0], &[0.5, 1.0]), 1.0);
        // A quarter of the mass counter-rotates: half the mass is spheroid.
        assert_abs_diff_eq!(disc_fraction(&[1.0, 1.0, 1.0, 1.0], &[1.0, 1.0, 1.0, -1.0]), 0.5);
        // Exactly half counter-rotates: no disc left.
        assert_abs_diff_eq!(disc_fraction(&[1.0, 1.0], &[1.0, -1.0]), 0.0);
    }

    #[test]
    fn test_disc_fraction_is_clamped() {
        // Counter-rotating mass above one half would go negative unclamped.
        let f = disc_fraction(&[1.0, 3.0], &[1.0, -1.0]);
        assert_abs_diff_eq!(f, 0.0);
        assert!(f >= 0.0 && f <= 1.0);
    }
}
