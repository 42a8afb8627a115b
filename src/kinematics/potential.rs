//! Cumulative-mass gravitational potential profile.
//!
//! The profile treats the halo as a spherically ordered stack of particle
//! shells. Each entry carries the enclosed mass, the potential from interior
//! and exterior material, and the energy and angular momentum of a circular
//! orbit at that radius. Built once per halo aperture, queried many times,
//! then discarded.

use crate::kinematics::constants::G_GALACTIC;
use crate::math::{interp, interp_extrapolate};
use crate::Vec3;
use anyhow::Result;

/// Monotonic potential lookup table for one halo aperture.
///
/// Entries are ordered by ascending distance from the halo centre, with the
/// innermost particle dropped: keeping it would put a self-potential
/// singularity at the first sample.
#[derive(Debug, Clone)]
pub struct PotentialProfile {
    d_t: Vec<f64>,
    m_t: Vec<f64>,
    jc_t: Vec<f64>,
    pot_t: Vec<f64>,
    e_t: Vec<f64>,
    vc_t: Vec<f64>,
}

impl PotentialProfile {
    /// Build the profile from particle distances (kpc) and masses (Msun).
    ///
    /// Needs at least two particles so that one remains after the innermost
    /// is dropped. Ties in distance keep their input order.
    pub fn build(distances: &[f64], masses: &[f64]) -> Result<Self> {
        if distances.len() != masses.len() {
            return Err(anyhow::anyhow!(
                "Distance and mass arrays differ in length: {} vs {}",
                distances.len(),
                masses.len()
            ));
        }
        if distances.len() < 2 {
            return Err(anyhow::anyhow!(
                "Potential profile requires at least 2 particles, got {}",
                distances.len()
            ));
        }

        let mut order: Vec<usize> = (0..distances.len()).collect();
        order.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));

        let n = order.len() - 1;
        let mut d_t = Vec::with_capacity(n);
        let mut m_i = Vec::with_capacity(n);
        for &idx in &order[1..] {
            d_t.push(distances[idx]);
            m_i.push(masses[idx]);
        }

        // Enclosed mass and circular angular momentum per shell.
        let mut m_t = Vec::with_capacity(n);
        let mut enclosed = 0.0;
        for &m in &m_i {
            enclosed += m;
            m_t.push(enclosed);
        }
        let jc_t: Vec<f64> = m_t
            .iter()
            .zip(&d_t)
            .map(|(&m, &d)| (G_GALACTIC * m * d).sqrt())
            .collect();

        // Exterior contribution is a reverse cumulative sum of m/d.
        let mut exterior = vec![0.0; n];
        let mut acc = 0.0;
        for i in (0..n).rev() {
            acc += m_i[i] / d_t[i];
            exterior[i] = acc;
        }

        let mut pot_t = Vec::with_capacity(n);
        let mut e_t = Vec::with_capacity(n);
        let mut vc_t = Vec::with_capacity(n);
        for i in 0..n {
            let pot = -G_GALACTIC * m_t[i] / d_t[i] - G_GALACTIC * exterior[i];
            pot_t.push(pot);
            e_t.push(G_GALACTIC * m_t[i] / (2.0 * d_t[i]) + pot);
            vc_t.push((G_GALACTIC * m_t[i] / d_t[i]).sqrt());
        }

        log::trace!(
            "potential profile: {} shells, d = [{:.3}, {:.3}] kpc, enclosed mass {:.3e} Msun",
            n,
            d_t[0],
            d_t[n - 1],
            m_t[n - 1]
        );

        Ok(Self {
            d_t,
            m_t,
            jc_t,
            pot_t,
            e_t,
            vc_t,
        })
    }

    /// Number of shells in the profile.
    pub fn len(&self) -> usize {
        self.d_t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.d_t.is_empty()
    }

    /// Shell distances from the halo centre (kpc), ascending.
    pub fn shell_distances(&self) -> &[f64] {
        &self.d_t
    }

    /// Enclosed mass at each shell (Msun), non-decreasing.
    pub fn enclosed_masses(&self) -> &[f64] {
        &self.m_t
    }

    /// Potential at each shell ((km/s)^2).
    pub fn potentials(&self) -> &[f64] {
        &self.pot_t
    }

    /// Total specific energy of a circular orbit at each shell ((km/s)^2).
    pub fn circular_energies(&self) -> &[f64] {
        &self.e_t
    }

    /// Circular specific angular momentum at each shell (kpc km/s).
    pub fn circular_momenta(&self) -> &[f64] {
        &self.jc_t
    }

    /// Total specific energy of a particle: kinetic term plus the potential
    /// interpolated at `radius`. Radii outside the profile clamp to the
    /// nearest shell.
    pub fn energy_of(&self, velocity: &Vec3, radius: f64) -> f64 {
        0.5 * velocity.norm_squared() + interp(radius, &self.d_t, &self.pot_t)
    }

    /// Specific angular momentum of a circular orbit with the given total
    /// energy. The energy table is not validated for monotonicity; where it
    /// is not monotonic the bracketing shells are implementation-defined.
    pub fn circular_angular_momentum_of(&self, energy: f64) -> f64 {
        interp(energy, &self.e_t, &self.jc_t)
    }

    /// Circular velocity at `radius` (km/s), linearly extrapolated beyond
    /// the profiled range. A convenience lookup only.
    pub fn circular_velocity(&self, radius: f64) -> f64 {
        interp_extrapolate(radius, &self.d_t, &self.vc_t)
    }
}
