use crate::Vec3;
use serde::{Deserialize, Serialize};

/// One simulation particle in galactic units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Position (kpc)
    pub position: Vec3,
    /// Mass (Msun)
    pub mass: f64,
    /// Velocity (km/s)
    pub velocity: Vec3,
    /// Smoothing length (kpc)
    pub hsml: f64,
}

impl Particle {
    pub fn new(position: Vec3, mass: f64, velocity: Vec3, hsml: f64) -> Self {
        Self {
            position,
            mass,
            velocity,
            hsml,
        }
    }

    /// Build from the conventional flat catalog row
    /// `[x, y, z, mass, vx, vy, vz, hsml]`.
    pub fn from_row(row: [f64; 8]) -> Self {
        Self {
            position: Vec3::new(row[0], row[1], row[2]),
            mass: row[3],
            velocity: Vec3::new(row[4], row[5], row[6]),
            hsml: row[7],
        }
    }

    /// Distance from the coordinate origin (kpc)
    pub fn radius(&self) -> f64 {
        self.position.norm()
    }

    /// Speed (km/s)
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

/// Ordered table of one halo's particles.
///
/// Rows are independent; a particle has no identity beyond its position in
/// the table. Masses are expected to be non-negative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleTable {
    particles: Vec<Particle>,
}

impl ParticleTable {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Build from flat catalog rows `[x, y, z, mass, vx, vy, vz, hsml]`.
    pub fn from_rows(rows: &[[f64; 8]]) -> Self {
        Self {
            particles: rows.iter().copied().map(Particle::from_row).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Total mass of the table (Msun)
    pub fn total_mass(&self) -> f64 {
        self.particles.iter().map(|p| p.mass).sum()
    }

    /// Distance of every particle from the coordinate origin (kpc)
    pub fn distances(&self) -> Vec<f64> {
        self.particles.iter().map(Particle::radius).collect()
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.particles.iter().map(|p| p.position).collect()
    }

    pub fn velocities(&self) -> Vec<Vec3> {
        self.particles.iter().map(|p| p.velocity).collect()
    }

    pub fn masses(&self) -> Vec<f64> {
        self.particles.iter().map(|p| p.mass).collect()
    }

    /// Mask selecting particles strictly inside a spherical aperture
    /// centred on the origin.
    pub fn aperture_mask(&self, radius: f64) -> Vec<bool> {
        self.particles.iter().map(|p| p.radius() < radius).collect()
    }

    /// New table containing the particles where `mask` is true.
    pub fn select(&self, mask: &[bool]) -> ParticleTable {
        debug_assert_eq!(mask.len(), self.particles.len());
        ParticleTable {
            particles: self
                .particles
                .iter()
                .zip(mask)
                .filter(|(_, &keep)| keep)
                .map(|(p, _)| *p)
                .collect(),
        }
    }

    /// New table restricted to the spherical aperture.
    pub fn within(&self, radius: f64) -> ParticleTable {
        self.select(&self.aperture_mask(radius))
    }
}

impl FromIterator<Particle> for ParticleTable {
    fn from_iter<I: IntoIterator<Item = Particle>>(iter: I) -> Self {
        Self {
            particles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParticleTable {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
