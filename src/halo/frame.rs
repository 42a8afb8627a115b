use crate::Vec3;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A halo's reference frame as read from the halo catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HaloFrame {
    /// Centre of potential (kpc)
    pub centre: Vec3,
    /// Centre-of-mass velocity (km/s)
    pub velocity: Vec3,
    /// Characteristic radius, e.g. R200c (kpc)
    pub radius: f64,
}

impl HaloFrame {
    pub fn new(centre: Vec3, velocity: Vec3, radius: f64) -> Self {
        Self {
            centre,
            velocity,
            radius,
        }
    }
}

/// Periodic simulation box metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationBox {
    side: f64,
}

impl SimulationBox {
    /// Create a box with the given side length (kpc). Fails for a
    /// non-positive side.
    pub fn new(side: f64) -> Result<Self> {
        if !(side > 0.0) {
            return Err(anyhow::anyhow!(
                "Box side length must be positive, got {}",
                side
            ));
        }
        Ok(Self { side })
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    /// Wrap a centred coordinate into `[-side/2, side/2)`.
    pub fn wrap(&self, x: f64) -> f64 {
        (x + 0.5 * self.side).rem_euclid(self.side) - 0.5 * self.side
    }
}
