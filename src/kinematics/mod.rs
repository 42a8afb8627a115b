//! Kinematic decomposition of a halo's particle content.
//!
//! This module contains the halo-frame recentring step, the angular-momentum
//! based spin decomposition, the cumulative-mass gravitational potential
//! profile, and the orbit circularity estimators built on top of it.

pub mod circularity;
pub mod constants;
pub mod potential;
pub mod recenter;
pub mod spin;

// Re-export commonly used items
pub use circularity::{circularities, disc_fraction};
pub use constants::*;
pub use potential::PotentialProfile;
pub use recenter::recenter;
pub use spin::{face_on_rotation, spin_components, spin_decomposition, SpinDecomposition};
