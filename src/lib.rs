//! Kinematic and morphological diagnostics for simulated galaxies.
//!
//! This crate turns one halo's worth of simulation particles (position, mass,
//! velocity, smoothing length) into the scalar and vector morphology
//! descriptors used for catalog building: the co-rotational kinetic energy
//! fraction `kappa_co`, per-particle orbital circularities and the disc mass
//! fraction, moment-of-inertia axial ratios, and a hemispherical mass
//! asymmetry fraction.
//!
//! The usual pipeline for a single halo:
//!
//! 1. [`kinematics::recenter`] shifts the particle table into the halo rest
//!    frame, unwrapping the periodic box.
//! 2. [`kinematics::spin_decomposition`] restricts to the stellar aperture
//!    and yields the spin axis, specific angular momentum and `kappa_co`.
//! 3. [`kinematics::PotentialProfile`] is built once from the aperture's
//!    distances and masses and queried for orbital energies and circular
//!    angular momenta.
//! 4. [`kinematics::circularities`] and [`kinematics::disc_fraction`]
//!    classify disc- versus spheroid-supported material.
//! 5. [`morphology::axial_ratios`] and [`morphology::asymmetry_fraction`]
//!    measure the shape and lopsidedness of the recentred mass distribution.
//!
//! All quantities are in galactic units: kpc, km/s and solar masses. Each
//! halo's decomposition is independent; nothing here holds global state.

pub mod halo;
pub mod kinematics;
pub mod math;
pub mod morphology;

// Re-export commonly used items
pub use halo::{HaloFrame, Particle, ParticleTable, SimulationBox};
pub use kinematics::{
    circularities, disc_fraction, face_on_rotation, recenter, spin_components,
    spin_decomposition, PotentialProfile, SpinDecomposition, G_GALACTIC, STELLAR_APERTURE_KPC,
};
pub use morphology::{asymmetry_fraction, axial_ratios, AxialRatios, PixelGrid};

/// Common 3D vector type for particle quantities
pub type Vec3 = nalgebra::Vector3<f64>;

/// Common matrix type for rotations and shape tensors
pub type Mat3 = nalgebra::Matrix3<f64>;
