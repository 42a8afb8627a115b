//! Unit conventions and fixed apertures.
//!
//! All particle quantities are carried in galactic units: kpc for lengths,
//! km/s for velocities and solar masses for masses. The gravitational
//! constant below is expressed in that system.

// ---------------------------------------------------------------------------
// Physical Constants (galactic units)
// ---------------------------------------------------------------------------
pub const G_GALACTIC: f64 = 4.300_917_270e-6; // kpc (km/s)^2 / Msun

// ---------------------------------------------------------------------------
// Apertures
// ---------------------------------------------------------------------------
pub const STELLAR_APERTURE_KPC: f64 = 30.0; // conventional spin-decomposition aperture
