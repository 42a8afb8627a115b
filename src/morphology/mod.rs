//! Morphology of the recentred mass distribution.
//!
//! Shape fitting through a mass moment-of-inertia ellipsoid and a
//! directional mass-asymmetry measure over an equal-area sphere
//! tessellation.

pub mod asymmetry;
pub mod shape;
pub mod sphere;

// Re-export commonly used items
pub use asymmetry::asymmetry_fraction;
pub use shape::{axial_ratios, AxialRatios};
pub use sphere::PixelGrid;
