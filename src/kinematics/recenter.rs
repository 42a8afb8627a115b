use crate::halo::{HaloFrame, ParticleTable, SimulationBox};
use crate::Vec3;

/// Shift a particle table into the halo rest frame.
///
/// Positions are re-expressed relative to the halo centre of potential and
/// unwrapped across the periodic box boundary, so a halo sitting on an edge
/// is not split in two. Velocities are re-expressed relative to the halo
/// centre-of-mass velocity. No aperture restriction is applied.
pub fn recenter(table: &ParticleTable, frame: &HaloFrame, sim_box: &SimulationBox) -> ParticleTable {
    table
        .iter()
        .map(|p| {
            let mut shifted = *p;
            let d = p.position - frame.centre;
            shifted.position = Vec3::new(sim_box.wrap(d.x), sim_box.wrap(d.y), sim_box.wrap(d.z));
            shifted.velocity = p.velocity - frame.velocity;
            shifted
        })
        .collect()
}
