//! Random located networks for exercising the solvers.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::location::Location;

/// Generate `capacity` nodes numbered from zero, scattered uniformly in the
/// square of half-width `radius` around `location`.
///
/// The same `seed` always produces the same nodes.
pub fn generate_nodes_near(
    location: &Location,
    radius: f64,
    capacity: u32,
    seed: u64,
) -> Vec<(u32, Location)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..capacity)
        .map(|id| {
            let x = location.x + rng.gen_range(-radius..=radius);
            let y = location.y + rng.gen_range(-radius..=radius);
            (id, Location::new(x, y))
        })
        .collect()
}
