//! Source field initialization
//!
//! Utilities for common source fields.
//! Use `DomainView::par_set_values` for custom needs.

use crate::domain::*;
use crate::error::*;
use crate::util::*;
use rand::prelude::*;

/// All zero except the center cell, which is one.
pub fn point_source(n: usize) -> Result<OwnedDomain<3>> {
    let mut domain = OwnedDomain::new(AABB::try_cube(n)?)?;
    let c = (n / 2) as i32;
    domain.set_coord(&vector![c, c, c], 1.0);
    Ok(domain)
}

/// Uniform values in `[-1, 1)`, reproducible for a given seed.
pub fn rand_source(n: usize, seed: u64) -> Result<OwnedDomain<3>> {
    let mut domain = OwnedDomain::new(AABB::try_cube(n)?)?;
    let mut rng = StdRng::seed_from_u64(seed);
    for value in domain.buffer_mut() {
        *value = rng.gen_range(-1.0..1.0);
    }
    Ok(domain)
}
