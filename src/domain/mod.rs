//! This module has things for managing the domain,
//! which really means retrieving values based on world coordinates.
//! A solve works on a pair of domains that trade the current
//! and next roles after every sweep.

mod buffer_pair;
mod region_writer;
mod view;

pub use buffer_pair::*;
pub use region_writer::*;
pub use view::*;
