pub mod boundary;
pub mod build_info;
pub mod cli;
pub mod domain;
pub mod error;
pub mod init;
pub mod output;
pub mod par_stencil;
pub mod solver;
pub mod stencil;
pub mod util;

pub use error::{PoissonError, Result};
