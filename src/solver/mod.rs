mod config;
mod jacobi;

pub use config::*;
pub use jacobi::*;
