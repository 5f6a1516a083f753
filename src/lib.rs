pub mod error;
pub mod render;
pub mod trace;

pub use error::{Error, Result};

#[cfg(test)]
mod test;
