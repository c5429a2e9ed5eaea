//! Value types shared by the imed widget and dialog crates.

pub mod types;

pub use types::*;
