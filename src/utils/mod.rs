//! Utility modules for the product list renderer

pub mod performance;

pub use performance::*;
