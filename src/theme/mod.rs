//! Theme for Vitrine.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
