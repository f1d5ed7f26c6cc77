//! Page components for Vitrine.

mod home;

pub use home::Home;
