//! Color constants for the portfolio palette.

#![allow(dead_code)]

// === SURFACES ===
pub const PAPER: &str = "#faf8f4";
pub const PAPER_DIM: &str = "#f1ede6";
pub const INK: &str = "#22252a";
pub const INK_SOFT: &str = "#4a4f57";

// === ACCENT ===
pub const ACCENT: &str = "#b5543b";
pub const ACCENT_GLOW: &str = "rgba(181, 84, 59, 0.25)";

// === SEMANTIC ===
pub const DANGER: &str = "#c0392b";
pub const ADVISORY: &str = "#e67e22";
pub const MUTED: &str = "rgba(34, 37, 42, 0.5)";
