//! Vitrine Core Library
//!
//! Interaction logic for a single-page portfolio site: testimonial carousel
//! state, contact-form validation, sticky-header/scroll decisions with a
//! trailing-edge debounce gate, and the static site content with its
//! project-detail lookups.
//!
//! ## Overview
//!
//! Every feature of the page is a leaf: none depends on another's state.
//! This crate holds the value types and transition rules; the UI crate owns
//! signals, events, and rendering. Nothing here touches a viewport.
//!
//! ## Quick Start
//!
//! ```
//! use vitrine_core::{CarouselState, SiteContent};
//!
//! let content = SiteContent::default();
//! let mut carousel = CarouselState::new(content.testimonials.len());
//! carousel.next();
//! assert!(carousel.is_active(1));
//!
//! let project = content.project_details("alpha").unwrap();
//! assert_eq!(project.id, "alpha");
//! ```

pub mod carousel;
pub mod content;
pub mod error;
pub mod form;
pub mod scroll;

// Re-exports
pub use carousel::CarouselState;
pub use content::{current_year, Project, ProjectDetails, SiteContent, Testimonial};
pub use error::{SiteError, SiteResult};
pub use form::{ContactForm, FormStatus, StatusTone};
pub use scroll::{DebounceGate, ScrollModel, DEBOUNCE_QUIET, TO_TOP_THRESHOLD};
