//! Content context for Vitrine.
//!
//! Provides the fixed [`SiteContent`] to all components via use_context.

use dioxus::prelude::*;
use vitrine_core::SiteContent;

/// Hook to access the site content from context.
///
/// # Example
///
/// ```ignore
/// let content = use_content();
/// for project in &content.read().projects { /* ... */ }
/// ```
pub fn use_content() -> Signal<SiteContent> {
    use_context::<Signal<SiteContent>>()
}
