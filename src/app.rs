use dioxus::prelude::*;
use vitrine_core::SiteContent;

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// The site is a single page; its sections are reached through in-page
/// anchors, not routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles and the site content context.
#[component]
pub fn App() -> Element {
    // Fixed content set for the page's lifetime
    let content: Signal<SiteContent> = use_signal(SiteContent::default);
    use_context_provider(|| content);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
