//! Home page - the single page of the site.
//!
//! Owns the scroll container and the one debounced scroll handler that
//! drives both the sticky header and the scroll-to-top control. Also owns
//! the shared project modal and the scroll lock that comes with it.

use dioxus::prelude::*;
use vitrine_core::{DebounceGate, Project, ScrollModel, DEBOUNCE_QUIET};

use crate::components::{
    ContactForm, Portfolio, ProjectModal, ScrollToTop, SiteFooter, SiteHeader, Testimonials,
};
use crate::context::use_content;
use crate::viewport;

/// One pass of the shared scroll handler: read the offset and apply both
/// the sticky-header and scroll-to-top decisions.
async fn apply_scroll(
    mut scroll_model: Signal<Option<ScrollModel>>,
    mut sticky: Signal<bool>,
    mut body_padding: Signal<f64>,
    mut to_top_visible: Signal<bool>,
) {
    let Some((offset, header_height)) = viewport::read_scroll_metrics().await else {
        return;
    };

    // The first measurement, taken before anything can stick, fixes the
    // header's natural height as the sticky threshold.
    let model = match scroll_model() {
        Some(model) => model,
        None => {
            let model = ScrollModel::new(header_height);
            scroll_model.set(Some(model));
            model
        }
    };

    sticky.set(model.header_sticky(offset));
    body_padding.set(model.body_padding(offset, header_height));
    to_top_visible.set(ScrollModel::to_top_visible(offset));
}

/// Home page component.
#[component]
pub fn Home() -> Element {
    let content = use_content();

    // Scroll-driven state
    let scroll_model: Signal<Option<ScrollModel>> = use_signal(|| None);
    let mut gate = use_signal(DebounceGate::new);
    let sticky = use_signal(|| false);
    let body_padding = use_signal(|| 0.0_f64);
    let to_top_visible = use_signal(|| false);

    // Modal state
    let mut open_project: Signal<Option<Project>> = use_signal(|| None);

    // Startup pass, unthrottled, for a page loaded already scrolled
    use_effect(move || {
        spawn(apply_scroll(scroll_model, sticky, body_padding, to_top_visible));
    });

    // Trailing-edge debounce: each scroll event arms a new generation and
    // only the one still current after the quiet period runs.
    let on_scroll = move |_| {
        let token = gate.write().arm();
        spawn(async move {
            tokio::time::sleep(DEBOUNCE_QUIET).await;
            if gate.read().is_current(token) {
                apply_scroll(scroll_model, sticky, body_padding, to_top_visible).await;
            }
        });
    };

    let view_project = move |id: String| match content.read().project_details(&id) {
        Ok(project) => open_project.set(Some(project.clone())),
        Err(err) => tracing::error!("{}", err),
    };

    let modal_open = open_project.read().is_some();

    rsx! {
        div {
            id: "{viewport::PAGE_ID}",
            class: if modal_open { "page modal-open" } else { "page" },
            onscroll: on_scroll,

            SiteHeader { sticky: sticky() }

            div { style: "padding-top: {body_padding()}px;",
                section { id: "home", class: "section hero",
                    h2 { class: "section-title", "Work that earns its keep" }
                    p { class: "hero-tagline",
                        "A small studio for identities, storefronts, and sites \
                         that people actually enjoy using."
                    }
                }

                Portfolio { on_view: view_project }
                Testimonials {}
                ContactForm {}
                SiteFooter {}
            }

            ScrollToTop { visible: to_top_visible() }

            if let Some(project) = open_project() {
                ProjectModal {
                    project,
                    on_close: move |_| open_project.set(None),
                }
            }
        }
    }
}
