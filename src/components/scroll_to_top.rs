//! Scroll-to-top Component
//!
//! Floating control that fades in once the page has scrolled past the
//! 300px threshold and animates the viewport back to the origin.

use dioxus::prelude::*;

use crate::viewport;

/// Scroll-to-top button; visibility is decided by the page's scroll handler
#[component]
pub fn ScrollToTop(visible: bool) -> Element {
    rsx! {
        button {
            class: if visible { "scroll-to-top show" } else { "scroll-to-top" },
            onclick: move |_| {
                spawn(async move {
                    viewport::scroll_to_origin().await;
                });
            },
            "aria-label": "Back to top",

            // Lucide arrow-up icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "m5 12 7-7 7 7" }
                path { d: "M12 19V5" }
            }
        }
    }
}
