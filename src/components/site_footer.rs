//! Site Footer Component

use dioxus::prelude::*;
use vitrine_core::current_year;

/// Footer with the current calendar year stamped from the local clock
#[component]
pub fn SiteFooter() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            p {
                "© "
                span { class: "footer-year", "{year}" }
                " Vitrine Studio. All rights reserved."
            }
        }
    }
}
