//! Portfolio Component
//!
//! Filter row plus project grid. Each card carries a "view details"
//! control keyed by the project id; activation is reported upward so the
//! page can open the shared modal. The "all" tag is activated once at
//! startup to establish the default view; tag clicks only move the active
//! marker.

use dioxus::prelude::*;

use crate::context::use_content;

#[derive(Props, Clone, PartialEq)]
pub struct PortfolioProps {
    /// Called with the project id when a "view details" control fires
    pub on_view: EventHandler<String>,
}

/// Portfolio section: filter tags and the project grid
#[component]
pub fn Portfolio(props: PortfolioProps) -> Element {
    let content = use_content();
    let mut active_filter = use_signal(String::new);

    // Default view: the "all" tag fires once at startup
    use_effect(move || {
        active_filter.set("all".to_string());
    });

    let tags = content.read().filter_tags();
    let projects = content.read().projects.clone();

    rsx! {
        section { id: "portfolio", class: "section",
            h2 { class: "section-title", "Selected Work" }

            div { class: "portfolio-filters",
                for tag in tags {
                    button {
                        class: if active_filter() == tag { "filter-btn active" } else { "filter-btn" },
                        onclick: {
                            let tag = tag.clone();
                            move |_| active_filter.set(tag.clone())
                        },
                        "{tag}"
                    }
                }
            }

            div { class: "portfolio-grid",
                for project in projects {
                    div { class: "portfolio-item",
                        h3 { "{project.title}" }
                        p { class: "portfolio-summary", "{project.summary}" }

                        button {
                            class: "view-details-btn",
                            "data-project-id": "{project.id}",
                            onclick: {
                                let id = project.id.clone();
                                move |_| props.on_view.call(id.clone())
                            },
                            "View details"
                        }
                    }
                }
            }
        }
    }
}
