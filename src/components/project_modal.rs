//! Project Modal Component
//!
//! The single shared modal showing one project's detail block. Closed by
//! its close control or a click on the outer overlay; clicks inside the
//! content are stopped before they reach the overlay. The page locks its
//! scroll while this is mounted.

use dioxus::prelude::*;
use vitrine_core::Project;

/// Render a project's markdown body to HTML for the modal body.
fn render_markdown(markdown: &str) -> String {
    let parser = pulldown_cmark::Parser::new(markdown);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Shared project detail modal
#[component]
pub fn ProjectModal(
    /// The project whose details fill the modal body
    project: Project,
    /// Callback when the modal is dismissed
    on_close: EventHandler<()>,
) -> Element {
    let body_html = render_markdown(&project.details.body_markdown);

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "project-modal",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "close-modal-btn",
                    onclick: move |_| on_close.call(()),
                    "aria-label": "Close",
                    "×"
                }

                h2 { class: "modal-title", "{project.details.headline}" }

                div { class: "modal-body", dangerous_inner_html: "{body_html}" }

                div { class: "modal-stack",
                    for tag in &project.details.stack {
                        span { class: "stack-tag", "{tag}" }
                    }
                }

                if let Some(link) = &project.details.link {
                    a {
                        class: "modal-link",
                        href: "{link}",
                        target: "_blank",
                        "Visit project"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_body_renders_to_html() {
        let html = render_markdown("Plain text with *emphasis*.");
        assert!(html.contains("<p>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_empty_markdown_renders_empty() {
        assert_eq!(render_markdown(""), "");
    }
}
