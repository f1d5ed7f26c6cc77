//! Testimonials Component
//!
//! Carousel over the testimonial sequence. The clamping and control rules
//! live in [`CarouselState`]; this component only renders them. An empty
//! sequence hides the whole section.

use dioxus::prelude::*;
use vitrine_core::CarouselState;

use crate::context::use_content;

/// Testimonial carousel section
#[component]
pub fn Testimonials() -> Element {
    let content = use_content();
    let len = content.read().testimonials.len();
    let mut carousel = use_signal(|| CarouselState::new(len));

    // No testimonials: no section, no controls, no index state
    if len == 0 {
        return rsx! {};
    }

    let testimonials = content.read().testimonials.clone();
    let state = carousel();

    rsx! {
        section { id: "testimonials", class: "section",
            h2 { class: "section-title", "Kind Words" }

            div { class: "testimonial-slider",
                for (i, testimonial) in testimonials.iter().enumerate() {
                    div {
                        class: if state.is_active(i) { "testimonial-item active" } else { "testimonial-item" },
                        p { class: "testimonial-quote", "\u{201c}{testimonial.quote}\u{201d}" }
                        p { class: "testimonial-author",
                            "{testimonial.author}, {testimonial.role}"
                        }
                    }
                }

                if !state.nav_hidden() {
                    div { class: "testimonial-controls",
                        button {
                            class: "testimonial-nav prev",
                            disabled: state.prev_disabled(),
                            onclick: move |_| carousel.write().prev(),
                            "aria-label": "Previous testimonial",
                            "‹"
                        }
                        button {
                            class: "testimonial-nav next",
                            disabled: state.next_disabled(),
                            onclick: move |_| carousel.write().next(),
                            "aria-label": "Next testimonial",
                            "›"
                        }
                    }
                }
            }
        }
    }
}
