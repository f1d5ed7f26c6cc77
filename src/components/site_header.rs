//! Site Header Component
//!
//! Desktop: horizontal header with the studio title and section links.
//! Mobile (< 768px): links collapse behind a hamburger toggle that swaps
//! between bars and an X while open. Clicking any link closes the menu
//! and smooth-scrolls to its section.

use dioxus::prelude::*;

use crate::viewport;

/// Page section reachable from the navigation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavSection {
    Home,
    Portfolio,
    Testimonials,
    Contact,
}

impl NavSection {
    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::Portfolio => "Work",
            NavSection::Testimonials => "Testimonials",
            NavSection::Contact => "Contact",
        }
    }

    /// Get the in-page anchor id for this section
    pub fn anchor(&self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::Portfolio => "portfolio",
            NavSection::Testimonials => "testimonials",
            NavSection::Contact => "contact",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SiteHeaderProps {
    /// Whether the header is currently stuck to the viewport top
    pub sticky: bool,
}

/// Site header with navigation toggle and smooth-scroll links
#[component]
pub fn SiteHeader(props: SiteHeaderProps) -> Element {
    let mut menu_open = use_signal(|| false);

    let sections = [
        NavSection::Home,
        NavSection::Portfolio,
        NavSection::Testimonials,
        NavSection::Contact,
    ];

    rsx! {
        header {
            id: "{viewport::HEADER_ID}",
            class: if props.sticky { "site-header sticky" } else { "site-header" },

            div { class: "header-inner",
                h1 { class: "site-title", "Vitrine Studio" }

                nav {
                    class: if menu_open() { "site-nav active" } else { "site-nav" },
                    for section in sections {
                        button {
                            class: "nav-link",
                            onclick: move |_| {
                                // A link activation always closes the mobile menu
                                menu_open.set(false);
                                spawn(async move {
                                    viewport::scroll_to_section(section.anchor()).await;
                                });
                            },
                            "{section.display_name()}"
                        }
                    }
                }

                button {
                    class: "menu-toggle",
                    onclick: move |_| menu_open.set(!menu_open()),
                    "aria-label": "Toggle navigation",
                    "aria-expanded": "{menu_open()}",

                    if menu_open() {
                        // Lucide x icon
                        svg {
                            xmlns: "http://www.w3.org/2000/svg",
                            width: "24",
                            height: "24",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            path { d: "M18 6 6 18" }
                            path { d: "m6 6 12 12" }
                        }
                    } else {
                        // Lucide menu icon
                        svg {
                            xmlns: "http://www.w3.org/2000/svg",
                            width: "24",
                            height: "24",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            line { x1: "4", y1: "6", x2: "20", y2: "6" }
                            line { x1: "4", y1: "12", x2: "20", y2: "12" }
                            line { x1: "4", y1: "18", x2: "20", y2: "18" }
                        }
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
    fn test_anchor_ids_match_sections() {
        assert_eq!(NavSection::Home.anchor(), "home");
        assert_eq!(NavSection::Portfolio.anchor(), "portfolio");
        assert_eq!(NavSection::Testimonials.anchor(), "testimonials");
        assert_eq!(NavSection::Contact.anchor(), "contact");
    }

    #[test]
    fn test_display_names_are_nonempty() {
        for section in [
            NavSection::Home,
            NavSection::Portfolio,
            NavSection::Testimonials,
            NavSection::Contact,
        ] {
            assert!(!section.display_name().is_empty());
        }
    }
}
