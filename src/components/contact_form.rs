//! Contact Form Component
//!
//! Renders the validation model from `vitrine-core`: inline per-field
//! messages, a global status line, and a mailto handoff once validation
//! passes. Typing into a field clears its error on the spot, and clears
//! an error-toned global status.

use dioxus::prelude::*;
use vitrine_core::{ContactForm as FormModel, StatusTone};

use crate::theme::colors;
use crate::viewport;

/// Delivery address for the mailto handoff.
const CONTACT_RECIPIENT: &str = "hello@vitrine.studio";

/// Contact section with the validated form
#[component]
pub fn ContactForm() -> Element {
    let mut form = use_signal(FormModel::default);

    let submit = move |_| {
        let valid = form.write().validate();
        if valid {
            // Validation passed: hand delivery to the declared mechanism
            let url = form.read().mailto(CONTACT_RECIPIENT);
            spawn(async move {
                viewport::open_mailto(&url).await;
            });
        } else {
            tracing::debug!("Contact form rejected with empty required fields");
        }
    };

    let fields = form.read().fields.clone();
    let status = form.read().status.clone();

    rsx! {
        section { id: "contact", class: "section",
            h2 { class: "section-title", "Get in Touch" }

            form { class: "contact-form", onsubmit: submit,
                for field in fields {
                    div { class: "form-field",
                        label { r#for: "field-{field.name}", "{field.label}" }

                        if field.name == "message" {
                            textarea {
                                id: "field-{field.name}",
                                class: if field.error.is_some() { "error" } else { "" },
                                rows: 5,
                                value: "{field.value}",
                                oninput: move |e| form.write().set_value(field.name, e.value()),
                            }
                        } else {
                            input {
                                id: "field-{field.name}",
                                class: if field.error.is_some() { "error" } else { "" },
                                r#type: if field.name == "email" { "email" } else { "text" },
                                value: "{field.value}",
                                oninput: move |e| form.write().set_value(field.name, e.value()),
                            }
                        }

                        span { class: "field-error",
                            if let Some(message) = &field.error {
                                "{message}"
                            }
                        }
                    }
                }

                if let Some(status) = status {
                    p {
                        class: "form-status",
                        style: match status.tone {
                            StatusTone::Error => format!("color: {};", colors::DANGER),
                            StatusTone::Advisory => format!("color: {};", colors::ADVISORY),
                        },
                        "{status.text}"
                    }
                }

                button { class: "submit-btn", r#type: "submit", "Send message" }
            }
        }
    }
}
