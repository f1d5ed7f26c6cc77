//! UI Components for Vitrine.
//!
//! One component per page behavior; none shares state with another.

mod contact_form;
mod portfolio;
mod project_modal;
mod scroll_to_top;
mod site_footer;
mod site_header;
mod testimonials;

pub use contact_form::ContactForm;
pub use portfolio::Portfolio;
pub use project_modal::ProjectModal;
pub use scroll_to_top::ScrollToTop;
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
pub use testimonials::Testimonials;
