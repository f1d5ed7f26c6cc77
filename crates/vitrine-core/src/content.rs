//! Site content: projects, testimonials, and their lookups.
//!
//! The page renders a fixed content set; nothing is fetched or persisted.
//! Detail bodies are markdown and get rendered by the UI crate.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// Detail block shown in the shared project modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub headline: String,
    /// Markdown body copied into the modal when the project is opened
    pub body_markdown: String,
    pub stack: Vec<String>,
    pub link: Option<String>,
}

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable id carried by the "view details" control
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub details: ProjectDetails,
}

/// One testimonial in the carousel sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
}

impl SiteContent {
    /// Lookup the detail block for a "view details" activation.
    pub fn project_details(&self, id: &str) -> SiteResult<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| SiteError::UnknownProject(id.to_string()))
    }

    /// Filter tags for the portfolio: "all" first, then distinct
    /// categories in content order.
    pub fn filter_tags(&self) -> Vec<String> {
        let mut tags = vec!["all".to_string()];
        for project in &self.projects {
            if !tags.contains(&project.category) {
                tags.push(project.category.clone());
            }
        }
        tags
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            projects: vec![
                Project {
                    id: "alpha".to_string(),
                    title: "Project Alpha".to_string(),
                    category: "web".to_string(),
                    summary: "A storefront rebuilt around its catalogue.".to_string(),
                    details: ProjectDetails {
                        headline: "Project Alpha - storefront redesign".to_string(),
                        body_markdown: "A full rebuild of a boutique storefront: \
catalogue-first navigation, a checkout trimmed to two steps, and product pages \
that load in under a second.\n\n*Shipped in eight weeks.*"
                            .to_string(),
                        stack: vec!["design".to_string(), "frontend".to_string()],
                        link: Some("https://example.com/alpha".to_string()),
                    },
                },
                Project {
                    id: "beta".to_string(),
                    title: "Project Beta".to_string(),
                    category: "branding".to_string(),
                    summary: "Identity system for a local roastery.".to_string(),
                    details: ProjectDetails {
                        headline: "Project Beta - identity system".to_string(),
                        body_markdown: "Wordmark, packaging, and signage for a \
roastery expanding from one shop to four. The system had to survive being \
stencilled onto burlap.\n\n*Still in use five years on.*"
                            .to_string(),
                        stack: vec!["branding".to_string(), "print".to_string()],
                        link: None,
                    },
                },
                Project {
                    id: "gamma".to_string(),
                    title: "Project Gamma".to_string(),
                    category: "web".to_string(),
                    summary: "Event site with a live schedule.".to_string(),
                    details: ProjectDetails {
                        headline: "Project Gamma - festival site".to_string(),
                        body_markdown: "A three-day festival's public site: \
lineup, venue maps, and a schedule that people actually kept open on their \
phones all weekend."
                            .to_string(),
                        stack: vec!["frontend".to_string()],
                        link: Some("https://example.com/gamma".to_string()),
                    },
                },
            ],
            testimonials: vec![
                Testimonial {
                    quote: "They treated our tiny project like it was the only \
thing on their desk."
                        .to_string(),
                    author: "Marta Silva".to_string(),
                    role: "Owner, Casa Silva".to_string(),
                },
                Testimonial {
                    quote: "The redesign paid for itself within the first quarter."
                        .to_string(),
                    author: "Jonas Weber".to_string(),
                    role: "Head of Retail, Weber & Co".to_string(),
                },
                Testimonial {
                    quote: "Clear timelines, no surprises, and a site we can \
maintain ourselves."
                        .to_string(),
                    author: "Priya Nair".to_string(),
                    role: "Festival Director".to_string(),
                },
            ],
        }
    }
}

/// Four-digit current calendar year from the local clock, for the footer.
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_project_lookup() {
        let content = SiteContent::default();
        let project = content.project_details("alpha").unwrap();
        assert_eq!(project.title, "Project Alpha");
        assert!(!project.details.body_markdown.is_empty());
    }

    #[test]
    fn test_unknown_project_lookup() {
        let content = SiteContent::default();
        let err = content.project_details("omega").unwrap_err();
        assert_eq!(err, SiteError::UnknownProject("omega".to_string()));
    }

    #[test]
    fn test_filter_tags_all_first_and_distinct() {
        let content = SiteContent::default();
        let tags = content.filter_tags();
        assert_eq!(tags[0], "all");
        assert_eq!(tags.len(), 3); // all, web, branding
        assert!(tags.contains(&"web".to_string()));
        assert!(tags.contains(&"branding".to_string()));
    }

    #[test]
    fn test_current_year_is_four_digits() {
        let year = current_year();
        assert!((1000..10000).contains(&year));
    }
}
