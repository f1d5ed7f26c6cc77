//! Error types for Vitrine

use thiserror::Error;

/// Main error type for Vitrine operations.
///
/// Nothing here is fatal to the page: callers log the condition and the
/// affected feature no-ops while the rest keeps working.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// No project with this id exists in the site content
    #[error("Project not found: {0}")]
    UnknownProject(String),

    /// A navigation anchor referenced a section that is not on the page
    #[error("Anchor target not found: {0}")]
    MissingAnchor(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::UnknownProject("omega".to_string());
        assert_eq!(format!("{}", err), "Project not found: omega");

        let err = SiteError::MissingAnchor("#missing".to_string());
        assert_eq!(format!("{}", err), "Anchor target not found: #missing");
    }
}
