//! Error boundaries for sections that fail after the shell is sent.
//!
//! Once the status line is out, a failed section can no longer change the
//! response. Its boundary decides what, if anything, takes its place.

use std::fmt::Display;

use crate::escape::escape_html;

/// What to do when a section's data fails to load.
#[derive(Debug, Clone, Default)]
pub enum FallbackStrategy {
    /// Render fallback HTML.
    RenderFallback(String),

    /// Skip the section entirely.
    #[default]
    Skip,

    /// Show the error message.
    ShowError,
}

impl FallbackStrategy {
    /// Create a fallback that renders custom HTML.
    pub fn html(html: impl Into<String>) -> Self {
        Self::RenderFallback(html.into())
    }

    /// Create a fallback that shows a user-friendly message.
    pub fn message(message: &str) -> Self {
        Self::RenderFallback(format!(
            r#"<div class="section-error">{}</div>"#,
            escape_html(message)
        ))
    }
}

/// Result of applying a fallback.
#[derive(Debug, PartialEq, Eq)]
pub enum FallbackResult {
    /// Rendered fallback HTML.
    Rendered(String),
    /// Section was skipped.
    Skipped,
}

/// Apply a fallback strategy to a failure.
pub fn apply_fallback(strategy: &FallbackStrategy, error: &str) -> FallbackResult {
    match strategy {
        FallbackStrategy::RenderFallback(html) => FallbackResult::Rendered(html.clone()),
        FallbackStrategy::Skip => FallbackResult::Skipped,
        FallbackStrategy::ShowError => FallbackResult::Rendered(format!(
            r#"<div class="section-error">Failed to load section: {}</div>"#,
            escape_html(error)
        )),
    }
}

/// A named section with its fallback.
#[derive(Debug, Clone)]
pub struct SectionBoundary {
    /// Section name, used in logs and timing.
    pub name: String,
    /// Fallback applied on failure.
    pub fallback: FallbackStrategy,
    /// Whether to log the failure.
    pub log_failure: bool,
}

impl SectionBoundary {
    pub fn new(name: impl Into<String>, fallback: FallbackStrategy) -> Self {
        Self {
            name: name.into(),
            fallback,
            log_failure: true,
        }
    }

    /// Set whether to log failures.
    pub fn with_logging(mut self, log: bool) -> Self {
        self.log_failure = log;
        self
    }

    /// HTML to send for a section result, or `None` to send nothing.
    pub fn settle<E: Display>(&self, result: Result<String, E>) -> Option<String> {
        match result {
            Ok(html) => Some(html),
            Err(error) => {
                let message = error.to_string();
                if self.log_failure {
                    tracing::warn!(section = %self.name, error = %message, "section failed, rendering fallback");
                }
                match apply_fallback(&self.fallback, &message) {
                    FallbackResult::Rendered(html) => Some(html),
                    FallbackResult::Skipped => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_passes_through() {
        let boundary = SectionBoundary::new("reviews", FallbackStrategy::Skip);
        assert_eq!(
            boundary.settle::<String>(Ok("<ul></ul>".into())),
            Some("<ul></ul>".to_string())
        );
    }

    #[test]
    fn test_fallback_html() {
        let boundary = SectionBoundary::new(
            "featured",
            FallbackStrategy::message("Recommendations are unavailable."),
        )
        .with_logging(false);
        let html = boundary.settle(Err("HTTP 503")).unwrap();
        assert_eq!(
            html,
            r#"<div class="section-error">Recommendations are unavailable.</div>"#
        );
    }

    #[test]
    fn test_skip() {
        let boundary = SectionBoundary::new("summary", FallbackStrategy::Skip).with_logging(false);
        assert_eq!(boundary.settle(Err("boom")), None);
    }

    #[test]
    fn test_show_error_escapes() {
        assert_eq!(
            apply_fallback(&FallbackStrategy::ShowError, "<oops>"),
            FallbackResult::Rendered(
                r#"<div class="section-error">Failed to load section: &lt;oops&gt;</div>"#
                    .to_string()
            )
        );
    }
}
