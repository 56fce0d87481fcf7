//! Alert components for displaying gallery status messages.

use maud::{html, Markup, Render};

/// Alert variant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Error,
    Info,
}

impl AlertVariant {
    /// Get the CSS class for the alert element.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Error => "alert error",
            Self::Info => "alert info",
        }
    }

    #[must_use]
    const fn role(&self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::Info => "status",
        }
    }
}

/// An alert message component.
///
/// # Example
///
/// ```ignore
/// use crate::components::alert::Alert;
///
/// let alert = Alert::error("Failed to load projects");
/// ```
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub variant: AlertVariant,
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    #[must_use]
    pub const fn new(variant: AlertVariant, message: &'a str) -> Self {
        Self { variant, message }
    }

    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self::new(AlertVariant::Error, message)
    }

    #[must_use]
    pub const fn info(message: &'a str) -> Self {
        Self::new(AlertVariant::Info, message)
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        html! {
            div class=(self.variant.class()) role=(self.variant.role()) {
                p { (self.message) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_alert() {
        let html = Alert::error("Invalid API key").render().into_string();
        assert!(html.contains("class=\"alert error\""));
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Invalid API key"));
    }

    #[test]
    fn test_message_is_escaped() {
        let html = Alert::info("<script>x</script>").render().into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
