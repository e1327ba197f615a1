//! User-facing notification messages.

use std::fmt;

/// A transient user-visible notification emitted by completed flows and
/// export actions.
#[derive(Debug)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub success: bool,
}

impl Toast {
    /// Create a success notification.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            success: true,
        }
    }

    /// Create a failure notification.
    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            success: false,
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}** {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_display() {
        let toast = Toast::success("Booking Confirmed!", "Your table has been reserved.");
        let output = format!("{toast}");
        assert!(output.contains("**Booking Confirmed!**"));
        assert!(output.contains("Your table has been reserved."));
        assert!(toast.success);

        let toast = Toast::failure("Copy failed", "Clipboard unavailable");
        assert!(!toast.success);
    }
}
