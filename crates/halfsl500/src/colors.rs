//! Semantic color theme for terminal output
//!
//! Styles are only applied when stdout is a terminal; piped output stays plain.

use std::sync::LazyLock;

use owo_colors::Style;

/// Semantic color definitions for terminal output
pub struct SemanticColors {
    /// Dimmed - field labels
    pub label: Style,
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            label: Style::new().dimmed(),
        }
    }
}

/// Global default theme
pub static COLORS: LazyLock<SemanticColors> = LazyLock::new(SemanticColors::default);

#[cfg(test)]
mod tests {
    use owo_colors::OwoColorize;

    use super::*;

    #[test]
    fn test_styles_wrap_text() {
        let styled = "commit:".style(COLORS.label).to_string();
        assert!(styled.contains("commit:"));
        assert_ne!(styled, "commit:");
    }
}
