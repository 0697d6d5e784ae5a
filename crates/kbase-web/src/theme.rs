//! Theme configuration for the web client

use dioxus::prelude::*;

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Value for the root `data-theme` attribute
    #[must_use]
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

/// Ask the browser for `prefers-color-scheme`.
///
/// Falls back to light when the query cannot be evaluated.
pub async fn detect_browser_theme() -> ResolvedTheme {
    let query = document::eval(
        "return window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches;",
    );
    match query.join::<bool>().await {
        Ok(prefers_dark) => ResolvedTheme::from_prefers_dark(prefers_dark),
        Err(error) => {
            tracing::warn!(
                "Failed to detect browser theme: {:?}. Defaulting to light mode.",
                error
            );
            ResolvedTheme::Light
        }
    }
}

/// Color palette for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub info: &'static str,
    pub favorite: &'static str,
    pub overlay: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f8f9fa",
    bg_tertiary: "#f1f3f4",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    text_muted: "#9aa0a6",
    border: "#dadce0",
    accent: "#6366f1",
    accent_hover: "#4f46e5",
    accent_text: "#ffffff",
    error: "#dc2626",
    success: "#16a34a",
    info: "#2563eb",
    favorite: "#f59e0b",
    overlay: "rgba(15, 23, 42, 0.45)",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#1a1a1a",
    bg_secondary: "#242424",
    bg_tertiary: "#2d2d2d",
    text_primary: "#e8eaed",
    text_secondary: "#9aa0a6",
    text_muted: "#5f6368",
    border: "#3c4043",
    accent: "#818cf8",
    accent_hover: "#a5b4fc",
    accent_text: "#1a1a1a",
    error: "#f87171",
    success: "#4ade80",
    info: "#60a5fa",
    favorite: "#fbbf24",
    overlay: "rgba(0, 0, 0, 0.6)",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_dark_maps_to_dark_palette() {
        let theme = ResolvedTheme::from_prefers_dark(true);
        assert_eq!(theme.attr(), "dark");
        assert_eq!(theme.palette(), &DARK_PALETTE);
        assert_eq!(ResolvedTheme::from_prefers_dark(false), ResolvedTheme::Light);
    }
}
