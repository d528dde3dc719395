//! Theme system for the workspace switcher.
//!
//! Provides a two-layer theming system:
//! - `ThemeSettings`: preferences taken from the `[appearance]` config section
//! - `Theme`: computed colors and metrics derived from settings + system appearance

use gpui::{hsla, px, App, Global, Hsla, Pixels, SharedString};
use switcher_core::{AppearanceConfig, ThemeMode, WorkspaceKind};

// =============================================================================
// Theme Settings (User-Configurable)
// =============================================================================

/// User-configurable theme settings.
#[derive(Debug, Clone)]
pub struct ThemeSettings {
    /// Light, dark, or follow system.
    pub appearance: Appearance,
    /// Accent hue (0.0-1.0). Default is blue (211/360).
    pub accent_hue: f32,
    /// Main font family.
    pub font_family: SharedString,
    /// Base font size.
    pub font_size: Pixels,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self::from_config(&AppearanceConfig::default())
    }
}

impl ThemeSettings {
    /// Build settings from the `[appearance]` section. The hue there is in degrees.
    pub fn from_config(config: &AppearanceConfig) -> Self {
        Self {
            appearance: config.theme.into(),
            accent_hue: config.accent_hue.rem_euclid(360.0) / 360.0,
            font_family: "Inter".into(),
            font_size: px(14.0),
        }
    }
}

impl Global for ThemeSettings {}

/// Appearance mode preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
    #[default]
    System,
}

impl From<ThemeMode> for Appearance {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => Appearance::System,
        }
    }
}

// =============================================================================
// Theme (Computed)
// =============================================================================

/// The active theme with computed colors.
///
/// Access via `cx.theme()` in render methods.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Whether this is a dark theme.
    pub is_dark: bool,

    // -------------------------------------------------------------------------
    // Background Colors
    // -------------------------------------------------------------------------
    /// Page background.
    pub background: Hsla,
    /// Dropdown panel, preview card, header.
    pub surface: Hsla,
    /// Surface when hovered.
    pub surface_hover: Hsla,
    /// Placeholder blocks while loading.
    pub skeleton: Hsla,

    // -------------------------------------------------------------------------
    // Text Colors
    // -------------------------------------------------------------------------
    /// Primary text color.
    pub text: Hsla,
    /// Secondary/muted text.
    pub text_muted: Hsla,
    /// Placeholder text in inputs.
    pub text_placeholder: Hsla,

    // -------------------------------------------------------------------------
    // Interactive Colors
    // -------------------------------------------------------------------------
    /// Keyboard-selected row background.
    pub cursor: Hsla,
    /// Text selection background.
    pub selection: Hsla,
    /// Accent color for buttons, focus rings, links.
    pub accent: Hsla,
    /// Filled favorite star.
    pub favorite: Hsla,
    /// Drop target highlight while dragging.
    pub drop_target: Hsla,

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------
    /// Error state.
    pub error: Hsla,

    // -------------------------------------------------------------------------
    // Border Colors
    // -------------------------------------------------------------------------
    /// Subtle border.
    pub border: Hsla,
    /// Focused border (derived from accent).
    pub border_focused: Hsla,

    // -------------------------------------------------------------------------
    // Typography
    // -------------------------------------------------------------------------
    /// Main font family.
    pub font_family: SharedString,
    /// Base font size.
    pub font_size: Pixels,

    // -------------------------------------------------------------------------
    // Metrics
    // -------------------------------------------------------------------------
    /// Border radius for rounded elements.
    pub radius: Pixels,
    /// Kind icon and avatar size in rows.
    pub icon_size: Pixels,
    /// Height of workspace rows.
    pub item_height: Pixels,
    /// Width of the dropdown panel.
    pub panel_width: Pixels,
    /// Width of the preview card.
    pub preview_width: Pixels,
    /// Height of the page header.
    pub header_height: Pixels,
}

impl Theme {
    /// Create a theme from settings and system appearance.
    pub fn from_settings(settings: &ThemeSettings, system_is_dark: bool) -> Self {
        let is_dark = match settings.appearance {
            Appearance::Dark => true,
            Appearance::Light => false,
            Appearance::System => system_is_dark,
        };

        let palette = if is_dark {
            Palette::dark(settings.accent_hue)
        } else {
            Palette::light(settings.accent_hue)
        };

        Self {
            is_dark,

            // Backgrounds
            background: palette.bg_base,
            surface: palette.bg_elevated,
            surface_hover: palette.bg_hover,
            skeleton: palette.bg_hover,

            // Text
            text: palette.fg_primary,
            text_muted: palette.fg_secondary,
            text_placeholder: palette.fg_tertiary,

            // Interactive - derived from accent
            cursor: palette.accent.with_alpha(if is_dark { 0.25 } else { 0.12 }),
            selection: palette.accent.with_alpha(if is_dark { 0.3 } else { 0.2 }),
            accent: palette.accent,
            favorite: palette.favorite,
            drop_target: palette.accent.with_alpha(0.5),

            // Semantic
            error: palette.error,

            // Borders
            border: palette.border,
            border_focused: palette.accent,

            // Typography
            font_family: settings.font_family.clone(),
            font_size: settings.font_size,

            // Metrics
            radius: px(8.0),
            icon_size: px(24.0),
            item_height: px(52.0),
            panel_width: px(423.0),
            preview_width: px(320.0),
            header_height: px(56.0),
        }
    }

    /// Create default dark theme.
    pub fn dark() -> Self {
        Self::from_settings(&ThemeSettings::default(), true)
    }

    /// Create default light theme.
    pub fn light() -> Self {
        Self::from_settings(&ThemeSettings::default(), false)
    }

    /// Tint used behind the kind icon.
    pub fn kind_color(&self, kind: WorkspaceKind) -> Hsla {
        let hue = match kind {
            WorkspaceKind::Personal | WorkspaceKind::Private => 35.0,
            WorkspaceKind::Team => 211.0,
            WorkspaceKind::Public => 140.0,
        };
        hsla(hue / 360.0, 0.60, 0.50, if self.is_dark { 0.25 } else { 0.15 })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Global for Theme {}

// =============================================================================
// Palette (Internal)
// =============================================================================

struct Palette {
    bg_base: Hsla,
    bg_elevated: Hsla,
    bg_hover: Hsla,
    fg_primary: Hsla,
    fg_secondary: Hsla,
    fg_tertiary: Hsla,
    accent: Hsla,
    favorite: Hsla,
    border: Hsla,
    error: Hsla,
}

impl Palette {
    fn dark(accent_hue: f32) -> Self {
        Self {
            bg_base: hsla(0.0, 0.0, 0.09, 1.0),
            bg_elevated: hsla(0.0, 0.0, 0.13, 1.0),
            bg_hover: hsla(0.0, 0.0, 1.0, 0.08),
            fg_primary: hsla(0.0, 0.0, 0.95, 1.0),
            fg_secondary: hsla(0.0, 0.0, 0.62, 1.0),
            fg_tertiary: hsla(0.0, 0.0, 0.42, 1.0),
            accent: hsla(accent_hue, 0.80, 0.60, 1.0),
            favorite: hsla(45.0 / 360.0, 0.95, 0.55, 1.0),
            border: hsla(0.0, 0.0, 1.0, 0.12),
            error: hsla(0.0, 0.80, 0.55, 1.0),
        }
    }

    fn light(accent_hue: f32) -> Self {
        Self {
            bg_base: hsla(0.0, 0.0, 0.97, 1.0),
            bg_elevated: hsla(0.0, 0.0, 1.0, 1.0),
            bg_hover: hsla(0.0, 0.0, 0.0, 0.05),
            fg_primary: hsla(0.0, 0.0, 0.10, 1.0),
            fg_secondary: hsla(0.0, 0.0, 0.45, 1.0),
            fg_tertiary: hsla(0.0, 0.0, 0.60, 1.0),
            accent: hsla(accent_hue, 0.80, 0.50, 1.0),
            favorite: hsla(45.0 / 360.0, 0.95, 0.50, 1.0),
            border: hsla(0.0, 0.0, 0.0, 0.10),
            error: hsla(0.0, 0.80, 0.45, 1.0),
        }
    }
}

// =============================================================================
// Hsla Extension
// =============================================================================

/// Extension trait for Hsla alpha modification.
pub trait HslaExt {
    fn with_alpha(self, a: f32) -> Hsla;
}

impl HslaExt for Hsla {
    fn with_alpha(self, a: f32) -> Hsla {
        Hsla { a, ..self }
    }
}

// =============================================================================
// Theme Extensions
// =============================================================================

/// Extension trait for convenient theme access.
pub trait ThemeExt {
    /// Get the current theme.
    fn theme(&self) -> &Theme;
}

impl ThemeExt for App {
    fn theme(&self) -> &Theme {
        self.global::<Theme>()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ThemeSettings::default();
        assert_eq!(settings.appearance, Appearance::System);
        assert!((settings.accent_hue - 211.0 / 360.0).abs() < 0.001);
    }

    #[test]
    fn test_settings_from_config() {
        let config = AppearanceConfig {
            theme: ThemeMode::Dark,
            accent_hue: 720.0,
        };
        let settings = ThemeSettings::from_config(&config);
        assert_eq!(settings.appearance, Appearance::Dark);
        assert!(settings.accent_hue.abs() < 0.001);
    }

    #[test]
    fn test_appearance_override() {
        // Force dark even when system is light
        let settings = ThemeSettings {
            appearance: Appearance::Dark,
            ..Default::default()
        };
        assert!(Theme::from_settings(&settings, false).is_dark);

        // Force light even when system is dark
        let settings = ThemeSettings {
            appearance: Appearance::Light,
            ..Default::default()
        };
        assert!(!Theme::from_settings(&settings, true).is_dark);

        // System follows the platform
        let settings = ThemeSettings::default();
        assert!(Theme::from_settings(&settings, true).is_dark);
    }

    #[test]
    fn test_custom_accent_hue() {
        let settings = ThemeSettings {
            accent_hue: 0.0, // Red
            ..Default::default()
        };

        let theme = Theme::from_settings(&settings, true);
        assert!((theme.accent.h - 0.0).abs() < 0.001);
        assert!((theme.border_focused.h - 0.0).abs() < 0.001);
        assert!((theme.cursor.h - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_panel_width() {
        let width: f32 = Theme::light().panel_width.into();
        assert!((width - 423.0).abs() < 0.001);
    }

    #[test]
    fn test_kind_colors_differ() {
        let theme = Theme::light();
        assert_ne!(
            theme.kind_color(WorkspaceKind::Team),
            theme.kind_color(WorkspaceKind::Public)
        );
        assert_eq!(
            theme.kind_color(WorkspaceKind::Personal),
            theme.kind_color(WorkspaceKind::Private)
        );
    }
}
