//! Color theme and glyphs for the GymMatch TUI.
//!
//! Near-black zinc surfaces with a lime accent by default, plus a
//! high-contrast override that sticks to the 16 ANSI colors.

use ratatui::style::{Color, Modifier, Style};

use gymmatch_types::ui::UiOptions;

/// Zinc/lime palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(0, 0, 0);
    pub const BG_PANEL: Color = Color::Rgb(24, 24, 27); // zinc-900
    pub const BG_TILE: Color = Color::Rgb(39, 39, 42); // zinc-800
    pub const BG_BORDER: Color = Color::Rgb(63, 63, 70); // zinc-700

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(250, 250, 250);
    pub const TEXT_SECONDARY: Color = Color::Rgb(161, 161, 170); // zinc-400
    pub const TEXT_MUTED: Color = Color::Rgb(113, 113, 122); // zinc-500
    pub const TEXT_DISABLED: Color = Color::Rgb(63, 63, 70); // zinc-700

    // === Accent ===
    pub const LIME: Color = Color::Rgb(163, 230, 53); // lime-400
    pub const RED: Color = Color::Rgb(239, 68, 68); // red-500
    pub const INK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_tile: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub accent: Color,
    pub pass: Color,
    pub ink: Color,
    pub white: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_tile: colors::BG_TILE,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            accent: colors::LIME,
            pass: colors::RED,
            ink: colors::INK,
            white: colors::WHITE,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_tile: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            text_disabled: Color::DarkGray,
            accent: Color::LightGreen,
            pass: Color::LightRed,
            ink: Color::Black,
            white: Color::White,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub dumbbell: &'static str,
    pub message: &'static str,
    pub user: &'static str,
    pub trophy: &'static str,
    pub pin: &'static str,
    pub pass: &'static str,
    pub like: &'static str,
    pub arrow_left: &'static str,
    pub arrow_right: &'static str,
    pub photo_fill: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            dumbbell: "|=|",
            message: "M",
            user: "U",
            trophy: "*",
            pin: "@",
            pass: "X",
            like: "<3",
            arrow_left: "<-",
            arrow_right: "->",
            photo_fill: ".",
        }
    } else {
        Glyphs {
            dumbbell: "╞═╡",
            message: "✉",
            user: "☺",
            trophy: "♛",
            pin: "⌖",
            pass: "✕",
            like: "♥",
            arrow_left: "←",
            arrow_right: "→",
            photo_fill: "░",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC)
    }

    #[must_use]
    pub fn headline(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn badge(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.ink)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn stat_key(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn stat_value(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn pass_button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.pass)
            .bg(palette.bg_panel)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn like_button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.ink)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn reset_button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.ink)
            .bg(palette.white)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}
