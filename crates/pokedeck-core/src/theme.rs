//! Everforest palettes for the Pokedeck chrome.
//!
//! The palette styles header, footer, card frames and text. Badge colors are
//! fixed per category and do not change with the palette.

use crate::card::BadgeColor;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeVariant {
    #[default]
    EverforestDark,
    EverforestLight,
}

#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub error: Color,
    pub info: Color,
    pub border: Color,
    pub card: Color,
    pub warning: Color,
}

/// UI element types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Normal text content
    Text,
    /// Card titles and the header
    Title,
    /// Card frames and panels
    Border,
    /// Key hints
    Accent,
    /// Status and counters
    Info,
    /// Whole-screen fill
    Background,
    /// Secondary text such as image URLs
    Inactive,
    /// In-progress status
    Warning,
    /// Failed load status
    Error,
}

#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::EverforestDark => ColorPalette {
                background: Color::Rgb(45, 53, 59),    // #2d353b
                foreground: Color::Rgb(211, 198, 170), // #d3c6aa
                accent: Color::Rgb(167, 192, 128),     // #a7c080
                error: Color::Rgb(230, 126, 128),      // #e67e80
                info: Color::Rgb(127, 187, 179),       // #7fbbb3
                border: Color::Rgb(116, 125, 135),     // #747d87
                card: Color::Rgb(52, 63, 68),          // #343f44
                warning: Color::Rgb(219, 188, 127),    // #dbbc7f
            },
            ThemeVariant::EverforestLight => ColorPalette {
                background: Color::Rgb(253, 246, 227), // #fdf6e3
                foreground: Color::Rgb(92, 106, 114),  // #5c6a72
                accent: Color::Rgb(141, 161, 1),       // #8da101
                error: Color::Rgb(248, 85, 82),        // #f85552
                info: Color::Rgb(53, 167, 124),        // #35a77c
                border: Color::Rgb(150, 160, 170),     // #96a0aa
                card: Color::Rgb(255, 255, 255),       // #ffffff
                warning: Color::Rgb(207, 131, 44),     // #cf832c
            },
        };

        Self { variant, colors }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// Toggle between dark and light variants
    pub fn toggle(&mut self) {
        let next = match self.variant {
            ThemeVariant::EverforestDark => ThemeVariant::EverforestLight,
            ThemeVariant::EverforestLight => ThemeVariant::EverforestDark,
        };
        *self = Self::new(next);
    }

    pub fn ratatui_style(&self, element: Element) -> Style {
        let on_background = Style::default().bg(self.colors.background);
        match element {
            Element::Text | Element::Background => on_background.fg(self.colors.foreground),
            Element::Title => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.card)
                .add_modifier(Modifier::BOLD),
            Element::Border => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.card),
            Element::Accent => on_background
                .fg(self.colors.accent)
                .add_modifier(Modifier::BOLD),
            Element::Info => on_background.fg(self.colors.info),
            Element::Inactive => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.card),
            Element::Warning => on_background.fg(self.colors.warning),
            Element::Error => on_background
                .fg(self.colors.error)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Inside of a card: regular text on the card fill.
    pub fn card_style(&self) -> Style {
        Style::default()
            .fg(self.colors.foreground)
            .bg(self.colors.card)
    }

    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    /// White label on the category's fixed color.
    pub fn badge_style(&self, color: BadgeColor) -> Style {
        let (r, g, b) = color.rgb();
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        let mut theme = Theme::default();
        assert_eq!(theme.variant(), ThemeVariant::EverforestDark);
        theme.toggle();
        assert_eq!(theme.variant(), ThemeVariant::EverforestLight);
        theme.toggle();
        assert_eq!(theme.variant(), ThemeVariant::EverforestDark);
    }

    #[test]
    fn test_badge_style_ignores_variant() {
        let dark = Theme::new(ThemeVariant::EverforestDark);
        let light = Theme::new(ThemeVariant::EverforestLight);

        let style = dark.badge_style(BadgeColor::Purple500);
        assert_eq!(style, light.badge_style(BadgeColor::Purple500));
        assert_eq!(style.bg, Some(Color::Rgb(168, 85, 247)));
        assert_eq!(style.fg, Some(Color::White));
    }
}
