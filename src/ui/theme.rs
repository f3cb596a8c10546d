//! Theme system for the movie catalog
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::font::Weight;
use iced::widget::{button, checkbox, container, pick_list, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Font weights
// ============================================================================

/// Bold font weight (SF Pro looks better with Semibold on macOS)
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

/// Medium font weight
#[cfg(target_os = "macos")]
pub const MEDIUM_WEIGHT: Weight = Weight::Medium;

#[cfg(not(target_os = "macos"))]
pub const MEDIUM_WEIGHT: Weight = Weight::Normal;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
pub fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0d0d0f);
    pub const SURFACE: Color = color!(0x1a1a1d);
    pub const BORDER: Color = color!(0x2a2a2e);
    pub const TEXT_MUTED: Color = color!(0x8a8a90);
    pub const TEXT_SECONDARY: Color = color!(0xb5b5ba);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfafafa);
    pub const SURFACE: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xdedee2);
    pub const TEXT_MUTED: Color = color!(0x77777c);
    pub const TEXT_SECONDARY: Color = color!(0x55555a);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1d);
}

/// Window background based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Card and panel surface based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Hairline border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Gold used for rating stars (same for both modes)
pub const STAR_GOLD: Color = color!(0xf5c518);

/// Accent color (same for both modes)
pub const ACCENT: Color = color!(0xe50914);

/// Hover state for accent
pub const ACCENT_HOVER: Color = color!(0xf6121d);

/// Hover overlay with custom alpha
pub fn hover_bg_alpha(theme: &Theme, alpha: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, alpha)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, alpha)
    }
}

/// Surface elevated color (for popups and toasts)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.13, 0.13, 0.15)
    } else {
        Color::from_rgb(0.97, 0.97, 0.98)
    }
}

/// Input field background
pub fn input_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.15, 0.15, 0.16)
    } else {
        Color::from_rgb(0.94, 0.94, 0.95)
    }
}

/// Cover placeholder background
pub fn placeholder_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.18, 0.18, 0.2)
    } else {
        Color::from_rgb(0.88, 0.88, 0.9)
    }
}

/// Shadow color for floating elements
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

/// Success color
pub fn success(_theme: &Theme) -> Color {
    Color::from_rgb(0.3, 0.8, 0.5)
}

/// Warning color
pub fn warning(_theme: &Theme) -> Color {
    Color::from_rgb(0.95, 0.7, 0.2)
}

/// Danger/error color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.9, 0.3, 0.3)
    } else {
        Color::from_rgb(0.8, 0.2, 0.2)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Side panel holding the add-movie form
pub fn form_panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Movie card body, lifted slightly while hovered
pub fn movie_card(theme: &Theme, hover_progress: f32) -> container::Style {
    let shadow_alpha = 0.15 + 0.25 * hover_progress;
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 10.0.into(),
            width: 1.0,
            color: if hover_progress > 0.01 {
                Color {
                    a: hover_progress,
                    ..ACCENT
                }
            } else {
                border_color(theme)
            },
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, shadow_alpha),
            offset: Vector::new(0.0, 2.0 + 4.0 * hover_progress),
            blur_radius: 10.0 + 8.0 * hover_progress,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button style
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        button::Status::Pressed => button::Style {
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..base
        },
        _ => base,
    }
}

// ============================================================================
// Input Styles
// ============================================================================

/// Text input used by the search bar and the add-movie form
pub fn form_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => ACCENT,
        text_input::Status::Hovered => text_muted(theme),
        _ => border_color(theme),
    };
    text_input::Style {
        background: Background::Color(input_bg(theme)),
        border: Border {
            color: border,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: Color { a: 0.4, ..ACCENT },
    }
}

/// Checkbox with accent fill when checked
pub fn form_checkbox(theme: &Theme, status: checkbox::Status) -> checkbox::Style {
    let is_checked = matches!(
        status,
        checkbox::Status::Active { is_checked: true }
            | checkbox::Status::Hovered { is_checked: true }
    );
    checkbox::Style {
        background: Background::Color(if is_checked {
            ACCENT
        } else {
            hover_bg_alpha(theme, 0.1)
        }),
        icon_color: Color::WHITE,
        border: Border {
            radius: 4.0.into(),
            width: if is_checked { 0.0 } else { 1.0 },
            color: hover_bg_alpha(theme, 0.3),
        },
        text_color: Some(text_secondary(theme)),
    }
}

/// Dropdown style - semi-transparent background with rounded corners
pub fn form_pick_list(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let bg = match status {
        pick_list::Status::Active => input_bg(theme),
        pick_list::Status::Hovered => hover_bg_alpha(theme, 0.12),
        pick_list::Status::Opened { .. } => hover_bg_alpha(theme, 0.15),
    };

    pick_list::Style {
        text_color: text_primary(theme),
        placeholder_color: text_muted(theme),
        handle_color: text_secondary(theme),
        background: Background::Color(bg),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
    }
}

/// Dropdown menu style
pub fn form_pick_list_menu(theme: &Theme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        text_color: text_primary(theme),
        background: Background::Color(surface_elevated(theme)),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        selected_text_color: text_primary(theme),
        selected_background: Background::Color(hover_bg_alpha(theme, 0.1)),
        shadow: Shadow::default(),
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Thin scrollbar for the movie list
pub fn thin_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_follows_theme() {
        assert_eq!(background(&Theme::Dark), dark::BACKGROUND);
        assert_eq!(background(&Theme::Light), light::BACKGROUND);
        assert_ne!(text_primary(&Theme::Dark), text_primary(&Theme::Light));
    }

    #[test]
    fn hovered_card_gains_accent_border() {
        let idle = movie_card(&Theme::Dark, 0.0);
        let hovered = movie_card(&Theme::Dark, 1.0);
        assert_eq!(idle.border.color, dark::BORDER);
        assert_eq!(hovered.border.color, ACCENT);
        assert!(hovered.shadow.blur_radius > idle.shadow.blur_radius);
    }
}
