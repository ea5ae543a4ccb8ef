// Container styles shared by the badge and the viewer layout
// These functions create reusable styles for containers around logos and text

use iced::widget::container;

/// Dark grey box with rounded corners that frames a platform logo
/// The _theme parameter is required by Iced but not used in this simple styling
pub fn badge_box(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(iced::Color::from_rgb(
            0.3, 0.3, 0.3, // Dark grey
        ))),
        border: iced::Border {
            width: 0.0, // No border
            color: iced::Color::BLACK, // Not used since width is 0
            radius: iced::border::Radius::from(10.0), // 10 pixel corner radius
        },
        ..Default::default() // Use default values for other style properties
    }
}

/// Transparent box with a light grey outline, shown when a platform has no logo
/// The outline keeps the badge footprint visible next to real logos
pub fn placeholder_box(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(iced::Color::from_rgba(
            0.0, 0.0, 0.0, 0.0, // RGBA: fully transparent
        ))),
        text_color: Some(iced::Color::from_rgb(0.75, 0.75, 0.75)), // Light grey label
        border: iced::Border {
            width: 1.0, // 1 pixel wide outline
            color: iced::Color::from_rgb(0.75, 0.75, 0.75), // Same grey as the label
            radius: iced::border::Radius::from(10.0), // Match the logo box corners
        },
        ..Default::default()
    }
}

/// Background for the whole viewer window
pub fn panel(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(iced::Color::from_rgb(
            36.0 / 255.0,
            35.0 / 255.0,
            35.0 / 255.0, // #242323
        ))),
        ..Default::default()
    }
}
