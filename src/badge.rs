// Turns a platform name into something the UI can draw:
// the platform's logo when one exists, otherwise a text placeholder.

use iced::advanced::image::Handle;
use iced::widget::{container, image, text};
use iced::{Element, Length};

use crate::logo_provider::LogoProvider;
use crate::platform_assets::LogoAsset;

const EMPTY_PLACEHOLDER: &str = "?";
// Padding between the badge frame and its contents
const BADGE_PADDING: f32 = 6.0;
// Text layout rejects a zero line height
const MIN_PLACEHOLDER_TEXT: f32 = 8.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeContent {
    Logo(LogoAsset),
    /// Text drawn in place of a missing logo
    Placeholder(String),
}

impl BadgeContent {
    pub fn for_platform(provider: &dyn LogoProvider, platform: &str) -> Self {
        match provider.logo_for(platform) {
            Some(logo) => BadgeContent::Logo(logo),
            None => {
                let label = platform.trim();
                if label.is_empty() {
                    BadgeContent::Placeholder(EMPTY_PLACEHOLDER.to_string())
                } else {
                    BadgeContent::Placeholder(label.to_string())
                }
            }
        }
    }

    pub fn logo(&self) -> Option<LogoAsset> {
        match self {
            BadgeContent::Logo(logo) => Some(*logo),
            BadgeContent::Placeholder(_) => None,
        }
    }
}

/// Font size of the placeholder label inside a badge of `size` pixels
pub fn placeholder_text_size(size: f32) -> f32 {
    let scaled = size / 6.0;
    if scaled.is_finite() {
        scaled.max(MIN_PLACEHOLDER_TEXT)
    } else {
        MIN_PLACEHOLDER_TEXT
    }
}

/// Builds a square badge element of `size` pixels for the given content
pub fn platform_badge<'a, Message: 'a>(content: &BadgeContent, size: f32) -> Element<'a, Message> {
    let frame = Length::Fixed(size + 2.0 * BADGE_PADDING);

    match content {
        BadgeContent::Logo(logo) => {
            let logo = image::Image::new(Handle::from_bytes(logo.bytes()))
                .width(Length::Fixed(size))
                .height(Length::Fixed(size));

            container(logo)
                .align_x(iced::alignment::Horizontal::Center)
                .align_y(iced::alignment::Vertical::Center)
                .width(frame)
                .height(frame)
                .padding(BADGE_PADDING)
                .style(crate::styles::badge_box)
                .into()
        }
        BadgeContent::Placeholder(label) => {
            let label = text(label.clone()).size(placeholder_text_size(size));

            container(label)
                .align_x(iced::alignment::Horizontal::Center)
                .align_y(iced::alignment::Vertical::Center)
                .width(frame)
                .height(frame)
                .padding(BADGE_PADDING)
                .style(crate::styles::placeholder_box)
                .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo_provider::StaticLogoProvider;
    use crate::platform_assets::{LOOKER, SUPERSET};

    struct AlwaysLooker;

    impl LogoProvider for AlwaysLooker {
        fn logo_for(&self, _platform: &str) -> Option<LogoAsset> {
            Some(LOOKER)
        }

        fn platforms(&self) -> Vec<&'static str> {
            vec!["looker"]
        }
    }

    #[test]
    fn test_known_platform_gets_logo() {
        let badge = BadgeContent::for_platform(&StaticLogoProvider, "Superset");
        assert_eq!(badge, BadgeContent::Logo(SUPERSET));
        assert_eq!(badge.logo(), Some(SUPERSET));
    }

    #[test]
    fn test_unknown_platform_gets_trimmed_placeholder() {
        let badge = BadgeContent::for_platform(&StaticLogoProvider, "  snowflake ");
        assert_eq!(badge, BadgeContent::Placeholder("snowflake".to_string()));
        assert_eq!(badge.logo(), None);
    }

    #[test]
    fn test_empty_platform_placeholder() {
        assert_eq!(
            BadgeContent::for_platform(&StaticLogoProvider, ""),
            BadgeContent::Placeholder("?".to_string())
        );
        assert_eq!(
            BadgeContent::for_platform(&StaticLogoProvider, "   "),
            BadgeContent::Placeholder("?".to_string())
        );
    }

    #[test]
    fn test_placeholder_text_never_zero() {
        assert_eq!(placeholder_text_size(128.0), 128.0 / 6.0);
        assert_eq!(placeholder_text_size(0.0), MIN_PLACEHOLDER_TEXT);
        assert_eq!(placeholder_text_size(-10.0), MIN_PLACEHOLDER_TEXT);
        assert_eq!(placeholder_text_size(f32::NAN), MIN_PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_builds_both_badge_variants() {
        let logo = BadgeContent::for_platform(&StaticLogoProvider, "looker");
        let placeholder = BadgeContent::for_platform(&StaticLogoProvider, "snowflake");
        for content in [logo, placeholder] {
            for size in [0.0, 64.0, 128.0] {
                let _badge: Element<'_, ()> = platform_badge(&content, size);
            }
        }
    }

    #[test]
    fn test_badge_uses_injected_provider() {
        let badge = BadgeContent::for_platform(&AlwaysLooker, "snowflake");
        assert_eq!(badge, BadgeContent::Logo(LOOKER));
    }
}
