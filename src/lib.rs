// Embedded data platform logos and the lookup from a platform name to its logo,
// plus the iced badge widgets that render them.

pub mod badge;
pub mod config;
pub mod logo_provider;
pub mod platform_assets;
pub mod state;
pub mod styles;

pub use logo_provider::{LogoProvider, StaticLogoProvider};
pub use platform_assets::{get_logo_from_platform, known_platforms, LogoAsset};
