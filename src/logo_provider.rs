// Call sites ask a LogoProvider for logos instead of reaching into platform_assets,
// so the embedded table can later be swapped for logos pushed by the backend.

use crate::platform_assets::{self, LogoAsset};

/// Source of data platform logos
pub trait LogoProvider: Send + Sync {
    /// Logo for `platform`, or `None` when the provider has no logo for it
    fn logo_for(&self, platform: &str) -> Option<LogoAsset>;

    /// Platform keys this provider can resolve
    fn platforms(&self) -> Vec<&'static str>;
}

/// Provider backed by the logos embedded at build time
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticLogoProvider;

impl LogoProvider for StaticLogoProvider {
    fn logo_for(&self, platform: &str) -> Option<LogoAsset> {
        platform_assets::get_logo_from_platform(platform)
    }

    fn platforms(&self) -> Vec<&'static str> {
        platform_assets::known_platforms()
    }
}
