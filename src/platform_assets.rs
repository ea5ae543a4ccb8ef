// This module holds the data platform logos that ship inside the binary
// and the lookup from a platform name to its logo.
// Logos are stopgaps until the backend can push logos for every data platform type.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use log::debug;

// Embedded data platform logos (64x64 PNG files)
pub static LOOKER_LOGO: &[u8] = include_bytes!("../assets/lookerlogo.png");
pub static SUPERSET_LOGO: &[u8] = include_bytes!("../assets/supersetlogo.png");
pub static AIRFLOW_LOGO: &[u8] = include_bytes!("../assets/airflowlogo.png");
// Bundled but only resolvable with the `kafka-logo` feature
pub static KAFKA_LOGO: &[u8] = include_bytes!("../assets/kafkalogo.png");

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// A reference to one of the embedded logo images.
///
/// Values are only ever handed out from the static table below, so copying one
/// around is free. Two assets are equal when they carry the same platform key
/// and the same image bytes.
#[derive(Clone, Copy)]
pub struct LogoAsset {
    platform: &'static str,
    bytes: &'static [u8],
}

impl LogoAsset {
    const fn new(platform: &'static str, bytes: &'static [u8]) -> Self {
        Self { platform, bytes }
    }

    /// Canonical lowercase platform key this logo is registered under
    pub fn platform(&self) -> &'static str {
        self.platform
    }

    /// Raw encoded image bytes
    pub fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    pub fn is_png(&self) -> bool {
        self.bytes.starts_with(&PNG_SIGNATURE)
    }
}

impl PartialEq for LogoAsset {
    fn eq(&self, other: &Self) -> bool {
        self.platform == other.platform && self.bytes == other.bytes
    }
}

impl Eq for LogoAsset {}

impl fmt::Debug for LogoAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogoAsset")
            .field("platform", &self.platform)
            .field("len", &self.bytes.len())
            .finish()
    }
}

pub const LOOKER: LogoAsset = LogoAsset::new("looker", LOOKER_LOGO);
pub const SUPERSET: LogoAsset = LogoAsset::new("superset", SUPERSET_LOGO);
pub const AIRFLOW: LogoAsset = LogoAsset::new("airflow", AIRFLOW_LOGO);
pub const KAFKA: LogoAsset = LogoAsset::new("kafka", KAFKA_LOGO);

lazy_static! {
    // Keys are lowercase; built once and never mutated afterwards
    static ref LOGO_TABLE: HashMap<&'static str, LogoAsset> = {
        let mut table = HashMap::new();
        for asset in [LOOKER, SUPERSET, AIRFLOW] {
            table.insert(asset.platform, asset);
        }
        #[cfg(feature = "kafka-logo")]
        {
            table.insert(KAFKA.platform, KAFKA);
        }
        table
    };
}

/// Returns the logo for a data platform name, or `None` when there is no logo for it.
/// Matching is an exact, case-insensitive comparison against the known platform keys.
pub fn get_logo_from_platform(platform: &str) -> Option<LogoAsset> {
    let key = platform.to_lowercase();
    let logo = LOGO_TABLE.get(key.as_str()).copied();
    if logo.is_none() {
        debug!("No bundled logo for platform {:?}", platform);
    }
    logo
}

/// Sorted list of every platform key that resolves to a logo
pub fn known_platforms() -> Vec<&'static str> {
    let mut platforms: Vec<&'static str> = LOGO_TABLE.keys().copied().collect();
    platforms.sort_unstable();
    platforms
}
