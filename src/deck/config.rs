//! Deck configuration

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::state::parse_swipe_distance;

/// Deck settings as they appear in the application config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Swipe distance in logical pixels; missing or invalid means default
    #[serde(default, deserialize_with = "lenient_swipe_distance")]
    pub swipe_distance: Option<f32>,
    /// Whether to install the default overlay/badge affordances
    #[serde(default = "default_affordances")]
    pub default_affordances: bool,
}

fn default_affordances() -> bool {
    true
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            swipe_distance: None,
            default_affordances: default_affordances(),
        }
    }
}

/// Any shape a swipe distance may take in a config source
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSwipeDistance {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Accept numbers and numeric strings; anything else means default
///
/// Environment variables arrive as strings, and a bad value must not stop
/// the application from loading.
fn lenient_swipe_distance<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let distance = match RawSwipeDistance::deserialize(deserializer)? {
        RawSwipeDistance::Number(value) => Some(value as f32),
        RawSwipeDistance::Text(text) => {
            let parsed = parse_swipe_distance(&text);
            if parsed.is_none() {
                warn!(value = %text, "Unparseable swipe distance in config, default applies");
            }
            parsed
        }
        RawSwipeDistance::Other(_) => {
            warn!("Swipe distance in config is not a number, default applies");
            None
        }
    };
    Ok(distance)
}
