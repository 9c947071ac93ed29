//! Configuration health check

use crate::app::AppConfig;
use crate::deck::resolve_swipe_distance;
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that every profile loads and yields a usable swipe distance
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Checks the debug and release profiles
    pub fn new() -> Self {
        Self::with_profiles(vec!["debug", "release"])
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates profile loading and deck settings")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut failed = 0;
        let mut fallbacks = 0;

        for profile in &self.profiles {
            let config = match AppConfig::load(profile) {
                Ok(config) => config,
                Err(e) => {
                    details.push(format!("  ✗ Profile '{}': {}", profile, e));
                    failed += 1;
                    continue;
                }
            };

            let configured = config.deck.swipe_distance;
            let effective = resolve_swipe_distance(configured);
            if configured.is_some_and(|value| value != effective) {
                details.push(format!(
                    "  ⚠ Profile '{}': swipe distance {:?} is invalid, using {}",
                    profile, configured, effective
                ));
                fallbacks += 1;
            } else {
                details.push(format!(
                    "  ✓ Profile '{}': swipe distance {}",
                    profile, effective
                ));
            }
        }

        let details = details.join("\n");
        if failed > 0 {
            CheckResult::fail(format!("{} profile(s) failed to load", failed)).with_details(details)
        } else if fallbacks > 0 {
            CheckResult::warn("Invalid swipe distance configured").with_details(details)
        } else {
            CheckResult::pass(format!("{} profiles validated", self.profiles.len()))
                .with_details(details)
        }
    }
}
