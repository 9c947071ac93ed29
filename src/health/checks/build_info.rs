//! Build information health check

use crate::build_info;
use crate::health::check::{CheckResult, SystemCheck};

/// Reports the build metadata baked in at compile time
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Reports compiler, target and commit metadata")
    }

    fn check(&self) -> CheckResult {
        let details = build_info::detailed_info()
            .lines()
            .map(|line| format!("  {}", line))
            .collect::<Vec<_>>()
            .join("\n");

        if !build_info::has_git_commit() {
            return CheckResult::warn("Built outside a git checkout").with_details(details);
        }
        if build_info::is_git_dirty() {
            return CheckResult::pass(format!("{} (dirty)", build_info::version_string()))
                .with_details(details);
        }
        CheckResult::pass(build_info::version_string()).with_details(details)
    }
}
