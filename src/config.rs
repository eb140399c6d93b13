//! Runtime settings
//!
//! The core only needs to know whether it may log. That decision is made
//! here, from the `LOGGING_ON` environment toggle and the `--quiet` flag,
//! and handed to the dispatcher and stream loop by value.

/// Environment variable switching logging on or off
pub const LOGGING_ENV_VAR: &str = "LOGGING_ON";

/// Toggle values that turn logging off (compared case-insensitively)
const FALSY: [&str; 4] = ["false", "0", "no", "off"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Whether informational and error lines are emitted
    pub verbose: bool,
}

impl Settings {
    /// Settings from the process environment and the quiet flag
    pub fn load(quiet: bool) -> Self {
        let toggle = std::env::var(LOGGING_ENV_VAR).ok();
        Self::resolve(quiet, toggle.as_deref())
    }

    /// Logging is on unless `quiet` is set or the toggle holds a falsy value.
    /// An unset toggle counts as `true`.
    pub fn resolve(quiet: bool, toggle: Option<&str>) -> Self {
        let toggle_on = toggle
            .map(|v| !FALSY.contains(&v.to_ascii_lowercase().as_str()))
            .unwrap_or(true);

        Self {
            verbose: !quiet && toggle_on,
        }
    }
}
