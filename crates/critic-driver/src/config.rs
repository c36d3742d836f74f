use serde::Deserialize;

use crate::CriticError;

/// Environment switch that enables timing output regardless of the config.
pub const TRACE_TIMING_ENV: &str = "CRITIC_TRACE_TIMING";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LintConfig {
    /// Run checkers concurrently; the report is the same either way.
    pub parallel: bool,
    /// Turn checker faults into an error instead of reporting them alongside
    /// the diagnostics.
    pub fail_on_fault: bool,
    pub trace_timing: bool,
    /// Report every diagnostic with error severity.
    pub warnings_as_errors: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CriticToml {
    #[serde(default)]
    lint: LintConfig,
}

impl LintConfig {
    /// Parses the `[lint]` table of a TOML document. A missing table yields
    /// the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, CriticError> {
        let parsed: CriticToml = toml::from_str(text)?;
        Ok(parsed.lint)
    }

    pub fn trace_timing_enabled(&self) -> bool {
        self.trace_timing || std::env::var(TRACE_TIMING_ENV).is_ok_and(|v| v == "1")
    }
}
