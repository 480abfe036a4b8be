//! URL output formatter

use crate::center::{CenterKind, Report};
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;

/// URL formatter - outputs a map URL for one center
///
/// Without overrides the center comes from `defaults.center` and the
/// provider from `url.default`.
#[derive(Debug, Default)]
pub struct UrlFormatter {
    /// Center to link to instead of the configured default
    pub center: Option<CenterKind>,
    /// URL provider instead of the configured default
    pub provider: Option<String>,
}

impl UrlFormatter {
    /// Formatter with explicit center and provider choices
    pub fn with_options(center: Option<CenterKind>, provider: Option<String>) -> Self {
        Self { center, provider }
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL for the selected center"
    }

    fn format(&self, report: &Report, config: &Config) -> Result<String> {
        let kind = match self.center {
            Some(kind) => kind,
            None => config.default_center()?,
        };
        let center = report.centers.get(kind);
        config.format_url(self.provider.as_deref(), center.lat, center.lng)
    }
}
