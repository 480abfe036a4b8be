//! JSON output formatter

use crate::center::Report;
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;

/// JSON formatter - outputs the full report as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Points and all centers as JSON"
    }

    fn format(&self, report: &Report, _config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::tests::create_test_report;

    #[test]
    fn test_json_format() {
        let formatter = JsonFormatter;
        let report = create_test_report();

        let output = formatter.format(&report, &Config::default()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["points"].as_array().unwrap().len(), 3);
        assert!(parsed["centers"].get("centroid").is_some());
        assert!(parsed["centers"].get("geometric_median").is_some());
        assert!(parsed["centers"].get("weighted_center").is_some());
        assert_eq!(parsed["points"][1]["lng"].as_f64(), Some(20.2));
    }

    #[test]
    fn test_json_roundtrip() {
        let report = create_test_report();
        let output = JsonFormatter.format(&report, &Config::default()).unwrap();
        let back: Report = serde_json::from_str(&output).unwrap();
        assert_eq!(back.points, report.points);
    }

    #[test]
    fn test_json_formatter_info() {
        let formatter = JsonFormatter;
        assert_eq!(formatter.name(), "json");
        assert!(!formatter.description().is_empty());
    }
}
