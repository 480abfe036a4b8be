//! Human-readable text output formatter

use crate::center::Report;
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, report: &Report, _config: &Config) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("Points: {}\n\n", report.points.len()));

        output.push_str("Centers:\n");
        for (kind, center) in report.centers.iter() {
            output.push_str(&format!(
                "  {:<17} ({:.6}, {:.6})\n",
                format!("{}:", kind.label()),
                center.lat,
                center.lng
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::tests::create_test_report;

    #[test]
    fn test_text_format() {
        let formatter = TextFormatter;
        let report = create_test_report();

        let output = formatter.format(&report, &Config::default()).unwrap();

        assert!(output.contains("Points: 3"));
        assert!(output.contains("Centroid:"));
        assert!(output.contains("Geometric Median:"));
        assert!(output.contains("Weighted Center:"));
        assert!(output.contains("(10.066667, 20.066667)"));
    }

    #[test]
    fn test_text_formatter_info() {
        let formatter = TextFormatter;
        assert_eq!(formatter.name(), "text");
        assert!(!formatter.description().is_empty());
    }
}
