//! GPX output formatter
//!
//! Writes every input point and each center as a GPX 1.1 waypoint.

use crate::center::{CenterKind, Report};
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;

/// GPX formatter - outputs waypoints for map/GPS tools
pub struct GpxFormatter;

impl OutputFormatter for GpxFormatter {
    fn name(&self) -> &str {
        "gpx"
    }

    fn description(&self) -> &str {
        "GPX waypoint file"
    }

    fn format(&self, report: &Report, _config: &Config) -> Result<String> {
        let mut gpx = String::new();

        gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        gpx.push('\n');
        gpx.push_str(r#"<gpx version="1.1" creator="geo-center">"#);
        gpx.push('\n');

        gpx.push_str("  <metadata>\n");
        gpx.push_str(&format!(
            "    <name>Centers of {} points</name>\n",
            report.points.len()
        ));
        gpx.push_str("  </metadata>\n");

        for (i, point) in report.points.iter().enumerate() {
            gpx.push_str(&format!(
                r#"  <wpt lat="{}" lon="{}">"#,
                point.lat, point.lng
            ));
            gpx.push('\n');
            gpx.push_str(&format!("    <name>Input Point {}</name>\n", i + 1));
            gpx.push_str("    <sym>waypoint</sym>\n");
            gpx.push_str("  </wpt>\n");
        }

        for (kind, center) in report.centers.iter() {
            gpx.push_str(&format!(
                r#"  <wpt lat="{}" lon="{}">"#,
                center.lat, center.lng
            ));
            gpx.push('\n');
            gpx.push_str(&format!("    <name>{}</name>\n", kind.label()));
            gpx.push_str(&format!("    <desc>{}</desc>\n", kind.description()));

            let symbol = match kind {
                CenterKind::Centroid => "circle",
                CenterKind::Median => "flag",
                CenterKind::Weighted => "star",
            };
            gpx.push_str(&format!("    <sym>{}</sym>\n", symbol));

            gpx.push_str("  </wpt>\n");
        }

        gpx.push_str("</gpx>\n");
        Ok(gpx)
    }
}
