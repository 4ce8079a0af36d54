//! JSON report rendering.

use serde::Serialize;

use super::ReportMetadata;
use crate::error_handling::{QueryStatsSnapshot, ReportError};
use crate::models::ScanResult;

/// Top-level shape of a JSON report.
#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    elapsed_seconds: f64,
    stats: &'a QueryStatsSnapshot,
    #[serde(flatten)]
    result: &'a ScanResult,
}

/// Renders the scan result and run metadata as pretty-printed JSON.
pub fn render_json(result: &ScanResult, metadata: &ReportMetadata) -> Result<String, ReportError> {
    let report = JsonReport {
        generated_at: metadata.generated_at.to_rfc3339(),
        elapsed_seconds: metadata.elapsed_seconds,
        stats: &metadata.stats,
        result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::RecordKind;
    use crate::error_handling::QueryStats;
    use crate::models::{NeighborMap, ScanResultBuilder};
    use std::net::Ipv4Addr;

    #[test]
    fn test_render_json_shape() {
        let base = Ipv4Addr::new(203, 0, 113, 5);
        let mut builder = ScanResultBuilder::new("example.com");
        builder
            .record_set(RecordKind::A, vec!["203.0.113.5".into()])
            .record_set(RecordKind::Mx, vec!["mail.example.com".into()])
            .neighbors(base, NeighborMap::new());

        let stats = QueryStats::new();
        stats.record_query();
        stats.record_answer();
        let metadata = ReportMetadata::new(0.5, stats.snapshot());

        let json = render_json(&builder.build(), &metadata).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["target"], "example.com");
        assert_eq!(value["records"]["A"][0], "203.0.113.5");
        assert_eq!(value["records"]["MX"][0], "mail.example.com");
        assert!(value["records"]["TXT"].as_array().unwrap().is_empty());
        assert_eq!(value["neighbors"]["203.0.113.5"], serde_json::json!({}));
        assert_eq!(value["stats"]["queries"], 1);
        assert_eq!(value["stats"]["failures"]["query_timeout"], 0);
        assert!(value["generated_at"].is_string());
    }
}
