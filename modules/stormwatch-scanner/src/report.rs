use anyhow::Result;
use tracing::info;

use stormwatch_common::AlertReport;

/// Destination for flagged alerts. Implementations render and deliver
/// one report; a returned error skips that report only.
pub trait ReportSink: Send + Sync {
    fn publish(&self, report: &AlertReport) -> Result<()>;
}

/// Human-readable multi-line log rendering.
pub struct LogSink;

impl ReportSink for LogSink {
    fn publish(&self, report: &AlertReport) -> Result<()> {
        let terms = report
            .terms
            .iter()
            .map(|t| format!("\"{t}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let areas = report
            .regions
            .iter()
            .map(|r| format!("{} ({})", r.name, r.state.trim()))
            .collect::<Vec<_>>()
            .join(", ");

        info!(
            "Potential Event:\n\tTerms: {terms}\n\tDescription: {}\n\tAffected Areas: {areas}\n\tLink: {}",
            report.summary, report.link
        );
        Ok(())
    }
}

/// One JSON object per report, written to stdout.
pub struct JsonSink;

impl ReportSink for JsonSink {
    fn publish(&self, report: &AlertReport) -> Result<()> {
        let line = serde_json::to_string(report)?;
        println!("{line}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stormwatch_common::ResolvedRegion;

    fn sample_report() -> AlertReport {
        AlertReport {
            terms: vec!["hail".to_string()],
            summary: "large hail is possible".to_string(),
            regions: vec![ResolvedRegion {
                name: "Central Alabama".to_string(),
                state: " AL".to_string(),
            }],
            link: "http://example.test/a".to_string(),
        }
    }

    #[test]
    fn test_log_sink_publishes() {
        assert!(LogSink.publish(&sample_report()).is_ok());
    }

    #[test]
    fn test_json_sink_round_trips() {
        let report = sample_report();
        let line = serde_json::to_string(&report).unwrap();
        let back: AlertReport = serde_json::from_str(&line).unwrap();
        assert_eq!(back, report);
    }
}
