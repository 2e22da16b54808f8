use tracing::warn;

use stormwatch_common::{AlertItem, AlertReport, ScanStats};

use crate::extractor::TermExtractor;
use crate::report::ReportSink;
use crate::resolver::RegionResolver;

/// Per-alert orchestration: resolve regions, extract terms, publish when
/// at least one hazard phrase was found.
pub struct AlertPipeline {
    resolver: RegionResolver,
    extractor: TermExtractor,
    sink: Box<dyn ReportSink>,
}

impl AlertPipeline {
    pub fn new(resolver: RegionResolver, extractor: TermExtractor, sink: Box<dyn ReportSink>) -> Self {
        Self {
            resolver,
            extractor,
            sink,
        }
    }

    /// Process alerts in feed order. Alerts without hazard terms are
    /// discarded silently; a sink failure skips that report and moves on.
    pub fn process(&self, alerts: &[AlertItem]) -> ScanStats {
        let mut stats = ScanStats::default();

        for alert in alerts {
            stats.alerts_seen += 1;

            let regions = self.resolver.resolve(&alert.geocode, &alert.link);
            let terms = self.extractor.extract(&alert.summary);
            if terms.is_empty() {
                continue;
            }
            stats.flagged += 1;

            let report = AlertReport {
                terms,
                summary: alert.summary.clone(),
                regions,
                link: alert.link.clone(),
            };
            if let Err(e) = self.sink.publish(&report) {
                warn!(link = alert.link, error = %e, "Failed to publish alert report");
                stats.report_failures += 1;
            }
        }

        stats
    }
}
