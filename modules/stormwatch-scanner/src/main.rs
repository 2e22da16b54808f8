use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stormwatch_common::{Config, ReportFormat};
use stormwatch_scanner::extractor::TermExtractor;
use stormwatch_scanner::feed::HazardFeedClient;
use stormwatch_scanner::index::ReferenceIndex;
use stormwatch_scanner::pipeline::AlertPipeline;
use stormwatch_scanner::refdata;
use stormwatch_scanner::report::{JsonSink, LogSink, ReportSink};
use stormwatch_scanner::resolver::RegionResolver;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("stormwatch=info".parse()?))
        .init();

    info!("Stormwatch scanner starting...");

    let config = Config::from_env();

    // Load reference tables and build the read-only index
    let zone_rows = refdata::load_zones(&config.zones_path)?;
    let county_rows = refdata::load_counties(&config.counties_path)?;
    let index = Arc::new(ReferenceIndex::build(zone_rows, county_rows));
    info!(
        zones = index.zone_count(),
        counties = index.county_count(),
        "Reference index built"
    );

    let sink: Box<dyn ReportSink> = match config.report_format {
        ReportFormat::Text => Box::new(LogSink),
        ReportFormat::Json => Box::new(JsonSink),
    };
    let pipeline = AlertPipeline::new(RegionResolver::new(index), TermExtractor::new(), sink);

    let client = HazardFeedClient::new();
    loop {
        let alerts = client.fetch(&config.feed_url).await?;
        let stats = pipeline.process(&alerts);
        info!("Scan complete. {stats}");

        match config.poll_secs {
            Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
            None => break,
        }
    }

    Ok(())
}
