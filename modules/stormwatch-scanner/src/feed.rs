//! CAP Atom feed client.
//!
//! General-purpose feed parsers drop the `cap:` extension namespace, and
//! the `cap:geocode` blocks are the payload here, so the document is read
//! with a raw XML event loop instead.

use std::time::Duration;

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::info;

use stormwatch_common::{AlertItem, GeocodeBlock};

pub struct HazardFeedClient {
    client: reqwest::Client,
}

impl HazardFeedClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to build hazard feed HTTP client");
        Self { client }
    }

    /// Fetch and parse the CAP Atom feed into alert items, in feed order.
    pub async fn fetch(&self, feed_url: &str) -> Result<Vec<AlertItem>> {
        let resp = self
            .client
            .get(feed_url)
            .header("User-Agent", "stormwatch-scanner/0.1")
            .send()
            .await
            .context("Hazard feed fetch failed")?;

        let body = resp.text().await.context("Failed to read hazard feed body")?;
        let alerts = parse_feed(&body)?;

        info!(feed_url, alerts = alerts.len(), "feed: parsed successfully");
        Ok(alerts)
    }
}

impl Default for HazardFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Which entry-level text node is currently open.
enum Field {
    Summary,
    ValueName,
    Value,
}

/// Parse a CAP Atom document. Per entry: `<summary>`, the `<link href>`
/// attribute, and every `<cap:geocode>` block's ordered valueName/value
/// children. Unknown elements are skipped; a malformed document is an
/// error.
pub fn parse_feed(xml: &str) -> Result<Vec<AlertItem>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut alerts = Vec::new();
    let mut entry: Option<AlertItem> = None;
    let mut in_geocode = false;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event().context("Failed to parse hazard feed XML")? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"entry" => entry = Some(AlertItem::default()),
                b"geocode" => {
                    if let Some(entry) = entry.as_mut() {
                        entry.geocode.push(GeocodeBlock::default());
                        in_geocode = true;
                    }
                }
                b"summary" if entry.is_some() && !in_geocode => field = Some(Field::Summary),
                b"valueName" if in_geocode => field = Some(Field::ValueName),
                b"value" if in_geocode => field = Some(Field::Value),
                b"link" => {
                    if let Some(entry) = entry.as_mut() {
                        read_href(&e, &mut entry.link)?;
                    }
                }
                _ => {}
            },
            Event::Empty(e) => {
                if e.local_name().as_ref() == b"link" {
                    if let Some(entry) = entry.as_mut() {
                        read_href(&e, &mut entry.link)?;
                    }
                }
            }
            Event::Text(t) => {
                if let (Some(field), Some(entry)) = (&field, entry.as_mut()) {
                    let text = t.unescape().context("Failed to decode feed text")?;
                    append_field(entry, field, &text, in_geocode);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"entry" => {
                    if let Some(done) = entry.take() {
                        alerts.push(done);
                    }
                }
                b"geocode" => in_geocode = false,
                b"summary" | b"valueName" | b"value" => field = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(alerts)
}

fn read_href(e: &quick_xml::events::BytesStart<'_>, link: &mut String) -> Result<()> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"href" {
            *link = attr
                .unescape_value()
                .context("Failed to decode link href")?
                .into_owned();
        }
    }
    Ok(())
}

fn append_field(entry: &mut AlertItem, field: &Field, text: &str, in_geocode: bool) {
    match field {
        Field::Summary => entry.summary.push_str(text),
        Field::ValueName if in_geocode => {
            if let Some(block) = entry.geocode.last_mut() {
                block.value_names.push(text.to_string());
            }
        }
        Field::Value if in_geocode => {
            if let Some(block) = entry.geocode.last_mut() {
                block.values.push(text.to_string());
            }
        }
        _ => {}
    }
}
