//! Feed reader bridging the XML tokenizer to the outage handler
//!
//! This module owns the only quick-xml-facing code in the crate: it drains
//! tokenizer events, translates them into the handler's push calls, and
//! enforces the two-tier failure policy. Field-level problems degrade
//! gracefully inside the handler; tokenizer-level failures are fatal and, by
//! default, discard everything accumulated before the failure.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{info, warn};

use super::handler::OutageHandler;
use super::stats::ParseResult;
use crate::config::ParseConfig;
use crate::{Error, Result};

/// Outage feed parser
///
/// Wraps the streaming handler with a tokenizer event loop. The parser holds
/// only configuration and can be reused across feeds; per-parse state lives
/// in the handler created for each call.
#[derive(Debug, Clone, Default)]
pub struct OutageFeedParser {
    config: ParseConfig,
}

impl OutageFeedParser {
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Parse a feed file from disk
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing outage feed: {}", path.display());

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open feed {}", path.display()), e))?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parse a feed held in memory
    pub fn parse_str(&self, feed: &str) -> Result<ParseResult> {
        self.parse_reader(feed.as_bytes())
    }

    /// Parse a feed from any buffered reader
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParseResult> {
        let mut xml = Reader::from_reader(reader);
        let mut handler = OutageHandler::new(&self.config);
        let mut buf = Vec::new();

        let outcome = loop {
            match xml.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match decode_start(&e) {
                    Ok((name, attributes)) => handler.start_element(&name, &attributes),
                    Err(e) => break Err(e),
                },
                Ok(Event::Empty(e)) => match decode_start(&e) {
                    Ok((name, attributes)) => {
                        handler.start_element(&name, &attributes);
                        handler.end_element(&name);
                    }
                    Err(e) => break Err(e),
                },
                Ok(Event::Text(e)) => match e.unescape() {
                    Ok(text) => handler.characters(&text),
                    Err(e) => break Err(e),
                },
                Ok(Event::CData(e)) => handler.characters(&String::from_utf8_lossy(&e)),
                Ok(Event::End(e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    handler.end_element(&name);
                }
                Ok(Event::Eof) => break Ok(()),
                Ok(_) => {}
                Err(e) => break Err(e),
            }
            buf.clear();
        };

        match outcome {
            Ok(()) => {
                let result = handler.finish();
                info!(
                    "Parsed {} outages ({} duplicates suppressed, {} field errors)",
                    result.stats.outages_parsed,
                    result.stats.duplicates_suppressed,
                    result.stats.field_errors
                );
                Ok(result)
            }
            Err(e) => self.structural_failure(handler, e, xml.buffer_position()),
        }
    }

    /// Apply the structural-failure policy: discard, or salvage when asked
    fn structural_failure(
        &self,
        handler: OutageHandler,
        source: quick_xml::Error,
        position: u64,
    ) -> Result<ParseResult> {
        if self.config.salvage_partial {
            let mut result = handler.finish();
            warn!(
                "Feed broke off at byte {}: {}; keeping {} salvaged records",
                position,
                source,
                result.outages.len()
            );
            result
                .stats
                .errors
                .push(format!("XML parse error at byte {}: {}", position, source));
            Ok(result)
        } else {
            Err(Error::xml_parsing(
                format!("XML parse error at byte {}", position),
                source,
            ))
        }
    }
}

/// Decode an element-open token into the handler's event contract
fn decode_start(
    e: &BytesStart,
) -> std::result::Result<(String, HashMap<String, String>), quick_xml::Error> {
    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();

    let mut attributes = HashMap::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.insert(key, value);
    }

    Ok((name, attributes))
}
