pub mod cutter;
pub mod date;
pub mod genres;
pub mod links;

use chrono::{DateTime, TimeZone};
use tracing::info;

use crate::models::{Event, RawFragment};

pub use cutter::{cut_event_string, EventParts};
pub use date::resolve_date;
pub use genres::parse_genres;
pub use links::{normalize_link, normalize_links};

/// Why a single fragment was left out of the results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventParseError {
    #[error("malformed event string {0:?}: missing date/title separator")]
    MalformedEventString(String),
    #[error("malformed event date {0:?}; expected mm-dd")]
    MalformedDateToken(String),
    #[error("invalid {component} {value:?} in event date")]
    InvalidDateComponent {
        component: &'static str,
        value: String,
    },
    #[error("event date {0:?} is outside the supported calendar")]
    DateOutOfRange(String),
    #[error("event string {0:?} has no title")]
    MissingTitle(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFragment {
    pub index: usize,
    pub raw: String,
    pub error: EventParseError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub events: Vec<Event>,
    pub skipped: Vec<SkippedFragment>,
}

pub fn parse_fragment<Tz: TimeZone>(
    fragment: &RawFragment,
    now: &DateTime<Tz>,
) -> Result<Event, EventParseError> {
    let parts = cut_event_string(&fragment.event_string)?;
    let date = resolve_date(parts.date_token, now)?;

    let title = parts.title.trim();
    if title.is_empty() {
        return Err(EventParseError::MissingTitle(fragment.event_string.clone()));
    }

    Ok(Event {
        title: title.to_string(),
        at: parts.at.trim().to_string(),
        date,
        genres: parse_genres(&fragment.genre),
        links: normalize_links(&fragment.links),
    })
}

/// Parses every fragment, keeping input order. Failures never abort the batch.
pub fn parse_fragments<Tz: TimeZone>(fragments: &[RawFragment], now: &DateTime<Tz>) -> ParseReport {
    let mut report = ParseReport::default();

    for (index, fragment) in fragments.iter().enumerate() {
        match parse_fragment(fragment, now) {
            Ok(event) => report.events.push(event),
            Err(error) => {
                info!(index, raw = %fragment.event_string, %error, "skipping unparseable event");
                report.skipped.push(SkippedFragment {
                    index,
                    raw: fragment.event_string.clone(),
                    error,
                });
            }
        }
    }

    report
}

pub fn parse_events<Tz: TimeZone>(fragments: &[RawFragment], now: &DateTime<Tz>) -> Vec<Event> {
    parse_fragments(fragments, now).events
}
