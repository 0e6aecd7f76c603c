use crate::models::{EventLink, RawLink};

/// The circled-i icon (U+24D8) as it reads after its UTF-8 bytes were decoded
/// as Windows-1252.
pub const MISENCODED_INFO_GLYPH: &str = "\u{e2}\u{201c}\u{2dc}";

pub fn normalize_link(raw: &RawLink) -> EventLink {
    EventLink {
        title: raw.text.replace(MISENCODED_INFO_GLYPH, "Information"),
        url: raw.url.clone(),
    }
}

pub fn normalize_links(raw: &[RawLink]) -> Vec<EventLink> {
    raw.iter().map(normalize_link).collect()
}
