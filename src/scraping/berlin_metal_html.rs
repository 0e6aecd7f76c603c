use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, warn};

use super::base;
use super::VenueScraper;
use crate::config::DEFAULT_SOURCE_URL;
use crate::models::{RawFragment, RawLink};

const VENUE_ID: &str = "berlin_metal";
const VENUE_NAME: &str = "Berlin Metal Konzerte";

static CONTAINER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div#scrollbar").expect("berlin metal container selector"));
static CONCERT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p.konzerte").expect("berlin metal concert selector"));
static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.konzertliste[href]").expect("berlin metal link selector"));

pub struct BerlinMetal {
    url: String,
}

impl BerlinMetal {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for BerlinMetal {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_URL)
    }
}

impl VenueScraper for BerlinMetal {
    fn venue_id(&self) -> &'static str {
        VENUE_ID
    }

    fn venue_name(&self) -> &'static str {
        VENUE_NAME
    }

    fn venue_url(&self) -> &str {
        &self.url
    }

    fn extract(&self, html: &str) -> Result<Vec<RawFragment>> {
        let document = Html::parse_document(html);
        let container = document
            .select(&CONTAINER_SELECTOR)
            .next()
            .ok_or_else(|| anyhow!("listing container not found on {}", self.url))?;

        let mut fragments = Vec::new();
        for paragraph in container.select(&CONCERT_SELECTOR) {
            let event_string = match base::first_text_child(&paragraph) {
                Some(text) => text,
                None => {
                    warn!(html = %paragraph.html(), "concert paragraph without leading text");
                    continue;
                }
            };

            let genre = base::next_element(&paragraph)
                .filter(|sibling| base::has_attr_value(sibling, "genre"))
                .and_then(|sibling| base::first_text_child(&sibling))
                .unwrap_or_default();

            let links = paragraph
                .select(&LINK_SELECTOR)
                .filter_map(|anchor| {
                    let url = anchor.value().attr("href")?;
                    Some(RawLink {
                        text: base::first_text_child(&anchor).unwrap_or_default(),
                        url: url.to_string(),
                    })
                })
                .collect();

            fragments.push(RawFragment {
                event_string,
                genre,
                links,
            });
        }

        debug!(count = fragments.len(), "extracted concert fragments");
        Ok(fragments)
    }
}
