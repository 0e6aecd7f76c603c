pub mod base;
pub mod berlin_metal_html;

use anyhow::Result;
use reqwest::blocking::Client;

use crate::models::RawFragment;

pub use berlin_metal_html::BerlinMetal;

pub trait VenueScraper: Send + Sync {
    fn venue_id(&self) -> &'static str;
    fn venue_name(&self) -> &'static str;
    fn venue_url(&self) -> &str;

    /// Pulls the raw announcement fragments out of a listing page.
    fn extract(&self, html: &str) -> Result<Vec<RawFragment>>;

    fn fetch(&self, client: &Client) -> Result<Vec<RawFragment>> {
        let html = base::fetch_html(client, self.venue_url())?;
        self.extract(&html)
    }
}
