use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One announcement as lifted out of the listing markup, before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFragment {
    pub event_string: String,
    pub genre: String,
    pub links: Vec<RawLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLink {
    pub text: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub at: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<EventLink>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventLink {
    pub title: String,
    pub url: String,
}

impl Event {
    pub fn venue(&self) -> Option<&str> {
        if self.at.is_empty() {
            None
        } else {
            Some(&self.at)
        }
    }
}

impl RawFragment {
    pub fn new(event_string: impl Into<String>) -> Self {
        Self {
            event_string: event_string.into(),
            ..Self::default()
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_link(mut self, text: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.push(RawLink {
            text: text.into(),
            url: url.into(),
        });
        self
    }
}
