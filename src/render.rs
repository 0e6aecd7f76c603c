use std::fmt::Write as _;

use anyhow::Result;

use crate::models::Event;

/// Human-readable listing, one block per event.
pub fn render_text(events: &[Event]) -> String {
    let mut out = String::new();
    for event in events {
        let _ = write!(
            out,
            "\n{}\n{}\n{}\n",
            event.date.format("%Y-%m-%d"),
            event.title,
            event.genres.join(", ")
        );
        if let Some(venue) = event.venue() {
            let _ = writeln!(out, "{venue}");
        }
        for link in &event.links {
            let _ = writeln!(out, "{}: {}", link.title, link.url);
        }
    }
    out
}

pub fn render_json(events: &[Event], pretty: bool) -> Result<String> {
    let output = if pretty {
        serde_json::to_string_pretty(events)?
    } else {
        serde_json::to_string(events)?
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventLink;
    use chrono::NaiveDate;
    use serde_json::json;

    fn sample() -> Vec<Event> {
        vec![
            Event {
                title: "Bolt Thrower".to_string(),
                at: "SO36".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
                genres: vec!["Death Metal".to_string(), "Grind".to_string()],
                links: vec![EventLink {
                    title: "Information".to_string(),
                    url: "https://berlinmetal.eu/info/17".to_string(),
                }],
            },
            Event {
                title: "Midsummer Doom".to_string(),
                at: String::new(),
                date: NaiveDate::from_ymd_opt(2024, 7, 2).unwrap(),
                genres: Vec::new(),
                links: Vec::new(),
            },
        ]
    }

    #[test]
    fn text_lists_each_event() {
        let text = render_text(&sample());
        assert_eq!(
            text,
            "\n2024-06-20\nBolt Thrower\nDeath Metal, Grind\nSO36\nInformation: https://berlinmetal.eu/info/17\n\
             \n2024-07-02\nMidsummer Doom\n\n"
        );
    }

    #[test]
    fn json_omits_empty_venue_and_links() {
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&sample(), false).expect("json")).expect("parse");
        assert_eq!(
            value,
            json!([
                {
                    "title": "Bolt Thrower",
                    "at": "SO36",
                    "date": "2024-06-20",
                    "genres": ["Death Metal", "Grind"],
                    "links": [{ "title": "Information", "url": "https://berlinmetal.eu/info/17" }]
                },
                {
                    "title": "Midsummer Doom",
                    "date": "2024-07-02",
                    "genres": []
                }
            ])
        );
    }

    #[test]
    fn pretty_json_reads_back() {
        let events = sample();
        let pretty = render_json(&events, true).expect("json");
        assert!(pretty.contains('\n'));
        let back: Vec<Event> = serde_json::from_str(&pretty).expect("parse");
        assert_eq!(back, events);
    }

    #[test]
    fn no_events_render_empty() {
        assert_eq!(render_text(&[]), "");
        assert_eq!(render_json(&[], false).expect("json"), "[]");
    }
}
