use super::EventParseError;

/// Pieces of an announcement line such as `"04-12 Bolt Thrower @SO36"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventParts<'a> {
    pub date_token: &'a str,
    pub title: &'a str,
    pub at: &'a str,
}

/// Splits an announcement into date token, title and venue.
///
/// Surrounding `@` and spaces are dropped first. The date token ends at the
/// first space and the venue starts after the first `@`; whitespace around
/// title and venue is left for the caller.
pub fn cut_event_string(event_string: &str) -> Result<EventParts<'_>, EventParseError> {
    let trimmed = event_string.trim_matches(|c: char| c == '@' || c == ' ');
    let (date_token, remainder) = trimmed
        .split_once(' ')
        .ok_or_else(|| EventParseError::MalformedEventString(event_string.to_string()))?;
    let (title, at) = remainder.split_once('@').unwrap_or((remainder, ""));

    Ok(EventParts {
        date_token,
        title,
        at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_date_title_and_venue() {
        let parts = cut_event_string("@ 06-15 Some Band @Club Name").expect("cut");
        assert_eq!(parts.date_token, "06-15");
        assert_eq!(parts.title, "Some Band ");
        assert_eq!(parts.at, "Club Name");
    }

    #[test]
    fn missing_venue_leaves_at_empty() {
        let parts = cut_event_string("06-15 Solo Title").expect("cut");
        assert_eq!(parts.date_token, "06-15");
        assert_eq!(parts.title, "Solo Title");
        assert_eq!(parts.at, "");
    }

    #[test]
    fn only_first_at_separates_venue() {
        let parts = cut_event_string("11-02 Kreator + Guests @Huxleys @ Neukoelln").expect("cut");
        assert_eq!(parts.title, "Kreator + Guests ");
        assert_eq!(parts.at, "Huxleys @ Neukoelln");
    }

    #[test]
    fn trailing_markers_are_trimmed_before_cutting() {
        let parts = cut_event_string("  09-01 Festival Warmup @ ").expect("cut");
        assert_eq!(parts.date_token, "09-01");
        assert_eq!(parts.title, "Festival Warmup");
        assert_eq!(parts.at, "");
    }

    #[test]
    fn no_space_is_malformed() {
        let err = cut_event_string("malformed").unwrap_err();
        assert_eq!(
            err,
            EventParseError::MalformedEventString("malformed".to_string())
        );
    }

    #[test]
    fn only_markers_is_malformed() {
        assert!(cut_event_string("@ @ ").is_err());
        assert!(cut_event_string("").is_err());
    }
}
