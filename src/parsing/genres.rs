/// Splits a genre annotation like `"(Death Metal; Thrash; ?)"` into tags.
///
/// Tags of at most one character are dropped; the listing uses `?` for an
/// unknown genre.
pub fn parse_genres(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    let inner = raw.strip_prefix('(').unwrap_or(raw);
    let inner = inner.strip_suffix(')').unwrap_or(inner);

    inner
        .split(';')
        .map(str::trim)
        .filter(|genre| genre.chars().count() > 1)
        .map(str::to_string)
        .collect()
}
