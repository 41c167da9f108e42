/// Placeholder the answer service emits when a chunk has no known origin.
pub const SOURCE_SENTINEL: &str = "N/A";

pub fn is_valid_source(source: &str) -> bool {
    !source.is_empty() && source != SOURCE_SENTINEL
}

/// Sources worth displaying, in their original order.
pub fn valid_sources(sources: &[String]) -> impl Iterator<Item = &str> {
    sources
        .iter()
        .map(String::as_str)
        .filter(|source| is_valid_source(source))
}

/// Human-readable title for a documentation URL.
///
/// Uses the last non-empty path segment without its `.html` suffix, with `-`
/// and `_` turned into spaces, percent-decoded. Falls back to the raw URL when
/// there is no segment or the segment does not decode.
pub fn page_title(url: &str) -> String {
    let Some(segment) = url.split('/').rev().find(|part| !part.is_empty()) else {
        return url.to_string();
    };
    let stem = segment.strip_suffix(".html").unwrap_or(segment);
    let spaced = stem.replace(&['-', '_'][..], " ");
    if !has_well_formed_escapes(&spaced) {
        return url.to_string();
    }
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => url.to_string(),
    }
}

// `%` must always be followed by two hex digits.
fn has_well_formed_escapes(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
