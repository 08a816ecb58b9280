//! URL path builders for every page of the site.
//!
//! Region names are free text and are percent-encoded the way browsers'
//! `encodeURIComponent` does it. Years are plain base-10 integers and event or
//! participant ids are assumed to be URL-safe already, so both pass through.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is by `encodeURIComponent`: A-Z a-z 0-9 - _ . ! ~ * ' ( )
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a free-text value for use as a single path segment.
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT_ENCODE_SET).to_string()
}

/// Decode a path segment produced by [`encode_segment`].
///
/// A segment that does not decode to valid UTF-8 is returned unchanged.
pub fn decode_segment(segment: &str) -> String {
    match percent_decode_str(segment).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.to_string(),
    }
}

pub fn region_path(region: &str) -> String {
    format!("/region/{}", encode_segment(region))
}

pub fn year_path(region: &str, year: i32) -> String {
    format!("{}/year/{}", region_path(region), year)
}

pub fn event_path(region: &str, year: i32, event_id: &str) -> String {
    format!("{}/event/{}", year_path(region, year), event_id)
}

pub fn participant_path(region: &str, year: i32, event_id: &str, participant_id: &str) -> String {
    format!(
        "{}/participant/{}",
        event_path(region, year, event_id),
        participant_id
    )
}
