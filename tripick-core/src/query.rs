//! The `areas=` query parameter carried between the picker and the
//! game pages: comma-joined, percent-encoded region labels.

use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Decode an `areas=` parameter value into region labels. Segments are
/// percent-decoded and trimmed; empty segments and undecodable bytes
/// are dropped rather than surfaced as errors.
#[must_use]
pub fn parse_areas(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|segment| {
            let decoded = percent_decode_str(segment).decode_utf8().ok()?;
            let trimmed = decoded.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

/// Encode region labels into an `areas=` parameter value. Commas join
/// the segments after each label is percent-encoded, so labels may
/// themselves not contain a literal comma once decoded.
#[must_use]
pub fn encode_areas(labels: &[String]) -> String {
    labels
        .iter()
        .map(|label| utf8_percent_encode(label, NON_ALPHANUMERIC).to_string())
        .collect::<Vec<_>>()
        .join(",")
}
