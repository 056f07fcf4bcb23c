//! Description content filtering.
//!
//! Endpoint descriptions can run to multiple kilobytes of markdown; the
//! styles here are the size-control lever for detail payloads.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// How much of an endpoint description to return.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionStyle {
    /// Verbatim text.
    Full,
    /// Omit the field entirely.
    None,
    /// Summary paragraph plus markdown heading lines with their line
    /// numbers, so a follow-up `line_range` request can drill in.
    #[default]
    SummaryAndHeaders,
    /// 1-indexed inclusive line slice; bounds clamp to the actual line
    /// count and a start past the end yields an empty string.
    LineRange,
}

/// Applies a description style. `None` style yields `Option::None` so the
/// field is dropped from the serialized payload.
pub(crate) fn filter_description(
    text: &str,
    style: DescriptionStyle,
    line_start: Option<usize>,
    line_end: Option<usize>,
) -> Option<String> {
    match style {
        DescriptionStyle::Full => Some(text.to_string()),
        DescriptionStyle::None => None,
        DescriptionStyle::SummaryAndHeaders => Some(summary_and_headers(text)),
        DescriptionStyle::LineRange => {
            if line_start.is_none() && line_end.is_none() {
                // No range requested; serve the full text.
                Some(text.to_string())
            } else {
                Some(line_range(text, line_start, line_end))
            }
        }
    }
}

/// A heading is a markdown `#` line or a standalone bold line.
fn is_heading(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('#')
        || (trimmed.starts_with("**") && trimmed.ends_with("**") && trimmed.len() > 4)
}

fn summary_and_headers(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = text.lines().collect();
    let first_heading = lines.iter().position(|l| is_heading(l));

    let summary = match first_heading {
        Some(idx) => lines[..idx].join("\n"),
        None => text.to_string(),
    };

    let mut out = String::new();
    if !summary.trim().is_empty() {
        out.push_str("=== Summary ===\n");
        out.push_str(summary.trim_end());
    }

    let headings: Vec<String> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| is_heading(l))
        .map(|(idx, l)| format!("{:>4}: {}", idx + 1, l.trim()))
        .collect();
    if !headings.is_empty() {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str("=== Headers ===\n");
        out.push_str(&headings.join("\n"));
    }

    out
}

fn line_range(text: &str, line_start: Option<usize>, line_end: Option<usize>) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let total = lines.len();

    let start = line_start.unwrap_or(1).max(1);
    let end = line_end.unwrap_or(total).min(total);
    if start > total || end < start {
        return String::new();
    }

    lines[start - 1..end].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::fixture;

    #[fixture]
    fn description() -> String {
        [
            "This endpoint issues access tokens for a client.",
            "",
            "It supports authorization code and PKCE flows.",
            "",
            "## Parameters",
            "",
            "- grant_type: the grant type",
            "",
            "**Security Notes**",
            "",
            "Always validate redirect URIs.",
        ]
        .join("\n")
    }

    #[rstest::rstest]
    fn none_style_omits_field(description: String) {
        check!(filter_description(&description, DescriptionStyle::None, None, None) == None);
    }

    #[rstest::rstest]
    fn full_style_is_verbatim(description: String) {
        let result = filter_description(&description, DescriptionStyle::Full, None, None);
        check!(result == Some(description));
    }

    #[rstest::rstest]
    fn summary_and_headers_keeps_structure_only(description: String) {
        let result =
            filter_description(&description, DescriptionStyle::SummaryAndHeaders, None, None)
                .unwrap();
        check!(result.contains("=== Summary ==="));
        check!(result.contains("issues access tokens"));
        check!(result.contains("=== Headers ==="));
        check!(result.contains(": ## Parameters"));
        check!(result.contains(": **Security Notes**"));
        // Body content under headings is dropped.
        check!(!result.contains("grant_type"));
        check!(!result.contains("validate redirect URIs"));
    }

    #[test]
    fn summary_and_headers_without_headings_keeps_full_text() {
        let text = "Just a plain description.\n\nNo headings anywhere.";
        let result =
            filter_description(text, DescriptionStyle::SummaryAndHeaders, None, None).unwrap();
        check!(result.contains("=== Summary ==="));
        check!(result.contains("No headings anywhere."));
        check!(!result.contains("=== Headers ==="));
    }

    #[test]
    fn summary_and_headers_starting_with_heading_has_no_summary() {
        let text = "## First\n\ncontent\n\n## Second\n\nmore";
        let result =
            filter_description(text, DescriptionStyle::SummaryAndHeaders, None, None).unwrap();
        check!(!result.contains("=== Summary ==="));
        check!(result.contains("=== Headers ==="));
        check!(result.contains(": ## First"));
        check!(result.contains(": ## Second"));
    }

    #[rstest::rstest]
    fn line_range_slices_inclusively(description: String) {
        let result =
            filter_description(&description, DescriptionStyle::LineRange, Some(1), Some(3))
                .unwrap();
        check!(result.lines().count() == 3);
        check!(result.starts_with("This endpoint issues"));
    }

    #[test]
    fn line_range_clamps_to_actual_length() {
        let text = "one\ntwo\nthree\nfour\nfive";
        let result =
            filter_description(text, DescriptionStyle::LineRange, Some(1), Some(10_000)).unwrap();
        check!(result == text);
    }

    #[test]
    fn line_range_past_end_is_empty_not_an_error() {
        let text = "one\ntwo";
        let result =
            filter_description(text, DescriptionStyle::LineRange, Some(1000), Some(1005)).unwrap();
        check!(result == "");
    }

    #[test]
    fn line_range_without_bounds_serves_full_text() {
        let text = "one\ntwo\nthree";
        let result = filter_description(text, DescriptionStyle::LineRange, None, None).unwrap();
        check!(result == text);
    }
}
