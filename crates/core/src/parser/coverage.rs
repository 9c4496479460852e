//! Decoder for `flow coverage --json` reports.
//!
//! Uncovered spans become warnings. Flow reports one span per
//! expression, so a single line can produce many; only the first span
//! on a line carries the explanatory message, the rest a ditto mark.

use super::json::FlowLoc;
use crate::types::{Diagnostic, Severity};
use serde::Deserialize;
use std::collections::HashSet;

/// Ditto mark used for repeated uncovered spans on the same line.
const DITTO: &str = "\u{3003}";

#[derive(Debug, Default, Deserialize)]
pub struct CoverageResult {
    #[serde(default)]
    pub expressions: Expressions,
}

#[derive(Debug, Default, Deserialize)]
pub struct Expressions {
    #[serde(default)]
    pub uncovered_locs: Vec<FlowLoc>,
    #[serde(default)]
    pub empty_locs: Vec<FlowLoc>,
}

/// Parse a coverage report into warnings.
///
/// Output that does not decode as a report (the original driver feeds
/// `{}` through when coverage is off) yields no diagnostics.
pub fn parse(raw: &str) -> Vec<Diagnostic> {
    let result = match serde_json::from_str::<CoverageResult>(raw) {
        Ok(result) => result,
        Err(err) => {
            tracing::info!("coverage output is not a JSON report: {err}");
            return Vec::new();
        }
    };

    let mut diagnostics = Vec::new();

    let mut seen_lines = HashSet::new();
    for loc in &result.expressions.uncovered_locs {
        diagnostics.push(span_warning(
            loc,
            "Code is not covered by Flow (any type)",
            &mut seen_lines,
        ));
    }

    let mut seen_lines = HashSet::new();
    for loc in &result.expressions.empty_locs {
        diagnostics.push(span_warning(
            loc,
            "Code is not covered by Flow (empty type)",
            &mut seen_lines,
        ));
    }

    diagnostics
}

fn span_warning(loc: &FlowLoc, full_message: &str, seen_lines: &mut HashSet<u32>) -> Diagnostic {
    let message = if seen_lines.insert(loc.start.line) {
        full_message.to_string()
    } else {
        DITTO.to_string()
    };

    Diagnostic {
        line: loc.start.line,
        column: loc.start.column,
        severity: Severity::Warning,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncovered_spans_become_warnings() {
        let raw = serde_json::json!({
            "expressions": {
                "covered_count": 10,
                "uncovered_locs": [{
                    "source": "foo.js",
                    "start": {"line": 5, "column": 3, "offset": 40},
                    "end": {"line": 5, "column": 8, "offset": 45}
                }],
                "empty_locs": []
            }
        })
        .to_string();

        let diagnostics = parse(&raw);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::warning(
                5,
                3,
                "Code is not covered by Flow (any type)"
            )]
        );
    }

    #[test]
    fn repeated_spans_on_one_line_use_a_ditto_mark() {
        let raw = serde_json::json!({
            "expressions": {
                "uncovered_locs": [
                    {
                        "source": "foo.js",
                        "start": {"line": 5, "column": 3, "offset": 40},
                        "end": {"line": 5, "column": 8, "offset": 45}
                    },
                    {
                        "source": "foo.js",
                        "start": {"line": 5, "column": 12, "offset": 49},
                        "end": {"line": 5, "column": 15, "offset": 52}
                    }
                ],
                "empty_locs": []
            }
        })
        .to_string();

        let diagnostics = parse(&raw);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics[0].message,
            "Code is not covered by Flow (any type)"
        );
        assert_eq!(diagnostics[1].message, "\u{3003}");
        assert_eq!(diagnostics[1].column, 12);
    }

    #[test]
    fn empty_locs_are_reported_separately() {
        let raw = serde_json::json!({
            "expressions": {
                "uncovered_locs": [],
                "empty_locs": [{
                    "source": "foo.js",
                    "start": {"line": 9, "column": 1, "offset": 80},
                    "end": {"line": 9, "column": 4, "offset": 83}
                }]
            }
        })
        .to_string();

        let diagnostics = parse(&raw);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::warning(
                9,
                1,
                "Code is not covered by Flow (empty type)"
            )]
        );
    }

    #[test]
    fn empty_object_yields_no_diagnostics() {
        assert!(parse("{}").is_empty());
    }

    #[test]
    fn non_json_output_yields_no_diagnostics() {
        assert!(parse("flow is still initializing").is_empty());
    }
}
