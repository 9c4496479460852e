//! Parser for Flow's classic plain-text error listing.
//!
//! Pinned line format: `path:line:col[,endcol]: message`, optionally
//! prefixed with an `error:` or `warning:` label. A line indented with
//! whitespace continues the message of the diagnostic above it.

use crate::types::{Diagnostic, Severity};
use regex::Regex;
use std::sync::OnceLock;

fn diagnostic_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<file>[^\s:][^:]*):(?P<line>\d+):(?P<col>\d+)(?:,(?P<end>\d+))?:\s*(?P<msg>.+)$")
            .expect("diagnostic line pattern is valid")
    })
}

/// Parse the checker's plain-text output into diagnostics.
///
/// Lines that do not match the pinned format are summary or status
/// noise from the checker and are skipped. Empty input yields an empty
/// list, the normal no-issues outcome.
pub fn parse(raw: &str) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    for line in raw.lines() {
        if let Some(caps) = diagnostic_line_re().captures(line) {
            let Ok(line_num) = caps["line"].parse::<u32>() else {
                continue;
            };
            let Ok(column) = caps["col"].parse::<u32>() else {
                continue;
            };

            let (severity, message) = split_severity(caps["msg"].trim());
            diagnostics.push(Diagnostic {
                line: line_num,
                column,
                severity,
                message,
            });
        } else if is_continuation(line) {
            if let Some(last) = diagnostics.last_mut() {
                last.message.push(' ');
                last.message.push_str(line.trim());
            }
        }
    }

    diagnostics
}

/// A continuation line carries trailing message text indented under
/// the diagnostic it belongs to.
fn is_continuation(line: &str) -> bool {
    line.starts_with(char::is_whitespace) && !line.trim().is_empty()
}

/// Split a leading severity label off the message. Flow omits the
/// label for plain type errors, so the default is `error`.
fn split_severity(msg: &str) -> (Severity, String) {
    for (label, severity) in [
        ("warning:", Severity::Warning),
        ("error:", Severity::Error),
    ] {
        if let Some(prefix) = msg.get(..label.len()) {
            if prefix.eq_ignore_ascii_case(label) {
                return (severity, msg[label.len()..].trim_start().to_string());
            }
        }
    }

    (Severity::Error, msg.to_string())
}
