//! Decoder for `flow --json` check results.
//!
//! The shape mirrors `tsrc/flowResult.js` in the Flow repository:
//!
//! ```text
//! type FlowError = {
//!     kind: string,
//!     level: string,
//!     message: Array<FlowMessage>,
//!     operation?: FlowMessage,
//!     extra?: FlowExtra,
//! };
//! type FlowMessage = {
//!     descr: string,
//!     type: "Blame" | "Comment",
//!     context?: ?string,
//!     loc?: ?FlowLoc,
//! };
//! ```
//!
//! Unknown fields are ignored so that drift across checker releases
//! degrades gracefully instead of breaking the decode.

use crate::types::{Diagnostic, Severity};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct CheckResult {
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub errors: Vec<FlowError>,
}

#[derive(Debug, Deserialize)]
pub struct FlowError {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub message: Vec<FlowMessage>,
    #[serde(default)]
    pub operation: Option<FlowMessage>,
    #[serde(default)]
    pub extra: Vec<FlowExtra>,
}

#[derive(Debug, Deserialize)]
pub struct FlowMessage {
    #[serde(default)]
    pub descr: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub loc: Option<FlowLoc>,
}

#[derive(Debug, Deserialize)]
pub struct FlowExtra {
    #[serde(default)]
    pub message: Vec<FlowMessage>,
    #[serde(default)]
    pub children: Vec<FlowExtra>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlowLoc {
    #[serde(default)]
    pub source: Option<String>,
    pub start: FlowPosition,
    pub end: FlowPosition,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FlowPosition {
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
    #[serde(default)]
    pub offset: u32,
}

/// Parse check output into diagnostics.
///
/// The checker prints a plain complaint instead of JSON when the
/// project has no `.flowconfig`; that case decodes to nothing and
/// yields no diagnostics.
pub fn parse(raw: &str) -> Vec<Diagnostic> {
    let result = match decode(raw) {
        Some(result) => result,
        None => return Vec::new(),
    };

    result
        .errors
        .iter()
        .filter_map(|error| {
            let loc = error
                .operation
                .as_ref()
                .and_then(|op| op.loc.as_ref())
                .or_else(|| error.message.iter().find_map(|msg| msg.loc.as_ref()))?;
            diagnostic_at(error, loc)
        })
        .collect()
}

/// Parse check output, keeping only errors that touch `target`.
///
/// A checker error can point at other files and mention the linted
/// file only deep in its additional information, so the location is
/// taken from the first message placed in `target`: the operation,
/// then the main messages, then the `extra` tree. Errors that never
/// mention the file are dropped.
pub fn parse_for_file(raw: &str, target: &Path) -> Vec<Diagnostic> {
    let result = match decode(raw) {
        Some(result) => result,
        None => return Vec::new(),
    };

    let target = target.to_string_lossy();
    result
        .errors
        .iter()
        .filter_map(|error| {
            let message = matching_message(error, &target)?;
            let loc = message.loc.as_ref()?;
            diagnostic_at(error, loc)
        })
        .collect()
}

fn decode(raw: &str) -> Option<CheckResult> {
    match serde_json::from_str::<CheckResult>(raw) {
        Ok(result) => {
            tracing::debug!(
                "checker reported {} errors, passed: {}",
                result.errors.len(),
                result.passed
            );
            Some(result)
        }
        Err(err) => {
            tracing::info!("checker output is not a JSON result: {err}");
            None
        }
    }
}

fn diagnostic_at(error: &FlowError, loc: &FlowLoc) -> Option<Diagnostic> {
    let message = combined_message(&error.message);
    if message.is_empty() {
        return None;
    }

    let severity = match error.level.as_deref() {
        Some("warning") => Severity::Warning,
        _ => Severity::Error,
    };

    Some(Diagnostic {
        line: loc.start.line,
        column: loc.start.column,
        severity,
        message,
    })
}

fn matching_message<'a>(error: &'a FlowError, target: &str) -> Option<&'a FlowMessage> {
    let mut candidates: Vec<&FlowMessage> = Vec::new();
    if let Some(operation) = &error.operation {
        candidates.push(operation);
    }
    candidates.extend(error.message.iter());
    collect_extra_messages(&error.extra, &mut candidates);

    candidates.into_iter().find(|msg| {
        msg.loc
            .as_ref()
            .and_then(|loc| loc.source.as_deref())
            .is_some_and(|source| source == target)
    })
}

fn collect_extra_messages<'a>(extra: &'a [FlowExtra], out: &mut Vec<&'a FlowMessage>) {
    for item in extra {
        out.extend(item.message.iter());
        collect_extra_messages(&item.children, out);
    }
}

/// Join the message parts into the human-readable line the checker's
/// own CLI would render, e.g. `foo (String) This type is incompatible
/// with expectedFoo (Number)`.
fn combined_message(messages: &[FlowMessage]) -> String {
    messages
        .iter()
        .filter_map(format_message)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comments carry linking text in `descr`; blame messages carry a code
/// snippet in `context` with `descr` naming the failing type, reduced
/// here to the `snippet (Type)` form.
fn format_message(message: &FlowMessage) -> Option<String> {
    match message.kind.as_deref() {
        Some("Comment") => Some(message.descr.trim().to_string()),
        Some("Blame") => {
            let snippet = message.context.as_deref()?;
            let descr = message.descr.trim();

            if let Some(loc) = &message.loc {
                let start = (loc.start.column as usize).saturating_sub(1);
                let end = (loc.end.column as usize).min(snippet.len());
                if let Some(highlighted) = snippet.get(start..end) {
                    if highlighted != descr {
                        return Some(format!("{} ({})", highlighted.trim(), descr));
                    }
                    return Some(highlighted.trim().to_string());
                }
            }

            Some(snippet.trim().to_string())
        }
        _ => None,
    }
}
