//! Detection of the per-file `@flow` opt-in pragma.
//!
//! Flow only checks files that carry the pragma, so the driver skips
//! files without one unless the `all` setting is enabled.

/// True when the source opts into checking with an `@flow` pragma.
pub fn has_flow_pragma(source: &str) -> bool {
    source.contains("@flow")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_comment_pragma_is_detected() {
        assert!(has_flow_pragma("// @flow\nconst x = 1;\n"));
    }

    #[test]
    fn block_comment_pragma_is_detected() {
        assert!(has_flow_pragma("/* @flow strict */\nconst x = 1;\n"));
    }

    #[test]
    fn source_without_pragma_is_skipped() {
        assert!(!has_flow_pragma("const x = 1;\n"));
    }
}
