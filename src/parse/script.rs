//! Textual import extraction for TypeScript / JavaScript sources.
//!
//! This is a lexical scan, not a parse: import-like text inside comments or
//! template strings is picked up too.

use super::common::{ImportKind, ImportSpecifier};
use regex::Regex;
use std::sync::LazyLock;

static STATIC_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+(?:[^'"]+\s+from\s+)?['"](.+)['"]"#)
        .expect("STATIC_IMPORT regex is invalid")
});

static DYNAMIC_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\(['"](.+)['"]\)"#).expect("DYNAMIC_IMPORT regex is invalid")
});

/// Extract every import specifier from `source`.
///
/// Static `import ... from "x"` forms come first, then dynamic `import("x")`
/// calls, each in source order. Duplicates are kept.
pub fn extract_specifiers(source: &str) -> Vec<ImportSpecifier> {
    let statics = STATIC_IMPORT
        .captures_iter(source)
        .filter_map(|c| c.get(1))
        .map(|m| ImportSpecifier::new(m.as_str(), ImportKind::Static));
    let dynamics = DYNAMIC_IMPORT
        .captures_iter(source)
        .filter_map(|c| c.get(1))
        .map(|m| ImportSpecifier::new(m.as_str(), ImportKind::Dynamic));
    statics.chain(dynamics).collect()
}
