//! Cached regex patterns for wiki markup processing.
//!
//! Uses LazyLock to compile patterns once on first use, so repeated
//! `format` calls never pay for recompilation.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Matches a bare `http:` URL up to the next whitespace or closing
/// delimiter (`]`, `)`, `}`). Only the `http:` scheme is recognized.
pub static BARE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http:[^\s\])}]*").unwrap());

/// Matches `= text =` lines (rendered as `<h2>`)
pub static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^= (.+?) =$").unwrap());

/// Matches `== text ==` lines (rendered as `<h3>`)
pub static H2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^== (.+?) ==$").unwrap());

/// Matches `=== text ===` lines (rendered as `<h4>`)
pub static H3_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^=== (.+?) ===$").unwrap());

/// Matches `==== text ====` lines (rendered as `<h5>`)
pub static H4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^==== (.+?) ====$").unwrap());

/// Matches `[[slug]]` and `[[slug|label]]` cross-references.
/// Lazy, so nested brackets resolve to the leftmost-shortest match.
pub static CROSS_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.+?)\]\]").unwrap());
