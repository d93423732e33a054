//! The ordered substitution stages behind [`format`](crate::format).
//!
//! Each stage is a pure string → string transformation. The order is part
//! of the contract: later stages must never re-match text produced by
//! earlier ones (e.g. headings are expanded before cross-references so a
//! `=` inside a link label cannot form a heading).

use super::patterns;

/// Normalize `\r\n` line endings to `\n`.
///
/// The line-anchored heading patterns match against `\n`-delimited lines,
/// so this runs first regardless of the input's line-ending convention.
pub(crate) fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Wrap bare `http:` URLs in anchor tags.
///
/// A URL runs from `http:` up to (but not including) the next whitespace
/// character, `]`, `)`, `}`, or end of input, so a trailing delimiter
/// stays outside the closing tag. `https:` URLs are not recognized.
pub(crate) fn autolink_bare_urls(text: &str) -> String {
    patterns::BARE_URL_RE
        .replace_all(text, "<a href=\"$0\">$0</a>")
        .into_owned()
}

/// Expand `= text =` heading lines into HTML headings.
///
/// One pair of equals signs maps to `<h2>`, four pairs to `<h5>`. A line
/// must consist of the marker alone to match; stray or unbalanced `=`
/// signs pass through verbatim.
pub(crate) fn expand_headings(text: &str) -> String {
    let html = patterns::H1_RE.replace_all(text, "<h2>$1</h2>");
    let html = patterns::H2_RE.replace_all(&html, "<h3>$1</h3>");
    let html = patterns::H3_RE.replace_all(&html, "<h4>$1</h4>");
    patterns::H4_RE.replace_all(&html, "<h5>$1</h5>").into_owned()
}

/// Replace `[[slug]]` and `[[slug|label]]` cross-references with anchors.
///
/// The inner text is split on the first `|`; without one, the whole inner
/// text serves as both slug and label. `resolve` is invoked once per
/// reference, in left-to-right order, and its first error aborts the
/// stage unmodified. Unterminated `[[` sequences pass through verbatim.
pub(crate) fn link_cross_references<E, F>(text: &str, resolve: &mut F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in patterns::CROSS_REF_RE.captures_iter(text) {
        let full = caps.get(0).unwrap();
        let inner = caps.get(1).unwrap().as_str();

        let (slug, label) = match inner.split_once('|') {
            Some(pair) => pair,
            None => (inner, inner),
        };

        let href = resolve(slug)?;
        out.push_str(&text[last..full.start()]);
        out.push_str("<a href=\"");
        out.push_str(&href);
        out.push_str("\">");
        out.push_str(label);
        out.push_str("</a>");
        last = full.end();
    }

    out.push_str(&text[last..]);
    Ok(out)
}

/// Make line breaks explicit as `<br />` while keeping the `\n` for any
/// downstream line-oriented processing.
pub(crate) fn break_lines(text: &str) -> String {
    text.replace('\n', "<br />\n")
}

/// Restore `\r\n` line endings on the final output.
pub(crate) fn restore_line_endings(text: &str) -> String {
    text.replace('\n', "\r\n")
}
