//! Core wiki markup → HTML rendering.
//!
//! [`format`] and [`try_format`] compose the substitution stages from
//! `stages` in a fixed order. No state survives a call;
//! the output is a pure function of the input text and the resolver's
//! behavior.

use super::stages;

/// Convert wiki markup to an HTML fragment.
///
/// `resolve` maps a page slug to the URL used for `[[slug]]` and
/// `[[slug|label]]` cross-references. It is called once per reference, in
/// left-to-right order of appearance.
///
/// The function is total: any input string produces output, and malformed
/// markup (an unterminated `[[`, stray `=` signs) passes through verbatim.
/// Input may use `\n` or `\r\n` line endings; output always uses `\r\n`.
///
/// # Examples
///
/// ```
/// use wikifmt::format;
///
/// let html = format("= Home =\nSee [[about|About Us]].", |slug| {
///     format!("/pages/{slug}")
/// });
/// assert_eq!(
///     html,
///     "<h2>Home</h2><br />\r\nSee <a href=\"/pages/about\">About Us</a>."
/// );
/// ```
pub fn format<F>(text: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> String,
{
    match try_format(text, |slug| Ok::<_, std::convert::Infallible>(resolve(slug))) {
        Ok(html) => html,
        Err(never) => match never {},
    }
}

/// Convert wiki markup to an HTML fragment with a fallible resolver.
///
/// Identical to [`format`], except the first resolver error aborts the
/// transformation and is returned unmodified; no partial output is
/// produced and no retry is attempted.
///
/// # Examples
///
/// ```
/// use wikifmt::{try_format, LinkMap};
///
/// let mut links = LinkMap::new();
/// links.insert("about", "/pages/about");
///
/// assert!(try_format("[[about]]", |slug| links.resolve(slug)).is_ok());
/// assert!(try_format("[[missing]]", |slug| links.resolve(slug)).is_err());
/// ```
pub fn try_format<E, F>(text: &str, mut resolve: F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let text = stages::normalize_line_endings(text);
    let text = stages::autolink_bare_urls(&text);
    let text = stages::expand_headings(&text);
    let text = stages::link_cross_references(&text, &mut resolve)?;
    let text = stages::break_lines(&text);
    Ok(stages::restore_line_endings(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pages(slug: &str) -> String {
        format!("/pages/{slug}")
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format("", pages), "");
    }

    #[test]
    fn test_crlf_input_normalized_before_matching() {
        // the heading pattern must see `\n`-delimited lines
        let html = format("= One =\r\n= Two =", pages);
        assert_eq!(html, "<h2>One</h2><br />\r\n<h2>Two</h2>");
    }

    #[test]
    fn test_url_inside_heading_is_linked_first() {
        // autolinking runs before heading expansion, so the anchor ends up
        // inside the heading element
        let html = format("= http://example.com =", pages);
        assert_eq!(
            html,
            "<h2><a href=\"http://example.com\">http://example.com</a></h2>"
        );
    }

    #[test]
    fn test_mixed_document() {
        let text = "= Welcome =\nRead [[about|the about page]],\nor visit http://example.org today.";
        let html = format(text, pages);
        assert_eq!(
            html,
            "<h2>Welcome</h2><br />\r\n\
             Read <a href=\"/pages/about\">the about page</a>,<br />\r\n\
             or visit <a href=\"http://example.org\">http://example.org</a> today."
        );
    }

    #[test]
    fn test_try_format_propagates_first_error() {
        let mut calls = 0;
        let err = try_format("[[a]] [[b]] [[c]]", |slug| {
            calls += 1;
            if slug == "b" {
                Err(format!("unresolved: {slug}"))
            } else {
                Ok(String::from("#"))
            }
        })
        .unwrap_err();
        assert_eq!(err, "unresolved: b");
        // `c` is never resolved once `b` has failed
        assert_eq!(calls, 2);
    }

    proptest! {
        /// Text with no wiki syntax is preserved modulo line-break markup.
        #[test]
        fn prop_inert_text_preserved(s in "[a-z0-9 .,\n]{0,200}") {
            let html = format(&s, pages);
            prop_assert_eq!(html, s.replace('\n', "<br />\r\n"));
        }

        /// Output is identical regardless of input line-ending convention.
        #[test]
        fn prop_line_ending_convention_is_irrelevant(s in "[a-z0-9 =\\[\\]|\n]{0,200}") {
            let crlf = s.replace('\n', "\r\n");
            prop_assert_eq!(format(&s, pages), format(&crlf, pages));
        }

        /// The transformation is total and deterministic over arbitrary input.
        #[test]
        fn prop_total_and_deterministic(s in any::<String>()) {
            let first = format(&s, pages);
            let second = format(&s, pages);
            prop_assert_eq!(first, second);
        }
    }
}
