//! Slug → URL resolution strategies.
//!
//! Cross-reference resolution is a capability the caller passes into
//! [`format`](crate::format); any `FnMut(&str) -> String` works. The types
//! here cover the two common policies so callers don't have to rebuild
//! them: a fixed URL prefix and an explicit lookup table.

use std::collections::HashMap;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::{Error, Result};

/// Characters percent-escaped when a slug is embedded in an href.
const HREF_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?');

/// Builds hrefs by joining a fixed base with the percent-encoded slug.
///
/// # Examples
///
/// ```
/// use wikifmt::UrlPrefix;
///
/// let prefix = UrlPrefix::new("/wiki/");
/// assert_eq!(prefix.href("home"), "/wiki/home");
/// assert_eq!(prefix.href("getting started"), "/wiki/getting%20started");
/// ```
#[derive(Debug, Clone)]
pub struct UrlPrefix {
    base: String,
}

impl UrlPrefix {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// The href for `slug` under this prefix.
    pub fn href(&self, slug: &str) -> String {
        format!("{}{}", self.base, utf8_percent_encode(slug, HREF_UNSAFE))
    }
}

/// Explicit slug → URL table, with an optional [`UrlPrefix`] fallback for
/// slugs not present in the table.
///
/// Without a fallback, [`resolve`](LinkMap::resolve) is strict and fails
/// on unknown slugs.
#[derive(Debug, Clone, Default)]
pub struct LinkMap {
    entries: HashMap<String, String>,
    fallback: Option<UrlPrefix>,
}

impl LinkMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(slug, url)` pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            fallback: None,
        }
    }

    /// Route slugs missing from the table through `prefix` instead of
    /// failing.
    pub fn with_fallback(mut self, prefix: UrlPrefix) -> Self {
        self.fallback = Some(prefix);
        self
    }

    pub fn insert(&mut self, slug: impl Into<String>, url: impl Into<String>) {
        self.entries.insert(slug.into(), url.into());
    }

    /// Resolve `slug` to a URL.
    ///
    /// Returns [`Error::UnresolvedLink`] when the slug is not in the table
    /// and no fallback prefix is configured.
    pub fn resolve(&self, slug: &str) -> Result<String> {
        if let Some(url) = self.entries.get(slug) {
            return Ok(url.clone());
        }
        match &self.fallback {
            Some(prefix) => Ok(prefix.href(slug)),
            None => Err(Error::UnresolvedLink(slug.to_string())),
        }
    }
}
