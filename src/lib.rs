//! # wikifmt
//!
//! A fast, lightweight library for converting wiki markup to HTML.
//!
//! ## Syntax
//!
//! - Bare `http:` URLs become anchors (`https:` is deliberately not
//!   recognized)
//! - `= Title =` through `==== Title ====` become `<h2>`–`<h5>` headings
//! - `[[slug]]` and `[[slug|label]]` become internal links, resolved
//!   through a caller-supplied slug → URL capability
//!
//! The conversion is a pure function of the input text and the resolver's
//! behavior; malformed markup passes through verbatim instead of failing.
//! Input accepts `\n` or `\r\n` line endings, output always uses `\r\n`
//! with explicit `<br />` markers.
//!
//! ## Quick Start
//!
//! ```
//! use wikifmt::format;
//!
//! let html = format("Read [[news|the news]] at http://example.com now", |slug| {
//!     format!("/wiki/{slug}")
//! });
//! assert_eq!(
//!     html,
//!     "Read <a href=\"/wiki/news\">the news</a> at \
//!      <a href=\"http://example.com\">http://example.com</a> now"
//! );
//! ```
//!
//! ## Resolvers
//!
//! Any closure works as the resolver; [`LinkMap`] and [`UrlPrefix`] cover
//! the common policies, and [`try_format`] propagates resolver failures:
//!
//! ```
//! use wikifmt::{format, LinkMap, UrlPrefix};
//!
//! let mut links = LinkMap::new().with_fallback(UrlPrefix::new("/wiki/"));
//! links.insert("home", "/");
//!
//! let html = format("[[home]] [[Getting Started]]", |slug| {
//!     links.resolve(slug).unwrap()
//! });
//! assert_eq!(
//!     html,
//!     "<a href=\"/\">home</a> <a href=\"/wiki/Getting%20Started\">Getting Started</a>"
//! );
//! ```

pub mod wikitext;

mod error;

pub use error::{Error, Result};
pub use wikitext::{LinkMap, UrlPrefix, format, try_format};
