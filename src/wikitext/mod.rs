//! Wiki markup → HTML conversion.
//!
//! Implements a minimal wiki syntax as a single-pass, order-dependent
//! pipeline of pure string substitutions:
//!
//! 1. `\r\n` → `\n` line-ending normalization
//! 2. bare `http:` URL autolinking
//! 3. `= text =` headings, four levels (`<h2>`–`<h5>`)
//! 4. `[[slug]]` / `[[slug|label]]` cross-references
//! 5. `\n` → `<br />\n` line breaks
//! 6. `\n` → `\r\n` on the final output
//!
//! The design separates the pure rendering logic from link policy:
//!
//! - `stages`: one pure transformation per pipeline step
//! - `render`: the public [`format`]/[`try_format`] entry points
//! - `resolver`: reusable slug → URL strategies ([`UrlPrefix`], [`LinkMap`])
//! - `patterns`: the cached regular expressions behind the stages
//!
//! Cross-reference resolution is a capability supplied per call (a closure
//! or one of the resolver types), never ambient state; the formatter holds
//! nothing between calls, so concurrent invocations need no coordination.
//!
//! Malformed markup is not an error: an unterminated `[[` or a stray `=`
//! passes through verbatim. The output is an HTML *fragment*: the input
//! text is substituted into, never escaped, so pre-existing `<` and `&`
//! survive unchanged and untrusted input must be sanitized upstream.

mod patterns;
mod render;
mod resolver;
mod stages;

pub use render::{format, try_format};
pub use resolver::{LinkMap, UrlPrefix};
