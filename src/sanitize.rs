//! Output sanitization for bookmark text fields.
//!
//! The two fields are treated differently: `title` is plain text, so any
//! markup in it is escaped and renders literally. `description` may carry
//! formatting, so it goes through a whitelist sanitizer that keeps benign
//! markup (`<strong>`, `<img src>`) and drops anything that can run script.

use ammonia::Builder;

/// Escape angle brackets so embedded tags render as text.
///
/// Quotes and ampersands pass through unchanged.
#[must_use]
pub fn escape_title(title: &str) -> String {
    let mut escaped = String::with_capacity(title.len());

    for c in title.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Strip `<script>` elements and event-handler attributes, keep safe markup.
///
/// Links keep their attributes as written: no `rel` is injected. The output
/// is re-serialized HTML, so a bare `&` in text comes back as `&amp;`.
#[must_use]
pub fn clean_description(description: &str) -> String {
    Builder::default()
        .link_rel(None)
        .clean(description)
        .to_string()
}
