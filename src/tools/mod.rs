//! Built-in content pages.
//!
//! These are collaborators of the shell, not part of it: the tab manager only
//! stores them and asks for their markup. Subtitle semantics live elsewhere.

pub mod dashboard;
pub mod placeholder;
pub mod srt_editor;

/// Escapes text for inclusion in HTML element content or attribute values.
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
