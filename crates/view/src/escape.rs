//! HTML text escaping.

/// Escape a field value for insertion into element content or a quoted
/// attribute.
///
/// Every record field passes through here before it reaches markup, so a
/// name like `<script>alert(1)</script>` displays as text instead of
/// executing.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
