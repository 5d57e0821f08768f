//! Small markup helpers: escaping and line-break handling.

/// Escape text for HTML (minimal, deterministic).
pub(super) fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text and turn embedded line breaks into `<br>`.
///
/// Used for signatory position text, which may span several lines.
pub(super) fn esc_multiline(s: &str) -> String {
    s.lines().map(|line| esc(line)).collect::<Vec<_>>().join("<br>")
}
