//! Rendering of the lightweight emphasis markup used in responses.
//!
//! Responses mark bold spans with `**` and break lines with `\n`. Hosts turn
//! those into their own rich-text equivalents with the helpers here.

use std::sync::LazyLock;

use regex::Regex;

/// Non-greedy `**...**` span.
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("emphasis pattern is valid"));

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

/// Render response text as an HTML fragment (`<strong>` spans, `<br>` breaks).
pub fn to_html(text: &str) -> String {
    EMPHASIS.replace_all(text, "<strong>$1</strong>").replace('\n', "<br>")
}

/// Render response text for a terminal with ANSI bold spans.
pub fn to_ansi(text: &str) -> String {
    EMPHASIS.replace_all(text, format!("{ANSI_BOLD}$1{ANSI_RESET}").as_str()).into_owned()
}

/// Escape user-typed text for literal display inside HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

// Tests.
