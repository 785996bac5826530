// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! Marker-annotated text to sanitized HTML.
//!
//! The pipeline runs in a fixed order:
//!
//! 1. escape `& < > " '`, so nothing the author typed can become markup;
//! 2. replace bold, then italic, then underline spans with tags;
//! 3. classify each line and wrap runs of list lines in `<ul>`/`<ol>`,
//!    joining the remaining lines with `<br>`;
//! 4. sanitize against the allow-list, which is the last word on what
//!    reaches the page.
//!
//! Every display site must go through [`render`]; there is no other
//! implementation of these rules.

mod inline;
mod lines;
mod plain_text;

pub use plain_text::render_plain;

use std::borrow::Cow;

use tracing::trace;

use crate::sanitize::sanitize;

/// Render `raw` as sanitized HTML.
///
/// Pure and deterministic: the output depends on `raw` alone.
pub fn render(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let escaped = escape(&strip_line_end_cr(raw));
    let formatted = inline::apply_inline_rules(&escaped);
    let joined = lines::join_lines(&formatted);
    let html = sanitize(&joined);
    trace!(raw_len = raw.len(), html_len = html.len(), "rendered text");
    html
}

/// Replace the five HTML-significant characters with entities.
///
/// `\r` and U+FEFF are written as character references, which an HTML
/// parser decodes back to the same character instead of rewriting them.
/// U+0000 cannot be carried by HTML at all and becomes U+FFFD.
pub fn escape(text: &str) -> String {
    let escaped = html_escape::encode_quoted_attribute(text);
    if !escaped.contains(['\0', '\r', '\u{FEFF}']) {
        return escaped.into_owned();
    }
    let mut out = String::with_capacity(escaped.len() + 8);
    for ch in escaped.chars() {
        match ch {
            '\0' => out.push('\u{FFFD}'),
            '\r' => out.push_str("&#13;"),
            '\u{FEFF}' => out.push_str("&#xFEFF;"),
            _ => out.push(ch),
        }
    }
    out
}

// CRLF renders like LF: a `\r` ending a line is dropped, any other `\r`
// is text.
fn strip_line_end_cr(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\r') {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(
        raw.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

#[cfg(test)]
mod test {
    use indoc::indoc;

    use super::*;

    #[test]
    fn empty_text_renders_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn plain_text_is_escaped() {
        assert_eq!(render("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(render("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(render("it's"), escape("it's"));
        assert!(!render("it's").contains('\''));
    }

    #[test]
    fn line_breaks_become_br() {
        assert_eq!(render("one\ntwo\n\nfour"), "one<br>two<br><br>four");
        assert_eq!(render("trailing\n"), "trailing<br>");
    }

    #[test]
    fn crlf_renders_like_lf() {
        assert_eq!(render("one\r\ntwo"), render("one\ntwo"));
    }

    #[test]
    fn lone_carriage_return_is_kept() {
        assert_eq!(escape("a\rb"), "a&#13;b");
        assert_eq!(render("a\rb"), "a&#13;b");
        assert_eq!(render("a\r\rb\r"), "a&#13;&#13;b");
    }

    #[test]
    fn byte_order_mark_is_kept() {
        assert_eq!(render("\u{FEFF}lead"), "&#xFEFF;lead");
        assert_eq!(render("mid\u{FEFF}dle"), "mid&#xFEFF;dle");
    }

    #[test]
    fn nul_becomes_the_replacement_character() {
        assert_eq!(escape("a\0b"), "a\u{FFFD}b");
        assert_eq!(render("a\0b"), "a\u{FFFD}b");
    }

    #[test]
    fn inline_formatting() {
        assert_eq!(
            render("**b** *i* __u__"),
            "<strong>b</strong> <em>i</em> <u>u</u>"
        );
    }

    #[test]
    fn the_profile_example() {
        let raw = indoc! {"
            Built **MVP** in *3 months*.
            • Shipped to 10k users
            • Cut churn 20%"};
        assert_eq!(
            render(raw),
            "Built <strong>MVP</strong> in <em>3 months</em>.<br>\
             <ul><li>Shipped to 10k users</li><li>Cut churn 20%</li></ul>"
        );
    }

    #[test]
    fn numbered_line_loses_its_number() {
        assert_eq!(render("1. first"), "<ol><li>first</li></ol>");
    }

    #[test]
    fn separated_clusters_are_separate_lists() {
        assert_eq!(
            render("• a\ntext\n• b"),
            "<ul><li>a</li></ul><br>text<br><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn markup_typed_by_the_author_is_inert() {
        let html = render("<script>alert(1)</script> **hi**");
        assert!(!html.to_lowercase().contains("<script"));
        assert_eq!(
            html,
            "&lt;script&gt;alert(1)&lt;/script&gt; <strong>hi</strong>"
        );
    }

    #[test]
    fn markers_inside_escaped_markup_stay_text() {
        assert_eq!(
            render("<b onclick=\"x\">**t**</b>"),
            "&lt;b onclick=&quot;x&quot;&gt;<strong>t</strong>&lt;/b&gt;"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let raw = "• **a** *b\n2. __c__ & <d>\n\nend";
        assert_eq!(render(raw), render(raw));
    }
}
