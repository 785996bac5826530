// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

use crate::grammar::{classify_line, inline_rule, INLINE_ORDER};

/// Strip formatting from `raw`, leaving the text a reader would see.
///
/// Inline markers are removed wherever [`render`](crate::render) would
/// format a span, and list prefixes are removed from list lines. The
/// result is not escaped; it is meant for previews and summaries that are
/// not HTML.
pub fn render_plain(raw: &str) -> String {
    let mut text = raw.to_owned();
    for op in INLINE_ORDER {
        if let Some(rule) = inline_rule(op) {
            let replaced = rule.replace_all(&text, "${1}").into_owned();
            text = replaced;
        }
    }

    text.split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            classify_line(line).body
        })
        .collect::<Vec<_>>()
        .join("\n")
}
