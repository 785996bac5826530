// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

use crate::grammar::{inline_rule, FormattingOperation, INLINE_ORDER};

fn tag_for(op: FormattingOperation) -> Option<&'static str> {
    match op {
        FormattingOperation::Bold => Some("strong"),
        FormattingOperation::Italic => Some("em"),
        FormattingOperation::Underline => Some("u"),
        FormattingOperation::Bullet | FormattingOperation::Number => None,
    }
}

/// Replace every inline span in already-escaped `text` with its tag.
///
/// Spans do not nest recursively: each rule runs once over the output of
/// the previous one, and unpaired markers stay as they are.
pub(super) fn apply_inline_rules(text: &str) -> String {
    let mut out = text.to_owned();
    for op in INLINE_ORDER {
        let (Some(rule), Some(tag)) = (inline_rule(op), tag_for(op)) else {
            continue;
        };
        let replacement = format!("<{tag}>${{1}}</{tag}>");
        let replaced = rule.replace_all(&out, replacement.as_str()).into_owned();
        out = replaced;
    }
    out
}
