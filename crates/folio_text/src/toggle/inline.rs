// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! Bold, italic and underline.

use std::ops::Range;

use crate::grammar::{inline_spans, FormattingOperation, InlineSpan, MarkerPair};

use super::{splice, ToggleBehavior, ToggleResult, Toggler};

impl Toggler {
    /// Wrap the selection in `markers`, or insert a placeholder wrapped in
    /// them at a caret.
    ///
    /// Line boundaries are not special: a selection spanning several lines
    /// is wrapped as one literal span.
    pub(super) fn toggle_inline(
        &self,
        text: &str,
        range: Range<usize>,
        op: FormattingOperation,
        markers: MarkerPair,
    ) -> ToggleResult {
        if self.options.behavior == ToggleBehavior::Toggle {
            if let Some(span) = enclosing_span(text, &range, op) {
                return unwrap_span(text, range, span);
            }
        }

        if range.is_empty() {
            let placeholder =
                self.options.placeholders.for_operation(op).unwrap_or("");
            let at = range.start;
            let new_text =
                splice(text, at, &[markers.open, placeholder, markers.close]);
            let start = at + markers.open.len();
            ToggleResult::from_byte_range(
                new_text,
                start..start + placeholder.len(),
            )
        } else {
            let mut new_text = String::with_capacity(
                text.len() + markers.open.len() + markers.close.len(),
            );
            new_text.push_str(&text[..range.start]);
            new_text.push_str(markers.open);
            new_text.push_str(&text[range.clone()]);
            new_text.push_str(markers.close);
            new_text.push_str(&text[range.end..]);
            let shift = markers.open.len();
            ToggleResult::from_byte_range(
                new_text,
                range.start + shift..range.end + shift,
            )
        }
    }
}

/// The span of `op` whose text contains `range`, if any.
///
/// Offsets in the returned span are relative to the whole buffer.
pub(super) fn enclosing_span(
    text: &str,
    range: &Range<usize>,
    op: FormattingOperation,
) -> Option<InlineSpan> {
    let line_start = text[..range.start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[range.start..]
        .find('\n')
        .map_or(text.len(), |i| range.start + i);
    if range.end > line_end {
        return None;
    }

    inline_spans(&text[line_start..line_end])
        .into_iter()
        .filter(|span| span.op == op)
        .map(|span| InlineSpan {
            op: span.op,
            outer: span.outer.start + line_start..span.outer.end + line_start,
            inner: span.inner.start + line_start..span.inner.end + line_start,
        })
        .find(|span| {
            span.inner.start <= range.start && range.end <= span.inner.end
        })
}

/// Remove the markers of `span`, keeping `range` on the same text.
fn unwrap_span(
    text: &str,
    range: Range<usize>,
    span: InlineSpan,
) -> ToggleResult {
    let open_len = span.inner.start - span.outer.start;
    let mut new_text = String::with_capacity(text.len());
    new_text.push_str(&text[..span.outer.start]);
    new_text.push_str(&text[span.inner.clone()]);
    new_text.push_str(&text[span.outer.end..]);
    ToggleResult::from_byte_range(
        new_text,
        range.start - open_len..range.end - open_len,
    )
}
