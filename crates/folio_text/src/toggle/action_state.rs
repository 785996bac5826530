// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! Toolbar button states.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use crate::grammar::{classify_line, FormattingOperation};
use crate::location::Selection;

use super::inline::enclosing_span;
use super::list::line_bounds;

/// How a formatting button should be shown for the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionState {
    Enabled,
    /// The selection is already formatted this way. With
    /// [`ToggleBehavior::Toggle`](crate::ToggleBehavior::Toggle) applying
    /// the operation removes the formatting.
    Reversed,
}

/// The state of every formatting operation at `selection` in `text`.
///
/// Inline operations are reversed when the selection lies inside a span
/// the renderer would format with them; list operations are reversed when
/// the caret's line carries their prefix.
pub fn action_states(
    text: &str,
    selection: Selection,
) -> HashMap<FormattingOperation, ActionState> {
    let range = selection.to_byte_range(text);
    let (line_start, line_end) = line_bounds(text, range.start);
    let line = &text[line_start..line_end];
    let line_kind = classify_line(line.strip_suffix('\r').unwrap_or(line)).kind;

    FormattingOperation::iter()
        .map(|op| {
            let active = match op.line_kind() {
                Some(kind) => kind == line_kind,
                None => enclosing_span(text, &range, op).is_some(),
            };
            let state = if active {
                ActionState::Reversed
            } else {
                ActionState::Enabled
            };
            (op, state)
        })
        .collect()
}
