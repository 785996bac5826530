// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! Editor-side marker insertion.
//!
//! [`Toggler::toggle`] is a pure function over a buffer, a selection and a
//! [`FormattingOperation`]. It returns a new buffer together with the
//! selection the authoring surface should apply, and never touches any
//! widget itself.

mod action_state;
mod inline;
mod list;

pub use action_state::{action_states, ActionState};

use std::ops::Range;

use tracing::trace;

use crate::grammar::{FormattingOperation, MarkerKind};
use crate::location::{Location, Selection};

/// Phrases inserted between markers when formatting is applied at a caret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholders {
    pub bold: String,
    pub italic: String,
    pub underline: String,
}

impl Placeholders {
    pub fn for_operation(&self, op: FormattingOperation) -> Option<&str> {
        match op {
            FormattingOperation::Bold => Some(&self.bold),
            FormattingOperation::Italic => Some(&self.italic),
            FormattingOperation::Underline => Some(&self.underline),
            FormattingOperation::Bullet | FormattingOperation::Number => None,
        }
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            bold: String::from("bold text"),
            italic: String::from("italic text"),
            underline: String::from("underline text"),
        }
    }
}

/// What happens when an operation is applied to text it already formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleBehavior {
    /// Always add markers. Applying bold twice to the same word wraps it
    /// twice.
    #[default]
    Wrap,
    /// Remove the operation's markers when the selection is already
    /// formatted by it, otherwise add them.
    Toggle,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleOptions {
    pub behavior: ToggleBehavior,
    pub placeholders: Placeholders,
}

/// The buffer and selection to apply after a toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleResult {
    pub text: String,
    pub selection: Selection,
}

impl ToggleResult {
    /// Build a result from UTF-8 byte offsets into `text`.
    pub(crate) fn from_byte_range(text: String, range: Range<usize>) -> Self {
        let start = Location::from_byte_offset(&text, range.start);
        let end = Location::from_byte_offset(&text, range.end);
        Self {
            text,
            selection: Selection { start, end },
        }
    }

    #[cfg(feature = "assert-invariants")]
    fn assert_invariants(&self) {
        let len = crate::location::utf16_len(&self.text);
        let Selection { start, end } = self.selection;
        assert!(
            start <= end && end.as_usize() <= len,
            "selection {start}..{end} is outside a buffer of {len} units"
        );
    }
}

#[derive(Clone, Debug, Default)]
pub struct Toggler {
    options: ToggleOptions,
}

impl Toggler {
    pub fn new(options: ToggleOptions) -> Self {
        Self { options }
    }

    /// Apply `op` to `text` at `selection`.
    ///
    /// Out-of-range offsets are clamped rather than rejected, so this never
    /// fails.
    pub fn toggle(
        &self,
        text: &str,
        selection: Selection,
        op: FormattingOperation,
    ) -> ToggleResult {
        let range = selection.to_byte_range(text);
        let result = match op.markers() {
            MarkerKind::Pair(markers) => {
                self.toggle_inline(text, range, op, markers)
            }
            MarkerKind::LinePrefix(prefix) => {
                self.toggle_list(text, range.start, op, prefix)
            }
        };
        trace!(
            %op,
            start = %result.selection.start,
            end = %result.selection.end,
            "toggled formatting"
        );

        #[cfg(feature = "assert-invariants")]
        result.assert_invariants();

        result
    }
}

/// Apply `op` to `text` at `selection` with the default options.
pub fn toggle(
    text: &str,
    selection: Selection,
    op: FormattingOperation,
) -> ToggleResult {
    Toggler::default().toggle(text, selection, op)
}

/// Splice `insert` into `text` at byte offset `at`.
fn splice(text: &str, at: usize, insert: &[&str]) -> String {
    let extra: usize = insert.iter().map(|s| s.len()).sum();
    let mut out = String::with_capacity(text.len() + extra);
    out.push_str(&text[..at]);
    for piece in insert {
        out.push_str(piece);
    }
    out.push_str(&text[at..]);
    out
}
