// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! Positions inside a text buffer.
//!
//! Text widgets on the web and on mobile report caret and selection
//! positions in UTF-16 code units, so that is the unit a [`Location`]
//! counts. Internally the toggler works on UTF-8 byte offsets; the
//! conversion lives here together with the clamping rules.

use std::fmt;
use std::ops::Range;

use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

/// An offset into a text buffer, counted in UTF-16 code units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location(usize);

impl Location {
    pub fn as_usize(self) -> usize {
        self.0
    }

    /// The location of the UTF-8 byte offset `byte` in `text`.
    ///
    /// `byte` must lie on a char boundary.
    pub(crate) fn from_byte_offset(text: &str, byte: usize) -> Self {
        Self(utf16_len(&text[..byte]))
    }
}

impl From<usize> for Location {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A caret (`start == end`) or a selected range of a text buffer.
///
/// A selection is only meaningful for the buffer it was taken from. After
/// a toggle the caller must use the selection returned alongside the new
/// buffer rather than the one it passed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: Location,
    pub end: Location,
}

impl Selection {
    pub fn new(start: impl Into<Location>, end: impl Into<Location>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn caret(at: impl Into<Location>) -> Self {
        let at = at.into();
        Self { start: at, end: at }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// The same selection with `start <= end`.
    pub fn normalized(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }

    /// Resolve this selection against `text` into a UTF-8 byte range.
    ///
    /// Never fails: offsets past the end of the buffer are clamped, and
    /// offsets that fall inside a grapheme cluster are moved to its edge
    /// (start backwards, end forwards) so that nothing is ever inserted
    /// in the middle of a surrogate pair or a joined emoji.
    pub(crate) fn to_byte_range(self, text: &str) -> Range<usize> {
        let Selection { start, end } = self.normalized();
        let len = utf16_len(text);
        if end.0 > len {
            debug!(
                start = start.0,
                end = end.0,
                len,
                "clamping selection to buffer length"
            );
        }
        let start = start.0.min(len);
        let end = end.0.min(len);

        let raw_start = byte_offset_floor(text, start);
        if start == end {
            let caret = grapheme_floor(text, raw_start);
            log_snap(raw_start, caret);
            return caret..caret;
        }

        let raw_end = byte_offset_ceil(text, end);
        let snapped_start = grapheme_floor(text, raw_start);
        let snapped_end = grapheme_ceil(text, raw_end);
        log_snap(raw_start, snapped_start);
        log_snap(raw_end, snapped_end);
        snapped_start..snapped_end
    }
}

impl<S, E> From<(S, E)> for Selection
where
    S: Into<Location>,
    E: Into<Location>,
{
    fn from((start, end): (S, E)) -> Self {
        Self::new(start, end)
    }
}

fn log_snap(from: usize, to: usize) {
    if from != to {
        debug!(from, to, "moved offset to a grapheme boundary");
    }
}

/// Length of `text` in UTF-16 code units.
pub(crate) fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Byte offset of the char containing UTF-16 offset `target`, or of the
/// char starting exactly there.
fn byte_offset_floor(text: &str, target: usize) -> usize {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        let next = units + ch.len_utf16();
        if next > target {
            return byte;
        }
        units = next;
    }
    text.len()
}

/// Like [`byte_offset_floor`], but an offset that splits a surrogate pair
/// resolves to the end of that char.
fn byte_offset_ceil(text: &str, target: usize) -> usize {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        if units >= target {
            return byte;
        }
        units += ch.len_utf16();
    }
    text.len()
}

fn grapheme_floor(text: &str, byte: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(i, _)| i)
        .take_while(|&i| i <= byte)
        .last()
        .unwrap_or(0)
}

fn grapheme_ceil(text: &str, byte: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(i, _)| i)
        .find(|&i| i >= byte)
        .unwrap_or(text.len())
}
