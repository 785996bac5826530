// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! The marker vocabulary shared by the toggler and the renderer.
//!
//! | Operation | Open  | Close | Applies to          |
//! |-----------|-------|-------|---------------------|
//! | Bold      | `**`  | `**`  | selection span      |
//! | Italic    | `*`   | `*`   | selection span      |
//! | Underline | `__`  | `__`  | selection span      |
//! | Bullet    | `• `  |       | start of line only  |
//! | Number    | `1. ` |       | start of line only  |

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A formatting request coming from the authoring surface.
#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
)]
#[strum(serialize_all = "lowercase")]
pub enum FormattingOperation {
    Bold,
    Italic,
    Underline,
    Bullet,
    Number,
}

/// Literal open and close markers surrounding an inline span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerPair {
    pub open: &'static str,
    pub close: &'static str,
}

pub const BOLD_MARKERS: MarkerPair = MarkerPair {
    open: "**",
    close: "**",
};
pub const ITALIC_MARKERS: MarkerPair = MarkerPair {
    open: "*",
    close: "*",
};
pub const UNDERLINE_MARKERS: MarkerPair = MarkerPair {
    open: "__",
    close: "__",
};
pub const BULLET_PREFIX: &str = "• ";
pub const NUMBER_PREFIX: &str = "1. ";

/// How an operation shows up in the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    /// Wraps a span with an opening and a closing marker.
    Pair(MarkerPair),
    /// Prefixes a line; there is no closing counterpart.
    LinePrefix(&'static str),
}

impl FormattingOperation {
    pub fn markers(self) -> MarkerKind {
        match self {
            Self::Bold => MarkerKind::Pair(BOLD_MARKERS),
            Self::Italic => MarkerKind::Pair(ITALIC_MARKERS),
            Self::Underline => MarkerKind::Pair(UNDERLINE_MARKERS),
            Self::Bullet => MarkerKind::LinePrefix(BULLET_PREFIX),
            Self::Number => MarkerKind::LinePrefix(NUMBER_PREFIX),
        }
    }

    pub fn is_inline(self) -> bool {
        matches!(self.markers(), MarkerKind::Pair(_))
    }

    /// The kind of line this operation produces, if it is a list operation.
    pub fn line_kind(self) -> Option<LineKind> {
        match self {
            Self::Bullet => Some(LineKind::Bullet),
            Self::Number => Some(LineKind::Number),
            _ => None,
        }
    }
}

/// Inline operations in the order the renderer applies them.
pub(crate) const INLINE_ORDER: [FormattingOperation; 3] = [
    FormattingOperation::Bold,
    FormattingOperation::Italic,
    FormattingOperation::Underline,
];

// Spans are non-greedy and never cross a line break.
static BOLD_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static UNDERLINE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());

static NUMBERED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.\s").unwrap());

/// The pattern matching one span of an inline operation, capturing the
/// text between the markers as group 1.
pub(crate) fn inline_rule(op: FormattingOperation) -> Option<&'static Regex> {
    match op {
        FormattingOperation::Bold => Some(&BOLD_SPAN),
        FormattingOperation::Italic => Some(&ITALIC_SPAN),
        FormattingOperation::Underline => Some(&UNDERLINE_SPAN),
        FormattingOperation::Bullet | FormattingOperation::Number => None,
    }
}

/// A span of inline formatting found in raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct InlineSpan {
    pub op: FormattingOperation,
    /// Byte range including the markers.
    pub outer: Range<usize>,
    /// Byte range of the formatted text only.
    pub inner: Range<usize>,
}

/// Find the spans the renderer would format in `line`.
///
/// The rules run in [`INLINE_ORDER`]. Markers consumed by an earlier rule
/// are masked out before the next rule runs, which is what happens in the
/// renderer when they are replaced by tags.
pub(crate) fn inline_spans(line: &str) -> Vec<InlineSpan> {
    let mut masked = line.to_owned();
    let mut spans = Vec::new();
    for op in INLINE_ORDER {
        let Some(rule) = inline_rule(op) else {
            continue;
        };
        let found: Vec<(Range<usize>, Range<usize>)> = rule
            .captures_iter(&masked)
            .filter_map(|caps| Some((caps.get(0)?.range(), caps.get(1)?.range())))
            .collect();
        for (outer, inner) in found {
            mask(&mut masked, outer.start..inner.start);
            mask(&mut masked, inner.end..outer.end);
            spans.push(InlineSpan { op, outer, inner });
        }
    }
    spans
}

// Markers are ASCII, so masking byte for byte keeps every offset valid.
fn mask(text: &mut String, range: Range<usize>) {
    let filler = "\u{1}".repeat(range.len());
    text.replace_range(range, &filler);
}

/// The classification of a single line of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    Normal,
    Bullet,
    Number,
}

/// A line split into indentation, list prefix and body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub kind: LineKind,
    /// Bytes of leading whitespace before the prefix.
    pub indent: usize,
    /// Bytes of list prefix, zero for normal lines.
    pub prefix_len: usize,
    /// The line with indentation and prefix stripped. For a normal line
    /// this is the whole line, indentation included.
    pub body: &'a str,
}

/// Classify `line` (which must not contain `\n`).
///
/// A line is a list line if, after its leading whitespace, it starts with
/// `• ` or with digits followed by `.` and a whitespace character.
pub fn classify_line(line: &str) -> ClassifiedLine<'_> {
    let trimmed = line.trim_start();
    let indent = line.len() - trimmed.len();

    let prefix = if trimmed.starts_with(BULLET_PREFIX) {
        Some((LineKind::Bullet, BULLET_PREFIX.len()))
    } else {
        NUMBERED_LINE
            .find(trimmed)
            .map(|m| (LineKind::Number, m.end()))
    };

    match prefix {
        Some((kind, prefix_len)) => ClassifiedLine {
            kind,
            indent,
            prefix_len,
            body: &trimmed[prefix_len..],
        },
        None => ClassifiedLine {
            kind: LineKind::Normal,
            indent,
            prefix_len: 0,
            body: line,
        },
    }
}
