// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! Marker-based rich text for free-form profile and project descriptions.
//!
//! Text is authored and persisted as plain UTF-8 carrying a handful of
//! lightweight markers (`**bold**`, `*italic*`, `__underline__`, `• ` and
//! `1. ` list lines). Two pure functions work over that text:
//!
//! - [`toggle`] inserts or wraps markers around a caret or selection and
//!   reports where the selection should be placed afterwards.
//! - [`render`] turns marker-annotated text into sanitized HTML that only
//!   ever contains `strong`, `em`, `u`, `br`, `ul`, `ol` and `li`.
//!
//! Neither function mutates its input or keeps any state between calls.

mod grammar;
mod location;
mod render;
mod sanitize;
mod toggle;

#[cfg(test)]
mod tests;

pub use crate::grammar::{
    classify_line, ClassifiedLine, FormattingOperation, LineKind, MarkerPair,
    MarkerKind, BOLD_MARKERS, BULLET_PREFIX, ITALIC_MARKERS, NUMBER_PREFIX,
    UNDERLINE_MARKERS,
};
pub use crate::location::{Location, Selection};
pub use crate::render::{escape, render, render_plain};
pub use crate::sanitize::{sanitize, sanitize_strict, SanitizeError};
pub use crate::toggle::{
    action_states, toggle, ActionState, Placeholders, ToggleBehavior,
    ToggleOptions, ToggleResult, Toggler,
};
