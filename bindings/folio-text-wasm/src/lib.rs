// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! JavaScript bindings for the toggler and the renderer.
//!
//! Offsets cross the boundary as UTF-16 code units, which is what
//! `selectionStart` and `selectionEnd` report on a textarea.

use std::str::FromStr;

use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;

use folio_text::{
    ActionState, FormattingOperation, Selection, ToggleBehavior, ToggleOptions,
    ToggleResult, Toggler,
};

#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("unknown formatting operation: {0:?}")]
    UnknownOperation(String),
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// The buffer and selection to apply to the authoring surface.
#[wasm_bindgen]
pub struct ToggleUpdate {
    text: String,
    start: u32,
    end: u32,
}

#[wasm_bindgen]
impl ToggleUpdate {
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn start(&self) -> u32 {
        self.start
    }

    #[wasm_bindgen(getter)]
    pub fn end(&self) -> u32 {
        self.end
    }
}

impl From<ToggleResult> for ToggleUpdate {
    fn from(result: ToggleResult) -> Self {
        Self {
            text: result.text,
            start: to_js_offset(result.selection.start.as_usize()),
            end: to_js_offset(result.selection.end.as_usize()),
        }
    }
}

fn to_js_offset(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

/// JS numbers arrive signed; anything before the start of the buffer
/// clamps to it.
fn selection_from_js(start: i32, end: i32) -> Selection {
    let clamp = |offset: i32| usize::try_from(offset).unwrap_or(0);
    Selection::new(clamp(start), clamp(end))
}

fn parse_operation(name: &str) -> Result<FormattingOperation, BindingError> {
    FormattingOperation::from_str(name)
        .map_err(|_| BindingError::UnknownOperation(name.to_owned()))
}

/// Apply `operation` ("bold", "italic", "underline", "bullet" or
/// "number") to `text` at `start..end`.
///
/// With `toggle` set, formatting already present at the selection is
/// removed instead of added again.
#[wasm_bindgen(js_name = toggleFormatting)]
pub fn toggle_formatting(
    text: &str,
    start: i32,
    end: i32,
    operation: &str,
    toggle: bool,
) -> Result<ToggleUpdate, JsError> {
    let op = parse_operation(operation)?;
    let behavior = if toggle {
        ToggleBehavior::Toggle
    } else {
        ToggleBehavior::Wrap
    };
    let toggler = Toggler::new(ToggleOptions {
        behavior,
        ..Default::default()
    });
    let selection = selection_from_js(start, end);
    Ok(toggler.toggle(text, selection, op).into())
}

#[wasm_bindgen(js_name = renderMarkup)]
pub fn render_markup(text: &str) -> String {
    folio_text::render(text)
}

#[wasm_bindgen(js_name = renderPlainText)]
pub fn render_plain_text(text: &str) -> String {
    folio_text::render_plain(text)
}

/// Names of the operations already applied at `start..end`.
#[wasm_bindgen(js_name = reversedActions)]
pub fn reversed_actions(text: &str, start: i32, end: i32) -> Vec<JsValue> {
    let states =
        folio_text::action_states(text, selection_from_js(start, end));
    FormattingOperation::iter()
        .filter(|op| states.get(op) == Some(&ActionState::Reversed))
        .map(|op| JsValue::from_str(op.as_ref()))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn operations_are_parsed_by_name() {
        assert_eq!(parse_operation("bullet").ok(), Some(FormattingOperation::Bullet));
        assert!(matches!(
            parse_operation("strike"),
            Err(BindingError::UnknownOperation(name)) if name == "strike"
        ));
    }

    #[test]
    fn negative_offsets_clamp_to_the_start() {
        assert_eq!(selection_from_js(-1, 1), Selection::new(0, 1));
        assert_eq!(selection_from_js(-5, -2), Selection::caret(0));
        assert_eq!(selection_from_js(2, 7), Selection::new(2, 7));
    }

    #[test]
    fn toggling_from_a_negative_offset_wraps_from_the_start() {
        let Ok(update) = toggle_formatting("abc", -1, 1, "bold", false) else {
            panic!("bold is a known operation");
        };
        assert_eq!(update.text(), "**a**bc");
        assert_eq!((update.start(), update.end()), (2, 3));
    }

    #[test]
    fn results_are_converted_to_js_offsets() {
        let result = folio_text::toggle(
            "",
            Selection::caret(0),
            FormattingOperation::Bold,
        );
        let update = ToggleUpdate::from(result);
        assert_eq!(update.text(), "**bold text**");
        assert_eq!((update.start(), update.end()), (2, 11));
    }
}
