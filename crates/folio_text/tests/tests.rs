// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

use indoc::indoc;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

use folio_text::{
    action_states, escape, render, render_plain, sanitize, toggle,
    ActionState, FormattingOperation, Selection, ToggleBehavior,
    ToggleOptions, Toggler,
};

const PLAIN_SAMPLES: [&str; 8] = [
    "hello",
    "a < b && c > d",
    "quotes \"double\" and 'single'",
    "multi\nline\n\ntext",
    "unicode café ☕ \u{1F4A9} 中文",
    "math: 2 * 3 = 6",
    "   leading spaces",
    "trailing newline\n",
];

const HOSTILE_SAMPLES: [&str; 6] = [
    "<script>alert(1)</script>",
    "**<script>**",
    "<SCRIPT SRC=x></SCRIPT>",
    "*<img src=x onerror=alert(1)>*",
    "__<svg onload=alert(1)>__",
    "• <a href=\"javascript:alert(1)\">x</a>",
];

#[test]
fn text_without_markers_renders_as_escaped_text() {
    for sample in PLAIN_SAMPLES {
        assert_that(&render(sample))
            .named(sample)
            .is_equal_to(escape(sample).replace('\n', "<br>"));
    }
}

#[test]
fn author_markup_never_becomes_a_tag() {
    for sample in HOSTILE_SAMPLES {
        let html = render(sample).to_lowercase();
        for tag in ["<script", "<img", "<svg", "<a "] {
            assert!(!html.contains(tag), "{sample:?} rendered {html:?}");
        }
    }
}

#[test]
fn rendered_output_is_a_fixed_point_of_sanitizing() {
    let raw = indoc! {"
        Led **design** & *delivery* of __three__ launches.
        • One
        • **Two**
        1. first
        2. second
        done"};
    let html = render(raw);
    assert_that(&sanitize(&html)).is_equal_to(html.clone());
    assert_that(&render(raw)).is_equal_to(html);
}

#[test]
fn the_profile_example_renders() {
    let raw = indoc! {"
        Built **MVP** in *3 months*.
        • Shipped to 10k users
        • Cut churn 20%"};
    assert_that(&render(raw)).is_equal_to(String::from(
        "Built <strong>MVP</strong> in <em>3 months</em>.<br>\
         <ul><li>Shipped to 10k users</li><li>Cut churn 20%</li></ul>",
    ));
}

#[test]
fn bold_on_an_empty_buffer() {
    let result = toggle("", Selection::caret(0), FormattingOperation::Bold);
    assert_that(&result.text).is_equal_to(String::from("**bold text**"));
    assert_that(&result.selection).is_equal_to(Selection::new(2, 11));
}

#[test]
fn bold_on_a_selection() {
    let result =
        toggle("hello world", Selection::new(0, 5), FormattingOperation::Bold);
    assert_that(&result.text).is_equal_to(String::from("**hello** world"));
    assert_that(&result.selection).is_equal_to(Selection::new(2, 7));
}

#[test]
fn toggled_text_renders_the_formatting_it_asked_for() {
    let cases = [
        (FormattingOperation::Bold, "<strong>word</strong>"),
        (FormattingOperation::Italic, "<em>word</em>"),
        (FormattingOperation::Underline, "<u>word</u>"),
        (FormattingOperation::Bullet, "<ul><li>word</li></ul>"),
        (FormattingOperation::Number, "<ol><li>word</li></ol>"),
    ];
    for (op, expected) in cases {
        let result = toggle("word", Selection::new(0, 4), op);
        assert_that(&render(&result.text))
            .named(op.as_ref())
            .is_equal_to(String::from(expected));
    }
}

#[test]
fn selection_always_stays_inside_the_new_text() {
    let text = "ab\n• c\u{1F4A9}d";
    for op in FormattingOperation::iter() {
        for (start, end) in [(0, 0), (1, 2), (5, 7), (6, 6), (0, 99), (99, 3)]
        {
            let result = toggle(text, Selection::new(start, end), op);
            let len: usize = result.text.encode_utf16().count();
            let Selection { start, end } = result.selection;
            assert!(start <= end, "{op} {start}..{end}");
            assert!(end.as_usize() <= len, "{op} {end} > {len}");
        }
    }
}

#[test]
fn toggling_never_mutates_its_input() {
    let text = String::from("keep **me**");
    for op in FormattingOperation::iter() {
        let _ = toggle(&text, Selection::new(5, 9), op);
    }
    assert_that(&text).is_equal_to(String::from("keep **me**"));
}

#[test]
fn toggle_mode_round_trips() {
    let toggler = Toggler::new(ToggleOptions {
        behavior: ToggleBehavior::Toggle,
        ..Default::default()
    });
    let original = "some words";
    let on = toggler.toggle(
        original,
        Selection::new(5, 10),
        FormattingOperation::Italic,
    );
    assert_that(&on.text).is_equal_to(String::from("some *words*"));
    let off = toggler.toggle(&on.text, on.selection, FormattingOperation::Italic);
    assert_that(&off.text).is_equal_to(String::from(original));
    assert_that(&off.selection).is_equal_to(Selection::new(5, 10));
}

#[test]
fn action_states_follow_toggles() {
    let result = toggle("x", Selection::new(0, 1), FormattingOperation::Bold);
    let states = action_states(&result.text, result.selection);
    assert_that(&states[&FormattingOperation::Bold])
        .is_equal_to(ActionState::Reversed);
    assert_that(&states[&FormattingOperation::Italic])
        .is_equal_to(ActionState::Enabled);
}

#[test]
fn plain_rendering_matches_the_visible_text() {
    let raw = "• **Shipped** to *10k* users\r\n2. __fast__";
    assert_that(&render_plain(raw))
        .is_equal_to(String::from("Shipped to 10k users\nfast"));
}

#[test]
fn operations_parse_from_their_names() {
    for op in FormattingOperation::iter() {
        let parsed: FormattingOperation =
            op.as_ref().parse().expect("name should parse");
        assert_that(&parsed).is_equal_to(op);
    }
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    /// Any character that can't start a marker or a list prefix, with the
    /// characters an HTML parser treats specially drawn more often.
    fn marker_free_char() -> impl Strategy<Value = char> {
        prop_oneof![
            4 => any::<char>().prop_filter("marker character", |c| {
                !['*', '_', '•', '.'].contains(c)
            }),
            1 => prop::sample::select(vec![
                '\r', '\n', '\0', '\u{FEFF}', '<', '>', '&', '"', '\'', ' ',
            ]),
        ]
    }

    fn marker_free_text() -> impl Strategy<Value = String> {
        prop::collection::vec(marker_free_char(), 0..40)
            .prop_map(|chars| chars.into_iter().collect())
    }

    fn any_text() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                any::<char>(),
                prop::sample::select(vec![
                    '*', '_', '•', '.', '1', ' ', '\n', '\r', '\u{1F4A9}',
                ]),
            ],
            0..40,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    fn operation() -> impl Strategy<Value = FormattingOperation> {
        prop::sample::select(FormattingOperation::iter().collect::<Vec<_>>())
    }

    /// The escaped text with CRLF line ends read as LF and every line
    /// break as `<br>`.
    fn escaped_with_breaks(text: &str) -> String {
        let escaped = escape(text).replace("&#13;\n", "\n");
        let escaped = escaped.strip_suffix("&#13;").unwrap_or(&escaped);
        escaped.replace('\n', "<br>")
    }

    proptest! {
        #[test]
        fn marker_free_text_renders_as_escaped_text(text in marker_free_text()) {
            prop_assert_eq!(render(&text), escaped_with_breaks(&text));
        }

        #[test]
        fn spliced_scripts_never_survive(
            before in any::<String>(),
            after in any::<String>(),
            script in prop::sample::select(vec![
                "<script>",
                "<SCRIPT>",
                "<ScRiPt src=x>",
                "**<script>**",
            ]),
        ) {
            let html = render(&format!("{before}{script}{after}"));
            prop_assert!(!html.to_lowercase().contains("<script"));
        }

        #[test]
        fn rendered_output_survives_sanitizing_unchanged(text in any_text()) {
            let html = render(&text);
            prop_assert_eq!(sanitize(&html), html);
        }

        #[test]
        fn toggled_selection_is_ordered_and_on_char_boundaries(
            text in any_text(),
            start in 0..64usize,
            end in 0..64usize,
            op in operation(),
            toggling in any::<bool>(),
        ) {
            let behavior = if toggling {
                ToggleBehavior::Toggle
            } else {
                ToggleBehavior::Wrap
            };
            let toggler = Toggler::new(ToggleOptions {
                behavior,
                ..Default::default()
            });
            let result = toggler.toggle(&text, Selection::new(start, end), op);

            let units: Vec<u16> = result.text.encode_utf16().collect();
            let Selection { start, end } = result.selection;
            prop_assert!(start <= end);
            prop_assert!(end.as_usize() <= units.len());
            prop_assert!(String::from_utf16(&units[..start.as_usize()]).is_ok());
            prop_assert!(String::from_utf16(&units[..end.as_usize()]).is_ok());
        }
    }
}
